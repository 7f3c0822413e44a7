// Example:
// let v = vector![1, 4, 9];
// assert_eq!(v.len(), 3);
#[macro_export]
macro_rules! vector {
    [$( $x:expr ),* $(,)*] => {{
        let v: Vec<f64> = vec![$( $x as f64 ),*];
        $crate::Vector::new(v)
    }};
}

// Example:
// let a = mat![1, 2, 3; 4, 7, 6; 7, 8, 9];
// assert_eq!(a.dims(), (3, 3));
//
// Panics if the rows are of unequal length.
#[macro_export]
macro_rules! mat {
    [$( $( $x:expr ),* );*] => {{
        let rows: Vec<Vec<f64>> = vec![$( vec![$( $x as f64 ),*] ),*];
        match $crate::Matrix::from_rows(rows) {
            Ok(m) => m,
            Err(e) => panic!("mat!: {}", e),
        }
    }}
}

#[cfg(test)]
mod tests {
    use {Matrix, Vector};

    #[test]
    fn test_vector_macro() {
        let v = vector![1, 4, 9];
        assert_eq!(v.len(), 3);
        assert_eq!(v, Vector::new(vec![1.0, 4.0, 9.0]));

        let v = vector![1.5, 2, -3,];
        assert_eq!(v.as_slice(), &[1.5, 2.0, -3.0]);

        let empty = vector![];
        assert!(empty.is_empty());
    }

    #[test]
    fn test_mat_macro() {
        let a = mat![1, 2, 3, 4; 5, 6, 7, 8];
        assert_eq!(a.dims(), (2, 4));

        assert_eq!(a.get(0, 0).unwrap(), 1.0);
        assert_eq!(a.get(0, 3).unwrap(), 4.0);
        assert_eq!(a.get(1, 0).unwrap(), 5.0);
        assert_eq!(a.get(1, 3).unwrap(), 8.0);

        let a = mat![1, 2; 3.0, 4; 5.5, 6];
        assert_eq!(a.dims(), (3, 2));
        assert_eq!(a.get(2, 0).unwrap(), 5.5);
        assert_eq!(a, Matrix::from_vec(vec![1.0, 2.0, 3.0, 4.0, 5.5, 6.0], 3, 2).unwrap());
    }

    #[test]
    #[should_panic(expected = "mat!")]
    fn test_mat_macro_ragged() {
        mat![1, 2; 3];
    }
}
