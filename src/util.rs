//! Free functions on vectors and matrices that are useful on their own and within the crate.

use errors::*;

use Dot;
use Vector;

/// 1 if `i == j`, 0 otherwise.
pub fn kronecker_delta(i: usize, j: usize) -> f64 {
    if i == j { 1.0 } else { 0.0 }
}

/// The 3D Levi-Civita symbol over 1-based indices.
///
/// +1 for an even permutation of (1, 2, 3), -1 for an odd permutation, 0 otherwise (some index
/// repeated or out of range).
pub fn levi_civita(i: usize, j: usize, k: usize) -> f64 {
    match (i, j, k) {
        (1, 2, 3) | (3, 1, 2) | (2, 3, 1) => 1.0,
        (1, 3, 2) | (2, 1, 3) | (3, 2, 1) => -1.0,
        _ => 0.0,
    }
}

/// The inner (dot, scalar) product of `a` and `b`.
pub fn inner_product(a: &Vector, b: &Vector) -> Result<f64> {
    a.dot(b)
}
pub fn dot_product(a: &Vector, b: &Vector) -> Result<f64> {
    inner_product(a, b)
}
pub fn scalar_product(a: &Vector, b: &Vector) -> Result<f64> {
    inner_product(a, b)
}

/// The cross product of two 3-dimensional vectors.
pub fn cross_product(a: &Vector, b: &Vector) -> Result<Vector> {
    if a.len() != 3 || b.len() != 3 {
        return Err(dimension_mismatch(format!(
            "Cross product is only defined for 3-dimensional vectors (got {} and {}).",
            a.len(), b.len())));
    }
    Ok(vector![
        a[1] * b[2] - a[2] * b[1],
        a[2] * b[0] - a[0] * b[2],
        a[0] * b[1] - a[1] * b[0]
    ])
}
pub fn vector_product(a: &Vector, b: &Vector) -> Result<Vector> {
    cross_product(a, b)
}

/// a · (b × c)
pub fn scalar_triple_product(a: &Vector, b: &Vector, c: &Vector) -> Result<f64> {
    inner_product(a, &cross_product(b, c)?)
}

/// a × (b × c), computed as (a · c) b - (a · b) c
pub fn vector_triple_product(a: &Vector, b: &Vector, c: &Vector) -> Result<Vector> {
    if a.len() != 3 || b.len() != 3 || c.len() != 3 {
        return Err(dimension_mismatch(format!(
            "Vector triple product is only defined for 3-dimensional vectors \
            (got {}, {} and {}).", a.len(), b.len(), c.len())));
    }
    inner_product(a, c)? * b - inner_product(a, b)? * c
}

/// Standard basis vector: 1 at `direction`, 0 elsewhere.
pub fn e(direction: usize, dimensions: usize) -> Result<Vector> {
    if direction >= dimensions {
        return Err(index_error(format!("direction {} out of range for {} dimensions",
            direction, dimensions)));
    }
    Ok((0..dimensions).map(|i| kronecker_delta(i, direction)).collect())
}

pub fn zero_vector(dimensions: usize) -> Vector {
    Vector::zeros(dimensions)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_kronecker_delta() {
        assert_eq!(kronecker_delta(2, 2), 1.0);
        assert_eq!(kronecker_delta(2, 3), 0.0);
    }

    #[test]
    fn test_levi_civita() {
        assert_eq!(levi_civita(1, 2, 3), 1.0);
        assert_eq!(levi_civita(2, 3, 1), 1.0);
        assert_eq!(levi_civita(2, 1, 3), -1.0);
        assert_eq!(levi_civita(3, 2, 1), -1.0);
        assert_eq!(levi_civita(1, 3, 3), 0.0);
        assert_eq!(levi_civita(0, 1, 2), 0.0);
    }

    #[test]
    fn test_inner_product() {
        assert_eq!(inner_product(&vector![1, 2, 3], &vector![2, 7, 9]).unwrap(), 43.0);
        assert_eq!(dot_product(&vector![1, 4, 9], &vector![1, 4, 3]).unwrap(), 44.0);
        assert_eq!(scalar_product(&vector![1, 4, 9], &vector![1, 4, 3]).unwrap(), 44.0);
        assert!(dot_product(&vector![1], &vector![1, 2]).is_err());
    }

    #[test]
    fn test_cross_product() {
        let (i, j, k) = (e(0, 3).unwrap(), e(1, 3).unwrap(), e(2, 3).unwrap());
        assert_eq!(cross_product(&i, &j).unwrap(), k);
        assert_eq!(vector_product(&j, &i).unwrap(), vector![0, 0, -1]);
        assert_eq!(cross_product(&vector![1, 2, 5], &vector![-2, 4, 6]).unwrap(),
            vector![-8, -16, 8]);

        match *cross_product(&vector![1, 2], &vector![3, 4]).unwrap_err().kind() {
            ErrorKind::DimensionMismatch(_) => {}
            ref k => panic!("expected dimension mismatch, got {:?}", k),
        }
    }

    #[test]
    fn test_triple_products() {
        let a = vector![1, 2, 3];
        let b = vector![4, 5, 6];
        let c = vector![7, 8, 10];
        // a . (b x c) equals the determinant of the matrix with rows a, b, c
        let det = ::Matrix::from_rows(vec![a.clone(), b.clone(), c.clone()]).unwrap()
            .determinant().unwrap();
        assert_eq!(scalar_triple_product(&a, &b, &c).unwrap(), det);

        let direct = cross_product(&a, &cross_product(&b, &c).unwrap()).unwrap();
        assert_eq!(vector_triple_product(&a, &b, &c).unwrap(), direct);

        assert!(vector_triple_product(&a, &b, &vector![1, 2]).is_err());
    }

    #[test]
    fn test_e() {
        assert_eq!(e(0, 3).unwrap(), vector![1, 0, 0]);
        assert_eq!(e(7, 9).unwrap(), vector![0, 0, 0, 0, 0, 0, 0, 1, 0]);
        assert_eq!(e(0, 1).unwrap(), vector![1]);
        match *e(3, 3).unwrap_err().kind() {
            ErrorKind::IndexError(_) => {}
            ref k => panic!("expected index error, got {:?}", k),
        }
    }

    #[test]
    fn test_zero_vector() {
        assert_eq!(zero_vector(5), vector![0, 0, 0, 0, 0]);
        assert_eq!(zero_vector(5).magnitude(), 0.0);
    }
}
