use errors::*;

use Matrix;
use decompose::Pivoting;

/// Algorithm used to compute a determinant.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum DeterminantMethod {
    /// Recursive Laplace expansion along the first row. Exponential in the matrix size.
    Cofactor,
    /// Gaussian elimination with partial pivoting; the product of the pivots, sign-corrected for
    /// row swaps.
    Elimination,
}
impl Default for DeterminantMethod {
    fn default() -> DeterminantMethod { DeterminantMethod::Cofactor }
}

impl Matrix {
    /// Determinant by cofactor expansion. Fails with a shape error for non-square matrices.
    pub fn determinant(&self) -> Result<f64> {
        self.determinant_with(DeterminantMethod::default())
    }

    pub fn determinant_with(&self, method: DeterminantMethod) -> Result<f64> {
        if !self.is_square() {
            return Err(shape_error(format!(
                "Determinant only defined for square matrices (got {}x{}).",
                self.nrows(), self.ncols())));
        }
        debug!("determinant of {}x{} matrix by {:?}", self.nrows(), self.ncols(), method);
        match method {
            DeterminantMethod::Cofactor    => { self.cofactor_det() }
            DeterminantMethod::Elimination => { Ok(self.elimination_det()) }
        }
    }

    fn cofactor_det(&self) -> Result<f64> {
        let n = self.nrows();
        if n == 1 {
            return self.get(0, 0);
        }
        trace!("cofactor expansion of {}x{} minor", n, n);
        let mut det = 0.0;
        for j in 0..n {
            let a = self.get(0, j)?;
            let sign = if j % 2 == 0 { 1.0 } else { -1.0 };
            det += sign * a * self.minor(0, j)?.cofactor_det()?;
        }
        Ok(det)
    }

    fn elimination_det(&self) -> f64 {
        let elim = self.eliminate(Pivoting::Partial);
        let n = self.nrows();
        let diag = (0..n).fold(1.0, |acc, i| acc * elim.echelon.as_slice()[i * n + i]);
        if elim.swaps % 2 == 0 { diag } else { -diag }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_determinant() {
        let a = mat![1, 2, 3; 4, 7, 6; 7, 8, 9];
        assert_eq!(a.determinant().unwrap(), -24.0);
        assert_fp_eq!(a.determinant_with(DeterminantMethod::Elimination).unwrap(), -24.0, 1e-9);
    }

    #[test]
    fn test_small() {
        assert_eq!(mat![5].determinant().unwrap(), 5.0);
        assert_eq!(mat![1, 2; 3, 4].determinant().unwrap(), -2.0);
        assert_eq!(mat![1, 2, 3; 4, 5, 6; 7, 8, 9].determinant().unwrap(), 0.0);
        assert_eq!(mat![0, 1; 1, 0].determinant().unwrap(), -1.0);
        assert_eq!(mat![0, 1; 1, 0].determinant_with(DeterminantMethod::Elimination).unwrap(),
            -1.0);
    }

    #[test]
    fn test_identity() {
        for n in 1..7 {
            let eye = Matrix::identity(n).unwrap();
            assert_eq!(eye.determinant().unwrap(), 1.0);
            assert_eq!(eye.determinant_with(DeterminantMethod::Elimination).unwrap(), 1.0);
        }
    }

    #[test]
    fn test_singular_elimination() {
        let a = mat![1, 2, 3; 2, 4, 6; 1, 0, 1];
        assert_eq!(a.determinant().unwrap(), 0.0);
        assert_fp_eq!(a.determinant_with(DeterminantMethod::Elimination).unwrap(), 0.0, 1e-12);
    }

    #[test]
    fn test_four_by_four() {
        let a = mat![3, 2, 0, 1; 4, 0, 1, 2; 3, 0, 2, 1; 9, 2, 3, 1];
        assert_eq!(a.determinant().unwrap(), 24.0);
        assert_fp_eq!(a.determinant_with(DeterminantMethod::Elimination).unwrap(), 24.0, 1e-9);
    }

    #[test]
    fn test_non_finite_minor() {
        // 0 * inf still contributes its NaN term
        let a = Matrix::from_rows(vec![vec![0.0, 1.0], vec![2.0, ::std::f64::INFINITY]]).unwrap();
        assert!(a.determinant().unwrap().is_nan());

        let b = Matrix::from_rows(vec![vec![0.0, 1.0], vec![2.0, 3.0]]).unwrap();
        assert_eq!(b.determinant().unwrap(), -2.0);
    }

    #[test]
    fn test_non_square() {
        match *mat![1, 2, 3; 4, 5, 6].determinant().unwrap_err().kind() {
            ErrorKind::ShapeError(_) => {}
            ref k => panic!("expected shape error, got {:?}", k),
        }
        assert!(mat![1, 2].determinant_with(DeterminantMethod::Elimination).is_err());
    }

    #[test]
    fn test_default_method() {
        assert_eq!(DeterminantMethod::default(), DeterminantMethod::Cofactor);
    }
}
