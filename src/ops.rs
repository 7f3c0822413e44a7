use std::ops::{Add, Mul, Sub, Neg};

use errors::*;

use Matrix;
use Vector;


impl Vector {
    fn elementwise<F>(&self, rhs: &Vector, f: F) -> Result<Vector> where F: Fn(f64, f64) -> f64 {
        if self.len() != rhs.len() {
            return Err(dimension_mismatch(format!(
                "Vectors must have the same dimension ({} != {}).", self.len(), rhs.len())));
        }
        Ok(self.iter().zip(rhs.iter()).map(|(&l, &r)| f(l, r)).collect())
    }
}
impl Matrix {
    fn elementwise<F>(&self, rhs: &Matrix, f: F) -> Result<Matrix> where F: Fn(f64, f64) -> f64 {
        if self.dims() != rhs.dims() {
            return Err(dimension_mismatch(format!(
                "Matrices must have the same dimensions ({}x{} != {}x{}).",
                self.nrows(), self.ncols(), rhs.nrows(), rhs.ncols())));
        }
        Ok(self.with_data(self.iter().zip(rhs.iter()).map(|(&l, &r)| f(l, r)).collect()))
    }
}

// element-wise addition and subtraction; shape mismatches surface as `Err`
macro_rules! bin_inner {
    ($T:ident, $rhs:ty, $name:ident, $op:tt) => {
        type Output = Result<$T>;

        fn $name(self, rhs: $rhs) -> Result<$T> {
            $T::elementwise(&self, &rhs, |l, r| l $op r)
        }
    }
}
macro_rules! implement_bin {
    ($trait_:ident, $name:ident, $op:tt, $T:ident) => {
        impl $trait_<$T> for $T {
            bin_inner!($T, $T, $name, $op);
        }
        impl<'a> $trait_<&'a $T> for $T {
            bin_inner!($T, &'a $T, $name, $op);
        }
        impl<'a> $trait_<$T> for &'a $T {
            bin_inner!($T, $T, $name, $op);
        }
        impl<'a, 'b> $trait_<&'b $T> for &'a $T {
            bin_inner!($T, &'b $T, $name, $op);
        }
    }
}
implement_bin!(Add, add, +, Vector);
implement_bin!(Sub, sub, -, Vector);
implement_bin!(Add, add, +, Matrix);
implement_bin!(Sub, sub, -, Matrix);

// negation and scaling never fail
macro_rules! implement_unary {
    ($T:ident) => {
        impl Neg for $T {
            type Output = $T;

            fn neg(self) -> $T {
                self.map(|e| -e)
            }
        }
        impl<'a> Neg for &'a $T {
            type Output = $T;

            fn neg(self) -> $T {
                self.map(|e| -e)
            }
        }

        impl Mul<f64> for $T {
            type Output = $T;

            fn mul(self, rhs: f64) -> $T {
                self.map(|e| e * rhs)
            }
        }
        impl<'a> Mul<f64> for &'a $T {
            type Output = $T;

            fn mul(self, rhs: f64) -> $T {
                self.map(|e| e * rhs)
            }
        }
        impl Mul<$T> for f64 {
            type Output = $T;

            fn mul(self, rhs: $T) -> $T {
                rhs.map(|e| self * e)
            }
        }
        impl<'a> Mul<&'a $T> for f64 {
            type Output = $T;

            fn mul(self, rhs: &'a $T) -> $T {
                rhs.map(|e| self * e)
            }
        }
    }
}
implement_unary!(Vector);
implement_unary!(Matrix);


/// Inner product of two operands.
pub trait Dot<T> {
    type Output;

    fn dot(&self, rhs: &T) -> Self::Output;
}
impl Dot<Vector> for Vector {
    type Output = Result<f64>;

    fn dot(&self, rhs: &Vector) -> Result<f64> {
        if self.len() != rhs.len() {
            return Err(dimension_mismatch(format!(
                "Vectors must have the same dimension to take a dot product ({} != {}).",
                self.len(), rhs.len())));
        }
        Ok(self.iter().zip(rhs.iter()).map(|(l, r)| l * r).fold(0.0, |acc, f| acc + f))
    }
}

/// Multiplication dispatched on the type of the right-hand operand.
///
/// `Matrix × Vector` yields a `Vector`, `Matrix × Matrix` a `Matrix`, and `Matrix × f64` a
/// scaled `Matrix`. The `*` operator forwards here.
pub trait Multiply<Rhs> {
    type Output;

    fn multiply(&self, rhs: &Rhs) -> Result<Self::Output>;
}

impl Multiply<Vector> for Matrix {
    type Output = Vector;

    fn multiply(&self, v: &Vector) -> Result<Vector> {
        debug!("multiplying {}x{} matrix by vector of dimension {}",
            self.nrows(), self.ncols(), v.len());
        if v.len() != self.width() {
            return Err(dimension_mismatch(OPERAND_MISMATCH));
        }
        self.rows().map(|row| row.dot(v)).collect()
    }
}
impl Multiply<Matrix> for Matrix {
    type Output = Matrix;

    fn multiply(&self, b: &Matrix) -> Result<Matrix> {
        debug!("multiplying {}x{} matrix by {}x{} matrix",
            self.nrows(), self.ncols(), b.nrows(), b.ncols());
        if self.width() != b.height() {
            return Err(dimension_mismatch(OPERAND_MISMATCH));
        }
        let columns: Vec<Vector> = b.columns().collect();
        let mut out: Vec<f64> = Vec::with_capacity(self.nrows() * b.ncols());
        for row in self.rows() {
            for col in &columns {
                out.push(row.dot(col)?);
            }
        }
        Matrix::from_vec(out, self.nrows(), b.ncols())
    }
}
impl Multiply<f64> for Matrix {
    type Output = Matrix;

    fn multiply(&self, s: &f64) -> Result<Matrix> {
        Ok(self * *s)
    }
}

macro_rules! mul_inner {
    ($rhs:ty, $base:ty, $out:ty) => {
        type Output = Result<$out>;

        fn mul(self, rhs: $rhs) -> Result<$out> {
            <Matrix as Multiply<$base>>::multiply(&self, &rhs)
        }
    }
}
macro_rules! implement_mul {
    ($lhs:ty, $rhs:ty, $base:ty, $out:ty) => {
        impl Mul<$rhs> for $lhs {
            mul_inner!($rhs, $base, $out);
        }
    };
    ($lhs:ty, $rhs:ty, $base:ty, $out:ty, $( $lifetime:tt ),* ) => {
        impl<$($lifetime),*> Mul<$rhs> for $lhs {
            mul_inner!($rhs, $base, $out);
        }
    };
}
implement_mul!(Matrix, Vector, Vector, Vector);
implement_mul!(Matrix, &'a Vector, Vector, Vector, 'a);
implement_mul!(&'a Matrix, Vector, Vector, Vector, 'a);
implement_mul!(&'a Matrix, &'b Vector, Vector, Vector, 'a, 'b);

implement_mul!(Matrix, Matrix, Matrix, Matrix);
implement_mul!(Matrix, &'a Matrix, Matrix, Matrix, 'a);
implement_mul!(&'a Matrix, Matrix, Matrix, Matrix, 'a);
implement_mul!(&'a Matrix, &'b Matrix, Matrix, Matrix, 'a, 'b);

impl Matrix {
    /// Raises a square matrix to a non-negative integer power. `pow(0)` is the identity.
    pub fn pow(&self, n: u32) -> Result<Matrix> {
        if !self.is_square() {
            return Err(shape_error(format!(
                "Powers are only defined for square matrices (got {}x{}).",
                self.nrows(), self.ncols())));
        }
        let mut result = Matrix::identity(self.nrows())?;
        for _ in 0..n {
            result = (&result * self)?;
        }
        Ok(result)
    }
}
