use std::f64;

use Matrix;
use Vector;

/// Valid vector norm types
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Norm {
    /// L1 (absolute value) norm
    L1,
    /// L2 (Euclidean) norm
    L2,
    /// L2 norm, squared (to avoid potentially expensive square root operations)
    L2Sqrd,
    /// Infinity (maximum) norm
    Inf,
    /// Negative infinity (minimum) norm
    NegInf,
    /// General p-norm with specified coefficient
    P(f64),
}

/// Trait providing vector norms
pub trait VectorNorm {
    /// Compute the specified norm type on the vector.
    ///
    /// # Panics
    /// Panics for `Norm::P(p)` with `p < 1`.
    fn norm(&self, norm_type: Norm) -> f64;
}

fn entrywise_norm<'a, I>(values: I, norm_type: Norm) -> f64 where I: Iterator<Item = &'a f64> {
    match norm_type {
        Norm::L1     => {
            values.fold(0.0, |acc, f| acc + f.abs())
        }
        Norm::L2     => {
            values.fold(0.0f64, |acc, f| acc + f * f).sqrt()
        }
        Norm::L2Sqrd => {
            values.fold(0.0, |acc, f| acc + f * f)
        }
        Norm::Inf    => {
            values.fold(0.0, |acc, f| f.abs().max(acc))
        }
        Norm::NegInf => {
            values.fold(f64::INFINITY, |acc, f| f.abs().min(acc))
        }
        Norm::P(p)   => {
            assert!(p >= 1.0, "p-norm requires p >= 1 (got {})", p);
            values.fold(0.0f64, |acc, f| acc + f.abs().powf(p)).powf(1.0 / p)
        }
    }
}

impl VectorNorm for Vector {
    fn norm(&self, norm_type: Norm) -> f64 {
        entrywise_norm(self.iter(), norm_type)
    }
}

/// Valid matrix norm types
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum MatNorm {
    /// L1-Induced matrix norm (maximum absolute column sum)
    InducedL1,
    /// Infinity-induced matrix norm (maximum absolute row sum)
    InducedInf,
    /// General entrywise matrix norm, using specified vector norm
    Entrywise(Norm),
    /// Frobenius norm (identical to Entrywise(L2))
    Frobenius,
    /// Max norm (identical to Entrywise(Inf))
    Max,
}

/// Provides method for computing matrix norms.
pub trait MatrixNorm {
    /// Compute the specified matrix norm type
    fn matrix_norm(&self, norm_type: MatNorm) -> f64;
}

impl MatrixNorm for Matrix {
    fn matrix_norm(&self, norm_type: MatNorm) -> f64 {
        match norm_type {
            MatNorm::InducedL1     => {
                self.map_columns(|col| col.norm(Norm::L1)).iter().fold(0.0, |acc, &f| f.max(acc))
            }
            MatNorm::InducedInf    => {
                self.map_rows(|row| row.norm(Norm::L1)).iter().fold(0.0, |acc, &f| f.max(acc))
            }
            MatNorm::Entrywise(nt) => { entrywise_norm(self.iter(), nt) }
            MatNorm::Frobenius     => { entrywise_norm(self.iter(), Norm::L2) }
            MatNorm::Max           => { entrywise_norm(self.iter(), Norm::Inf) }
        }
    }
}
