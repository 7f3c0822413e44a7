use std::fmt;
use std::iter::FromIterator;
use std::ops::Index;
use std::slice;
use std::vec;

use rand::{self, Rng};

use errors::*;

/// A fixed-length sequence of real numbers.
///
/// The length is set at construction and never changes; there are no mutating methods.
#[derive(Debug, Clone, PartialEq)]
pub struct Vector {
    components: Vec<f64>,
}

impl Vector {
    pub fn new(components: Vec<f64>) -> Vector {
        Vector { components: components }
    }
    pub fn zeros(n: usize) -> Vector {
        Vector::new(vec![0.0; n])
    }
    pub fn rand(n: usize) -> Vector {
        let mut rng = rand::thread_rng();
        (0..n).map(|_| rng.gen::<f64>()).collect()
    }

    pub fn len(&self) -> usize { self.components.len() }
    pub fn is_empty(&self) -> bool { self.components.is_empty() }
    pub fn as_slice(&self) -> &[f64] { &self.components[..] }
    pub fn iter(&self) -> slice::Iter<f64> { self.components.iter() }

    pub fn get(&self, i: usize) -> Result<f64> {
        self.components.get(i).cloned().ok_or_else(|| index_error(
            format!("component {} out of bounds for vector of dimension {}", i, self.len())))
    }

    /// Euclidean norm of the vector. The empty vector has magnitude zero.
    pub fn magnitude(&self) -> f64 {
        self.iter().fold(0.0f64, |acc, f| acc + f * f).sqrt()
    }

    /// Unit vector pointing the same way as `self`.
    pub fn direction(&self) -> Result<Vector> {
        let m = self.magnitude();
        if m == 0.0 {
            return Err(Error::from_kind(ErrorKind::ZeroMagnitude));
        }
        Ok(self.map(|f| f / m))
    }

    pub fn map<F>(&self, f: F) -> Vector where F: Fn(f64) -> f64 {
        self.iter().map(|&x| f(x)).collect()
    }

    pub fn into_vec(self) -> Vec<f64> {
        self.components
    }
}

impl Index<usize> for Vector {
    type Output = f64;

    fn index(&self, i: usize) -> &f64 {
        &self.components[i]
    }
}

impl From<Vec<f64>> for Vector {
    fn from(v: Vec<f64>) -> Vector {
        Vector::new(v)
    }
}
impl<'a> From<&'a [f64]> for Vector {
    fn from(s: &'a [f64]) -> Vector {
        Vector::new(s.to_vec())
    }
}

impl FromIterator<f64> for Vector {
    fn from_iter<I: IntoIterator<Item = f64>>(iter: I) -> Vector {
        Vector::new(iter.into_iter().collect())
    }
}

impl IntoIterator for Vector {
    type Item = f64;
    type IntoIter = vec::IntoIter<f64>;

    fn into_iter(self) -> vec::IntoIter<f64> {
        self.components.into_iter()
    }
}
impl<'a> IntoIterator for &'a Vector {
    type Item = &'a f64;
    type IntoIter = slice::Iter<'a, f64>;

    fn into_iter(self) -> slice::Iter<'a, f64> {
        self.components.iter()
    }
}

impl fmt::Display for Vector {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "<")?;
        for (i, c) in self.iter().enumerate() {
            if i > 0 {
                write!(f, ", ")?;
            }
            write!(f, "{}", c)?;
        }
        write!(f, ">")
    }
}
