#[macro_use] extern crate error_chain;
#[macro_use] extern crate log;
extern crate rand;
#[cfg(test)] #[macro_use] extern crate unittest;

pub mod errors;
pub use errors::{Error, ErrorKind, Result};

#[macro_use] mod macro_def;

pub mod vector;
pub use vector::Vector;

pub mod matrix;
pub use matrix::{Matrix, Rows, Columns};

mod ops;
pub use ops::{Dot, Multiply};

mod subm;
pub use subm::SubMatrix;

mod map;

pub mod decompose;
pub use decompose::leading_entry;

pub mod det;
pub use det::DeterminantMethod;

pub mod norm;
pub use norm::{Norm, MatNorm, VectorNorm, MatrixNorm};

pub mod util;
pub use util::{dot_product, inner_product, scalar_product, cross_product, vector_product,
    scalar_triple_product, vector_triple_product, kronecker_delta, levi_civita, e,
    zero_vector};
