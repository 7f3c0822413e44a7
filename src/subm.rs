use std::ops::{Range, RangeFull};

use errors::*;

use Matrix;


pub trait SubMatrix<R, S> {
    type Output;

    fn subm(&self, rngr: R, rngc: S) -> Result<Self::Output>;
}

#[inline]
fn fill_subm(src: &Matrix, startr: usize, endr: usize, startc: usize, endc: usize)
        -> Result<Matrix> {
    if endr > src.nrows() || endc > src.ncols() || startr > endr || startc > endc {
        return Err(index_error(format!("sub-matrix [{}..{}, {}..{}] out of bounds for {}x{} matrix",
            startr, endr, startc, endc, src.nrows(), src.ncols())));
    }
    let mut vec: Vec<f64> = Vec::with_capacity((endr - startr) * (endc - startc));
    for r in startr..endr {
        vec.extend_from_slice(&src.row_slice(r)[startc..endc]);
    }
    Matrix::from_vec(vec, endr - startr, endc - startc)
}

impl SubMatrix<Range<usize>, Range<usize>> for Matrix {
    type Output = Matrix;

    fn subm(&self, rngr: Range<usize>, rngc: Range<usize>) -> Result<Matrix> {
        fill_subm(self, rngr.start, rngr.end, rngc.start, rngc.end)
    }
}
impl SubMatrix<Range<usize>, RangeFull> for Matrix {
    type Output = Matrix;

    fn subm(&self, rngr: Range<usize>, _: RangeFull) -> Result<Matrix> {
        fill_subm(self, rngr.start, rngr.end, 0, self.ncols())
    }
}
impl SubMatrix<RangeFull, Range<usize>> for Matrix {
    type Output = Matrix;

    fn subm(&self, _: RangeFull, rngc: Range<usize>) -> Result<Matrix> {
        fill_subm(self, 0, self.nrows(), rngc.start, rngc.end)
    }
}
impl SubMatrix<usize, RangeFull> for Matrix {
    type Output = Matrix;

    fn subm(&self, rngr: usize, _: RangeFull) -> Result<Matrix> {
        fill_subm(self, rngr, rngr + 1, 0, self.ncols())
    }
}
impl SubMatrix<RangeFull, usize> for Matrix {
    type Output = Matrix;

    fn subm(&self, _: RangeFull, rngc: usize) -> Result<Matrix> {
        fill_subm(self, 0, self.nrows(), rngc, rngc + 1)
    }
}

impl Matrix {
    /// The matrix left after deleting row `row` and column `col`.
    pub fn minor(&self, row: usize, col: usize) -> Result<Matrix> {
        if row >= self.nrows() || col >= self.ncols() {
            return Err(index_error(format!("minor ({}, {}) out of bounds for {}x{} matrix",
                row, col, self.nrows(), self.ncols())));
        }
        if self.nrows() == 1 || self.ncols() == 1 {
            return Err(shape_error(format!("minor of a {}x{} matrix would be empty",
                self.nrows(), self.ncols())));
        }
        let mut vec: Vec<f64> = Vec::with_capacity((self.nrows() - 1) * (self.ncols() - 1));
        for r in (0..self.nrows()).filter(|&r| r != row) {
            vec.extend(self.row_slice(r).iter().enumerate()
                .filter(|&(c, _)| c != col)
                .map(|(_, &f)| f));
        }
        Matrix::from_vec(vec, self.nrows() - 1, self.ncols() - 1)
    }
}
