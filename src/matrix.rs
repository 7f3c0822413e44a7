use std::fmt;
use std::slice;

use rand::{self, Rng};

use errors::*;
use Vector;

/// A dense, immutable matrix of `f64` values.
///
/// Elements are stored contiguously in row-major order. A matrix always has at least one row
/// and one column, and every row has the same length.
#[derive(Debug, Clone, PartialEq)]
pub struct Matrix {
    data: Vec<f64>,
    nrows: usize,
    ncols: usize,
}

// Flattens a sequence of lines (rows or columns) into one buffer, checking that each line has
// the same length. Returns the buffer, the number of lines and the line length.
fn flatten_lines<I, L>(lines: I, what: &str) -> Result<(Vec<f64>, usize, usize)>
        where I: IntoIterator<Item = L>, L: IntoIterator<Item = f64> {
    let mut data: Vec<f64> = Vec::new();
    let (mut count, mut len) = (0, 0);
    for line in lines {
        let start = data.len();
        data.extend(line);
        let line_len = data.len() - start;
        if count == 0 {
            len = line_len;
        } else if line_len != len {
            return Err(shape_error(format!(
                "All {} must be the same length ({} {} has {} elements, expected {})",
                what, &what[..what.len() - 1], count, line_len, len)));
        }
        count += 1;
    }
    Ok((data, count, len))
}

fn buffer_len(nrows: usize, ncols: usize) -> Result<usize> {
    nrows.checked_mul(ncols).ok_or_else(|| shape_error(
        format!("{}x{} matrix is too large to allocate", nrows, ncols)))
}

impl Matrix {
    /// Builds a matrix from row-major `data`.
    pub fn from_vec(data: Vec<f64>, nrows: usize, ncols: usize) -> Result<Matrix> {
        if nrows == 0 || ncols == 0 {
            return Err(shape_error(format!(
                "matrix must have at least one row and one column (got {}x{})", nrows, ncols)));
        }
        if data.len() != nrows * ncols {
            return Err(shape_error(format!(
                "{} elements cannot fill a {}x{} matrix", data.len(), nrows, ncols)));
        }
        Ok(Matrix {
            data: data,
            nrows: nrows,
            ncols: ncols,
        })
    }

    /// Builds a matrix from a sequence of rows. Each row can be anything that yields `f64`s:
    /// a `Vec<f64>`, an array, a `Vector` or a lazy iterator.
    pub fn from_rows<I, R>(rows: I) -> Result<Matrix>
            where I: IntoIterator<Item = R>, R: IntoIterator<Item = f64> {
        let (data, nrows, ncols) = flatten_lines(rows, "rows")?;
        Matrix::from_vec(data, nrows, ncols)
    }

    /// Builds a matrix from a sequence of columns.
    pub fn from_columns<I, C>(columns: I) -> Result<Matrix>
            where I: IntoIterator<Item = C>, C: IntoIterator<Item = f64> {
        let (data, ncols, nrows) = flatten_lines(columns, "columns")?;
        // column-major buffer; transposing yields the row-major layout
        Ok(Matrix::from_vec(data, ncols, nrows)?.transpose())
    }

    pub fn zeros(nrows: usize, ncols: usize) -> Result<Matrix> {
        Matrix::from_vec(vec![0.0; buffer_len(nrows, ncols)?], nrows, ncols)
    }
    pub fn identity(n: usize) -> Result<Matrix> {
        let mut data = vec![0.0; buffer_len(n, n)?];
        for i in 0..n {
            data[i * n + i] = 1.0;
        }
        Matrix::from_vec(data, n, n)
    }
    pub fn rand(nrows: usize, ncols: usize) -> Result<Matrix> {
        let len = buffer_len(nrows, ncols)?;
        let mut rng = rand::thread_rng();

        let v: Vec<f64> = (0..len).map(|_| rng.gen()).collect();
        Matrix::from_vec(v, nrows, ncols)
    }

    pub fn nrows(&self) -> usize { self.nrows }
    pub fn ncols(&self) -> usize { self.ncols }
    pub fn dims(&self) -> (usize, usize) { (self.nrows, self.ncols) }
    /// Number of columns.
    pub fn width(&self) -> usize { self.ncols }
    /// Number of rows.
    pub fn height(&self) -> usize { self.nrows }
    pub fn is_square(&self) -> bool { self.nrows == self.ncols }

    /// Iterates over the elements in row-major order.
    pub fn iter(&self) -> slice::Iter<f64> {
        self.data.iter()
    }
    pub fn as_slice(&self) -> &[f64] {
        &self.data[..]
    }

    pub fn get(&self, r: usize, c: usize) -> Result<f64> {
        if r >= self.nrows || c >= self.ncols {
            return Err(index_error(format!("element ({}, {}) out of bounds for {}x{} matrix",
                r, c, self.nrows, self.ncols)));
        }
        Ok(self.data[r * self.ncols + c])
    }

    pub fn row(&self, i: usize) -> Result<Vector> {
        if i >= self.nrows {
            return Err(index_error(format!("row {} out of bounds for matrix with {} rows",
                i, self.nrows)));
        }
        Ok(Vector::from(self.row_slice(i)))
    }
    pub fn column(&self, j: usize) -> Result<Vector> {
        if j >= self.ncols {
            return Err(index_error(format!("column {} out of bounds for matrix with {} columns",
                j, self.ncols)));
        }
        Ok(self.column_iter(j).collect())
    }
    pub fn rows(&self) -> Rows {
        Rows { mat: self, next: 0 }
    }
    pub fn columns(&self) -> Columns {
        Columns { mat: self, next: 0 }
    }

    pub fn transpose(&self) -> Matrix {
        let mut data = Vec::with_capacity(self.data.len());
        for j in 0..self.ncols {
            data.extend(self.column_iter(j));
        }
        Matrix {
            data: data,
            nrows: self.ncols,
            ncols: self.nrows,
        }
    }
    #[inline]
    pub fn t(&self) -> Matrix { self.transpose() }

    /// Appends the columns of `other` to the right of this matrix.
    pub fn augment(&self, other: &Matrix) -> Result<Matrix> {
        if self.nrows != other.nrows {
            return Err(dimension_mismatch(format!(
                "Cannot augment a matrix of height {} with a matrix of height {}.",
                self.nrows, other.nrows)));
        }
        let mut data = Vec::with_capacity(self.data.len() + other.data.len());
        for i in 0..self.nrows {
            data.extend_from_slice(self.row_slice(i));
            data.extend_from_slice(other.row_slice(i));
        }
        Matrix::from_vec(data, self.nrows, self.ncols + other.ncols)
    }
    /// Appends `v` as a new rightmost column.
    pub fn augment_vector(&self, v: &Vector) -> Result<Matrix> {
        if self.nrows != v.len() {
            return Err(dimension_mismatch(format!(
                "Cannot augment a matrix of height {} with a vector of dimension {}.",
                self.nrows, v.len())));
        }
        self.augment(&Matrix::from_vec(v.as_slice().to_vec(), v.len(), 1)?)
    }

    // Matrix of the same shape as `self` holding `data`.
    pub(crate) fn with_data(&self, data: Vec<f64>) -> Matrix {
        debug_assert_eq!(data.len(), self.data.len());
        Matrix {
            data: data,
            nrows: self.nrows,
            ncols: self.ncols,
        }
    }
    #[inline]
    pub(crate) fn row_slice(&self, i: usize) -> &[f64] {
        &self.data[i * self.ncols..(i + 1) * self.ncols]
    }
    #[inline]
    fn column_iter<'a>(&'a self, j: usize) -> impl Iterator<Item = f64> + 'a {
        self.data.iter().skip(j).step_by(self.ncols).cloned()
    }
}

impl fmt::Display for Matrix {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "(")?;
        for (i, row) in self.rows().enumerate() {
            if i > 0 {
                write!(f, ", ")?;
            }
            write!(f, "{}", row)?;
        }
        write!(f, ")")
    }
}

pub struct Rows<'a> {
    mat: &'a Matrix,
    next: usize,
}
impl<'a> Iterator for Rows<'a> {
    type Item = Vector;

    fn next(&mut self) -> Option<Vector> {
        if self.next >= self.mat.nrows { return None }
        let row = Vector::from(self.mat.row_slice(self.next));
        self.next += 1;
        Some(row)
    }
}

pub struct Columns<'a> {
    mat: &'a Matrix,
    next: usize,
}
impl<'a> Iterator for Columns<'a> {
    type Item = Vector;

    fn next(&mut self) -> Option<Vector> {
        if self.next >= self.mat.ncols { return None }
        let col = self.mat.column_iter(self.next).collect();
        self.next += 1;
        Some(col)
    }
}
