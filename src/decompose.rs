use Matrix;
use Vector;

/// Index of the first non-zero component of `v`, or `v.len()` for a zero vector.
pub fn leading_entry(v: &Vector) -> usize {
    v.iter().position(|&f| f != 0.0).unwrap_or(v.len())
}

/// How forward elimination picks the pivot row for each column.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Pivoting {
    /// First remaining row with a non-zero entry in the column.
    FirstNonZero,
    /// Remaining row with the largest absolute entry in the column.
    Partial,
}

/// Result of forward elimination on a row-major buffer.
#[derive(Debug, Clone)]
pub struct Elimination {
    pub echelon: Matrix,
    /// Number of row swaps performed; each swap flips the sign of the determinant.
    pub swaps: usize,
}

// Reduces `data` (row-major, `nrows` x `ncols`) to row echelon form in place. Returns the number
// of row swaps.
fn forward_eliminate(data: &mut [f64], nrows: usize, ncols: usize, pivoting: Pivoting) -> usize {
    let mut swaps = 0;
    let mut pivot_row = 0;
    for col in 0..ncols {
        if pivot_row >= nrows { break; }

        let candidates = pivot_row..nrows;
        let pivot = match pivoting {
            Pivoting::FirstNonZero => {
                candidates.clone().find(|&r| data[r * ncols + col] != 0.0)
            }
            Pivoting::Partial => {
                candidates.clone()
                    .filter(|&r| data[r * ncols + col] != 0.0)
                    .fold(None, |best: Option<usize>, r| match best {
                        Some(b) if data[b * ncols + col].abs() >= data[r * ncols + col].abs()
                            => Some(b),
                        _ => Some(r),
                    })
            }
        };
        let pivot = match pivot {
            Some(p) => p,
            None => continue,
        };

        if pivot != pivot_row {
            for c in 0..ncols {
                data.swap(pivot * ncols + c, pivot_row * ncols + c);
            }
            swaps += 1;
        }

        let p = data[pivot_row * ncols + col];
        for r in (pivot_row + 1)..nrows {
            let factor = data[r * ncols + col] / p;
            if factor == 0.0 { continue; }
            for c in col..ncols {
                data[r * ncols + c] -= factor * data[pivot_row * ncols + c];
            }
            // exact zero below the pivot, regardless of rounding
            data[r * ncols + col] = 0.0;
        }
        pivot_row += 1;
    }
    swaps
}

impl Matrix {
    /// Forward (Gaussian) elimination with the given pivoting strategy.
    pub fn eliminate(&self, pivoting: Pivoting) -> Elimination {
        let (m, n) = self.dims();
        debug!("forward elimination of {}x{} matrix ({:?} pivoting)", m, n, pivoting);

        let mut data = self.as_slice().to_vec();
        let swaps = forward_eliminate(&mut data, m, n, pivoting);
        Elimination {
            echelon: self.with_data(data),
            swaps: swaps,
        }
    }

    /// Row echelon form, pivoting on the first row with a non-zero entry in each column.
    pub fn row_echelon(&self) -> Matrix {
        self.eliminate(Pivoting::FirstNonZero).echelon
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_leading_entry() {
        assert_eq!(leading_entry(&vector![0, 0, 3, 0]), 2);
        assert_eq!(leading_entry(&vector![1, 0]), 0);
        assert_eq!(leading_entry(&vector![0, 0, 0]), 3);
        assert_eq!(leading_entry(&vector![]), 0);
    }

    #[test]
    fn test_row_echelon() {
        let a = mat![1, 2, 3; 4, 5, 6; 7, 8, 9];
        assert_fpvec_eq!(a.row_echelon(), mat![1, 2, 3; 0, -3, -6; 0, 0, 0]);
    }

    #[test]
    fn test_row_echelon_swaps() {
        let a = mat![0, 1; 1, 0];
        let elim = a.eliminate(Pivoting::FirstNonZero);
        assert_eq!(elim.echelon, mat![1, 0; 0, 1]);
        assert_eq!(elim.swaps, 1);
    }

    #[test]
    fn test_row_echelon_leading_entries_increase() {
        let a = mat![0, 0, 2, 1; 0, 3, 1, 1; 1, 1, 1, 1; 2, 2, 2, 2];
        let e = a.row_echelon();
        let leads: Vec<usize> = e.rows().map(|r| leading_entry(&r)).collect();
        for w in leads.windows(2) {
            assert!(w[0] < w[1] || w[1] == e.ncols());
        }
    }

    #[test]
    fn test_partial_pivoting() {
        let a = mat![1, 2; 4, 3];
        let elim = a.eliminate(Pivoting::Partial);
        assert_eq!(elim.swaps, 1);
        assert_eq!(elim.echelon.row(0).unwrap(), vector![4, 3]);
        assert_fp_eq!(elim.echelon.get(1, 1).unwrap(), 2.0 - 0.75);
        assert_eq!(elim.echelon.get(1, 0).unwrap(), 0.0);
    }

    #[test]
    fn test_non_square() {
        let a = mat![2, 4, 6; 1, 2, 4];
        let e = a.row_echelon();
        assert_eq!(e.dims(), (2, 3));
        assert_fpvec_eq!(e, mat![2, 4, 6; 0, 0, 1]);
    }
}
