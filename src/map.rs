use Matrix;
use Vector;

impl Matrix {
    pub fn map<F>(&self, f: F) -> Matrix where F: Fn(f64) -> f64 {
        self.with_data(self.iter().map(|&x| f(x)).collect())
    }

    /// Applies `f` to each column, producing one value per column.
    pub fn map_columns<F>(&self, f: F) -> Vector where F: Fn(Vector) -> f64 {
        self.columns().map(f).collect()
    }

    /// Applies `f` to each row, producing one value per row.
    pub fn map_rows<F>(&self, f: F) -> Vector where F: Fn(Vector) -> f64 {
        self.rows().map(f).collect()
    }
}
