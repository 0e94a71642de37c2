use crate::{ModelError, ModelResult};

/// Dense row-major 2D array of `f64` cells.
///
/// The shape is checked on construction, so every row has exactly `cols` cells.
#[derive(Debug, Clone, PartialEq)]
pub struct Matrix {
    rows: usize,
    cols: usize,
    data: Vec<f64>,
}

impl Matrix {
    /// Creates a matrix from row-major `data`.
    pub fn new(rows: usize, cols: usize, data: Vec<f64>) -> ModelResult<Self> {
        let expected = cell_count(rows, cols)?;
        if data.len() != expected {
            return Err(ModelError::MatrixShape {
                rows,
                cols,
                expected,
                actual: data.len(),
            });
        }
        Ok(Self { rows, cols, data })
    }

    /// Creates a matrix from nested rows; all rows must have the length of the first.
    ///
    /// # Examples
    /// ```
    /// use xlog_model::Matrix;
    ///
    /// let m = Matrix::from_rows(vec![vec![1.0, 2.0], vec![3.0, 4.0]]).unwrap();
    /// assert_eq!(m.get(1, 0), Some(3.0));
    /// ```
    pub fn from_rows(rows: Vec<Vec<f64>>) -> ModelResult<Self> {
        let cols = rows.first().map_or(0, Vec::len);
        let mut data = Vec::with_capacity(rows.len() * cols);

        for (row, cells) in rows.iter().enumerate() {
            if cells.len() != cols {
                return Err(ModelError::RaggedRow {
                    row,
                    expected: cols,
                    actual: cells.len(),
                });
            }
            data.extend_from_slice(cells);
        }
        Ok(Self {
            rows: rows.len(),
            cols,
            data,
        })
    }

    /// A `rows x cols` matrix of zeros.
    pub fn zeros(rows: usize, cols: usize) -> ModelResult<Self> {
        let cells = cell_count(rows, cols)?;
        Ok(Self {
            rows,
            cols,
            data: vec![0.0; cells],
        })
    }

    #[inline]
    pub fn rows(&self) -> usize {
        self.rows
    }

    #[inline]
    pub fn cols(&self) -> usize {
        self.cols
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    pub fn get(&self, row: usize, col: usize) -> Option<f64> {
        if row >= self.rows || col >= self.cols {
            return None;
        }
        self.data.get(row * self.cols + col).copied()
    }

    pub fn set(&mut self, row: usize, col: usize, value: f64) -> bool {
        if row >= self.rows || col >= self.cols {
            return false;
        }
        match self.data.get_mut(row * self.cols + col) {
            Some(cell) => {
                *cell = value;
                true
            }
            None => false,
        }
    }

    pub fn row(&self, row: usize) -> Option<&[f64]> {
        if row >= self.rows {
            return None;
        }
        let start = row * self.cols;
        self.data.get(start..start + self.cols)
    }

    /// Rows in order, each `cols` cells wide.
    pub fn iter_rows(&self) -> impl Iterator<Item = &[f64]> + '_ {
        (0..self.rows).filter_map(move |r| self.row(r))
    }
}

fn cell_count(rows: usize, cols: usize) -> ModelResult<usize> {
    rows.checked_mul(cols).ok_or(ModelError::MatrixTooLarge { rows, cols })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_checks_cell_count() {
        let m = Matrix::new(2, 3, vec![1.0; 6]).unwrap();
        assert_eq!((m.rows(), m.cols()), (2, 3));

        let err = Matrix::new(2, 3, vec![1.0; 5]).unwrap_err();
        assert_eq!(
            err,
            ModelError::MatrixShape {
                rows: 2,
                cols: 3,
                expected: 6,
                actual: 5,
            }
        );
    }

    #[test]
    fn oversized_shapes_are_rejected() {
        let err = Matrix::new(usize::MAX, 2, Vec::new()).unwrap_err();
        assert_eq!(
            err,
            ModelError::MatrixTooLarge {
                rows: usize::MAX,
                cols: 2,
            }
        );

        assert!(matches!(
            Matrix::zeros(2, usize::MAX),
            Err(ModelError::MatrixTooLarge { .. })
        ));
    }

    #[test]
    fn from_rows_rejects_ragged_input() {
        let err = Matrix::from_rows(vec![vec![1.0, 2.0], vec![3.0]]).unwrap_err();
        assert_eq!(
            err,
            ModelError::RaggedRow {
                row: 1,
                expected: 2,
                actual: 1,
            }
        );
    }

    #[test]
    fn rows_are_row_major() {
        let m = Matrix::new(2, 2, vec![1.0, 2.0, 3.0, 4.0]).unwrap();
        let rows: Vec<&[f64]> = m.iter_rows().collect();
        assert_eq!(rows, vec![&[1.0, 2.0][..], &[3.0, 4.0][..]]);
        assert_eq!(m.get(0, 1), Some(2.0));
        assert_eq!(m.get(2, 0), None);
        assert_eq!(m.row(5), None);
    }

    #[test]
    fn set_updates_in_bounds_only() {
        let mut m = Matrix::zeros(1, 2).unwrap();
        assert!(m.set(0, 1, 9.5));
        assert!(!m.set(0, 2, 1.0));
        assert_eq!(m.row(0), Some(&[0.0, 9.5][..]));
    }

    #[test]
    fn empty_shapes() {
        let m = Matrix::from_rows(Vec::new()).unwrap();
        assert!(m.is_empty());
        assert_eq!(m.iter_rows().count(), 0);

        let no_cols = Matrix::zeros(3, 0).unwrap();
        assert!(no_cols.is_empty());
        assert_eq!(no_cols.iter_rows().count(), 3);
    }
}
