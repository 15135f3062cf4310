use std::fmt;

use crate::ShapeError;

/// An immutable, rectangular, row-major grid.
///
/// A `Matrix` can only be obtained from [`build_matrix`](crate::build_matrix)
/// (always square) or from [`Matrix::from_rows`] (any rectangle). Both paths
/// check that every row has the same length, so code holding a `Matrix` never
/// has to deal with ragged input.
///
/// # Examples
///
/// ```
/// use spiral_matrix::Matrix;
///
/// let m = Matrix::from_rows(vec![vec![1, 2, 3], vec![4, 5, 6]]).unwrap();
/// assert_eq!(m.rows(), 2);
/// assert_eq!(m.cols(), 3);
/// assert_eq!(m.get(1, 0), Some(&4));
/// assert_eq!(m.row(0), Some(&[1, 2, 3][..]));
/// ```
#[derive(Clone, PartialEq, Eq)]
pub struct Matrix<T> {
    // Row-major, len == rows * cols
    cells: Vec<T>,
    rows: usize,
    cols: usize,
}

impl<T> Matrix<T> {
    /// Builds a matrix from a list of rows.
    ///
    /// # Errors
    ///
    /// Returns [`ShapeError::Ragged`] if any row differs in length from the first.
    pub fn from_rows(rows: Vec<Vec<T>>) -> Result<Self, ShapeError> {
        let height = rows.len();
        let width = rows.first().map_or(0, Vec::len);

        let mut cells = Vec::with_capacity(height * width);
        for (index, row) in rows.into_iter().enumerate() {
            if row.len() != width {
                return Err(ShapeError::Ragged {
                    row: index,
                    expected: width,
                    found: row.len(),
                });
            }
            cells.extend(row);
        }

        Ok(Self::from_cells(cells, height, width))
    }

    /// Wraps row-major cells whose shape the caller has already checked.
    pub(crate) fn from_cells(cells: Vec<T>, rows: usize, cols: usize) -> Self {
        debug_assert_eq!(cells.len(), rows * cols);
        Self { cells, rows, cols }
    }

    /// Number of rows.
    pub fn rows(&self) -> usize {
        self.rows
    }

    /// Number of columns. Zero when the matrix has no rows.
    pub fn cols(&self) -> usize {
        self.cols
    }

    /// Total number of cells.
    pub fn len(&self) -> usize {
        self.cells.len()
    }

    /// Returns `true` if the matrix has no cells.
    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    /// Returns the cell at `(row, col)`, or `None` if out of bounds.
    pub fn get(&self, row: usize, col: usize) -> Option<&T> {
        if row < self.rows && col < self.cols {
            self.cells.get(row * self.cols + col)
        } else {
            None
        }
    }

    /// Returns row `index` as a slice, or `None` if out of bounds.
    pub fn row(&self, index: usize) -> Option<&[T]> {
        if index < self.rows {
            let start = index * self.cols;
            Some(&self.cells[start..start + self.cols])
        } else {
            None
        }
    }

    /// Iterates over the rows, top to bottom.
    pub fn iter_rows(&self) -> impl Iterator<Item = &[T]> {
        (0..self.rows).filter_map(move |i| self.row(i))
    }

    /// Consumes the matrix and returns its rows.
    pub fn into_rows(self) -> Vec<Vec<T>> {
        if self.cols == 0 {
            return (0..self.rows).map(|_| Vec::new()).collect();
        }

        let mut rows = Vec::with_capacity(self.rows);
        let mut cells = self.cells.into_iter();
        for _ in 0..self.rows {
            rows.push(cells.by_ref().take(self.cols).collect());
        }
        rows
    }

    /// Cell at `(row, col)` for indices the caller knows are in bounds.
    pub(crate) fn at(&self, row: usize, col: usize) -> &T {
        &self.cells[row * self.cols + col]
    }
}

impl<T: fmt::Debug> fmt::Debug for Matrix<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.iter_rows()).finish()
    }
}
