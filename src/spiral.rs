//! Counter-clockwise spiral reading.
//!
//! The walk starts on the top-left cell heading down column 0, then turns
//! right, up, left, and down again each time it reaches the edge of the
//! unvisited region. Every turn retires the edge that was just finished, so
//! the region shrinks by one on exactly one side per turn and each ring of
//! the matrix is read exactly once.

use crate::Matrix;

/// Direction of travel, in the order the walk cycles through them.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Heading {
    Down,
    Right,
    Up,
    Left,
}

/// The rectangle of cells not yet retired, inclusive on every side.
///
/// `x` is the column and `y` the row.
#[derive(Debug)]
struct Bounds {
    min_x: usize,
    max_x: usize,
    min_y: usize,
    max_y: usize,
}

impl Bounds {
    /// If the walk has reached the edge it is heading for, retires the edge it
    /// has just finished and returns the next heading.
    fn turn(&mut self, heading: Heading, x: usize, y: usize) -> Option<Heading> {
        match heading {
            Heading::Down if y == self.max_y => {
                self.min_x += 1;
                Some(Heading::Right)
            }
            Heading::Right if x == self.max_x => {
                self.max_y -= 1;
                Some(Heading::Up)
            }
            Heading::Up if y == self.min_y => {
                self.max_x -= 1;
                Some(Heading::Left)
            }
            Heading::Left if x == self.min_x => {
                self.min_y += 1;
                Some(Heading::Down)
            }
            _ => None,
        }
    }
}

/// Reads `matrix` in counter-clockwise spiral order from the top-left corner.
///
/// The result holds every cell exactly once. A single row is read right to
/// left, and a single column top to bottom. An empty matrix yields an empty
/// sequence.
///
/// # Examples
///
/// ```
/// use spiral_matrix::{spiral_read, Matrix};
///
/// let m = Matrix::from_rows(vec![vec![1, 2, 3], vec![4, 5, 6], vec![7, 8, 9]]).unwrap();
/// assert_eq!(spiral_read(&m), vec![1, 4, 7, 8, 9, 6, 3, 2, 5]);
///
/// let row = Matrix::from_rows(vec![vec![1, 2, 3, 4]]).unwrap();
/// assert_eq!(spiral_read(&row), vec![4, 3, 2, 1]);
/// ```
pub fn spiral_read<T: Clone>(matrix: &Matrix<T>) -> Vec<T> {
    let (rows, cols) = (matrix.rows(), matrix.cols());

    if rows == 0 || cols == 0 {
        return Vec::new();
    }
    if cols == 1 {
        return (0..rows).map(|y| matrix.at(y, 0).clone()).collect();
    }
    if rows == 1 {
        return (0..cols).rev().map(|x| matrix.at(0, x).clone()).collect();
    }

    let total = rows * cols;
    let mut bounds = Bounds {
        min_x: 0,
        max_x: cols - 1,
        min_y: 0,
        max_y: rows - 1,
    };
    let (mut x, mut y) = (0, 0);
    let mut heading = Heading::Down;

    let mut spiral = Vec::with_capacity(total);
    spiral.push(matrix.at(y, x).clone());

    while spiral.len() < total {
        match heading {
            Heading::Down => y += 1,
            Heading::Right => x += 1,
            Heading::Up => y -= 1,
            Heading::Left => x -= 1,
        }
        spiral.push(matrix.at(y, x).clone());

        // Unvisited cells always lie inside the shrunk bounds, so stopping
        // before the final turn keeps every bound in range.
        if spiral.len() == total {
            break;
        }
        if let Some(next) = bounds.turn(heading, x, y) {
            heading = next;
        }
    }

    spiral
}

#[cfg(test)]
mod tests {
    use super::*;

    fn matrix(rows: Vec<Vec<u64>>) -> Matrix<u64> {
        Matrix::from_rows(rows).unwrap()
    }

    /// rows x cols matrix holding 0, 1, 2, ... row-major.
    fn counting(rows: usize, cols: usize) -> Matrix<u64> {
        let cells = (0..(rows * cols) as u64).collect();
        Matrix::from_cells(cells, rows, cols)
    }

    #[test]
    fn three_by_three_reads_outer_ring_then_center() {
        let m = matrix(vec![vec![1, 2, 3], vec![4, 5, 6], vec![7, 8, 9]]);
        assert_eq!(spiral_read(&m), vec![1, 4, 7, 8, 9, 6, 3, 2, 5]);
    }

    #[test]
    fn two_by_two_goes_down_first() {
        let m = matrix(vec![vec![1, 2], vec![3, 4]]);
        assert_eq!(spiral_read(&m), vec![1, 3, 4, 2]);
    }

    #[test]
    fn four_by_four_reads_two_rings() {
        let m = counting(4, 4);
        assert_eq!(
            spiral_read(&m),
            vec![0, 4, 8, 12, 13, 14, 15, 11, 7, 3, 2, 1, 5, 9, 10, 6]
        );
    }

    #[test]
    fn single_row_is_reversed() {
        let m = matrix(vec![vec![1, 2, 3, 4]]);
        assert_eq!(spiral_read(&m), vec![4, 3, 2, 1]);
    }

    #[test]
    fn single_column_keeps_row_order() {
        let m = matrix(vec![vec![1], vec![2], vec![3]]);
        assert_eq!(spiral_read(&m), vec![1, 2, 3]);
    }

    #[test]
    fn single_cell() {
        assert_eq!(spiral_read(&matrix(vec![vec![9]])), vec![9]);
    }

    #[test]
    fn empty_matrix_reads_nothing() {
        assert!(spiral_read(&matrix(Vec::new())).is_empty());
        assert!(spiral_read(&matrix(vec![Vec::new(), Vec::new()])).is_empty());
    }

    #[test]
    fn wide_matrix_ends_on_inner_row() {
        // 0  1  2  3  4
        // 5  6  7  8  9
        // 10 11 12 13 14
        assert_eq!(
            spiral_read(&counting(3, 5)),
            vec![0, 5, 10, 11, 12, 13, 14, 9, 4, 3, 2, 1, 6, 7, 8]
        );
    }

    #[test]
    fn tall_matrix_ends_on_inner_column() {
        // 0  1  2
        // 3  4  5
        // 6  7  8
        // 9  10 11
        // 12 13 14
        assert_eq!(
            spiral_read(&counting(5, 3)),
            vec![0, 3, 6, 9, 12, 13, 14, 11, 8, 5, 2, 1, 4, 7, 10]
        );
    }

    #[test]
    fn works_for_non_copy_cells() {
        let m = Matrix::from_rows(vec![
            vec!["a".to_string(), "b".to_string()],
            vec!["c".to_string(), "d".to_string()],
        ])
        .unwrap();
        assert_eq!(spiral_read(&m), vec!["a", "c", "d", "b"]);
    }

    mod proptests {
        use super::*;
        use proptest::prelude::*;

        proptest! {
            /// Property: every cell of any rectangle is emitted exactly once
            #[test]
            fn proptest_spiral_visits_every_cell_once(rows in 0usize..12, cols in 1usize..12) {
                let m = counting(rows, cols);
                let mut spiral = spiral_read(&m);

                prop_assert_eq!(spiral.len(), rows * cols);
                spiral.sort_unstable();
                let expected: Vec<u64> = (0..(rows * cols) as u64).collect();
                prop_assert_eq!(spiral, expected);
            }

            /// Property: the walk starts at the top-left cell and, with at least
            /// two columns and two rows, continues down column 0
            #[test]
            fn proptest_spiral_starts_down_column_zero(rows in 2usize..12, cols in 2usize..12) {
                let m = counting(rows, cols);
                let spiral = spiral_read(&m);
                let column: Vec<u64> = (0..rows).map(|y| *m.at(y, 0)).collect();

                prop_assert_eq!(&spiral[..rows], &column[..]);
                prop_assert_eq!(spiral[rows], *m.at(rows - 1, 1));
            }
        }
    }
}
