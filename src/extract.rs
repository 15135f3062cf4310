//! Digit extraction and square-matrix construction.
//!
//! Arbitrary text is scanned for maximal runs of ASCII digits. Every other
//! character, including `-` and `.`, is only a separator. Runs of any length
//! are kept exactly as [`BigUint`] values, which are laid out row-major in a
//! square matrix when, and only when, their count is a perfect square.

use num_bigint::BigUint;

use crate::{ExtractionError, Matrix};

/// Extracts every maximal run of ASCII digits from `text`, in order.
///
/// # Examples
///
/// ```
/// use spiral_matrix::{extract_integers, BigUint};
///
/// let values = extract_integers("a12b7c9d");
/// assert_eq!(values, vec![BigUint::from(12u32), BigUint::from(7u32), BigUint::from(9u32)]);
/// assert_eq!(extract_integers("-3.50").len(), 2);
/// assert!(extract_integers("none").is_empty());
/// ```
pub fn extract_integers(text: &str) -> Vec<BigUint> {
    let mut values = Vec::new();
    let mut pending: Option<usize> = None;

    for (index, ch) in text.char_indices() {
        match (ch.is_ascii_digit(), pending) {
            (true, None) => pending = Some(index),
            (false, Some(start)) => {
                values.push(parse_numeral(&text[start..index]));
                pending = None;
            }
            _ => {}
        }
    }

    if let Some(start) = pending {
        values.push(parse_numeral(&text[start..]));
    }

    values
}

/// Parses a run the caller guarantees to be ASCII digits only.
fn parse_numeral(digits: &str) -> BigUint {
    match digits.parse::<u64>() {
        Ok(small) => BigUint::from(small),
        Err(_) => digits
            .bytes()
            .fold(BigUint::default(), |acc, b| acc * 10u32 + u32::from(b - b'0')),
    }
}

/// Returns `r` such that `r * r == n`, or `None` if `n` is not a perfect square.
///
/// The float estimate is corrected with integer arithmetic, so the answer is
/// exact for every `usize`.
///
/// # Examples
///
/// ```
/// use spiral_matrix::exact_square_root;
///
/// assert_eq!(exact_square_root(16), Some(4));
/// assert_eq!(exact_square_root(35), None);
/// assert_eq!(exact_square_root(0), Some(0));
/// ```
pub fn exact_square_root(n: usize) -> Option<usize> {
    let mut root = (n as f64).sqrt() as usize;

    while root.checked_mul(root).map_or(true, |sq| sq > n) {
        root -= 1;
    }
    while (root + 1).checked_mul(root + 1).is_some_and(|sq| sq <= n) {
        root += 1;
    }

    (root * root == n).then_some(root)
}

/// Extracts the integers in `text` and arranges them into a square matrix.
///
/// Row `i` holds the integers `i * r .. (i + 1) * r` in order of appearance,
/// where `r` is the exact square root of the count.
///
/// # Errors
///
/// - [`ExtractionError::NoData`] if `text` contains no digits
/// - [`ExtractionError::NotSquare`] if the count is not a perfect square
///
/// # Examples
///
/// ```
/// use spiral_matrix::{build_matrix, BigUint, ExtractionError};
///
/// let m = build_matrix("1 2 3 4").unwrap();
/// assert_eq!(m.rows(), 2);
/// assert_eq!(m.get(1, 0), Some(&BigUint::from(3u32)));
///
/// assert_eq!(build_matrix(""), Err(ExtractionError::NoData));
/// ```
pub fn build_matrix(text: &str) -> Result<Matrix<BigUint>, ExtractionError> {
    let values = extract_integers(text);
    if values.is_empty() {
        return Err(ExtractionError::NoData);
    }

    let count = values.len();
    let side = exact_square_root(count).ok_or(ExtractionError::NotSquare { count })?;

    Ok(Matrix::from_cells(values, side, side))
}
