//! End-to-end flow: text → integers → square matrix → spiral.
//!
//! The pure half lives in [`spiral_from_text`]. [`spiral_from_url`] puts a
//! [`Fetcher`] in front of it and is the only place in the flow that logs
//! failures at `warn`.

use num_bigint::BigUint;

use crate::{build_matrix, spiral_read, Error, ExtractionError, Fetcher};

/// Builds the square matrix held in `text` and reads it as a counter-clockwise spiral.
///
/// # Errors
///
/// Any [`ExtractionError`] from [`build_matrix`].
///
/// # Examples
///
/// ```
/// use spiral_matrix::{spiral_from_text, BigUint, ExtractionError};
///
/// let spiral = spiral_from_text("1 2 3 4").unwrap();
/// assert_eq!(spiral, [1u32, 3, 4, 2].map(BigUint::from));
/// assert_eq!(
///     spiral_from_text("a12b7c9d"),
///     Err(ExtractionError::NotSquare { count: 3 })
/// );
/// ```
pub fn spiral_from_text(text: &str) -> Result<Vec<BigUint>, ExtractionError> {
    let matrix = build_matrix(text)?;
    Ok(spiral_read(&matrix))
}

/// Fetches `url` and reads the square matrix in its body as a counter-clockwise spiral.
///
/// # Errors
///
/// - [`Error::Fetch`] if `fetcher` fails; the body is never inspected
/// - [`Error::Extraction`] if the body does not hold a square matrix
///
/// # Examples
///
/// ```
/// use spiral_matrix::{spiral_from_url, BigUint, RecordingFetcher};
///
/// # tokio::runtime::Builder::new_current_thread().build().unwrap().block_on(async {
/// let fetcher = RecordingFetcher::new().with_body(
///     "https://example.com/m",
///     "+---+---+\n| 1 | 2 |\n+---+---+\n| 3 | 4 |\n+---+---+",
/// );
///
/// let spiral = spiral_from_url(&fetcher, "https://example.com/m").await.unwrap();
/// assert_eq!(spiral, [1u32, 3, 4, 2].map(BigUint::from));
/// # });
/// ```
pub async fn spiral_from_url<F: Fetcher>(fetcher: &F, url: &str) -> Result<Vec<BigUint>, Error> {
    let text = fetcher
        .fetch(url)
        .await
        .inspect_err(|e| tracing::warn!(url = %url, error = %e, "fetch failed"))?;

    let spiral = spiral_from_text(&text).inspect_err(|e| {
        tracing::warn!(url = %url, error = %e, "payload does not hold a square matrix")
    })?;

    tracing::debug!(url = %url, elements = spiral.len(), "read spiral");
    Ok(spiral)
}
