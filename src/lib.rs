//! Counter-clockwise spiral reading of square matrices found in text.
//!
//! This crate turns an arbitrary text payload into a sequence of integers:
//! - **Extraction**: maximal runs of ASCII digits become non-negative integers
//!   of unbounded size ([`BigUint`])
//! - **Matrix building**: the integers are laid out row-major in a square matrix,
//!   provided their count is a perfect square
//! - **Spiral reading**: the matrix is read counter-clockwise from the top-left
//!   corner, heading down first
//!
//! Fetching the payload sits behind the [`Fetcher`] trait so the pure core
//! never touches the network.
//!
//! # Core Types
//!
//! - [`Matrix<T>`]: Immutable rectangular grid; ragged rows cannot be constructed
//! - [`ExtractionError`]: Why text does not hold a square matrix
//! - [`Fetcher`]: Source of the text payload ([`HttpFetcher`], [`RecordingFetcher`])
//! - [`Error`]: Fetch or extraction failure at the pipeline boundary
//!
//! # Examples
//!
//! ```
//! use spiral_matrix::{build_matrix, spiral_read};
//!
//! let matrix = build_matrix("1, 2, 3 / 4, 5, 6 / 7, 8, 9").expect("nine values");
//! let spiral: Vec<String> = spiral_read(&matrix).iter().map(|v| v.to_string()).collect();
//! assert_eq!(spiral, ["1", "4", "7", "8", "9", "6", "3", "2", "5"]);
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]

mod error;
mod extract;
pub mod fetch;
mod matrix;
mod pipeline;
mod spiral;

#[cfg(test)]
mod test_utils;

pub use num_bigint::BigUint;

pub use error::{Error, ExtractionError, FetchError, ShapeError};
pub use extract::{build_matrix, exact_square_root, extract_integers};
pub use fetch::{FetchConfig, Fetcher, HttpFetcher, RecordingFetcher};
pub use matrix::Matrix;
pub use pipeline::{spiral_from_text, spiral_from_url};
pub use spiral::spiral_read;
