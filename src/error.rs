use std::fmt;

/// Errors that can occur anywhere in the fetch-extract-spiral pipeline.
///
/// The core functions return the narrower [`ExtractionError`]; this type
/// exists at the boundary where a fetch failure and an extraction failure
/// both need to reach the caller.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Error {
    /// The source text could not be fetched
    Fetch(FetchError),
    /// The fetched text did not hold a square matrix
    Extraction(ExtractionError),
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::Fetch(e) => write!(f, "{}", e),
            Error::Extraction(e) => write!(f, "{}", e),
        }
    }
}

impl std::error::Error for Error {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Error::Fetch(e) => Some(e),
            Error::Extraction(e) => Some(e),
        }
    }
}

impl From<FetchError> for Error {
    fn from(e: FetchError) -> Self {
        Error::Fetch(e)
    }
}

impl From<ExtractionError> for Error {
    fn from(e: ExtractionError) -> Self {
        Error::Extraction(e)
    }
}

/// Why a text blob could not be turned into a square matrix.
///
/// Every kind is terminal: there is no partial result and nothing to retry.
///
/// # Examples
///
/// ```
/// use spiral_matrix::{build_matrix, ExtractionError};
///
/// assert_eq!(build_matrix("no digits here"), Err(ExtractionError::NoData));
/// assert_eq!(
///     build_matrix("a12b7c9d"),
///     Err(ExtractionError::NotSquare { count: 3 })
/// );
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ExtractionError {
    /// The text contained no digit characters at all
    NoData,
    /// The number of extracted integers has no exact integer square root
    NotSquare {
        /// How many integers were extracted
        count: usize,
    },
}

impl fmt::Display for ExtractionError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ExtractionError::NoData => write!(f, "no data to process: the text contains no digits"),
            ExtractionError::NotSquare { count } => write!(
                f,
                "found {} values, which cannot form a square matrix; only square matrices are allowed",
                count
            ),
        }
    }
}

impl std::error::Error for ExtractionError {}

/// A row-length mismatch found while building a [`Matrix`](crate::Matrix) from rows.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ShapeError {
    /// A row does not have the same length as the first row
    Ragged {
        /// Index of the first mismatching row
        row: usize,
        /// Length of the first row
        expected: usize,
        /// Length of the mismatching row
        found: usize,
    },
}

impl fmt::Display for ShapeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ShapeError::Ragged {
                row,
                expected,
                found,
            } => write!(
                f,
                "row {} has {} elements, expected {}",
                row, found, expected
            ),
        }
    }
}

impl std::error::Error for ShapeError {}

/// Why the source text could not be fetched.
///
/// These failures are orthogonal to the content of the payload: the core
/// never sees them, and never retries on its own.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FetchError {
    /// The URL could not be parsed
    InvalidUrl {
        /// The URL as given
        url: String,
        /// Parser diagnostic
        reason: String,
    },
    /// The HTTP client could not be constructed
    Client {
        /// Client diagnostic
        reason: String,
    },
    /// The server could not be reached
    Connection {
        /// The requested URL
        url: String,
        /// Transport diagnostic
        reason: String,
    },
    /// The overall deadline elapsed before the body was received
    Timeout {
        /// The requested URL
        url: String,
    },
    /// The server answered with a non-success status
    Status {
        /// The requested URL
        url: String,
        /// The HTTP status code
        status: u16,
    },
    /// The response body could not be read as text
    Body {
        /// The requested URL
        url: String,
        /// Transport diagnostic
        reason: String,
    },
}

impl fmt::Display for FetchError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FetchError::InvalidUrl { url, reason } => {
                write!(f, "incorrect URL '{}': {}", url, reason)
            }
            FetchError::Client { reason } => write!(f, "cannot build HTTP client: {}", reason),
            FetchError::Connection { url, reason } => {
                write!(f, "connection error for {}: {}", url, reason)
            }
            FetchError::Timeout { url } => write!(f, "timeout, service is unreachable: {}", url),
            FetchError::Status { url, status } => match status {
                400 => write!(f, "bad request {}: {}", status, url),
                401 => write!(
                    f,
                    "authorization required {}: services behind authorization are not supported: {}",
                    status, url
                ),
                403 => write!(f, "forbidden access {}: {}", status, url),
                404 => write!(f, "page doesn't exist {}: {}", status, url),
                _ => write!(f, "something went wrong, server answered {}: {}", status, url),
            },
            FetchError::Body { url, reason } => {
                write!(f, "cannot read response body from {}: {}", url, reason)
            }
        }
    }
}

impl std::error::Error for FetchError {}
