//! Fetching the source text.
//!
//! The core only ever sees the response body as a `String`, or a
//! [`FetchError`] explaining why there is none. Everything about transport,
//! deadlines, and HTTP status codes stays behind the [`Fetcher`] trait.
//!
//! - [`HttpFetcher`]: real GET requests through `reqwest`
//! - [`RecordingFetcher`]: canned bodies for offline tests

mod http;
mod recording;

use std::future::Future;
use std::time::Duration;

use crate::FetchError;

pub use http::HttpFetcher;
pub use recording::RecordingFetcher;

/// Default overall deadline for one fetch, connection through body.
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(45);

/// Retrieves the text found at a URL.
///
/// Implementations make a single attempt. Retrying, if wanted at all, is the
/// caller's decision.
pub trait Fetcher {
    /// Fetches `url` and returns the response body as text.
    fn fetch(&self, url: &str) -> impl Future<Output = Result<String, FetchError>>;
}

/// Settings for [`HttpFetcher`].
///
/// # Examples
///
/// ```
/// use std::time::Duration;
/// use spiral_matrix::FetchConfig;
///
/// let config = FetchConfig::default().with_timeout(Duration::from_secs(5));
/// assert_eq!(config.timeout, Duration::from_secs(5));
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FetchConfig {
    /// Overall deadline for a single request
    pub timeout: Duration,
}

impl FetchConfig {
    /// Replaces the overall deadline.
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }
}

impl Default for FetchConfig {
    fn default() -> Self {
        Self {
            timeout: DEFAULT_TIMEOUT,
        }
    }
}
