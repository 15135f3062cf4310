use std::cell::RefCell;
use std::collections::HashMap;

use crate::{FetchError, Fetcher};

/// An offline [`Fetcher`] that serves canned responses and records every request.
///
/// Responses are registered per URL. A URL with nothing registered answers
/// like a server returning 404. No network I/O is ever performed, which keeps
/// tests deterministic.
///
/// # Examples
///
/// ```
/// use spiral_matrix::{Fetcher, RecordingFetcher};
///
/// # tokio_test_block(async {
/// let fetcher = RecordingFetcher::new().with_body("https://example.com/m", "1 2 3 4");
///
/// let body = fetcher.fetch("https://example.com/m").await.unwrap();
/// assert_eq!(body, "1 2 3 4");
/// assert_eq!(fetcher.requests(), vec!["https://example.com/m".to_string()]);
/// # });
/// # fn tokio_test_block<F: std::future::Future>(f: F) -> F::Output {
/// #     tokio::runtime::Builder::new_current_thread().build().unwrap().block_on(f)
/// # }
/// ```
#[derive(Debug, Default)]
pub struct RecordingFetcher {
    responses: HashMap<String, Result<String, FetchError>>,
    requests: RefCell<Vec<String>>,
}

impl RecordingFetcher {
    /// Creates a fetcher with no registered responses.
    pub fn new() -> Self {
        Self::default()
    }

    /// Serves `body` for `url`.
    pub fn with_body(mut self, url: impl Into<String>, body: impl Into<String>) -> Self {
        self.responses.insert(url.into(), Ok(body.into()));
        self
    }

    /// Fails every fetch of `url` with `error`.
    pub fn with_error(mut self, url: impl Into<String>, error: FetchError) -> Self {
        self.responses.insert(url.into(), Err(error));
        self
    }

    /// Returns the number of recorded requests.
    pub fn request_count(&self) -> usize {
        self.requests.borrow().len()
    }

    /// Returns a snapshot of every requested URL, in order.
    pub fn requests(&self) -> Vec<String> {
        self.requests.borrow().clone()
    }
}

impl Fetcher for RecordingFetcher {
    async fn fetch(&self, url: &str) -> Result<String, FetchError> {
        self.requests.borrow_mut().push(url.to_string());

        match self.responses.get(url) {
            Some(response) => response.clone(),
            None => Err(FetchError::Status {
                url: url.to_string(),
                status: 404,
            }),
        }
    }
}
