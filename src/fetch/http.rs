use reqwest::{Client, StatusCode, Url};

use crate::{FetchConfig, FetchError, Fetcher};

/// A [`Fetcher`] that issues one HTTP GET per call.
///
/// Connection, deadline, and status failures are sorted into the matching
/// [`FetchError`] variant. A non-2xx response never has its body read.
/// Failures are only logged at `debug` here; reporting them is up to the caller.
///
/// # Examples
///
/// ```no_run
/// use spiral_matrix::{FetchConfig, Fetcher, HttpFetcher};
///
/// # async fn run() -> Result<(), spiral_matrix::FetchError> {
/// let fetcher = HttpFetcher::new(FetchConfig::default())?;
/// let body = fetcher.fetch("https://example.com/matrix.txt").await?;
/// # let _ = body;
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Clone)]
pub struct HttpFetcher {
    client: Client,
}

impl HttpFetcher {
    /// Builds a fetcher whose requests share `config`.
    ///
    /// # Errors
    ///
    /// Returns [`FetchError::Client`] if the underlying client cannot be built.
    pub fn new(config: FetchConfig) -> Result<Self, FetchError> {
        let client = Client::builder()
            .timeout(config.timeout)
            .build()
            .map_err(|e| FetchError::Client {
                reason: e.to_string(),
            })?;

        Ok(Self { client })
    }
}

impl Fetcher for HttpFetcher {
    async fn fetch(&self, url: &str) -> Result<String, FetchError> {
        let parsed = Url::parse(url).map_err(|e| FetchError::InvalidUrl {
            url: url.to_string(),
            reason: e.to_string(),
        })?;

        tracing::debug!(url = %url, "sending GET request");

        let response = self
            .client
            .get(parsed)
            .send()
            .await
            .map_err(|e| classify_transport_error(url, e))?;

        let status = response.status();
        if !status.is_success() {
            tracing::debug!(url = %url, status = status.as_u16(), "server answered with an error status");
            return Err(status_error(url, status));
        }

        let body = response.text().await.map_err(|e| {
            if e.is_timeout() {
                FetchError::Timeout {
                    url: url.to_string(),
                }
            } else {
                FetchError::Body {
                    url: url.to_string(),
                    reason: e.to_string(),
                }
            }
        })?;

        tracing::debug!(url = %url, bytes = body.len(), "received response body");
        Ok(body)
    }
}

fn status_error(url: &str, status: StatusCode) -> FetchError {
    FetchError::Status {
        url: url.to_string(),
        status: status.as_u16(),
    }
}

fn classify_transport_error(url: &str, error: reqwest::Error) -> FetchError {
    let url = url.to_string();

    if error.is_timeout() {
        FetchError::Timeout { url }
    } else if error.is_builder() {
        FetchError::InvalidUrl {
            url,
            reason: error.to_string(),
        }
    } else {
        tracing::debug!(url = %url, error = %error, "request failed");
        FetchError::Connection {
            url,
            reason: error.to_string(),
        }
    }
}
