//! HTTP client abstraction for testability

use std::error::Error;
use std::time::Duration;

use crate::error::{ResolveError, ResolveResult};

/// Default timeout for the manifest request in seconds.
pub const DEFAULT_TIMEOUT_SECS: u64 = 30;

/// Trait for HTTP client operations.
///
/// This abstraction allows for dependency injection and easier testing
/// by enabling mock HTTP clients in tests.
pub trait HttpClient {
    /// Performs an HTTP GET request.
    ///
    /// # Arguments
    ///
    /// * `url` - The URL to request
    ///
    /// # Returns
    ///
    /// The response body as bytes. Any transport failure or non-2xx status
    /// is reported as [`ResolveError::ManifestFetch`].
    fn get(&self, url: &str) -> ResolveResult<Vec<u8>>;
}

/// Real HTTP client implementation using reqwest.
///
/// Certificate validation is disabled for this client only; the FileZilla
/// update endpoint has served chains that fail standard validation.
pub struct ReqwestClient {
    client: reqwest::blocking::Client,
}

impl ReqwestClient {
    /// Creates a new ReqwestClient with default configuration.
    pub fn new() -> ResolveResult<Self> {
        Self::with_timeout(DEFAULT_TIMEOUT_SECS)
    }

    /// Creates a new ReqwestClient with custom timeout.
    pub fn with_timeout(timeout_secs: u64) -> ResolveResult<Self> {
        Self::build(Duration::from_secs(timeout_secs), None)
    }

    /// Creates a new ReqwestClient with a timeout and optional User-Agent.
    pub fn build(timeout: Duration, user_agent: Option<&str>) -> ResolveResult<Self> {
        let mut builder = reqwest::blocking::Client::builder()
            .timeout(timeout)
            .danger_accept_invalid_certs(true);

        if let Some(agent) = user_agent {
            builder = builder.user_agent(agent);
        }

        let client = builder
            .build()
            .map_err(|e| ResolveError::HttpClient(error_chain(&e)))?;

        Ok(Self { client })
    }
}

impl HttpClient for ReqwestClient {
    fn get(&self, url: &str) -> ResolveResult<Vec<u8>> {
        let response = self
            .client
            .get(url)
            .send()
            .map_err(|e| {
                ResolveError::ManifestFetch(format!("Request failed: {}", error_chain(&e)))
            })?;

        // Check HTTP status
        if !response.status().is_success() {
            return Err(ResolveError::ManifestFetch(format!(
                "HTTP {} from {}",
                response.status(),
                url
            )));
        }

        response.bytes().map(|b| b.to_vec()).map_err(|e| {
            ResolveError::ManifestFetch(format!("Failed to read response: {}", error_chain(&e)))
        })
    }
}

/// Formats `err` followed by each of its sources, separated by `": "`.
///
/// reqwest's top-level message omits the OS or TLS cause, which only
/// appears further down the source chain.
fn error_chain(err: &dyn Error) -> String {
    let mut message = err.to_string();
    let mut source = err.source();
    while let Some(cause) = source {
        let text = cause.to_string();
        if !message.ends_with(&text) {
            message.push_str(": ");
            message.push_str(&text);
        }
        source = cause.source();
    }
    message
}

#[cfg(test)]
pub mod tests {
    use std::fmt;
    use std::sync::atomic::{AtomicUsize, Ordering};

    use super::*;

    /// Mock HTTP client for testing
    pub struct MockHttpClient {
        pub response: Result<Vec<u8>, String>,
        calls: AtomicUsize,
    }

    impl MockHttpClient {
        /// Mock that serves `body` for every request.
        pub fn with_body(body: &str) -> Self {
            Self {
                response: Ok(body.as_bytes().to_vec()),
                calls: AtomicUsize::new(0),
            }
        }

        /// Mock whose every request fails with `cause`.
        pub fn failing(cause: &str) -> Self {
            Self {
                response: Err(cause.to_string()),
                calls: AtomicUsize::new(0),
            }
        }

        /// Number of GET requests issued so far.
        pub fn calls(&self) -> usize {
            self.calls.load(Ordering::SeqCst)
        }
    }

    impl HttpClient for MockHttpClient {
        fn get(&self, _url: &str) -> ResolveResult<Vec<u8>> {
            self.calls.fetch_add(1, Ordering::SeqCst);
            self.response.clone().map_err(ResolveError::ManifestFetch)
        }
    }

    #[test]
    fn test_mock_client_success() {
        let mock = MockHttpClient::with_body("abcd");

        let result = mock.get("http://example.com");
        assert!(result.is_ok());
        assert_eq!(result.unwrap(), b"abcd".to_vec());
        assert_eq!(mock.calls(), 1);
    }

    #[test]
    fn test_mock_client_error() {
        let mock = MockHttpClient::failing("Test error");

        let result = mock.get("http://example.com");
        assert!(matches!(result, Err(ResolveError::ManifestFetch(_))));
    }

    #[test]
    fn test_reqwest_client_builds_with_user_agent() {
        let client = ReqwestClient::build(Duration::from_secs(5), Some("filezilla-url-test/1.0"));
        assert!(client.is_ok());
    }

    #[derive(Debug)]
    struct Layer {
        message: &'static str,
        source: Option<Box<Layer>>,
    }

    impl fmt::Display for Layer {
        fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
            f.write_str(self.message)
        }
    }

    impl Error for Layer {
        fn source(&self) -> Option<&(dyn Error + 'static)> {
            self.source.as_deref().map(|s| s as &(dyn Error + 'static))
        }
    }

    #[test]
    fn test_error_chain_includes_every_source() {
        let err = Layer {
            message: "error sending request",
            source: Some(Box::new(Layer {
                message: "client error (Connect)",
                source: Some(Box::new(Layer {
                    message: "Connection refused (os error 111)",
                    source: None,
                })),
            })),
        };
        assert_eq!(
            error_chain(&err),
            "error sending request: client error (Connect): Connection refused (os error 111)"
        );
    }

    #[test]
    fn test_error_chain_skips_repeated_suffix() {
        let err = Layer {
            message: "tcp connect error: Connection refused",
            source: Some(Box::new(Layer {
                message: "Connection refused",
                source: None,
            })),
        };
        assert_eq!(error_chain(&err), "tcp connect error: Connection refused");
    }

    #[test]
    fn test_refused_connection_reports_os_cause() {
        let port = {
            let listener = std::net::TcpListener::bind("127.0.0.1:0").unwrap();
            listener.local_addr().unwrap().port()
        };
        let client = ReqwestClient::build(Duration::from_millis(2500), None).unwrap();

        let err = client
            .get(&format!("http://127.0.0.1:{}/updatecheck.php", port))
            .unwrap_err();
        let msg = err.to_string().to_lowercase();
        assert!(matches!(err, ResolveError::ManifestFetch(_)));
        assert!(msg.contains("refused") || msg.contains("connect"), "{}", msg);
    }
}
