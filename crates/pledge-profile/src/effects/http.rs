use std::future::Future;

use serde_json::Value;

/// Asynchronous HTTP client abstraction.
///
/// Only what a profile lookup needs: one GET whose body is decoded as JSON.
/// Implementations must not turn non-success status codes into errors; the
/// decoded body decides the outcome.
///
/// # Implementations
///
/// - [`ReqwestClient`]: Production implementation using `reqwest`
/// - Canned clients in tests
pub trait HttpClient: Send + Sync + 'static {
    /// Error type for transport failures (DNS, connect, timeout, undecodable body).
    type Error: std::error::Error + Send + Sync + 'static;

    /// Issue a GET to `url` with `headers` and decode the body as JSON.
    fn get_json(
        &self,
        url: &str,
        headers: &[(String, String)],
    ) -> impl Future<Output = Result<Value, Self::Error>> + Send;
}

#[cfg(feature = "reqwest")]
mod reqwest_impl {
    use super::*;

    /// Production HTTP client implementation using reqwest.
    #[derive(Debug, Clone, Default)]
    pub struct ReqwestClient {
        client: reqwest::Client,
    }

    impl ReqwestClient {
        /// Create a new ReqwestClient with default configuration.
        pub fn new() -> Result<Self, reqwest::Error> {
            let client = reqwest::Client::builder().build()?;
            Ok(Self { client })
        }

        /// Wrap an already configured `reqwest::Client`.
        pub fn with_client(client: reqwest::Client) -> Self { Self { client } }
    }

    impl HttpClient for ReqwestClient {
        type Error = reqwest::Error;

        async fn get_json(&self, url: &str, headers: &[(String, String)]) -> Result<Value, Self::Error> {
            let mut request = self.client.get(url);

            for (key, value) in headers {
                request = request.header(key, value);
            }

            let response = request.send().await?;
            tracing::debug!(status = %response.status(), %url, "profile response received");
            response.json::<Value>().await
        }
    }
}

#[cfg(feature = "reqwest")]
pub use reqwest_impl::ReqwestClient;
