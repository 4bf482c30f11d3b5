//! Plain HTTP GET operation.

use async_trait::async_trait;
use tracing::debug;

use crate::error::Result;
use crate::tracking::Operation;

/// Fetches a URL and returns the response body as text.
///
/// The status code is not checked; error pages come back as their body.
#[derive(Debug, Clone, Default)]
pub struct HttpGet {
    client: reqwest::Client,
}

impl HttpGet {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl Operation for HttpGet {
    type Args = String;
    type Output = String;

    fn qualified_name(&self) -> &str {
        "get_page"
    }

    async fn call(&self, url: String) -> Result<String> {
        let response = self.client.get(&url).send().await?;
        debug!("GET {} -> {}", url, response.status());
        Ok(response.text().await?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_fetches_body() {
        let mut server = mockito::Server::new_async().await;
        let mock = server
            .mock("GET", "/page")
            .with_status(200)
            .with_body("<html>hi</html>")
            .create_async()
            .await;

        let body = HttpGet::new()
            .call(format!("{}/page", server.url()))
            .await
            .unwrap();

        assert_eq!(body, "<html>hi</html>");
        mock.assert_async().await;
    }

    #[tokio::test]
    async fn test_error_status_returns_body() {
        let mut server = mockito::Server::new_async().await;
        server
            .mock("GET", "/missing")
            .with_status(404)
            .with_body("not here")
            .create_async()
            .await;

        let body = HttpGet::new()
            .call(format!("{}/missing", server.url()))
            .await
            .unwrap();

        assert_eq!(body, "not here");
    }

    #[tokio::test]
    async fn test_connection_error_propagates() {
        let result = HttpGet::new().call("http://127.0.0.1:1/".to_string()).await;
        assert!(matches!(result, Err(crate::error::CacheError::Http(_))));
    }
}
