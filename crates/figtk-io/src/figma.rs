//! Figma REST API client.

use crate::provider::DocumentProvider;
use figtk_core::{DesignDocument, FetchError, FigtkError};
use reqwest::blocking::Client;
use reqwest::Url;
use std::time::Duration;

/// Header carrying the personal access token.
pub const TOKEN_HEADER: &str = "X-Figma-Token";

/// Options for the Figma client.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClientOptions {
    /// API root, without the `/v1` segment.
    pub base_url: String,
    /// Upper bound on one request, connect included.
    pub timeout: Duration,
    pub user_agent: String,
}

impl Default for ClientOptions {
    fn default() -> Self {
        Self {
            base_url: "https://api.figma.com".to_string(),
            timeout: Duration::from_secs(10),
            user_agent: format!("figtk/{}", env!("CARGO_PKG_VERSION")),
        }
    }
}

impl ClientOptions {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into();
        self
    }

    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    pub fn with_user_agent(mut self, user_agent: impl Into<String>) -> Self {
        self.user_agent = user_agent.into();
        self
    }
}

/// Blocking client for `GET /v1/files/{id}`.
#[derive(Debug, Clone)]
pub struct FigmaClient {
    http: Client,
    options: ClientOptions,
}

impl FigmaClient {
    pub fn new(options: ClientOptions) -> Result<Self, FetchError> {
        let http = Client::builder()
            .timeout(options.timeout)
            .user_agent(options.user_agent.clone())
            .build()
            .map_err(transport)?;
        Ok(Self { http, options })
    }

    pub fn options(&self) -> &ClientOptions {
        &self.options
    }

    /// URL of the file endpoint for a document id. The id is percent-encoded
    /// as a single path segment.
    pub fn files_url(&self, document_id: &str) -> Result<Url, FetchError> {
        let base = &self.options.base_url;
        let mut url = Url::parse(base)
            .map_err(|e| FetchError::Transport(format!("invalid base url {base:?}: {e}")))?;
        url.path_segments_mut()
            .map_err(|_| FetchError::Transport(format!("base url {base:?} cannot have a path")))?
            .pop_if_empty()
            .extend(["v1", "files", document_id]);
        Ok(url)
    }

    fn fetch_body(&self, token: &str, document_id: &str) -> Result<String, FetchError> {
        let url = self.files_url(document_id)?;
        log::info!("fetching {url}");

        let response = self
            .http
            .get(url)
            .header(TOKEN_HEADER, token)
            .send()
            .map_err(transport)?;

        let status = response.status();
        let body = response.text().map_err(transport)?;
        if !status.is_success() {
            log::debug!("HTTP {} body: {}", status.as_u16(), body);
            return Err(FetchError::from_status(status.as_u16(), error_message(&body)));
        }
        Ok(body)
    }
}

impl DocumentProvider for FigmaClient {
    fn name(&self) -> &'static str {
        "figma"
    }

    fn fetch(&self, token: &str, document_id: &str) -> Result<DesignDocument, FigtkError> {
        let body = self.fetch_body(token, document_id)?;
        let document = DesignDocument::from_json(&body)?;
        log::info!("fetched {:?} ({} bytes)", document.name, body.len());
        Ok(document)
    }
}

fn transport(err: reqwest::Error) -> FetchError {
    if err.is_timeout() {
        FetchError::Transport(format!("request timed out: {err}"))
    } else {
        FetchError::Transport(err.to_string())
    }
}

/// The API reports failures as `{"status": 404, "err": "Not found"}`.
fn error_message(body: &str) -> String {
    serde_json::from_str::<serde_json::Value>(body)
        .ok()
        .and_then(|value| {
            value
                .get("err")
                .or_else(|| value.get("message"))
                .and_then(|m| m.as_str())
                .map(str::to_string)
        })
        .unwrap_or_else(|| body.trim().to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_options() {
        let options = ClientOptions::default();
        assert_eq!(options.base_url, "https://api.figma.com");
        assert_eq!(options.timeout, Duration::from_secs(10));
        assert!(options.user_agent.starts_with("figtk/"));
    }

    #[test]
    fn test_files_url() {
        let client = FigmaClient::new(ClientOptions::default()).unwrap();
        assert_eq!(
            client.files_url("AbC123").unwrap().as_str(),
            "https://api.figma.com/v1/files/AbC123"
        );
        assert_eq!(
            client.files_url("a/b c").unwrap().as_str(),
            "https://api.figma.com/v1/files/a%2Fb%20c"
        );
    }

    #[test]
    fn test_files_url_with_custom_base() {
        let options = ClientOptions::new().with_base_url("http://localhost:8080/proxy/");
        let client = FigmaClient::new(options).unwrap();
        assert_eq!(
            client.files_url("x").unwrap().as_str(),
            "http://localhost:8080/proxy/v1/files/x"
        );
    }

    #[test]
    fn test_invalid_base_url() {
        let client = FigmaClient::new(ClientOptions::new().with_base_url("not a url")).unwrap();
        assert!(matches!(client.files_url("x"), Err(FetchError::Transport(_))));
    }

    #[test]
    fn test_error_message() {
        assert_eq!(error_message(r#"{"status":404,"err":"Not found"}"#), "Not found");
        assert_eq!(error_message(r#"{"message":"Invalid token"}"#), "Invalid token");
        assert_eq!(error_message(" Bad Gateway \n"), "Bad Gateway");
    }

    #[test]
    fn test_unreachable_host_is_transport_error() {
        let client = FigmaClient::new(
            ClientOptions::new()
                .with_base_url("http://127.0.0.1:9")
                .with_timeout(Duration::from_millis(500)),
        )
        .unwrap();
        let err = client.fetch("token", "file").unwrap_err();
        assert!(matches!(err, FigtkError::Fetch(FetchError::Transport(_))));
    }
}
