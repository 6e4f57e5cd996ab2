use async_trait::async_trait;
use reqwest::Client;
use std::fmt::Debug;

use crate::error::TransportError;

/// Fetches the body behind a URL.
///
/// Implementations report HTTP-level failures through `Err`; they must not panic.
#[async_trait]
pub trait Transport: Send + Sync + Debug {
    async fn fetch(&self, url: &str) -> Result<String, TransportError>;
}

/// [`Transport`] backed by a shared `reqwest` client.
#[derive(Debug, Clone, Default)]
pub struct HttpTransport {
    http: Client,
}

impl HttpTransport {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_client(http: Client) -> Self {
        Self { http }
    }
}

#[async_trait]
impl Transport for HttpTransport {
    async fn fetch(&self, url: &str) -> Result<String, TransportError> {
        let shown = redact_key(url);

        let res = self
            .http
            .get(url)
            .send()
            .await
            .map_err(|source| TransportError::Request {
                url: shown.clone(),
                source: source.without_url(),
            })?;

        let status = res.status();
        let body = res.text().await.map_err(|source| TransportError::Request {
            url: shown.clone(),
            source: source.without_url(),
        })?;

        if !status.is_success() {
            return Err(TransportError::Status {
                url: shown,
                status,
                body: truncate_body(&body),
            });
        }

        if body.trim().is_empty() {
            return Err(TransportError::EmptyBody { url: shown });
        }

        Ok(body)
    }
}

/// Replaces the value of the `key` query parameter so URLs can be logged.
pub fn redact_key(url: &str) -> String {
    let Some(start) = url.find("?key=").or_else(|| url.find("&key=")) else {
        return url.to_string();
    };

    let value_start = start + "?key=".len();
    let value_end = url[value_start..]
        .find('&')
        .map_or(url.len(), |i| value_start + i);

    format!("{}***{}", &url[..value_start], &url[value_end..])
}

fn truncate_body(body: &str) -> String {
    const MAX: usize = 200;
    match body.char_indices().nth(MAX) {
        Some((cut, _)) => format!("{}...", &body[..cut]),
        None => body.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn redacts_key_parameter() {
        assert_eq!(
            redact_key("https://host/timeline/london?key=SECRET&include=days"),
            "https://host/timeline/london?key=***&include=days"
        );
        assert_eq!(
            redact_key("https://host/timeline/london?key=SECRET"),
            "https://host/timeline/london?key=***"
        );
    }

    #[test]
    fn leaves_urls_without_key_alone() {
        let url = "https://host/timeline/monkey=1";
        assert_eq!(redact_key(url), url);
    }

    #[test]
    fn truncates_long_bodies_on_char_boundary() {
        let body = "é".repeat(300);
        let short = truncate_body(&body);

        assert!(short.ends_with("..."));
        assert_eq!(short.chars().count(), 203);
        assert_eq!(truncate_body("short"), "short");
    }
}
