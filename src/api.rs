use anyhow::{Result, anyhow};
use serde::Deserialize;
use serde_json::Value;
use tracing::debug;

use crate::env::Environment;
use crate::http;

/// Handle for the user service. Request paths are relative and resolved
/// against the base URL fixed at construction time.
#[derive(Debug, Clone)]
pub struct ApiClient {
    http: reqwest::Client,
    base_url: String,
}

#[derive(Debug, Deserialize)]
struct ErrorBody {
    error: Option<String>,
    message: Option<String>,
}

impl ApiClient {
    pub fn new(environment: Environment) -> Self {
        Self::with_base_url(environment.base_url())
    }

    pub fn with_base_url(base_url: impl Into<String>) -> Self {
        let mut base_url = base_url.into();
        while base_url.ends_with('/') {
            base_url.pop();
        }
        Self {
            http: http::shared_client().clone(),
            base_url,
        }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn endpoint(&self, path: &str) -> String {
        let path = path.trim_start_matches('/');
        if path.is_empty() {
            self.base_url.clone()
        } else {
            format!("{}/{}", self.base_url, path)
        }
    }

    pub async fn get(&self, path: &str) -> Result<Value> {
        let url = self.endpoint(path);
        debug!(%url, "GET");
        let resp = self.http.get(&url).send().await?;
        decode(resp).await
    }

    pub async fn post(&self, path: &str, body: &Value) -> Result<Value> {
        let url = self.endpoint(path);
        debug!(%url, "POST");
        let resp = self.http.post(&url).json(body).send().await?;
        decode(resp).await
    }

    pub async fn put(&self, path: &str, body: &Value) -> Result<Value> {
        let url = self.endpoint(path);
        debug!(%url, "PUT");
        let resp = self.http.put(&url).json(body).send().await?;
        decode(resp).await
    }

    pub async fn delete(&self, path: &str) -> Result<Value> {
        let url = self.endpoint(path);
        debug!(%url, "DELETE");
        let resp = self.http.delete(&url).send().await?;
        decode(resp).await
    }
}

async fn decode(resp: reqwest::Response) -> Result<Value> {
    let status = resp.status();
    let text = resp.text().await?;

    if !status.is_success() {
        return Err(anyhow!(
            "user service returned status {}: {}",
            status,
            error_message(&text)
        ));
    }

    // Some endpoints (notably DELETE) answer with no body.
    if text.trim().is_empty() {
        return Ok(Value::Null);
    }
    Ok(serde_json::from_str(&text)?)
}

fn error_message(body: &str) -> String {
    if let Ok(parsed) = serde_json::from_str::<ErrorBody>(body)
        && let Some(message) = parsed.error.or(parsed.message)
    {
        return message;
    }

    let trimmed = body.trim();
    if trimmed.is_empty() {
        "(empty body)".to_string()
    } else {
        trimmed.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_uses_environment_base_url() {
        let prod = ApiClient::new(Environment::Production);
        assert_eq!(prod.base_url(), Environment::Production.base_url());

        let dev = ApiClient::new(Environment::Development);
        assert_eq!(dev.base_url(), Environment::Development.base_url());
    }

    #[test]
    fn with_base_url_strips_trailing_slashes() {
        let client = ApiClient::with_base_url("http://localhost:5001/api//");
        assert_eq!(client.base_url(), "http://localhost:5001/api");
    }

    #[test]
    fn endpoint_joins_relative_paths() {
        let client = ApiClient::with_base_url("http://localhost:5001/api");
        assert_eq!(client.endpoint("users"), "http://localhost:5001/api/users");
        assert_eq!(client.endpoint("/users"), "http://localhost:5001/api/users");
        assert_eq!(
            client.endpoint("users/42"),
            "http://localhost:5001/api/users/42"
        );
    }

    #[test]
    fn endpoint_with_empty_path_is_the_base_url() {
        let client = ApiClient::with_base_url("http://localhost:5001/api");
        assert_eq!(client.endpoint(""), "http://localhost:5001/api");
        assert_eq!(client.endpoint("/"), "http://localhost:5001/api");
    }

    #[test]
    fn error_message_prefers_error_field() {
        assert_eq!(
            error_message(r#"{"error":"user not found"}"#),
            "user not found"
        );
        assert_eq!(
            error_message(r#"{"message":"missing token"}"#),
            "missing token"
        );
    }

    #[test]
    fn error_message_falls_back_to_raw_body() {
        assert_eq!(error_message("internal error\n"), "internal error");
        assert_eq!(error_message(r#"{"code":500}"#), r#"{"code":500}"#);
        assert_eq!(error_message("   "), "(empty body)");
    }
}
