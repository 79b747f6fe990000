//! HTTP Generator Implementation
//!
//! Sends a prompt to a remote text generation endpoint and returns its reply.
//!
//! # Protocol
//!
//! - Request: `POST {endpoint}` with JSON `{ "prompt": ..., "model": ... }`
//! - Response: JSON `{ "response": "..." }`
//!
//! A request is attempted once. Callers decide whether to try again.
//!
//! # Examples
//!
//! ```no_run
//! use loresmith_llm::HttpGenerator;
//!
//! let generator = HttpGenerator::new("http://localhost:8080/generate", "storyteller").unwrap();
//!
//! // `send` is async. The `GenerationService` impl blocks and is meant to
//! // be called from `tokio::task::spawn_blocking` or plain threads.
//! ```

use crate::GenerationError;
use loresmith_domain::traits::GenerationService;
use serde::{Deserialize, Serialize};
use std::time::Duration;
use tracing::{debug, warn};

/// Default timeout for a single request (2 minutes)
pub const DEFAULT_TIMEOUT_SECS: u64 = 120;

/// Generator backed by an HTTP endpoint
pub struct HttpGenerator {
    endpoint: String,
    model: String,
    timeout: Duration,
    client: reqwest::Client,
}

/// Request body
#[derive(Serialize)]
struct GenerateRequest<'a> {
    prompt: &'a str,
    model: &'a str,
}

/// Response body
#[derive(Deserialize)]
struct GenerateResponse {
    response: String,
}

impl HttpGenerator {
    /// Create a new HTTP generator
    ///
    /// # Parameters
    ///
    /// - `endpoint`: Full URL requests are posted to
    /// - `model`: Model name passed along with every prompt
    pub fn new(endpoint: impl Into<String>, model: impl Into<String>) -> Result<Self, GenerationError> {
        Self::with_timeout(endpoint, model, Duration::from_secs(DEFAULT_TIMEOUT_SECS))
    }

    /// Create a new HTTP generator with a custom request timeout
    pub fn with_timeout(
        endpoint: impl Into<String>,
        model: impl Into<String>,
        timeout: Duration,
    ) -> Result<Self, GenerationError> {
        let client = reqwest::Client::builder()
            .timeout(timeout)
            .build()
            .map_err(|e| GenerationError::Other(format!("Failed to build HTTP client: {}", e)))?;

        Ok(Self {
            endpoint: endpoint.into(),
            model: model.into(),
            timeout,
            client,
        })
    }

    /// Endpoint requests are posted to
    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }

    /// Model name sent with each request
    pub fn model(&self) -> &str {
        &self.model
    }

    /// Per-request timeout
    pub fn timeout(&self) -> Duration {
        self.timeout
    }

    /// Send `prompt` and wait for the reply
    ///
    /// # Errors
    ///
    /// - `ModelNotAvailable` when the endpoint answers 404
    /// - `Communication` for other non-success statuses and network failures
    /// - `InvalidResponse` when the body is not `{ "response": string }`
    pub async fn send(&self, prompt: &str) -> Result<String, GenerationError> {
        let body = GenerateRequest {
            prompt,
            model: &self.model,
        };

        debug!("POST {} (model {})", self.endpoint, self.model);

        let response = self
            .client
            .post(&self.endpoint)
            .json(&body)
            .send()
            .await
            .map_err(|e| GenerationError::Communication(format!("Request failed: {}", e)))?;

        let status = response.status();
        if status == reqwest::StatusCode::NOT_FOUND {
            return Err(GenerationError::ModelNotAvailable(self.model.clone()));
        }
        if !status.is_success() {
            let error_text = response
                .text()
                .await
                .unwrap_or_else(|_| "Unknown error".to_string());
            warn!("Generation request failed with HTTP {}", status);
            return Err(GenerationError::Communication(format!(
                "HTTP {}: {}",
                status, error_text
            )));
        }

        let parsed = response
            .json::<GenerateResponse>()
            .await
            .map_err(|e| GenerationError::InvalidResponse(format!("Failed to parse response: {}", e)))?;

        Ok(parsed.response)
    }
}

impl GenerationService for HttpGenerator {
    type Error = GenerationError;

    fn generate(&self, prompt: &str) -> Result<String, Self::Error> {
        // Blocking wrapper: reuse the surrounding runtime from a blocking
        // thread, or spin up a small one when there is none
        match tokio::runtime::Handle::try_current() {
            Ok(handle) => handle.block_on(self.send(prompt)),
            Err(_) => tokio::runtime::Builder::new_current_thread()
                .enable_all()
                .build()
                .map_err(|e| GenerationError::Other(format!("Failed to start runtime: {}", e)))?
                .block_on(self.send(prompt)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use wiremock::matchers::{body_json, method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    /// Mount a single `POST /generate` reply and return the endpoint URL
    async fn mount_reply(server: &MockServer, template: ResponseTemplate) -> String {
        Mock::given(method("POST"))
            .and(path("/generate"))
            .respond_with(template)
            .mount(server)
            .await;
        format!("{}/generate", server.uri())
    }

    #[test]
    fn test_http_generator_creation() {
        let generator = HttpGenerator::new("http://localhost:8080/generate", "storyteller").unwrap();
        assert_eq!(generator.endpoint(), "http://localhost:8080/generate");
        assert_eq!(generator.model(), "storyteller");
        assert_eq!(generator.timeout(), Duration::from_secs(DEFAULT_TIMEOUT_SECS));
    }

    #[tokio::test]
    async fn test_successful_reply() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/generate"))
            .and(body_json(serde_json::json!({
                "prompt": "make an orc",
                "model": "storyteller"
            })))
            .respond_with(
                ResponseTemplate::new(200).set_body_json(serde_json::json!({ "response": "NAME: Rex" })),
            )
            .expect(1)
            .mount(&server)
            .await;

        let generator = HttpGenerator::new(format!("{}/generate", server.uri()), "storyteller").unwrap();
        let reply = generator.send("make an orc").await.unwrap();
        assert_eq!(reply, "NAME: Rex");
    }

    #[tokio::test]
    async fn test_not_found_is_model_not_available() {
        let server = MockServer::start().await;
        let url = mount_reply(&server, ResponseTemplate::new(404)).await;
        let generator = HttpGenerator::new(url, "missing-model").unwrap();

        match generator.send("hi").await {
            Err(GenerationError::ModelNotAvailable(model)) => assert_eq!(model, "missing-model"),
            other => panic!("Expected ModelNotAvailable, got {:?}", other),
        }
    }

    #[tokio::test]
    async fn test_server_error_is_communication() {
        let server = MockServer::start().await;
        let url = mount_reply(
            &server,
            ResponseTemplate::new(500).set_body_json(serde_json::json!({ "error": "overloaded" })),
        )
        .await;
        let generator = HttpGenerator::new(url, "storyteller").unwrap();

        match generator.send("hi").await {
            Err(GenerationError::Communication(message)) => {
                assert!(message.contains("500"));
                assert!(message.contains("overloaded"));
            }
            other => panic!("Expected Communication error, got {:?}", other),
        }
    }

    #[tokio::test]
    async fn test_malformed_body_is_invalid_response() {
        let server = MockServer::start().await;
        let url = mount_reply(
            &server,
            ResponseTemplate::new(200).set_body_json(serde_json::json!({ "text": "wrong field" })),
        )
        .await;
        let generator = HttpGenerator::new(url, "storyteller").unwrap();

        let result = generator.send("hi").await;
        assert!(matches!(result, Err(GenerationError::InvalidResponse(_))));
    }

    #[tokio::test]
    async fn test_unreachable_endpoint() {
        // Bind then drop to get a port nothing listens on
        let port = {
            let listener = std::net::TcpListener::bind("127.0.0.1:0").unwrap();
            listener.local_addr().unwrap().port()
        };
        let generator = HttpGenerator::new(format!("http://127.0.0.1:{}/generate", port), "m").unwrap();

        let result = generator.send("test").await;
        assert!(matches!(result, Err(GenerationError::Communication(_))));
    }

    #[tokio::test(flavor = "multi_thread", worker_threads = 2)]
    async fn test_blocking_wrapper_inside_runtime() {
        let server = MockServer::start().await;
        let url = mount_reply(
            &server,
            ResponseTemplate::new(200).set_body_json(serde_json::json!({ "response": "hello" })),
        )
        .await;
        let generator = HttpGenerator::new(url, "storyteller").unwrap();

        let reply = tokio::task::spawn_blocking(move || generator.generate("hi"))
            .await
            .unwrap()
            .unwrap();
        assert_eq!(reply, "hello");
    }
}
