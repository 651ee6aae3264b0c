//! reqwest-backed Formbricks client.

use crate::error::ApiFailure;
use crate::payload;
use crate::platform::{CreatedResponse, CreatedSurvey, CreatedUser, SurveyPlatform};
use async_trait::async_trait;
use demo_generator::{Response, Survey, User};
use reqwest::Client;
use serde_json::Value;
use std::time::Duration;

/// Default per-request timeout.
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(30);

/// Connection settings for a Formbricks instance.
#[derive(Debug, Clone)]
pub struct ClientConfig {
    /// Base URL of the instance, e.g. `http://localhost:3000`.
    pub base_url: String,
    /// Management API key (`x-api-key` header).
    pub api_key: String,
    /// Environment id surveys are created in.
    pub environment_id: String,
    /// Per-request timeout.
    pub timeout: Duration,
}

impl ClientConfig {
    pub fn new(base_url: String, api_key: String, environment_id: String) -> Self {
        Self {
            base_url,
            api_key,
            environment_id,
            timeout: DEFAULT_TIMEOUT,
        }
    }
}

/// HTTP adapter over the Formbricks management and client APIs.
pub struct FormbricksClient {
    http: Client,
    config: ClientConfig,
}

impl FormbricksClient {
    /// Build a client with the configured timeout.
    pub fn new(config: ClientConfig) -> Result<Self, ApiFailure> {
        let http = Client::builder().timeout(config.timeout).build()?;
        Ok(Self { http, config })
    }

    /// Assemble an endpoint URL under the configured base.
    fn endpoint(&self, path: &str) -> String {
        format!("{}{}", self.config.base_url.trim_end_matches('/'), path)
    }

    /// Pull a server-assigned id out of a `{"data": {"id": ...}}` body.
    fn server_id(body: &Value) -> Option<String> {
        body.get("data")
            .and_then(|data| data.get("id"))
            .and_then(|id| id.as_str())
            .map(|id| id.to_string())
    }
}

#[async_trait]
impl SurveyPlatform for FormbricksClient {
    async fn check_health(&self) -> Result<(), ApiFailure> {
        let url = self.endpoint("/health");
        tracing::debug!("GET {url}");

        let response = self.http.get(&url).send().await?;
        if response.status().is_success() {
            return Ok(());
        }
        // Older instances have no /health route; the root page serving at
        // all is still a usable readiness signal.
        let root = self.endpoint("/");
        let response = self.http.get(&root).send().await?;
        if response.status().is_success() {
            Ok(())
        } else {
            Err(ApiFailure::from_status(response.status()))
        }
    }

    async fn invite_user(&self, user: &User) -> Result<CreatedUser, ApiFailure> {
        let url = self.endpoint("/api/v1/management/invites");
        tracing::debug!("POST {url} (user {})", user.id);

        let response = self
            .http
            .post(&url)
            .header("x-api-key", &self.config.api_key)
            .json(&payload::invite_payload(user))
            .send()
            .await?;

        if !response.status().is_success() {
            return Err(ApiFailure::from_status(response.status()));
        }

        let body: Value = response.json().await.unwrap_or(Value::Null);
        Ok(CreatedUser {
            generated_id: user.id.clone(),
            server_id: Self::server_id(&body),
        })
    }

    async fn create_survey(&self, survey: &Survey) -> Result<CreatedSurvey, ApiFailure> {
        let url = self.endpoint("/api/v1/management/surveys");
        tracing::debug!("POST {url} (survey {})", survey.id);

        let response = self
            .http
            .post(&url)
            .header("x-api-key", &self.config.api_key)
            .json(&payload::survey_payload(&self.config.environment_id, survey))
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            return Err(ApiFailure::from_status(status));
        }

        let body: Value = response.json().await?;
        let server_id = Self::server_id(&body).ok_or(ApiFailure::Server {
            status: status.as_u16(),
        })?;

        Ok(CreatedSurvey {
            generated_id: survey.id.clone(),
            server_id,
        })
    }

    async fn submit_response(
        &self,
        server_survey_id: &str,
        response: &Response,
    ) -> Result<CreatedResponse, ApiFailure> {
        let url = self.endpoint("/api/v1/client/responses");
        tracing::debug!("POST {url} (response {})", response.id);

        // Client API: no API key required.
        let reply = self
            .http
            .post(&url)
            .json(&payload::response_payload(server_survey_id, response))
            .send()
            .await?;

        if !reply.status().is_success() {
            return Err(ApiFailure::from_status(reply.status()));
        }

        let body: Value = reply.json().await.unwrap_or(Value::Null);
        Ok(CreatedResponse {
            generated_id: response.id.clone(),
            server_id: Self::server_id(&body),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn test_client(base_url: &str) -> FormbricksClient {
        FormbricksClient::new(ClientConfig::new(
            base_url.to_string(),
            "test-key".to_string(),
            "env_test".to_string(),
        ))
        .unwrap()
    }

    #[test]
    fn test_endpoint_joins_without_double_slash() {
        let client = test_client("http://localhost:3000/");
        assert_eq!(
            client.endpoint("/api/v1/management/surveys"),
            "http://localhost:3000/api/v1/management/surveys"
        );

        let client = test_client("http://localhost:3000");
        assert_eq!(
            client.endpoint("/api/v1/client/responses"),
            "http://localhost:3000/api/v1/client/responses"
        );
    }

    #[test]
    fn test_server_id_extraction() {
        let body = json!({ "data": { "id": "cm_abc123" } });
        assert_eq!(
            FormbricksClient::server_id(&body),
            Some("cm_abc123".to_string())
        );

        assert_eq!(FormbricksClient::server_id(&json!({})), None);
        assert_eq!(FormbricksClient::server_id(&Value::Null), None);
        assert_eq!(
            FormbricksClient::server_id(&json!({ "data": { "id": 42 } })),
            None
        );
    }
}
