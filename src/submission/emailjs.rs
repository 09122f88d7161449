use std::time::Duration;

use serde_json::{json, Map, Value};

use super::{QuoteRequest, QuoteSink, SubmissionError};
use crate::config::EmailJsConfig;

/// Sends quote requests through the EmailJS REST API.
pub struct EmailJsSink {
    client: reqwest::Client,
    endpoint: String,
    service_id: String,
    template_id: String,
    public_key: String,
    access_token: Option<String>,
}

impl EmailJsSink {
    pub fn new(config: &EmailJsConfig, timeout: Duration) -> Result<Self, SubmissionError> {
        if config.service_id.trim().is_empty() || config.template_id.trim().is_empty() {
            return Err(SubmissionError::NotConfigured {
                message: "EmailJS service_id and template_id are required".to_string(),
            });
        }
        let public_key = config
            .resolved_public_key()
            .ok_or_else(|| SubmissionError::NotConfigured {
                message: "EmailJS public key is missing".to_string(),
            })?;

        let client = reqwest::Client::builder()
            .timeout(timeout)
            .build()
            .map_err(|source| SubmissionError::Transport {
                endpoint: config.endpoint.clone(),
                source,
            })?;

        Ok(Self {
            client,
            endpoint: config.endpoint.clone(),
            service_id: config.service_id.clone(),
            template_id: config.template_id.clone(),
            public_key,
            access_token: config.access_token.clone(),
        })
    }

    /// Request body expected by `POST /api/v1.0/email/send`.
    pub fn payload(&self, request: &QuoteRequest) -> Value {
        let mut params = Map::new();
        for field in &request.fields {
            params.insert(field.name.clone(), Value::String(field.value.clone()));
        }
        params.insert(
            "submission_token".to_string(),
            Value::String(request.token.to_string()),
        );

        let mut body = json!({
            "service_id": self.service_id,
            "template_id": self.template_id,
            "user_id": self.public_key,
            "template_params": params,
        });
        if let Some(token) = &self.access_token {
            body["accessToken"] = Value::String(token.clone());
        }
        body
    }
}

impl QuoteSink for EmailJsSink {
    async fn deliver(&self, request: &QuoteRequest) -> Result<(), SubmissionError> {
        let transport = |source| SubmissionError::Transport {
            endpoint: self.endpoint.clone(),
            source,
        };

        let response = self
            .client
            .post(&self.endpoint)
            .json(&self.payload(request))
            .send()
            .await
            .map_err(transport)?;

        let status = response.status();
        if status.is_success() {
            return Ok(());
        }

        let body = response.text().await.unwrap_or_default();
        Err(SubmissionError::Rejected {
            status: status.as_u16(),
            body,
        })
    }
}
