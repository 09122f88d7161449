//! Hand-off of completed quote requests to an outside sink.
//!
//! The wizard only produces an immutable [`QuoteRequest`]. Delivery runs on
//! the tokio runtime through [`SubmissionDispatcher`], and its outcome comes
//! back to the UI as a [`DeliveryReport`].

mod dispatcher;
mod emailjs;
mod log_sink;

pub use dispatcher::{QuoteSender, SubmissionDispatcher};
pub use emailjs::EmailJsSink;
pub use log_sink::LogSink;

use std::fmt;
use std::future::Future;
use std::time::{Duration, SystemTime, UNIX_EPOCH};

use serde::Serialize;
use thiserror::Error;
use uuid::Uuid;

use crate::config::{SinkKind, SubmissionConfig};
use crate::form::FormFields;

/// Idempotency key of one submission.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(transparent)]
pub struct SubmissionToken(Uuid);

impl SubmissionToken {
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }
}

impl Default for SubmissionToken {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for SubmissionToken {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct QuoteField {
    pub name: String,
    pub value: String,
}

/// Snapshot of the form at the instant of submission.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct QuoteRequest {
    pub token: SubmissionToken,
    pub fields: Vec<QuoteField>,
    /// Seconds since the Unix epoch.
    pub submitted_at: u64,
}

impl QuoteRequest {
    pub fn new(token: SubmissionToken, fields: &FormFields) -> Self {
        let submitted_at = SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .unwrap_or(Duration::ZERO)
            .as_secs();
        Self {
            token,
            fields: fields
                .iter()
                .map(|(name, value)| QuoteField {
                    name: name.to_string(),
                    value: value.to_string(),
                })
                .collect(),
            submitted_at,
        }
    }

    pub fn field(&self, name: &str) -> Option<&str> {
        self.fields
            .iter()
            .find(|f| f.name == name)
            .map(|f| f.value.as_str())
    }
}

#[derive(Debug, Error)]
pub enum SubmissionError {
    #[error("EmailJS rejected the request ({status}): {body}")]
    Rejected { status: u16, body: String },

    #[error("Failed to reach '{endpoint}': {source}")]
    Transport {
        endpoint: String,
        #[source]
        source: reqwest::Error,
    },

    #[error("Submission sink is not configured: {message}")]
    NotConfigured { message: String },
}

/// Destination of quote requests (email service, log, ...).
pub trait QuoteSink: Send + Sync + 'static {
    fn deliver(
        &self,
        request: &QuoteRequest,
    ) -> impl Future<Output = Result<(), SubmissionError>> + Send;
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DeliveryOutcome {
    Delivered,
    Failed(String),
}

/// Result of one delivery, tagged with the submission it belongs to.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DeliveryReport {
    pub token: SubmissionToken,
    pub outcome: DeliveryOutcome,
}

/// Sink selected by `[submission] sink` in the config file.
pub enum ConfiguredSink {
    Log(LogSink),
    EmailJs(EmailJsSink),
}

impl ConfiguredSink {
    pub fn from_config(config: &SubmissionConfig) -> Result<Self, SubmissionError> {
        match config.sink {
            SinkKind::Log => Ok(ConfiguredSink::Log(LogSink)),
            SinkKind::EmailJs => {
                let timeout = Duration::from_secs(u64::from(config.timeout_seconds));
                EmailJsSink::new(&config.emailjs, timeout).map(ConfiguredSink::EmailJs)
            }
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            ConfiguredSink::Log(_) => "log",
            ConfiguredSink::EmailJs(_) => "emailjs",
        }
    }
}

impl QuoteSink for ConfiguredSink {
    async fn deliver(&self, request: &QuoteRequest) -> Result<(), SubmissionError> {
        match self {
            ConfiguredSink::Log(sink) => sink.deliver(request).await,
            ConfiguredSink::EmailJs(sink) => sink.deliver(request).await,
        }
    }
}
