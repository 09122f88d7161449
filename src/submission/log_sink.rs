use super::{QuoteRequest, QuoteSink, SubmissionError};

/// Writes quote requests to the application log. Never fails.
#[derive(Debug, Clone, Copy, Default)]
pub struct LogSink;

impl QuoteSink for LogSink {
    async fn deliver(&self, request: &QuoteRequest) -> Result<(), SubmissionError> {
        let fields: Vec<String> = request
            .fields
            .iter()
            .map(|f| format!("{}={}", f.name, f.value))
            .collect();
        tracing::info!(
            token = %request.token,
            submitted_at = request.submitted_at,
            fields = %fields.join(", "),
            "Quote request received"
        );
        Ok(())
    }
}
