use std::collections::HashSet;

use tokio::runtime::Handle;
use tokio::sync::mpsc;

use super::{DeliveryOutcome, DeliveryReport, QuoteRequest, QuoteSink, SubmissionToken};

/// Pending quote requests beyond this are refused by `try_send`.
const QUEUE_DEPTH: usize = 8;

pub type QuoteSender = mpsc::Sender<QuoteRequest>;

/// Delivers quote requests one at a time on the tokio runtime.
pub struct SubmissionDispatcher;

impl SubmissionDispatcher {
    /// Spawn the delivery task and return its queue.
    ///
    /// Each request produces exactly one report through `on_report`.
    /// A token that was already delivered is skipped without a report.
    /// The task ends when every sender is dropped.
    pub fn spawn<S, F>(runtime: &Handle, sink: S, on_report: F) -> QuoteSender
    where
        S: QuoteSink,
        F: Fn(DeliveryReport) + Send + 'static,
    {
        let (tx, mut rx) = mpsc::channel::<QuoteRequest>(QUEUE_DEPTH);

        runtime.spawn(async move {
            let mut seen: HashSet<SubmissionToken> = HashSet::new();
            while let Some(request) = rx.recv().await {
                if !seen.insert(request.token) {
                    tracing::debug!(token = %request.token, "Duplicate submission ignored");
                    continue;
                }

                let outcome = match sink.deliver(&request).await {
                    Ok(()) => {
                        tracing::info!(token = %request.token, "Quote request delivered");
                        DeliveryOutcome::Delivered
                    }
                    Err(err) => {
                        tracing::warn!(token = %request.token, "Quote delivery failed: {}", err);
                        DeliveryOutcome::Failed(err.to_string())
                    }
                };
                on_report(DeliveryReport {
                    token: request.token,
                    outcome,
                });
            }
            tracing::debug!("Submission queue closed");
        });

        tx
    }
}
