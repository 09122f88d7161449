use crate::submission::{DeliveryOutcome, SubmissionToken};
use crate::ui::mvi::Intent;

#[derive(Debug, Clone)]
pub enum WizardIntent {
    /// Store a value; unknown names and edits after submission are ignored.
    UpdateField { name: String, value: String },
    /// Next step, if not at the last one and the gate allows it.
    Advance,
    /// Previous step, if not at the first one.
    Retreat,
    /// Freeze the form under `token`. Only valid at the last step.
    Submit { token: SubmissionToken },
    /// Outcome from the submission sink for `token`.
    DeliveryReported {
        token: SubmissionToken,
        outcome: DeliveryOutcome,
    },
    /// Back to an empty form at step 1.
    Reset,
}

impl Intent for WizardIntent {}
