//! State of the quote-request wizard.

use std::sync::Arc;

use crate::form::{FieldSpec, FormFields, FormSchema, StepSpec};
use crate::submission::{QuoteRequest, SubmissionToken};
use crate::ui::direction::Direction;
use crate::ui::mvi::UiState;

/// What the submission sink reported for the current submission.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum DeliveryStatus {
    #[default]
    Pending,
    Delivered,
    Failed {
        error: String,
    },
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum WizardPhase {
    #[default]
    Editing,
    /// Terminal: fields are frozen until `Reset`.
    Submitted {
        token: SubmissionToken,
        delivery: DeliveryStatus,
    },
}

/// Linear step wizard over a fixed [`FormSchema`].
///
/// `step` is 1-based and always within `1..=schema.len()`. `Submitted` is
/// only reachable from the last step.
#[derive(Debug, Clone, PartialEq)]
pub struct WizardState {
    pub(super) schema: Arc<FormSchema>,
    pub(super) fields: FormFields,
    pub(super) step: usize,
    pub(super) direction: Direction,
    pub(super) phase: WizardPhase,
}

impl Default for WizardState {
    fn default() -> Self {
        Self::new(Arc::new(FormSchema::cotizador()))
    }
}

impl UiState for WizardState {}

impl WizardState {
    pub fn new(schema: Arc<FormSchema>) -> Self {
        let fields = FormFields::empty_for(&schema);
        Self {
            schema,
            fields,
            step: 1,
            direction: Direction::Still,
            phase: WizardPhase::Editing,
        }
    }

    /// Fresh state over the same schema.
    pub(super) fn reset(&self) -> Self {
        Self::new(Arc::clone(&self.schema))
    }

    pub fn schema(&self) -> &FormSchema {
        &self.schema
    }

    pub fn fields(&self) -> &FormFields {
        &self.fields
    }

    pub fn step(&self) -> usize {
        self.step
    }

    pub fn total_steps(&self) -> usize {
        self.schema.len()
    }

    pub fn direction(&self) -> Direction {
        self.direction
    }

    pub fn phase(&self) -> &WizardPhase {
        &self.phase
    }

    pub fn is_first_step(&self) -> bool {
        self.step == 1
    }

    pub fn is_last_step(&self) -> bool {
        self.step == self.total_steps()
    }

    pub fn is_submitted(&self) -> bool {
        matches!(self.phase, WizardPhase::Submitted { .. })
    }

    pub fn submission_token(&self) -> Option<SubmissionToken> {
        match &self.phase {
            WizardPhase::Submitted { token, .. } => Some(*token),
            WizardPhase::Editing => None,
        }
    }

    pub fn delivery(&self) -> Option<&DeliveryStatus> {
        match &self.phase {
            WizardPhase::Submitted { delivery, .. } => Some(delivery),
            WizardPhase::Editing => None,
        }
    }

    pub fn current_step(&self) -> &StepSpec {
        // step is kept within 1..=len by the reducer
        &self.schema.steps()[self.step - 1]
    }

    pub fn current_fields(&self) -> &[FieldSpec] {
        &self.current_step().fields
    }

    /// Fraction of the progress line between the first and last step.
    pub fn progress(&self) -> f64 {
        let total = self.total_steps();
        if total <= 1 {
            return 0.0;
        }
        (self.step - 1) as f64 / (total - 1) as f64
    }

    /// Snapshot handed to the submission sink; `None` while editing.
    pub fn quote_request(&self) -> Option<QuoteRequest> {
        self.submission_token()
            .map(|token| QuoteRequest::new(token, &self.fields))
    }
}
