use std::sync::Arc;

use crate::form::AdvanceGate;
use crate::submission::DeliveryOutcome;
use crate::ui::direction::Direction;
use crate::ui::mvi::Reducer;

use super::intent::WizardIntent;
use super::state::{DeliveryStatus, WizardPhase, WizardState};

pub struct WizardReducer;

impl Reducer for WizardReducer {
    type State = WizardState;
    type Intent = WizardIntent;

    /// Uses the state's own schema as the advance gate.
    fn reduce(state: Self::State, intent: Self::Intent) -> Self::State {
        let schema = Arc::clone(&state.schema);
        Self::reduce_with(state, intent, schema.as_ref())
    }
}

impl WizardReducer {
    /// Same transitions as [`Reducer::reduce`] with a caller-supplied gate.
    pub fn reduce_with<G>(mut state: WizardState, intent: WizardIntent, gate: &G) -> WizardState
    where
        G: AdvanceGate + ?Sized,
    {
        match intent {
            WizardIntent::UpdateField { name, value } => {
                if !state.is_submitted() {
                    state.fields.set(&name, value);
                }
                state
            }
            WizardIntent::Advance => {
                if state.is_submitted()
                    || state.is_last_step()
                    || !gate.can_advance(state.step, &state.fields)
                {
                    return state;
                }
                state.step += 1;
                state.direction = Direction::Forward;
                state
            }
            WizardIntent::Retreat => {
                if state.is_submitted() || state.is_first_step() {
                    return state;
                }
                state.step -= 1;
                state.direction = Direction::Backward;
                state
            }
            WizardIntent::Submit { token } => {
                if state.is_submitted() || !state.is_last_step() {
                    return state;
                }
                state.phase = WizardPhase::Submitted {
                    token,
                    delivery: DeliveryStatus::Pending,
                };
                state
            }
            WizardIntent::DeliveryReported { token, outcome } => match state.phase {
                WizardPhase::Submitted {
                    token: current,
                    delivery: DeliveryStatus::Pending,
                } if current == token => {
                    let delivery = match outcome {
                        DeliveryOutcome::Delivered => DeliveryStatus::Delivered,
                        DeliveryOutcome::Failed(error) => DeliveryStatus::Failed { error },
                    };
                    state.phase = WizardPhase::Submitted { token, delivery };
                    state
                }
                // Stale report (reset or resubmitted since) or already settled
                _ => state,
            },
            WizardIntent::Reset => state.reset(),
        }
    }
}
