mod intent;
mod reducer;
mod state;

pub use intent::WizardIntent;
pub use reducer::WizardReducer;
pub use state::{DeliveryStatus, WizardPhase, WizardState};
