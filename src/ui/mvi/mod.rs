//! Model-View-Intent primitives shared by the landing page controllers.
//!
//! ```text
//! Intent ──→ Reducer ──→ State ──→ render
//!    ↑                               │
//!    └──────── key / mouse / resize ─┘
//! ```
//!
//! The wizard and both carousels are `State` + `Intent` + `Reducer`
//! triples. Rendering reads state, it never mutates it.

mod intent;
mod reducer;
mod state;

pub use intent::Intent;
pub use reducer::Reducer;
pub use state::UiState;
