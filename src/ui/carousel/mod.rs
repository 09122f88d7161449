mod gesture;
mod intent;
mod reducer;
mod state;

pub use gesture::{resolve_swipe, swipe_power, DragRelease, DragTracker};
pub use intent::CarouselIntent;
pub use reducer::CarouselReducer;
pub use state::{CarouselState, DEFAULT_SWIPE_THRESHOLD};
