/// Marker trait for intents: clicks, key presses, resize notifications
/// and delivery reports coming back from the submission sink.
pub trait Intent: Send + 'static {}
