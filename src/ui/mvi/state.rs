/// Marker trait for controller state.
///
/// States are plain values: cloned to branch, compared to detect changes,
/// and `Default` so the app can `mem::take` them during dispatch.
pub trait UiState: Clone + PartialEq + Default + Send + 'static {}
