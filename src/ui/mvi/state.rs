/// Marker trait for view state.
///
/// States are replaced wholesale on every transition (`Clone`), compared to
/// detect changes (`PartialEq`), and start out empty (`Default`).
pub trait UiState: Clone + PartialEq + Default + Send + 'static {}
