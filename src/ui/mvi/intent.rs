/// Marker trait for intents.
///
/// An intent names something that happened: a key press mapped to an answer,
/// a request to continue, or the outcome of a question fetch.
pub trait Intent: Send + 'static {}
