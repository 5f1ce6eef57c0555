//! Marker trait for intents.

/// Something that happened: a user action on the listing page, a trigger
/// from the synchronizer, or a fetch settling.
///
/// Intents carry data only; reducers decide what they mean.
pub trait Intent: Send + 'static {}
