//! Marker trait for reducer-owned state.

/// State driven by a [`Reducer`](super::Reducer).
///
/// Cloneable so a snapshot can be published (e.g. through a `watch` channel),
/// comparable so observers can skip redundant redraws, and defaultable so a
/// dispatch can move the old value out of its slot.
pub trait UiState: Clone + PartialEq + Default + Send + 'static {}
