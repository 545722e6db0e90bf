//! buttonsmith-ui - View components for the button editor
//!
//! Components here are pure views: they take snapshots of the style and
//! preset state plus change callbacks, and keep only transient interaction
//! state (hover, the "copied" flag, an unsaved preset name).

pub mod components;

pub use components::*;
