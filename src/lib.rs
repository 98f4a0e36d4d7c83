//! Ordered tab model and drag-to-reorder engine for a browser-style tab strip.
//!
//! The host UI forwards pointer events to [`core::TabBar`] and renders the
//! [`core::TabBarSnapshot`] it returns; it owns no reorder logic itself.

pub mod config;
pub mod core;
