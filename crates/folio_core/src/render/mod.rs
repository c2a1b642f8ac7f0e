//! Pure record-to-view transforms and HTML fragment rendering.
//!
//! # Responsibility
//! - Derive the page view model from a content record without any DOM or
//!   storage dependency.
//! - Escape all user-controlled text before it reaches markup.
//!
//! # Invariants
//! - Rendering the same record twice yields identical output.
//! - User text never reaches a fragment unescaped.

pub mod html;
pub mod view;
