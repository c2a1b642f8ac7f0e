//! Domain model for the portfolio content record.
//!
//! # Responsibility
//! - Define the canonical content shape persisted under the `adminData` key.
//! - Own the built-in default record and per-field fallback on load.
//!
//! # Invariants
//! - A record is either the built-in default or a previously saved edit,
//!   never partially constructed.
//! - Presence checks apply only on the add-project path; persisted project
//!   lists are taken wholesale.

pub mod content;
