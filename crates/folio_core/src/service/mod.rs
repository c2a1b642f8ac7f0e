//! Use-case services over the local content store.
//!
//! # Responsibility
//! - Orchestrate repository and view-model calls into page-level operations.
//! - Keep callers (CLI, embedding shells) decoupled from storage details.

pub mod content_service;
