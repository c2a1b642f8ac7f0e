//! Core logic for the portfolio page's local content store.
//! This crate is the single source of truth for content invariants.

pub mod db;
pub mod logging;
pub mod model;
pub mod render;
pub mod service;
pub mod store;

pub use logging::{default_log_level, init_logging, logging_status};
pub use model::content::{ContentRecord, PartialContentRecord, Project, ProjectValidationError};
pub use render::html::{escape_html, project_card_html, projects_grid_html};
pub use render::view::{AdminForm, PageView};
pub use service::content_service::{
    submit_contact, ContactFormError, ContentService, ContentServiceError, ServiceResult,
};
pub use store::content_repo::{
    ContentRepoError, ContentRepository, ADMIN_DATA_KEY, PROFILE_PHOTO_KEY,
};
pub use store::kv::{KeyValueStore, MemoryKeyValueStore, SqliteKeyValueStore};
pub use store::{StoreError, StoreResult};

/// Minimal health-check API for early integration.
pub fn ping() -> &'static str {
    "pong"
}

/// Returns the core crate version.
pub fn core_version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}

#[cfg(test)]
mod tests {
    use super::{core_version, ping};

    #[test]
    fn ping_returns_pong() {
        assert_eq!(ping(), "pong");
    }

    #[test]
    fn version_is_not_empty() {
        assert!(!core_version().is_empty());
    }
}
