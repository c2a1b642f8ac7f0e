//! Local content store use-case service.
//!
//! # Responsibility
//! - Provide the page-level operations: load, save, add-project, reset,
//!   photo save, contact-form submit.
//! - Own the current page view and admin form state between operations.
//!
//! # Invariants
//! - `load` is idempotent: repeated loads without an intervening save or
//!   reset render identically.
//! - `save` reads projects back from the rendered card state, not the form;
//!   an added-but-unsaved card becomes durable only through `save`.
//! - `add_project` mutates nothing when the presence check fails.

use crate::model::content::{ContentRecord, Project, ProjectValidationError};
use crate::render::html::avatar_style;
use crate::render::view::{AdminForm, PageView};
use crate::store::content_repo::{ContentRepoError, ContentRepository};
use crate::store::kv::KeyValueStore;
use crate::store::StoreError;
use log::{info, warn};
use std::error::Error;
use std::fmt::{Display, Formatter};

pub type ServiceResult<T> = Result<T, ContentServiceError>;

/// Error for content service operations. Display text is user-visible.
#[derive(Debug)]
pub enum ContentServiceError {
    /// Add-project presence check failed.
    Validation(ProjectValidationError),
    /// Photo save requested without a photo.
    MissingPhoto,
    /// Persistence failure on an unguarded path.
    Repo(ContentRepoError),
}

impl Display for ContentServiceError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Validation(err) => write!(f, "{err}"),
            Self::MissingPhoto => write!(f, "please choose an image file first"),
            Self::Repo(err) => write!(f, "{err}"),
        }
    }
}

impl Error for ContentServiceError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Validation(err) => Some(err),
            Self::MissingPhoto => None,
            Self::Repo(err) => Some(err),
        }
    }
}

impl From<ProjectValidationError> for ContentServiceError {
    fn from(value: ProjectValidationError) -> Self {
        Self::Validation(value)
    }
}

impl From<ContentRepoError> for ContentServiceError {
    fn from(value: ContentRepoError) -> Self {
        Self::Repo(value)
    }
}

impl From<StoreError> for ContentServiceError {
    fn from(value: StoreError) -> Self {
        Self::Repo(ContentRepoError::Store(value))
    }
}

/// Contact form rejection. Display text is the user-visible message.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ContactFormError;

impl Display for ContactFormError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "Please fill all fields.")
    }
}

impl Error for ContactFormError {}

/// Page-level facade over an injected key-value store.
pub struct ContentService<S: KeyValueStore> {
    repo: ContentRepository<S>,
    page: PageView,
    form: AdminForm,
}

impl<S: KeyValueStore> ContentService<S> {
    /// Creates the service and performs the initial load, mirroring the
    /// page's first render.
    pub fn new(store: S) -> ServiceResult<Self> {
        let mut service = Self {
            repo: ContentRepository::new(store),
            page: PageView::from_record(&ContentRecord::builtin_default()),
            form: AdminForm::default(),
        };
        service.load()?;
        Ok(service)
    }

    /// Current rendered page state.
    pub fn page(&self) -> &PageView {
        &self.page
    }

    /// Current admin form state.
    pub fn form(&self) -> &AdminForm {
        &self.form
    }

    /// Mutable admin form access for callers editing inputs before `save`.
    pub fn form_mut(&mut self) -> &mut AdminForm {
        &mut self.form
    }

    /// Rebuilds page and form from the active record and stored photo.
    pub fn load(&mut self) -> ServiceResult<()> {
        let record = self.repo.load_record()?;
        let mut page = PageView::from_record(&record);
        if let Some(photo) = self.repo.load_photo()? {
            page.avatar_style = Some(avatar_style(&photo));
        }
        self.page = page;
        self.form = AdminForm::from_record(&record);
        info!(
            "event=content_load module=service status=ok projects={}",
            self.page.project_cards.len()
        );
        Ok(())
    }

    /// Persists a record built from the form plus the rendered card state,
    /// then reloads. Returns the confirmation message.
    ///
    /// # Errors
    /// - Storage and serialization failures propagate unguarded on this path.
    pub fn save(&mut self) -> ServiceResult<String> {
        let record = self.record_from_form();
        self.repo.save_record(&record)?;
        self.load()?;
        Ok("Content saved locally.".to_string())
    }

    /// Appends one project card to the page without persisting it.
    ///
    /// Inputs are trimmed first; title and description are required. On
    /// failure the card state and form are left untouched.
    pub fn add_project(&mut self, title: &str, desc: &str, tech: &str) -> ServiceResult<()> {
        let project = Project::new(title.trim(), desc.trim(), tech.trim());
        project.validate()?;
        self.page.project_cards.push(project);
        self.form.clear_project_inputs();
        Ok(())
    }

    /// Removes the stored record and reloads, reverting to the default.
    /// Interactive confirmation is the caller's concern.
    pub fn reset(&mut self) -> ServiceResult<()> {
        self.repo.clear_record()?;
        self.load()
    }

    /// Stores the avatar photo data-URL and updates the page's avatar style.
    ///
    /// A storage failure on this path is logged and swallowed; the in-memory
    /// avatar still updates so the current session keeps the photo.
    pub fn save_photo(&mut self, data_url: &str) -> ServiceResult<String> {
        if data_url.is_empty() {
            return Err(ContentServiceError::MissingPhoto);
        }
        if let Err(err) = self.repo.save_photo(data_url) {
            warn!("event=photo_save module=service status=warn error={err}");
        }
        self.page.avatar_style = Some(avatar_style(data_url));
        Ok("Photo saved locally.".to_string())
    }

    fn record_from_form(&self) -> ContentRecord {
        let defaults = ContentRecord::builtin_default();
        ContentRecord {
            name: field_or_default(&self.form.name, defaults.name),
            role: field_or_default(&self.form.role, defaults.role),
            email: field_or_default(&self.form.email, defaults.email),
            about: field_or_default(&self.form.about, defaults.about),
            projects: self.page.project_cards.clone(),
        }
    }
}

/// Demo contact-form handling: presence check plus confirmation text.
pub fn submit_contact(name: &str, email: &str, message: &str) -> Result<String, ContactFormError> {
    let name = name.trim();
    if name.is_empty() || email.trim().is_empty() || message.trim().is_empty() {
        return Err(ContactFormError);
    }
    Ok(format!("Thanks, {name} — message received (demo)."))
}

fn field_or_default(value: &str, default: String) -> String {
    if value.is_empty() {
        default
    } else {
        value.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::{submit_contact, ContactFormError};

    #[test]
    fn contact_requires_all_fields() {
        assert_eq!(submit_contact("", "a@b.c", "hi"), Err(ContactFormError));
        assert_eq!(submit_contact("Sam", "  ", "hi"), Err(ContactFormError));
        assert_eq!(submit_contact("Sam", "a@b.c", ""), Err(ContactFormError));
    }

    #[test]
    fn contact_confirmation_includes_trimmed_name() {
        let message = submit_contact("  Sam ", "a@b.c", "hello").unwrap();
        assert_eq!(message, "Thanks, Sam — message received (demo).");
    }
}
