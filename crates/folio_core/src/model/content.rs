//! Content record and project domain types.
//!
//! # Responsibility
//! - Define the JSON shape stored under the `adminData` key.
//! - Provide the built-in default record used before any save.
//! - Merge partially stored records field-by-field against the defaults.
//!
//! # Invariants
//! - `Project::validate` is a presence check only; it runs on the
//!   add-project path, never against persisted lists.
//! - `from_json` never yields a partially constructed record: any field
//!   absent from storage is filled from the built-in default.

use serde::{Deserialize, Serialize};
use std::error::Error;
use std::fmt::{Display, Formatter};

/// One project card shown in the projects grid.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Project {
    /// Card heading.
    pub title: String,
    /// Card body paragraph.
    pub desc: String,
    /// Technology line. Optional in stored records.
    #[serde(default)]
    pub tech: String,
}

/// Presence-check failure for a project submitted through the admin panel.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ProjectValidationError {
    MissingTitle,
    MissingDescription,
}

impl Display for ProjectValidationError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::MissingTitle => write!(f, "please provide a project title"),
            Self::MissingDescription => write!(f, "please provide a project description"),
        }
    }
}

impl Error for ProjectValidationError {}

impl Project {
    pub fn new(
        title: impl Into<String>,
        desc: impl Into<String>,
        tech: impl Into<String>,
    ) -> Self {
        Self {
            title: title.into(),
            desc: desc.into(),
            tech: tech.into(),
        }
    }

    /// Checks that title and description are present. Tech stays optional.
    pub fn validate(&self) -> Result<(), ProjectValidationError> {
        if self.title.trim().is_empty() {
            return Err(ProjectValidationError::MissingTitle);
        }
        if self.desc.trim().is_empty() {
            return Err(ProjectValidationError::MissingDescription);
        }
        Ok(())
    }
}

/// Canonical profile + project bundle rendered across the page.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ContentRecord {
    /// Display name, also used as the nav brand text.
    pub name: String,
    /// Role line under the name in the hero section.
    pub role: String,
    /// Contact email, rendered as a `mailto:` link.
    pub email: String,
    /// About-card paragraph.
    pub about: String,
    /// Ordered project cards.
    pub projects: Vec<Project>,
}

/// Tolerant deserialization shape: every field may be absent in storage.
#[derive(Debug, Default, Deserialize)]
pub struct PartialContentRecord {
    pub name: Option<String>,
    pub role: Option<String>,
    pub email: Option<String>,
    pub about: Option<String>,
    pub projects: Option<Vec<Project>>,
}

impl ContentRecord {
    /// Returns the built-in record shown before any local edit is saved.
    pub fn builtin_default() -> Self {
        Self {
            name: "Jamie Rivera".to_string(),
            role: "Aspiring Full Stack Developer".to_string(),
            email: "jamie.rivera@example.com".to_string(),
            about: "Final-year computer applications student building end-to-end \
                    web applications, with a particular interest in backend systems \
                    and database-driven projects."
                .to_string(),
            projects: vec![
                Project::new(
                    "Planora (Academic)",
                    "Event planner website where users can browse and book \
                     budget-friendly planning packages.",
                    "HTML, CSS, JavaScript",
                ),
                Project::new(
                    "Verdi Goods (Academic)",
                    "E-commerce prototype focused on eco-friendly products with \
                     listings and a cart flow.",
                    "PHP, MySQL, HTML, CSS",
                ),
                Project::new(
                    "Portfolio Website (This Project)",
                    "Personal portfolio presenting academic projects and skills \
                     with a responsive layout.",
                    "HTML, CSS, JavaScript",
                ),
            ],
        }
    }

    /// Fills a partially stored record field-by-field from the defaults.
    pub fn from_partial(partial: PartialContentRecord) -> Self {
        let defaults = Self::builtin_default();
        Self {
            name: partial.name.unwrap_or(defaults.name),
            role: partial.role.unwrap_or(defaults.role),
            email: partial.email.unwrap_or(defaults.email),
            about: partial.about.unwrap_or(defaults.about),
            projects: partial.projects.unwrap_or(defaults.projects),
        }
    }

    /// Parses a stored JSON blob, merging absent fields with the defaults.
    ///
    /// # Errors
    /// - Returns the parse error when the blob is not a JSON object of the
    ///   expected shape. Callers decide the fallback policy.
    pub fn from_json(raw: &str) -> Result<Self, serde_json::Error> {
        let partial: PartialContentRecord = serde_json::from_str(raw)?;
        Ok(Self::from_partial(partial))
    }

    /// Serializes the record to the stored JSON blob.
    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string(self)
    }
}

#[cfg(test)]
mod tests {
    use super::{ContentRecord, Project, ProjectValidationError};

    #[test]
    fn validate_requires_title_and_description() {
        let missing_title = Project::new("", "desc", "tech");
        assert_eq!(
            missing_title.validate(),
            Err(ProjectValidationError::MissingTitle)
        );

        let missing_desc = Project::new("title", "   ", "tech");
        assert_eq!(
            missing_desc.validate(),
            Err(ProjectValidationError::MissingDescription)
        );

        let no_tech = Project::new("title", "desc", "");
        assert_eq!(no_tech.validate(), Ok(()));
    }

    #[test]
    fn from_json_fills_absent_fields_from_defaults() {
        let record = ContentRecord::from_json(r#"{"name":"Sam"}"#).unwrap();
        let defaults = ContentRecord::builtin_default();

        assert_eq!(record.name, "Sam");
        assert_eq!(record.role, defaults.role);
        assert_eq!(record.projects, defaults.projects);
    }

    #[test]
    fn from_json_rejects_non_object_payloads() {
        assert!(ContentRecord::from_json("[1, 2]").is_err());
        assert!(ContentRecord::from_json("not json").is_err());
    }
}
