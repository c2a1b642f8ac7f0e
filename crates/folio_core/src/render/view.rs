//! Page view model and admin form state.
//!
//! # Responsibility
//! - Hold everything the markup layer binds: brand, hero fields, contact
//!   link, rendered project cards, avatar style.
//! - Hold the admin panel's input state, populated from the active record.
//!
//! # Invariants
//! - `project_cards` is the source of truth for what the grid currently
//!   shows; save reads projects back from here, not from the form.

use crate::model::content::{ContentRecord, Project};
use crate::render::html::{mailto_href, projects_grid_html};

/// Everything the page renders from the active record.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PageView {
    /// Nav brand text.
    pub brand: String,
    /// Hero display name.
    pub display_name: String,
    /// Hero role line.
    pub role: String,
    /// About-card paragraph.
    pub about: String,
    /// Contact link text.
    pub email_text: String,
    /// Contact link `mailto:` href.
    pub email_href: String,
    /// Rendered project-card state, in grid order.
    pub project_cards: Vec<Project>,
    /// Avatar background style once a photo is stored.
    pub avatar_style: Option<String>,
}

impl PageView {
    /// Derives the view purely from a record. Avatar state is bound
    /// separately because it lives under its own storage key.
    pub fn from_record(record: &ContentRecord) -> Self {
        Self {
            brand: record.name.clone(),
            display_name: record.name.clone(),
            role: record.role.clone(),
            about: record.about.clone(),
            email_text: record.email.clone(),
            email_href: mailto_href(&record.email),
            project_cards: record.projects.clone(),
            avatar_style: None,
        }
    }

    /// Renders the grid markup for the current card state.
    pub fn projects_html(&self) -> String {
        projects_grid_html(&self.project_cards)
    }
}

/// Admin panel input state.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AdminForm {
    pub name: String,
    pub role: String,
    pub email: String,
    pub about: String,
    pub project_title: String,
    pub project_desc: String,
    pub project_tech: String,
}

impl AdminForm {
    /// Populates the profile inputs from the active record. Project inputs
    /// start empty; they are a staging area, not record state.
    pub fn from_record(record: &ContentRecord) -> Self {
        Self {
            name: record.name.clone(),
            role: record.role.clone(),
            email: record.email.clone(),
            about: record.about.clone(),
            ..Self::default()
        }
    }

    /// Clears the project staging inputs after a successful add.
    pub fn clear_project_inputs(&mut self) {
        self.project_title.clear();
        self.project_desc.clear();
        self.project_tech.clear();
    }
}

#[cfg(test)]
mod tests {
    use super::{AdminForm, PageView};
    use crate::model::content::ContentRecord;

    #[test]
    fn view_binds_name_to_brand_and_hero() {
        let record = ContentRecord::builtin_default();
        let view = PageView::from_record(&record);

        assert_eq!(view.brand, record.name);
        assert_eq!(view.display_name, record.name);
        assert_eq!(view.email_href, format!("mailto:{}", record.email));
        assert_eq!(view.project_cards, record.projects);
        assert!(view.avatar_style.is_none());
    }

    #[test]
    fn form_population_leaves_project_inputs_empty() {
        let record = ContentRecord::builtin_default();
        let form = AdminForm::from_record(&record);

        assert_eq!(form.name, record.name);
        assert!(form.project_title.is_empty());
        assert!(form.project_desc.is_empty());
        assert!(form.project_tech.is_empty());
    }
}
