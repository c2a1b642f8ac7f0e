//! HTML escaping and fragment templates for page bindings.
//!
//! # Responsibility
//! - Escape user-controlled text for safe interpolation.
//! - Render project cards and small attribute values as strings.
//!
//! # Invariants
//! - `escape_html` covers `&`, `<` and `>`; fragments place user text only
//!   in element content, never in attribute position.

use crate::model::content::Project;

/// Escapes user-controlled text for element-content interpolation.
pub fn escape_html(input: &str) -> String {
    input
        .replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
}

/// Renders one project card fragment for the projects grid.
pub fn project_card_html(project: &Project) -> String {
    format!(
        "<article class=\"card project-card glass\"><h3>{}</h3><p>{}</p><div class=\"project-tech\">{}</div></article>",
        escape_html(&project.title),
        escape_html(&project.desc),
        escape_html(&project.tech)
    )
}

/// Renders the full projects grid, regenerated from scratch on every load.
pub fn projects_grid_html(projects: &[Project]) -> String {
    projects.iter().map(project_card_html).collect()
}

/// Builds the `mailto:` href for the contact link.
pub fn mailto_href(email: &str) -> String {
    format!("mailto:{email}")
}

/// Builds the avatar background-image style from a photo data-URL.
pub fn avatar_style(data_url: &str) -> String {
    format!("background-image:url({data_url})")
}
