//! Filtered listing use cases

use crate::domain::filter::matches_all_tags;
use crate::domain::{Hackathon, Profile, Project, TagSelection};
use crate::error::{FolioError, Result};

/// Projects visible under the active tag selection, in declaration order.
pub fn visible_projects<'a>(profile: &'a Profile, selection: &TagSelection) -> Vec<&'a Project> {
    profile
        .projects
        .iter()
        .filter(|p| matches_all_tags(&p.tags, selection.as_slice()))
        .collect()
}

/// Hackathon entries visible under the active tag selection.
pub fn visible_hackathons<'a>(
    profile: &'a Profile,
    selection: &TagSelection,
) -> Vec<&'a Hackathon> {
    profile
        .hackathons
        .iter()
        .filter(|h| matches_all_tags(&h.tags, selection.as_slice()))
        .collect()
}

/// Look up one project by its identifier.
pub fn project_detail<'a>(profile: &'a Profile, id: &str) -> Result<&'a Project> {
    profile
        .projects
        .iter()
        .find(|p| p.id == id)
        .ok_or_else(|| FolioError::ProjectNotFound(id.to_string()))
}
