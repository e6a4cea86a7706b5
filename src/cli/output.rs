//! Output formatting utilities

use crate::domain::{ExperienceItem, Hackathon, Milestone, Profile, Project};
use std::collections::BTreeMap;

/// Format the profile header: owner details and contact links.
pub fn format_about(profile: &Profile) -> String {
    let mut out = String::new();
    out.push_str(&format!("{}\n", profile.name));
    out.push_str(&format!("{}\n\n", profile.headline));
    out.push_str(&format!("{}\n\n", profile.about));
    out.push_str(&format!("email:    {}\n", profile.email));
    if let Some(github) = &profile.socials.github {
        out.push_str(&format!("github:   {}\n", github));
    }
    if let Some(linkedin) = &profile.socials.linkedin {
        out.push_str(&format!("linkedin: {}\n", linkedin));
    }
    if let Some(updated) = profile.updated {
        out.push_str(&format!("updated:  {}\n", updated.format("%B %Y")));
    }
    out
}

/// Format the journey timeline, one milestone per line.
pub fn format_timeline(milestones: &[Milestone]) -> String {
    if milestones.is_empty() {
        return "No milestones found\n".to_string();
    }

    let mut out = String::new();
    for milestone in milestones {
        out.push_str(&format!(
            "{} [{}] {}",
            milestone.kind.marker(),
            milestone.kind.label(),
            milestone.title
        ));
        if !milestone.date_range.is_empty() {
            out.push_str(&format!("  ({})", milestone.date_range));
        }
        out.push_str(&format!("  {}\n", milestone.target.href()));
    }
    out
}

/// Format a list of projects for display
pub fn format_project_list(projects: &[&Project]) -> String {
    if projects.is_empty() {
        return "No projects match the active tags\n".to_string();
    }

    let mut out = String::new();
    for project in projects {
        out.push_str(&format!("{} ({})\n", project.title, project.id));
        out.push_str(&format!("    {}\n", project.description));
        if !project.tags.is_empty() {
            out.push_str(&format!("    tags: {}\n", project.tags.join(", ")));
        }
    }
    out
}

/// Format a list of hackathon entries for display
pub fn format_hackathon_list(hackathons: &[&Hackathon]) -> String {
    if hackathons.is_empty() {
        return "No hackathons match the active tags\n".to_string();
    }

    let mut out = String::new();
    for hackathon in hackathons {
        out.push_str(&format!("{} • {}\n", hackathon.event_name, hackathon.date));
        out.push_str(&format!(
            "    {} — {}\n",
            hackathon.project_name, hackathon.role
        ));
        out.push_str(&format!("    {}\n", hackathon.description));
        if let Some(award) = hackathon.award.as_deref().filter(|a| !a.is_empty()) {
            out.push_str(&format!("    award: {}\n", award));
        }
        if !hackathon.tags.is_empty() {
            out.push_str(&format!("    tags: {}\n", hackathon.tags.join(", ")));
        }
    }
    out
}

/// Format the experience list with bullets
pub fn format_experience_list(items: &[ExperienceItem]) -> String {
    if items.is_empty() {
        return "No experience entries found\n".to_string();
    }

    let mut out = String::new();
    for item in items {
        out.push_str(&format!("{}, {}  ({})\n", item.role, item.org, item.dates));
        for bullet in &item.bullets {
            out.push_str(&format!("    • {}\n", bullet));
        }
    }
    out
}

/// Format skills with usage counts, one per line.
pub fn format_skill_list(skills: &[String], counts: &BTreeMap<String, usize>) -> String {
    if skills.is_empty() {
        return "No skills found\n".to_string();
    }

    let mut out = String::new();
    for skill in skills {
        let count = counts.get(skill).copied().unwrap_or(0);
        out.push_str(&format!("{:>3}  {}\n", count, skill));
    }
    out
}

/// Format the full detail view for one project
pub fn format_project_detail(project: &Project) -> String {
    let mut out = String::new();
    out.push_str(&format!("{}\n", project.title));
    out.push_str(&format!("{}\n\n", project.description));
    out.push_str(&format!("Problem:  {}\n", project.problem));
    out.push_str(&format!("Solution: {}\n", project.solution));
    if !project.tech.is_empty() {
        out.push_str(&format!("\ntech: {}\n", project.tech.join(", ")));
    }
    if !project.highlights.is_empty() {
        out.push_str("highlights:\n");
        for highlight in &project.highlights {
            out.push_str(&format!("    • {}\n", highlight));
        }
    }
    if let Some(source) = &project.links.source {
        out.push_str(&format!("source: {}\n", source));
    }
    if let Some(demo) = &project.links.demo {
        out.push_str(&format!("demo:   {}\n", demo));
    }
    out
}
