//! Portfolio content model
//!
//! Plain immutable records describing the profile owner and the three
//! entry collections (projects, hackathons, experience). Loaded once from
//! static configuration; nothing here is created or mutated at runtime.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::collections::{BTreeMap, BTreeSet};

/// External links attached to a project or hackathon entry.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct LinkSet {
    /// Source code URL
    pub source: Option<String>,
    /// Live demo URL
    pub demo: Option<String>,
}

/// A portfolio project. Projects carry no date field; they always sort
/// after dated entries in the timeline.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Project {
    pub id: String,
    pub title: String,
    /// One-line summary
    pub description: String,
    #[serde(default)]
    pub tags: Vec<String>,
    #[serde(default)]
    pub links: LinkSet,
    /// Problem narrative, free text
    pub problem: String,
    /// Solution narrative, free text
    pub solution: String,
    #[serde(default)]
    pub tech: Vec<String>,
    /// Metrics/impact bullets
    #[serde(default)]
    pub highlights: Vec<String>,
}

/// A hackathon entry. The date is a free-text string like "Oct 2024".
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Hackathon {
    pub id: String,
    pub event_name: String,
    pub project_name: String,
    pub date: String,
    pub role: String,
    /// One-line summary
    pub description: String,
    pub award: Option<String>,
    #[serde(default)]
    pub tags: Vec<String>,
    #[serde(default)]
    pub links: LinkSet,
}

/// A work or teaching position. Dates are a free-text range string like
/// "June 2024 – August 2024".
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExperienceItem {
    pub id: String,
    pub role: String,
    pub org: String,
    pub dates: String,
    #[serde(default)]
    pub bullets: Vec<String>,
}

/// Social profile URLs
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Socials {
    pub github: Option<String>,
    pub linkedin: Option<String>,
}

/// The complete profile: owner details plus the three entry collections.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Profile {
    pub name: String,
    pub headline: String,
    pub about: String,
    pub email: String,
    /// When the profile content was last revised
    #[serde(default)]
    pub updated: Option<DateTime<Utc>>,
    #[serde(default)]
    pub socials: Socials,
    #[serde(default, rename = "project")]
    pub projects: Vec<Project>,
    #[serde(default, rename = "hackathon")]
    pub hackathons: Vec<Hackathon>,
    #[serde(default, rename = "experience")]
    pub experience: Vec<ExperienceItem>,
}

/// Collect unique tags from projects and hackathons, sorted alphabetically.
pub fn collect_skills(profile: &Profile) -> Vec<String> {
    let mut set = BTreeSet::new();
    for project in &profile.projects {
        set.extend(project.tags.iter().cloned());
    }
    for hackathon in &profile.hackathons {
        set.extend(hackathon.tags.iter().cloned());
    }
    set.into_iter().collect()
}

/// Tag usage counts across projects and hackathons.
pub fn skill_counts(profile: &Profile) -> BTreeMap<String, usize> {
    let mut counts = BTreeMap::new();
    for project in &profile.projects {
        for tag in &project.tags {
            *counts.entry(tag.clone()).or_insert(0) += 1;
        }
    }
    for hackathon in &profile.hackathons {
        for tag in &hackathon.tags {
            *counts.entry(tag.clone()).or_insert(0) += 1;
        }
    }
    counts
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_profile() -> Profile {
        Profile {
            name: "Test Person".to_string(),
            headline: "Engineer".to_string(),
            about: "About text".to_string(),
            email: "test@example.com".to_string(),
            socials: Socials::default(),
            updated: None,
            projects: vec![Project {
                id: "alpha".to_string(),
                title: "Alpha".to_string(),
                description: "A project".to_string(),
                tags: vec!["Rust".to_string(), "CLI".to_string()],
                links: LinkSet::default(),
                problem: "p".to_string(),
                solution: "s".to_string(),
                tech: vec!["Rust".to_string()],
                highlights: vec![],
            }],
            hackathons: vec![Hackathon {
                id: "hack-alpha".to_string(),
                event_name: "RustConf Hack".to_string(),
                project_name: "Alpha".to_string(),
                date: "Oct 2024".to_string(),
                role: "Lead".to_string(),
                description: "Built a thing".to_string(),
                award: Some("Winner".to_string()),
                tags: vec!["Rust".to_string(), "Networking".to_string()],
                links: LinkSet::default(),
            }],
            experience: vec![ExperienceItem {
                id: "acme".to_string(),
                role: "Intern".to_string(),
                org: "Acme".to_string(),
                dates: "June 2024 – August 2024".to_string(),
                bullets: vec!["Did work".to_string()],
            }],
        }
    }

    #[test]
    fn test_collect_skills_deduplicates_and_sorts() {
        let profile = sample_profile();
        let skills = collect_skills(&profile);
        assert_eq!(skills, vec!["CLI", "Networking", "Rust"]);
    }

    #[test]
    fn test_skill_counts_spans_both_collections() {
        let profile = sample_profile();
        let counts = skill_counts(&profile);
        assert_eq!(counts.get("Rust"), Some(&2));
        assert_eq!(counts.get("CLI"), Some(&1));
        assert_eq!(counts.get("Networking"), Some(&1));
        assert_eq!(counts.get("Go"), None);
    }

    #[test]
    fn test_profile_toml_round_trip() {
        let profile = sample_profile();
        let serialized = toml::to_string_pretty(&profile).unwrap();
        let parsed: Profile = toml::from_str(&serialized).unwrap();
        assert_eq!(parsed, profile);
    }

    #[test]
    fn test_profile_parses_with_defaults() {
        let minimal = r#"
name = "Someone"
headline = "Builder"
about = "Short bio"
email = "someone@example.com"

[[project]]
id = "one"
title = "One"
description = "First"
problem = "p"
solution = "s"
"#;
        let parsed: Profile = toml::from_str(minimal).unwrap();
        assert_eq!(parsed.projects.len(), 1);
        assert!(parsed.projects[0].tags.is_empty());
        assert!(parsed.projects[0].highlights.is_empty());
        assert_eq!(parsed.projects[0].links, LinkSet::default());
        assert!(parsed.hackathons.is_empty());
        assert!(parsed.experience.is_empty());
        assert!(parsed.updated.is_none());
    }

    #[test]
    fn test_award_absent_when_not_given() {
        let entry = r#"
name = "Someone"
headline = "Builder"
about = "Short bio"
email = "someone@example.com"

[[hackathon]]
id = "h1"
event_name = "Event"
project_name = "Proj"
date = "Oct 2024"
role = "Solo"
description = "d"
"#;
        let parsed: Profile = toml::from_str(entry).unwrap();
        assert_eq!(parsed.hackathons[0].award, None);
    }
}
