//! Initialize profile use case

use crate::domain::{ExperienceItem, Hackathon, LinkSet, Profile, Project, Socials};
use crate::error::{FolioError, Result};
use crate::infrastructure::{FileSystemStore, ProfileStore};
use chrono::Utc;
use std::fs;
use std::path::Path;

/// Create a starter profile at the specified path.
pub fn init(path: &Path) -> Result<()> {
    if !path.exists() {
        fs::create_dir_all(path)?;
    }

    let store = FileSystemStore::new(path.to_path_buf());

    if store.is_initialized() {
        return Err(FolioError::Config(format!(
            "Profile already exists: {}",
            store.profile_path().display()
        )));
    }

    store.save_profile(&starter_profile())?;

    println!("Created {}", store.profile_path().display());
    println!("Edit it, then try 'folio timeline' or 'folio projects'");

    Ok(())
}

/// Placeholder profile with one entry per collection so every command has
/// something to show out of the box.
fn starter_profile() -> Profile {
    Profile {
        name: "Your Name".to_string(),
        headline: "Engineer building things worth shipping.".to_string(),
        about: "A few sentences about what you work on and care about.".to_string(),
        email: "you@example.com".to_string(),
        updated: Some(Utc::now()),
        socials: Socials {
            github: Some("https://github.com/you".to_string()),
            linkedin: Some("https://www.linkedin.com/in/you".to_string()),
        },
        projects: vec![Project {
            id: "sample-project".to_string(),
            title: "Sample Project".to_string(),
            description: "One line on what it does and why it matters.".to_string(),
            tags: vec!["Rust".to_string(), "CLI".to_string()],
            links: LinkSet {
                source: Some("https://github.com/you/sample-project".to_string()),
                demo: None,
            },
            problem: "What was hard or broken before.".to_string(),
            solution: "How the project addresses it.".to_string(),
            tech: vec!["Rust".to_string()],
            highlights: vec!["A concrete metric or outcome".to_string()],
        }],
        hackathons: vec![Hackathon {
            id: "sample-hack".to_string(),
            event_name: "Example Hackathon".to_string(),
            project_name: "Weekend Build".to_string(),
            date: "Oct 2024".to_string(),
            role: "Builder".to_string(),
            description: "What the team shipped in a weekend.".to_string(),
            award: Some("Best Demo".to_string()),
            tags: vec!["Rust".to_string(), "Prototyping".to_string()],
            links: LinkSet::default(),
        }],
        experience: vec![ExperienceItem {
            id: "sample-role".to_string(),
            role: "Software Engineer".to_string(),
            org: "Example Org".to_string(),
            dates: "June 2024 – Present".to_string(),
            bullets: vec!["What you built and the impact it had".to_string()],
        }],
    }
}
