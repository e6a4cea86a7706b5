//! Journey timeline construction
//!
//! Merges the three entry collections into one ordered sequence of uniform
//! milestones, each tagged with its originating kind and a navigation
//! target. The builder is pure: it re-derives its output fully from its
//! inputs and is safe to call repeatedly.

use std::cmp::Ordering;

use super::datekey;
use super::profile::{ExperienceItem, Hackathon, Project};

/// What a milestone was derived from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MilestoneKind {
    Project,
    Hackathon,
    Experience,
    /// A hackathon entry that carries an award
    Award,
    /// A teaching position
    Teaching,
}

impl MilestoneKind {
    /// Lowercase name used in listings
    pub fn label(&self) -> &'static str {
        match self {
            MilestoneKind::Project => "project",
            MilestoneKind::Hackathon => "hackathon",
            MilestoneKind::Experience => "experience",
            MilestoneKind::Award => "award",
            MilestoneKind::Teaching => "teaching",
        }
    }

    /// Timeline marker. Awards share the hackathon treatment, teaching
    /// shares the experience treatment.
    pub fn marker(&self) -> char {
        match self {
            MilestoneKind::Project => '◆',
            MilestoneKind::Hackathon | MilestoneKind::Award => '▲',
            MilestoneKind::Experience | MilestoneKind::Teaching => '●',
        }
    }
}

/// Where activating a milestone takes the viewer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum NavTarget {
    /// A section identifier on the main page
    Section(String),
    /// Direct route to a project detail view
    Project(String),
}

impl NavTarget {
    /// Link target as the site renders it: a section anchor or a project route.
    pub fn href(&self) -> String {
        match self {
            NavTarget::Section(id) => format!("#{}", id),
            NavTarget::Project(id) => format!("/projects/{}/", id),
        }
    }
}

/// Ordering for the assembled timeline.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum TimelineOrder {
    /// Oldest first; undated entries trail
    #[default]
    Chronological,
    /// Newest first; undated entries still trail
    RecentFirst,
}

/// One normalized, displayable timeline entry.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Milestone {
    pub id: String,
    pub title: String,
    pub date_range: String,
    pub kind: MilestoneKind,
    pub target: NavTarget,
    pub sort_key: u32,
    pub subtitle: Option<String>,
}

impl Milestone {
    /// Short label for compact rendering: the subtitle when present and
    /// non-blank, otherwise the first three words of the title.
    pub fn display_label(&self) -> String {
        if let Some(subtitle) = &self.subtitle {
            if !subtitle.trim().is_empty() {
                return subtitle.clone();
            }
        }
        let words: Vec<&str> = self.title.split_whitespace().take(3).collect();
        if words.is_empty() {
            "Item".to_string()
        } else {
            words.join(" ")
        }
    }
}

/// Build the unified journey timeline, oldest first.
///
/// Every milestone id is its source id under a type prefix (`exp-`,
/// `hack-`, `proj-`), so ids stay unique across collections. Entries whose
/// dates yield no key (all projects, plus anything unparseable) are placed
/// after every dated entry in collection-iteration order; the relative
/// order of two undated entries is not a guarantee callers may rely on.
pub fn build_milestones(
    projects: &[Project],
    hackathons: &[Hackathon],
    experience: &[ExperienceItem],
) -> Vec<Milestone> {
    build_milestones_ordered(projects, hackathons, experience, TimelineOrder::Chronological)
}

/// Build the journey timeline with an explicit ordering.
pub fn build_milestones_ordered(
    projects: &[Project],
    hackathons: &[Hackathon],
    experience: &[ExperienceItem],
    order: TimelineOrder,
) -> Vec<Milestone> {
    let mut milestones =
        Vec::with_capacity(projects.len() + hackathons.len() + experience.len());

    for item in experience {
        milestones.push(Milestone {
            id: format!("exp-{}", item.id),
            title: format!("{} at {}", item.role, item.org),
            date_range: item.dates.clone(),
            kind: MilestoneKind::Experience,
            target: NavTarget::Section(format!("exp-{}", item.id)),
            sort_key: datekey::sort_key(&item.dates),
            subtitle: None,
        });
    }

    for hackathon in hackathons {
        let (kind, title) = match hackathon.award.as_deref().filter(|a| !a.is_empty()) {
            Some(award) => (
                MilestoneKind::Award,
                format!("{} – {}", hackathon.project_name, award),
            ),
            None => (MilestoneKind::Hackathon, hackathon.project_name.clone()),
        };
        milestones.push(Milestone {
            id: format!("hack-{}", hackathon.id),
            title,
            date_range: hackathon.date.clone(),
            kind,
            target: NavTarget::Section(format!("hack-{}", hackathon.id)),
            sort_key: datekey::sort_key(&hackathon.date),
            subtitle: None,
        });
    }

    for project in projects {
        milestones.push(Milestone {
            id: format!("proj-{}", project.id),
            title: project.title.clone(),
            date_range: String::new(),
            kind: MilestoneKind::Project,
            target: NavTarget::Project(project.id.clone()),
            sort_key: datekey::UNDATED,
            subtitle: None,
        });
    }

    // Stable sort; undated entries always trail regardless of direction.
    milestones.sort_by(|a, b| match (a.sort_key, b.sort_key) {
        (datekey::UNDATED, datekey::UNDATED) => Ordering::Equal,
        (datekey::UNDATED, _) => Ordering::Greater,
        (_, datekey::UNDATED) => Ordering::Less,
        (ka, kb) => match order {
            TimelineOrder::Chronological => ka.cmp(&kb),
            TimelineOrder::RecentFirst => kb.cmp(&ka),
        },
    });

    milestones
}
