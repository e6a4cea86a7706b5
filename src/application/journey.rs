//! Journey timeline use case

use crate::domain::{build_milestones_ordered, Milestone, TimelineOrder};
use crate::error::Result;
use crate::infrastructure::{FileSystemStore, ProfileStore};

/// Service for assembling the chronological journey timeline
pub struct JourneyService {
    store: FileSystemStore,
}

impl JourneyService {
    /// Create a new journey service
    pub fn new(store: FileSystemStore) -> Self {
        JourneyService { store }
    }

    /// Load the profile and build the milestone sequence.
    pub fn execute(&self, order: TimelineOrder) -> Result<Vec<Milestone>> {
        let profile = self.store.load_profile()?;
        Ok(build_milestones_ordered(
            &profile.projects,
            &profile.hackathons,
            &profile.experience,
            order,
        ))
    }
}
