//! Application layer - Use cases and orchestration

pub mod init;
pub mod journey;
pub mod listing;

pub use journey::JourneyService;
pub use listing::{project_detail, visible_hackathons, visible_projects};
