//! folio - Terminal portfolio toolkit
//!
//! Models the content of a personal portfolio (projects, hackathons, work
//! and teaching experience) as immutable records loaded from a TOML
//! profile, with support for a unified chronological timeline and
//! tag-filtered views over the entries.

pub mod application;
pub mod cli;
pub mod domain;
pub mod error;
pub mod infrastructure;

pub use error::FolioError;
