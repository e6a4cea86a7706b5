//! CLI command definitions

use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "folio")]
#[command(about = "Terminal portfolio viewer", long_about = None)]
#[command(version)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Create a starter profile
    Init {
        /// Directory to initialize (default: current directory)
        #[arg(default_value = ".")]
        path: PathBuf,
    },

    /// Show name, headline and contact details
    About,

    /// Show the chronological journey timeline
    Timeline {
        /// Newest entries first (undated entries still trail)
        #[arg(short, long)]
        recent: bool,
    },

    /// List projects, optionally filtered by tags
    Projects {
        /// Keep only items carrying ALL given tags; may be repeated
        #[arg(short, long = "tag", value_name = "TAG")]
        tags: Vec<String>,
    },

    /// List hackathon entries, optionally filtered by tags
    Hackathons {
        /// Keep only items carrying ALL given tags; may be repeated
        #[arg(short, long = "tag", value_name = "TAG")]
        tags: Vec<String>,
    },

    /// List work and teaching experience
    Experience,

    /// List skill tags with usage counts
    Skills,

    /// Show full details for one project
    Show {
        /// Project identifier
        id: String,
    },
}
