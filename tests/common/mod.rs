use assert_cmd::Command;
use std::fs;
use std::path::Path;

pub fn folio_cmd() -> Command {
    let mut cmd = Command::cargo_bin("folio").unwrap();
    cmd.env_remove("FOLIO_ROOT");
    cmd
}

/// Fixture profile: two projects, two hackathons (one with an award) and
/// two experience entries spanning 2024-2025.
pub const SAMPLE_PROFILE: &str = r#"
name = "Casey Jordan"
headline = "Engineer building fast, reliable tools."
about = "I like turning messy problems into crisp interfaces."
email = "casey@example.com"

[socials]
github = "https://github.com/caseyj"

[[project]]
id = "signal-desk"
title = "Signal Desk"
description = "Real-time dashboard for streaming metrics."
tags = ["Rust", "Real-time", "CLI"]
problem = "Dashboards lagged far behind the data they showed."
solution = "Streamed incremental updates over a push channel."
tech = ["Rust", "WebSockets"]
highlights = ["Sub-second update latency"]

[project.links]
source = "https://github.com/caseyj/signal-desk"

[[project]]
id = "shelf"
title = "Shelf"
description = "Offline-first reading list manager."
tags = ["Go", "Sync"]
problem = "Reading lists scattered across devices."
solution = "Local-first storage with background sync."
tech = ["Go", "SQLite"]

[[hackathon]]
id = "visionhack"
event_name = "VisionHack"
project_name = "GlassReader"
date = "Oct 2024"
role = "Lead"
description = "Camera-based document reader for low-vision users."
award = "Best Accessibility"
tags = ["Rust", "Vision"]

[hackathon.links]
source = "https://github.com/caseyj/glassreader"

[[hackathon]]
id = "syncjam"
event_name = "SyncJam"
project_name = "DriftSync"
date = "Feb 2024"
role = "Backend"
description = "Conflict-free sync prototype."
tags = ["Go"]

[[experience]]
id = "acme-intern"
role = "Software Intern"
org = "Acme Systems"
dates = "Jan 2024 – May 2024"
bullets = ["Built internal tooling", "Cut build times by 40%"]

[[experience]]
id = "nimbus-engineer"
role = "Platform Engineer"
org = "Nimbus"
dates = "July 2025 – Present"
bullets = ["Own the deployment pipeline"]
"#;

pub fn write_sample_profile(dir: &Path) {
    fs::write(dir.join("folio.toml"), SAMPLE_PROFILE).unwrap();
}
