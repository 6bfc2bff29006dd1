//! Query result model structs for launch data.
//!
//! All structs derive `Serialize` so they can be handed to D3.js as JSON
//! or printed by the CLI.

use serde::{Deserialize, Serialize};

/// One row of the launch table.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct LaunchRecord {
    /// Sequential flight number, when the source file carries it.
    pub flight_number: Option<i64>,
    /// Launch site name (e.g. "KSC LC-39A").
    pub launch_site: String,
    /// Launch outcome: 1 = success, 0 = failure.
    pub class: u8,
    /// Payload mass in kilograms.
    pub payload_mass_kg: f64,
    /// Full booster version (e.g. "F9 FT B1021.1"), when present.
    pub booster_version: Option<String>,
    /// Booster family (e.g. "FT", "B4").
    pub booster_version_category: String,
}

/// Mean outcome for one launch site.
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct SiteSuccessRate {
    pub launch_site: String,
    /// Mean of `class` over the site's launches, in `[0, 1]`.
    pub success_rate: f64,
}

/// Failure and success counts for one launch site.
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct OutcomeCounts {
    pub launch_site: String,
    pub failures: u32,
    pub successes: u32,
}

impl OutcomeCounts {
    pub fn total(&self) -> u32 {
        self.failures + self.successes
    }
}
