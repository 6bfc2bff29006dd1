//! CSV loading for the launch table.
//!
//! Columns are matched by header name, so the leading unnamed index column
//! and any other extras in the source file are ignored.
//!
//! ```text
//! ,Flight Number,Launch Site,class,Payload Mass (kg),Booster Version,Booster Version Category
//! 0,1,CCAFS LC-40,0,0.0,F9 v1.0  B0003,v1.0
//! ```

use crate::Database;
use anyhow::{bail, Context};
use rusqlite::params;
use serde::Deserialize;

/// Columns the loader cannot do without.
pub const REQUIRED_COLUMNS: [&str; 4] = [
    "Launch Site",
    "Payload Mass (kg)",
    "class",
    "Booster Version Category",
];

#[derive(Debug, Deserialize)]
struct CsvLaunchRow {
    #[serde(rename = "Flight Number", default)]
    flight_number: Option<i64>,
    #[serde(rename = "Launch Site")]
    launch_site: String,
    // Parsed as a float so "1" and "1.0" are both accepted.
    class: f64,
    #[serde(rename = "Payload Mass (kg)")]
    payload_mass_kg: f64,
    #[serde(rename = "Booster Version", default)]
    booster_version: Option<String>,
    #[serde(rename = "Booster Version Category")]
    booster_version_category: String,
}

impl Database {
    /// Load launch records from a headed CSV string.
    ///
    /// Returns the number of rows loaded. Fails on a missing required column,
    /// an unparseable field, or a `class` value other than 0 or 1.
    pub fn load_launches(&self, csv_data: &str) -> anyhow::Result<usize> {
        let conn = self.conn.borrow();
        let mut rdr = csv::ReaderBuilder::new()
            .has_headers(true)
            .trim(csv::Trim::All)
            .from_reader(csv_data.as_bytes());

        let headers = rdr.headers()?.clone();
        for column in REQUIRED_COLUMNS {
            if !headers.iter().any(|h| h == column) {
                bail!("launch CSV is missing required column '{}'", column);
            }
        }

        // All rows land or none do; dropping `tx` on an early return rolls back.
        let tx = conn.unchecked_transaction()?;
        let mut count = 0usize;
        {
            let mut stmt = tx.prepare(
                "INSERT INTO launches
                 (flight_number, launch_site, class, payload_mass_kg,
                  booster_version, booster_version_category)
                 VALUES (?1, ?2, ?3, ?4, ?5, ?6)",
            )?;

            for (index, result) in rdr.deserialize::<CsvLaunchRow>().enumerate() {
                // Header is line 1, so data row `index` sits on line index + 2.
                let line = index + 2;
                let row =
                    result.with_context(|| format!("malformed launch record on line {}", line))?;
                let class: u8 = if row.class == 0.0 {
                    0
                } else if row.class == 1.0 {
                    1
                } else {
                    bail!("class must be 0 or 1 on line {}, got {}", line, row.class);
                };

                stmt.execute(params![
                    row.flight_number,
                    row.launch_site,
                    class,
                    row.payload_mass_kg,
                    row.booster_version.filter(|v| !v.is_empty()),
                    row.booster_version_category,
                ])?;
                count += 1;
            }
        }
        tx.commit()?;
        log::info!("[SpaceX] loader: Loaded {} launch records", count);
        Ok(count)
    }
}
