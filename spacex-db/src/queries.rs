//! Typed query methods over the launch table.
//!
//! Every query is read-only. Results come back as the structs in
//! [`crate::models`].

use crate::models::{LaunchRecord, OutcomeCounts, SiteSuccessRate};
use crate::Database;
use anyhow::Context;
use rusqlite::{params, Row};

const LAUNCH_COLUMNS: &str = "flight_number, launch_site, class, payload_mass_kg,
                              booster_version, booster_version_category";

fn launch_from_row(row: &Row<'_>) -> rusqlite::Result<LaunchRecord> {
    Ok(LaunchRecord {
        flight_number: row.get(0)?,
        launch_site: row.get(1)?,
        class: row.get(2)?,
        payload_mass_kg: row.get(3)?,
        booster_version: row.get(4)?,
        booster_version_category: row.get(5)?,
    })
}

impl Database {
    /// Get the (min, max) payload mass across all launches.
    ///
    /// Fails on an empty table, since there are no bounds to report.
    pub fn query_payload_bounds(&self) -> anyhow::Result<(f64, f64)> {
        let conn = self.conn.borrow();
        let (min, max) = conn
            .query_row(
                "SELECT MIN(payload_mass_kg), MAX(payload_mass_kg) FROM launches",
                [],
                |row| Ok((row.get::<_, Option<f64>>(0)?, row.get::<_, Option<f64>>(1)?)),
            )?;
        let bounds = min.zip(max).context("no launch records loaded")?;
        log::info!(
            "[SpaceX] query: query_payload_bounds returned ({}, {})",
            bounds.0,
            bounds.1
        );
        Ok(bounds)
    }

    /// Mean outcome per launch site, ordered by site name.
    pub fn query_site_success_rates(&self) -> anyhow::Result<Vec<SiteSuccessRate>> {
        let conn = self.conn.borrow();
        let mut stmt = conn.prepare(
            "SELECT launch_site, AVG(class) FROM launches
             GROUP BY launch_site
             ORDER BY launch_site",
        )?;
        let rows = stmt
            .query_map([], |row| {
                Ok(SiteSuccessRate {
                    launch_site: row.get(0)?,
                    success_rate: row.get(1)?,
                })
            })?
            .collect::<Result<Vec<_>, _>>()?;
        log::info!(
            "[SpaceX] query: query_site_success_rates returned {} sites",
            rows.len()
        );
        Ok(rows)
    }

    /// Failure and success counts for a single launch site.
    ///
    /// A site with no launches yields zero for both counts.
    pub fn query_outcome_counts(&self, launch_site: &str) -> anyhow::Result<OutcomeCounts> {
        let conn = self.conn.borrow();
        let (failures, successes) = conn.query_row(
            "SELECT COALESCE(SUM(class = 0), 0), COALESCE(SUM(class = 1), 0)
             FROM launches WHERE launch_site = ?1",
            params![launch_site],
            |row| Ok((row.get::<_, u32>(0)?, row.get::<_, u32>(1)?)),
        )?;
        log::info!(
            "[SpaceX] query: query_outcome_counts({}) returned {} failures, {} successes",
            launch_site,
            failures,
            successes
        );
        Ok(OutcomeCounts {
            launch_site: launch_site.to_string(),
            failures,
            successes,
        })
    }

    /// Launch records in file order, restricted to one site when given.
    pub fn query_launches(&self, launch_site: Option<&str>) -> anyhow::Result<Vec<LaunchRecord>> {
        let conn = self.conn.borrow();
        let rows = match launch_site {
            Some(site) => {
                let mut stmt = conn.prepare(&format!(
                    "SELECT {} FROM launches WHERE launch_site = ?1 ORDER BY row_order",
                    LAUNCH_COLUMNS
                ))?;
                let rows = stmt
                    .query_map(params![site], launch_from_row)?
                    .collect::<Result<Vec<_>, _>>()?;
                rows
            }
            None => {
                let mut stmt = conn.prepare(&format!(
                    "SELECT {} FROM launches ORDER BY row_order",
                    LAUNCH_COLUMNS
                ))?;
                let rows = stmt
                    .query_map([], launch_from_row)?
                    .collect::<Result<Vec<_>, _>>()?;
                rows
            }
        };
        log::info!(
            "[SpaceX] query: query_launches({:?}) returned {} records",
            launch_site,
            rows.len()
        );
        Ok(rows)
    }

    /// Distinct launch site names, ordered.
    pub fn query_launch_sites(&self) -> anyhow::Result<Vec<String>> {
        let conn = self.conn.borrow();
        let mut stmt =
            conn.prepare("SELECT DISTINCT launch_site FROM launches ORDER BY launch_site")?;
        let rows = stmt
            .query_map([], |row| row.get(0))?
            .collect::<Result<Vec<String>, _>>()?;
        Ok(rows)
    }

    /// Total number of launch records.
    pub fn query_launch_count(&self) -> anyhow::Result<usize> {
        let conn = self.conn.borrow();
        let count: i64 = conn.query_row("SELECT COUNT(*) FROM launches", [], |row| row.get(0))?;
        Ok(count as usize)
    }
}

#[cfg(test)]
mod tests {
    use crate::Database;

    /// Three sites with mixed outcomes, rows deliberately not grouped by site.
    fn sample_launch_db() -> Database {
        let db = Database::new().unwrap();
        let csv = "\
,Flight Number,Launch Site,class,Payload Mass (kg),Booster Version,Booster Version Category
0,1,CCAFS LC-40,0,0.0,F9 v1.0  B0003,v1.0
1,2,VAFB SLC-4E,0,500.0,F9 v1.1  B1003,v1.1
2,3,CCAFS LC-40,1,2034.0,F9 FT B1019,FT
3,4,KSC LC-39A,1,5300.0,F9 FT B1032.1,FT
4,5,CCAFS LC-40,1,4600.0,F9 FT B1026,FT
5,6,VAFB SLC-4E,1,9600.0,F9 FT B1029.1,FT
6,7,CCAFS LC-40,0,3600.0,F9 FT B1024,FT
";
        db.load_launches(csv).unwrap();
        db
    }

    #[test]
    fn query_payload_bounds() {
        let db = sample_launch_db();
        let (min, max) = db.query_payload_bounds().unwrap();
        assert_eq!(min, 0.0);
        assert_eq!(max, 9600.0);
    }

    #[test]
    fn query_payload_bounds_empty_table_fails() {
        let db = Database::new().unwrap();
        assert!(db.query_payload_bounds().is_err());
    }

    #[test]
    fn query_site_success_rates_means_per_site() {
        let db = sample_launch_db();
        let rates = db.query_site_success_rates().unwrap();
        let sites: Vec<&str> = rates.iter().map(|r| r.launch_site.as_str()).collect();
        assert_eq!(sites, vec!["CCAFS LC-40", "KSC LC-39A", "VAFB SLC-4E"]);
        // CCAFS LC-40: 2 of 4
        assert!((rates[0].success_rate - 0.5).abs() < 1e-9);
        assert!((rates[1].success_rate - 1.0).abs() < 1e-9);
        assert!((rates[2].success_rate - 0.5).abs() < 1e-9);
    }

    #[test]
    fn query_outcome_counts_for_site() {
        let db = sample_launch_db();
        let counts = db.query_outcome_counts("CCAFS LC-40").unwrap();
        assert_eq!(counts.failures, 2);
        assert_eq!(counts.successes, 2);
        assert_eq!(counts.total(), 4);
    }

    #[test]
    fn query_outcome_counts_only_successes() {
        let db = sample_launch_db();
        let counts = db.query_outcome_counts("KSC LC-39A").unwrap();
        assert_eq!(counts.failures, 0);
        assert_eq!(counts.successes, 1);
    }

    #[test]
    fn query_outcome_counts_unknown_site_is_zero() {
        let db = sample_launch_db();
        let counts = db.query_outcome_counts("Boca Chica").unwrap();
        assert_eq!(counts.total(), 0);
    }

    #[test]
    fn query_launches_preserves_file_order() {
        let db = sample_launch_db();
        let all = db.query_launches(None).unwrap();
        assert_eq!(all.len(), 7);
        let flights: Vec<i64> = all.iter().filter_map(|r| r.flight_number).collect();
        assert_eq!(flights, vec![1, 2, 3, 4, 5, 6, 7]);

        let vafb = db.query_launches(Some("VAFB SLC-4E")).unwrap();
        let flights: Vec<i64> = vafb.iter().filter_map(|r| r.flight_number).collect();
        assert_eq!(flights, vec![2, 6]);
    }

    #[test]
    fn query_launch_sites_distinct() {
        let db = sample_launch_db();
        assert_eq!(
            db.query_launch_sites().unwrap(),
            vec!["CCAFS LC-40", "KSC LC-39A", "VAFB SLC-4E"]
        );
    }

    #[test]
    fn query_launch_count() {
        let db = sample_launch_db();
        assert_eq!(db.query_launch_count().unwrap(), 7);
    }
}
