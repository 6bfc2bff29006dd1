//! Subcommands for the SpaceX CLI.
//!
//! Every command loads the launch table, runs the same figure builders as
//! the dashboard, and prints the result as pretty JSON on stdout.

use anyhow::Context;
use clap::Subcommand;
use serde::Serialize;
use spacex_data::slider::{
    PAYLOAD_SLIDER_MARKS, PAYLOAD_SLIDER_MAX, PAYLOAD_SLIDER_MIN, PAYLOAD_SLIDER_STEP,
};
use spacex_data::{payload_scatter, success_pie, PayloadRange, SiteOption};
use spacex_db::Database;
use std::path::Path;

/// Launch records bundled with the workspace.
static BUNDLED_LAUNCHES_CSV: &str = include_str!("../../fixtures/spacex_launch_dash.csv");

#[derive(Subcommand)]
pub enum Command {
    /// List the launch site dropdown options and the sites present in the data
    Sites,

    /// Show the observed payload bounds and the slider configuration
    Bounds,

    /// Print the success pie figure for a site option
    Pie {
        /// Option code: ALL, OPT1, OPT2, OPT3 or OPT4
        #[arg(short, long, default_value = "ALL")]
        site: SiteOption,
    },

    /// Print the payload/outcome scatter figure for a site option
    Scatter {
        /// Option code: ALL, OPT1, OPT2, OPT3 or OPT4
        #[arg(short, long, default_value = "ALL")]
        site: SiteOption,

        /// Low end of the payload slider (defaults to the data minimum)
        #[arg(long)]
        low: Option<f64>,

        /// High end of the payload slider (defaults to the data maximum)
        #[arg(long)]
        high: Option<f64>,
    },
}

#[derive(Serialize)]
struct SiteOptionRow {
    value: &'static str,
    label: &'static str,
    site_name: Option<&'static str>,
    /// Launches the option selects; the whole table for `ALL`.
    launches: u32,
}

#[derive(Serialize)]
struct SitesReport {
    options: Vec<SiteOptionRow>,
    /// Distinct site names in the loaded data, including any no option selects.
    sites_in_data: Vec<String>,
}

fn sites_report(db: &Database) -> anyhow::Result<SitesReport> {
    let total = db.query_launch_count()? as u32;
    let options = SiteOption::OPTIONS
        .into_iter()
        .map(|option| {
            let launches = match option.site_name() {
                Some(site_name) => db.query_outcome_counts(site_name)?.total(),
                None => total,
            };
            Ok(SiteOptionRow {
                value: option.value(),
                label: option.label(),
                site_name: option.site_name(),
                launches,
            })
        })
        .collect::<anyhow::Result<Vec<_>>>()?;
    Ok(SitesReport {
        options,
        sites_in_data: db.query_launch_sites()?,
    })
}

#[derive(Serialize)]
struct BoundsReport {
    data_min: f64,
    data_max: f64,
    slider_min: f64,
    slider_max: f64,
    slider_step: f64,
    slider_marks: [f64; 5],
    default_range: PayloadRange,
}

fn load_database(data: Option<&Path>) -> anyhow::Result<Database> {
    let csv = match data {
        Some(path) => std::fs::read_to_string(path)
            .with_context(|| format!("failed to read {}", path.display()))?,
        None => BUNDLED_LAUNCHES_CSV.to_string(),
    };
    let db = Database::new()?;
    let count = db.load_launches(&csv)?;
    log::info!("Loaded {} launch records", count);
    Ok(db)
}

fn print_json<T: Serialize>(value: &T) -> anyhow::Result<()> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}

pub fn run(command: Command, data: Option<&Path>) -> anyhow::Result<()> {
    match command {
        Command::Sites => {
            let db = load_database(data)?;
            print_json(&sites_report(&db)?)
        }
        Command::Bounds => {
            let db = load_database(data)?;
            let (data_min, data_max) = db.query_payload_bounds()?;
            print_json(&BoundsReport {
                data_min,
                data_max,
                slider_min: PAYLOAD_SLIDER_MIN,
                slider_max: PAYLOAD_SLIDER_MAX,
                slider_step: PAYLOAD_SLIDER_STEP,
                slider_marks: PAYLOAD_SLIDER_MARKS,
                default_range: PayloadRange::new(data_min, data_max),
            })
        }
        Command::Pie { site } => {
            let db = load_database(data)?;
            print_json(&success_pie(&db, site)?)
        }
        Command::Scatter { site, low, high } => {
            let db = load_database(data)?;
            let (data_min, data_max) = db.query_payload_bounds()?;
            let range = PayloadRange::new(low.unwrap_or(data_min), high.unwrap_or(data_max));
            print_json(&payload_scatter(&db, site, range)?)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::Parser;

    #[derive(Parser)]
    struct TestCli {
        #[command(subcommand)]
        command: Command,
    }

    #[test]
    fn test_parse_scatter_arguments() {
        let cli = TestCli::try_parse_from(["spacex-cli", "scatter", "--site", "OPT2", "--low", "1000"])
            .unwrap();
        match cli.command {
            Command::Scatter { site, low, high } => {
                assert_eq!(site, SiteOption::KscLc39a);
                assert_eq!(low, Some(1000.0));
                assert_eq!(high, None);
            }
            _ => panic!("expected scatter command"),
        }
    }

    #[test]
    fn test_parse_rejects_unknown_site() {
        assert!(TestCli::try_parse_from(["spacex-cli", "pie", "--site", "OPT9"]).is_err());
    }

    #[test]
    fn test_bundled_data_loads() {
        let db = load_database(None).unwrap();
        assert_eq!(db.query_launch_count().unwrap(), 56);
    }

    #[test]
    fn test_sites_report_counts_bundled_data() {
        let db = load_database(None).unwrap();
        let report = sites_report(&db).unwrap();
        let counts: Vec<(&str, u32)> = report
            .options
            .iter()
            .map(|row| (row.value, row.launches))
            .collect();
        assert_eq!(
            counts,
            vec![("ALL", 56), ("OPT1", 10), ("OPT2", 13), ("OPT3", 7), ("OPT4", 26)]
        );
        assert_eq!(
            report.sites_in_data,
            vec!["CCAFS LC-40", "CCAFS SLC-40", "KSC LC-39A", "VAFB SLC-4E"]
        );
    }

    #[test]
    fn test_missing_data_file_fails() {
        let err = load_database(Some(Path::new("/nonexistent/launches.csv"))).unwrap_err();
        assert!(err.to_string().contains("failed to read"));
    }
}
