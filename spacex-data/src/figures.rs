//! Chart figures for the two dashboard charts.
//!
//! Both builders are pure functions of the loaded table and the current
//! control values. They never write to the database.

use crate::sites::SiteOption;
use crate::slider::PayloadRange;
use serde::Serialize;
use spacex_db::Database;

/// Axis and legend titles shared by every scatter figure.
pub const SCATTER_X_LABEL: &str = "Payload Mass (kg)";
pub const SCATTER_Y_LABEL: &str = "class";
pub const SCATTER_COLOR_LABEL: &str = "Booster Version Category";

#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct PieSlice {
    pub label: String,
    pub value: f64,
}

/// Pie chart specification consumed by `renderPieChart`.
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct PieFigure {
    pub title: String,
    pub slices: Vec<PieSlice>,
}

impl PieFigure {
    /// Sum of all slice values.
    pub fn total(&self) -> f64 {
        self.slices.iter().map(|s| s.value).sum()
    }
}

/// One launch plotted on the payload/outcome scatter.
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct ScatterPoint {
    pub payload_mass_kg: f64,
    pub class: u8,
    pub booster_version_category: String,
    pub launch_site: String,
    pub flight_number: Option<i64>,
    pub booster_version: Option<String>,
}

/// Scatter chart specification consumed by `renderScatterChart`.
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct ScatterFigure {
    pub title: String,
    pub x_label: String,
    pub y_label: String,
    pub color_label: String,
    /// Distinct booster categories in order of first appearance; one color each.
    pub categories: Vec<String>,
    pub points: Vec<ScatterPoint>,
}

/// Build the success pie for the selected site.
///
/// For [`SiteOption::All`] there is one slice per site, valued at that
/// site's mean outcome. For a single site there are always two slices,
/// failures then successes, valued at their counts.
pub fn success_pie(db: &Database, site: SiteOption) -> anyhow::Result<PieFigure> {
    let figure = match site.site_name() {
        None => {
            let slices = db
                .query_site_success_rates()?
                .into_iter()
                .map(|rate| PieSlice {
                    label: rate.launch_site,
                    value: rate.success_rate,
                })
                .collect();
            PieFigure {
                title: "% of successful launches by launch site".to_string(),
                slices,
            }
        }
        Some(site_name) => {
            let counts = db.query_outcome_counts(site_name)?;
            if counts.total() == 0 {
                log::warn!("[SpaceX] no launches recorded at {}", site_name);
            }
            PieFigure {
                title: format!("% of successful launches at {}", site_name),
                slices: vec![
                    PieSlice {
                        label: "Failure".to_string(),
                        value: f64::from(counts.failures),
                    },
                    PieSlice {
                        label: "Success".to_string(),
                        value: f64::from(counts.successes),
                    },
                ],
            }
        }
    };
    log::debug!(
        "[SpaceX] success_pie({}) built {} slices totalling {}",
        site,
        figure.slices.len(),
        figure.total()
    );
    Ok(figure)
}

/// Build the payload/outcome scatter for the selected site.
///
/// `_payload_range` is accepted from the slider but is not applied: every
/// launch of the selected site is plotted whatever the slider shows.
pub fn payload_scatter(
    db: &Database,
    site: SiteOption,
    _payload_range: PayloadRange,
) -> anyhow::Result<ScatterFigure> {
    let records = db.query_launches(site.site_name())?;

    let mut categories: Vec<String> = Vec::new();
    let points: Vec<ScatterPoint> = records
        .into_iter()
        .map(|record| {
            if !categories.contains(&record.booster_version_category) {
                categories.push(record.booster_version_category.clone());
            }
            ScatterPoint {
                payload_mass_kg: record.payload_mass_kg,
                class: record.class,
                booster_version_category: record.booster_version_category,
                launch_site: record.launch_site,
                flight_number: record.flight_number,
                booster_version: record.booster_version,
            }
        })
        .collect();

    let title = match site.site_name() {
        None => "Payload vs. launch outcome for all sites".to_string(),
        Some(site_name) => format!("Payload vs. launch outcome at {}", site_name),
    };
    log::debug!(
        "[SpaceX] payload_scatter({}) built {} points in {} categories",
        site,
        points.len(),
        categories.len()
    );

    Ok(ScatterFigure {
        title,
        x_label: SCATTER_X_LABEL.to_string(),
        y_label: SCATTER_Y_LABEL.to_string(),
        color_label: SCATTER_COLOR_LABEL.to_string(),
        categories,
        points,
    })
}
