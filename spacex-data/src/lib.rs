//! Dashboard controls and chart figures for SpaceX launch records.
//!
//! This crate turns the current control values (selected site, payload
//! range) into chart specifications built from a [`spacex_db::Database`].
//! The figures serialize to JSON for the D3.js renderers and the CLI.

pub mod figures;
pub mod sites;
pub mod slider;

pub use figures::{payload_scatter, success_pie, PieFigure, PieSlice, ScatterFigure, ScatterPoint};
pub use sites::SiteOption;
pub use slider::PayloadRange;
