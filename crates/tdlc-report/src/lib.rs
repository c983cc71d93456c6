//! TDLC report generation library.
//!
//! Shapes the engine's results for the dashboard:
//!
//! - **averages**: grouped and global means in whole days
//! - **chart**: label/dataset series for the evolution and quarterly charts
//! - **json**: writing any report to stdout or a file

mod averages;
mod chart;
mod json;

pub use averages::{AverageReport, MeanSummary};
pub use chart::{ChartData, Dataset, evolution_chart, quarterly_chart};
pub use json::{to_json, write_json};
