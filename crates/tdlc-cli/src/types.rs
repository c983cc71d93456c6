use std::path::PathBuf;

use serde::Serialize;
use tdlc_model::{BucketLabel, DropReason};

use crate::cli::OutputFormatArg;

/// Global settings every command runs with.
#[derive(Debug, Clone)]
pub struct RunContext {
    pub data_dir: PathBuf,
    pub format: OutputFormatArg,
    pub output: Option<PathBuf>,
}

/// Result of classifying one ad-hoc date pair.
#[derive(Debug, Clone, Serialize)]
pub struct ClassifyOutcome {
    pub reference: String,
    pub outcome: String,
    pub ladder: String,
    pub days: Option<i64>,
    pub bucket: Option<BucketLabel>,
    pub dropped: Option<DropReason>,
}
