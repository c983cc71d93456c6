use std::fs;
use std::path::Path;

use anyhow::{Context, Result};
use serde::Serialize;

/// Serialize a report, pretty-printed or compact.
pub fn to_json<T: Serialize>(report: &T, pretty: bool) -> Result<String> {
    let text = if pretty {
        serde_json::to_string_pretty(report)
    } else {
        serde_json::to_string(report)
    };
    text.context("serialize report")
}

/// Write a pretty-printed report to `path`, creating parent directories.
pub fn write_json<T: Serialize>(path: &Path, report: &T) -> Result<()> {
    if let Some(parent) = path.parent()
        && !parent.as_os_str().is_empty()
    {
        fs::create_dir_all(parent)
            .with_context(|| format!("create output directory {}", parent.display()))?;
    }
    let text = to_json(report, true)?;
    fs::write(path, text).with_context(|| format!("write {}", path.display()))?;
    Ok(())
}
