//! CLI library components for the `tdlc` tool.

pub mod logging;
pub mod pipeline;
