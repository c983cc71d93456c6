use std::collections::BTreeMap;

use serde::Serialize;
use tdlc_core::round_to;
use tdlc_model::{Aggregate, DropCounts};

/// Whole-day means for one grouping.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct AverageReport {
    pub promedio_global: i64,
    pub total: usize,
    pub por_grupo: BTreeMap<String, i64>,
    /// Cases per bucket label of the ladder in use.
    pub por_tramo: BTreeMap<String, usize>,
    pub descartados: DropCounts,
}

impl AverageReport {
    pub fn new(aggregate: &Aggregate, dropped: DropCounts) -> Self {
        Self {
            promedio_global: aggregate.rounded_global_mean(),
            total: aggregate.count,
            por_grupo: aggregate
                .groups
                .iter()
                .map(|(key, group)| (key.clone(), group.rounded_mean()))
                .collect(),
            por_tramo: BTreeMap::new(),
            descartados: dropped,
        }
    }

    #[must_use]
    pub fn with_buckets(mut self, counts: BTreeMap<String, usize>) -> Self {
        self.por_tramo = counts;
        self
    }
}

/// Mean days to two decimals and the number of cases behind it.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize)]
pub struct MeanSummary {
    /// `None` when no case qualified.
    pub promedio_dias: Option<f64>,
    pub n_causas: usize,
}

impl MeanSummary {
    pub fn new(aggregate: &Aggregate) -> Self {
        let promedio_dias = if aggregate.is_empty() {
            None
        } else {
            Some(round_to(aggregate.global_mean, 2))
        };
        Self {
            promedio_dias,
            n_causas: aggregate.count,
        }
    }
}
