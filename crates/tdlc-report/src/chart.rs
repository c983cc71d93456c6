use serde::Serialize;
use tdlc_core::{EvolutionPoint, QuarterPoint};

/// One series of a chart.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Dataset {
    pub label: String,
    pub data: Vec<f64>,
}

/// Labels plus one or more aligned series, as the dashboard charts expect.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct ChartData {
    pub labels: Vec<String>,
    pub datasets: Vec<Dataset>,
}

impl ChartData {
    pub fn new(labels: Vec<String>) -> Self {
        Self {
            labels,
            datasets: Vec::new(),
        }
    }

    #[must_use]
    pub fn with_dataset(mut self, label: impl Into<String>, data: Vec<f64>) -> Self {
        self.datasets.push(Dataset {
            label: label.into(),
            data,
        });
        self
    }

    pub fn is_empty(&self) -> bool {
        self.labels.is_empty()
    }
}

/// Days to ruling per case, labelled by role, in ruling-date order.
pub fn evolution_chart(points: &[EvolutionPoint]) -> ChartData {
    let labels = points.iter().map(|point| point.case_role.clone()).collect();
    let data = points.iter().map(|point| point.days as f64).collect();
    ChartData::new(labels).with_dataset("Días hasta el fallo", data)
}

/// Mean days per ruling quarter.
pub fn quarterly_chart(points: &[QuarterPoint]) -> ChartData {
    let labels = points.iter().map(|point| point.quarter.clone()).collect();
    let data = points.iter().map(|point| point.mean_days).collect();
    ChartData::new(labels).with_dataset("Promedio de días por trimestre", data)
}
