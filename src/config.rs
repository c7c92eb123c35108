// RTPLOT: Box-Plot Charts of AI Inference Times and Real-Time Latencies under Interference
// Copyright (C) 2024-2025 Roland Schmid <roschmi@ethz.ch> and Tibor Schneider <sctibor@ethz.ch>
//
// This program is free software: you can redistribute it and/or modify
// it under the terms of the GNU General Public License as published by
// the Free Software Foundation, either version 3 of the License, or
// (at your option) any later version.
//
// This program is distributed in the hope that it will be useful,
// but WITHOUT ANY WARRANTY; without even the implied warranty of
// MERCHANTABILITY or FITNESS FOR A PARTICULAR PURPOSE.  See the
// GNU General Public License for more details.
//
// You should have received a copy of the GNU General Public License
// along with this program.  If not, see <http://www.gnu.org/licenses/>.
//! Chart configurations: which series are drawn, where their sample files live, and how they
//! are colored.
use std::{collections::HashSet, fs, io, path::Path};

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Stressors applied while measuring the inference time, in plotting order.
pub const STRESSORS: [&str; 8] = [
    "no_stress",
    "cpu",
    "vm",
    "memcpy",
    "open",
    "irq",
    "fork",
    "udp",
];

/// Error thrown when a chart configuration cannot be used.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// The configuration file could not be read.
    #[error("IO error: {0}")]
    Io(#[from] io::Error),
    /// The configuration file is not a valid chart set.
    #[error("Cannot parse chart configuration: {0}")]
    Json(#[from] serde_json::Error),
    /// The chart set contains no chart.
    #[error("The chart set is empty.")]
    NoCharts,
    /// Two charts would write to the same output.
    #[error("Chart name {0:?} is used more than once.")]
    DuplicateChart(String),
    /// A chart has no categories.
    #[error("Chart {0:?} has no stressors.")]
    NoStressors(String),
    /// A chart has no series.
    #[error("Chart {0:?} has no models.")]
    NoModels(String),
    /// A series or category name appears twice in one chart.
    #[error("Chart {chart:?} lists {name:?} more than once.")]
    DuplicateName { chart: String, name: String },
    /// A series has no color.
    #[error("Chart {chart:?}: {name:?} has no color.")]
    MissingColor { chart: String, name: String },
}

/// A set of charts, as stored in a configuration file.
#[derive(Clone, Debug, PartialEq, Deserialize, Serialize)]
pub struct ChartSet {
    pub charts: Vec<ChartConfig>,
}

/// Selection of charts by their kind.
#[derive(clap::ValueEnum, Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum ChartKind {
    /// Produces all charts of the configuration.
    #[default]
    All,
    /// Produces only the inference time charts under stress.
    Stress,
    /// Produces only the cyclictest latency charts comparing isolated and shared CPU cores.
    Isolation,
}

impl ChartKind {
    pub fn includes(&self, config: &ChartConfig) -> bool {
        matches!(
            (self, config),
            (ChartKind::All, _)
                | (ChartKind::Stress, ChartConfig::Stress(_))
                | (ChartKind::Isolation, ChartConfig::Isolation(_))
        )
    }
}

/// Configuration of a single chart.
#[derive(Clone, Debug, PartialEq, Deserialize, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum ChartConfig {
    Stress(StressChartConfig),
    Isolation(IsolationChartConfig),
}

/// Inference time of several models, grouped by the stressor running in parallel.
#[derive(Clone, Debug, PartialEq, Deserialize, Serialize)]
pub struct StressChartConfig {
    /// Name of the chart, used for the output file names.
    pub name: String,
    #[serde(default = "default_stress_y_label")]
    pub y_label: String,
    /// Categories on the x axis.
    pub stressors: Vec<String>,
    /// Series drawn in every category.
    pub models: Vec<StressModel>,
}

#[derive(Clone, Debug, PartialEq, Deserialize, Serialize)]
pub struct StressModel {
    pub name: String,
    /// Directory containing one `<stressor>.txt` file per stressor.
    pub data_path: String,
    pub color: String,
}

/// Maximum latency of a real-time task next to an AI workload, with and without an isolated
/// CPU core.
#[derive(Clone, Debug, PartialEq, Deserialize, Serialize)]
pub struct IsolationChartConfig {
    pub name: String,
    #[serde(default = "default_isolation_y_label")]
    pub y_label: String,
    /// One category per model.
    pub models: Vec<IsolationModel>,
    pub colors: IsolationColors,
}

#[derive(Clone, Debug, PartialEq, Deserialize, Serialize)]
pub struct IsolationModel {
    pub name: String,
    pub not_isolated_path: String,
    pub isolated_path: String,
}

#[derive(Clone, Debug, PartialEq, Deserialize, Serialize)]
pub struct IsolationColors {
    pub not_isolated: String,
    pub isolated: String,
}

fn default_stress_y_label() -> String {
    "Inference time (ms)".to_string()
}

fn default_isolation_y_label() -> String {
    "Max Latency (us)".to_string()
}

impl ChartSet {
    /// Read a chart set from a JSON file and validate it.
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let serialized = fs::read_to_string(path.as_ref())?;
        let set: ChartSet = serde_json::from_str(&serialized)?;
        set.validate()?;
        Ok(set)
    }

    /// The charts of the AI inference and cyclictest experiments.
    pub fn builtin() -> Self {
        let stress = |name: &str, models: [(&str, &str); 2]| {
            ChartConfig::Stress(StressChartConfig {
                name: name.to_string(),
                y_label: default_stress_y_label(),
                stressors: STRESSORS.iter().map(|s| s.to_string()).collect(),
                models: models
                    .iter()
                    .map(|(model, color)| StressModel {
                        name: model.to_string(),
                        data_path: format!("stress_on_ai_data/{model}"),
                        color: color.to_string(),
                    })
                    .collect(),
            })
        };

        let isolation_models = [
            ("BASELINE", "baseline"),
            ("mobilenetV1", "mobilnetV1"),
            ("mobilenetV2", "mobilnetV2"),
            ("ssd_mobilenetV1", "ssd_mobilnetV1"),
            ("ssd_mobilenetV2", "ssd_mobilnetV2"),
        ]
        .iter()
        .map(|(name, file)| IsolationModel {
            name: name.to_string(),
            not_isolated_path: format!("cyclic_test_not_isolated_data/{file}_not_isolated.txt"),
            isolated_path: format!("cyclic_test_isolated_data/{file}_isolated.txt"),
        })
        .collect();

        ChartSet {
            charts: vec![
                stress(
                    "stress_mobilenet",
                    [("mobilnetV1", "lightcoral"), ("mobilnetV2", "lightblue")],
                ),
                stress(
                    "stress_ssd_mobilenet",
                    [("ssd_mobilnetV1", "mediumorchid"), ("ssd_mobilnetV2", "sienna")],
                ),
                ChartConfig::Isolation(IsolationChartConfig {
                    name: "isolation_comparison".to_string(),
                    y_label: default_isolation_y_label(),
                    models: isolation_models,
                    colors: IsolationColors {
                        not_isolated: "indianred".to_string(),
                        isolated: "springgreen".to_string(),
                    },
                }),
            ],
        }
    }

    /// Check every chart, and that chart names are unique.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.charts.is_empty() {
            return Err(ConfigError::NoCharts);
        }
        let mut names = HashSet::new();
        for chart in self.charts.iter() {
            if !names.insert(chart.name()) {
                return Err(ConfigError::DuplicateChart(chart.name().to_string()));
            }
            chart.validate()?;
        }
        Ok(())
    }
}

impl ChartConfig {
    pub fn name(&self) -> &str {
        match self {
            ChartConfig::Stress(c) => &c.name,
            ChartConfig::Isolation(c) => &c.name,
        }
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        match self {
            ChartConfig::Stress(c) => c.validate(),
            ChartConfig::Isolation(c) => c.validate(),
        }
    }
}

impl StressChartConfig {
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.stressors.is_empty() {
            return Err(ConfigError::NoStressors(self.name.clone()));
        }
        if self.models.is_empty() {
            return Err(ConfigError::NoModels(self.name.clone()));
        }
        unique(&self.name, self.stressors.iter().map(String::as_str))?;
        unique(&self.name, self.models.iter().map(|m| m.name.as_str()))?;
        for model in self.models.iter() {
            colored(&self.name, &model.name, &model.color)?;
        }
        Ok(())
    }
}

impl IsolationChartConfig {
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.models.is_empty() {
            return Err(ConfigError::NoModels(self.name.clone()));
        }
        unique(&self.name, self.models.iter().map(|m| m.name.as_str()))?;
        colored(&self.name, "not_isolated", &self.colors.not_isolated)?;
        colored(&self.name, "isolated", &self.colors.isolated)?;
        Ok(())
    }
}

fn unique<'a>(chart: &str, names: impl Iterator<Item = &'a str>) -> Result<(), ConfigError> {
    let mut seen = HashSet::new();
    for name in names {
        if !seen.insert(name) {
            return Err(ConfigError::DuplicateName {
                chart: chart.to_string(),
                name: name.to_string(),
            });
        }
    }
    Ok(())
}

fn colored(chart: &str, name: &str, color: &str) -> Result<(), ConfigError> {
    if color.trim().is_empty() {
        return Err(ConfigError::MissingColor {
            chart: chart.to_string(),
            name: name.to_string(),
        });
    }
    Ok(())
}
