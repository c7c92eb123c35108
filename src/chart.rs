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
//! Turning a chart configuration and its sample files into a chart: box glyphs, placeholders,
//! ticks, dividers and legend, independent of the plotting backend.
use std::path::{Path, PathBuf};

use itertools::Itertools;
use ordered_float::OrderedFloat;
use strum::IntoEnumIterator;

use rtplot_utils::{SampleError, SampleSet, Summary};

use crate::{
    config::{ChartConfig, IsolationChartConfig, StressChartConfig},
    layout::{GroupSpec, Layout, LayoutError, Spacing},
    util::PathBufExt,
};

/// Suffix of the per-stressor sample files.
pub const SAMPLE_SUFFIX: &str = "txt";

/// Execution mode of the real-time task in the isolation experiment.
#[derive(
    Clone, Copy, Debug, PartialEq, Eq, Hash, strum::Display, strum::EnumIter, strum_macros::EnumString,
)]
pub enum IsolationState {
    #[strum(serialize = "NOT ISOLATED")]
    NotIsolated,
    #[strum(serialize = "ISOLATED")]
    Isolated,
}

/// Identity of a series: the name shown in the legend and the fill color of its boxes.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Series {
    pub name: String,
    pub color: String,
}

/// Size of the figure in pixels, without the legend margin.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct FigureSize {
    pub width: usize,
    pub height: usize,
}

const FIGURE_HEIGHT: usize = 700;

/// Everything needed to build a chart, before any file is read.
#[derive(Clone, Debug, PartialEq)]
pub struct ChartSpec {
    pub name: String,
    pub y_label: String,
    pub series: Vec<Series>,
    pub groups: Vec<GroupSpec>,
    /// Sample file of every series instance, in slot order.
    pub sources: Vec<PathBuf>,
    pub spacing: Spacing,
    pub size: FigureSize,
}

impl ChartSpec {
    pub fn from_config(config: &ChartConfig, data_root: impl AsRef<Path>) -> Self {
        match config {
            ChartConfig::Stress(c) => Self::stress(c, data_root),
            ChartConfig::Isolation(c) => Self::isolation(c, data_root),
        }
    }

    /// One group per stressor, one series per model.
    pub fn stress(config: &StressChartConfig, data_root: impl AsRef<Path>) -> Self {
        let data_root = data_root.as_ref();
        let series = config
            .models
            .iter()
            .map(|m| Series {
                name: m.name.clone(),
                color: m.color.clone(),
            })
            .collect_vec();
        let groups = config
            .stressors
            .iter()
            .map(|s| GroupSpec::new(s, 0..series.len()))
            .collect_vec();
        let sources = config
            .stressors
            .iter()
            .cartesian_product(config.models.iter())
            .map(|(stressor, model)| {
                data_root
                    .then(&model.data_path)
                    .then_file(stressor, SAMPLE_SUFFIX)
            })
            .collect_vec();

        Self {
            name: config.name.clone(),
            y_label: config.y_label.clone(),
            size: FigureSize {
                width: 120 * groups.len() * series.len(),
                height: FIGURE_HEIGHT,
            },
            series,
            groups,
            sources,
            spacing: Spacing::uniform(),
        }
    }

    /// One group per model, one series per isolation state.
    pub fn isolation(config: &IsolationChartConfig, data_root: impl AsRef<Path>) -> Self {
        let data_root = data_root.as_ref();
        let series = IsolationState::iter()
            .map(|state| Series {
                name: state.to_string(),
                color: match state {
                    IsolationState::NotIsolated => config.colors.not_isolated.clone(),
                    IsolationState::Isolated => config.colors.isolated.clone(),
                },
            })
            .collect_vec();
        let groups = config
            .models
            .iter()
            .map(|m| GroupSpec::new(&m.name, 0..series.len()))
            .collect_vec();
        let sources = config
            .models
            .iter()
            .flat_map(|m| {
                IsolationState::iter().map(move |state| match state {
                    IsolationState::NotIsolated => data_root.then(&m.not_isolated_path),
                    IsolationState::Isolated => data_root.then(&m.isolated_path),
                })
            })
            .collect_vec();

        Self {
            name: config.name.clone(),
            y_label: config.y_label.clone(),
            size: FigureSize {
                width: 250 * groups.len(),
                height: FIGURE_HEIGHT,
            },
            series,
            groups,
            sources,
            spacing: Spacing::paired(0.6, 0.2, 0.8),
        }
    }

    pub fn layout(&self) -> Result<Layout, LayoutError> {
        Layout::compute(&self.groups, self.spacing)
    }

    /// Read the sample file of every slot. Files that cannot be read are reported and replaced by
    /// a missing sample set.
    pub fn load_samples(&self, layout: &Layout) -> Vec<SampleSet> {
        layout
            .slots
            .iter()
            .zip(self.sources.iter())
            .map(|(slot, path)| {
                let series = &self.series[slot.series].name;
                let group = &self.groups[slot.group].label;
                load_or_warn(series, group, path)
            })
            .collect()
    }

    /// Compute the layout, read all sample files and build the chart.
    pub fn build(&self) -> Result<Chart, LayoutError> {
        let layout = self.layout()?;
        log::debug!(
            "Building chart {} with {} series instances",
            self.name,
            layout.slots.len()
        );
        let samples = self.load_samples(&layout);
        Ok(Chart::new(self, layout, samples))
    }
}

fn load_or_warn(series: &str, group: &str, path: &Path) -> SampleSet {
    match SampleSet::load(path) {
        Ok(set) => {
            if !set.has_data() {
                log::warn!("Data file for series '{series}' in group '{group}' is empty: {path:?}");
            }
            let non_positive = set.values().iter().filter(|x| **x <= 0.0).count();
            if non_positive > 0 {
                log::warn!(
                    "Data file for series '{series}' in group '{group}' contains {non_positive} non-positive values that cannot be shown on a logarithmic axis: {path:?}"
                );
            }
            set
        }
        Err(SampleError::NotFound) => {
            log::warn!("Data file not found for series '{series}' in group '{group}': {path:?}");
            SampleSet::Missing
        }
        Err(e) => {
            log::warn!("Cannot load data for series '{series}' in group '{group}' from {path:?}: {e}");
            SampleSet::Missing
        }
    }
}

/// Box-and-whisker glyph of a series instance with data.
#[derive(Clone, Debug, PartialEq)]
pub struct BoxGlyph {
    pub x: f64,
    pub group: usize,
    pub series: usize,
    pub values: Vec<f64>,
    pub summary: Summary,
}

/// "No Data" marker, either for a single slot or centered on a whole group.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Placeholder {
    pub x: f64,
    pub group: usize,
    /// The series of the empty slot, or `None` if the whole group has no data.
    pub series: Option<usize>,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct LegendEntry {
    pub name: String,
    pub color: String,
}

/// A fully placed chart.
#[derive(Clone, Debug, PartialEq)]
pub struct Chart {
    pub name: String,
    pub y_label: String,
    pub series: Vec<Series>,
    pub layout: Layout,
    pub boxes: Vec<BoxGlyph>,
    pub placeholders: Vec<Placeholder>,
    pub legend: Vec<LegendEntry>,
    /// Summary of every slot, in slot order.
    pub summaries: Vec<Option<Summary>>,
    pub size: FigureSize,
}

impl Chart {
    /// Place the samples on the layout. `samples` must hold one entry per slot, which
    /// [`ChartSpec::build`] guarantees.
    pub(crate) fn new(spec: &ChartSpec, layout: Layout, samples: Vec<SampleSet>) -> Self {
        assert_eq!(
            samples.len(),
            layout.slots.len(),
            "one sample set per slot is required"
        );

        let summaries = samples
            .iter()
            .map(|set| Summary::from_samples(set.values()))
            .collect_vec();

        let mut boxes = Vec::new();
        let mut placeholders = Vec::new();
        for group in 0..layout.num_groups() {
            let range = layout.group_range(group);
            let slots = layout.group_slots(group);
            if samples[range.clone()].iter().all(|set| !set.has_data()) {
                placeholders.push(Placeholder {
                    x: (slots[0].x + slots[slots.len() - 1].x) / 2.0,
                    group,
                    series: None,
                });
                continue;
            }
            for (slot, i) in slots.iter().zip(range) {
                match summaries[i] {
                    Some(summary) => boxes.push(BoxGlyph {
                        x: slot.x,
                        group,
                        series: slot.series,
                        values: samples[i].values().to_vec(),
                        summary,
                    }),
                    None => placeholders.push(Placeholder {
                        x: slot.x,
                        group,
                        series: Some(slot.series),
                    }),
                }
            }
        }

        let legend = layout
            .slots
            .iter()
            .map(|s| s.series)
            .unique()
            .sorted()
            .map(|s| LegendEntry {
                name: spec.series[s].name.clone(),
                color: spec.series[s].color.clone(),
            })
            .collect();

        Self {
            name: spec.name.clone(),
            y_label: spec.y_label.clone(),
            series: spec.series.clone(),
            layout,
            boxes,
            placeholders,
            legend,
            summaries,
            size: spec.size,
        }
    }

    /// Smallest and largest positive value over all boxes.
    pub fn value_range(&self) -> Option<(f64, f64)> {
        self.boxes
            .iter()
            .flat_map(|b| b.values.iter())
            .filter(|x| **x > 0.0 && x.is_finite())
            .map(|x| OrderedFloat(*x))
            .minmax()
            .into_option()
            .map(|(min, max)| (min.0, max.0))
    }

    pub fn group_label(&self, group: usize) -> &str {
        &self.layout.ticks[group].label
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::config::{IsolationColors, IsolationModel, StressModel};

    fn stress_config() -> StressChartConfig {
        StressChartConfig {
            name: "small".to_string(),
            y_label: "Inference time (ms)".to_string(),
            stressors: vec!["no_stress".to_string(), "cpu".to_string()],
            models: vec![
                StressModel {
                    name: "modelA".to_string(),
                    data_path: "a".to_string(),
                    color: "red".to_string(),
                },
                StressModel {
                    name: "modelB".to_string(),
                    data_path: "b".to_string(),
                    color: "blue".to_string(),
                },
            ],
        }
    }

    #[test]
    fn stress_sources_follow_slots() {
        let spec = ChartSpec::stress(&stress_config(), "/data");
        let sources = spec
            .sources
            .iter()
            .map(|p| p.to_string_lossy().to_string())
            .collect_vec();
        assert_eq!(
            sources,
            vec![
                "/data/a/no_stress.txt",
                "/data/b/no_stress.txt",
                "/data/a/cpu.txt",
                "/data/b/cpu.txt"
            ]
        );
        assert_eq!(spec.size.width, 480);
        let layout = spec.layout().unwrap();
        assert_eq!(layout.slots[1].series, 1);
        assert_eq!(layout.slots[2].group, 1);
    }

    #[test]
    fn isolation_series_are_states() {
        let config = IsolationChartConfig {
            name: "iso".to_string(),
            y_label: "Max Latency (us)".to_string(),
            models: vec![IsolationModel {
                name: "BASELINE".to_string(),
                not_isolated_path: "n/baseline_not_isolated.txt".to_string(),
                isolated_path: "i/baseline_isolated.txt".to_string(),
            }],
            colors: IsolationColors {
                not_isolated: "indianred".to_string(),
                isolated: "springgreen".to_string(),
            },
        };
        let spec = ChartSpec::isolation(&config, "/data");
        assert_eq!(spec.series[0].name, "NOT ISOLATED");
        assert_eq!(spec.series[0].color, "indianred");
        assert_eq!(spec.series[1].name, "ISOLATED");
        assert_eq!(
            spec.sources,
            vec![
                PathBuf::from("/data/n/baseline_not_isolated.txt"),
                PathBuf::from("/data/i/baseline_isolated.txt")
            ]
        );
        assert_eq!("ISOLATED".parse::<IsolationState>().unwrap(), IsolationState::Isolated);
    }

    #[test]
    fn missing_data_keeps_positions() {
        let spec = ChartSpec::stress(&stress_config(), "/data");
        let layout = spec.layout().unwrap();
        let full = vec![SampleSet::Loaded(vec![1.0, 2.0, 3.0]); 4];
        let mut partial = full.clone();
        partial[1] = SampleSet::Missing;
        partial[2] = SampleSet::Loaded(vec![]);

        let a = Chart::new(&spec, layout.clone(), full);
        let b = Chart::new(&spec, layout, partial);
        assert_eq!(a.layout, b.layout);
        assert_eq!(a.boxes.len(), 4);
        assert_eq!(b.boxes.len(), 2);
        assert_eq!(
            b.placeholders.iter().map(|p| p.x).collect_vec(),
            vec![2.0, 3.0]
        );
        assert!(b.boxes.iter().all(|g| g.x != 2.0 && g.x != 3.0));
        assert_eq!(b.summaries[1], None);
        assert_eq!(b.summaries[0].unwrap().count, 3);
    }

    #[test]
    fn empty_group_gets_one_centered_placeholder() {
        let spec = ChartSpec::stress(&stress_config(), "/data");
        let layout = spec.layout().unwrap();
        let samples = vec![
            SampleSet::Loaded(vec![1.0]),
            SampleSet::Loaded(vec![2.0]),
            SampleSet::Missing,
            SampleSet::Missing,
        ];
        let chart = Chart::new(&spec, layout, samples);
        assert_eq!(chart.boxes.len(), 2);
        assert_eq!(
            chart.placeholders,
            vec![Placeholder {
                x: 3.5,
                group: 1,
                series: None
            }]
        );
        assert_eq!(chart.group_label(1), "cpu");
        assert_eq!(chart.legend.len(), 2);
        assert_eq!(chart.value_range(), Some((1.0, 2.0)));
    }

    #[test]
    fn value_range_ignores_non_positive() {
        let spec = ChartSpec::stress(&stress_config(), "/data");
        let layout = spec.layout().unwrap();
        let samples = vec![
            SampleSet::Loaded(vec![0.0, 5.0]),
            SampleSet::Loaded(vec![-1.0, 50.0]),
            SampleSet::Missing,
            SampleSet::Missing,
        ];
        let chart = Chart::new(&spec, layout, samples);
        assert_eq!(chart.value_range(), Some((5.0, 50.0)));

        let layout = spec.layout().unwrap();
        let chart = Chart::new(&spec, layout, vec![SampleSet::Missing; 4]);
        assert_eq!(chart.value_range(), None);
        assert_eq!(chart.placeholders.len(), 2);
    }
}
