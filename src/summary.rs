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
//! Per-series summary statistics of a chart, exported as CSV.
use std::io;

use serde::Serialize;

use crate::chart::Chart;

/// One row per series instance. Statistics are empty if there is no data.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct SummaryRecord<'a> {
    pub chart: &'a str,
    pub group: &'a str,
    pub series: &'a str,
    pub count: usize,
    pub min: Option<f64>,
    pub q1: Option<f64>,
    pub median: Option<f64>,
    pub q3: Option<f64>,
    pub max: Option<f64>,
    pub mean: Option<f64>,
}

impl Chart {
    pub fn summary_records(&self) -> Vec<SummaryRecord<'_>> {
        self.layout
            .slots
            .iter()
            .zip(self.summaries.iter())
            .map(|(slot, summary)| SummaryRecord {
                chart: &self.name,
                group: self.group_label(slot.group),
                series: &self.series[slot.series].name,
                count: summary.map(|s| s.count).unwrap_or(0),
                min: summary.map(|s| s.min),
                q1: summary.map(|s| s.q1),
                median: summary.map(|s| s.median),
                q3: summary.map(|s| s.q3),
                max: summary.map(|s| s.max),
                mean: summary.map(|s| s.mean),
            })
            .collect()
    }
}

/// Write the summary records of all `charts` as CSV, with a single header line.
pub fn write_summaries<'a, W: io::Write>(
    writer: W,
    charts: impl IntoIterator<Item = &'a Chart>,
) -> Result<(), csv::Error> {
    let mut csv = csv::WriterBuilder::new().from_writer(writer);
    for chart in charts {
        for record in chart.summary_records() {
            csv.serialize(record)?;
        }
    }
    csv.flush()?;
    Ok(())
}
