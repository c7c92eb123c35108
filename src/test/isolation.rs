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
use itertools::Itertools;

use super::{check_close, setup};
use crate::{
    config::{IsolationChartConfig, IsolationColors, IsolationModel},
    prelude::*,
};

fn config(models: &[&str]) -> IsolationChartConfig {
    IsolationChartConfig {
        name: "fixture".to_string(),
        y_label: "Max Latency (us)".to_string(),
        models: models
            .iter()
            .map(|m| IsolationModel {
                name: m.to_string(),
                not_isolated_path: format!(
                    "isolation/cyclic_test_not_isolated_data/{m}_not_isolated.txt"
                ),
                isolated_path: format!("isolation/cyclic_test_isolated_data/{m}_isolated.txt"),
            })
            .collect(),
        colors: IsolationColors {
            not_isolated: "indianred".to_string(),
            isolated: "springgreen".to_string(),
        },
    }
}

#[test]
fn three_models() {
    let root = setup();
    let chart = ChartSpec::isolation(&config(&["baseline", "mobilnetV1", "mobilnetV2"]), root)
        .build()
        .unwrap();

    assert_eq!(chart.layout.slots.len(), 6);
    assert_eq!(chart.boxes.len(), 6);
    assert_eq!(chart.layout.ticks.len(), 3);
    assert_eq!(
        chart.layout.ticks.iter().map(|t| t.label.as_str()).collect_vec(),
        vec!["baseline", "mobilnetV1", "mobilnetV2"]
    );
    assert_eq!(chart.layout.dividers.len(), 2);
    assert_eq!(
        chart.legend.iter().map(|e| e.name.as_str()).collect_vec(),
        vec!["NOT ISOLATED", "ISOLATED"]
    );

    // second box sits one box width plus the inner gap to the right of the first
    let positions = chart.layout.positions();
    check_close(positions[1] - positions[0], 0.8);
    check_close(positions[2] - positions[1], 1.8);
    check_close(chart.layout.ticks[0].x, 1.4);

    // isolated runs have lower maximum latency
    for (not_isolated, isolated) in chart.boxes.iter().tuples() {
        assert_eq!(not_isolated.series, 0);
        assert_eq!(isolated.series, 1);
        assert!(isolated.summary.max < not_isolated.summary.max);
    }
}

#[test]
fn model_without_measurements() {
    let root = setup();
    let chart = ChartSpec::isolation(&config(&["baseline", "ssd_mobilnetV1"]), root)
        .build()
        .unwrap();

    assert_eq!(chart.layout.slots.len(), 4);
    assert_eq!(chart.boxes.len(), 2);
    assert_eq!(chart.placeholders.len(), 1);
    check_close(chart.placeholders[0].x, chart.layout.ticks[1].x);
    assert_eq!(chart.legend.len(), 2);

    let records = chart.summary_records();
    assert_eq!(records.len(), 4);
    assert_eq!(records[3].group, "ssd_mobilnetV1");
    assert_eq!(records[3].count, 0);
}
