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
use std::{
    fs,
    path::{Path, PathBuf},
    process,
};

use anyhow::Context;
use clap::Parser;
use rayon::prelude::*;

use rtplot::{
    config::{ChartKind, ChartSet},
    prelude::ChartSpec,
    summary, util,
    util::PathBufExt,
};

#[derive(Parser, Debug)]
#[command(about, long_about = None)]
struct Args {
    /// Root directory of the sample files.
    #[arg(short, long, default_value = "./")]
    data_path: String,
    /// Overwrite the output path for plots.
    #[arg(short, long, default_value = "./plots/")]
    output_path: String,
    /// JSON file describing the charts. Uses the built-in charts if omitted.
    #[arg(short, long)]
    config: Option<String>,
    /// Type of chart to generate.
    #[arg(short = 'k', long, value_enum, default_value_t = ChartKind::All)]
    chart: ChartKind,
    /// Also write the summary statistics of every chart as CSV.
    #[arg(short, long)]
    summary: bool,
}

fn main() -> anyhow::Result<()> {
    util::init_logging();

    // parse plot parameters
    let args = Args::parse();
    let plot_dir = PathBuf::from(&args.output_path);
    fs::create_dir_all(&plot_dir).with_context(|| format!("cannot create {plot_dir:?}"))?;

    // ensure that the data folder exists
    let data_path = PathBuf::from(&args.data_path);
    if !data_path.exists() {
        log::error!("Could not read data in {data_path:?}!");
        process::exit(1)
    }

    let chart_set = match &args.config {
        Some(path) => ChartSet::from_file(path).with_context(|| format!("cannot load {path}"))?,
        None => ChartSet::builtin(),
    };

    let specs = chart_set
        .charts
        .iter()
        .filter(|c| args.chart.includes(c))
        .map(|c| ChartSpec::from_config(c, &data_path))
        .collect::<Vec<_>>();
    if specs.is_empty() {
        log::warn!("No {:?} chart in the configuration.", args.chart);
    }

    // charts share nothing, draw them in parallel
    specs
        .par_iter()
        .map(|spec| plot_chart(spec, &plot_dir, args.summary))
        .collect::<anyhow::Result<Vec<_>>>()?;

    Ok(())
}

/// Build a chart and write it to `<plot_dir>/<name>.html`, and the summary to
/// `<plot_dir>/<name>.csv` if requested.
fn plot_chart(spec: &ChartSpec, plot_dir: &Path, with_summary: bool) -> anyhow::Result<()> {
    let chart = spec
        .build()
        .with_context(|| format!("cannot lay out chart {}", spec.name))?;

    let output = plot_dir.then_file(&chart.name, "html");
    log::info!(
        "Plotting {output:?} ({} boxes, {} without data)",
        chart.boxes.len(),
        chart.placeholders.len()
    );
    chart.to_plot().write_html(&output);

    if with_summary {
        let csv_path = plot_dir.then_file(&chart.name, "csv");
        log::debug!("Writing summary {csv_path:?}");
        let file = fs::File::create(&csv_path)
            .with_context(|| format!("cannot create {csv_path:?}"))?;
        summary::write_summaries(file, [&chart])?;
    }

    Ok(())
}
