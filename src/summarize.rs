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
use std::{io, path::PathBuf, process};

use anyhow::Context;
use clap::Parser;

use rtplot::{
    config::{ChartKind, ChartSet},
    prelude::ChartSpec,
    summary, util,
};

/// Print min, quartiles, max and mean of every series instance as CSV.
#[derive(Parser, Debug)]
#[command(about, long_about = None)]
struct Args {
    /// Root directory of the sample files.
    #[arg(short, long, default_value = "./")]
    data_path: String,
    /// JSON file describing the charts. Uses the built-in charts if omitted.
    #[arg(short, long)]
    config: Option<String>,
    /// Type of chart to summarize.
    #[arg(short = 'k', long, value_enum, default_value_t = ChartKind::All)]
    chart: ChartKind,
}

fn main() -> anyhow::Result<()> {
    util::init_logging();
    let args = Args::parse();

    let data_path = PathBuf::from(&args.data_path);
    if !data_path.exists() {
        log::error!("Could not read data in {data_path:?}!");
        process::exit(1)
    }

    let chart_set = match &args.config {
        Some(path) => ChartSet::from_file(path).with_context(|| format!("cannot load {path}"))?,
        None => ChartSet::builtin(),
    };

    let charts = chart_set
        .charts
        .iter()
        .filter(|c| args.chart.includes(c))
        .map(|c| ChartSpec::from_config(c, &data_path).build())
        .collect::<Result<Vec<_>, _>>()?;

    summary::write_summaries(io::stdout().lock(), charts.iter())?;

    Ok(())
}
