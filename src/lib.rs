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
//! Library for drawing box-plot charts of AI inference times under synthetic stress, and of
//! real-time task latencies with and without CPU isolation.
pub mod chart;
pub mod config;
pub mod layout;
pub mod render;
pub mod summary;
pub mod util;

#[cfg(test)]
mod test;

// re-export the sample handling that lives in the utility crate
pub use rtplot_utils::{SampleError, SampleSet, Summary};

pub mod prelude {
    pub use super::{
        chart::{Chart, ChartSpec, IsolationState, Series},
        config::{ChartConfig, ChartSet, ConfigError},
        layout::{GroupSpec, Layout, LayoutError, Spacing},
        SampleSet,
    };
}
