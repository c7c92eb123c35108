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
//! Chart-level test cases on the sample files in `src/test/data/`.
//!
//! Use the following command to see the warnings about missing files:
//!
//! ```shell
//! RUST_LOG=warn cargo test -- --nocapture --test-threads 1
//! ```

use std::path::PathBuf;

use crate::util::{self, PathBufExt};

pub fn data_root() -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR")).then("src/test/data")
}

pub fn check_close(exp: f64, acq: f64) {
    let diff = (exp - acq).abs();
    if diff > 1e-9 {
        panic!("expected {exp}, got {acq} (diff: {diff})");
    }
}

pub fn setup() -> PathBuf {
    util::init_logging();
    data_root()
}

mod isolation;
