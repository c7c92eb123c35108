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
//! Utility module collection of functions

use std::{
    env,
    path::{Path, PathBuf},
    sync::Once,
};

pub const LOG_CONFIG: &str = "log4rs.yml";

/// Initialize logging from `log4rs.yml` in the working directory, or log to stderr (filtered by
/// `RUST_LOG`, `info` by default) if there is no such file. Calling it twice is harmless.
pub fn init_logging() {
    static INIT: Once = Once::new();
    INIT.call_once(|| {
        if Path::new(LOG_CONFIG).exists() {
            match log4rs::init_file(LOG_CONFIG, Default::default()) {
                Ok(()) => return,
                Err(e) => eprintln!("Cannot use {LOG_CONFIG}, logging to stderr instead: {e}"),
            }
        }

        let mut builder = pretty_env_logger::formatted_builder();
        builder.filter_level(log::LevelFilter::Info);
        if let Ok(filters) = env::var("RUST_LOG") {
            builder.parse_filters(&filters);
        }
        let _ = builder.try_init();
    });
}

pub trait PathBufExt: Sized {
    fn then(self, p: impl AsRef<Path>) -> PathBuf;

    /// Append a file name built from `name` and `extension`.
    fn then_file(self, name: impl AsRef<str>, extension: &str) -> PathBuf {
        self.then(format!("{}.{extension}", name.as_ref()))
    }
}

impl PathBufExt for PathBuf {
    fn then(mut self, p: impl AsRef<Path>) -> PathBuf {
        self.push(p);
        self
    }
}

impl PathBufExt for &Path {
    fn then(self, p: impl AsRef<Path>) -> PathBuf {
        let mut path = self.to_path_buf();
        path.push(p);
        path
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn path_ext() {
        let root = Path::new("data");
        assert_eq!(
            root.then("model").then_file("cpu", "txt"),
            PathBuf::from("data/model/cpu.txt")
        );
        assert_eq!(
            PathBuf::from("/abs").then("x"),
            PathBuf::from("/abs/x")
        );
    }
}
