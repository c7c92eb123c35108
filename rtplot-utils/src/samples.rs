//! Loading of measurement files: plain text, one floating-point value per whitespace-separated
//! token. Everything after a `#` on a line is a comment.
use std::{fs, io, path::Path};

/// Error thrown when a sample file cannot be turned into a list of measurements.
#[derive(Debug, thiserror::Error)]
pub enum SampleError {
    /// The file does not exist.
    #[error("file not found")]
    NotFound,
    /// Any other IO error while reading the file.
    #[error("IO error: {0}")]
    Io(#[from] io::Error),
    /// A token could not be parsed as a floating-point number.
    #[error("cannot parse {token:?} on line {line} as a number")]
    Parse { line: usize, token: String },
    /// A token is `nan` or an infinity, which has no place on the value axis.
    #[error("{token:?} on line {line} is not a finite number")]
    NonFinite { line: usize, token: String },
}

/// Measurements of a single series instance.
#[derive(Debug, Clone, PartialEq, Default)]
pub enum SampleSet {
    /// Values read from the sample file, in file order. May be empty.
    Loaded(Vec<f64>),
    /// The sample file could not be read.
    #[default]
    Missing,
}

impl SampleSet {
    /// Read the sample file at `path`.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, SampleError> {
        let content = fs::read_to_string(path.as_ref()).map_err(|e| match e.kind() {
            io::ErrorKind::NotFound => SampleError::NotFound,
            _ => SampleError::Io(e),
        })?;
        parse_samples(&content).map(SampleSet::Loaded)
    }

    /// Returns `true` if there is at least one value to draw.
    pub fn has_data(&self) -> bool {
        !self.values().is_empty()
    }

    /// The loaded values, or an empty slice for a missing set.
    pub fn values(&self) -> &[f64] {
        match self {
            SampleSet::Loaded(values) => values,
            SampleSet::Missing => &[],
        }
    }

    pub fn is_missing(&self) -> bool {
        matches!(self, SampleSet::Missing)
    }
}

/// Parse whitespace separated floating-point numbers, skipping `#` comments.
pub fn parse_samples(content: &str) -> Result<Vec<f64>, SampleError> {
    let mut values = Vec::new();
    for (i, line) in content.lines().enumerate() {
        let line = line.split('#').next().unwrap_or_default();
        for token in line.split_whitespace() {
            let value = token.parse::<f64>().map_err(|_| SampleError::Parse {
                line: i + 1,
                token: token.to_string(),
            })?;
            if !value.is_finite() {
                return Err(SampleError::NonFinite {
                    line: i + 1,
                    token: token.to_string(),
                });
            }
            values.push(value);
        }
    }
    Ok(values)
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn parse_keeps_order_and_count() {
        let values = parse_samples("3.5\n1\n\n2e1 4.25\n").unwrap();
        assert_eq!(values, vec![3.5, 1.0, 20.0, 4.25]);
    }

    #[test]
    fn parse_skips_comments() {
        let values = parse_samples("# max latency [us]\n12 # first\n  13\n#14\n").unwrap();
        assert_eq!(values, vec![12.0, 13.0]);
    }

    #[test]
    fn parse_reports_bad_token() {
        match parse_samples("1.0\n2.0 abc\n") {
            Err(SampleError::Parse { line, token }) => {
                assert_eq!(line, 2);
                assert_eq!(token, "abc");
            }
            other => panic!("unexpected result: {other:?}"),
        }
    }

    #[test]
    fn parse_rejects_non_finite() {
        for (content, bad) in [
            ("1.0\nnan\n3.0\n", "nan"),
            ("1.0 NaN\n", "NaN"),
            ("inf\n", "inf"),
            ("2.0\n-inf\n", "-inf"),
        ] {
            match parse_samples(content) {
                Err(SampleError::NonFinite { token, .. }) => assert_eq!(token, bad),
                other => panic!("unexpected result for {content:?}: {other:?}"),
            }
        }
        assert!(matches!(
            parse_samples("1.0\n2.0\nnan\n"),
            Err(SampleError::NonFinite { line: 3, .. })
        ));
    }

    #[test]
    fn empty_file_has_no_data() {
        let set = SampleSet::Loaded(parse_samples("\n# nothing\n").unwrap());
        assert!(!set.has_data());
        assert!(!set.is_missing());
    }

    #[test]
    fn missing_file() {
        let path = Path::new(env!("CARGO_MANIFEST_DIR")).join("does/not/exist.txt");
        assert!(matches!(SampleSet::load(path), Err(SampleError::NotFound)));
        assert!(!SampleSet::Missing.has_data());
        assert!(SampleSet::Missing.values().is_empty());
    }
}
