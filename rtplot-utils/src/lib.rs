pub mod samples;
pub mod statistics;

pub use samples::{parse_samples, SampleError, SampleSet};
pub use statistics::Summary;
