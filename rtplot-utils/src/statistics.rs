//! Summary statistics of a sample set.
use serde::Serialize;
use statrs::statistics::{Data, Distribution, Max, Median, Min, OrderStatistics};

/// Five-number summary and mean of a non-empty sample set.
#[derive(Clone, Copy, Debug, PartialEq, Serialize)]
pub struct Summary {
    pub count: usize,
    pub min: f64,
    pub q1: f64,
    pub median: f64,
    pub q3: f64,
    pub max: f64,
    pub mean: f64,
}

impl Summary {
    /// Compute the summary, or `None` if there are no values or any of them is not finite.
    pub fn from_samples(values: &[f64]) -> Option<Self> {
        if values.is_empty() || values.iter().any(|x| !x.is_finite()) {
            return None;
        }
        let mut data = Data::new(values.to_vec());
        Some(Self {
            count: values.len(),
            min: data.min(),
            q1: data.lower_quartile(),
            median: data.median(),
            q3: data.upper_quartile(),
            max: data.max(),
            mean: data.mean()?,
        })
    }
}
