//! A collection of subscriber-count samples for a specific forum.

use crate::models::sample::Sample;

/// Represents the complete collected history for a single forum.
///
/// This struct groups a vector of [`Sample`]s with the forum they were
/// collected for, making the data set self-describing. Samples are ordered by
/// ascending timestamp with no duplicates.
#[derive(Debug, Clone, PartialEq)]
pub struct SampleSeries {
    /// The forum this data represents (e.g., "coronavirus").
    pub forum: String,
    /// The collected samples, ascending by timestamp.
    pub samples: Vec<Sample>,
}

impl SampleSeries {
    pub fn new(forum: impl Into<String>) -> Self {
        Self {
            forum: forum.into(),
            samples: Vec::new(),
        }
    }

    pub fn len(&self) -> usize {
        self.samples.len()
    }

    pub fn is_empty(&self) -> bool {
        self.samples.is_empty()
    }

    pub fn last(&self) -> Option<&Sample> {
        self.samples.last()
    }

    pub fn push(&mut self, sample: Sample) {
        self.samples.push(sample);
    }

    /// Sample timestamps as epoch seconds, for the numeric transforms and the
    /// chart's x axis.
    pub fn epochs(&self) -> Vec<f64> {
        self.samples
            .iter()
            .map(|s| s.timestamp.timestamp() as f64)
            .collect()
    }

    /// Subscriber counts as floats, parallel to [`SampleSeries::epochs`].
    pub fn counts(&self) -> Vec<f64> {
        self.samples.iter().map(|s| s.subscribers as f64).collect()
    }
}
