use std::collections::BTreeSet;

use chrono::NaiveDate;
use serde::Serialize;
use thiserror::Error;

use super::model::{DataSet, Observation};

// ---------------------------------------------------------------------------
// Filter criteria: the date window and station selection from the sidebar
// ---------------------------------------------------------------------------

/// User-chosen filter: an inclusive date window plus a station selection.
///
/// An empty station set means "no station selected" and yields an empty
/// view, not the whole dataset.
#[derive(Debug, Clone, Serialize)]
pub struct FilterCriteria {
    pub start: NaiveDate,
    pub end: NaiveDate,
    pub stations: BTreeSet<String>,
}

/// Raised when `start > end`. The range is never silently swapped; the
/// caller re-prompts.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("invalid date range: start {start} is after end {end}")]
pub struct InvalidRangeError {
    pub start: NaiveDate,
    pub end: NaiveDate,
}

impl FilterCriteria {
    pub fn new(start: NaiveDate, end: NaiveDate, stations: BTreeSet<String>) -> Self {
        FilterCriteria {
            start,
            end,
            stations,
        }
    }

    /// Check the window is well-formed (`start ≤ end`).
    pub fn validate(&self) -> Result<(), InvalidRangeError> {
        if self.start > self.end {
            return Err(InvalidRangeError {
                start: self.start,
                end: self.end,
            });
        }
        Ok(())
    }
}

// ---------------------------------------------------------------------------
// FilteredView – the observations passing the current criteria
// ---------------------------------------------------------------------------

/// Indices of observations passing a filter, in dataset order, together
/// with the dataset they index into. Recomputed on every criteria change;
/// never mutated.
#[derive(Debug, Clone)]
pub struct FilteredView<'a> {
    dataset: &'a DataSet,
    indices: Vec<usize>,
}

impl<'a> FilteredView<'a> {
    /// Iterate the passing observations in original chronological order.
    pub fn iter(&self) -> impl Iterator<Item = &'a Observation> + '_ {
        self.indices.iter().map(|&i| &self.dataset.observations[i])
    }

    /// Indices into the underlying dataset.
    pub fn indices(&self) -> &[usize] {
        &self.indices
    }

    /// Number of passing observations.
    pub fn len(&self) -> usize {
        self.indices.len()
    }

    /// Whether no observation passes.
    pub fn is_empty(&self) -> bool {
        self.indices.is_empty()
    }
}

/// Apply the criteria to the dataset.
///
/// An observation passes when its calendar date lies inside the inclusive
/// window and its station is selected. Source order is preserved; the
/// function is pure and safe to recompute concurrently for different
/// criteria over the same dataset.
pub fn filter<'a>(
    dataset: &'a DataSet,
    criteria: &FilterCriteria,
) -> Result<FilteredView<'a>, InvalidRangeError> {
    criteria.validate()?;

    let indices = dataset
        .observations
        .iter()
        .enumerate()
        .filter(|(_, obs)| {
            let d = obs.date();
            criteria.start <= d && d <= criteria.end && criteria.stations.contains(&obs.station)
        })
        .map(|(i, _)| i)
        .collect();

    Ok(FilteredView { dataset, indices })
}
