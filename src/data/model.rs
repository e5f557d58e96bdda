use std::collections::{BTreeMap, BTreeSet};
use std::fmt;

use chrono::{NaiveDate, NaiveDateTime};
use serde::Serialize;

// ---------------------------------------------------------------------------
// CovariateValue – a single cell in a pass-through column
// ---------------------------------------------------------------------------

/// A dynamically-typed value for measured covariates outside the fixed
/// schema (pressure, dew point, wind direction, gas concentrations, ...).
/// These columns are carried through the pipeline unmodified.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub enum CovariateValue {
    String(String),
    Integer(i64),
    Float(f64),
    Null,
}

impl fmt::Display for CovariateValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CovariateValue::String(s) => write!(f, "{s}"),
            CovariateValue::Integer(i) => write!(f, "{i}"),
            CovariateValue::Float(v) => write!(f, "{v:.4}"),
            CovariateValue::Null => write!(f, "<null>"),
        }
    }
}

impl CovariateValue {
    /// Try to interpret the value as an `f64` for numeric analysis.
    pub fn as_f64(&self) -> Option<f64> {
        match self {
            CovariateValue::Float(v) => Some(*v),
            CovariateValue::Integer(i) => Some(*i as f64),
            _ => None,
        }
    }
}

// ---------------------------------------------------------------------------
// Observation – one hourly measurement row
// ---------------------------------------------------------------------------

/// A single hourly measurement record for one monitoring station.
///
/// The timestamp is mandatory; every numeric field may be absent when the
/// source cell was empty or unparseable. Absent values are excluded from
/// all aggregates, never treated as zero.
#[derive(Debug, Clone, Serialize)]
pub struct Observation {
    /// Monitoring station identifier.
    pub station: String,
    /// Measurement time, hour resolution.
    pub timestamp: NaiveDateTime,
    /// PM2.5 concentration (µg/m³).
    pub pm25: Option<f64>,
    /// Precipitation (mm).
    pub rain: Option<f64>,
    /// Air temperature (°C).
    pub temp: Option<f64>,
    /// Remaining measured covariates: column_name → value.
    pub extra: BTreeMap<String, CovariateValue>,
}

impl Observation {
    /// Calendar date of the measurement.
    pub fn date(&self) -> NaiveDate {
        self.timestamp.date()
    }

    /// Numeric value of a named weather/covariate column, if present.
    /// `RAIN` and `TEMP` resolve to the dedicated fields; any other name
    /// is looked up among the pass-through covariates.
    pub fn numeric_field(&self, name: &str) -> Option<f64> {
        match name {
            "RAIN" => self.rain,
            "TEMP" => self.temp,
            _ => self.extra.get(name).and_then(CovariateValue::as_f64),
        }
    }
}

// ---------------------------------------------------------------------------
// DataSet – the complete loaded dataset
// ---------------------------------------------------------------------------

/// The full parsed dataset with pre-computed indices.
///
/// Immutable once built: re-loading replaces the value wholesale. The host
/// sidebar needs the station list and the observed date span to shape its
/// filter widgets, so both are computed once here.
#[derive(Debug, Clone, Serialize)]
pub struct DataSet {
    /// All observations (rows) in source order.
    pub observations: Vec<Observation>,
    /// Sorted set of distinct station identifiers.
    pub stations: BTreeSet<String>,
    /// Ordered list of pass-through covariate column names.
    pub covariate_names: Vec<String>,
    /// Earliest and latest observation date, `None` for an empty dataset.
    pub date_range: Option<(NaiveDate, NaiveDate)>,
}

impl DataSet {
    /// Build the station/covariate/date indices from loaded observations.
    pub fn from_observations(observations: Vec<Observation>) -> Self {
        let mut stations: BTreeSet<String> = BTreeSet::new();
        let mut covariate_names_set: BTreeSet<String> = BTreeSet::new();
        let mut date_range: Option<(NaiveDate, NaiveDate)> = None;

        for obs in &observations {
            stations.insert(obs.station.clone());
            for col in obs.extra.keys() {
                covariate_names_set.insert(col.clone());
            }
            let d = obs.date();
            date_range = Some(match date_range {
                None => (d, d),
                Some((lo, hi)) => (lo.min(d), hi.max(d)),
            });
        }

        let covariate_names: Vec<String> = covariate_names_set.into_iter().collect();
        DataSet {
            observations,
            stations,
            covariate_names,
            date_range,
        }
    }

    /// Number of observations.
    pub fn len(&self) -> usize {
        self.observations.len()
    }

    /// Whether the dataset is empty.
    pub fn is_empty(&self) -> bool {
        self.observations.is_empty()
    }
}
