use std::collections::BTreeMap;
use std::fmt;

use serde::Serialize;

use crate::data::filter::FilteredView;

// ---------------------------------------------------------------------------
// Air-quality category bands
// ---------------------------------------------------------------------------

/// Severity band for a PM2.5 reading. The derived `Ord` follows the
/// canonical severity order, so `BTreeMap` keyed by category iterates
/// Good → Hazardous.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
pub enum AirQualityCategory {
    Good,
    Moderate,
    UnhealthyForSensitiveGroups,
    Unhealthy,
    VeryUnhealthy,
    Hazardous,
}

impl AirQualityCategory {
    /// Chart label, matching the conventional band names.
    pub fn label(&self) -> &'static str {
        match self {
            AirQualityCategory::Good => "Good",
            AirQualityCategory::Moderate => "Moderate",
            AirQualityCategory::UnhealthyForSensitiveGroups => "Unhealthy for Sensitive Groups",
            AirQualityCategory::Unhealthy => "Unhealthy",
            AirQualityCategory::VeryUnhealthy => "Very Unhealthy",
            AirQualityCategory::Hazardous => "Hazardous",
        }
    }
}

impl fmt::Display for AirQualityCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Classify a PM2.5 concentration (µg/m³) into its severity band.
///
/// Band upper bounds are inclusive: exactly 35.0 is `Good`. Readings at or
/// below 35.0, including negative sensor values, land in `Good`; the
/// loader never stores non-finite values, so every input here is finite.
pub fn categorize(pm25: f64) -> AirQualityCategory {
    if pm25 <= 35.0 {
        AirQualityCategory::Good
    } else if pm25 <= 75.0 {
        AirQualityCategory::Moderate
    } else if pm25 <= 115.0 {
        AirQualityCategory::UnhealthyForSensitiveGroups
    } else if pm25 <= 150.0 {
        AirQualityCategory::Unhealthy
    } else if pm25 <= 250.0 {
        AirQualityCategory::VeryUnhealthy
    } else {
        AirQualityCategory::Hazardous
    }
}

/// Count how many hourly readings fall in each band. Only bands that
/// actually occur appear in the result; absent PM2.5 values are skipped.
pub fn category_distribution(view: &FilteredView) -> BTreeMap<AirQualityCategory, usize> {
    let mut counts: BTreeMap<AirQualityCategory, usize> = BTreeMap::new();
    for obs in view.iter() {
        if let Some(pm) = obs.pm25 {
            *counts.entry(categorize(pm)).or_insert(0) += 1;
        }
    }
    counts
}
