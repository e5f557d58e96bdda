use std::collections::BTreeMap;

use chrono::{Datelike, NaiveDate};
use serde::Serialize;

use super::category::{category_distribution, AirQualityCategory};
use crate::data::filter::FilteredView;

// ---------------------------------------------------------------------------
// Summary statistics (the dashboard's metric row)
// ---------------------------------------------------------------------------

/// Mean / max / min of PM2.5 over the present values of a view. All three
/// are `None` when no value is present; `count` is the number of present
/// values that went into them.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SummaryStats {
    pub mean: Option<f64>,
    pub max: Option<f64>,
    pub min: Option<f64>,
    pub count: usize,
}

/// Summarise PM2.5 over the view. Absent values are excluded from both
/// the sum and the count.
pub fn summary_stats(view: &FilteredView) -> SummaryStats {
    let mut sum = 0.0;
    let mut count = 0usize;
    let mut max: Option<f64> = None;
    let mut min: Option<f64> = None;

    for obs in view.iter() {
        if let Some(pm) = obs.pm25 {
            sum += pm;
            count += 1;
            max = Some(max.map_or(pm, |m: f64| m.max(pm)));
            min = Some(min.map_or(pm, |m: f64| m.min(pm)));
        }
    }

    SummaryStats {
        mean: (count > 0).then(|| sum / count as f64),
        max,
        min,
        count,
    }
}

// ---------------------------------------------------------------------------
// Monthly trend (the seasonal line chart)
// ---------------------------------------------------------------------------

/// Mean PM2.5 for one calendar month, marked by the first day of that month.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TrendPoint {
    pub month: NaiveDate,
    pub mean_pm25: f64,
}

/// Resample the view to a monthly mean series, ascending by month.
///
/// Only months with at least one present PM2.5 value appear; empty months
/// are never synthesized.
pub fn monthly_trend(view: &FilteredView) -> Vec<TrendPoint> {
    let mut groups: BTreeMap<NaiveDate, (f64, usize)> = BTreeMap::new();

    for obs in view.iter() {
        if let Some(pm) = obs.pm25 {
            let d = obs.date();
            if let Some(month) = NaiveDate::from_ymd_opt(d.year(), d.month(), 1) {
                let entry = groups.entry(month).or_insert((0.0, 0));
                entry.0 += pm;
                entry.1 += 1;
            }
        }
    }

    groups
        .into_iter()
        .map(|(month, (sum, n))| TrendPoint {
            month,
            mean_pm25: sum / n as f64,
        })
        .collect()
}

// ---------------------------------------------------------------------------
// Station ranking (the per-station bar chart)
// ---------------------------------------------------------------------------

/// Mean PM2.5 for one station over the view.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct StationMean {
    pub station: String,
    pub mean_pm25: f64,
}

/// Rank stations by mean PM2.5, highest first. Equal means are ordered by
/// station identifier ascending so the ranking is deterministic. Stations
/// whose every PM2.5 value is absent have no mean and are omitted.
pub fn station_ranking(view: &FilteredView) -> Vec<StationMean> {
    let mut groups: BTreeMap<&str, (f64, usize)> = BTreeMap::new();

    for obs in view.iter() {
        if let Some(pm) = obs.pm25 {
            let entry = groups.entry(obs.station.as_str()).or_insert((0.0, 0));
            entry.0 += pm;
            entry.1 += 1;
        }
    }

    let mut ranking: Vec<StationMean> = groups
        .into_iter()
        .map(|(station, (sum, n))| StationMean {
            station: station.to_string(),
            mean_pm25: sum / n as f64,
        })
        .collect();

    ranking.sort_by(|a, b| {
        b.mean_pm25
            .total_cmp(&a.mean_pm25)
            .then_with(|| a.station.cmp(&b.station))
    });
    ranking
}

// ---------------------------------------------------------------------------
// Weather correlation (the scatterplot pairs)
// ---------------------------------------------------------------------------

/// Pairs of (weather factor, PM2.5) for a correlation scatterplot.
/// `factor` is `RAIN`, `TEMP`, or any numeric pass-through covariate
/// column. Rows missing either value are skipped.
pub fn weather_scatter(view: &FilteredView, factor: &str) -> Vec<(f64, f64)> {
    view.iter()
        .filter_map(|obs| match (obs.numeric_field(factor), obs.pm25) {
            (Some(x), Some(y)) => Some((x, y)),
            _ => None,
        })
        .collect()
}

// ---------------------------------------------------------------------------
// Report – one aggregation pass over a view
// ---------------------------------------------------------------------------

/// Everything the dashboard renders from one filtered view. Plain data;
/// the host converts it to charts and tables.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Report {
    pub summary: SummaryStats,
    pub monthly_trend: Vec<TrendPoint>,
    pub station_ranking: Vec<StationMean>,
    pub category_distribution: BTreeMap<AirQualityCategory, usize>,
}

impl Report {
    /// Run all four aggregations over the view.
    pub fn from_view(view: &FilteredView) -> Self {
        Report {
            summary: summary_stats(view),
            monthly_trend: monthly_trend(view),
            station_ranking: station_ranking(view),
            category_distribution: category_distribution(view),
        }
    }
}
