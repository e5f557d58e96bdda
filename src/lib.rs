//! Analytics core for an hourly PM2.5 air-quality dashboard.
//!
//! The host presentation layer drives an explicit pipeline instead of
//! re-running a script on every widget change:
//!
//! ```text
//! load_file / DatasetCache::load  →  DataSet
//! filter(&DataSet, &FilterCriteria)  →  FilteredView
//! Report::from_view(&FilteredView)   →  summary, trend, ranking, bands
//! ```
//!
//! Everything downstream of the loader is a pure function of its inputs:
//! identical dataset and criteria always produce identical results.

pub mod analysis;
pub mod cache;
pub mod data;

pub use analysis::aggregate::{
    monthly_trend, station_ranking, summary_stats, weather_scatter, Report, StationMean,
    SummaryStats, TrendPoint,
};
pub use analysis::category::{categorize, category_distribution, AirQualityCategory};
pub use cache::DatasetCache;
pub use data::filter::{filter, FilterCriteria, FilteredView, InvalidRangeError};
pub use data::loader::{load_file, LoadError};
pub use data::model::{CovariateValue, DataSet, Observation};
