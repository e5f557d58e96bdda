/// Data layer: core types, loading, and filtering.
///
/// Architecture:
/// ```text
///  .csv / .json / .parquet
///        │
///        ▼
///   ┌──────────┐
///   │  loader   │  parse file → DataSet
///   └──────────┘
///        │
///        ▼
///   ┌──────────┐
///   │  DataSet  │  Vec<Observation>, station/date index
///   └──────────┘
///        │
///        ▼
///   ┌──────────┐
///   │  filter   │  date window + station selection → FilteredView
///   └──────────┘
/// ```

pub mod filter;
pub mod loader;
pub mod model;
