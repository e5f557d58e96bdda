use std::collections::BTreeMap;
use std::fs::File;
use std::path::{Path, PathBuf};
use std::sync::Arc;

use arrow::array::{
    Array, AsArray, Float32Array, Float64Array, Int32Array, Int64Array, StringArray,
    TimestampMicrosecondArray, TimestampMillisecondArray, TimestampNanosecondArray,
    TimestampSecondArray,
};
use arrow::datatypes::{DataType, TimeUnit};
use chrono::{DateTime, NaiveDate, NaiveDateTime, NaiveTime};
use log::{debug, info};
use parquet::arrow::arrow_reader::ParquetRecordBatchReaderBuilder;
use serde_json::Value as JsonValue;
use thiserror::Error;

use super::model::{CovariateValue, DataSet, Observation};

/// Required logical columns. `date` is mandatory per row; the numeric
/// columns must exist but individual cells may be absent.
const STATION_COL: &str = "station";
const DATE_COL: &str = "date";
const PM25_COL: &str = "PM2.5";
const RAIN_COL: &str = "RAIN";
const TEMP_COL: &str = "TEMP";

// ---------------------------------------------------------------------------
// LoadError
// ---------------------------------------------------------------------------

/// Errors raised while loading a dataset. A failed load never yields a
/// partial dataset.
#[derive(Debug, Error)]
pub enum LoadError {
    #[error("cannot read '{}': {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("unsupported file extension: .{0}")]
    UnsupportedFormat(String),

    #[error("missing required column '{0}'")]
    MissingColumn(String),

    #[error("row {row}: unparseable timestamp '{value}'")]
    Timestamp { row: usize, value: String },

    #[error("row {row}: {reason}")]
    BadRow { row: usize, reason: String },

    #[error("unexpected input shape: {0}")]
    Shape(String),

    #[error("malformed CSV: {0}")]
    Csv(#[from] csv::Error),

    #[error("malformed JSON: {0}")]
    Json(#[from] serde_json::Error),

    #[error("malformed Parquet: {0}")]
    Parquet(#[from] parquet::errors::ParquetError),

    #[error("malformed Arrow data: {0}")]
    Arrow(#[from] arrow::error::ArrowError),
}

// ---------------------------------------------------------------------------
// Public entry-point
// ---------------------------------------------------------------------------

/// Load an hourly observation dataset from a file. Dispatch by extension.
///
/// Supported formats:
/// * `.csv`     – header row with the schema columns (the shipped dataset)
/// * `.json`    – records orientation, `[{ "station": ..., "date": ..., ... }]`
/// * `.parquet` – flat columnar layout as written by `df.to_parquet()`
pub fn load_file(path: &Path) -> Result<DataSet, LoadError> {
    let ext = path
        .extension()
        .and_then(|e| e.to_str())
        .unwrap_or("")
        .to_ascii_lowercase();

    let dataset = match ext.as_str() {
        "csv" => load_csv(path),
        "json" => load_json(path),
        "parquet" | "pq" => load_parquet(path),
        other => Err(LoadError::UnsupportedFormat(other.to_string())),
    }?;

    info!(
        "loaded {} observations ({} stations) from {}",
        dataset.len(),
        dataset.stations.len(),
        path.display()
    );
    Ok(dataset)
}

// ---------------------------------------------------------------------------
// Cell parsing helpers
// ---------------------------------------------------------------------------

/// Parse a timestamp cell. Accepts the hourly `Y-m-d H:M:S` form the
/// dataset ships with, the ISO `T` variant, and a bare date (midnight).
fn parse_timestamp(s: &str) -> Option<NaiveDateTime> {
    let s = s.trim();
    for fmt in ["%Y-%m-%d %H:%M:%S", "%Y-%m-%dT%H:%M:%S", "%Y-%m-%d %H:%M"] {
        if let Ok(ts) = NaiveDateTime::parse_from_str(s, fmt) {
            return Some(ts);
        }
    }
    NaiveDate::parse_from_str(s, "%Y-%m-%d")
        .ok()
        .map(|d| d.and_time(NaiveTime::MIN))
}

/// Parse a numeric measurement cell. Empty, unparseable, and non-finite
/// cells all read as absent; the load carries on.
fn parse_numeric(s: &str) -> Option<f64> {
    match s.trim().parse::<f64>() {
        Ok(v) if v.is_finite() => Some(v),
        _ => None,
    }
}

/// Type-guess a pass-through covariate cell.
fn guess_covariate(s: &str) -> CovariateValue {
    let s = s.trim();
    if s.is_empty() {
        return CovariateValue::Null;
    }
    if let Ok(i) = s.parse::<i64>() {
        return CovariateValue::Integer(i);
    }
    if let Ok(f) = s.parse::<f64>() {
        return if f.is_finite() {
            CovariateValue::Float(f)
        } else {
            CovariateValue::Null
        };
    }
    CovariateValue::String(s.to_string())
}

// ---------------------------------------------------------------------------
// CSV loader
// ---------------------------------------------------------------------------

fn load_csv(path: &Path) -> Result<DataSet, LoadError> {
    let file = File::open(path).map_err(|source| LoadError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    let mut reader = csv::Reader::from_reader(file);
    let headers: Vec<String> = reader.headers()?.iter().map(|h| h.to_string()).collect();

    let col = |name: &str| -> Result<usize, LoadError> {
        headers
            .iter()
            .position(|h| h == name)
            .ok_or_else(|| LoadError::MissingColumn(name.to_string()))
    };
    let station_idx = col(STATION_COL)?;
    let date_idx = col(DATE_COL)?;
    let pm25_idx = col(PM25_COL)?;
    let rain_idx = col(RAIN_COL)?;
    let temp_idx = col(TEMP_COL)?;
    let fixed = [station_idx, date_idx, pm25_idx, rain_idx, temp_idx];

    let mut observations = Vec::new();
    let mut absent_pm25 = 0usize;

    for (row_no, result) in reader.records().enumerate() {
        let record = result?;

        let raw_ts = record.get(date_idx).unwrap_or("");
        let timestamp = parse_timestamp(raw_ts).ok_or_else(|| LoadError::Timestamp {
            row: row_no,
            value: raw_ts.to_string(),
        })?;

        let pm25 = parse_numeric(record.get(pm25_idx).unwrap_or(""));
        if pm25.is_none() {
            absent_pm25 += 1;
        }

        let mut extra = BTreeMap::new();
        for (col_idx, value) in record.iter().enumerate() {
            if fixed.contains(&col_idx) {
                continue;
            }
            extra.insert(headers[col_idx].clone(), guess_covariate(value));
        }

        observations.push(Observation {
            station: record.get(station_idx).unwrap_or("").to_string(),
            timestamp,
            pm25,
            rain: parse_numeric(record.get(rain_idx).unwrap_or("")),
            temp: parse_numeric(record.get(temp_idx).unwrap_or("")),
            extra,
        });
    }

    debug!("{absent_pm25} rows with absent PM2.5");
    Ok(DataSet::from_observations(observations))
}

// ---------------------------------------------------------------------------
// JSON loader
// ---------------------------------------------------------------------------

/// Records-oriented JSON, the default `df.to_json(orient='records')`:
///
/// ```json
/// [
///   { "station": "Changping", "date": "2023-01-15 00:00:00",
///     "PM2.5": 30.0, "RAIN": 0.0, "TEMP": -2.1, "PRES": 1028.0 },
///   ...
/// ]
/// ```
fn load_json(path: &Path) -> Result<DataSet, LoadError> {
    let text = std::fs::read_to_string(path).map_err(|source| LoadError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    let root: JsonValue = serde_json::from_str(&text)?;

    let records = root
        .as_array()
        .ok_or_else(|| LoadError::Shape("expected top-level JSON array".to_string()))?;

    // Schema check against the first record; later records may carry nulls.
    if let Some(first) = records.first().and_then(|r| r.as_object()) {
        for name in [STATION_COL, DATE_COL, PM25_COL, RAIN_COL, TEMP_COL] {
            if !first.contains_key(name) {
                return Err(LoadError::MissingColumn(name.to_string()));
            }
        }
    }

    let mut observations = Vec::with_capacity(records.len());

    for (row_no, rec) in records.iter().enumerate() {
        let obj = rec.as_object().ok_or_else(|| LoadError::BadRow {
            row: row_no,
            reason: "not a JSON object".to_string(),
        })?;

        let raw_ts = obj.get(DATE_COL).and_then(|v| v.as_str()).unwrap_or("");
        let timestamp = parse_timestamp(raw_ts).ok_or_else(|| LoadError::Timestamp {
            row: row_no,
            value: raw_ts.to_string(),
        })?;

        let station = obj
            .get(STATION_COL)
            .and_then(|v| v.as_str())
            .ok_or_else(|| LoadError::BadRow {
                row: row_no,
                reason: "station is not a string".to_string(),
            })?
            .to_string();

        let mut extra = BTreeMap::new();
        for (key, val) in obj {
            if [STATION_COL, DATE_COL, PM25_COL, RAIN_COL, TEMP_COL].contains(&key.as_str()) {
                continue;
            }
            extra.insert(key.clone(), json_to_covariate(val));
        }

        observations.push(Observation {
            station,
            timestamp,
            pm25: json_numeric(obj.get(PM25_COL)),
            rain: json_numeric(obj.get(RAIN_COL)),
            temp: json_numeric(obj.get(TEMP_COL)),
            extra,
        });
    }

    Ok(DataSet::from_observations(observations))
}

fn json_numeric(val: Option<&JsonValue>) -> Option<f64> {
    val.and_then(|v| v.as_f64()).filter(|v| v.is_finite())
}

fn json_to_covariate(val: &JsonValue) -> CovariateValue {
    match val {
        JsonValue::String(s) => CovariateValue::String(s.clone()),
        JsonValue::Number(n) => {
            if let Some(i) = n.as_i64() {
                CovariateValue::Integer(i)
            } else if let Some(f) = n.as_f64() {
                CovariateValue::Float(f)
            } else {
                CovariateValue::String(n.to_string())
            }
        }
        JsonValue::Null => CovariateValue::Null,
        other => CovariateValue::String(other.to_string()),
    }
}

// ---------------------------------------------------------------------------
// Parquet loader
// ---------------------------------------------------------------------------

/// Flat columnar layout as written by `df.to_parquet()`: one row per
/// observation, `station` as Utf8, `date` as a timestamp (any unit) or
/// Utf8, measurements as floats. Other columns become covariates.
fn load_parquet(path: &Path) -> Result<DataSet, LoadError> {
    let file = File::open(path).map_err(|source| LoadError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    let builder = ParquetRecordBatchReaderBuilder::try_new(file)?;
    let reader = builder.build()?;

    let mut observations = Vec::new();
    let mut row_base = 0usize;

    for batch_result in reader {
        let batch = batch_result?;
        let schema = batch.schema();
        let n_rows = batch.num_rows();

        let col = |name: &str| -> Result<usize, LoadError> {
            schema
                .index_of(name)
                .map_err(|_| LoadError::MissingColumn(name.to_string()))
        };
        let station_idx = col(STATION_COL)?;
        let date_idx = col(DATE_COL)?;
        let pm25_idx = col(PM25_COL)?;
        let rain_idx = col(RAIN_COL)?;
        let temp_idx = col(TEMP_COL)?;
        let fixed = [station_idx, date_idx, pm25_idx, rain_idx, temp_idx];

        let meta_cols: Vec<(usize, String)> = schema
            .fields()
            .iter()
            .enumerate()
            .filter(|(i, _)| !fixed.contains(i))
            .map(|(i, f)| (i, f.name().clone()))
            .collect();

        let station_col = batch
            .column(station_idx)
            .as_any()
            .downcast_ref::<StringArray>()
            .ok_or_else(|| LoadError::Shape("'station' is not a string column".to_string()))?;
        let date_col = batch.column(date_idx);

        for row in 0..n_rows {
            let abs_row = row_base + row;
            let timestamp = extract_timestamp(date_col, row).ok_or_else(|| {
                LoadError::Timestamp {
                    row: abs_row,
                    value: describe_cell(date_col, row),
                }
            })?;

            let mut extra = BTreeMap::new();
            for (col_idx, col_name) in &meta_cols {
                extra.insert(
                    col_name.clone(),
                    extract_covariate(batch.column(*col_idx), row),
                );
            }

            observations.push(Observation {
                station: if station_col.is_null(row) {
                    String::new()
                } else {
                    station_col.value(row).to_string()
                },
                timestamp,
                pm25: extract_numeric(batch.column(pm25_idx), row),
                rain: extract_numeric(batch.column(rain_idx), row),
                temp: extract_numeric(batch.column(temp_idx), row),
                extra,
            });
        }
        row_base += n_rows;
    }

    Ok(DataSet::from_observations(observations))
}

// -- Parquet / Arrow helpers --

/// Read the timestamp cell from a `date` column. Pandas writes
/// datetime64 columns as Arrow timestamps; Utf8 is accepted for tables
/// round-tripped through CSV.
fn extract_timestamp(col: &Arc<dyn Array>, row: usize) -> Option<NaiveDateTime> {
    if col.is_null(row) {
        return None;
    }
    match col.data_type() {
        DataType::Timestamp(unit, _) => {
            let (secs, nanos) = match unit {
                TimeUnit::Second => {
                    let arr = col.as_any().downcast_ref::<TimestampSecondArray>()?;
                    (arr.value(row), 0u32)
                }
                TimeUnit::Millisecond => {
                    let arr = col.as_any().downcast_ref::<TimestampMillisecondArray>()?;
                    let v = arr.value(row);
                    (v.div_euclid(1_000), (v.rem_euclid(1_000) * 1_000_000) as u32)
                }
                TimeUnit::Microsecond => {
                    let arr = col.as_any().downcast_ref::<TimestampMicrosecondArray>()?;
                    let v = arr.value(row);
                    (v.div_euclid(1_000_000), (v.rem_euclid(1_000_000) * 1_000) as u32)
                }
                TimeUnit::Nanosecond => {
                    let arr = col.as_any().downcast_ref::<TimestampNanosecondArray>()?;
                    let v = arr.value(row);
                    (v.div_euclid(1_000_000_000), v.rem_euclid(1_000_000_000) as u32)
                }
            };
            DateTime::from_timestamp(secs, nanos).map(|dt| dt.naive_utc())
        }
        DataType::Utf8 => {
            let arr = col.as_any().downcast_ref::<StringArray>()?;
            parse_timestamp(arr.value(row))
        }
        _ => None,
    }
}

/// Read a numeric measurement cell; nulls and non-finite values are absent.
fn extract_numeric(col: &Arc<dyn Array>, row: usize) -> Option<f64> {
    if col.is_null(row) {
        return None;
    }
    let v = match col.data_type() {
        DataType::Float64 => col.as_any().downcast_ref::<Float64Array>()?.value(row),
        DataType::Float32 => col.as_any().downcast_ref::<Float32Array>()?.value(row) as f64,
        DataType::Int64 => col.as_any().downcast_ref::<Int64Array>()?.value(row) as f64,
        DataType::Int32 => col.as_any().downcast_ref::<Int32Array>()?.value(row) as f64,
        _ => return None,
    };
    Some(v).filter(|v| v.is_finite())
}

/// Extract a single covariate value from an Arrow column at a given row.
fn extract_covariate(col: &Arc<dyn Array>, row: usize) -> CovariateValue {
    if col.is_null(row) {
        return CovariateValue::Null;
    }
    match col.data_type() {
        DataType::Utf8 | DataType::LargeUtf8 => {
            if let Some(s) = col.as_any().downcast_ref::<StringArray>() {
                CovariateValue::String(s.value(row).to_string())
            } else {
                let s = col.as_string::<i64>();
                CovariateValue::String(s.value(row).to_string())
            }
        }
        DataType::Int32 => {
            match col.as_any().downcast_ref::<Int32Array>() {
                Some(arr) => CovariateValue::Integer(arr.value(row) as i64),
                None => CovariateValue::Null,
            }
        }
        DataType::Int64 => {
            match col.as_any().downcast_ref::<Int64Array>() {
                Some(arr) => CovariateValue::Integer(arr.value(row)),
                None => CovariateValue::Null,
            }
        }
        DataType::Float32 => {
            match col.as_any().downcast_ref::<Float32Array>() {
                Some(arr) => CovariateValue::Float(arr.value(row) as f64),
                None => CovariateValue::Null,
            }
        }
        DataType::Float64 => {
            match col.as_any().downcast_ref::<Float64Array>() {
                Some(arr) => CovariateValue::Float(arr.value(row)),
                None => CovariateValue::Null,
            }
        }
        _ => CovariateValue::Null,
    }
}

/// Best-effort rendering of a cell for error messages.
fn describe_cell(col: &Arc<dyn Array>, row: usize) -> String {
    if col.is_null(row) {
        return "<null>".to_string();
    }
    match col.data_type() {
        DataType::Utf8 => col
            .as_any()
            .downcast_ref::<StringArray>()
            .map(|a| a.value(row).to_string())
            .unwrap_or_else(|| "<?>".to_string()),
        other => format!("<{other:?}>"),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    fn temp_path(name: &str) -> PathBuf {
        std::env::temp_dir().join(format!("airdash_loader_{}_{name}", std::process::id()))
    }

    fn write_file(name: &str, content: &str) -> PathBuf {
        let path = temp_path(name);
        let mut f = File::create(&path).unwrap();
        f.write_all(content.as_bytes()).unwrap();
        path
    }

    const CSV_HEADER: &str = "station,date,PM2.5,RAIN,TEMP,PRES,wd\n";

    #[test]
    fn csv_happy_path_with_absent_cells() {
        let path = write_file(
            "ok.csv",
            &format!(
                "{CSV_HEADER}\
                 Changping,2023-01-15 00:00:00,30,0.0,-2.1,1028,NNE\n\
                 Changping,2023-01-15 01:00:00,,0.1,-2.4,1027.5,N\n\
                 Dingling,2023-01-15 00:00:00,abc,,,1029,\n"
            ),
        );

        let ds = load_file(&path).unwrap();
        std::fs::remove_file(&path).ok();

        assert_eq!(ds.len(), 3);
        assert_eq!(ds.observations[0].pm25, Some(30.0));
        assert_eq!(ds.observations[1].pm25, None);
        assert_eq!(ds.observations[2].pm25, None);
        assert_eq!(ds.observations[2].rain, None);
        assert_eq!(
            ds.observations[0].extra.get("wd"),
            Some(&CovariateValue::String("NNE".to_string()))
        );
        assert_eq!(
            ds.observations[1].extra.get("PRES"),
            Some(&CovariateValue::Float(1027.5))
        );
        assert_eq!(
            ds.observations[2].extra.get("wd"),
            Some(&CovariateValue::Null)
        );
        assert_eq!(ds.covariate_names, vec!["PRES", "wd"]);
    }

    #[test]
    fn csv_missing_required_column() {
        let path = write_file(
            "nocol.csv",
            "station,date,RAIN,TEMP\nChangping,2023-01-15 00:00:00,0.0,-2.1\n",
        );
        let err = load_file(&path).unwrap_err();
        std::fs::remove_file(&path).ok();
        match err {
            LoadError::MissingColumn(name) => assert_eq!(name, "PM2.5"),
            other => panic!("expected MissingColumn, got {other:?}"),
        }
    }

    #[test]
    fn csv_unparseable_timestamp_is_fatal() {
        let path = write_file(
            "badts.csv",
            &format!("{CSV_HEADER}Changping,yesterday,30,0.0,-2.1,1028,NNE\n"),
        );
        let err = load_file(&path).unwrap_err();
        std::fs::remove_file(&path).ok();
        match err {
            LoadError::Timestamp { row, value } => {
                assert_eq!(row, 0);
                assert_eq!(value, "yesterday");
            }
            other => panic!("expected Timestamp, got {other:?}"),
        }
    }

    #[test]
    fn csv_bare_date_reads_as_midnight() {
        let path = write_file(
            "bare.csv",
            &format!("{CSV_HEADER}Changping,2023-01-15,30,0.0,-2.1,1028,NNE\n"),
        );
        let ds = load_file(&path).unwrap();
        std::fs::remove_file(&path).ok();
        assert_eq!(
            ds.observations[0].timestamp,
            NaiveDate::from_ymd_opt(2023, 1, 15)
                .unwrap()
                .and_time(NaiveTime::MIN)
        );
    }

    #[test]
    fn missing_file_is_io_error() {
        let err = load_file(Path::new("/nonexistent/main_data.csv")).unwrap_err();
        assert!(matches!(err, LoadError::Io { .. }));
    }

    #[test]
    fn unknown_extension_is_rejected() {
        let err = load_file(Path::new("main_data.pkl")).unwrap_err();
        match err {
            LoadError::UnsupportedFormat(ext) => assert_eq!(ext, "pkl"),
            other => panic!("expected UnsupportedFormat, got {other:?}"),
        }
    }

    #[test]
    fn json_records_round() {
        let path = write_file(
            "rows.json",
            r#"[
              {"station":"Changping","date":"2023-01-15 00:00:00","PM2.5":30.0,"RAIN":0.0,"TEMP":-2.1,"PRES":1028.0},
              {"station":"Dingling","date":"2023-01-16 12:00:00","PM2.5":null,"RAIN":null,"TEMP":3.5,"PRES":null}
            ]"#,
        );
        let ds = load_file(&path).unwrap();
        std::fs::remove_file(&path).ok();

        assert_eq!(ds.len(), 2);
        assert_eq!(ds.observations[0].pm25, Some(30.0));
        assert_eq!(ds.observations[1].pm25, None);
        assert_eq!(ds.observations[1].temp, Some(3.5));
        assert_eq!(
            ds.observations[1].extra.get("PRES"),
            Some(&CovariateValue::Null)
        );
    }

    #[test]
    fn json_missing_column_detected_on_first_record() {
        let path = write_file(
            "nopm.json",
            r#"[{"station":"Changping","date":"2023-01-15 00:00:00","RAIN":0.0,"TEMP":-2.1}]"#,
        );
        let err = load_file(&path).unwrap_err();
        std::fs::remove_file(&path).ok();
        assert!(matches!(err, LoadError::MissingColumn(name) if name == "PM2.5"));
    }

    #[test]
    fn parquet_round() {
        use arrow::array::{Float64Builder, StringBuilder, TimestampNanosecondBuilder};
        use arrow::datatypes::{Field, Schema};
        use arrow::record_batch::RecordBatch;
        use parquet::arrow::ArrowWriter;

        let schema = Arc::new(Schema::new(vec![
            Field::new("station", DataType::Utf8, false),
            Field::new("date", DataType::Timestamp(TimeUnit::Nanosecond, None), false),
            Field::new("PM2.5", DataType::Float64, true),
            Field::new("RAIN", DataType::Float64, true),
            Field::new("TEMP", DataType::Float64, true),
            Field::new("PRES", DataType::Float64, true),
        ]));

        let mut stations = StringBuilder::new();
        let mut dates = TimestampNanosecondBuilder::new();
        let mut pm25 = Float64Builder::new();
        let mut rain = Float64Builder::new();
        let mut temp = Float64Builder::new();
        let mut pres = Float64Builder::new();

        let epoch = NaiveDate::from_ymd_opt(2023, 1, 15)
            .unwrap()
            .and_time(NaiveTime::MIN)
            .and_utc()
            .timestamp_nanos_opt()
            .unwrap();
        for (i, value) in [Some(30.0), None].iter().enumerate() {
            stations.append_value("Changping");
            dates.append_value(epoch + i as i64 * 3_600_000_000_000);
            pm25.append_option(*value);
            rain.append_value(0.0);
            temp.append_value(-2.1);
            pres.append_option(if i == 0 { Some(1028.0) } else { None });
        }

        let batch = RecordBatch::try_new(
            schema.clone(),
            vec![
                Arc::new(stations.finish()),
                Arc::new(dates.finish()),
                Arc::new(pm25.finish()),
                Arc::new(rain.finish()),
                Arc::new(temp.finish()),
                Arc::new(pres.finish()),
            ],
        )
        .unwrap();

        let path = temp_path("round.parquet");
        let file = File::create(&path).unwrap();
        let mut writer = ArrowWriter::try_new(file, schema, None).unwrap();
        writer.write(&batch).unwrap();
        writer.close().unwrap();

        let ds = load_file(&path).unwrap();
        std::fs::remove_file(&path).ok();

        assert_eq!(ds.len(), 2);
        assert_eq!(ds.observations[0].station, "Changping");
        assert_eq!(ds.observations[0].pm25, Some(30.0));
        assert_eq!(ds.observations[1].pm25, None);
        assert_eq!(
            ds.observations[0].timestamp,
            NaiveDate::from_ymd_opt(2023, 1, 15)
                .unwrap()
                .and_time(NaiveTime::MIN)
        );
        assert_eq!(
            ds.observations[0].extra.get("PRES"),
            Some(&CovariateValue::Float(1028.0))
        );
        assert_eq!(
            ds.observations[1].extra.get("PRES"),
            Some(&CovariateValue::Null)
        );
    }
}
