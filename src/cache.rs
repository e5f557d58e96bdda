use std::fs;
use std::path::{Path, PathBuf};
use std::sync::Arc;
use std::time::SystemTime;

use log::debug;

use crate::data::loader::{load_file, LoadError};
use crate::data::model::DataSet;

// ---------------------------------------------------------------------------
// Dataset cache – parse once per file version, not once per interaction
// ---------------------------------------------------------------------------

/// Identity of a source file version: path plus size and mtime. A loaded
/// dataset is reused only while the fingerprint matches.
#[derive(Debug, Clone, PartialEq, Eq)]
struct Fingerprint {
    path: PathBuf,
    len: u64,
    modified: Option<SystemTime>,
}

impl Fingerprint {
    fn of(path: &Path) -> Result<Self, LoadError> {
        let meta = fs::metadata(path).map_err(|source| LoadError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Ok(Fingerprint {
            path: fs::canonicalize(path).unwrap_or_else(|_| path.to_path_buf()),
            len: meta.len(),
            modified: meta.modified().ok(),
        })
    }
}

/// Caches the most recently loaded dataset behind an `Arc` snapshot.
///
/// The host calls [`DatasetCache::load`] on every refresh; an unchanged
/// file returns the shared snapshot without re-parsing. Snapshots are
/// immutable, so concurrent readers never block each other. Invalidation
/// is explicit: a changed fingerprint replaces the entry wholesale, and
/// [`DatasetCache::invalidate`] drops it.
#[derive(Debug, Default)]
pub struct DatasetCache {
    entry: Option<(Fingerprint, Arc<DataSet>)>,
}

impl DatasetCache {
    pub fn new() -> Self {
        DatasetCache { entry: None }
    }

    /// Return the dataset for `path`, re-parsing only when the file's
    /// fingerprint differs from the cached one.
    pub fn load(&mut self, path: &Path) -> Result<Arc<DataSet>, LoadError> {
        let fingerprint = Fingerprint::of(path)?;

        if let Some((cached_fp, dataset)) = &self.entry {
            if *cached_fp == fingerprint {
                debug!("dataset cache hit for {}", path.display());
                return Ok(Arc::clone(dataset));
            }
        }

        debug!("dataset cache miss for {}", path.display());
        let dataset = Arc::new(load_file(path)?);
        self.entry = Some((fingerprint, Arc::clone(&dataset)));
        Ok(dataset)
    }

    /// Drop the cached entry; the next `load` re-parses.
    pub fn invalidate(&mut self) {
        self.entry = None;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    const HEADER: &str = "station,date,PM2.5,RAIN,TEMP\n";

    fn write_csv(name: &str, rows: &str) -> PathBuf {
        let path = std::env::temp_dir().join(format!("airdash_cache_{}_{name}", std::process::id()));
        let mut f = fs::File::create(&path).unwrap();
        f.write_all(HEADER.as_bytes()).unwrap();
        f.write_all(rows.as_bytes()).unwrap();
        path
    }

    #[test]
    fn unchanged_file_returns_the_same_snapshot() {
        let path = write_csv("hit.csv", "Changping,2023-01-15 00:00:00,30,0.0,-2.1\n");
        let mut cache = DatasetCache::new();

        let first = cache.load(&path).unwrap();
        let second = cache.load(&path).unwrap();
        fs::remove_file(&path).ok();

        assert!(Arc::ptr_eq(&first, &second));
        assert_eq!(first.len(), 1);
    }

    #[test]
    fn changed_file_is_reparsed() {
        let path = write_csv("grow.csv", "Changping,2023-01-15 00:00:00,30,0.0,-2.1\n");
        let mut cache = DatasetCache::new();
        let first = cache.load(&path).unwrap();

        // Append a row; the length change alone flips the fingerprint.
        let mut f = fs::OpenOptions::new().append(true).open(&path).unwrap();
        f.write_all(b"Dingling,2023-01-15 01:00:00,40,0.0,-2.5\n")
            .unwrap();
        drop(f);

        let second = cache.load(&path).unwrap();
        fs::remove_file(&path).ok();

        assert!(!Arc::ptr_eq(&first, &second));
        assert_eq!(first.len(), 1);
        assert_eq!(second.len(), 2);
    }

    #[test]
    fn invalidate_forces_a_reload() {
        let path = write_csv("inv.csv", "Changping,2023-01-15 00:00:00,30,0.0,-2.1\n");
        let mut cache = DatasetCache::new();
        let first = cache.load(&path).unwrap();
        cache.invalidate();
        let second = cache.load(&path).unwrap();
        fs::remove_file(&path).ok();

        assert!(!Arc::ptr_eq(&first, &second));
    }

    #[test]
    fn missing_file_surfaces_io_error() {
        let mut cache = DatasetCache::new();
        let err = cache.load(Path::new("/nonexistent/main_data.csv")).unwrap_err();
        assert!(matches!(err, LoadError::Io { .. }));
    }
}
