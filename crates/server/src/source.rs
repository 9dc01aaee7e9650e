//! Where snapshots come from.

use epochview_types::EpochInfoSnapshot;
use std::fs;
use std::io;
use std::path::PathBuf;
use thiserror::Error;
use tracing::trace;

/// Failure to obtain a snapshot. The table is never assembled after one.
#[derive(Debug, Error)]
pub enum SourceError {
    #[error("failed to read snapshot {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("failed to parse snapshot from {origin}: {source}")]
    Parse {
        origin: String,
        #[source]
        source: serde_json::Error,
    },
}

/// Produces one snapshot per pass.
pub trait SnapshotSource: Send + Sync {
    fn load(&self) -> Result<EpochInfoSnapshot, SourceError>;

    /// Human-readable origin, shown by the status endpoint.
    fn describe(&self) -> String;
}

/// Decode the node's epoch-info JSON.
pub fn parse_snapshot(origin: &str, json: &str) -> Result<EpochInfoSnapshot, SourceError> {
    serde_json::from_str(json).map_err(|source| SourceError::Parse {
        origin: origin.to_string(),
        source,
    })
}

/// Reads a JSON file on every load, so an external fetcher can replace it
/// between passes.
#[derive(Debug, Clone)]
pub struct FileSource {
    path: PathBuf,
}

impl FileSource {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }
}

impl SnapshotSource for FileSource {
    fn load(&self) -> Result<EpochInfoSnapshot, SourceError> {
        let json = fs::read_to_string(&self.path).map_err(|source| SourceError::Io {
            path: self.path.clone(),
            source,
        })?;
        trace!(path = %self.path.display(), bytes = json.len(), "Read snapshot file");
        parse_snapshot(&self.describe(), &json)
    }

    fn describe(&self) -> String {
        format!("file:{}", self.path.display())
    }
}

/// A fixed in-memory snapshot.
#[derive(Debug, Clone)]
pub struct StaticSource {
    label: String,
    snapshot: EpochInfoSnapshot,
}

impl StaticSource {
    pub fn new(label: impl Into<String>, snapshot: EpochInfoSnapshot) -> Self {
        Self {
            label: label.into(),
            snapshot,
        }
    }
}

impl SnapshotSource for StaticSource {
    fn load(&self) -> Result<EpochInfoSnapshot, SourceError> {
        Ok(self.snapshot.clone())
    }

    fn describe(&self) -> String {
        format!("static:{}", self.label)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use epochview_test_helpers::fixtures::{sample_snapshot, sample_snapshot_json};
    use std::io::Write;

    #[test]
    fn test_file_source_reads_each_load() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(sample_snapshot_json().as_bytes()).unwrap();
        let source = FileSource::new(file.path());

        assert_eq!(source.load().unwrap(), sample_snapshot());
        assert!(source.describe().starts_with("file:"));

        // Replace the contents; the next load sees the new file.
        file.as_file().set_len(0).unwrap();
        let err = source.load().unwrap_err();
        assert!(matches!(err, SourceError::Parse { .. }));
    }

    #[test]
    fn test_file_source_missing_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("absent.json");
        let err = FileSource::new(&path).load().unwrap_err();
        match err {
            SourceError::Io { path: reported, source } => {
                assert_eq!(reported, path);
                assert_eq!(source.kind(), io::ErrorKind::NotFound);
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn test_parse_error_names_origin() {
        let err = parse_snapshot("stdin", "{\"status_response\": 3}").unwrap_err();
        assert!(err.to_string().starts_with("failed to parse snapshot from stdin"));
    }

    #[test]
    fn test_static_source() {
        let source = StaticSource::new("sample", sample_snapshot());
        assert_eq!(source.load().unwrap(), sample_snapshot());
        assert_eq!(source.describe(), "static:sample");
    }
}
