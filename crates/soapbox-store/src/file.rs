// ABOUTME: File adapter binding the feedback codec to a single backing path.
// ABOUTME: Loads tolerate a missing file; saves are atomic via temp-file write and rename.

use std::fs::{self, File};
use std::io::Write;
use std::path::{Path, PathBuf};

use soapbox_core::Feedback;
use soapbox_core::codec::{self, CodecError, DecodeOutcome};
use thiserror::Error;

/// Storage failures, tagged by the side of the operation that failed and
/// carrying the backing resource's path.
#[derive(Debug, Error)]
pub enum StoreError {
    #[error("READ {} failed: {source}", .path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("READ {} failed: {source}", .path.display())]
    Decode {
        path: PathBuf,
        #[source]
        source: CodecError,
    },

    #[error("WRITE {} failed: {source}", .path.display())]
    Write {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

/// Binds the feedback codec to one backing file. Every save rewrites the
/// whole collection; there is no incremental append.
#[derive(Debug, Clone)]
pub struct FeedbackFile {
    path: PathBuf,
}

impl FeedbackFile {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Returns the path to the backing file.
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Read and decode the backing file. A missing file is not an error: an
    /// empty outcome comes back instead. An unreadable or document-level
    /// malformed file is a READ-side failure.
    pub fn load(&self) -> Result<DecodeOutcome, StoreError> {
        if !self.path.exists() {
            return Ok(DecodeOutcome::default());
        }

        let text = fs::read_to_string(&self.path).map_err(|source| StoreError::Read {
            path: self.path.clone(),
            source,
        })?;

        codec::decode(&text).map_err(|source| StoreError::Decode {
            path: self.path.clone(),
            source,
        })
    }

    /// Overwrite the backing file with the full collection. Writes to a temp
    /// sibling, fsyncs, then atomically renames over the target so readers
    /// never observe a truncated file. Creates parent directories if needed.
    pub fn save(&self, records: &[Feedback]) -> Result<(), StoreError> {
        let json = codec::encode(records).map_err(|source| StoreError::Write {
            path: self.path.clone(),
            source: std::io::Error::other(source),
        })?;

        self.write_atomic(json.as_bytes())
            .map_err(|source| StoreError::Write {
                path: self.path.clone(),
                source,
            })
    }

    fn write_atomic(&self, bytes: &[u8]) -> Result<(), std::io::Error> {
        if let Some(parent) = self.path.parent()
            && !parent.as_os_str().is_empty()
        {
            fs::create_dir_all(parent)?;
        }

        let tmp_path = self.path.with_extension("json.tmp");
        let mut tmp_file = File::create(&tmp_path)?;
        tmp_file.write_all(bytes)?;
        tmp_file.sync_all()?;
        drop(tmp_file);

        fs::rename(&tmp_path, &self.path)?;

        // Fsync the parent directory so the rename metadata is durable.
        // Best-effort: if this fails, the rename already succeeded and the
        // data is consistent.
        if let Some(parent) = self.path.parent()
            && let Ok(dir) = File::open(parent)
        {
            let _ = dir.sync_all();
        }

        Ok(())
    }
}
