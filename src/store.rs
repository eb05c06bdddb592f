// src/store.rs
// JSON array of records on disk. Loading never fails: a missing, empty or
// malformed file is an empty corpus. Loaded records are normalized, so an
// empty or absent `jobField` comes back as `NO_CONTENT`.

use std::{fs, io::{self, BufWriter, Write}, path::{Path, PathBuf}};

use tracing::{info, warn};

use crate::error::StoreError;
use crate::record::Record;

pub fn load_records(path: &Path) -> Vec<Record> {
    let text = match fs::read_to_string(path) {
        Ok(t) => t,
        Err(e) => {
            warn!(path = %path.display(), error = %e, "no stored records");
            return Vec::new();
        }
    };
    if text.trim().is_empty() {
        warn!(path = %path.display(), "stored records file is empty");
        return Vec::new();
    }
    match serde_json::from_str::<Vec<Record>>(&text) {
        Ok(records) => {
            info!(path = %path.display(), count = records.len(), "records loaded");
            records.into_iter().map(Record::normalized).collect()
        }
        Err(e) => {
            warn!(path = %path.display(), error = %e, "stored records unreadable, starting empty");
            Vec::new()
        }
    }
}

/// Write pretty JSON (non-ASCII kept as-is), creating parent directories.
pub fn save_records(path: &Path, records: &[Record]) -> Result<PathBuf, StoreError> {
    let io_err = |source: io::Error| StoreError::Io { path: path.to_path_buf(), source };

    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            fs::create_dir_all(parent).map_err(io_err)?;
        }
    }

    let file = fs::File::create(path).map_err(io_err)?;
    let mut writer = BufWriter::new(file);
    serde_json::to_writer_pretty(&mut writer, records)?;
    writer.write_all(b"\n").map_err(io_err)?;
    writer.flush().map_err(io_err)?;

    info!(path = %path.display(), count = records.len(), "records saved");
    Ok(path.to_path_buf())
}
