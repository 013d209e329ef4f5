//! Index snapshots on disk.
//!
//! `.json` paths are written as pretty JSON for inspection; anything else is
//! zstd-compressed MessagePack.

use crate::error::{ReflectscopeError, Result};
use crate::index::ClassIndex;
use reflectscope_api::IndexError;
use std::io::BufWriter;
use std::path::Path;
use tracing::info;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SnapshotFormat {
    Json,
    Packed,
}

impl SnapshotFormat {
    pub fn for_path(path: &Path) -> Self {
        match path.extension().and_then(|e| e.to_str()) {
            Some(ext) if ext.eq_ignore_ascii_case("json") => SnapshotFormat::Json,
            _ => SnapshotFormat::Packed,
        }
    }
}

pub fn serialize(index: &ClassIndex) -> Result<Vec<u8>> {
    let bytes = rmp_serde::to_vec_named(index)
        .map_err(|e| ReflectscopeError::Internal(format!("MSGPACK error: {}", e)))?;

    let compressed = zstd::encode_all(&bytes[..], 0)
        .map_err(|e| ReflectscopeError::Internal(format!("Zstd compression failed: {}", e)))?;

    Ok(compressed)
}

pub fn deserialize(bytes: &[u8]) -> Result<ClassIndex> {
    let decompressed = zstd::decode_all(bytes)
        .map_err(|e| IndexError::Corrupted(format!("Zstd decompression failed: {}", e)))?;

    let index = rmp_serde::from_slice(&decompressed)
        .map_err(|e| IndexError::Corrupted(format!("MSGPACK error: {}", e)))?;

    Ok(index)
}

pub fn save_index(index: &ClassIndex, path: &Path) -> Result<()> {
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        std::fs::create_dir_all(parent)?;
    }

    match SnapshotFormat::for_path(path) {
        SnapshotFormat::Json => {
            let writer = BufWriter::new(std::fs::File::create(path)?);
            serde_json::to_writer_pretty(writer, index)?;
        }
        SnapshotFormat::Packed => std::fs::write(path, serialize(index)?)?,
    }

    info!(
        path = %path.display(),
        classes = index.class_count(),
        annotations = index.annotation_count(),
        "index snapshot saved"
    );
    Ok(())
}

pub fn load_index(path: &Path) -> Result<ClassIndex> {
    let bytes = std::fs::read(path).map_err(|source| IndexError::Io {
        path: path.display().to_string(),
        source,
    })?;

    let index = match SnapshotFormat::for_path(path) {
        SnapshotFormat::Json => serde_json::from_slice(&bytes)
            .map_err(|e| IndexError::Corrupted(format!("{}: {}", path.display(), e)))?,
        SnapshotFormat::Packed => deserialize(&bytes)?,
    };
    Ok(index)
}
