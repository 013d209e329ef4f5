use crate::models::DeclarationKind;

/// Failures raised by a symbol index when it cannot answer a query.
#[derive(Debug, thiserror::Error)]
pub enum IndexError {
    #[error("Symbol index has not been built")]
    NotBuilt,
    #[error("I/O error while reading {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },
    #[error("Malformed class data in {origin}: {reason}")]
    Malformed { origin: String, reason: String },
    #[error("Corrupted index snapshot: {0}")]
    Corrupted(String),
}

pub type IndexResult<T> = std::result::Result<T, IndexError>;

/// Failures of a reflection marker scan. Every variant is fatal for the scan.
#[derive(Debug, thiserror::Error)]
pub enum ScanError {
    #[error("@{annotation} may only be placed on type declarations, found on {kind} `{target}`")]
    InvalidTargetKind {
        annotation: String,
        target: String,
        kind: DeclarationKind,
    },
    #[error("@{annotation} is attached to a {kind} declaration without a name")]
    UnnamedTarget {
        annotation: String,
        kind: DeclarationKind,
    },
    #[error("Attribute `{attribute}` of @{annotation} on `{target}` must be a boolean, found {found}")]
    InvalidAttribute {
        annotation: String,
        target: String,
        attribute: String,
        found: &'static str,
    },
    #[error(transparent)]
    Index(#[from] IndexError),
}

pub type ScanResult<T> = std::result::Result<T, ScanError>;
