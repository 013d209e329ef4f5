pub mod error;
pub mod index;
pub mod models;
pub mod sink;

// Re-export commonly used types
pub use error::{IndexError, IndexResult, ScanError, ScanResult};
pub use index::SymbolIndex;
pub use models::*;
pub use sink::RequirementSink;
