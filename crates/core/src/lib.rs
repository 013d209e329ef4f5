pub mod collector;
pub mod config;
pub mod error;
pub mod index;
pub mod logging;
pub mod scanner;
pub mod storage;

pub use collector::ReflectionRegistry;
pub use config::ScanConfig;
pub use error::{ReflectscopeError, Result};
pub use index::{ClassIndex, IndexSlot};
pub use scanner::ReflectionScanner;
