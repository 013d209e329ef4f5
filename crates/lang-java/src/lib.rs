//! Bytecode-backed symbol index for JVM builds.
//!
//! Reads compiled classes (loose `.class` files, class directories and `.jar`
//! archives) and records every annotation usage on classes, fields and
//! methods into a [`reflectscope_core::ClassIndex`].

pub mod classfile;
pub mod indexer;
pub mod naming;

pub use classfile::{DecodedClass, decode};
pub use indexer::JavaIndexer;
