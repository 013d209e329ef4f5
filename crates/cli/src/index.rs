use reflectscope_core::storage;
use reflectscope_java::JavaIndexer;
use std::path::{Path, PathBuf};
use tracing::info;

pub fn run(paths: &[PathBuf], out: &Path) -> Result<(), Box<dyn std::error::Error>> {
    info!("Indexing {} input(s)...", paths.len());

    let index = JavaIndexer::new().index_paths(paths)?;
    storage::save_index(&index, out)?;

    info!("Indexing complete!");
    info!("Classes: {}", index.class_count());
    info!("Annotation usages: {}", index.annotation_count());
    Ok(())
}
