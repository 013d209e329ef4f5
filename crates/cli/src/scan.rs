use crate::view::{self, OutputFormat};
use reflectscope_core::storage;
use reflectscope_core::{ClassIndex, ReflectionRegistry, ReflectionScanner, ScanConfig};
use reflectscope_java::JavaIndexer;
use std::io::Write;
use std::path::PathBuf;
use tracing::{debug, info};

pub struct ScanOptions {
    pub paths: Vec<PathBuf>,
    pub index: Option<PathBuf>,
    pub marker: Option<String>,
    pub merge: bool,
    pub format: OutputFormat,
}

/// Scans the selected index and writes the requirements to `out`.
pub fn run(options: ScanOptions, out: &mut dyn Write) -> Result<(), Box<dyn std::error::Error>> {
    let index = load_index(&options)?;
    debug!(
        "Indexed annotations: {}",
        index.annotation_names().collect::<Vec<_>>().join(", ")
    );

    let mut config = ScanConfig::from_env();
    if let Some(marker) = options.marker.clone() {
        config = config.with_marker(marker);
    }
    let scanner = ReflectionScanner::new(&config);

    let registry = ReflectionRegistry::new();
    let count = scanner.scan_into(&index, &registry)?;
    info!("Found {} reflection registration(s) for @{}", count, scanner.marker());

    let records = if options.merge {
        registry.merged()
    } else {
        registry.into_records()
    };
    writeln!(out, "{}", view::render(&records, options.format)?)?;
    Ok(())
}

fn load_index(options: &ScanOptions) -> Result<ClassIndex, Box<dyn std::error::Error>> {
    match &options.index {
        Some(path) => {
            info!("Loading index snapshot from {}", path.display());
            Ok(storage::load_index(path)?)
        }
        None if options.paths.is_empty() => {
            Err("nothing to scan: pass class paths or --index <FILE>".into())
        }
        None => Ok(JavaIndexer::new().index_paths(&options.paths)?),
    }
}
