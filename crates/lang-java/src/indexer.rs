use crate::classfile::{self, DecodedClass};
use crate::naming;
use rayon::prelude::*;
use reflectscope_api::{IndexError, IndexResult};
use reflectscope_core::ClassIndex;
use std::fs::File;
use std::io::Read;
use std::path::Path;
use tracing::{debug, info};
use walkdir::WalkDir;
use zip::ZipArchive;

/// Raw class bytes waiting to be decoded.
struct ClassUnit {
    origin: String,
    bytes: Vec<u8>,
}

/// Builds a [`ClassIndex`] from compiled classes: `.class` files, `.jar`
/// archives, and directories containing either.
#[derive(Debug, Default, Clone, Copy)]
pub struct JavaIndexer;

impl JavaIndexer {
    pub fn new() -> Self {
        Self
    }

    pub fn can_index(&self, path: &Path) -> bool {
        let ext = path
            .extension()
            .and_then(|e| e.to_str())
            .unwrap_or("")
            .to_lowercase();
        ext == "class" || ext == "jar"
    }

    pub fn index_paths<P: AsRef<Path>>(&self, paths: &[P]) -> IndexResult<ClassIndex> {
        let mut units = Vec::new();
        for path in paths {
            self.collect(path.as_ref(), &mut units)?;
        }

        let decoded = units
            .par_iter()
            .map(|unit| classfile::decode(&unit.bytes, &unit.origin))
            .collect::<IndexResult<Vec<DecodedClass>>>()?;

        let mut index = ClassIndex::new();
        for class in decoded {
            index.add_class(class.name);
            for annotation in class.annotations {
                index.add_annotation(annotation);
            }
        }

        info!(
            classes = index.class_count(),
            annotations = index.annotation_count(),
            "bytecode index built"
        );
        Ok(index)
    }

    fn collect(&self, path: &Path, units: &mut Vec<ClassUnit>) -> IndexResult<()> {
        if !path.exists() {
            return Err(IndexError::Io {
                path: path.display().to_string(),
                source: std::io::Error::new(
                    std::io::ErrorKind::NotFound,
                    "no such file or directory",
                ),
            });
        }
        if !path.is_dir() {
            return self.collect_file(path, units);
        }

        for entry in WalkDir::new(path).sort_by_file_name() {
            let entry = entry.map_err(|e| IndexError::Io {
                path: path.display().to_string(),
                source: e.into(),
            })?;
            if entry.file_type().is_file() && self.can_index(entry.path()) {
                self.collect_file(entry.path(), units)?;
            }
        }
        Ok(())
    }

    fn collect_file(&self, path: &Path, units: &mut Vec<ClassUnit>) -> IndexResult<()> {
        let origin = path.display().to_string();
        let ext = path
            .extension()
            .and_then(|e| e.to_str())
            .unwrap_or("")
            .to_lowercase();

        match ext.as_str() {
            "class" if naming::is_module_info(&origin) => Ok(()),
            "class" => {
                let bytes = std::fs::read(path).map_err(|source| IndexError::Io {
                    path: origin.clone(),
                    source,
                })?;
                units.push(ClassUnit { origin, bytes });
                Ok(())
            }
            "jar" => self.collect_jar(path, units),
            _ => {
                debug!("Skipping non-class input {}", origin);
                Ok(())
            }
        }
    }

    fn collect_jar(&self, path: &Path, units: &mut Vec<ClassUnit>) -> IndexResult<()> {
        let jar = path.display().to_string();
        let file = File::open(path).map_err(|source| IndexError::Io {
            path: jar.clone(),
            source,
        })?;
        let mut archive = ZipArchive::new(file).map_err(|e| IndexError::Malformed {
            origin: jar.clone(),
            reason: e.to_string(),
        })?;

        let before = units.len();
        for i in 0..archive.len() {
            let mut entry = archive.by_index(i).map_err(|e| IndexError::Malformed {
                origin: jar.clone(),
                reason: e.to_string(),
            })?;
            let name = entry.name().to_string();

            // META-INF/versions/* holds multi-release copies of the base classes.
            if !name.ends_with(".class")
                || name.starts_with("META-INF/")
                || naming::is_module_info(&name)
            {
                continue;
            }

            let origin = format!("{}!/{}", jar, name);
            let mut bytes = Vec::new();
            entry
                .read_to_end(&mut bytes)
                .map_err(|source| IndexError::Io {
                    path: origin.clone(),
                    source,
                })?;
            units.push(ClassUnit { origin, bytes });
        }

        debug!("Collected {} classes from {}", units.len() - before, jar);
        Ok(())
    }
}
