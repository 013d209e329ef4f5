use indexmap::{IndexMap, IndexSet};
use reflectscope_api::{AnnotationInstance, IndexError, IndexResult, SymbolIndex};
use serde::{Deserialize, Serialize};
use std::sync::OnceLock;

/// In-memory annotation index over a set of classes.
///
/// Usages are grouped by annotation name and kept in insertion order.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ClassIndex {
    classes: IndexSet<String>,
    annotations: IndexMap<String, Vec<AnnotationInstance>>,
}

impl ClassIndex {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add_class(&mut self, name: impl Into<String>) -> &mut Self {
        self.classes.insert(name.into());
        self
    }

    pub fn add_annotation(&mut self, instance: AnnotationInstance) -> &mut Self {
        self.annotations
            .entry(instance.name.clone())
            .or_default()
            .push(instance);
        self
    }

    /// Folds `other` into this index. Usages present in both are kept twice.
    pub fn merge(&mut self, other: ClassIndex) {
        self.classes.extend(other.classes);
        for (name, instances) in other.annotations {
            self.annotations.entry(name).or_default().extend(instances);
        }
    }

    pub fn contains_class(&self, name: &str) -> bool {
        self.classes.contains(name)
    }

    pub fn class_count(&self) -> usize {
        self.classes.len()
    }

    /// Total number of annotation usages across all annotation types.
    pub fn annotation_count(&self) -> usize {
        self.annotations.values().map(Vec::len).sum()
    }

    pub fn annotation_names(&self) -> impl Iterator<Item = &str> {
        self.annotations.keys().map(String::as_str)
    }
}

impl SymbolIndex for ClassIndex {
    fn annotations(&self, name: &str) -> IndexResult<Vec<&AnnotationInstance>> {
        Ok(self
            .annotations
            .get(name)
            .map(|instances| instances.iter().collect())
            .unwrap_or_default())
    }
}

/// Hand-off point for an index produced by an earlier phase.
///
/// Queries fail with [`IndexError::NotBuilt`] until an index is published.
#[derive(Debug, Default)]
pub struct IndexSlot {
    inner: OnceLock<ClassIndex>,
}

impl IndexSlot {
    pub fn new() -> Self {
        Self::default()
    }

    /// Publishes the index. A slot can only be filled once; the rejected
    /// index is handed back.
    pub fn publish(&self, index: ClassIndex) -> Result<(), ClassIndex> {
        self.inner.set(index)
    }

    pub fn is_built(&self) -> bool {
        self.inner.get().is_some()
    }
}

impl SymbolIndex for IndexSlot {
    fn annotations(&self, name: &str) -> IndexResult<Vec<&AnnotationInstance>> {
        self.inner
            .get()
            .ok_or(IndexError::NotBuilt)?
            .annotations(name)
    }
}
