use crate::error::IndexResult;
use crate::models::AnnotationInstance;

/// A pre-built, read-only view over the annotations visible to a build.
pub trait SymbolIndex: Send + Sync {
    /// All usages of the annotation type `name`, in no particular order.
    fn annotations(&self, name: &str) -> IndexResult<Vec<&AnnotationInstance>>;
}
