use crate::models::ReflectiveClass;

/// Receives reflection requirements as they are produced.
///
/// Implementations shared between producers own their synchronization.
pub trait RequirementSink: Send + Sync {
    fn produce(&self, record: ReflectiveClass);
}

impl<F> RequirementSink for F
where
    F: Fn(ReflectiveClass) + Send + Sync,
{
    fn produce(&self, record: ReflectiveClass) {
        self(record)
    }
}
