use reflectscope_api::{ReflectiveClass, RequirementSink};
use std::collections::BTreeMap;
use std::sync::{Mutex, MutexGuard};

/// Collects reflection requirements from any number of producers.
#[derive(Debug, Default)]
pub struct ReflectionRegistry {
    records: Mutex<Vec<ReflectiveClass>>,
}

impl ReflectionRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    fn lock(&self) -> MutexGuard<'_, Vec<ReflectiveClass>> {
        self.records
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
    }

    /// Every record produced so far, in arrival order.
    pub fn records(&self) -> Vec<ReflectiveClass> {
        self.lock().clone()
    }

    pub fn len(&self) -> usize {
        self.lock().len()
    }

    pub fn is_empty(&self) -> bool {
        self.lock().is_empty()
    }

    pub fn into_records(self) -> Vec<ReflectiveClass> {
        self.records
            .into_inner()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
    }

    /// One record per class, sorted by name. A class keeps its methods (or
    /// fields) if any record for it asked for them.
    pub fn merged(&self) -> Vec<ReflectiveClass> {
        let mut by_class: BTreeMap<String, (bool, bool)> = BTreeMap::new();
        for record in self.lock().iter() {
            let entry = by_class
                .entry(record.class_name.clone())
                .or_insert((false, false));
            entry.0 |= record.methods;
            entry.1 |= record.fields;
        }
        by_class
            .into_iter()
            .map(|(class_name, (methods, fields))| ReflectiveClass {
                class_name,
                methods,
                fields,
            })
            .collect()
    }
}

impl RequirementSink for ReflectionRegistry {
    fn produce(&self, record: ReflectiveClass) {
        self.lock().push(record);
    }
}
