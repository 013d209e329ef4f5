//! Reflection marker scanning.
//!
//! Turns every usage of the marker annotation in a [`SymbolIndex`] into a
//! [`ReflectiveClass`] requirement. The scan is all-or-nothing: a single
//! malformed usage fails the whole pass and nothing reaches the sink.

use crate::config::ScanConfig;
use reflectscope_api::{
    AnnotationInstance, ReflectiveClass, RequirementSink, ScanError, ScanResult, SymbolIndex,
};
use tracing::{debug, info};

pub const METHODS_ATTRIBUTE: &str = "methods";
pub const FIELDS_ATTRIBUTE: &str = "fields";

#[derive(Debug, Clone)]
pub struct ReflectionScanner {
    marker: String,
}

impl Default for ReflectionScanner {
    fn default() -> Self {
        Self::new(&ScanConfig::default())
    }
}

impl ReflectionScanner {
    pub fn new(config: &ScanConfig) -> Self {
        Self {
            marker: config.marker.clone(),
        }
    }

    pub fn marker(&self) -> &str {
        &self.marker
    }

    /// Resolves every marker usage in `index` into a requirement.
    pub fn scan(&self, index: &dyn SymbolIndex) -> ScanResult<Vec<ReflectiveClass>> {
        let usages = index.annotations(&self.marker)?;

        let records = usages
            .into_iter()
            .map(|usage| self.requirement(usage))
            .collect::<ScanResult<Vec<_>>>()?;

        info!(marker = %self.marker, count = records.len(), "reflection scan complete");
        Ok(records)
    }

    /// Scans `index` and hands every requirement to `sink`.
    ///
    /// Returns the number of records produced.
    pub fn scan_into(
        &self,
        index: &dyn SymbolIndex,
        sink: &dyn RequirementSink,
    ) -> ScanResult<usize> {
        let records = self.scan(index)?;
        let count = records.len();
        for record in records {
            sink.produce(record);
        }
        Ok(count)
    }

    fn requirement(&self, usage: &AnnotationInstance) -> ScanResult<ReflectiveClass> {
        let target = usage
            .target
            .as_type()
            .ok_or_else(|| ScanError::InvalidTargetKind {
                annotation: self.marker.clone(),
                target: usage.target.to_string(),
                kind: usage.target.kind(),
            })?;
        if target.fully_qualified_name().is_empty() {
            return Err(ScanError::UnnamedTarget {
                annotation: self.marker.clone(),
                kind: target.kind,
            });
        }

        let methods = self.flag(usage, METHODS_ATTRIBUTE)?;
        let fields = self.flag(usage, FIELDS_ATTRIBUTE)?;

        debug!(
            class = target.fully_qualified_name(),
            methods, fields, "registering for reflection"
        );
        Ok(ReflectiveClass::new(
            target.fully_qualified_name(),
            methods,
            fields,
        ))
    }

    /// Absent attributes default to `true`.
    fn flag(&self, usage: &AnnotationInstance, attribute: &str) -> ScanResult<bool> {
        match usage.value(attribute) {
            None => Ok(true),
            Some(value) => value.as_bool().ok_or_else(|| ScanError::InvalidAttribute {
                annotation: self.marker.clone(),
                target: usage.target.to_string(),
                attribute: attribute.to_string(),
                found: value.type_name(),
            }),
        }
    }
}
