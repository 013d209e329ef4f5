use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// A single type's reflective-access requirement for ahead-of-time compilation.
///
/// Records are produced once per marker attachment and are never merged by the
/// producer; aggregation belongs to whoever owns the final configuration.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct ReflectiveClass {
    /// Binary name of the class, e.g. `com.acme.Outer$Inner`.
    pub class_name: String,
    /// Keep methods reflectively accessible.
    pub methods: bool,
    /// Keep fields reflectively accessible.
    pub fields: bool,
}

impl ReflectiveClass {
    pub fn new(class_name: impl Into<String>, methods: bool, fields: bool) -> Self {
        Self {
            class_name: class_name.into(),
            methods,
            fields,
        }
    }
}
