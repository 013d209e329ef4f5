use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use std::fmt;

/// The kind of declaration an annotation is attached to.
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq, Hash, JsonSchema)]
#[serde(rename_all = "lowercase")]
pub enum DeclarationKind {
    Package,
    Class,
    Interface,
    Enum,
    Annotation,
    Record,
    Method,
    Constructor,
    Field,
    Parameter,
}

impl DeclarationKind {
    /// Whether this kind declares a type (and can therefore be registered for reflection).
    pub fn is_type(&self) -> bool {
        matches!(
            self,
            DeclarationKind::Class
                | DeclarationKind::Interface
                | DeclarationKind::Enum
                | DeclarationKind::Annotation
                | DeclarationKind::Record
        )
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            DeclarationKind::Package => "package",
            DeclarationKind::Class => "class",
            DeclarationKind::Interface => "interface",
            DeclarationKind::Enum => "enum",
            DeclarationKind::Annotation => "annotation",
            DeclarationKind::Record => "record",
            DeclarationKind::Method => "method",
            DeclarationKind::Constructor => "constructor",
            DeclarationKind::Field => "field",
            DeclarationKind::Parameter => "parameter",
        }
    }
}

impl fmt::Display for DeclarationKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn only_type_kinds_are_types() {
        assert!(DeclarationKind::Class.is_type());
        assert!(DeclarationKind::Record.is_type());
        assert!(!DeclarationKind::Field.is_type());
        assert!(!DeclarationKind::Package.is_type());
        assert!(!DeclarationKind::Constructor.is_type());
    }

    #[test]
    fn displays_lowercase_names() {
        assert_eq!(DeclarationKind::Interface.to_string(), "interface");
        assert_eq!(DeclarationKind::Parameter.to_string(), "parameter");
    }
}
