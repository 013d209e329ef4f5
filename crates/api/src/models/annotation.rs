use super::declaration::DeclarationKind;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;

/// A type declaration an annotation can be attached to.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq, Hash)]
pub struct TypeDeclaration {
    pub name: String,
    pub kind: DeclarationKind,
}

impl TypeDeclaration {
    pub fn new(name: impl Into<String>, kind: DeclarationKind) -> Self {
        Self {
            name: name.into(),
            kind,
        }
    }

    pub fn class(name: impl Into<String>) -> Self {
        Self::new(name, DeclarationKind::Class)
    }

    pub fn fully_qualified_name(&self) -> &str {
        &self.name
    }
}

/// The declaration an annotation usage is attached to.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq, Hash)]
#[serde(tag = "on", rename_all = "lowercase")]
pub enum AnnotationTarget {
    Type(TypeDeclaration),
    Package {
        name: String,
    },
    Field {
        owner: String,
        name: String,
    },
    Method {
        owner: String,
        name: String,
        descriptor: String,
    },
    Parameter {
        owner: String,
        method: String,
        position: u16,
    },
}

impl AnnotationTarget {
    pub fn kind(&self) -> DeclarationKind {
        match self {
            AnnotationTarget::Type(decl) => decl.kind,
            AnnotationTarget::Package { .. } => DeclarationKind::Package,
            AnnotationTarget::Field { .. } => DeclarationKind::Field,
            AnnotationTarget::Method { name, .. } if name == "<init>" => {
                DeclarationKind::Constructor
            }
            AnnotationTarget::Method { .. } => DeclarationKind::Method,
            AnnotationTarget::Parameter { .. } => DeclarationKind::Parameter,
        }
    }

    /// Returns the type declaration, or `None` when attached to anything else.
    pub fn as_type(&self) -> Option<&TypeDeclaration> {
        match self {
            AnnotationTarget::Type(decl) if decl.kind.is_type() => Some(decl),
            _ => None,
        }
    }
}

impl fmt::Display for AnnotationTarget {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AnnotationTarget::Type(decl) => write!(f, "{}", decl.name),
            AnnotationTarget::Package { name } => write!(f, "{name}"),
            AnnotationTarget::Field { owner, name } => write!(f, "{owner}#{name}"),
            AnnotationTarget::Method {
                owner,
                name,
                descriptor,
            } => write!(f, "{owner}#{name}{descriptor}"),
            AnnotationTarget::Parameter {
                owner,
                method,
                position,
            } => write!(f, "{owner}#{method}[{position}]"),
        }
    }
}

/// A decoded annotation element value.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(tag = "type", content = "value", rename_all = "lowercase")]
pub enum AnnotationValue {
    Boolean(bool),
    Integer(i64),
    Float(f64),
    Char(char),
    String(String),
    Enum { type_name: String, constant: String },
    Class(String),
    /// Nested annotation, recorded by its type name only.
    Annotation(String),
    Array(Vec<AnnotationValue>),
}

impl AnnotationValue {
    pub fn as_bool(&self) -> Option<bool> {
        match self {
            AnnotationValue::Boolean(b) => Some(*b),
            _ => None,
        }
    }

    pub fn type_name(&self) -> &'static str {
        match self {
            AnnotationValue::Boolean(_) => "boolean",
            AnnotationValue::Integer(_) => "integer",
            AnnotationValue::Float(_) => "float",
            AnnotationValue::Char(_) => "char",
            AnnotationValue::String(_) => "string",
            AnnotationValue::Enum { .. } => "enum",
            AnnotationValue::Class(_) => "class",
            AnnotationValue::Annotation(_) => "annotation",
            AnnotationValue::Array(_) => "array",
        }
    }
}

/// One usage of an annotation on one declaration.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct AnnotationInstance {
    /// Fully qualified name of the annotation type.
    pub name: String,
    pub target: AnnotationTarget,
    /// Explicitly specified elements only; defaults are never materialized here.
    #[serde(default, skip_serializing_if = "BTreeMap::is_empty")]
    pub values: BTreeMap<String, AnnotationValue>,
}

impl AnnotationInstance {
    pub fn new(name: impl Into<String>, target: AnnotationTarget) -> Self {
        Self {
            name: name.into(),
            target,
            values: BTreeMap::new(),
        }
    }

    pub fn with_value(mut self, name: impl Into<String>, value: AnnotationValue) -> Self {
        self.values.insert(name.into(), value);
        self
    }

    pub fn value(&self, name: &str) -> Option<&AnnotationValue> {
        self.values.get(name)
    }
}
