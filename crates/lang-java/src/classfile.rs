//! Annotation extraction from compiled class files.

use crate::naming;
use reflectscope_api::{
    AnnotationInstance, AnnotationTarget, AnnotationValue, DeclarationKind, IndexError,
    IndexResult, TypeDeclaration,
};
use ristretto_classfile::attributes::{
    Annotation, AnnotationElement, Attribute, ParameterAnnotation,
};
use ristretto_classfile::{ClassAccessFlags, ClassFile, Constant, ConstantPool};
use std::io::Cursor;

const RECORD_SUPER_CLASS: &str = "java/lang/Record";

/// Annotations found on one class and its members.
#[derive(Debug, Clone)]
pub struct DecodedClass {
    /// Binary name, e.g. `com.acme.Outer$Inner`.
    pub name: String,
    pub kind: DeclarationKind,
    pub annotations: Vec<AnnotationInstance>,
}

/// Decodes `bytes` as a class file. `origin` names where the bytes came from
/// and is only used for error reporting.
pub fn decode(bytes: &[u8], origin: &str) -> IndexResult<DecodedClass> {
    let class = ClassFile::from_bytes(&mut Cursor::new(bytes.to_vec()))
        .map_err(|e| malformed(origin, format!("Failed to parse class: {e:?}")))?;
    let pool = &class.constant_pool;

    let internal = class
        .class_name()
        .map_err(|e| malformed(origin, format!("Failed to read class name: {e:?}")))?;
    let name = naming::binary_name(internal);
    // java/lang/Object has no super class (index 0).
    let super_name = match class.super_class {
        0 => None,
        index => Some(
            pool.try_get_class(index)
                .map_err(|e| malformed(origin, format!("Failed to read super class: {e:?}")))?,
        ),
    };
    let kind = class_kind(class.access_flags, super_name);

    let target = if naming::is_package_info(&name) {
        AnnotationTarget::Package {
            name: naming::package_name(&name).to_string(),
        }
    } else {
        AnnotationTarget::Type(TypeDeclaration::new(name.clone(), kind))
    };

    let mut annotations = Vec::new();
    for annotation in annotations_of(&class.attributes) {
        annotations.push(instance(pool, annotation, target.clone(), origin)?);
    }

    for field in &class.fields {
        let field_name = utf8(pool, field.name_index, origin)?;
        let target = AnnotationTarget::Field {
            owner: name.clone(),
            name: field_name,
        };
        for annotation in annotations_of(&field.attributes) {
            annotations.push(instance(pool, annotation, target.clone(), origin)?);
        }
    }

    for method in &class.methods {
        let method_name = utf8(pool, method.name_index, origin)?;
        let descriptor = utf8(pool, method.descriptor_index, origin)?;
        for (position, parameter) in parameter_annotations_of(&method.attributes) {
            let target = AnnotationTarget::Parameter {
                owner: name.clone(),
                method: format!("{method_name}{descriptor}"),
                position,
            };
            for annotation in &parameter.annotations {
                annotations.push(instance(pool, annotation, target.clone(), origin)?);
            }
        }

        let target = AnnotationTarget::Method {
            owner: name.clone(),
            name: method_name,
            descriptor,
        };
        for annotation in annotations_of(&method.attributes) {
            annotations.push(instance(pool, annotation, target.clone(), origin)?);
        }
    }

    Ok(DecodedClass {
        name,
        kind,
        annotations,
    })
}

fn class_kind(flags: ClassAccessFlags, super_name: Option<&str>) -> DeclarationKind {
    // Annotation types carry the INTERFACE flag too.
    if flags.contains(ClassAccessFlags::ANNOTATION) {
        DeclarationKind::Annotation
    } else if flags.contains(ClassAccessFlags::INTERFACE) {
        DeclarationKind::Interface
    } else if flags.contains(ClassAccessFlags::ENUM) {
        DeclarationKind::Enum
    } else if super_name == Some(RECORD_SUPER_CLASS) {
        DeclarationKind::Record
    } else {
        DeclarationKind::Class
    }
}

/// Both retention flavours count; the index does not care about runtime visibility.
fn annotations_of(attributes: &[Attribute]) -> impl Iterator<Item = &Annotation> {
    attributes
        .iter()
        .flat_map(|attribute| match attribute {
            Attribute::RuntimeVisibleAnnotations { annotations, .. }
            | Attribute::RuntimeInvisibleAnnotations { annotations, .. } => annotations.as_slice(),
            _ => &[][..],
        })
}

/// Per-parameter annotations of a method, keyed by parameter position.
fn parameter_annotations_of(
    attributes: &[Attribute],
) -> impl Iterator<Item = (u16, &ParameterAnnotation)> {
    attributes.iter().flat_map(|attribute| {
        let parameters = match attribute {
            Attribute::RuntimeVisibleParameterAnnotations {
                parameter_annotations,
                ..
            }
            | Attribute::RuntimeInvisibleParameterAnnotations {
                parameter_annotations,
                ..
            } => parameter_annotations.as_slice(),
            _ => &[][..],
        };
        (0u16..).zip(parameters)
    })
}

fn instance(
    pool: &ConstantPool,
    annotation: &Annotation,
    target: AnnotationTarget,
    origin: &str,
) -> IndexResult<AnnotationInstance> {
    let descriptor = utf8(pool, annotation.type_index, origin)?;
    let mut instance = AnnotationInstance::new(naming::descriptor_type_name(&descriptor), target);
    for pair in &annotation.elements {
        let name = utf8(pool, pair.name_index, origin)?;
        let value = element_value(pool, &pair.value, origin)?;
        instance.values.insert(name, value);
    }
    Ok(instance)
}

fn element_value(
    pool: &ConstantPool,
    element: &AnnotationElement,
    origin: &str,
) -> IndexResult<AnnotationValue> {
    let value = match element {
        AnnotationElement::Boolean { const_value_index } => {
            AnnotationValue::Boolean(integer(pool, *const_value_index, origin)? != 0)
        }
        AnnotationElement::Byte { const_value_index }
        | AnnotationElement::Short { const_value_index }
        | AnnotationElement::Int { const_value_index } => {
            AnnotationValue::Integer(i64::from(integer(pool, *const_value_index, origin)?))
        }
        AnnotationElement::Char { const_value_index } => {
            let code = integer(pool, *const_value_index, origin)?;
            let c = u32::try_from(code)
                .ok()
                .and_then(char::from_u32)
                .ok_or_else(|| malformed(origin, format!("Invalid char constant {code}")))?;
            AnnotationValue::Char(c)
        }
        AnnotationElement::Long { const_value_index } => match pool.get(*const_value_index) {
            Some(Constant::Long(v)) => AnnotationValue::Integer(*v),
            _ => return Err(unexpected_constant(*const_value_index, "long", origin)),
        },
        AnnotationElement::Float { const_value_index } => match pool.get(*const_value_index) {
            Some(Constant::Float(v)) => AnnotationValue::Float(f64::from(*v)),
            _ => return Err(unexpected_constant(*const_value_index, "float", origin)),
        },
        AnnotationElement::Double { const_value_index } => match pool.get(*const_value_index) {
            Some(Constant::Double(v)) => AnnotationValue::Float(*v),
            _ => return Err(unexpected_constant(*const_value_index, "double", origin)),
        },
        AnnotationElement::String { const_value_index } => {
            AnnotationValue::String(utf8(pool, *const_value_index, origin)?)
        }
        AnnotationElement::Enum {
            type_name_index,
            const_name_index,
        } => AnnotationValue::Enum {
            type_name: naming::descriptor_type_name(&utf8(pool, *type_name_index, origin)?),
            constant: utf8(pool, *const_name_index, origin)?,
        },
        AnnotationElement::Class { class_info_index } => AnnotationValue::Class(
            naming::descriptor_type_name(&utf8(pool, *class_info_index, origin)?),
        ),
        AnnotationElement::Annotation { annotation } => AnnotationValue::Annotation(
            naming::descriptor_type_name(&utf8(pool, annotation.type_index, origin)?),
        ),
        AnnotationElement::Array { values } => AnnotationValue::Array(
            values
                .iter()
                .map(|v| element_value(pool, v, origin))
                .collect::<IndexResult<Vec<_>>>()?,
        ),
    };
    Ok(value)
}

fn utf8(pool: &ConstantPool, index: u16, origin: &str) -> IndexResult<String> {
    pool.try_get_utf8(index)
        .map(|s| s.to_string())
        .map_err(|e| malformed(origin, format!("Bad utf8 constant #{index}: {e:?}")))
}

fn integer(pool: &ConstantPool, index: u16, origin: &str) -> IndexResult<i32> {
    match pool.get(index) {
        Some(Constant::Integer(v)) => Ok(*v),
        _ => Err(unexpected_constant(index, "integer", origin)),
    }
}

fn unexpected_constant(index: u16, expected: &str, origin: &str) -> IndexError {
    malformed(origin, format!("Constant #{index} is not a {expected}"))
}

fn malformed(origin: &str, reason: String) -> IndexError {
    IndexError::Malformed {
        origin: origin.to_string(),
        reason,
    }
}
