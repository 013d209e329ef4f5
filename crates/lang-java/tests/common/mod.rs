use std::io::Write;
use std::path::Path;

pub const ACC_PUBLIC: u16 = 0x0001;
pub const ACC_FINAL: u16 = 0x0010;
pub const ACC_SUPER: u16 = 0x0020;
pub const ACC_INTERFACE: u16 = 0x0200;
pub const ACC_ABSTRACT: u16 = 0x0400;
pub const ACC_ANNOTATION: u16 = 0x2000;

pub const MARKER: &str = "Lio/quarkus/runtime/annotations/RegisterForReflection;";

#[allow(dead_code)]
pub enum Element<'a> {
    Bool(bool),
    Str(&'a str),
}

/// Minimal class file writer: enough structure for annotations on the class,
/// its fields and its methods.
pub struct ClassBuilder {
    pool: Vec<Vec<u8>>,
    access: u16,
    this_class: u16,
    super_class: u16,
    annotations_attr: u16,
    parameters_attr: u16,
    class_annotations: Vec<Vec<u8>>,
    fields: Vec<Vec<u8>>,
    methods: Vec<Vec<u8>>,
}

#[allow(dead_code)]
impl ClassBuilder {
    pub fn new(internal_name: &str) -> Self {
        let mut builder = Self {
            pool: Vec::new(),
            access: ACC_PUBLIC | ACC_SUPER,
            this_class: 0,
            super_class: 0,
            annotations_attr: 0,
            parameters_attr: 0,
            class_annotations: Vec::new(),
            fields: Vec::new(),
            methods: Vec::new(),
        };
        builder.this_class = builder.class(internal_name);
        builder.super_class = builder.class("java/lang/Object");
        builder.annotations_attr = builder.utf8("RuntimeVisibleAnnotations");
        builder.parameters_attr = builder.utf8("RuntimeVisibleParameterAnnotations");
        builder
    }

    pub fn access(mut self, flags: u16) -> Self {
        self.access = flags;
        self
    }

    pub fn extends(mut self, internal_name: &str) -> Self {
        self.super_class = self.class(internal_name);
        self
    }

    fn push(&mut self, entry: Vec<u8>) -> u16 {
        self.pool.push(entry);
        self.pool.len() as u16
    }

    pub fn utf8(&mut self, value: &str) -> u16 {
        let mut entry = vec![1u8];
        entry.extend_from_slice(&(value.len() as u16).to_be_bytes());
        entry.extend_from_slice(value.as_bytes());
        self.push(entry)
    }

    pub fn integer(&mut self, value: i32) -> u16 {
        let mut entry = vec![3u8];
        entry.extend_from_slice(&value.to_be_bytes());
        self.push(entry)
    }

    pub fn class(&mut self, internal_name: &str) -> u16 {
        let name = self.utf8(internal_name);
        let mut entry = vec![7u8];
        entry.extend_from_slice(&name.to_be_bytes());
        self.push(entry)
    }

    /// Encodes one `annotation` structure.
    pub fn annotation(&mut self, descriptor: &str, elements: &[(&str, Element)]) -> Vec<u8> {
        let mut out = Vec::new();
        out.extend_from_slice(&self.utf8(descriptor).to_be_bytes());
        out.extend_from_slice(&(elements.len() as u16).to_be_bytes());
        for (name, value) in elements {
            out.extend_from_slice(&self.utf8(name).to_be_bytes());
            match value {
                Element::Bool(b) => {
                    out.push(b'Z');
                    out.extend_from_slice(&self.integer(i32::from(*b)).to_be_bytes());
                }
                Element::Str(s) => {
                    out.push(b's');
                    out.extend_from_slice(&self.utf8(s).to_be_bytes());
                }
            }
        }
        out
    }

    pub fn annotate_class(mut self, annotation: Vec<u8>) -> Self {
        self.class_annotations.push(annotation);
        self
    }

    pub fn field(mut self, name: &str, descriptor: &str, annotations: Vec<Vec<u8>>) -> Self {
        let member = self.member(name, descriptor, annotations);
        self.fields.push(member);
        self
    }

    pub fn method(mut self, name: &str, descriptor: &str, annotations: Vec<Vec<u8>>) -> Self {
        let member = self.member(name, descriptor, annotations);
        self.methods.push(member);
        self
    }

    /// A method whose parameters carry annotations; `parameters[i]` holds the
    /// annotations of parameter `i`.
    pub fn method_with_parameters(
        mut self,
        name: &str,
        descriptor: &str,
        parameters: Vec<Vec<Vec<u8>>>,
    ) -> Self {
        let mut out = Vec::new();
        out.extend_from_slice(&ACC_PUBLIC.to_be_bytes());
        out.extend_from_slice(&self.utf8(name).to_be_bytes());
        out.extend_from_slice(&self.utf8(descriptor).to_be_bytes());

        let mut body = vec![parameters.len() as u8];
        for annotations in &parameters {
            body.extend_from_slice(&(annotations.len() as u16).to_be_bytes());
            for annotation in annotations {
                body.extend_from_slice(annotation);
            }
        }
        out.extend_from_slice(&1u16.to_be_bytes());
        out.extend_from_slice(&self.parameters_attr.to_be_bytes());
        out.extend_from_slice(&(body.len() as u32).to_be_bytes());
        out.extend_from_slice(&body);

        self.methods.push(out);
        self
    }

    fn member(&mut self, name: &str, descriptor: &str, annotations: Vec<Vec<u8>>) -> Vec<u8> {
        let mut out = Vec::new();
        out.extend_from_slice(&ACC_PUBLIC.to_be_bytes());
        out.extend_from_slice(&self.utf8(name).to_be_bytes());
        out.extend_from_slice(&self.utf8(descriptor).to_be_bytes());
        self.write_attributes(&mut out, &annotations);
        out
    }

    fn write_attributes(&self, out: &mut Vec<u8>, annotations: &[Vec<u8>]) {
        if annotations.is_empty() {
            out.extend_from_slice(&0u16.to_be_bytes());
            return;
        }
        let mut body = Vec::new();
        body.extend_from_slice(&(annotations.len() as u16).to_be_bytes());
        for annotation in annotations {
            body.extend_from_slice(annotation);
        }
        out.extend_from_slice(&1u16.to_be_bytes());
        out.extend_from_slice(&self.annotations_attr.to_be_bytes());
        out.extend_from_slice(&(body.len() as u32).to_be_bytes());
        out.extend_from_slice(&body);
    }

    pub fn build(self) -> Vec<u8> {
        let mut out = Vec::new();
        out.extend_from_slice(&[0xCA, 0xFE, 0xBA, 0xBE]);
        out.extend_from_slice(&0u16.to_be_bytes());
        out.extend_from_slice(&52u16.to_be_bytes());

        out.extend_from_slice(&(self.pool.len() as u16 + 1).to_be_bytes());
        for entry in &self.pool {
            out.extend_from_slice(entry);
        }

        out.extend_from_slice(&self.access.to_be_bytes());
        out.extend_from_slice(&self.this_class.to_be_bytes());
        out.extend_from_slice(&self.super_class.to_be_bytes());
        out.extend_from_slice(&0u16.to_be_bytes());

        out.extend_from_slice(&(self.fields.len() as u16).to_be_bytes());
        for field in &self.fields {
            out.extend_from_slice(field);
        }
        out.extend_from_slice(&(self.methods.len() as u16).to_be_bytes());
        for method in &self.methods {
            out.extend_from_slice(method);
        }

        self.write_attributes(&mut out, &self.class_annotations);
        out
    }
}

/// A class carrying the reflection marker with the given explicit elements.
#[allow(dead_code)]
pub fn marked_class(internal_name: &str, elements: &[(&str, Element)]) -> Vec<u8> {
    let mut builder = ClassBuilder::new(internal_name);
    let marker = builder.annotation(MARKER, elements);
    builder.annotate_class(marker).build()
}

#[allow(dead_code)]
pub fn write_jar(path: &Path, entries: &[(&str, Vec<u8>)]) {
    let file = std::fs::File::create(path).unwrap();
    let mut zip = zip::ZipWriter::new(file);
    let options = zip::write::SimpleFileOptions::default();

    for (name, bytes) in entries {
        zip.start_file(*name, options).unwrap();
        zip.write_all(bytes).unwrap();
    }

    zip.finish().unwrap();
}
