/// Separator used between packages and between package/class.
pub const TYPE_SEPARATOR: char = '.';

/// Separator used in the JVM internal form, e.g. `java/lang/String`.
pub const INTERNAL_SEPARATOR: char = '/';

pub const PACKAGE_INFO: &str = "package-info";
pub const MODULE_INFO: &str = "module-info";

/// Converts an internal name (`com/acme/Outer$Inner`) to its binary name
/// (`com.acme.Outer$Inner`).
pub fn binary_name(internal: &str) -> String {
    internal.replace(INTERNAL_SEPARATOR, ".")
}

/// Renders a field descriptor as a source-level type name.
///
/// # Examples
/// ```ignore
/// descriptor_type_name("Lcom/acme/Keep;") => "com.acme.Keep"
/// descriptor_type_name("[[I") => "int[][]"
/// descriptor_type_name("V") => "void"
/// ```
pub fn descriptor_type_name(descriptor: &str) -> String {
    let dimensions = descriptor.chars().take_while(|c| *c == '[').count();
    let element = &descriptor[dimensions..];

    let mut name = match element {
        "B" => "byte".to_string(),
        "C" => "char".to_string(),
        "D" => "double".to_string(),
        "F" => "float".to_string(),
        "I" => "int".to_string(),
        "J" => "long".to_string(),
        "S" => "short".to_string(),
        "Z" => "boolean".to_string(),
        "V" => "void".to_string(),
        object => binary_name(
            object
                .strip_prefix('L')
                .and_then(|s| s.strip_suffix(';'))
                .unwrap_or(object),
        ),
    };
    for _ in 0..dimensions {
        name.push_str("[]");
    }
    name
}

/// Simple name of a binary class name, keeping any `$` nesting.
pub fn simple_name(binary: &str) -> &str {
    binary
        .rfind(TYPE_SEPARATOR)
        .map(|pos| &binary[pos + 1..])
        .unwrap_or(binary)
}

/// Package part of a binary class name; empty for the default package.
pub fn package_name(binary: &str) -> &str {
    binary
        .rfind(TYPE_SEPARATOR)
        .map(|pos| &binary[..pos])
        .unwrap_or("")
}

pub fn is_package_info(binary: &str) -> bool {
    simple_name(binary) == PACKAGE_INFO
}

/// Whether an archive entry or file name is a `module-info.class`.
pub fn is_module_info(path: &str) -> bool {
    path.rsplit(['/', '\\'])
        .next()
        .is_some_and(|file| file == "module-info.class")
}
