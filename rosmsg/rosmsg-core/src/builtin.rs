//! Built-in `.msg` types and legacy alias handling.

/// Every type name that does not refer to another message definition.
///
/// `char` and `byte` are members even though [`normalize_type`] rewrites them.
pub const BUILTIN_TYPES: [&str; 16] = [
    "int8", "uint8", "int16", "uint16", "int32", "uint32", "int64", "uint64", "float32", "float64",
    "string", "bool", "char", "byte", "time", "duration",
];

/// Fully-qualified name that a bare `Header` field type always resolves to.
pub const HEADER_TYPE: &str = "std_msgs/Header";

/// Whether `type_name` is one of [`BUILTIN_TYPES`].
pub fn is_builtin(type_name: &str) -> bool {
    BUILTIN_TYPES.contains(&type_name)
}

/// Map the deprecated aliases to their canonical types: `char` → `uint8`,
/// `byte` → `int8`. Every other name is returned unchanged.
pub fn normalize_type(type_name: &str) -> &str {
    match type_name {
        "char" => "uint8",
        "byte" => "int8",
        other => other,
    }
}
