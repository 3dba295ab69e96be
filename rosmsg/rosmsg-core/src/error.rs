//! Error type for parsing, resolution and hashing.

/// Error returned by every `rosmsg` operation.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum MsgDefError {
    /// A declaration line does not match `<type> <name> [= <value>]`.
    #[error("could not parse line: '{line}'")]
    MalformedField { line: String },

    /// A `MSG:` section header is unusable.
    #[error("malformed section: {detail}")]
    MalformedSection { detail: String },

    /// The requested dialect has no parser.
    #[error("{dialect} parsing is not implemented")]
    UnsupportedDialect { dialect: String },

    /// No block in the bundle matches a complex field type.
    #[error("missing type definition for '{type_name}'")]
    MissingTypeDefinition { type_name: String },

    /// More than one block in the bundle matches a complex field type.
    #[error("cannot unambiguously determine fully-qualified type name for '{type_name}'")]
    AmbiguousTypeName { type_name: String },

    /// A checksum was requested for a bundle without any block.
    #[error("cannot produce md5sum for empty definition list")]
    EmptyDefinitionList,

    /// A block refers back to itself through its complex fields.
    #[error("type '{type_name}' is defined in terms of itself")]
    CyclicDefinition { type_name: String },
}
