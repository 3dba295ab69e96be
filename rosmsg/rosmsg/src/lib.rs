//! Parse, resolve, hash and stringify ROS `.msg` message definitions.
//!
//! ```text
//! schema text
//!   └─ parse        – dialect parser → Vec<MessageDefinition>
//!       ├─ md5       – ROS 1 wire-compatibility checksum
//!       └─ stringify – canonical .msg text
//! ```

mod checksum;
mod options;
mod stringify;

pub use checksum::{md5, md5_for};
pub use options::ParseOptions;
pub use rosmsg_core::{
    BUILTIN_TYPES, Dialect, HEADER_TYPE, MessageDefinition, MessageDefinitionField, MsgDefError,
    Value, fixup_types, is_builtin, normalize_type, resolve_types,
};
pub use stringify::stringify;

/// Parse `message_definition` with the dialect selected in `options`.
///
/// Dialects without a parser fail before any line is read.
#[cfg_attr(not(feature = "ros1"), allow(unused_variables))]
pub fn parse(
    message_definition: &str,
    options: &ParseOptions,
) -> Result<Vec<MessageDefinition>, MsgDefError> {
    match &options.dialect {
        #[cfg(feature = "ros1")]
        Dialect::Ros1 => rosmsg_ros1::parse(message_definition, options.skip_type_fixup),
        other => Err(MsgDefError::UnsupportedDialect {
            dialect: other.to_string(),
        }),
    }
}
