//! ROS 1 `.msg` definition parser for `rosmsg`.
//!
//! # Pipeline
//!
//! ```text
//! schema text (UTF-8 .msg bundle)
//!   └─ SchemaBundle::split      – split sections at `====` separators
//!       └─ SchemaBundle::build  – field grammar per line, duplicate removal
//!           └─ fixup_types      – local type names → fully-qualified names
//! ```

mod lex;
mod parser;
mod schema_bundle;

use rosmsg_core::{MessageDefinition, MsgDefError, fixup_types};

pub use parser::parse_field_line;
pub use schema_bundle::{MsgSection, SchemaBundle, build_definition};

/// Parse a ROS 1 message definition bundle.
///
/// The first returned definition is the root type. Unless `skip_type_fixup`
/// is set, complex field types are rewritten to fully-qualified names.
pub fn parse(
    message_definition: &str,
    skip_type_fixup: bool,
) -> Result<Vec<MessageDefinition>, MsgDefError> {
    let bundle = SchemaBundle::split(message_definition);
    tracing::debug!(sections = bundle.sections.len(), "split message definition");

    let mut types = bundle.build()?;
    if !skip_type_fixup {
        fixup_types(&mut types)?;
    }
    Ok(types)
}
