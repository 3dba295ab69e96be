//! Multi-section `.msg` schema bundle parsing.
//!
//! A ROS 1 connection header carries the root definition followed by every
//! dependency, each introduced by a `====` separator line and a
//! `MSG: <name>` header.  For example:
//!
//! ```text
//! Header header
//! geometry_msgs/Point position
//! ================================================================================
//! MSG: std_msgs/Header
//! uint32 seq
//! time stamp
//! string frame_id
//! ================================================================================
//! MSG: geometry_msgs/Point
//! float64 x
//! ```
//!
//! [`SchemaBundle::split`] cuts such text into [`MsgSection`]s and
//! [`SchemaBundle::build`] turns each section into a [`MessageDefinition`].

use rosmsg_core::{MessageDefinition, MsgDefError};

use crate::{
    lex::{is_separator_line, meaningful_lines, strip_line_comment},
    parser::parse_field_line,
};

const SECTION_HEADER: &str = "MSG:";

/// The trimmed, non-comment lines between two separators.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MsgSection<'a> {
    pub lines: Vec<&'a str>,
}

/// All sections of one schema text, in source order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SchemaBundle<'a> {
    pub sections: Vec<MsgSection<'a>>,
}

impl<'a> SchemaBundle<'a> {
    /// Split `schema_text` at separator lines.
    ///
    /// There is always at least one section: the final one is kept even when
    /// it is empty or the text does not end with a separator.
    pub fn split(schema_text: &'a str) -> Self {
        let mut sections = Vec::new();
        let mut current = MsgSection::default();
        for line in meaningful_lines(schema_text) {
            if is_separator_line(line) {
                sections.push(std::mem::take(&mut current));
            } else {
                current.lines.push(line);
            }
        }
        sections.push(current);
        Self { sections }
    }

    /// Build one definition per section, dropping later copies of a
    /// definition already seen.
    pub fn build(&self) -> Result<Vec<MessageDefinition>, MsgDefError> {
        let mut unique: Vec<MessageDefinition> = Vec::with_capacity(self.sections.len());
        for section in &self.sections {
            let def = build_definition(&section.lines)?;
            if unique.contains(&def) {
                tracing::debug!(name = ?def.name, "dropping duplicate message definition");
                continue;
            }
            unique.push(def);
        }
        Ok(unique)
    }
}

/// Turn the lines of one section into a [`MessageDefinition`].
///
/// A `MSG: <name>` line names the definition; every other line is a field or
/// constant declaration.
pub fn build_definition(lines: &[&str]) -> Result<MessageDefinition, MsgDefError> {
    let mut def = MessageDefinition::default();
    for line in lines {
        let line = strip_line_comment(line).trim();
        if line.is_empty() {
            continue;
        }
        if let Some(name) = line.strip_prefix(SECTION_HEADER) {
            set_section_name(&mut def, name.trim())?;
            continue;
        }
        def.definitions.push(parse_field_line(line)?);
    }
    Ok(def)
}

fn set_section_name(def: &mut MessageDefinition, name: &str) -> Result<(), MsgDefError> {
    if name.is_empty() {
        return Err(MsgDefError::MalformedSection {
            detail: format!("empty name in `{SECTION_HEADER}` header"),
        });
    }
    if let Some(existing) = &def.name {
        return Err(MsgDefError::MalformedSection {
            detail: format!("section already named '{existing}', found second header for '{name}'"),
        });
    }
    def.name = Some(name.to_string());
    Ok(())
}
