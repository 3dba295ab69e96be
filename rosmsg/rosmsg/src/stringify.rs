//! Canonical `.msg` text output.
//!
//! Dependencies follow the root definition, each introduced by an 80-column
//! `=` separator and a `MSG: <name>` header. Within a definition, constants
//! come first, then a blank line, then fields.

use rosmsg_core::{MessageDefinition, MessageDefinitionField};

const SEPARATOR_WIDTH: usize = 80;

/// Render `msg_defs` as `.msg` text.
pub fn stringify(msg_defs: &[MessageDefinition]) -> String {
    let mut lines: Vec<String> = Vec::new();
    for (i, msg_def) in msg_defs.iter().enumerate() {
        if i > 0 {
            lines.push(String::new());
            lines.push("=".repeat(SEPARATOR_WIDTH));
            lines.push(format!("MSG: {}", msg_def.name.as_deref().unwrap_or_default()));
        }
        for constant in msg_def.constants() {
            lines.push(format!(
                "{} {} = {}",
                constant.type_name,
                constant.name,
                constant.value_repr()
            ));
        }

        let mut variables = msg_def.variables().peekable();
        if variables.peek().is_some() {
            if !lines.is_empty() {
                lines.push(String::new());
            }
            lines.extend(variables.map(field_line));
        }
    }
    lines.join("\n").trim().to_string()
}

/// `<type><upper bound><array> <name><default>`
fn field_line(field: &MessageDefinitionField) -> String {
    let upper_bound = field
        .upper_bound
        .map(|n| format!("<={n}"))
        .unwrap_or_default();
    let array = if field.is_array {
        match (field.array_length, field.array_upper_bound) {
            (Some(len), _) => format!("[{len}]"),
            (None, Some(bound)) => format!("[<={bound}]"),
            (None, None) => "[]".to_string(),
        }
    } else {
        String::new()
    };
    let default_value = field
        .default_value
        .as_ref()
        .map(|v| format!(" {v}"))
        .unwrap_or_default();
    format!(
        "{}{upper_bound}{array} {}{default_value}",
        field.type_name, field.name
    )
}
