//! ROS 1 message checksum.
//!
//! The checksum text of a definition lists its constants first, then its
//! fields, one per line:
//!
//! ```text
//! <type> <NAME>=<value>        constant
//! <type>[<len>] <name>         built-in field (`[<len>]` only for arrays)
//! <md5 of nested type> <name>  complex field, array or not
//! ```
//!
//! Lines are joined with `\n` and hashed with MD5.

use std::collections::HashMap;

use ::md5::{Digest, Md5};
use rosmsg_core::{MessageDefinition, MsgDefError, is_builtin};

/// Checksum of the first (root) definition of `msg_defs`.
///
/// Complex field types must already be resolved to the names of other
/// definitions in `msg_defs`. Constants without `value_text` hash their typed
/// value in its canonical `Display` form, so booleans are lowercase.
pub fn md5(msg_defs: &[MessageDefinition]) -> Result<String, MsgDefError> {
    let root = msg_defs.first().ok_or(MsgDefError::EmptyDefinitionList)?;
    let sub_defs = index_by_name(msg_defs);
    let digest = compute_md5(root, &sub_defs, &mut Vec::new())?;
    tracing::debug!(root = ?root.name, %digest, "computed md5sum");
    Ok(digest)
}

/// Checksum of the definition named `type_name` within `msg_defs`.
pub fn md5_for(msg_defs: &[MessageDefinition], type_name: &str) -> Result<String, MsgDefError> {
    if msg_defs.is_empty() {
        return Err(MsgDefError::EmptyDefinitionList);
    }
    let sub_defs = index_by_name(msg_defs);
    let def = sub_defs
        .get(type_name)
        .ok_or_else(|| MsgDefError::MissingTypeDefinition {
            type_name: type_name.to_string(),
        })?;
    compute_md5(def, &sub_defs, &mut vec![type_name])
}

/// Named definitions; a later definition replaces an earlier one of the same name.
fn index_by_name(msg_defs: &[MessageDefinition]) -> HashMap<&str, &MessageDefinition> {
    msg_defs
        .iter()
        .filter_map(|d| d.name.as_deref().map(|name| (name, d)))
        .collect()
}

fn compute_md5<'a>(
    msg_def: &MessageDefinition,
    sub_defs: &HashMap<&'a str, &'a MessageDefinition>,
    visiting: &mut Vec<&'a str>,
) -> Result<String, MsgDefError> {
    let mut lines = Vec::with_capacity(msg_def.definitions.len());
    for d in msg_def.constants() {
        lines.push(format!("{} {}={}", d.type_name, d.name, d.value_repr()));
    }
    for d in msg_def.variables() {
        if is_builtin(&d.type_name) {
            let array = match (d.is_array, d.array_length) {
                (false, _) => String::new(),
                (true, Some(len)) => format!("[{len}]"),
                (true, None) => "[]".to_string(),
            };
            lines.push(format!("{}{array} {}", d.type_name, d.name));
            continue;
        }

        let (&name, &sub) = sub_defs.get_key_value(d.type_name.as_str()).ok_or_else(|| {
            MsgDefError::MissingTypeDefinition {
                type_name: d.type_name.clone(),
            }
        })?;
        if visiting.contains(&name) {
            return Err(MsgDefError::CyclicDefinition {
                type_name: name.to_string(),
            });
        }
        visiting.push(name);
        let sub_md5 = compute_md5(sub, sub_defs, visiting)?;
        visiting.pop();
        lines.push(format!("{sub_md5} {}", d.name));
    }

    Ok(hex::encode(Md5::digest(lines.join("\n").as_bytes())))
}
