//! Type-name fixup: rewrites every complex field type from the name written
//! in the schema to the fully-qualified name of the definition it refers to.
//!
//! # Lookup strategy
//!
//! Candidates are all definitions of the bundle. For a written name `N`
//! used inside a definition with namespace `NS`:
//!
//! 1. `N` empty: unnamed definitions.
//! 2. `N` contains `/`: the definition named exactly `N`.
//! 3. `N` is `Header`: only `std_msgs/Header`.
//! 4. `NS` present: the definition named `NS/N`.
//! 5. Otherwise: any definition whose name ends with `/N`.
//!
//! Exactly one candidate must match.

use crate::{builtin::HEADER_TYPE, definition::MessageDefinition, error::MsgDefError};

/// Resolve complex field types in place.
///
/// Every lookup is performed before the first rewrite, so the definitions are
/// left untouched when an error is returned.
pub fn fixup_types(types: &mut [MessageDefinition]) -> Result<(), MsgDefError> {
    let mut rewrites = Vec::new();
    for (def_idx, msg) in types.iter().enumerate() {
        let namespace = msg.namespace();
        for (field_idx, field) in msg.definitions.iter().enumerate() {
            if !field.is_complex {
                continue;
            }
            let resolved = find_type_by_name(types, &field.type_name, namespace)?;
            rewrites.push((def_idx, field_idx, resolved.to_string()));
        }
    }

    for (def_idx, field_idx, resolved) in rewrites {
        let field = &mut types[def_idx].definitions[field_idx];
        tracing::trace!(from = %field.type_name, to = %resolved, "resolved field type");
        field.type_name = resolved;
    }
    Ok(())
}

/// Consuming variant of [`fixup_types`].
pub fn resolve_types(
    mut types: Vec<MessageDefinition>,
) -> Result<Vec<MessageDefinition>, MsgDefError> {
    fixup_types(&mut types)?;
    Ok(types)
}

fn find_type_by_name<'a>(
    types: &'a [MessageDefinition],
    name: &str,
    namespace: Option<&str>,
) -> Result<&'a str, MsgDefError> {
    let mut matches = types
        .iter()
        .filter(|t| is_candidate(t.name.as_deref().unwrap_or_default(), name, namespace));

    let missing = || MsgDefError::MissingTypeDefinition {
        type_name: name.to_string(),
    };
    let found = matches.next().ok_or_else(missing)?;
    if matches.next().is_some() {
        return Err(MsgDefError::AmbiguousTypeName {
            type_name: name.to_string(),
        });
    }
    found
        .name
        .as_deref()
        .filter(|n| !n.is_empty())
        .ok_or_else(missing)
}

fn is_candidate(type_name: &str, name: &str, namespace: Option<&str>) -> bool {
    if name.is_empty() {
        type_name.is_empty()
    } else if name.contains('/') {
        type_name == name
    } else if name == "Header" {
        type_name == HEADER_TYPE
    } else if let Some(namespace) = namespace {
        type_name
            .strip_prefix(namespace)
            .and_then(|rest| rest.strip_prefix('/'))
            == Some(name)
    } else {
        type_name
            .strip_suffix(name)
            .is_some_and(|prefix| prefix.ends_with('/'))
    }
}
