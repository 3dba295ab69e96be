//! Encoding-agnostic model types shared by the `rosmsg` parsers, hasher and
//! stringifier.
//!
//! Key components:
//! - [`MessageDefinition`] / [`MessageDefinitionField`] — one schema block and its fields
//! - [`Value`] — typed constant and default literals
//! - [`builtin`] — the built-in type table and legacy alias normalization
//! - [`type_resolver`] — local type names → fully-qualified names
//! - [`Dialect`] — which `.msg` flavour a text is written in
//! - [`MsgDefError`] — the single error type surfaced by every operation

pub mod builtin;
mod definition;
mod dialect;
mod error;
pub mod type_resolver;
mod value;

pub use builtin::{BUILTIN_TYPES, HEADER_TYPE, is_builtin, normalize_type};
pub use definition::{MessageDefinition, MessageDefinitionField};
pub use dialect::Dialect;
pub use error::MsgDefError;
pub use type_resolver::{fixup_types, resolve_types};
pub use value::Value;
