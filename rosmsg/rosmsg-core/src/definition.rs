//! Message definition model produced by the parsers and consumed by the
//! hasher and stringifier.

use crate::{builtin::is_builtin, value::Value};

/// A single declaration inside a message definition: a field or a constant.
///
/// The ROS 2 bounded-size attributes (`upper_bound`, `array_upper_bound`,
/// `default_value`) are never set by the ROS 1 parser but are rendered by the
/// stringifier when present.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct MessageDefinitionField {
    /// Normalized type name, e.g. `uint8` or `geometry_msgs/Point` after resolution.
    pub type_name: String,
    pub name: String,
    /// `true` iff `type_name` refers to another message definition.
    pub is_complex: bool,
    pub is_array: bool,
    /// `Some(n)` for a fixed-length array of `n` elements; `None` for variable length.
    pub array_length: Option<usize>,
    pub is_constant: bool,
    /// Typed constant value, when the dialect interprets it.
    pub value: Option<Value>,
    /// Right-hand side of a constant exactly as written (trimmed).
    pub value_text: Option<String>,
    /// `string<=N`
    pub upper_bound: Option<usize>,
    /// `T[<=N]`
    pub array_upper_bound: Option<usize>,
    pub default_value: Option<Value>,
}

impl MessageDefinitionField {
    /// A scalar, non-constant field; `is_complex` is derived from `type_name`.
    pub fn new(type_name: impl Into<String>, name: impl Into<String>) -> Self {
        let type_name = type_name.into();
        Self {
            is_complex: !is_builtin(&type_name),
            type_name,
            name: name.into(),
            ..Default::default()
        }
    }

    /// Turn the field into an array; `None` means variable length.
    pub fn with_array(mut self, length: Option<usize>) -> Self {
        self.is_array = true;
        self.array_length = length;
        self
    }

    /// Turn the field into a constant whose value is kept verbatim.
    pub fn with_value_text(mut self, text: impl Into<String>) -> Self {
        self.is_constant = true;
        self.value_text = Some(text.into());
        self
    }

    /// Turn the field into a constant carrying a typed value.
    pub fn with_value(mut self, value: impl Into<Value>) -> Self {
        self.is_constant = true;
        self.value = Some(value.into());
        self
    }

    pub fn with_default(mut self, value: impl Into<Value>) -> Self {
        self.default_value = Some(value.into());
        self
    }

    /// Text of a constant's value: `value_text` when present, else the
    /// rendered typed `value`, else empty.
    pub fn value_repr(&self) -> String {
        match (&self.value_text, &self.value) {
            (Some(text), _) => text.clone(),
            (None, Some(value)) => value.to_string(),
            (None, None) => String::new(),
        }
    }
}

/// One named or anonymous message definition: an ordered list of fields.
///
/// The first definition of a bundle is usually unnamed (the root type);
/// dependencies carry the name from their `MSG:` header.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct MessageDefinition {
    pub name: Option<String>,
    pub definitions: Vec<MessageDefinitionField>,
}

impl MessageDefinition {
    pub fn new(name: Option<&str>, definitions: Vec<MessageDefinitionField>) -> Self {
        Self {
            name: name.map(ToString::to_string),
            definitions,
        }
    }

    /// Constants in declaration order.
    pub fn constants(&self) -> impl Iterator<Item = &MessageDefinitionField> {
        self.definitions.iter().filter(|d| d.is_constant)
    }

    /// Non-constant fields in declaration order.
    pub fn variables(&self) -> impl Iterator<Item = &MessageDefinitionField> {
        self.definitions.iter().filter(|d| !d.is_constant)
    }

    /// Package path of the definition: its name without the last `/` segment.
    ///
    /// `pkg/sub/Type` → `pkg/sub`. Unnamed definitions and names without a
    /// `/` have no namespace.
    pub fn namespace(&self) -> Option<&str> {
        let (namespace, _) = self.name.as_deref()?.rsplit_once('/')?;
        (!namespace.is_empty()).then_some(namespace)
    }
}
