//! Typed literals attached to constants and ROS 2 default values.

use std::fmt;

/// A constant or default literal.
///
/// Absence is expressed as `Option<Value>` on the owning field. Lists are
/// expected to be homogeneous; the type does not enforce it.
#[derive(Debug, Clone, PartialEq)]
pub enum Value {
    Bool(bool),
    Int(i64),
    Float(f64),
    String(String),
    List(Vec<Value>),
}

impl Value {
    pub fn string(s: impl AsRef<str>) -> Self {
        Self::String(s.as_ref().to_string())
    }
}

/// Canonical `.msg` literal form: `true`/`false`, JSON-quoted strings,
/// shortest round-trip floats and `[a, b, ...]` lists.
///
/// Floats outside `[1e-5, 1e16)` switch to exponent form (`1e300`).
impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Value::Bool(v) => f.write_str(if *v { "true" } else { "false" }),
            Value::Int(v) => write!(f, "{v}"),
            Value::Float(v) if uses_exponent(*v) => write!(f, "{v:e}"),
            Value::Float(v) => write!(f, "{v}"),
            Value::String(v) => write!(f, "{}", serde_json::Value::from(v.as_str())),
            Value::List(items) => {
                f.write_str("[")?;
                for (i, item) in items.iter().enumerate() {
                    if i > 0 {
                        f.write_str(", ")?;
                    }
                    write!(f, "{item}")?;
                }
                f.write_str("]")
            }
        }
    }
}

fn uses_exponent(v: f64) -> bool {
    let magnitude = v.abs();
    v.is_finite() && magnitude != 0.0 && !(1e-5..1e16).contains(&magnitude)
}

impl From<bool> for Value {
    fn from(v: bool) -> Self {
        Self::Bool(v)
    }
}

impl From<i64> for Value {
    fn from(v: i64) -> Self {
        Self::Int(v)
    }
}

impl From<f64> for Value {
    fn from(v: f64) -> Self {
        Self::Float(v)
    }
}

impl From<&str> for Value {
    fn from(v: &str) -> Self {
        Self::string(v)
    }
}

impl From<String> for Value {
    fn from(v: String) -> Self {
        Self::String(v)
    }
}

impl<T: Into<Value>> From<Vec<T>> for Value {
    fn from(items: Vec<T>) -> Self {
        Self::List(items.into_iter().map(Into::into).collect())
    }
}
