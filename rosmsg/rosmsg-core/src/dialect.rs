use std::fmt;

/// Flavours of the `.msg` definition language.
///
/// String forms follow the mcap schema-encoding registry names.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
pub enum Dialect {
    /// ROS 1 Message (`ros1msg`)
    #[default]
    Ros1,
    /// ROS 2 Message (`ros2msg`)
    Ros2,
    /// Unknown/custom dialect
    Unknown(String),
}

impl Dialect {
    pub fn as_str(&self) -> &str {
        match self {
            Self::Ros1 => "ros1msg",
            Self::Ros2 => "ros2msg",
            Self::Unknown(s) => s,
        }
    }
}

impl From<&str> for Dialect {
    fn from(s: &str) -> Self {
        match s {
            "ros1msg" => Self::Ros1,
            "ros2msg" => Self::Ros2,
            other => Self::Unknown(other.to_string()),
        }
    }
}

impl fmt::Display for Dialect {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
