use rosmsg_core::Dialect;

/// Settings for [`parse`](crate::parse).
///
/// The default parses ROS 1 text and resolves type names.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ParseOptions {
    pub dialect: Dialect,
    /// Leave complex field types as written instead of running
    /// [`fixup_types`](crate::fixup_types).
    pub skip_type_fixup: bool,
}

impl ParseOptions {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_dialect(mut self, dialect: Dialect) -> Self {
        self.dialect = dialect;
        self
    }

    pub fn with_skip_type_fixup(mut self, skip: bool) -> Self {
        self.skip_type_fixup = skip;
        self
    }
}
