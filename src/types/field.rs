//! Status field schemas.

use super::ValueType;

/// Name and type of one field in a backend's status output.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Field {
    pub name: &'static str,
    pub value_type: ValueType,
}

impl Field {
    pub const fn new(name: &'static str, value_type: ValueType) -> Self {
        Self { name, value_type }
    }

    /// True for numeric and boolean fields, which can be graphed over time.
    pub fn is_integral(&self) -> bool {
        self.value_type.is_integral()
    }
}
