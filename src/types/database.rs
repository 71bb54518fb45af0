//! Database metadata.
//!
//! A [`DataBaseInfo`] is created when a database is discovered on a server and
//! then refreshed in place as the server reports new sizes and keys. Callers
//! keep the same instance across refreshes; identity is what they track.

use super::NDbKValue;
use crate::backend::ConnectionType;

/// Metadata of one database on a server.
#[derive(Debug, Clone, PartialEq)]
pub struct DataBaseInfo {
    name: String,
    is_default: bool,
    connection_type: ConnectionType,
    /// Server reported key count, independent of `keys`
    size: usize,
    /// Keys loaded so far
    keys: Vec<NDbKValue>,
}

impl DataBaseInfo {
    pub fn new(
        name: impl Into<String>,
        is_default: bool,
        connection_type: ConnectionType,
        size: usize,
        keys: Vec<NDbKValue>,
    ) -> Self {
        Self {
            name: name.into(),
            is_default,
            connection_type,
            size,
            keys,
        }
    }

    pub fn connection_type(&self) -> ConnectionType {
        self.connection_type
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// Key count as reported by the server.
    pub fn db_size(&self) -> usize {
        self.size
    }

    pub fn set_db_size(&mut self, size: usize) {
        self.size = size;
    }

    /// Number of keys loaded into this object.
    pub fn loaded_size(&self) -> usize {
        self.keys.len()
    }

    pub fn is_default(&self) -> bool {
        self.is_default
    }

    pub fn set_is_default(&mut self, is_default: bool) {
        self.is_default = is_default;
    }

    pub fn keys(&self) -> &[NDbKValue] {
        &self.keys
    }

    pub fn set_keys(&mut self, keys: Vec<NDbKValue>) {
        self.keys = keys;
    }

    pub fn clear_keys(&mut self) {
        self.keys.clear();
    }
}
