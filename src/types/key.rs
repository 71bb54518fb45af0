//! Keys and key/value pairs handed to the command translators.

use super::{Value, ValueType};
use bytes::Bytes;
use std::fmt;

/// Time to live in seconds.
pub type Ttl = i32;

/// The key exists and never expires.
pub const NO_TTL: Ttl = -1;

/// The key has expired or does not exist.
pub const EXPIRED_TTL: Ttl = -2;

/// Opaque key bytes.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default)]
pub struct Key(Bytes);

impl Key {
    pub fn new(data: impl Into<Bytes>) -> Self {
        Key(data.into())
    }

    /// Raw key bytes.
    pub fn data(&self) -> &Bytes {
        &self.0
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl From<&str> for Key {
    fn from(s: &str) -> Self {
        Key(Bytes::copy_from_slice(s.as_bytes()))
    }
}

impl From<Bytes> for Key {
    fn from(b: Bytes) -> Self {
        Key(b)
    }
}

impl fmt::Display for Key {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", String::from_utf8_lossy(&self.0))
    }
}

/// Per-key metadata.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct KeyInfo {
    pub ttl: Ttl,
}

impl Default for KeyInfo {
    fn default() -> Self {
        Self { ttl: NO_TTL }
    }
}

/// A key together with its metadata.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct NKey {
    key: Key,
    info: KeyInfo,
}

impl NKey {
    pub fn new(key: impl Into<Key>) -> Self {
        Self {
            key: key.into(),
            info: KeyInfo::default(),
        }
    }

    pub fn with_ttl(key: impl Into<Key>, ttl: Ttl) -> Self {
        Self {
            key: key.into(),
            info: KeyInfo { ttl },
        }
    }

    pub fn key(&self) -> &Key {
        &self.key
    }

    pub fn ttl(&self) -> Ttl {
        self.info.ttl
    }

    pub fn set_ttl(&mut self, ttl: Ttl) {
        self.info.ttl = ttl;
    }

    pub fn info(&self) -> KeyInfo {
        self.info
    }
}

/// A key paired with its typed value.
#[derive(Debug, Clone, PartialEq)]
pub struct NDbKValue {
    key: NKey,
    value: Value,
}

impl NDbKValue {
    pub fn new(key: NKey, value: impl Into<Value>) -> Self {
        Self {
            key,
            value: value.into(),
        }
    }

    pub fn key(&self) -> &NKey {
        &self.key
    }

    pub fn value(&self) -> &Value {
        &self.value
    }

    pub fn value_type(&self) -> ValueType {
        self.value.value_type()
    }

    /// The value's textual form.
    pub fn value_bytes(&self) -> Bytes {
        self.value.to_bytes()
    }

    pub fn set_value(&mut self, value: impl Into<Value>) {
        self.value = value.into();
    }
}
