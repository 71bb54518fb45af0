//! Typed values stored under a key.
//!
//! Backends differ in what they can store: Memcached and the embedded stores
//! only hold strings, Redis also holds lists, sets, sorted sets and hashes.
//! [`ValueType`] names the kind and [`Value`] carries the data.

use bytes::{BufMut, Bytes, BytesMut};
use std::fmt;

/// Kind of a stored value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ValueType {
    Null,
    Boolean,
    Integer,
    UInteger,
    Double,
    String,
    Array,
    Set,
    ZSet,
    Hash,
}

impl ValueType {
    /// Lowercase name as shown to users.
    pub fn as_str(&self) -> &'static str {
        match self {
            ValueType::Null => "null",
            ValueType::Boolean => "boolean",
            ValueType::Integer => "integer",
            ValueType::UInteger => "uinteger",
            ValueType::Double => "double",
            ValueType::String => "string",
            ValueType::Array => "array",
            ValueType::Set => "set",
            ValueType::ZSet => "zset",
            ValueType::Hash => "hash",
        }
    }

    /// Numeric and boolean kinds.
    pub fn is_integral(&self) -> bool {
        matches!(
            self,
            ValueType::Boolean | ValueType::Integer | ValueType::UInteger | ValueType::Double
        )
    }
}

impl fmt::Display for ValueType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A typed value.
#[derive(Debug, Clone, PartialEq)]
pub enum Value {
    Null,
    Boolean(bool),
    Integer(i64),
    UInteger(u64),
    Double(f64),
    String(Bytes),
    /// Ordered list of elements
    Array(Vec<Bytes>),
    /// Unordered unique members
    Set(Vec<Bytes>),
    /// `(member, score)` pairs
    ZSet(Vec<(Bytes, f64)>),
    /// `(field, value)` pairs
    Hash(Vec<(Bytes, Bytes)>),
}

impl Value {
    /// Creates a string value.
    pub fn string(data: impl Into<Bytes>) -> Self {
        Value::String(data.into())
    }

    /// The kind of this value.
    pub fn value_type(&self) -> ValueType {
        match self {
            Value::Null => ValueType::Null,
            Value::Boolean(_) => ValueType::Boolean,
            Value::Integer(_) => ValueType::Integer,
            Value::UInteger(_) => ValueType::UInteger,
            Value::Double(_) => ValueType::Double,
            Value::String(_) => ValueType::String,
            Value::Array(_) => ValueType::Array,
            Value::Set(_) => ValueType::Set,
            Value::ZSet(_) => ValueType::ZSet,
            Value::Hash(_) => ValueType::Hash,
        }
    }

    /// True for a list, set, sorted set or hash with no elements.
    pub fn is_empty_container(&self) -> bool {
        match self {
            Value::Array(items) | Value::Set(items) => items.is_empty(),
            Value::ZSet(members) => members.is_empty(),
            Value::Hash(pairs) => pairs.is_empty(),
            _ => false,
        }
    }

    /// Appends the value's textual form to `buf`.
    ///
    /// Scalars are written in decimal, containers as their elements separated
    /// by single spaces. Sorted sets are written `score member`, the order
    /// `ZADD` expects. No quoting is applied.
    pub fn write_to(&self, buf: &mut BytesMut) {
        match self {
            Value::Null => {}
            Value::Boolean(b) => buf.put_slice(if *b { b"true" } else { b"false" }),
            Value::Integer(n) => buf.put_slice(n.to_string().as_bytes()),
            Value::UInteger(n) => buf.put_slice(n.to_string().as_bytes()),
            Value::Double(d) => buf.put_slice(d.to_string().as_bytes()),
            Value::String(s) => buf.put_slice(s),
            Value::Array(items) | Value::Set(items) => {
                write_separated(buf, items.iter(), |buf, item| buf.put_slice(item));
            }
            Value::ZSet(members) => {
                write_separated(buf, members.iter(), |buf, (member, score)| {
                    buf.put_slice(score.to_string().as_bytes());
                    buf.put_u8(b' ');
                    buf.put_slice(member);
                });
            }
            Value::Hash(pairs) => {
                write_separated(buf, pairs.iter(), |buf, (field, value)| {
                    buf.put_slice(field);
                    buf.put_u8(b' ');
                    buf.put_slice(value);
                });
            }
        }
    }

    /// The value's textual form.
    pub fn to_bytes(&self) -> Bytes {
        let mut buf = BytesMut::new();
        self.write_to(&mut buf);
        buf.freeze()
    }
}

fn write_separated<I, T>(buf: &mut BytesMut, items: I, mut write: impl FnMut(&mut BytesMut, T))
where
    I: Iterator<Item = T>,
{
    for (i, item) in items.enumerate() {
        if i > 0 {
            buf.put_u8(b' ');
        }
        write(buf, item);
    }
}

impl From<&str> for Value {
    fn from(s: &str) -> Self {
        Value::String(Bytes::copy_from_slice(s.as_bytes()))
    }
}

impl From<String> for Value {
    fn from(s: String) -> Self {
        Value::String(Bytes::from(s))
    }
}

impl From<i64> for Value {
    fn from(n: i64) -> Self {
        Value::Integer(n)
    }
}
