//! Command Output
//!
//! Handlers report their results by pushing [`Reply`] values into the output
//! sink handed to them by the dispatcher. The variants mirror what a
//! key-value console shows to its user, and `Display` renders them the way
//! `redis-cli` does.
//!
//! ## Examples
//!
//! Status: `OK`
//! Error: `(error) Not supported command: ping`
//! Integer: `(integer) 1000`
//! Bulk: `"get name"`
//! Nil: `(nil)`

use bytes::Bytes;
use std::fmt;

/// One element of a handler's output.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Reply {
    /// Plain status line.
    Status(String),

    /// Error message produced by a handler.
    Error(String),

    /// 64-bit signed integer.
    Integer(i64),

    /// Binary-safe payload, e.g. a generated wire command.
    Bulk(Bytes),

    /// Absence of a value.
    Nil,

    /// Ordered collection of replies, possibly nested.
    Array(Vec<Reply>),
}

impl Reply {
    /// Creates a status reply.
    pub fn status(s: impl Into<String>) -> Self {
        Reply::Status(s.into())
    }

    /// Creates an error reply.
    pub fn error(s: impl Into<String>) -> Self {
        Reply::Error(s.into())
    }

    /// Creates an integer reply.
    pub fn integer(n: i64) -> Self {
        Reply::Integer(n)
    }

    /// Creates a bulk reply.
    ///
    /// # Example
    /// ```
    /// use polykv::commands::Reply;
    /// use bytes::Bytes;
    /// let bulk = Reply::bulk(Bytes::from("get name"));
    /// ```
    pub fn bulk(data: impl Into<Bytes>) -> Self {
        Reply::Bulk(data.into())
    }

    /// Creates a nil reply.
    pub fn nil() -> Self {
        Reply::Nil
    }

    /// Creates an array reply.
    pub fn array(values: Vec<Reply>) -> Self {
        Reply::Array(values)
    }

    /// Common reply for successful operations
    pub fn ok() -> Self {
        Reply::Status("OK".to_string())
    }

    /// Returns true if this reply is an error.
    pub fn is_error(&self) -> bool {
        matches!(self, Reply::Error(_))
    }

    /// Attempts to extract the inner bytes from a bulk reply.
    pub fn as_bytes(&self) -> Option<&[u8]> {
        match self {
            Reply::Bulk(b) => Some(b),
            _ => None,
        }
    }

    /// Attempts to extract the inner string from a status or bulk reply.
    pub fn as_str(&self) -> Option<&str> {
        match self {
            Reply::Status(s) => Some(s),
            Reply::Bulk(b) => std::str::from_utf8(b).ok(),
            _ => None,
        }
    }
}

impl fmt::Display for Reply {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Reply::Status(s) => write!(f, "{}", s),
            Reply::Error(s) => write!(f, "(error) {}", s),
            Reply::Integer(n) => write!(f, "(integer) {}", n),
            Reply::Bulk(data) => {
                if let Ok(s) = std::str::from_utf8(data) {
                    write!(f, "\"{}\"", s)
                } else {
                    write!(f, "(binary data, {} bytes)", data.len())
                }
            }
            Reply::Nil => write!(f, "(nil)"),
            Reply::Array(values) => {
                if values.is_empty() {
                    write!(f, "(empty array)")
                } else {
                    for (i, v) in values.iter().enumerate() {
                        if i > 0 {
                            writeln!(f)?;
                        }
                        write!(f, "{}) {}", i + 1, v)?;
                    }
                    Ok(())
                }
            }
        }
    }
}
