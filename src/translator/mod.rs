//! Command Translation Module
//!
//! Turns backend-agnostic key operations into the literal command text a
//! specific store expects.
//!
//! ## Overview
//!
//! ```text
//! NDbKValue / NKey
//!       │
//!       ▼
//! ┌──────────────────────┐      ┌──────────────┐
//! │ dyn CommandTranslator│<─────│ CommandVerbs │  (per backend)
//! └──────────┬───────────┘      └──────────────┘
//!            │
//!            ▼
//!   b"set foo bar"  ──> transport layer
//! ```
//!
//! Commands are verb first, arguments separated by a single space. Text
//! protocols that split on spaces (Memcached, SSDB, the embedded stores) get
//! keys and values as they are. Redis gets a quote-aware command line: an
//! argument that is empty or holds whitespace, `"` or `\` is wrapped in
//! double quotes with `\"` and `\\` escapes, so the console tokenizer reads
//! back the same arguments. No check is made that a key exists. Translators
//! hold no per-call state and can be shared across threads.
//!
//! ## Example
//!
//! ```
//! use polykv::backend::ConnectionType;
//! use polykv::translator::translator_for;
//! use polykv::types::{NDbKValue, NKey};
//!
//! let translator = translator_for(ConnectionType::Memcached).unwrap();
//! let cmd = translator
//!     .create_key_command(&NDbKValue::new(NKey::new("foo"), "bar"))
//!     .unwrap();
//! assert_eq!(&cmd[..], b"set foo bar");
//! ```

pub mod generic;
#[cfg(feature = "redis")]
pub mod redis;
pub mod verbs;

use crate::backend::{lookup, BackendError, ConnectionType};
use crate::commands::CommandInfo;
use crate::types::{Key, NDbKValue, NKey, Ttl, Value, ValueType};
use bytes::{BufMut, Bytes, BytesMut};
use thiserror::Error;

pub use generic::VerbTranslator;
#[cfg(feature = "redis")]
pub use redis::RedisTranslator;
pub use verbs::CommandVerbs;

/// A generated wire command.
pub type CommandBuffer = Bytes;

/// Reasons a key operation cannot be expressed for a backend.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum TranslatorError {
    /// Key operations need a non-empty key
    #[error("empty key")]
    EmptyKey,

    /// A container write needs at least one element
    #[error("{backend} cannot store an empty {value_type}")]
    EmptyValue {
        backend: &'static str,
        value_type: ValueType,
    },

    /// The backend cannot store values of this type
    #[error("{backend} does not support {value_type} values")]
    UnsupportedValueType {
        backend: &'static str,
        value_type: ValueType,
    },

    /// The backend has no command for this operation
    #[error("{backend} does not support {operation}")]
    UnsupportedOperation {
        backend: &'static str,
        operation: &'static str,
    },

    /// The backend is not available in this build
    #[error(transparent)]
    Backend(#[from] BackendError),
}

/// Builds command text for one backend.
pub trait CommandTranslator: Send + Sync {
    /// Display name of the backend.
    fn db_name(&self) -> &'static str;

    /// `<set-verb> <key> <value>`
    fn create_key_command(&self, key: &NDbKValue) -> Result<CommandBuffer, TranslatorError>;

    /// `<get-verb> <key>`. `value_type` is advisory; single type stores ignore it.
    fn load_key_command(
        &self,
        key: &NKey,
        value_type: ValueType,
    ) -> Result<CommandBuffer, TranslatorError>;

    /// `<delete-verb> <key>`
    fn delete_key_command(&self, key: &NKey) -> Result<CommandBuffer, TranslatorError>;

    /// `<rename-verb> <key> <new-key>`
    fn rename_key_command(&self, key: &NKey, new_name: &Key)
        -> Result<CommandBuffer, TranslatorError>;

    /// `<ttl-set-verb> <key> <seconds>`
    fn change_key_ttl_command(&self, key: &NKey, ttl: Ttl)
        -> Result<CommandBuffer, TranslatorError>;

    /// `<ttl-get-verb> <key>`
    fn load_key_ttl_command(&self, key: &NKey) -> Result<CommandBuffer, TranslatorError>;

    /// True iff `cmd` is this backend's get verb.
    fn is_load_key_command(&self, cmd: &CommandInfo) -> bool;
}

/// Creates the translator for a backend.
pub fn translator_for(ty: ConnectionType) -> Result<Box<dyn CommandTranslator>, TranslatorError> {
    let traits = lookup(ty)?;

    match ty {
        #[cfg(feature = "redis")]
        ConnectionType::Redis => Ok(Box::new(RedisTranslator::new(traits))),
        _ => Ok(Box::new(VerbTranslator::new(traits))),
    }
}

/// Incremental assembly of a space-delimited command.
#[derive(Debug)]
pub struct CommandBuilder {
    buf: BytesMut,
    /// Quote arguments the tokenizer would otherwise split or drop
    quote: bool,
}

impl CommandBuilder {
    /// Starts a command with `verb`. Arguments are appended verbatim.
    pub fn new(verb: &str) -> Self {
        let mut buf = BytesMut::with_capacity(64);
        buf.put_slice(verb.as_bytes());
        Self { buf, quote: false }
    }

    /// Starts a command with `verb`, quoting arguments where needed.
    pub fn quoting(verb: &str) -> Self {
        Self {
            quote: true,
            ..Self::new(verb)
        }
    }

    /// Appends a key, rejecting empty ones.
    pub fn key(self, key: &Key) -> Result<Self, TranslatorError> {
        if key.is_empty() {
            return Err(TranslatorError::EmptyKey);
        }
        Ok(self.arg(key.data()))
    }

    /// Appends one argument.
    pub fn arg(mut self, data: &[u8]) -> Self {
        self.buf.put_u8(b' ');
        if self.quote && needs_quotes(data) {
            self.buf.put_u8(b'"');
            for &b in data {
                if b == b'"' || b == b'\\' {
                    self.buf.put_u8(b'\\');
                }
                self.buf.put_u8(b);
            }
            self.buf.put_u8(b'"');
        } else {
            self.buf.put_slice(data);
        }
        self
    }

    /// Appends an integer in decimal.
    pub fn int(self, n: i64) -> Self {
        self.arg(n.to_string().as_bytes())
    }

    /// Appends a value: scalars as one argument, containers one argument per
    /// element (`score member` for sorted sets, `field value` for hashes).
    pub fn value(self, value: &Value) -> Self {
        match value {
            Value::Array(items) | Value::Set(items) => {
                items.iter().fold(self, |cmd, item| cmd.arg(item))
            }
            Value::ZSet(members) => members.iter().fold(self, |cmd, (member, score)| {
                cmd.arg(score.to_string().as_bytes()).arg(member)
            }),
            Value::Hash(pairs) => pairs
                .iter()
                .fold(self, |cmd, (field, value)| cmd.arg(field).arg(value)),
            scalar => self.arg(&scalar.to_bytes()),
        }
    }

    /// The finished command.
    pub fn finish(self) -> CommandBuffer {
        self.buf.freeze()
    }
}

fn needs_quotes(data: &[u8]) -> bool {
    data.is_empty()
        || data
            .iter()
            .any(|b| b.is_ascii_whitespace() || *b == b'"' || *b == b'\\')
}
