//! Backend Capability Registry
//!
//! Every supported store is described by a static [`BackendTraits`] record:
//! the value types it can hold, the sections and field schemas of its status
//! output, and the literal verbs its console understands.
//!
//! ## Build Selection
//!
//! Each backend sits behind a cargo feature of the same name (all enabled by
//! default). A backend that was compiled out has no registry entry, so
//! [`lookup`] reports [`BackendError::NotBuilt`] for it.
//!
//! ```text
//! ConnectionType ──lookup()──> &'static BackendTraits
//!                                  ├── supported_types
//!                                  ├── info_headers / info_fields
//!                                  └── verbs ──> translator
//! ```

pub mod embedded;
pub mod info;
#[cfg(feature = "memcached")]
pub mod memcached;
#[cfg(feature = "redis")]
pub mod redis;
#[cfg(feature = "ssdb")]
pub mod ssdb;

use crate::translator::CommandVerbs;
use crate::types::{Field, ValueType};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

pub use info::{InfoEntry, InfoSection, InfoSections};

/// Identifier of a backend store.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ConnectionType {
    Redis,
    Memcached,
    Ssdb,
    LevelDb,
    RocksDb,
    UnQLite,
    Lmdb,
}

impl ConnectionType {
    /// Every known backend, built or not.
    pub const ALL: [ConnectionType; 7] = [
        ConnectionType::Redis,
        ConnectionType::Memcached,
        ConnectionType::Ssdb,
        ConnectionType::LevelDb,
        ConnectionType::RocksDb,
        ConnectionType::UnQLite,
        ConnectionType::Lmdb,
    ];

    /// Lowercase identifier.
    pub fn as_str(&self) -> &'static str {
        match self {
            ConnectionType::Redis => "redis",
            ConnectionType::Memcached => "memcached",
            ConnectionType::Ssdb => "ssdb",
            ConnectionType::LevelDb => "leveldb",
            ConnectionType::RocksDb => "rocksdb",
            ConnectionType::UnQLite => "unqlite",
            ConnectionType::Lmdb => "lmdb",
        }
    }

    /// Backends compiled into this build.
    pub fn built() -> impl Iterator<Item = ConnectionType> {
        Self::ALL.into_iter().filter(|ty| lookup(*ty).is_ok())
    }
}

impl fmt::Display for ConnectionType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ConnectionType {
    type Err = BackendError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|ty| ty.as_str().eq_ignore_ascii_case(s))
            .ok_or_else(|| BackendError::UnknownName(s.to_string()))
    }
}

/// Errors raised by the backend registry.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum BackendError {
    /// The backend exists but its feature was disabled at build time
    #[error("backend not built: {0}")]
    NotBuilt(ConnectionType),

    /// No backend has this name
    #[error("unknown backend: {0}")]
    UnknownName(String),
}

/// Static capabilities of one backend.
#[derive(Debug, Clone, Copy)]
pub struct BackendTraits {
    pub connection_type: ConnectionType,
    /// Display name of the store
    pub db_name: &'static str,
    /// Value types the store can hold
    pub supported_types: &'static [ValueType],
    /// Status output sections, in display order
    pub info_headers: &'static [&'static str],
    /// Field schemas, one list per entry of `info_headers`
    pub info_fields: &'static [&'static [Field]],
    /// Literal console verbs
    pub verbs: CommandVerbs,
}

impl BackendTraits {
    pub fn supports(&self, value_type: ValueType) -> bool {
        self.supported_types.contains(&value_type)
    }

    /// Index of `header` in `info_headers`, ASCII case-insensitive.
    pub fn header_index(&self, header: &str) -> Option<usize> {
        self.info_headers
            .iter()
            .position(|h| h.eq_ignore_ascii_case(header))
    }
}

/// Resolves the traits of a backend.
#[allow(unreachable_patterns)]
pub fn lookup(ty: ConnectionType) -> Result<&'static BackendTraits, BackendError> {
    match ty {
        #[cfg(feature = "redis")]
        ConnectionType::Redis => Ok(&redis::TRAITS),
        #[cfg(feature = "memcached")]
        ConnectionType::Memcached => Ok(&memcached::TRAITS),
        #[cfg(feature = "ssdb")]
        ConnectionType::Ssdb => Ok(&ssdb::TRAITS),
        #[cfg(feature = "leveldb")]
        ConnectionType::LevelDb => Ok(&embedded::LEVELDB_TRAITS),
        #[cfg(feature = "rocksdb")]
        ConnectionType::RocksDb => Ok(&embedded::ROCKSDB_TRAITS),
        #[cfg(feature = "unqlite")]
        ConnectionType::UnQLite => Ok(&embedded::UNQLITE_TRAITS),
        #[cfg(feature = "lmdb")]
        ConnectionType::Lmdb => Ok(&embedded::LMDB_TRAITS),
        _ => Err(BackendError::NotBuilt(ty)),
    }
}

/// Like [`lookup`], for callers that only ever pass built backends.
///
/// # Panics
///
/// Panics if `ty` was compiled out; that is a build configuration defect.
fn expect_built(ty: ConnectionType) -> &'static BackendTraits {
    match lookup(ty) {
        Ok(traits) => traits,
        Err(e) => unreachable!("{}", e),
    }
}

/// Value types the backend can store.
pub fn supported_types_from_type(ty: ConnectionType) -> Vec<ValueType> {
    expect_built(ty).supported_types.to_vec()
}

/// Status output section names of the backend.
pub fn info_headers_from_type(ty: ConnectionType) -> Vec<&'static str> {
    expect_built(ty).info_headers.to_vec()
}

/// Field schemas of the backend's status output, one list per header.
pub fn info_fields_from_type(ty: ConnectionType) -> Vec<Vec<Field>> {
    expect_built(ty)
        .info_fields
        .iter()
        .map(|fields| fields.to_vec())
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_every_backend_is_built_by_default() {
        assert_eq!(ConnectionType::built().count(), ConnectionType::ALL.len());
    }

    #[test]
    fn test_headers_and_fields_line_up() {
        for ty in ConnectionType::built() {
            let traits = lookup(ty).unwrap();
            assert_eq!(traits.connection_type, ty);
            assert_eq!(
                info_headers_from_type(ty).len(),
                info_fields_from_type(ty).len(),
                "{}",
                ty
            );
            assert!(!supported_types_from_type(ty).is_empty());
        }
    }

    #[test]
    fn test_supported_types() {
        let redis = supported_types_from_type(ConnectionType::Redis);
        assert!(redis.contains(&ValueType::Hash));
        assert!(redis.contains(&ValueType::String));

        assert_eq!(
            supported_types_from_type(ConnectionType::Memcached),
            vec![ValueType::String]
        );
    }

    #[test]
    fn test_parse_connection_type() {
        assert_eq!("redis".parse::<ConnectionType>().unwrap(), ConnectionType::Redis);
        assert_eq!("LevelDB".parse::<ConnectionType>().unwrap(), ConnectionType::LevelDb);
        assert_eq!(
            "mongodb".parse::<ConnectionType>(),
            Err(BackendError::UnknownName("mongodb".to_string()))
        );
        for ty in ConnectionType::ALL {
            assert_eq!(ty.to_string().parse::<ConnectionType>().unwrap(), ty);
        }
    }

    #[test]
    fn test_header_index() {
        let traits = lookup(ConnectionType::Redis).unwrap();
        assert_eq!(traits.header_index("server"), Some(0));
        assert_eq!(traits.header_index("Nope"), None);
    }
}
