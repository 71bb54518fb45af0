//! Embedded store capabilities: LevelDB, RocksDB, UnQLite and LMDB.
//!
//! These stores are linked into the client rather than reached over a
//! socket. They hold plain strings and have no notion of key expiry, so their
//! verb tables carry no TTL verbs.

#[cfg(any(
    feature = "leveldb",
    feature = "rocksdb",
    feature = "unqlite",
    feature = "lmdb"
))]
use {
    super::{BackendTraits, ConnectionType},
    crate::translator::CommandVerbs,
    crate::types::{Field, ValueType},
};

/// Compaction statistics shared by the LSM stores.
#[cfg(any(feature = "leveldb", feature = "rocksdb"))]
const LSM_STATS_FIELDS: &[Field] = &[
    Field::new("compactions_level", ValueType::UInteger),
    Field::new("file_size_mb", ValueType::UInteger),
    Field::new("time_sec", ValueType::UInteger),
    Field::new("read_mb", ValueType::UInteger),
    Field::new("write_mb", ValueType::UInteger),
];

#[cfg(any(feature = "unqlite", feature = "lmdb"))]
const FILE_STATS_FIELDS: &[Field] = &[Field::new("file_name", ValueType::String)];

#[cfg(feature = "leveldb")]
pub const LEVELDB_TRAITS: BackendTraits = BackendTraits {
    connection_type: ConnectionType::LevelDb,
    db_name: "LevelDB",
    supported_types: &[ValueType::String],
    info_headers: &["Stats"],
    info_fields: &[LSM_STATS_FIELDS],
    verbs: CommandVerbs::without_ttl("get", "put", "del", "rename"),
};

#[cfg(feature = "rocksdb")]
pub const ROCKSDB_TRAITS: BackendTraits = BackendTraits {
    connection_type: ConnectionType::RocksDb,
    db_name: "RocksDB",
    supported_types: &[ValueType::String],
    info_headers: &["Stats"],
    info_fields: &[LSM_STATS_FIELDS],
    verbs: CommandVerbs::without_ttl("get", "put", "del", "rename"),
};

#[cfg(feature = "unqlite")]
pub const UNQLITE_TRAITS: BackendTraits = BackendTraits {
    connection_type: ConnectionType::UnQLite,
    db_name: "UnQLite",
    supported_types: &[ValueType::String],
    info_headers: &["Stats"],
    info_fields: &[FILE_STATS_FIELDS],
    verbs: CommandVerbs::without_ttl("get", "set", "del", "rename"),
};

#[cfg(feature = "lmdb")]
pub const LMDB_TRAITS: BackendTraits = BackendTraits {
    connection_type: ConnectionType::Lmdb,
    db_name: "LMDB",
    supported_types: &[ValueType::String],
    info_headers: &["Stats"],
    info_fields: &[FILE_STATS_FIELDS],
    verbs: CommandVerbs::without_ttl("get", "put", "del", "rename"),
};
