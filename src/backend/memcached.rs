//! Memcached capabilities.
//!
//! Memcached reports its status as a flat `stats` listing, so everything
//! lives under a single section.

use super::{BackendTraits, ConnectionType};
use crate::translator::CommandVerbs;
use crate::types::{Field, ValueType};

use crate::types::ValueType::{Double, Integer, String as Str, UInteger};

pub const VERBS: CommandVerbs = CommandVerbs {
    get_key: "get",
    set_key: "set",
    delete_key: "delete",
    rename_key: "rename",
    set_ttl: Some("expire"),
    get_ttl: Some("ttl"),
};

const COMMON_FIELDS: &[Field] = &[
    Field::new("pid", UInteger),
    Field::new("uptime", UInteger),
    Field::new("time", UInteger),
    Field::new("version", Str),
    Field::new("pointer_size", Integer),
    Field::new("rusage_user", Double),
    Field::new("rusage_system", Double),
    Field::new("curr_items", UInteger),
    Field::new("total_items", UInteger),
    Field::new("bytes", UInteger),
    Field::new("curr_connections", UInteger),
    Field::new("total_connections", UInteger),
    Field::new("connection_structures", UInteger),
    Field::new("cmd_get", UInteger),
    Field::new("cmd_set", UInteger),
    Field::new("get_hits", UInteger),
    Field::new("get_misses", UInteger),
    Field::new("evictions", UInteger),
    Field::new("bytes_read", UInteger),
    Field::new("bytes_written", UInteger),
    Field::new("limit_maxbytes", UInteger),
    Field::new("threads", UInteger),
];

pub const TRAITS: BackendTraits = BackendTraits {
    connection_type: ConnectionType::Memcached,
    db_name: "Memcached",
    supported_types: &[ValueType::String],
    info_headers: &["Common"],
    info_fields: &[COMMON_FIELDS],
    verbs: VERBS,
};
