//! SSDB capabilities.

use super::{BackendTraits, ConnectionType};
use crate::translator::CommandVerbs;
use crate::types::{Field, ValueType};

pub const VERBS: CommandVerbs = CommandVerbs {
    get_key: "get",
    set_key: "set",
    delete_key: "del",
    rename_key: "rename",
    set_ttl: Some("expire"),
    get_ttl: Some("ttl"),
};

const COMMON_FIELDS: &[Field] = &[
    Field::new("version", ValueType::String),
    Field::new("links", ValueType::UInteger),
    Field::new("total_calls", ValueType::UInteger),
    Field::new("dbsize", ValueType::UInteger),
    Field::new("binlogs", ValueType::String),
];

pub const TRAITS: BackendTraits = BackendTraits {
    connection_type: ConnectionType::Ssdb,
    db_name: "SSDB",
    supported_types: &[ValueType::String],
    info_headers: &["Common"],
    info_fields: &[COMMON_FIELDS],
    verbs: VERBS,
};
