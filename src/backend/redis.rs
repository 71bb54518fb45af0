//! Redis capabilities.

use super::{BackendTraits, ConnectionType};
use crate::translator::CommandVerbs;
use crate::types::{Field, ValueType};

use crate::types::ValueType::{Double, String as Str, UInteger};

pub const VERBS: CommandVerbs = CommandVerbs {
    get_key: "GET",
    set_key: "SET",
    delete_key: "DEL",
    rename_key: "RENAME",
    set_ttl: Some("EXPIRE"),
    get_ttl: Some("TTL"),
};

/// Type specific verbs used in place of `GET`/`SET` for container values.
pub mod typed {
    pub const LIST_PUSH: &str = "RPUSH";
    pub const LIST_RANGE: &str = "LRANGE";
    pub const SET_ADD: &str = "SADD";
    pub const SET_MEMBERS: &str = "SMEMBERS";
    pub const ZSET_ADD: &str = "ZADD";
    pub const ZSET_RANGE: &str = "ZRANGE";
    pub const HASH_SET: &str = "HMSET";
    pub const HASH_GET_ALL: &str = "HGETALL";
}

const SERVER_FIELDS: &[Field] = &[
    Field::new("redis_version", Str),
    Field::new("redis_git_sha1", Str),
    Field::new("redis_git_dirty", Str),
    Field::new("redis_mode", Str),
    Field::new("os", Str),
    Field::new("arch_bits", UInteger),
    Field::new("multiplexing_api", Str),
    Field::new("gcc_version", Str),
    Field::new("process_id", UInteger),
    Field::new("run_id", Str),
    Field::new("tcp_port", UInteger),
    Field::new("uptime_in_seconds", UInteger),
    Field::new("uptime_in_days", UInteger),
    Field::new("lru_clock", UInteger),
];

const CLIENTS_FIELDS: &[Field] = &[
    Field::new("connected_clients", UInteger),
    Field::new("client_longest_output_list", UInteger),
    Field::new("client_biggest_input_buf", UInteger),
    Field::new("blocked_clients", UInteger),
];

const MEMORY_FIELDS: &[Field] = &[
    Field::new("used_memory", UInteger),
    Field::new("used_memory_human", Str),
    Field::new("used_memory_rss", UInteger),
    Field::new("used_memory_peak", UInteger),
    Field::new("used_memory_peak_human", Str),
    Field::new("used_memory_lua", UInteger),
    Field::new("mem_fragmentation_ratio", Double),
    Field::new("mem_allocator", Str),
];

const PERSISTENCE_FIELDS: &[Field] = &[
    Field::new("loading", UInteger),
    Field::new("rdb_changes_since_last_save", UInteger),
    Field::new("rdb_bgsave_in_progress", UInteger),
    Field::new("rdb_last_save_time", UInteger),
    Field::new("rdb_last_bgsave_status", Str),
    Field::new("rdb_last_bgsave_time_sec", UInteger),
    Field::new("aof_enabled", UInteger),
    Field::new("aof_rewrite_in_progress", UInteger),
    Field::new("aof_last_bgrewrite_status", Str),
];

const STATS_FIELDS: &[Field] = &[
    Field::new("total_connections_received", UInteger),
    Field::new("total_commands_processed", UInteger),
    Field::new("instantaneous_ops_per_sec", UInteger),
    Field::new("rejected_connections", UInteger),
    Field::new("expired_keys", UInteger),
    Field::new("evicted_keys", UInteger),
    Field::new("keyspace_hits", UInteger),
    Field::new("keyspace_misses", UInteger),
    Field::new("pubsub_channels", UInteger),
    Field::new("pubsub_patterns", UInteger),
    Field::new("latest_fork_usec", UInteger),
];

const REPLICATION_FIELDS: &[Field] = &[
    Field::new("role", Str),
    Field::new("connected_slaves", UInteger),
];

const CPU_FIELDS: &[Field] = &[
    Field::new("used_cpu_sys", Double),
    Field::new("used_cpu_user", Double),
    Field::new("used_cpu_sys_children", Double),
    Field::new("used_cpu_user_children", Double),
];

const KEYSPACE_FIELDS: &[Field] = &[];

pub const TRAITS: BackendTraits = BackendTraits {
    connection_type: ConnectionType::Redis,
    db_name: "Redis",
    supported_types: &[
        ValueType::String,
        ValueType::Array,
        ValueType::Set,
        ValueType::ZSet,
        ValueType::Hash,
    ],
    info_headers: &[
        "Server",
        "Clients",
        "Memory",
        "Persistence",
        "Stats",
        "Replication",
        "Cpu",
        "Keyspace",
    ],
    info_fields: &[
        SERVER_FIELDS,
        CLIENTS_FIELDS,
        MEMORY_FIELDS,
        PERSISTENCE_FIELDS,
        STATS_FIELDS,
        REPLICATION_FIELDS,
        CPU_FIELDS,
        KEYSPACE_FIELDS,
    ],
    verbs: VERBS,
};
