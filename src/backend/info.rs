//! Typed status output.
//!
//! Backends report their status as text. Redis groups `name:value` lines
//! under `# Header` lines, Memcached prints `STAT name value` lines, the
//! embedded stores print bare `name value` lines. [`InfoSections::parse`]
//! accepts all three and types every value by the backend's field schemas.
//!
//! ## Rules
//!
//! - Lines before the first header belong to the first section.
//! - A header that the backend does not declare skips its lines.
//! - A field missing from the schema, or whose text does not parse as its
//!   declared type, is kept as a string.

use super::{lookup, BackendError, ConnectionType};
use crate::types::{Field, ServerInfo, Value, ValueType};
use bytes::Bytes;

/// One `name: value` pair of a status section.
#[derive(Debug, Clone, PartialEq)]
pub struct InfoEntry {
    pub name: String,
    /// Declared type, `None` for fields outside the schema
    pub field: Option<Field>,
    pub value: Value,
}

/// All entries reported under one header.
#[derive(Debug, Clone, PartialEq)]
pub struct InfoSection {
    pub header: &'static str,
    pub entries: Vec<InfoEntry>,
}

impl InfoSection {
    pub fn get(&self, name: &str) -> Option<&Value> {
        self.entries
            .iter()
            .find(|entry| entry.name == name)
            .map(|entry| &entry.value)
    }
}

/// A backend's parsed status output.
#[derive(Debug, Clone, PartialEq)]
pub struct InfoSections {
    connection_type: ConnectionType,
    /// One section per declared header, in declaration order
    sections: Vec<InfoSection>,
}

impl InfoSections {
    /// Parses status text reported by a `ty` server.
    pub fn parse(ty: ConnectionType, text: &str) -> Result<Self, BackendError> {
        let traits = lookup(ty)?;

        let mut sections: Vec<InfoSection> = traits
            .info_headers
            .iter()
            .map(|header| InfoSection {
                header: *header,
                entries: Vec::new(),
            })
            .collect();

        let mut current = if sections.is_empty() { None } else { Some(0) };

        for line in text.lines() {
            let line = line.trim();
            if line.is_empty() {
                continue;
            }

            if let Some(header) = line.strip_prefix('#') {
                current = traits.header_index(header.trim());
                continue;
            }

            let Some(index) = current else {
                continue;
            };

            let Some((name, raw)) = split_entry(line) else {
                continue;
            };

            let field = traits.info_fields[index]
                .iter()
                .find(|field| field.name == name)
                .copied();

            let value = match field {
                Some(field) => parse_value(field.value_type, raw),
                None => Value::string(Bytes::copy_from_slice(raw.as_bytes())),
            };

            sections[index].entries.push(InfoEntry {
                name: name.to_string(),
                field,
                value,
            });
        }

        Ok(Self {
            connection_type: ty,
            sections,
        })
    }

    pub fn sections(&self) -> &[InfoSection] {
        &self.sections
    }

    /// The section named `header`, ASCII case-insensitive.
    pub fn section(&self, header: &str) -> Option<&InfoSection> {
        self.sections
            .iter()
            .find(|section| section.header.eq_ignore_ascii_case(header))
    }

    /// Looks up `name` under `header`.
    pub fn get(&self, header: &str, name: &str) -> Option<&Value> {
        self.section(header)?.get(name)
    }
}

impl ServerInfo for InfoSections {
    fn connection_type(&self) -> ConnectionType {
        self.connection_type
    }
}

/// Splits `name:value`, `STAT name value` or `name value`.
///
/// Memcached stat names may contain `:` (`items:1:number`), so `STAT` lines
/// only split on whitespace.
fn split_entry(line: &str) -> Option<(&str, &str)> {
    let (name, value) = match line.strip_prefix("STAT ") {
        Some(stat) => stat.trim_start().split_once(char::is_whitespace)?,
        None => line
            .split_once(':')
            .or_else(|| line.split_once(char::is_whitespace))?,
    };
    Some((name.trim(), value.trim()))
}

fn parse_value(value_type: ValueType, raw: &str) -> Value {
    let parsed = match value_type {
        ValueType::Integer => raw.parse().ok().map(Value::Integer),
        ValueType::UInteger => raw.parse().ok().map(Value::UInteger),
        ValueType::Double => raw.parse().ok().map(Value::Double),
        ValueType::Boolean => match raw {
            "1" | "true" | "yes" => Some(Value::Boolean(true)),
            "0" | "false" | "no" => Some(Value::Boolean(false)),
            _ => None,
        },
        _ => None,
    };

    parsed.unwrap_or_else(|| Value::string(Bytes::copy_from_slice(raw.as_bytes())))
}

#[cfg(test)]
mod tests {
    use super::*;

    const REDIS_INFO: &str = "# Server\r\n\
                              redis_version:7.2.4\r\n\
                              uptime_in_seconds:3600\r\n\
                              \r\n\
                              # Memory\r\n\
                              used_memory:1024\r\n\
                              mem_fragmentation_ratio:1.25\r\n\
                              \r\n\
                              # Modules\r\n\
                              module:name=search\r\n\
                              \r\n\
                              # Stats\r\n\
                              keyspace_hits:oops\r\n\
                              custom_counter:5\r\n";

    #[test]
    fn test_parse_redis_sections() {
        let info = InfoSections::parse(ConnectionType::Redis, REDIS_INFO).unwrap();

        assert_eq!(info.sections().len(), 8);
        assert_eq!(
            info.get("Server", "redis_version"),
            Some(&Value::string(Bytes::from("7.2.4")))
        );
        assert_eq!(info.get("server", "uptime_in_seconds"), Some(&Value::UInteger(3600)));
        assert_eq!(info.get("Memory", "used_memory"), Some(&Value::UInteger(1024)));
        assert_eq!(
            info.get("Memory", "mem_fragmentation_ratio"),
            Some(&Value::Double(1.25))
        );
        assert_eq!(info.connection_type(), ConnectionType::Redis);
    }

    #[test]
    fn test_undeclared_header_is_skipped() {
        let info = InfoSections::parse(ConnectionType::Redis, REDIS_INFO).unwrap();
        assert!(info.section("Modules").is_none());
        assert!(info
            .sections()
            .iter()
            .all(|s| s.entries.iter().all(|e| e.name != "module")));
    }

    #[test]
    fn test_unparseable_and_unknown_fields_are_strings() {
        let info = InfoSections::parse(ConnectionType::Redis, REDIS_INFO).unwrap();
        let stats = info.section("Stats").unwrap();

        assert_eq!(stats.get("keyspace_hits"), Some(&Value::string(Bytes::from("oops"))));
        let custom = stats.entries.iter().find(|e| e.name == "custom_counter").unwrap();
        assert!(custom.field.is_none());
        assert_eq!(custom.value, Value::string(Bytes::from("5")));
    }

    #[test]
    fn test_parse_memcached_stats() {
        let text = "STAT pid 4242\r\nSTAT version 1.6.21\r\nSTAT rusage_user 0.5\r\nEND\r\n";
        let info = InfoSections::parse(ConnectionType::Memcached, text).unwrap();

        assert_eq!(info.get("Common", "pid"), Some(&Value::UInteger(4242)));
        assert_eq!(
            info.get("Common", "version"),
            Some(&Value::string(Bytes::from("1.6.21")))
        );
        assert_eq!(info.get("Common", "rusage_user"), Some(&Value::Double(0.5)));
        // "END" has no value and is dropped
        assert_eq!(info.section("Common").unwrap().entries.len(), 3);
    }

    #[test]
    fn test_memcached_stat_names_keep_colons() {
        let text = "STAT items:1:number 5\r\nSTAT slab:1:chunk_size 96\r\nSTAT threads 4\r\n";
        let info = InfoSections::parse(ConnectionType::Memcached, text).unwrap();
        let common = info.section("Common").unwrap();

        let names: Vec<&str> = common.entries.iter().map(|e| e.name.as_str()).collect();
        assert_eq!(names, vec!["items:1:number", "slab:1:chunk_size", "threads"]);
        assert_eq!(common.get("items:1:number"), Some(&Value::string(Bytes::from("5"))));
        assert_eq!(common.get("threads"), Some(&Value::UInteger(4)));
    }

    #[test]
    fn test_parse_embedded_stats() {
        let text = "compactions_level 2\nfile_size_mb 16\n";
        let info = InfoSections::parse(ConnectionType::LevelDb, text).unwrap();
        assert_eq!(info.get("Stats", "compactions_level"), Some(&Value::UInteger(2)));
        assert_eq!(info.get("Stats", "file_size_mb"), Some(&Value::UInteger(16)));
    }

    #[test]
    fn test_parse_boolean() {
        assert_eq!(parse_value(ValueType::Boolean, "1"), Value::Boolean(true));
        assert_eq!(parse_value(ValueType::Boolean, "no"), Value::Boolean(false));
        assert_eq!(
            parse_value(ValueType::Boolean, "maybe"),
            Value::string(Bytes::from("maybe"))
        );
    }
}
