//! Redis translator.
//!
//! Redis stores several value kinds and each has its own write and read
//! command:
//!
//! | Type   | Create                          | Load                          |
//! |--------|---------------------------------|-------------------------------|
//! | string | `SET key value`                 | `GET key`                     |
//! | list   | `RPUSH key a b c`               | `LRANGE key 0 -1`             |
//! | set    | `SADD key a b c`                | `SMEMBERS key`                |
//! | zset   | `ZADD key 1 a 2 b`              | `ZRANGE key 0 -1 WITHSCORES`  |
//! | hash   | `HMSET key f1 v1 f2 v2`         | `HGETALL key`                 |
//!
//! Everything else is the plain verb table. Arguments are quoted where the
//! Redis command line would otherwise split or drop them, and container
//! writes need at least one element.

use super::{CommandBuffer, CommandTranslator, TranslatorError, VerbTranslator};
use crate::backend::redis::typed;
use crate::backend::BackendTraits;
use crate::commands::CommandInfo;
use crate::types::{Key, NDbKValue, NKey, Ttl, ValueType};

/// Type aware translator for Redis.
#[derive(Debug, Clone, Copy)]
pub struct RedisTranslator {
    verbs: VerbTranslator,
}

impl RedisTranslator {
    /// Translator over the Redis verb table in `traits`.
    pub fn new(traits: &'static BackendTraits) -> Self {
        Self {
            verbs: VerbTranslator::quoting(traits),
        }
    }
}

impl CommandTranslator for RedisTranslator {
    fn db_name(&self) -> &'static str {
        self.verbs.db_name()
    }

    fn create_key_command(&self, key: &NDbKValue) -> Result<CommandBuffer, TranslatorError> {
        let value_type = key.value_type();
        self.verbs.check_value_type(value_type)?;

        let verb = match value_type {
            ValueType::Array => typed::LIST_PUSH,
            ValueType::Set => typed::SET_ADD,
            ValueType::ZSet => typed::ZSET_ADD,
            ValueType::Hash => typed::HASH_SET,
            _ => return self.verbs.create_key_command(key),
        };

        if key.value().is_empty_container() {
            return Err(TranslatorError::EmptyValue {
                backend: self.verbs.db_name(),
                value_type,
            });
        }

        Ok(self
            .verbs
            .command(verb)
            .key(key.key().key())?
            .value(key.value())
            .finish())
    }

    fn load_key_command(
        &self,
        key: &NKey,
        value_type: ValueType,
    ) -> Result<CommandBuffer, TranslatorError> {
        let builder = match value_type {
            ValueType::Array => self
                .verbs
                .command(typed::LIST_RANGE)
                .key(key.key())?
                .arg(b"0")
                .arg(b"-1"),
            ValueType::Set => self.verbs.command(typed::SET_MEMBERS).key(key.key())?,
            ValueType::ZSet => self
                .verbs
                .command(typed::ZSET_RANGE)
                .key(key.key())?
                .arg(b"0")
                .arg(b"-1")
                .arg(b"WITHSCORES"),
            ValueType::Hash => self.verbs.command(typed::HASH_GET_ALL).key(key.key())?,
            _ => return self.verbs.load_key_command(key, value_type),
        };

        Ok(builder.finish())
    }

    fn delete_key_command(&self, key: &NKey) -> Result<CommandBuffer, TranslatorError> {
        self.verbs.delete_key_command(key)
    }

    fn rename_key_command(
        &self,
        key: &NKey,
        new_name: &Key,
    ) -> Result<CommandBuffer, TranslatorError> {
        self.verbs.rename_key_command(key, new_name)
    }

    fn change_key_ttl_command(
        &self,
        key: &NKey,
        ttl: Ttl,
    ) -> Result<CommandBuffer, TranslatorError> {
        self.verbs.change_key_ttl_command(key, ttl)
    }

    fn load_key_ttl_command(&self, key: &NKey) -> Result<CommandBuffer, TranslatorError> {
        self.verbs.load_key_ttl_command(key)
    }

    fn is_load_key_command(&self, cmd: &CommandInfo) -> bool {
        self.verbs.is_load_key_command(cmd)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::backend::{lookup, ConnectionType};
    use crate::commands::UNDEFINED_SINCE;
    use crate::console::tokenize;
    use crate::types::Value;
    use bytes::Bytes;

    fn translator() -> RedisTranslator {
        RedisTranslator::new(lookup(ConnectionType::Redis).unwrap())
    }

    fn kv(value: Value) -> NDbKValue {
        NDbKValue::new(NKey::new("foo"), value)
    }

    #[test]
    fn test_string_commands() {
        let t = translator();
        let foo = NKey::new("foo");

        assert_eq!(
            t.create_key_command(&kv(Value::from("bar"))).unwrap(),
            Bytes::from("SET foo bar")
        );
        assert_eq!(
            t.load_key_command(&foo, ValueType::String).unwrap(),
            Bytes::from("GET foo")
        );
        assert_eq!(t.delete_key_command(&foo).unwrap(), Bytes::from("DEL foo"));
        assert_eq!(
            t.rename_key_command(&foo, &Key::from("bar")).unwrap(),
            Bytes::from("RENAME foo bar")
        );
        assert_eq!(
            t.change_key_ttl_command(&foo, 120).unwrap(),
            Bytes::from("EXPIRE foo 120")
        );
        assert_eq!(t.load_key_ttl_command(&foo).unwrap(), Bytes::from("TTL foo"));
    }

    #[test]
    fn test_container_create() {
        let t = translator();
        let list = Value::Array(vec![Bytes::from("a"), Bytes::from("b")]);
        let set = Value::Set(vec![Bytes::from("x")]);
        let zset = Value::ZSet(vec![(Bytes::from("m"), 3.0)]);
        let hash = Value::Hash(vec![(Bytes::from("f"), Bytes::from("v"))]);

        assert_eq!(t.create_key_command(&kv(list)).unwrap(), Bytes::from("RPUSH foo a b"));
        assert_eq!(t.create_key_command(&kv(set)).unwrap(), Bytes::from("SADD foo x"));
        assert_eq!(t.create_key_command(&kv(zset)).unwrap(), Bytes::from("ZADD foo 3 m"));
        assert_eq!(t.create_key_command(&kv(hash)).unwrap(), Bytes::from("HMSET foo f v"));
    }

    #[test]
    fn test_container_load() {
        let t = translator();
        let foo = NKey::new("foo");

        assert_eq!(
            t.load_key_command(&foo, ValueType::Array).unwrap(),
            Bytes::from("LRANGE foo 0 -1")
        );
        assert_eq!(
            t.load_key_command(&foo, ValueType::Set).unwrap(),
            Bytes::from("SMEMBERS foo")
        );
        assert_eq!(
            t.load_key_command(&foo, ValueType::ZSet).unwrap(),
            Bytes::from("ZRANGE foo 0 -1 WITHSCORES")
        );
        assert_eq!(
            t.load_key_command(&foo, ValueType::Hash).unwrap(),
            Bytes::from("HGETALL foo")
        );
    }

    #[test]
    fn test_scalar_numbers_are_unsupported() {
        let err = translator().create_key_command(&kv(Value::Integer(1))).unwrap_err();
        assert!(matches!(
            err,
            TranslatorError::UnsupportedValueType { value_type: ValueType::Integer, .. }
        ));
    }

    #[test]
    fn test_is_load_key_command_only_matches_get() {
        let t = translator();
        let info = |name: &'static str| CommandInfo::new(name, "", "", UNDEFINED_SINCE, "", 1, 0);

        assert!(t.is_load_key_command(&info("GET")));
        assert!(t.is_load_key_command(&info("get")));
        for other in ["SET", "DEL", "RENAME", "EXPIRE", "TTL", "HGETALL", "LRANGE"] {
            assert!(!t.is_load_key_command(&info(other)), "{}", other);
        }
    }

    #[test]
    fn test_empty_containers_rejected() {
        let t = translator();
        for value in [
            Value::Array(vec![]),
            Value::Set(vec![]),
            Value::ZSet(vec![]),
            Value::Hash(vec![]),
        ] {
            let value_type = value.value_type();
            assert_eq!(
                t.create_key_command(&kv(value)),
                Err(TranslatorError::EmptyValue { backend: "Redis", value_type })
            );
        }
    }

    #[test]
    fn test_arguments_survive_tokenizing() {
        let t = translator();
        let argv = |cmd: CommandBuffer| -> Vec<Bytes> { tokenize(&cmd).unwrap() };
        let b = |s: &str| Bytes::copy_from_slice(s.as_bytes());

        for value in ["hello world", "", r#"say "hi""#, r"back\slash", "tab\there"] {
            let cmd = t
                .create_key_command(&NDbKValue::new(NKey::new("my key"), value))
                .unwrap();
            assert_eq!(argv(cmd), vec![b("SET"), b("my key"), b(value)], "{:?}", value);
        }

        let hash = Value::Hash(vec![(b("first name"), b("Ada")), (b("note"), b(""))]);
        let cmd = t.create_key_command(&kv(hash)).unwrap();
        assert_eq!(
            argv(cmd),
            vec![b("HMSET"), b("foo"), b("first name"), b("Ada"), b("note"), b("")]
        );

        let zset = Value::ZSet(vec![(b("a b"), 2.5)]);
        let cmd = t.create_key_command(&kv(zset)).unwrap();
        assert_eq!(argv(cmd), vec![b("ZADD"), b("foo"), b("2.5"), b("a b")]);

        let cmd = t.rename_key_command(&NKey::new("old key"), &Key::from("new\"key")).unwrap();
        assert_eq!(argv(cmd), vec![b("RENAME"), b("old key"), b("new\"key")]);
    }

    #[test]
    fn test_empty_key_rejected_for_containers() {
        let t = translator();
        assert_eq!(
            t.load_key_command(&NKey::new(""), ValueType::Hash),
            Err(TranslatorError::EmptyKey)
        );
    }
}
