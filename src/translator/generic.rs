//! Verb table driven translator.
//!
//! Serves every backend whose commands are `<verb> <key> [args]`: Memcached,
//! SSDB and the embedded stores. The backend's [`BackendTraits`] supply the
//! verbs and the set of storable value types.

use super::{CommandBuffer, CommandBuilder, CommandTranslator, TranslatorError};
use crate::backend::BackendTraits;
use crate::commands::CommandInfo;
use crate::types::{Key, NDbKValue, NKey, Ttl, ValueType};
use tracing::debug;

/// Translator assembling commands from a backend's verb table.
#[derive(Debug, Clone, Copy)]
pub struct VerbTranslator {
    traits: &'static BackendTraits,
    quote: bool,
}

impl VerbTranslator {
    /// Translator that emits arguments verbatim.
    pub fn new(traits: &'static BackendTraits) -> Self {
        Self {
            traits,
            quote: false,
        }
    }

    /// Translator that quotes arguments the way the console tokenizer reads them.
    pub fn quoting(traits: &'static BackendTraits) -> Self {
        Self {
            traits,
            quote: true,
        }
    }

    /// The backend this translator serves.
    pub fn traits(&self) -> &'static BackendTraits {
        self.traits
    }

    /// Starts a command with `verb` in this translator's quoting mode.
    pub(crate) fn command(&self, verb: &str) -> CommandBuilder {
        if self.quote {
            CommandBuilder::quoting(verb)
        } else {
            CommandBuilder::new(verb)
        }
    }

    /// Fails unless the backend can store `value_type`.
    pub(crate) fn check_value_type(&self, value_type: ValueType) -> Result<(), TranslatorError> {
        if self.traits.supports(value_type) {
            return Ok(());
        }

        debug!(backend = self.traits.db_name, %value_type, "unsupported value type");
        Err(TranslatorError::UnsupportedValueType {
            backend: self.traits.db_name,
            value_type,
        })
    }

    fn ttl_verb(&self, verb: Option<&'static str>) -> Result<&'static str, TranslatorError> {
        verb.ok_or_else(|| {
            debug!(backend = self.traits.db_name, "key expiry not supported");
            TranslatorError::UnsupportedOperation {
                backend: self.traits.db_name,
                operation: "key expiry",
            }
        })
    }
}

impl CommandTranslator for VerbTranslator {
    fn db_name(&self) -> &'static str {
        self.traits.db_name
    }

    fn create_key_command(&self, key: &NDbKValue) -> Result<CommandBuffer, TranslatorError> {
        self.check_value_type(key.value_type())?;

        Ok(self.command(self.traits.verbs.set_key)
            .key(key.key().key())?
            .value(key.value())
            .finish())
    }

    fn load_key_command(
        &self,
        key: &NKey,
        _value_type: ValueType,
    ) -> Result<CommandBuffer, TranslatorError> {
        Ok(self.command(self.traits.verbs.get_key)
            .key(key.key())?
            .finish())
    }

    fn delete_key_command(&self, key: &NKey) -> Result<CommandBuffer, TranslatorError> {
        Ok(self.command(self.traits.verbs.delete_key)
            .key(key.key())?
            .finish())
    }

    fn rename_key_command(
        &self,
        key: &NKey,
        new_name: &Key,
    ) -> Result<CommandBuffer, TranslatorError> {
        Ok(self.command(self.traits.verbs.rename_key)
            .key(key.key())?
            .key(new_name)?
            .finish())
    }

    fn change_key_ttl_command(
        &self,
        key: &NKey,
        ttl: Ttl,
    ) -> Result<CommandBuffer, TranslatorError> {
        let verb = self.ttl_verb(self.traits.verbs.set_ttl)?;
        Ok(self.command(verb)
            .key(key.key())?
            .int(ttl as i64)
            .finish())
    }

    fn load_key_ttl_command(&self, key: &NKey) -> Result<CommandBuffer, TranslatorError> {
        let verb = self.ttl_verb(self.traits.verbs.get_ttl)?;
        Ok(self.command(verb).key(key.key())?.finish())
    }

    fn is_load_key_command(&self, cmd: &CommandInfo) -> bool {
        cmd.is_equal_name(self.traits.verbs.get_key.as_bytes())
    }
}
