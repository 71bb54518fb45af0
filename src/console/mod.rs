//! Interactive Console
//!
//! The console is the user-facing front of the translation layer: each typed
//! line is tokenized, dispatched through a [`CommandHandler`] whose table is
//! built from the backend's verbs, and the handlers answer with the wire
//! command the backend would receive.
//!
//! ## Session Lifecycle
//!
//! ```text
//! 1. ConsoleSession::new(backend)
//!        │
//!        ▼
//! 2. ┌──────────────────────────────┐
//!    │  Read line                   │
//!    │        │                     │
//!    │        ▼                     │
//!    │  tokenize() ──> argv         │
//!    │        │                     │
//!    │        ▼                     │
//!    │  CommandHandler::execute     │
//!    │        │                     │
//!    │        ▼                     │
//!    │  Write replies               │
//!    │        │                     │
//!    │   [Loop back]                │
//!    └──────────────────────────────┘
//!        │
//!        ▼
//! 3. EOF or `quit`
//! ```

pub mod session;
pub mod tokenizer;

use crate::backend::{lookup, BackendTraits, ConnectionType};
use crate::commands::{CommandError, CommandHandler, CommandHolder, CommandInfo, Reply};
use crate::commands::{version, UNDEFINED_SINCE};
use crate::translator::{translator_for, CommandTranslator, TranslatorError};
use crate::types::{Key, NDbKValue, NKey, Ttl, Value, ValueType};
use anyhow::anyhow;
use bytes::Bytes;

pub use session::{run_session, ConsoleSession};
pub use tokenizer::{tokenize, TokenizeError};

/// Version that introduced the console's own commands.
const CONSOLE_SINCE: u32 = version(0, 1, 0);

/// Handler context shared by the console commands.
pub struct Console {
    connection_type: ConnectionType,
    translator: Box<dyn CommandTranslator>,
    /// Metadata of the command table, for `help`
    commands: Vec<CommandInfo>,
    /// Set by `quit`
    quit: bool,
}

impl Console {
    /// Creates the context and its command table for `ty`.
    pub fn new(ty: ConnectionType) -> Result<(Self, CommandHandler<Console>), anyhow::Error> {
        let traits = lookup(ty)?;
        let translator = translator_for(ty)?;
        let handler = CommandHandler::new(console_commands(traits))?;

        let console = Self {
            connection_type: ty,
            translator,
            commands: handler.commands().iter().map(|c| c.info().clone()).collect(),
            quit: false,
        };

        Ok((console, handler))
    }

    pub fn connection_type(&self) -> ConnectionType {
        self.connection_type
    }

    pub fn translator(&self) -> &dyn CommandTranslator {
        self.translator.as_ref()
    }

    pub fn should_quit(&self) -> bool {
        self.quit
    }
}

/// Builds the console table for a backend.
///
/// One entry per key verb the backend has, plus `help`, `types` and `quit`.
pub fn console_commands(traits: &BackendTraits) -> Vec<CommandHolder<Console>> {
    let verbs = traits.verbs;
    let mut commands = vec![
        CommandHolder::new(
            CommandInfo::new(
                verbs.get_key,
                "<key>",
                "Get the value of a key",
                UNDEFINED_SINCE,
                format!("{} foo", verbs.get_key),
                1,
                0,
            ),
            cmd_get,
        ),
        CommandHolder::new(
            CommandInfo::new(
                verbs.set_key,
                "<key> <value>",
                "Set the string value of a key",
                UNDEFINED_SINCE,
                format!("{} foo bar", verbs.set_key),
                2,
                0,
            ),
            cmd_set,
        ),
        CommandHolder::new(
            CommandInfo::new(
                verbs.delete_key,
                "<key>",
                "Delete a key",
                UNDEFINED_SINCE,
                format!("{} foo", verbs.delete_key),
                1,
                0,
            ),
            cmd_delete,
        ),
        CommandHolder::new(
            CommandInfo::new(
                verbs.rename_key,
                "<key> <newkey>",
                "Rename a key",
                UNDEFINED_SINCE,
                format!("{} foo bar", verbs.rename_key),
                2,
                0,
            ),
            cmd_rename,
        ),
    ];

    if let Some(verb) = verbs.set_ttl {
        commands.push(CommandHolder::new(
            CommandInfo::new(
                verb,
                "<key> <seconds>",
                "Set a key's time to live in seconds",
                UNDEFINED_SINCE,
                format!("{} foo 120", verb),
                2,
                0,
            ),
            cmd_set_ttl,
        ));
    }

    if let Some(verb) = verbs.get_ttl {
        commands.push(CommandHolder::new(
            CommandInfo::new(
                verb,
                "<key>",
                "Get the time to live for a key",
                UNDEFINED_SINCE,
                format!("{} foo", verb),
                1,
                0,
            ),
            cmd_get_ttl,
        ));
    }

    commands.push(CommandHolder::new(
        CommandInfo::new(
            "help",
            "[command]",
            "List commands, or describe one",
            CONSOLE_SINCE,
            format!("help {}", verbs.get_key),
            0,
            1,
        ),
        cmd_help,
    ));
    commands.push(CommandHolder::new(
        CommandInfo::new(
            "types",
            "",
            "List the value types the backend can store",
            CONSOLE_SINCE,
            "types",
            0,
            0,
        ),
        cmd_types,
    ));
    commands.push(CommandHolder::new(
        CommandInfo::new("quit", "", "Close the console", CONSOLE_SINCE, "quit", 0, 0),
        cmd_quit,
    ));

    commands
}

// ============================================================================
// Key commands
// ============================================================================

fn translated(out: &mut Vec<Reply>, cmd: Result<Bytes, TranslatorError>) -> Result<(), CommandError> {
    let cmd = cmd.map_err(anyhow::Error::from)?;
    out.push(Reply::bulk(cmd));
    Ok(())
}

fn cmd_get(ctx: &mut Console, args: &[Bytes], out: &mut Vec<Reply>) -> Result<(), CommandError> {
    let key = NKey::new(args[0].clone());
    translated(out, ctx.translator.load_key_command(&key, ValueType::String))
}

fn cmd_set(ctx: &mut Console, args: &[Bytes], out: &mut Vec<Reply>) -> Result<(), CommandError> {
    let key = NDbKValue::new(NKey::new(args[0].clone()), Value::String(args[1].clone()));
    translated(out, ctx.translator.create_key_command(&key))
}

fn cmd_delete(ctx: &mut Console, args: &[Bytes], out: &mut Vec<Reply>) -> Result<(), CommandError> {
    let key = NKey::new(args[0].clone());
    translated(out, ctx.translator.delete_key_command(&key))
}

fn cmd_rename(ctx: &mut Console, args: &[Bytes], out: &mut Vec<Reply>) -> Result<(), CommandError> {
    let key = NKey::new(args[0].clone());
    let new_name = Key::new(args[1].clone());
    translated(out, ctx.translator.rename_key_command(&key, &new_name))
}

fn cmd_set_ttl(ctx: &mut Console, args: &[Bytes], out: &mut Vec<Reply>) -> Result<(), CommandError> {
    let ttl: Ttl = std::str::from_utf8(&args[1])
        .ok()
        .and_then(|s| s.parse().ok())
        .ok_or_else(|| anyhow!("value is not an integer or out of range"))?;

    let key = NKey::new(args[0].clone());
    translated(out, ctx.translator.change_key_ttl_command(&key, ttl))
}

fn cmd_get_ttl(ctx: &mut Console, args: &[Bytes], out: &mut Vec<Reply>) -> Result<(), CommandError> {
    let key = NKey::new(args[0].clone());
    translated(out, ctx.translator.load_key_ttl_command(&key))
}

// ============================================================================
// Console commands
// ============================================================================

fn cmd_help(ctx: &mut Console, args: &[Bytes], out: &mut Vec<Reply>) -> Result<(), CommandError> {
    let Some(name) = args.first() else {
        let names = ctx
            .commands
            .iter()
            .map(|info| Reply::status(format!("{} {}", info.name, info.params).trim_end().to_string()))
            .collect();
        out.push(Reply::array(names));
        return Ok(());
    };

    match ctx.commands.iter().find(|info| info.is_equal_name(name)) {
        Some(info) => {
            out.push(Reply::status(info.to_string()));
            Ok(())
        }
        None => Err(CommandError::NotSupported(
            String::from_utf8_lossy(name).into_owned(),
        )),
    }
}

fn cmd_types(ctx: &mut Console, _args: &[Bytes], out: &mut Vec<Reply>) -> Result<(), CommandError> {
    let traits = lookup(ctx.connection_type).map_err(anyhow::Error::from)?;
    let types = traits
        .supported_types
        .iter()
        .map(|ty| Reply::status(ty.as_str()))
        .collect();
    out.push(Reply::array(types));
    Ok(())
}

fn cmd_quit(ctx: &mut Console, _args: &[Bytes], out: &mut Vec<Reply>) -> Result<(), CommandError> {
    ctx.quit = true;
    out.push(Reply::ok());
    Ok(())
}
