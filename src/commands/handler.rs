//! Command Dispatcher
//!
//! [`CommandHandler`] owns an ordered table of [`CommandHolder`]s and routes a
//! tokenized command line to the matching entry.
//!
//! ## Dispatch
//!
//! ```text
//! argv = ["GET", "k1"]
//!          │      └──────────── arguments (argc - 1 of them)
//!          ▼
//! ┌──────────────────┐   no match   ┌──────────────────────────┐
//! │ linear name scan │─────────────>│ NotSupported("GET")      │
//! └────────┬─────────┘              └──────────────────────────┘
//!          │ first match
//!          ▼
//! ┌──────────────────┐   outside    ┌──────────────────────────┐
//! │ min <= n <= max  │─────────────>│ InvalidArgumentCount     │
//! └────────┬─────────┘              └──────────────────────────┘
//!          │
//!          ▼
//!     handler(ctx, ["k1"], out)
//! ```
//!
//! The table is fixed at construction and never mutated by dispatch, so a
//! handler can be shared across threads as long as each call gets its own
//! context and output.

use super::{CommandHolder, Reply};
use bytes::Bytes;
use thiserror::Error;
use tracing::{debug, trace};

/// Errors reported by the dispatcher or propagated from a handler.
#[derive(Debug, Error)]
pub enum CommandError {
    /// The command line had no tokens at all
    #[error("Empty command")]
    EmptyCommand,

    /// The argument count fell outside the command's declared arity
    #[error("Invalid input argument for command: {command}")]
    InvalidArgumentCount { command: String },

    /// No table entry matched the command name
    #[error("Not supported command: {0}")]
    NotSupported(String),

    /// Two entries in one table share a name
    #[error("Duplicate command in table: {0}")]
    DuplicateCommand(String),

    /// Failure raised by a handler
    #[error(transparent)]
    Handler(#[from] anyhow::Error),
}

/// Routes command lines to the entries of a fixed command table.
#[derive(Debug, Clone)]
pub struct CommandHandler<C> {
    /// The command table, in registration order
    commands: Vec<CommandHolder<C>>,
}

impl<C> CommandHandler<C> {
    /// Creates a dispatcher over `commands`.
    ///
    /// Fails with [`CommandError::DuplicateCommand`] if two entries share a
    /// name under ASCII case folding.
    pub fn new(commands: Vec<CommandHolder<C>>) -> Result<Self, CommandError> {
        for (i, cmd) in commands.iter().enumerate() {
            if commands[..i]
                .iter()
                .any(|prev| prev.is_command(cmd.name.as_bytes()))
            {
                return Err(CommandError::DuplicateCommand(cmd.name.to_string()));
            }
        }

        Ok(Self { commands })
    }

    /// The command table, in registration order.
    pub fn commands(&self) -> &[CommandHolder<C>] {
        &self.commands
    }

    /// Returns the first entry named `name`.
    pub fn find(&self, name: &[u8]) -> Option<&CommandHolder<C>> {
        self.commands.iter().find(|cmd| cmd.is_command(name))
    }

    /// Executes a tokenized command line.
    ///
    /// `argv[0]` is the command name, the rest are its arguments. The handler
    /// is only invoked when the argument count lies within the command's
    /// `[min, max]` arity; its result is returned verbatim.
    pub fn execute(
        &self,
        ctx: &mut C,
        argv: &[Bytes],
        out: &mut Vec<Reply>,
    ) -> Result<(), CommandError> {
        let (input_cmd, args) = argv.split_first().ok_or(CommandError::EmptyCommand)?;

        let Some(cmd) = self.find(input_cmd) else {
            debug!(command = %String::from_utf8_lossy(input_cmd), "command not supported");
            return Err(Self::not_supported(input_cmd));
        };

        if !cmd.accepts_arguments(args.len()) {
            debug!(
                command = %cmd.name,
                argc = args.len(),
                min = cmd.min_arguments_count(),
                max = cmd.max_arguments_count(),
                "invalid argument count"
            );
            return Err(CommandError::InvalidArgumentCount {
                command: String::from_utf8_lossy(input_cmd).into_owned(),
            });
        }

        trace!(command = %cmd.name, argc = args.len(), "dispatching");
        cmd.execute(ctx, args, out)
    }

    fn not_supported(cmd: &[u8]) -> CommandError {
        CommandError::NotSupported(String::from_utf8_lossy(cmd).into_owned())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::commands::{CommandInfo, UNDEFINED_SINCE};

    /// Records which handler ran and with what arguments.
    #[derive(Debug, Default)]
    struct Calls {
        log: Vec<(&'static str, Vec<Bytes>)>,
    }

    fn get(ctx: &mut Calls, args: &[Bytes], out: &mut Vec<Reply>) -> Result<(), CommandError> {
        ctx.log.push(("get", args.to_vec()));
        out.push(Reply::ok());
        Ok(())
    }

    fn set(ctx: &mut Calls, args: &[Bytes], _out: &mut Vec<Reply>) -> Result<(), CommandError> {
        ctx.log.push(("set", args.to_vec()));
        Ok(())
    }

    fn scan(ctx: &mut Calls, args: &[Bytes], _out: &mut Vec<Reply>) -> Result<(), CommandError> {
        ctx.log.push(("scan", args.to_vec()));
        Ok(())
    }

    fn fail(_ctx: &mut Calls, _args: &[Bytes], _out: &mut Vec<Reply>) -> Result<(), CommandError> {
        Err(anyhow::anyhow!("backend exploded").into())
    }

    fn info(name: &'static str, required: u8, optional: u8) -> CommandInfo {
        CommandInfo::new(name, "", "", UNDEFINED_SINCE, "", required, optional)
    }

    fn create_handler() -> CommandHandler<Calls> {
        CommandHandler::new(vec![
            CommandHolder::new(info("get", 1, 0), get),
            CommandHolder::new(info("set", 2, 0), set),
            CommandHolder::new(info("scan", 1, 2), scan),
            CommandHolder::new(info("fail", 0, 0), fail),
        ])
        .unwrap()
    }

    fn make_command(args: &[&str]) -> Vec<Bytes> {
        args.iter().map(|s| Bytes::from(s.to_string())).collect()
    }

    #[test]
    fn test_get_is_case_insensitive() {
        let handler = create_handler();

        for name in ["GET", "get", "GeT"] {
            let mut calls = Calls::default();
            let mut out = Vec::new();
            handler
                .execute(&mut calls, &make_command(&[name, "k1"]), &mut out)
                .unwrap();
            assert_eq!(calls.log, vec![("get", vec![Bytes::from("k1")])]);
            assert_eq!(out, vec![Reply::ok()]);
        }
    }

    #[test]
    fn test_too_few_arguments() {
        let handler = create_handler();
        let mut calls = Calls::default();

        let err = handler
            .execute(&mut calls, &make_command(&["set", "k1"]), &mut Vec::new())
            .unwrap_err();

        assert!(matches!(err, CommandError::InvalidArgumentCount { ref command } if command == "set"));
        assert_eq!(err.to_string(), "Invalid input argument for command: set");
        assert!(calls.log.is_empty());
    }

    #[test]
    fn test_too_many_arguments() {
        let handler = create_handler();
        let mut calls = Calls::default();

        let err = handler
            .execute(&mut calls, &make_command(&["GET", "a", "b"]), &mut Vec::new())
            .unwrap_err();

        assert!(matches!(err, CommandError::InvalidArgumentCount { .. }));
        assert!(calls.log.is_empty());
    }

    #[test]
    fn test_arity_boundaries() {
        let handler = create_handler();

        // scan accepts 1..=3 arguments
        for (argv, ok) in [
            (vec!["scan"], false),
            (vec!["scan", "0"], true),
            (vec!["scan", "0", "match", "*"], true),
            (vec!["scan", "0", "match", "*", "count"], false),
        ] {
            let mut calls = Calls::default();
            let result = handler.execute(&mut calls, &make_command(&argv), &mut Vec::new());
            assert_eq!(result.is_ok(), ok, "argv = {:?}", argv);
            assert_eq!(calls.log.len(), ok as usize);
        }
    }

    #[test]
    fn test_unknown_command() {
        let handler = create_handler();
        let mut calls = Calls::default();

        let err = handler
            .execute(&mut calls, &make_command(&["ping"]), &mut Vec::new())
            .unwrap_err();

        assert!(matches!(err, CommandError::NotSupported(ref name) if name == "ping"));
        assert_eq!(err.to_string(), "Not supported command: ping");
        assert!(calls.log.is_empty());
    }

    #[test]
    fn test_prefix_is_not_a_match() {
        let handler = create_handler();
        let mut calls = Calls::default();

        let err = handler
            .execute(&mut calls, &make_command(&["ge", "k1"]), &mut Vec::new())
            .unwrap_err();

        assert!(matches!(err, CommandError::NotSupported(_)));
    }

    #[test]
    fn test_empty_table_supports_nothing() {
        let handler: CommandHandler<Calls> = CommandHandler::new(vec![]).unwrap();
        let err = handler
            .execute(&mut Calls::default(), &make_command(&["get", "k"]), &mut Vec::new())
            .unwrap_err();
        assert!(matches!(err, CommandError::NotSupported(_)));
    }

    #[test]
    fn test_empty_command() {
        let handler = create_handler();
        let err = handler
            .execute(&mut Calls::default(), &[], &mut Vec::new())
            .unwrap_err();
        assert!(matches!(err, CommandError::EmptyCommand));
    }

    #[test]
    fn test_handler_error_is_propagated() {
        let handler = create_handler();
        let err = handler
            .execute(&mut Calls::default(), &make_command(&["fail"]), &mut Vec::new())
            .unwrap_err();

        assert!(matches!(err, CommandError::Handler(_)));
        assert_eq!(err.to_string(), "backend exploded");
    }

    #[test]
    fn test_duplicate_names_rejected() {
        let result = CommandHandler::new(vec![
            CommandHolder::new(info("get", 1, 0), get),
            CommandHolder::new(info("GET", 1, 0), get),
        ]);

        assert!(matches!(result, Err(CommandError::DuplicateCommand(ref name)) if name == "GET"));
    }

    #[test]
    fn test_find() {
        let handler = create_handler();
        assert_eq!(handler.find(b"SET").map(|c| c.name.as_ref()), Some("set"));
        assert!(handler.find(b"del").is_none());
        assert_eq!(handler.commands().len(), 4);
    }
}
