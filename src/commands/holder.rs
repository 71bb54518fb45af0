//! Command Table Entry
//!
//! A [`CommandHolder`] binds a [`CommandInfo`] to the function that runs it.
//! Holders are the unit registered into a [`CommandHandler`](super::CommandHandler).

use super::{CommandError, CommandInfo, Reply};
use bytes::Bytes;
use std::fmt;
use std::ops::Deref;

/// Handler signature.
///
/// Receives the caller's context, the arguments that follow the command
/// name (already checked against the declared arity) and the output sink.
pub type CommandFn<C> = fn(&mut C, &[Bytes], &mut Vec<Reply>) -> Result<(), CommandError>;

/// Command metadata plus its bound handler.
pub struct CommandHolder<C> {
    info: CommandInfo,
    func: CommandFn<C>,
}

impl<C> CommandHolder<C> {
    /// Binds `func` to the command described by `info`.
    pub fn new(info: CommandInfo, func: CommandFn<C>) -> Self {
        Self { info, func }
    }

    /// The command's metadata.
    pub fn info(&self) -> &CommandInfo {
        &self.info
    }

    /// Returns true if `cmd` names this command (full, ASCII case-insensitive match).
    pub fn is_command(&self, cmd: &[u8]) -> bool {
        self.info.is_equal_name(cmd)
    }

    /// Runs the bound handler and returns its result untouched.
    pub fn execute(
        &self,
        ctx: &mut C,
        args: &[Bytes],
        out: &mut Vec<Reply>,
    ) -> Result<(), CommandError> {
        (self.func)(ctx, args, out)
    }
}

impl<C> Deref for CommandHolder<C> {
    type Target = CommandInfo;

    fn deref(&self) -> &CommandInfo {
        &self.info
    }
}

impl<C> Clone for CommandHolder<C> {
    fn clone(&self) -> Self {
        Self {
            info: self.info.clone(),
            func: self.func,
        }
    }
}

impl<C> fmt::Debug for CommandHolder<C> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("CommandHolder")
            .field("info", &self.info)
            .finish_non_exhaustive()
    }
}
