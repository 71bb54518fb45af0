//! Command Metadata
//!
//! Static description of a console command: its name, parameter signature,
//! summary, the protocol version it appeared in, an example and its arity.
//!
//! ## Arity
//!
//! A command declares how many arguments it requires and how many more it
//! optionally accepts. The dispatcher accepts any argument count in the
//! closed interval `[required, required + optional]`.
//!
//! ```text
//! SET key value [EX seconds]
//!     └───┬───┘  └────┬────┘
//!     required=2  optional=2   => accepts 2..=4 arguments
//! ```

use std::borrow::Cow;
use std::fmt;

/// Marker for commands whose introduction version is unknown.
pub const UNDEFINED_SINCE: u32 = 0;

/// Readable form of [`UNDEFINED_SINCE`].
pub const UNDEFINED_SINCE_STR: &str = "Undefined";

/// Packs a `major.minor.patch` version into a single number.
pub const fn version(major: u8, minor: u8, patch: u8) -> u32 {
    ((major as u32) << 16) | ((minor as u32) << 8) | patch as u32
}

/// Renders a packed version as `major.minor.patch`, or `Undefined`.
pub fn version_to_string(since: u32) -> String {
    if since == UNDEFINED_SINCE {
        return UNDEFINED_SINCE_STR.to_string();
    }

    format!(
        "{}.{}.{}",
        (since >> 16) & 0xff,
        (since >> 8) & 0xff,
        since & 0xff
    )
}

/// Immutable metadata describing one command.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CommandInfo {
    /// Command name as typed by the user
    pub name: Cow<'static, str>,
    /// Parameter signature, e.g. `<key> <value>`
    pub params: Cow<'static, str>,
    /// One line human summary
    pub summary: Cow<'static, str>,
    /// Packed version the command was introduced in
    pub since: u32,
    /// Example usage
    pub example: Cow<'static, str>,
    /// Number of arguments that must be present
    pub required_arguments_count: u8,
    /// Number of additional arguments that may be present
    pub optional_arguments_count: u8,
}

impl CommandInfo {
    /// Creates command metadata.
    pub fn new(
        name: impl Into<Cow<'static, str>>,
        params: impl Into<Cow<'static, str>>,
        summary: impl Into<Cow<'static, str>>,
        since: u32,
        example: impl Into<Cow<'static, str>>,
        required_arguments_count: u8,
        optional_arguments_count: u8,
    ) -> Self {
        Self {
            name: name.into(),
            params: params.into(),
            summary: summary.into(),
            since,
            example: example.into(),
            required_arguments_count,
            optional_arguments_count,
        }
    }

    /// Largest accepted argument count.
    pub fn max_arguments_count(&self) -> u16 {
        self.required_arguments_count as u16 + self.optional_arguments_count as u16
    }

    /// Smallest accepted argument count.
    pub fn min_arguments_count(&self) -> u8 {
        self.required_arguments_count
    }

    /// Returns true if `argc` lies within `[min, max]`.
    pub fn accepts_arguments(&self, argc: usize) -> bool {
        argc >= self.min_arguments_count() as usize && argc <= self.max_arguments_count() as usize
    }

    /// Full, ASCII case-insensitive comparison against the command name.
    pub fn is_equal_name(&self, name: &[u8]) -> bool {
        self.name.as_bytes().eq_ignore_ascii_case(name)
    }

    /// Readable form of `since`.
    pub fn since_str(&self) -> String {
        version_to_string(self.since)
    }
}

impl fmt::Display for CommandInfo {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "name: {}", self.name)?;
        writeln!(f, "arguments: {}", self.params)?;
        writeln!(f, "summary: {}", self.summary)?;
        writeln!(f, "since: {}", self.since_str())?;
        write!(f, "example: {}", self.example)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn info(required: u8, optional: u8) -> CommandInfo {
        CommandInfo::new("set", "<key> <value>", "Set a key", version(1, 2, 3), "set a b", required, optional)
    }

    #[test]
    fn test_arity_bounds() {
        let cmd = info(2, 1);
        assert_eq!(cmd.min_arguments_count(), 2);
        assert_eq!(cmd.max_arguments_count(), 3);
        assert!(!cmd.accepts_arguments(1));
        assert!(cmd.accepts_arguments(2));
        assert!(cmd.accepts_arguments(3));
        assert!(!cmd.accepts_arguments(4));
    }

    #[test]
    fn test_max_arguments_does_not_overflow() {
        let cmd = info(u8::MAX, u8::MAX);
        assert_eq!(cmd.max_arguments_count(), 510);
    }

    #[test]
    fn test_is_equal_name_is_case_insensitive_and_full() {
        let cmd = info(2, 0);
        assert!(cmd.is_equal_name(b"set"));
        assert!(cmd.is_equal_name(b"SET"));
        assert!(cmd.is_equal_name(b"sEt"));
        assert!(!cmd.is_equal_name(b"se"));
        assert!(!cmd.is_equal_name(b"setex"));
    }

    #[test]
    fn test_version_strings() {
        assert_eq!(version_to_string(version(2, 6, 12)), "2.6.12");
        assert_eq!(version_to_string(UNDEFINED_SINCE), "Undefined");
        assert_eq!(info(2, 0).since_str(), "1.2.3");
    }
}
