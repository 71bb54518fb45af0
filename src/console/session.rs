//! Console Session
//!
//! Couples a backend's command table with its [`Console`] context and drives
//! a read-execute-print loop over any async line source.

use super::{tokenize, Console};
use crate::backend::ConnectionType;
use crate::commands::{CommandHandler, Reply};
use tokio::io::{AsyncBufRead, AsyncBufReadExt, AsyncWrite, AsyncWriteExt};
use tracing::{debug, info, trace};

/// One interactive session against one backend.
pub struct ConsoleSession {
    handler: CommandHandler<Console>,
    console: Console,
}

impl ConsoleSession {
    /// Opens a session for `ty`.
    ///
    /// Fails if the backend was not compiled in.
    pub fn new(ty: ConnectionType) -> anyhow::Result<Self> {
        let (console, handler) = Console::new(ty)?;
        Ok(Self { handler, console })
    }

    pub fn connection_type(&self) -> ConnectionType {
        self.console.connection_type()
    }

    pub fn handler(&self) -> &CommandHandler<Console> {
        &self.handler
    }

    /// True once `quit` has run.
    pub fn is_closed(&self) -> bool {
        self.console.should_quit()
    }

    /// Runs one input line and returns what should be shown for it.
    ///
    /// Blank lines produce nothing. Failures become a single error reply.
    /// The line is raw bytes; it need not be valid UTF-8.
    pub fn execute_line(&mut self, line: impl AsRef<[u8]>) -> Vec<Reply> {
        let argv = match tokenize(line.as_ref()) {
            Ok(argv) => argv,
            Err(e) => return vec![Reply::error(e.to_string())],
        };

        if argv.is_empty() {
            return Vec::new();
        }

        let mut out = Vec::new();
        if let Err(e) = self.handler.execute(&mut self.console, &argv, &mut out) {
            debug!(error = %e, "command failed");
            out.push(Reply::error(e.to_string()));
        }

        out
    }
}

/// Reads lines from `reader` until EOF or `quit`, writing each reply on its
/// own line to `writer`.
pub async fn run_session<R, W>(
    mut reader: R,
    mut writer: W,
    session: &mut ConsoleSession,
) -> anyhow::Result<()>
where
    R: AsyncBufRead + Unpin,
    W: AsyncWrite + Unpin,
{
    info!(backend = %session.connection_type(), "console session started");

    let mut line = Vec::with_capacity(256);
    let mut lines_read: u64 = 0;

    while !session.is_closed() {
        line.clear();
        if reader.read_until(b'\n', &mut line).await? == 0 {
            debug!("input closed");
            break;
        }
        lines_read += 1;
        let text = String::from_utf8_lossy(&line);
        trace!(line = text.trim_end(), "read line");

        let replies = session.execute_line(&line);
        if replies.is_empty() {
            continue;
        }

        let mut rendered = String::new();
        for reply in &replies {
            rendered.push_str(&reply.to_string());
            rendered.push('\n');
        }

        writer.write_all(rendered.as_bytes()).await?;
        writer.flush().await?;
    }

    info!(lines = lines_read, "console session ended");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use tokio::io::BufReader;
    use tokio_test::io::Builder;

    #[test]
    fn test_execute_line() {
        let mut session = ConsoleSession::new(ConnectionType::Ssdb).unwrap();

        assert_eq!(
            session.execute_line("SET name \"Ariz\"\n"),
            vec![Reply::bulk("set name Ariz")]
        );
        assert!(session.execute_line("   \n").is_empty());
        assert_eq!(
            session.execute_line("ping"),
            vec![Reply::error("Not supported command: ping")]
        );
        assert_eq!(
            session.execute_line("get \"open"),
            vec![Reply::error("unbalanced quotes in request")]
        );
        assert!(!session.is_closed());
        assert_eq!(session.execute_line("QUIT"), vec![Reply::ok()]);
        assert!(session.is_closed());
    }

    #[test]
    fn test_run_session_until_quit() {
        let reader = Builder::new()
            .read(b"get foo\n\ndel\nquit\nget never\n")
            .build();
        let writer = Builder::new()
            .write(b"\"get foo\"\n")
            .write(b"(error) Invalid input argument for command: del\n")
            .write(b"OK\n")
            .build();

        let mut session = ConsoleSession::new(ConnectionType::Ssdb).unwrap();
        tokio_test::block_on(run_session(BufReader::new(reader), writer, &mut session)).unwrap();
        assert!(session.is_closed());
    }

    #[test]
    fn test_invalid_utf8_line_does_not_end_session() {
        let reader = Builder::new().read(b"get \xff\xfe\nget foo\n").build();
        let writer = Builder::new()
            .write(b"(binary data, 6 bytes)\n")
            .write(b"\"get foo\"\n")
            .build();

        let mut session = ConsoleSession::new(ConnectionType::Ssdb).unwrap();
        tokio_test::block_on(run_session(BufReader::new(reader), writer, &mut session)).unwrap();
    }

    #[test]
    fn test_run_session_until_eof() {
        let reader = Builder::new().read(b"ttl foo\n").read(b"expire foo 5\n").build();
        let writer = Builder::new()
            .write(b"\"TTL foo\"\n")
            .write(b"\"EXPIRE foo 5\"\n")
            .build();

        let mut session = ConsoleSession::new(ConnectionType::Redis).unwrap();
        tokio_test::block_on(run_session(BufReader::new(reader), writer, &mut session)).unwrap();
        assert!(!session.is_closed());
    }
}
