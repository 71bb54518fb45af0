//! Console line tokenizer.
//!
//! Splits a line on ASCII whitespace. A token may be wrapped in double
//! quotes to carry spaces; inside quotes `\"` and `\\` stand for a quote and
//! a backslash.
//!
//! ```text
//! set greeting "hello world"   =>   [set] [greeting] [hello world]
//! ```

use bytes::{BufMut, Bytes, BytesMut};
use thiserror::Error;

/// Errors raised while splitting a line.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum TokenizeError {
    /// A quoted token was not closed
    #[error("unbalanced quotes in request")]
    UnbalancedQuotes,

    /// A closing quote was directly followed by another character
    #[error("closing quote must be followed by a space")]
    TrailingAfterQuote,
}

/// Splits `input` into argv tokens.
///
/// Works on raw bytes: tokens outside the ASCII range are kept as they are.
pub fn tokenize(input: &[u8]) -> Result<Vec<Bytes>, TokenizeError> {
    let mut tokens = Vec::new();
    let mut pos = 0;

    while pos < input.len() {
        if input[pos].is_ascii_whitespace() {
            pos += 1;
            continue;
        }

        if input[pos] == b'"' {
            let (token, next) = quoted(input, pos + 1)?;
            tokens.push(token);
            pos = next;
        } else {
            let start = pos;
            while pos < input.len() && !input[pos].is_ascii_whitespace() {
                pos += 1;
            }
            tokens.push(Bytes::copy_from_slice(&input[start..pos]));
        }
    }

    Ok(tokens)
}

/// Reads a quoted token starting after the opening quote.
fn quoted(input: &[u8], mut pos: usize) -> Result<(Bytes, usize), TokenizeError> {
    let mut token = BytesMut::new();

    loop {
        match input.get(pos) {
            None => return Err(TokenizeError::UnbalancedQuotes),
            Some(b'\\') if matches!(input.get(pos + 1), Some(b'"' | b'\\')) => {
                token.put_u8(input[pos + 1]);
                pos += 2;
            }
            Some(b'"') => {
                pos += 1;
                if input.get(pos).is_some_and(|b| !b.is_ascii_whitespace()) {
                    return Err(TokenizeError::TrailingAfterQuote);
                }
                return Ok((token.freeze(), pos));
            }
            Some(&b) => {
                token.put_u8(b);
                pos += 1;
            }
        }
    }
}
