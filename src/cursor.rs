#![forbid(unsafe_code)]

//! Left-to-right cursor over command-line tokens
//!
//! Dispatch reads the leading tokens to pick a command and hands the rest to
//! it as positional parameters. The cursor never mutates the underlying
//! slice, so a command that delegates to another (a `path ... history`
//! alias, for example) can hand over a sub-slice without copying.

/// Cursor over an immutable slice of tokens
#[derive(Debug, Clone, Copy)]
pub struct ArgCursor<'a> {
    args: &'a [String],
    pos: usize,
}

impl<'a> ArgCursor<'a> {
    /// Creates a cursor positioned before the first token
    pub fn new(args: &'a [String]) -> Self {
        ArgCursor { args, pos: 0 }
    }

    /// Returns the next token and advances past it
    pub fn next_token(&mut self) -> Option<&'a String> {
        let token = self.args.get(self.pos)?;
        self.pos += 1;
        Some(token)
    }

    /// Returns the next token without advancing
    pub fn peek(&self) -> Option<&'a str> {
        self.args.get(self.pos).map(String::as_str)
    }

    /// Advances past the next token if it equals `expected`
    pub fn next_if_eq(&mut self, expected: &str) -> bool {
        if self.peek() == Some(expected) {
            self.pos += 1;
            true
        } else {
            false
        }
    }

    /// Tokens not yet consumed
    pub fn remaining(&self) -> &'a [String] {
        &self.args[self.pos.min(self.args.len())..]
    }

    pub fn is_empty(&self) -> bool {
        self.remaining().is_empty()
    }
}
