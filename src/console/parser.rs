//! Command line tokenizer
//!
//! Splits on whitespace. A token may be wrapped in double quotes to keep
//! embedded spaces; `\"` and `\\` escape a quote or backslash inside or
//! outside quotes. Any other escaped character keeps its backslash.

/// Token limit including the command name. Extra tokens are dropped.
pub const MAX_TOKENS: usize = 8;

/// Tokenized command line: `argv[0]` is the command name.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Argv {
    tokens: Vec<String>,
}

impl Argv {
    pub fn is_empty(&self) -> bool {
        self.tokens.is_empty()
    }

    /// Token count including the command name.
    pub fn argc(&self) -> usize {
        self.tokens.len()
    }

    /// Command name, or `""` for an empty line.
    pub fn command(&self) -> &str {
        self.tokens.first().map_or("", String::as_str)
    }

    /// Positional arguments after the command name.
    pub fn args(&self) -> &[String] {
        self.tokens.get(1..).unwrap_or(&[])
    }

    /// Positional argument by index (0-based, after the command name).
    pub fn arg(&self, idx: usize) -> Option<&str> {
        self.args().get(idx).map(String::as_str)
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.tokens.iter().map(String::as_str)
    }
}

#[derive(Clone, Copy, PartialEq)]
enum State {
    Space,
    Word,
    Quoted,
}

/// Tokenize a command line.
pub fn split_argv(line: &str) -> Argv {
    let mut tokens: Vec<String> = Vec::new();
    let mut current = String::new();
    let mut state = State::Space;
    let mut chars = line.chars();

    while let Some(c) = chars.next() {
        match (state, c) {
            (State::Space, c) if c.is_whitespace() => {}
            (State::Space, '"') => state = State::Quoted,
            (State::Word, c) if c.is_whitespace() => {
                tokens.push(core::mem::take(&mut current));
                state = State::Space;
            }
            (State::Quoted, '"') => {
                tokens.push(core::mem::take(&mut current));
                state = State::Space;
            }
            (_, '\\') => {
                match chars.next() {
                    Some(e @ ('"' | '\\')) => current.push(e),
                    Some(other) => {
                        current.push('\\');
                        current.push(other);
                    }
                    None => current.push('\\'),
                }
                if state == State::Space {
                    state = State::Word;
                }
            }
            (State::Space, c) => {
                current.push(c);
                state = State::Word;
            }
            (_, c) => current.push(c),
        }
        if tokens.len() == MAX_TOKENS {
            return Argv { tokens };
        }
    }

    // An unterminated quote ends at end of line.
    if state != State::Space {
        tokens.push(current);
    }
    tokens.truncate(MAX_TOKENS);
    Argv { tokens }
}
