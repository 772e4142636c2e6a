use std::iter::FusedIterator;

use strint_ast::Position;
use tracing::trace;

use crate::error::LexError;
use crate::token::{Token, TokenKind};

use super::mode::{Action, Mode, Rule};

type LexResult<'a> = Result<Token<'a>, LexError>;

/// Maximum depth of the mode stack. Each nested string inside an interpolation
/// takes two levels, so this allows 64 levels of nested strings.
pub const MAX_DEPTH: usize = 128;

/// Lexes some input `str` and returns all tokens within the input.
///
/// The terminating [`TokenKind::EndOfInput`] token is not included.
pub fn lex(src: &str) -> Result<Vec<Token<'_>>, LexError> {
    Lexer::new(src).collect()
}

/// An entry on the lexer's mode stack.
#[derive(Debug, Clone, Copy)]
struct Frame {
    mode: Mode,

    /// Position of the token that pushed the mode.
    opened_at: Position,
}

/// A lexer takes some `str` input and tokenizes it on demand, one token at a time.
///
/// The active rule set is determined by a stack of [`Mode`]s. An empty stack means that
/// the lexer is in [`Mode::Root`].
pub struct Lexer<'a> {
    src: &'a str,
    position: Position,
    modes: Vec<Frame>,

    /// Set once the end of input or an error has been yielded by the iterator.
    done: bool,
}

impl<'a> Lexer<'a> {
    pub fn new(src: &'a str) -> Self {
        Self {
            src,
            position: Position::default(),
            modes: Vec::new(),
            done: false,
        }
    }

    /// Returns the current mode of operation.
    pub fn mode(&self) -> Mode {
        self.modes.last().map_or(Mode::Root, |frame| frame.mode)
    }

    /// Returns the depth of the mode stack. The depth is `0` in plain code.
    pub fn depth(&self) -> usize {
        self.modes.len()
    }

    /// Advances the lexer and returns the next token.
    ///
    /// Once all input has been consumed with an empty mode stack, every call returns a
    /// [`TokenKind::EndOfInput`] token.
    ///
    /// # Errors
    ///
    /// Returns [`LexError::Unterminated`] if the input ends inside a string or
    /// interpolation, [`LexError::UnexpectedChar`] if no rule matches, and
    /// [`LexError::TooDeep`] if a string or interpolation would exceed [`MAX_DEPTH`].
    pub fn next_token(&mut self) -> LexResult<'a> {
        let remaining = &self.src[self.position.offset..];

        let Some(found) = remaining.chars().next() else {
            return match self.modes.last() {
                None => Ok(Token::new(TokenKind::EndOfInput, "", self.position)),
                Some(frame) => Err(self.unterminated(*frame)),
            };
        };

        let Some((kind, len, action)) = match_rules(self.mode(), remaining) else {
            return match self.modes.last() {
                // Every character but a trailing backslash is accepted in a string.
                Some(frame) if frame.mode == Mode::String => Err(self.unterminated(*frame)),
                _ => Err(LexError::UnexpectedChar {
                    found,
                    mode: self.mode(),
                    position: self.position,
                }),
            };
        };

        if let Action::Push(mode) = action {
            if self.depth() >= MAX_DEPTH {
                return Err(LexError::TooDeep {
                    mode,
                    limit: MAX_DEPTH,
                    position: self.position,
                });
            }
        }

        let token = Token::new(kind, &remaining[..len], self.position);
        self.position = self.position.advance(token.text);
        self.apply(action, token.position);

        Ok(token)
    }

    /// Updates the mode stack after a rule has matched.
    fn apply(&mut self, action: Action, opened_at: Position) {
        match action {
            Action::Stay => (),
            Action::Push(mode) => {
                self.modes.push(Frame { mode, opened_at });
                trace!(%mode, depth = self.depth(), "push lexer mode");
            }
            Action::Pop => {
                let popped = self.modes.pop();
                debug_assert!(popped.is_some(), "rules only pop pushed modes");
                trace!(mode = %self.mode(), depth = self.depth(), "pop lexer mode");
            }
        }
    }

    fn unterminated(&self, frame: Frame) -> LexError {
        LexError::Unterminated {
            mode: frame.mode,
            opened_at: frame.opened_at,
            position: self.position,
        }
    }
}

impl<'a> Iterator for Lexer<'a> {
    type Item = LexResult<'a>;

    /// Returns the next token, or `None` after the end of input or the first error.
    fn next(&mut self) -> Option<Self::Item> {
        if self.done {
            return None;
        }

        match self.next_token() {
            Ok(token) if token.kind == TokenKind::EndOfInput => {
                self.done = true;
                None
            }
            Ok(token) => Some(Ok(token)),
            Err(error) => {
                self.done = true;
                Some(Err(error))
            }
        }
    }
}

impl FusedIterator for Lexer<'_> {}

/// Returns the first rule of `mode` that matches the start of `input`, expanding
/// included modes in place.
fn match_rules(mode: Mode, input: &str) -> Option<(TokenKind, usize, Action)> {
    mode.rules().iter().find_map(|rule| match rule {
        Rule::Match {
            kind,
            pattern,
            action,
        } => pattern.match_len(input).map(|len| (*kind, len, *action)),
        Rule::Include(included) => match_rules(*included, input),
    })
}
