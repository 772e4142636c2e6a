use strint_ast::Position;
use thiserror::Error;

use crate::{lex::mode::Mode, token::TokenKind};

/// Errors that can occur while parsing an input, either during lexical analysis or
/// while matching the token sequence against the grammar.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Error {
    #[error("lex error: {0}")]
    Lex(#[from] LexError),

    #[error("parse error: {0}")]
    Parse(#[from] ParseError),
}

impl Error {
    /// Returns the position at which the error was detected.
    pub fn position(&self) -> Position {
        match self {
            Error::Lex(error) => error.position(),
            Error::Parse(error) => error.position(),
        }
    }

    /// Returns a help text associated with the error.
    pub fn help(&self) -> &str {
        match self {
            Error::Lex(error) => error.help(),
            Error::Parse(error) => error.help(),
        }
    }
}

/// Lex errors are returned by a lexer when no rule of the current mode matches the input.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum LexError {
    /// The input ended while inside a string or interpolation.
    #[error("unterminated {mode} opened at {opened_at}")]
    Unterminated {
        /// The innermost mode that was still open.
        mode: Mode,

        /// Position of the token that opened the mode.
        opened_at: Position,

        /// Position of the end of input.
        position: Position,
    },

    /// Opening another string or interpolation would nest deeper than the lexer allows.
    #[error("{mode} at {position} nests deeper than {limit} levels")]
    TooDeep {
        /// The mode that would have been opened.
        mode: Mode,

        limit: usize,
        position: Position,
    },

    /// A character that no rule of the current mode accepts.
    #[error("unexpected character {found:?} in {mode} at {position}")]
    UnexpectedChar {
        found: char,
        mode: Mode,
        position: Position,
    },
}

impl LexError {
    pub fn position(&self) -> Position {
        match self {
            LexError::Unterminated { position, .. } => *position,
            LexError::TooDeep { position, .. } => *position,
            LexError::UnexpectedChar { position, .. } => *position,
        }
    }

    /// Returns a help text associated with the error.
    pub fn help(&self) -> &str {
        match self {
            LexError::Unterminated {
                mode: Mode::Interpolated,
                ..
            } => "this interpolation is never closed",
            LexError::Unterminated { .. } => "this string is never closed",
            LexError::TooDeep { .. } => "this is nested too deeply",
            LexError::UnexpectedChar { .. } => "this character is unexpected here",
        }
    }
}

/// Parse errors are returned by a parser when the token sequence doesn't match the grammar.
///
/// Parsing stops at the first error; no partially constructed tree is returned.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParseError {
    /// An expression was expected, but the token can't start one.
    #[error("unexpected token {found} at {position}, expected identifier or string")]
    ExpectedExpr { found: TokenKind, position: Position },

    /// A string body contained a token that can't be part of a string.
    #[error("unterminated string opened at {opened_at}, found {found} at {position}")]
    UnterminatedString {
        opened_at: Position,
        found: TokenKind,
        position: Position,
    },

    /// A specific token was expected, but another token was found.
    #[error("expected {expected} at {position}, found {found}")]
    ExpectedToken {
        expected: TokenKind,
        found: TokenKind,
        position: Position,
    },
}

impl ParseError {
    /// Returns the position of the offending token.
    pub fn position(&self) -> Position {
        match self {
            ParseError::ExpectedExpr { position, .. } => *position,
            ParseError::UnterminatedString { position, .. } => *position,
            ParseError::ExpectedToken { position, .. } => *position,
        }
    }

    /// Returns the kinds of tokens that would have been accepted at the error position.
    pub fn expected(&self) -> Vec<TokenKind> {
        match self {
            ParseError::ExpectedExpr { .. } => vec![TokenKind::Ident, TokenKind::StringStart],
            ParseError::UnterminatedString { .. } => vec![
                TokenKind::StringEnd,
                TokenKind::Escaped,
                TokenKind::InterpolatedStart,
                TokenKind::Char,
            ],
            ParseError::ExpectedToken { expected, .. } => vec![*expected],
        }
    }

    /// Returns the kind of token that was actually found.
    pub fn found(&self) -> TokenKind {
        match self {
            ParseError::ExpectedExpr { found, .. } => *found,
            ParseError::UnterminatedString { found, .. } => *found,
            ParseError::ExpectedToken { found, .. } => *found,
        }
    }

    /// Returns a help text associated with the error.
    pub fn help(&self) -> &str {
        match self {
            ParseError::ExpectedExpr { .. } => "an identifier or a string is expected here",
            ParseError::UnterminatedString { .. } => "this string is never closed",
            ParseError::ExpectedToken { .. } => "another token is expected here",
        }
    }
}
