use std::fmt::Display;

use strint_ast::Position;

/// A unit of input identified through lexical analysis.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Token<'a> {
    pub kind: TokenKind,

    /// The source text covered by the token. Empty for [`TokenKind::EndOfInput`].
    pub text: &'a str,

    /// Position of the token's first character in the input.
    pub position: Position,
}

impl<'a> Token<'a> {
    /// Constructs a new token.
    pub fn new(kind: TokenKind, text: &'a str, position: Position) -> Self {
        Self {
            kind,
            text,
            position,
        }
    }
}

/// The kind of a token.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TokenKind {
    /// A run of word characters.
    Ident,

    /// "\"" opening a string.
    StringStart,

    /// "\"" closing a string.
    StringEnd,

    /// "\\" followed by any character.
    Escaped,

    /// "${"
    InterpolatedStart,

    /// "}" closing an interpolation.
    InterpolatedEnd,

    /// Literal text within a string.
    Char,

    /// End of input.
    EndOfInput,
}

impl Display for TokenKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let description = match self {
            TokenKind::Ident => "identifier",
            TokenKind::StringStart => "'\"'",
            TokenKind::StringEnd => "closing '\"'",
            TokenKind::Escaped => "escape sequence",
            TokenKind::InterpolatedStart => "'${'",
            TokenKind::InterpolatedEnd => "'}'",
            TokenKind::Char => "text",
            TokenKind::EndOfInput => "end of input",
        };
        f.write_str(description)
    }
}
