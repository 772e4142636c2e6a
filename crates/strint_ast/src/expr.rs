use std::fmt::Display;

use crate::{Position, StringLiteral};

/// An expression is either an identifier or a string.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Expr {
    /// A bare identifier, such as `foo`.
    Ident(Ident),

    /// A double quoted string that may contain interpolations.
    String(StringLiteral),
}

impl Expr {
    /// Returns the position of the expression's first token.
    pub fn position(&self) -> Position {
        match self {
            Expr::Ident(ident) => ident.position,
            Expr::String(string) => string.position,
        }
    }

    /// Returns the number of string literals along the deepest path through
    /// the expression.
    pub fn nesting_depth(&self) -> usize {
        match self {
            Expr::Ident(_) => 0,
            Expr::String(string) => string.nesting_depth(),
        }
    }
}

impl Display for Expr {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Expr::Ident(ident) => ident.fmt(f),
            Expr::String(string) => string.fmt(f),
        }
    }
}

/// An identifier consisting of word characters.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Ident {
    pub position: Position,

    /// Raw identifier text. Never empty.
    pub text: String,
}

impl Ident {
    pub fn new<S: Into<String>>(text: S, position: Position) -> Self {
        Self {
            position,
            text: text.into(),
        }
    }
}

impl Display for Ident {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.text)
    }
}
