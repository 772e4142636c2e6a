use std::fmt::{Display, Write};

use crate::{Expr, Position};

/// A double quoted string literal.
///
/// Fragments are ordered as they appear in the source. Writing them out in
/// order (see [`Display`]) reproduces the source between the quotes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StringLiteral {
    /// Position of the opening quote.
    pub position: Position,

    pub fragments: Vec<StringFragment>,
}

impl StringLiteral {
    /// Constructs a new string literal without fragments.
    pub fn new(position: Position) -> Self {
        Self {
            position,
            fragments: Vec::new(),
        }
    }

    /// Appends a fragment to the string.
    pub fn fragment(&mut self, fragment: StringFragment) -> &mut Self {
        self.fragments.push(fragment);
        self
    }

    /// Returns the semantic content of the string with escapes resolved.
    ///
    /// Returns `None` if the string contains interpolations, as their values
    /// are only known after evaluation.
    pub fn content(&self) -> Option<String> {
        let mut content = String::new();
        for fragment in &self.fragments {
            match fragment {
                StringFragment::Escaped(escaped) => content.push(escaped.unescaped()),
                StringFragment::Text(text) => content.push_str(&text.text),
                StringFragment::Interpolated(_) => return None,
            }
        }
        Some(content)
    }

    /// Returns the number of string literals along the deepest path, counting
    /// this string.
    pub fn nesting_depth(&self) -> usize {
        let nested = self
            .fragments
            .iter()
            .filter_map(|fragment| match fragment {
                StringFragment::Interpolated(Interpolated {
                    expr: Some(expr), ..
                }) => Some(expr.nesting_depth()),
                _ => None,
            })
            .max()
            .unwrap_or(0);
        nested + 1
    }
}

impl Display for StringLiteral {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_char('"')?;
        for fragment in &self.fragments {
            fragment.fmt(f)?;
        }
        f.write_char('"')
    }
}

/// A single piece of a string literal's body.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StringFragment {
    /// A backslash escape, such as `\"`.
    Escaped(Escaped),

    /// An embedded expression, such as `${name}`.
    Interpolated(Interpolated),

    /// A run of literal characters.
    Text(Text),
}

impl StringFragment {
    pub fn position(&self) -> Position {
        match self {
            StringFragment::Escaped(escaped) => escaped.position,
            StringFragment::Interpolated(interpolated) => interpolated.position,
            StringFragment::Text(text) => text.position,
        }
    }
}

impl Display for StringFragment {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            StringFragment::Escaped(escaped) => f.write_str(&escaped.text),
            StringFragment::Interpolated(interpolated) => interpolated.fmt(f),
            StringFragment::Text(text) => f.write_str(&text.text),
        }
    }
}

/// An escape sequence: a backslash followed by exactly one character.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Escaped {
    pub position: Position,

    /// The escape sequence as written in the source, including the backslash.
    pub text: String,
}

impl Escaped {
    pub fn new<S: Into<String>>(text: S, position: Position) -> Self {
        Self {
            position,
            text: text.into(),
        }
    }

    /// Returns the escaped character, i.e. the character after the backslash.
    pub fn unescaped(&self) -> char {
        self.text.chars().nth(1).unwrap_or('\\')
    }
}

/// Literal text within a string.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Text {
    pub position: Position,
    pub text: String,
}

impl Text {
    pub fn new<S: Into<String>>(text: S, position: Position) -> Self {
        Self {
            position,
            text: text.into(),
        }
    }
}

/// An expression embedded in a string through `${...}`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Interpolated {
    /// Position of the opening `${`.
    pub position: Position,

    /// The embedded expression. Absent for an empty interpolation (`${}`);
    /// it is up to an evaluator to decide what that means.
    pub expr: Option<Box<Expr>>,
}

impl Interpolated {
    pub fn new(expr: Option<Expr>, position: Position) -> Self {
        Self {
            position,
            expr: expr.map(Box::new),
        }
    }
}

impl Display for Interpolated {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str("${")?;
        if let Some(expr) = &self.expr {
            expr.fmt(f)?;
        }
        f.write_char('}')
    }
}
