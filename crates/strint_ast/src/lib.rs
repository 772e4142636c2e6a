mod expr;
mod position;
mod string;

use std::fmt::Display;

pub use expr::{Expr, Ident};
pub use position::Position;
pub use string::{Escaped, Interpolated, StringFragment, StringLiteral, Text};

/// The root of a parsed input: exactly one expression.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Ast {
    /// Position of the first token in the input.
    pub position: Position,

    /// The standalone expression making up the input.
    pub expr: Expr,
}

impl Ast {
    /// Constructs a new root around an expression.
    pub fn new(expr: Expr) -> Self {
        Self {
            position: expr.position(),
            expr,
        }
    }
}

impl Display for Ast {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        self.expr.fmt(f)
    }
}
