use strint_ast::Ast;
use tracing::debug;

use crate::{lex::lexer::Lexer, Error};

use self::{cursor::TokenCursor, expr::parse_ast};

mod cursor;
mod expr;
mod utils;

#[cfg(test)]
mod tests;

/// A specialized [`Result`] type for parsing.
pub type ParseResult<T> = Result<T, Error>;

/// Parses an [`Ast`] by consuming some input `src` in its entirety.
///
/// Tokens are lexed on demand while parsing, so tokens following a syntax error are
/// never lexed.
///
/// # Errors
///
/// This function will return an error if the input can't be lexed, or if the tokens
/// don't form exactly one expression.
pub fn parse(src: &str) -> ParseResult<Ast> {
    let result = parse_ast(&mut TokenCursor::new(Lexer::new(src)));

    match &result {
        Ok(ast) => debug!(depth = ast.expr.nesting_depth(), "parsed input"),
        Err(error) => debug!(%error, "could not parse input"),
    }

    result
}
