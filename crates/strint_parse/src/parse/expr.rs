use strint_ast::{Ast, Escaped, Expr, Ident, Interpolated, StringFragment, StringLiteral, Text};

use crate::{
    error::{LexError, ParseError},
    token::{Token, TokenKind},
};

use super::{cursor::TokenCursor, utils::take_token, ParseResult};

/// Parses the root of an input: a single expression followed by the end of input.
pub(crate) fn parse_ast<'a, I>(tokens: &mut TokenCursor<'a, I>) -> ParseResult<Ast>
where
    I: Iterator<Item = Result<Token<'a>, LexError>>,
{
    let expr = parse_expr(tokens)?;
    take_token(tokens, TokenKind::EndOfInput)?;
    Ok(Ast::new(expr))
}

/// Parses an [`Expr`], choosing the alternative from the kind of the next token.
pub(crate) fn parse_expr<'a, I>(tokens: &mut TokenCursor<'a, I>) -> ParseResult<Expr>
where
    I: Iterator<Item = Result<Token<'a>, LexError>>,
{
    match tokens.peek_kind()? {
        (TokenKind::Ident, _) => parse_ident(tokens).map(Expr::Ident),
        (TokenKind::StringStart, _) => parse_string(tokens).map(Expr::String),
        (found, position) => Err(ParseError::ExpectedExpr { found, position }.into()),
    }
}

fn parse_ident<'a, I>(tokens: &mut TokenCursor<'a, I>) -> ParseResult<Ident>
where
    I: Iterator<Item = Result<Token<'a>, LexError>>,
{
    let token = take_token(tokens, TokenKind::Ident)?;
    Ok(Ident::new(token.text, token.position))
}

/// Parses a double quoted string and its fragments.
fn parse_string<'a, I>(tokens: &mut TokenCursor<'a, I>) -> ParseResult<StringLiteral>
where
    I: Iterator<Item = Result<Token<'a>, LexError>>,
{
    let start = take_token(tokens, TokenKind::StringStart)?;
    let mut string = StringLiteral::new(start.position);

    loop {
        let fragment = match tokens.peek_kind()? {
            (TokenKind::StringEnd, _) => break,
            (TokenKind::Escaped, _) => {
                let token = tokens.next()?;
                StringFragment::Escaped(Escaped::new(token.text, token.position))
            }
            (TokenKind::InterpolatedStart, _) => {
                StringFragment::Interpolated(parse_interpolated(tokens)?)
            }
            (TokenKind::Char, _) => {
                let token = tokens.next()?;
                StringFragment::Text(Text::new(token.text, token.position))
            }
            (found, position) => {
                return Err(ParseError::UnterminatedString {
                    opened_at: start.position,
                    found,
                    position,
                }
                .into())
            }
        };
        string.fragment(fragment);
    }

    take_token(tokens, TokenKind::StringEnd)?;
    Ok(string)
}

/// Parses an interpolation. The embedded expression is optional, so `${}` is accepted.
fn parse_interpolated<'a, I>(tokens: &mut TokenCursor<'a, I>) -> ParseResult<Interpolated>
where
    I: Iterator<Item = Result<Token<'a>, LexError>>,
{
    let start = take_token(tokens, TokenKind::InterpolatedStart)?;

    if tokens.next_if_kind(TokenKind::InterpolatedEnd)?.is_some() {
        return Ok(Interpolated::new(None, start.position));
    }

    let expr = parse_expr(tokens)?;
    take_token(tokens, TokenKind::InterpolatedEnd)?;

    Ok(Interpolated::new(Some(expr), start.position))
}
