use crate::{
    error::{LexError, ParseError},
    token::{Token, TokenKind},
};

use super::{cursor::TokenCursor, ParseResult};

/// Advances past a token if the next token is of the given kind.
/// Returns an error if the next token is unexpected.
pub fn take_token<'a, I>(tokens: &mut TokenCursor<'a, I>, kind: TokenKind) -> ParseResult<Token<'a>>
where
    I: Iterator<Item = Result<Token<'a>, LexError>>,
{
    match tokens.next_if_kind(kind)? {
        Some(token) => Ok(token),
        None => Err(expected_token(tokens, kind)?.into()),
    }
}

/// Returns a [`ParseError::ExpectedToken`] describing the next token.
pub fn expected_token<'a, I>(
    tokens: &mut TokenCursor<'a, I>,
    expected: TokenKind,
) -> ParseResult<ParseError>
where
    I: Iterator<Item = Result<Token<'a>, LexError>>,
{
    let (found, position) = tokens.peek_kind()?;
    Ok(ParseError::ExpectedToken {
        expected,
        found,
        position,
    })
}
