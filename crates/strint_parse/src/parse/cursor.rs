use strint_ast::Position;
use tracing::trace;

use crate::{
    error::LexError,
    token::{Token, TokenKind},
};

use super::ParseResult;

/// A cursor for pulling tokens one at a time from a token source, with a single token
/// of lookahead.
///
/// Once the source is exhausted, a [`TokenKind::EndOfInput`] token is returned upon
/// every call.
pub struct TokenCursor<'a, I> {
    /// Source of tokens, typically a lexer.
    tokens: I,

    /// The token returned by the last call to [`TokenCursor::peek`], if not yet consumed.
    peeked: Option<Token<'a>>,

    /// Position directly after the last pulled token.
    end: Position,
}

impl<'a, I> TokenCursor<'a, I>
where
    I: Iterator<Item = Result<Token<'a>, LexError>>,
{
    /// Constructs a new cursor for a token source.
    pub fn new(tokens: I) -> Self {
        Self {
            tokens,
            peeked: None,
            end: Position::default(),
        }
    }

    /// Returns a reference to the next [`Token`] without consuming it.
    pub fn peek(&mut self) -> ParseResult<&Token<'a>> {
        let token = match self.peeked.take() {
            Some(token) => token,
            None => self.pull()?,
        };
        Ok(&*self.peeked.insert(token))
    }

    /// Returns the kind and position of the next [`Token`] without consuming it.
    pub fn peek_kind(&mut self) -> ParseResult<(TokenKind, Position)> {
        self.peek().map(|token| (token.kind, token.position))
    }

    /// Returns the next [`Token`] while advancing the cursor.
    pub fn next(&mut self) -> ParseResult<Token<'a>> {
        match self.peeked.take() {
            Some(token) => Ok(token),
            None => self.pull(),
        }
    }

    /// Returns the next [`Token`] while advancing the cursor, but only if it is of the
    /// given kind.
    pub fn next_if_kind(&mut self, kind: TokenKind) -> ParseResult<Option<Token<'a>>> {
        if self.peek()?.kind == kind {
            self.next().map(Some)
        } else {
            Ok(None)
        }
    }

    /// Pulls a token from the underlying source.
    fn pull(&mut self) -> ParseResult<Token<'a>> {
        match self.tokens.next() {
            Some(Ok(token)) => {
                trace!(kind = ?token.kind, text = token.text, position = %token.position, "token");
                self.end = token.position.advance(token.text);
                Ok(token)
            }
            Some(Err(error)) => Err(error.into()),
            None => Ok(Token::new(TokenKind::EndOfInput, "", self.end)),
        }
    }
}
