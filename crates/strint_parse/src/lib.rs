mod error;
mod lex;
mod parse;
mod token;

pub use strint_ast as ast;

pub use error::{Error, LexError, ParseError};
pub use lex::lexer::{lex, Lexer, MAX_DEPTH};
pub use lex::mode::Mode;
pub use parse::parse;
pub use token::{Token, TokenKind};
