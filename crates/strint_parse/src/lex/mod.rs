mod input;
pub(crate) mod lexer;
pub(crate) mod mode;
