/// Returns `true` if a character may be part of an identifier.
pub fn is_word_char(ch: char) -> bool {
    ch == '_' || ch.is_ascii_alphanumeric()
}

/// Returns `true` if a character may be part of a text run within a string.
///
/// Note that `$` is accepted here; the lexer must additionally stop before any
/// `${` sequence.
pub fn is_text_char(ch: char) -> bool {
    ch != '"' && ch != '\\'
}
