use std::fmt::Display;

/// A location in the source input.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Position {
    /// Byte offset from the start of the input.
    pub offset: usize,

    /// Line number, starting at 1.
    pub line: usize,

    /// Column number in characters, starting at 1.
    pub column: usize,
}

impl Position {
    /// Constructs a new position.
    pub fn new(offset: usize, line: usize, column: usize) -> Self {
        Self {
            offset,
            line,
            column,
        }
    }

    /// Returns the position following `text` when it starts at this position.
    pub fn advance(self, text: &str) -> Self {
        let mut next = self;
        for ch in text.chars() {
            next.offset += ch.len_utf8();
            if ch == '\n' {
                next.line += 1;
                next.column = 1;
            } else {
                next.column += 1;
            }
        }
        next
    }
}

impl Default for Position {
    fn default() -> Self {
        Self::new(0, 1, 1)
    }
}

impl Display for Position {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}:{}", self.line, self.column)
    }
}
