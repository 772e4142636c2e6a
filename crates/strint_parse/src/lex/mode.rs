//! Lexer modes and the rules that are active within each mode.
//!
//! Each [`Mode`] maps to an ordered list of [`Rule`]s. The first rule whose
//! pattern matches the remaining input wins. Rules may push a new mode onto
//! the lexer's mode stack, or pop the current one.

use std::fmt::Display;

use crate::token::TokenKind;

use super::input::{is_text_char, is_word_char};

/// A named scanning context that determines which token patterns are active.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Mode {
    /// Plain code outside of any string.
    Root,

    /// The body of a double quoted string.
    String,

    /// The body of a `${...}` interpolation within a string.
    Interpolated,
}

impl Mode {
    /// Returns the rules that are active in this mode, in priority order.
    pub(crate) fn rules(self) -> &'static [Rule] {
        match self {
            Mode::Root => ROOT_RULES,
            Mode::String => STRING_RULES,
            Mode::Interpolated => INTERPOLATED_RULES,
        }
    }
}

impl Display for Mode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Mode::Root => write!(f, "code"),
            Mode::String => write!(f, "string"),
            Mode::Interpolated => write!(f, "interpolation"),
        }
    }
}

/// A single entry in a mode's rule list.
#[derive(Debug)]
pub(crate) enum Rule {
    /// Emits a token of `kind` if `pattern` matches, then performs `action`.
    Match {
        kind: TokenKind,
        pattern: Pattern,
        action: Action,
    },

    /// Tries all rules of another mode.
    Include(Mode),
}

/// What to do with the mode stack after a rule has matched.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Action {
    Stay,
    Push(Mode),
    Pop,
}

/// Input patterns recognized by the lexer.
#[derive(Debug)]
pub(crate) enum Pattern {
    /// An exact sequence of characters.
    Exact(&'static str),

    /// A non-empty run of word characters.
    Word,

    /// A backslash followed by any single character.
    Escape,

    /// A non-empty run of string text, ending before `"`, `\` or `${`.
    Text,
}

impl Pattern {
    /// Returns the length in bytes of the match at the start of `input`, if any.
    pub(crate) fn match_len(&self, input: &str) -> Option<usize> {
        let len = match self {
            Pattern::Exact(exact) if input.starts_with(exact) => exact.len(),
            Pattern::Exact(_) => 0,
            Pattern::Word => input
                .find(|ch| !is_word_char(ch))
                .unwrap_or(input.len()),
            Pattern::Escape => {
                let mut chars = input.chars();
                match (chars.next(), chars.next()) {
                    (Some('\\'), Some(escaped)) => 1 + escaped.len_utf8(),
                    _ => 0,
                }
            }
            Pattern::Text => text_len(input),
        };

        (len > 0).then_some(len)
    }
}

/// Returns the length of the text run at the start of `input`.
fn text_len(input: &str) -> usize {
    let mut len = 0;
    for (i, ch) in input.char_indices() {
        if !is_text_char(ch) || input[i..].starts_with(INTERPOLATION_START) {
            break;
        }
        len = i + ch.len_utf8();
    }
    len
}

const QUOTE: &str = "\"";
const INTERPOLATION_START: &str = "${";
const INTERPOLATION_END: &str = "}";

static ROOT_RULES: &[Rule] = &[
    Rule::Match {
        kind: TokenKind::Ident,
        pattern: Pattern::Word,
        action: Action::Stay,
    },
    Rule::Match {
        kind: TokenKind::StringStart,
        pattern: Pattern::Exact(QUOTE),
        action: Action::Push(Mode::String),
    },
];

static STRING_RULES: &[Rule] = &[
    Rule::Match {
        kind: TokenKind::StringEnd,
        pattern: Pattern::Exact(QUOTE),
        action: Action::Pop,
    },
    Rule::Match {
        kind: TokenKind::Escaped,
        pattern: Pattern::Escape,
        action: Action::Stay,
    },
    Rule::Match {
        kind: TokenKind::InterpolatedStart,
        pattern: Pattern::Exact(INTERPOLATION_START),
        action: Action::Push(Mode::Interpolated),
    },
    Rule::Match {
        kind: TokenKind::Char,
        pattern: Pattern::Text,
        action: Action::Stay,
    },
];

static INTERPOLATED_RULES: &[Rule] = &[
    Rule::Match {
        kind: TokenKind::InterpolatedEnd,
        pattern: Pattern::Exact(INTERPOLATION_END),
        action: Action::Pop,
    },
    Rule::Include(Mode::Root),
];
