use strint_ast::{
    Ast, Escaped, Expr, Ident, Interpolated, Position, StringFragment, StringLiteral, Text,
};

use super::{cursor::TokenCursor, expr::parse_expr, parse};
use crate::{
    error::{Error, LexError, ParseError},
    lex::mode::Mode,
    token::{Token, TokenKind},
};

fn pos(offset: usize) -> Position {
    Position::new(offset, 1, offset + 1)
}

fn string(position: Position, fragments: Vec<StringFragment>) -> Expr {
    Expr::String(StringLiteral {
        position,
        fragments,
    })
}

fn text(s: &str, offset: usize) -> StringFragment {
    StringFragment::Text(Text::new(s, pos(offset)))
}

fn interpolated(expr: Option<Expr>, offset: usize) -> StringFragment {
    StringFragment::Interpolated(Interpolated::new(expr, pos(offset)))
}

fn ident(s: &str, offset: usize) -> Expr {
    Expr::Ident(Ident::new(s, pos(offset)))
}

#[test]
fn parse_ident() {
    assert_eq!(
        parse("foo"),
        Ok(Ast {
            position: pos(0),
            expr: ident("foo", 0),
        })
    );
}

#[test]
fn parse_plain_string() {
    let ast = parse(r#""hello world""#).unwrap();
    assert_eq!(ast.expr, string(pos(0), vec![text("hello world", 1)]));
}

#[test]
fn parse_empty_string() {
    let ast = parse(r#""""#).unwrap();
    assert_eq!(ast.expr, string(pos(0), vec![]));
}

#[test]
fn parse_interpolated_string() {
    let ast = parse(r#""echo $HOME ${foo}""#).unwrap();
    assert_eq!(
        ast.expr,
        string(
            pos(0),
            vec![
                text("echo $HOME ", 1),
                interpolated(Some(ident("foo", 14)), 12),
            ]
        )
    );
}

#[test]
fn parse_empty_interpolation() {
    let ast = parse(r#""${}""#).unwrap();
    assert_eq!(ast.expr, string(pos(0), vec![interpolated(None, 1)]));
}

#[test]
fn parse_escapes() {
    let ast = parse(r#""a\"b""#).unwrap();
    assert_eq!(
        ast.expr,
        string(
            pos(0),
            vec![
                text("a", 1),
                StringFragment::Escaped(Escaped::new("\\\"", pos(2))),
                text("b", 4),
            ]
        )
    );

    let Expr::String(literal) = ast.expr else {
        panic!("expected a string");
    };
    assert_eq!(literal.content(), Some("a\"b".into()));
}

#[test]
fn parse_nested_strings() {
    let src = r#""${"${"${x}"}"}""#;
    let ast = parse(src).unwrap();
    assert_eq!(ast.expr.nesting_depth(), 3);
    assert_eq!(
        ast.expr,
        string(
            pos(0),
            vec![interpolated(
                Some(string(
                    pos(3),
                    vec![interpolated(
                        Some(string(
                            pos(6),
                            vec![interpolated(Some(ident("x", 9)), 7)]
                        )),
                        4
                    )]
                )),
                1
            )]
        )
    );
    assert_eq!(ast.to_string(), src);
}

#[test]
fn parse_round_trips() {
    let inputs = [
        "x",
        r#""""#,
        r#""echo $HOME ${foo}""#,
        r#""a\"b\\c\${d}""#,
        r#""${}${x}${"y"}""#,
        "\"multiple\nlines ${\"and ${nested}\"}\"",
    ];
    for input in inputs {
        assert_eq!(parse(input).unwrap().to_string(), input);
    }
}

#[test]
fn parse_positions_on_later_lines() {
    let ast = parse("\"a\n${b}\"").unwrap();
    assert_eq!(
        ast.expr,
        string(
            pos(0),
            vec![
                text("a\n", 1),
                StringFragment::Interpolated(Interpolated::new(
                    Some(Expr::Ident(Ident::new("b", Position::new(5, 2, 3)))),
                    Position::new(3, 2, 1),
                )),
            ]
        )
    );
}

#[test]
fn parse_unterminated_string() {
    assert_eq!(
        parse(r#""abc"#),
        Err(Error::Lex(LexError::Unterminated {
            mode: Mode::String,
            opened_at: pos(0),
            position: pos(4),
        }))
    );
}

#[test]
fn parse_unbalanced_interpolation() {
    let Err(Error::Parse(error)) = parse(r#""${foo""#) else {
        panic!("expected a parse error");
    };
    assert_eq!(error.expected(), vec![TokenKind::InterpolatedEnd]);
    assert_eq!(error.found(), TokenKind::StringStart);
    assert_eq!(error.position(), pos(6));
}

#[test]
fn parse_unclosed_interpolation() {
    assert_eq!(
        parse(r#""${"#),
        Err(Error::Lex(LexError::Unterminated {
            mode: Mode::Interpolated,
            opened_at: pos(1),
            position: pos(3),
        }))
    );
}

#[test]
fn parse_empty_input() {
    assert_eq!(
        parse(""),
        Err(Error::Parse(ParseError::ExpectedExpr {
            found: TokenKind::EndOfInput,
            position: pos(0),
        }))
    );
}

#[test]
fn parse_trailing_input() {
    assert_eq!(
        parse(r#""a""b""#),
        Err(Error::Parse(ParseError::ExpectedToken {
            expected: TokenKind::EndOfInput,
            found: TokenKind::StringStart,
            position: pos(3),
        }))
    );
}

#[test]
fn parse_stops_at_first_error() {
    // The trailing '?' is never lexed.
    assert!(matches!(
        parse(r#""${a b}" ?"#),
        Err(Error::Lex(LexError::UnexpectedChar { found: ' ', .. }))
    ));
}

#[test]
fn parse_unexpected_token_in_expr() {
    let mut tokens = TokenCursor::new(
        vec![Ok(Token::new(TokenKind::StringEnd, "\"", pos(0)))].into_iter(),
    );
    assert_eq!(
        parse_expr(&mut tokens),
        Err(Error::Parse(ParseError::ExpectedExpr {
            found: TokenKind::StringEnd,
            position: pos(0),
        }))
    );
}

#[test]
fn parse_unexpected_token_in_string() {
    let mut tokens = TokenCursor::new(
        vec![
            Ok(Token::new(TokenKind::StringStart, "\"", pos(0))),
            Ok(Token::new(TokenKind::Char, "abc", pos(1))),
            Ok(Token::new(TokenKind::Ident, "x", pos(4))),
        ]
        .into_iter(),
    );
    let error = parse_expr(&mut tokens);
    assert_eq!(
        error,
        Err(Error::Parse(ParseError::UnterminatedString {
            opened_at: pos(0),
            found: TokenKind::Ident,
            position: pos(4),
        }))
    );
}

#[test]
fn parse_premature_end_in_string() {
    let mut tokens = TokenCursor::new(
        vec![Ok::<_, LexError>(Token::new(TokenKind::StringStart, "\"", pos(0)))].into_iter(),
    );
    let Err(Error::Parse(error)) = parse_expr(&mut tokens) else {
        panic!("expected a parse error");
    };
    assert_eq!(error.found(), TokenKind::EndOfInput);
    assert_eq!(error.position(), pos(1));
    assert!(error.expected().contains(&TokenKind::StringEnd));
}

#[test]
fn parse_deeply_nested_strings() {
    let nested = |depth: usize| {
        (0..depth).fold("x".to_string(), |inner, _| format!("\"${{{inner}}}\""))
    };

    let ast = parse(&nested(crate::MAX_DEPTH / 2)).unwrap();
    assert_eq!(ast.expr.nesting_depth(), crate::MAX_DEPTH / 2);

    assert!(matches!(
        parse(&nested(2000)),
        Err(Error::Lex(LexError::TooDeep { .. }))
    ));
}
