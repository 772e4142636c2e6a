use proptest::prelude::*;
use strint_parse::{
    ast::{Expr, StringFragment},
    parse, Lexer,
};

/// Source text of a single identifier.
fn ident_source() -> impl Strategy<Value = String> {
    "[A-Za-z0-9_]{1,12}"
}

/// Source text of one string fragment, with embedded expressions drawn from `expr`.
fn fragment_source(expr: BoxedStrategy<String>) -> impl Strategy<Value = String> {
    prop_oneof![
        "[a-z .,{}\n]{1,8}",
        "\\\\[a-z\"\\\\${}]",
        proptest::option::of(expr).prop_map(|expr| format!("${{{}}}", expr.unwrap_or_default())),
    ]
}

/// Source text of a well-formed expression.
fn expr_source() -> impl Strategy<Value = String> {
    ident_source().prop_recursive(4, 48, 4, |inner| {
        proptest::collection::vec(fragment_source(inner), 0..5)
            .prop_map(|fragments| format!("\"{}\"", fragments.concat()))
    })
}

proptest! {
    #[test]
    fn words_parse_to_identical_identifiers(src in ident_source()) {
        let ast = parse(&src).unwrap();
        match ast.expr {
            Expr::Ident(ident) => prop_assert_eq!(ident.text, src),
            other => prop_assert!(false, "expected an identifier, got {:?}", other),
        }
    }

    #[test]
    fn plain_strings_parse_to_a_single_text_fragment(content in "[a-z .,{}$\n]{1,16}") {
        prop_assume!(!content.contains("${"));
        let src = format!("\"{content}\"");
        let ast = parse(&src).unwrap();
        let Expr::String(string) = ast.expr else {
            panic!("expected a string");
        };
        prop_assert_eq!(string.fragments.len(), 1);
        prop_assert!(matches!(&string.fragments[0], StringFragment::Text(text) if text.text == content));
        prop_assert_eq!(string.content(), Some(content));
    }

    #[test]
    fn well_formed_sources_round_trip(src in expr_source()) {
        let ast = parse(&src).unwrap();
        prop_assert_eq!(ast.to_string(), src);
    }

    #[test]
    fn lexer_returns_to_root_after_well_formed_sources(src in expr_source()) {
        let mut lexer = Lexer::new(&src);
        for token in lexer.by_ref() {
            prop_assert!(token.is_ok());
        }
        prop_assert_eq!(lexer.depth(), 0);
    }

    #[test]
    fn truncated_strings_never_parse(src in expr_source()) {
        prop_assume!(src.starts_with('"'));
        let truncated = &src[..src.len() - 1];
        prop_assert!(parse(truncated).is_err());
    }
}

#[test]
fn parses_independently_on_separate_threads() {
    let inputs = ["foo", r#""${bar}""#, r#""${"${baz}"}""#];
    std::thread::scope(|scope| {
        let handles: Vec<_> = inputs
            .iter()
            .map(|input| scope.spawn(move || parse(input).map(|ast| ast.to_string())))
            .collect();

        for (handle, input) in handles.into_iter().zip(inputs) {
            assert_eq!(handle.join().unwrap(), Ok(input.to_string()));
        }
    });
}
