//! Property-based tests for the parser.

use cmm_ir::{Stmt, TokenKind};
use cmm_parse::parse;
use proptest::prelude::*;

// ============================================================================
// Strategies
// ============================================================================

fn arb_int() -> impl Strategy<Value = String> {
    (0i64..=100_000).prop_map(|n| n.to_string())
}

fn arb_ident() -> impl Strategy<Value = String> {
    "[a-z]{1,6}".prop_filter("keywords are not identifiers", |s| {
        TokenKind::keyword(s).is_none()
    })
}

fn arb_binop() -> impl Strategy<Value = &'static str> {
    prop_oneof![
        Just("+"),
        Just("-"),
        Just("*"),
        Just("/"),
        Just("%"),
        Just("=="),
        Just("!="),
        Just("<"),
        Just(">"),
        Just("<="),
        Just(">="),
        Just("&&"),
        Just("||"),
    ]
}

fn arb_operand() -> impl Strategy<Value = String> {
    prop_oneof![arb_int(), arb_ident()]
}

/// Operand chains, optionally parenthesised.
fn arb_expr() -> impl Strategy<Value = String> {
    arb_operand().prop_recursive(4, 24, 3, |inner| {
        prop_oneof![
            (inner.clone(), arb_binop(), inner.clone())
                .prop_map(|(l, op, r)| format!("{l} {op} {r}")),
            inner.prop_map(|e| format!("({e})")),
        ]
    })
}

/// Well-formed statements for use inside a block.
///
/// An assignment is always followed by a `print`: two operands in a row
/// outside print arguments are a missing-operator error.
fn arb_block_stmt() -> impl Strategy<Value = String> {
    let leaf = prop_oneof![
        (arb_ident(), arb_expr()).prop_map(|(name, e)| format!("{name} = {e}\nprint {name}")),
        prop::collection::vec(arb_expr(), 1..4).prop_map(|vs| format!("print {}", vs.join(", "))),
    ];
    leaf.prop_recursive(3, 16, 3, |inner| {
        let body = prop::collection::vec(inner, 0..3).prop_map(|stmts| stmts.join("\n"));
        prop_oneof![
            (arb_expr(), body.clone()).prop_map(|(c, b)| format!("while ({c}) {{\n{b}\n}}")),
            (arb_expr(), body.clone()).prop_map(|(c, b)| format!("if ({c}) {{\n{b}\n}}")),
            (arb_expr(), body.clone(), body)
                .prop_map(|(c, t, e)| format!("if ({c}) {{\n{t}\n}} else {{\n{e}\n}}")),
        ]
    })
}

// ============================================================================
// Properties
// ============================================================================

proptest! {
    #![proptest_config(ProptestConfig::with_cases(64))]

    /// The parser never panics, whatever the input.
    #[test]
    fn parser_no_panic(input in ".{0,100}") {
        let _ = parse(&input);
    }

    #[test]
    fn parser_no_panic_on_token_soup(
        words in prop::collection::vec(
            prop_oneof![
                Just("if"), Just("else"), Just("while"), Just("print"), Just("x"),
                Just("1"), Just("="), Just("+"), Just("("), Just(")"), Just("{"),
                Just("}"), Just(","), Just("&&"),
            ],
            0..40,
        )
    ) {
        let _ = parse(&words.join(" "));
    }

    /// Every well-formed assignment parses cleanly.
    #[test]
    fn assignment_parses(name in arb_ident(), expr in arb_expr()) {
        let source = format!("{name} = {expr}");
        let output = parse(&source);
        prop_assert!(!output.has_errors(), "{}: {:?}", source, output.errors);
        prop_assert_eq!(output.program.len(), 1);
    }

    /// The parenthesised rendering is itself valid and parses to the same tree shape.
    #[test]
    fn rendering_reparses(expr in arb_expr()) {
        let first = parse(&format!("x = {expr}"));
        prop_assume!(!first.has_errors());
        let rendered = first.program.statements[0].to_string();
        let second = parse(&rendered);
        prop_assert!(!second.has_errors(), "{}: {:?}", rendered, second.errors);
        prop_assert_eq!(second.program.statements[0].to_string(), rendered);
    }

    /// Nested statements come out as exactly one top-level statement.
    #[test]
    fn nested_blocks_parse(stmt in arb_block_stmt()) {
        let source = format!("while (1) {{\n{stmt}\n}}");
        let output = parse(&source);
        prop_assert!(!output.has_errors(), "{}: {:?}", source, output.errors);
        prop_assert_eq!(output.program.len(), 1);
    }

    /// Block statements parsed after a while are kept in order.
    #[test]
    fn while_body_counts(n in 0usize..6) {
        let body: Vec<String> = (0..n).map(|i| format!("print {i}")).collect();
        let source = format!("while (1) {{ {} }}", body.join("\n"));
        let output = parse(&source);
        prop_assert!(!output.has_errors());
        let Stmt::While(w) = &output.program.statements[0] else {
            return Err(TestCaseError::fail("expected while"));
        };
        prop_assert_eq!(w.body.statements.len(), n);
    }
}
