//! Property-based tests for the Flick front end
//!
//! These tests use proptest to verify invariants across many randomly
//! generated inputs, catching edge cases that hand-written tests might miss.

use flick::ast::Node;
use flick::lexer::{self, TokenKind};
use proptest::prelude::*;

// Strategy for generating identifiers that are neither keywords nor prefix operators
fn ident_strategy() -> impl Strategy<Value = String> {
    "[a-z][a-zA-Z0-9_]{0,8}".prop_filter("Not a keyword", |s| {
        flick::lang::keywords::from_str(s).is_none()
    })
}

// =============================================================================
// Lexer Properties
// =============================================================================

proptest! {
    /// Property: Tokenizing the same input twice yields the same tokens
    #[test]
    fn tokenization_is_deterministic(source in any::<String>()) {
        prop_assert_eq!(lexer::lex(&source), lexer::lex(&source));
    }

    /// Property: Every successful token stream ends in exactly one EndOfInput
    #[test]
    fn token_stream_ends_with_end_of_input(source in any::<String>()) {
        if let Ok(tokens) = lexer::lex(&source) {
            prop_assert_eq!(tokens.last().map(|t| t.kind), Some(TokenKind::EndOfInput));
            prop_assert_eq!(tokens.iter().filter(|t| t.kind == TokenKind::EndOfInput).count(), 1);
        }
    }

    /// Property: Without literal delimiters the lexer cannot fail
    #[test]
    fn input_without_quotes_always_lexes(source in "[^'\"]{0,64}") {
        prop_assert!(lexer::lex(&source).is_ok());
    }

    /// Property: Tab tokens always carry a tab, whatever produced them
    #[test]
    fn tab_tokens_are_normalized(source in "[ \ta-z\n]{0,40}") {
        let tokens = lexer::lex(&source).expect("Lex failed");
        for tok in tokens.iter().filter(|t| t.kind == TokenKind::Tab) {
            prop_assert_eq!(tok.text.as_str(), "\t");
        }
    }
}

// =============================================================================
// Parser Properties
// =============================================================================

proptest! {
    /// Property: Compiling arbitrary text returns a result, never panics
    #[test]
    fn compile_never_panics(source in any::<String>()) {
        let _ = flick::compile(&source);
    }

    /// Property: Compiling arbitrary bracket/layout soup never panics
    #[test]
    fn structural_soup_never_panics(source in "[-\\[\\](){}>^=+ \t\nabif]{0,48}") {
        let _ = flick::compile(&source);
    }

    /// Property: Arbitrarily deep bracket runs return an error instead of overflowing the stack
    #[test]
    fn deep_nesting_never_overflows(opener in "[\\[({]", depth in 0usize..4096) {
        let _ = flick::compile(&opener.repeat(depth));
    }

    /// Property: A block keeps exactly its indented lines and the dedented line follows it
    #[test]
    fn block_closes_on_dedent(
        lines in prop::collection::vec(ident_strategy(), 1..8),
        after in ident_strategy(),
    ) {
        let mut source = String::from("f = ->\n");
        for line in &lines {
            source.push('\t');
            source.push_str(line);
            source.push('\n');
        }
        source.push_str(&after);

        let program = flick::compile(&source).expect("Compile failed").program;
        prop_assert_eq!(program.body.len(), 2);
        let expected: Vec<Node> = lines.iter().map(|l| Node::ident(l.as_str())).collect();
        match &program.body[0] {
            Node::AssignExpression { body, .. } => {
                prop_assert_eq!(body.len(), 1);
                prop_assert_eq!(body[0].body(), Some(expected.as_slice()));
            }
            other => prop_assert!(false, "Expected assignment, got {:?}", other),
        }
        prop_assert_eq!(&program.body[1], &Node::ident(after.as_str()));
    }

    /// Property: Every body produced by the parser holds only real nodes, and walking visits each one once
    #[test]
    fn walk_visits_every_node(
        names in prop::collection::vec(ident_strategy(), 1..6),
    ) {
        let source = format!("x = [{}] {{{}}}\n", names.join(" "), names.join(" "));
        let program = flick::compile(&source).expect("Compile failed").program;
        // assignment + array + brace literal + 2 * names
        prop_assert_eq!(program.node_count(), 3 + 2 * names.len());
    }
}
