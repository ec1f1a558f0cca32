#[cfg(test)]
/// Parser unit tests.
///
/// These tests focus on block structure inferred from indentation and on the fatal
/// end-of-input paths.
mod tests {
    use super::*;
    use crate::lexer;

    fn parse_str(source: &str) -> Result<Program, ParseError> {
        let tokens = lexer::lex(source).expect("source should lex");
        parse(&tokens)
    }

    fn parse_ok(source: &str) -> Program {
        parse_str(source).unwrap_or_else(|e| panic!("{source:?} should parse: {e}"))
    }

    fn ident(value: &str) -> Node {
        Node::ident(value)
    }

    fn func_body(node: &Node) -> &[Node] {
        match node {
            Node::TopLevelFuncDef { body } | Node::FuncDef { body } => body,
            other => panic!("Expected function literal, got {other:?}"),
        }
    }

    fn assign<'p>(node: &'p Node, expected: &str) -> &'p [Node] {
        match node {
            Node::AssignExpression { name, body } => {
                assert_eq!(name, expected);
                body
            }
            other => panic!("Expected assignment, got {other:?}"),
        }
    }

    #[test]
    fn test_empty_program() {
        let program = parse_ok("");
        assert!(program.body.is_empty());
    }

    #[test]
    fn test_single_line_function_in_assignment() {
        let program = parse_ok("test = () -> print('Hello!')");
        assert_eq!(program.body.len(), 1);
        let body = assign(&program.body[0], "test");
        assert_eq!(body[0], Node::ParenBlock { body: vec![] });
        assert_eq!(
            func_body(&body[1]),
            &[
                ident("print"),
                Node::ParenBlock {
                    body: vec![Node::string("Hello!")]
                }
            ]
        );
        assert!(matches!(body[1], Node::TopLevelFuncDef { .. }));
    }

    #[test]
    fn test_return_with_prefix_operator() {
        let program = parse_ok("testOne = (x) -> return x + 1");
        let body = assign(&program.body[0], "testOne");
        assert_eq!(body[0], Node::ParenBlock { body: vec![ident("x")] });
        assert_eq!(
            func_body(&body[1]),
            &[Node::ReturnExpression {
                body: vec![
                    ident("x"),
                    Node::Operator {
                        value: "+".to_string(),
                        operand: Box::new(Node::number("1")),
                    }
                ]
            }]
        );
    }

    #[test]
    fn test_caret_is_return() {
        let program = parse_ok("^ x");
        assert_eq!(program.body, vec![Node::ReturnExpression { body: vec![ident("x")] }]);
    }

    #[test]
    fn test_multi_line_function_keeps_every_line() {
        let program = parse_ok("test = ->\n\tx = testOne(1)\n\tprint(x)\n");
        assert_eq!(program.body.len(), 1);
        let body = assign(&program.body[0], "test");
        assert_eq!(body.len(), 1);
        let stmts = func_body(&body[0]);
        assert_eq!(stmts.len(), 3);
        assert_eq!(
            assign(&stmts[0], "x"),
            &[
                ident("testOne"),
                Node::ParenBlock {
                    body: vec![Node::number("1")]
                }
            ]
        );
        assert_eq!(stmts[1], ident("print"));
        assert_eq!(stmts[2], Node::ParenBlock { body: vec![ident("x")] });
    }

    #[test]
    fn test_dedent_closes_block() {
        // Leading spaces on a line become tabs, same as real tab characters.
        let program = parse_ok("f = ->\n a\n b\nc");
        assert_eq!(program.body.len(), 2);
        let body = assign(&program.body[0], "f");
        assert_eq!(func_body(&body[0]), &[ident("a"), ident("b")]);
        assert_eq!(program.body[1], ident("c"));
    }

    #[test]
    fn test_blank_and_tab_only_lines_do_not_close_block() {
        let program = parse_ok("f = ->\n\ta\n\n\t\n\tb\n");
        let body = assign(&program.body[0], "f");
        assert_eq!(func_body(&body[0]), &[ident("a"), ident("b")]);
    }

    #[test]
    fn test_block_ending_in_assignment_closes_on_dedent() {
        let program = parse_ok("f = ->\n\tx = 1\ny = 2\n");
        assert_eq!(program.body.len(), 2);
        let body = assign(&program.body[0], "f");
        assert_eq!(assign(&func_body(&body[0])[0], "x"), &[Node::number("1")]);
        assert_eq!(assign(&program.body[1], "y"), &[Node::number("2")]);
    }

    #[test]
    fn test_nested_blocks_close_together() {
        let program = parse_ok("f = ->\n\tg = ->\n\t\ta\nb\n");
        assert_eq!(program.body.len(), 2);
        let outer = func_body(&assign(&program.body[0], "f")[0]);
        assert_eq!(outer.len(), 1);
        let inner = &assign(&outer[0], "g")[0];
        assert!(matches!(inner, Node::FuncDef { .. }), "nested function should not be top-level");
        assert_eq!(func_body(inner), &[ident("a")]);
        assert_eq!(program.body[1], ident("b"));
    }

    #[test]
    fn test_dedent_to_middle_level_resumes_outer_block() {
        let program = parse_ok("f = ->\n\tg = ->\n\t\ta\n\tb\n");
        assert_eq!(program.body.len(), 1);
        let outer = func_body(&assign(&program.body[0], "f")[0]);
        assert_eq!(outer.len(), 2);
        assert_eq!(func_body(&assign(&outer[0], "g")[0]), &[ident("a")]);
        assert_eq!(outer[1], ident("b"));
    }

    #[test]
    fn test_single_line_function_inside_block_is_nested() {
        let program = parse_ok("f = ->\n\tg = -> a\n");
        let outer = func_body(&assign(&program.body[0], "f")[0]);
        assert!(matches!(assign(&outer[0], "g")[0], Node::FuncDef { .. }));
    }

    #[test]
    fn test_single_line_if_else_are_siblings() {
        let program = parse_ok("if a then b else c");
        assert_eq!(
            program.body,
            vec![
                Node::IfStatement {
                    condition: vec![ident("a")],
                    body: vec![ident("b")],
                },
                Node::ElseStatement { body: vec![ident("c")] },
            ]
        );
    }

    #[test]
    fn test_multi_line_if_else() {
        let program = parse_ok("if a\n\tb\n\tc\nelse\n\td\n");
        assert_eq!(
            program.body,
            vec![
                Node::IfStatement {
                    condition: vec![ident("a")],
                    body: vec![ident("b"), ident("c")],
                },
                Node::ElseStatement { body: vec![ident("d")] },
            ]
        );
    }

    #[test]
    fn test_bracketed_forms() {
        let program = parse_ok("[1, 'a'] {x y} (f [2])");
        assert_eq!(
            program.body,
            vec![
                Node::Array {
                    body: vec![Node::number("1"), Node::string("a")]
                },
                Node::ArrayLiteral {
                    body: vec![ident("x"), ident("y")]
                },
                Node::ParenBlock {
                    body: vec![
                        ident("f"),
                        Node::Array {
                            body: vec![Node::number("2")]
                        }
                    ]
                },
            ]
        );
    }

    #[test]
    fn test_brace_literal_keeps_every_element() {
        let program = parse_ok("{1 2 3}");
        assert_eq!(
            program.body,
            vec![Node::ArrayLiteral {
                body: vec![Node::number("1"), Node::number("2"), Node::number("3")]
            }]
        );
    }

    #[test]
    fn test_brackets_span_lines() {
        let program = parse_ok("[1\n\t2]");
        assert_eq!(
            program.body,
            vec![Node::Array {
                body: vec![Node::number("1"), Node::number("2")]
            }]
        );
    }

    #[test]
    fn test_standalone_prefix_operator() {
        let program = parse_ok("- 5");
        assert_eq!(
            program.body,
            vec![Node::Operator {
                value: "-".to_string(),
                operand: Box::new(Node::number("5")),
            }]
        );
    }

    #[test]
    fn test_ignored_tokens_produce_no_nodes() {
        let program = parse_ok("\"note\" a == b; c");
        assert_eq!(program.body, vec![ident("a"), ident("b"), ident("c")]);
    }

    #[test]
    fn test_assignment_without_spaces() {
        let program = parse_ok("x=1");
        assert_eq!(assign(&program.body[0], "x"), &[Node::number("1")]);
    }

    #[test]
    fn test_no_absent_entries_in_bodies() {
        let program = parse_ok("f = ->\n\n\t\"c\"\n\ta ,\n\n");
        let body = func_body(&assign(&program.body[0], "f")[0]);
        assert_eq!(body, &[ident("a")]);
    }

    #[test]
    fn test_indent_stack_empty_after_parse() {
        let tokens = lexer::lex("f = ->\n\tg = ->\n\t\tif a\n\t\t\tb\n").expect("lex");
        let mut parser = Parser::new(&tokens);
        assert!(parser.indent_stack().is_empty());
        parser.parse().expect("parse");
        assert!(parser.indent_stack().is_empty());
        assert_eq!(parser.indent_stack().depth(), 0);
        assert_eq!(parser.indent_stack().top(), None);
    }

    #[test]
    fn test_unclosed_paren_is_unexpected_end() {
        let err = parse_str("f(").expect_err("unclosed paren should fail");
        assert_eq!(err, ParseError::unexpected_end(Construct::ParenBlock));
    }

    #[test]
    fn test_unclosed_array_and_brace() {
        assert_eq!(
            parse_str("[1").unwrap_err(),
            ParseError::unexpected_end(Construct::Array)
        );
        assert_eq!(
            parse_str("{").unwrap_err(),
            ParseError::unexpected_end(Construct::ArrayLiteral)
        );
    }

    #[test]
    fn test_operator_at_end_of_input() {
        assert_eq!(
            parse_str("x = +").unwrap_err(),
            ParseError::unexpected_end(Construct::Operand)
        );
    }

    #[test]
    fn test_operator_before_newline_is_missing_operand() {
        assert_eq!(
            parse_str("x = +\ny").unwrap_err(),
            ParseError::MissingOperand {
                operator: "+".to_string()
            }
        );
    }

    #[test]
    fn test_unfinished_if_and_else() {
        assert_eq!(
            parse_str("if a").unwrap_err(),
            ParseError::unexpected_end(Construct::IfCondition)
        );
        assert_eq!(
            parse_str("else").unwrap_err(),
            ParseError::unexpected_end(Construct::ElseBody)
        );
    }

    #[test]
    fn test_unclosed_deep_parens_hit_nesting_limit() {
        let source = "(".repeat(10_000);
        assert_eq!(
            parse_str(&source).unwrap_err(),
            ParseError::NestingTooDeep {
                construct: Construct::ParenBlock
            }
        );
    }

    #[test]
    fn test_balanced_deep_parens_hit_nesting_limit() {
        let source = format!("{}{}", "(".repeat(10_000), ")".repeat(10_000));
        assert_eq!(
            parse_str(&source).unwrap_err(),
            ParseError::NestingTooDeep {
                construct: Construct::ParenBlock
            }
        );
    }

    #[test]
    fn test_chained_assignments_hit_nesting_limit() {
        let source = "a = ".repeat(10_000);
        assert_eq!(
            parse_str(&source).unwrap_err(),
            ParseError::NestingTooDeep {
                construct: Construct::Assignment
            }
        );
    }

    #[test]
    fn test_nesting_below_limit_parses() {
        let depth = MAX_NESTING - 1;
        let source = format!("{}x{}", "[".repeat(depth), "]".repeat(depth));
        let program = parse_ok(&source);

        let mut node = &program.body[0];
        let mut levels = 1;
        while let Node::Array { body } = node {
            match body.as_slice() {
                [inner @ Node::Array { .. }] => {
                    node = inner;
                    levels += 1;
                }
                [leaf] => {
                    assert_eq!(leaf, &ident("x"));
                    break;
                }
                other => panic!("Expected one child, got {other:?}"),
            }
        }
        assert_eq!(levels, depth);
    }

    #[test]
    fn test_nesting_counter_resets_between_statements() {
        let line = format!("{}{}\n", "(".repeat(100), ")".repeat(100));
        let program = parse_ok(&line.repeat(3));
        assert_eq!(program.body.len(), 3);
    }

    #[test]
    fn test_inline_function_stops_at_enclosing_closer() {
        let program = parse_ok("map(-> x) y");
        assert_eq!(
            program.body,
            vec![
                ident("map"),
                Node::ParenBlock {
                    body: vec![Node::TopLevelFuncDef { body: vec![ident("x")] }]
                },
                ident("y"),
            ]
        );
    }

    #[test]
    fn test_line_statements_stop_at_enclosing_closer() {
        let program = parse_ok("[x = 1, y] (^ z)");
        assert_eq!(
            program.body,
            vec![
                Node::Array {
                    body: vec![Node::AssignExpression {
                        name: "x".to_string(),
                        body: vec![Node::number("1"), ident("y")],
                    }]
                },
                Node::ParenBlock {
                    body: vec![Node::ReturnExpression { body: vec![ident("z")] }]
                },
            ]
        );
    }

    #[test]
    fn test_inner_closer_does_not_end_outer_line() {
        let program = parse_ok("f = -> g(a) b");
        let body = func_body(&assign(&program.body[0], "f")[0]);
        assert_eq!(
            body,
            &[
                ident("g"),
                Node::ParenBlock { body: vec![ident("a")] },
                ident("b"),
            ]
        );
    }

    #[test]
    fn test_operator_before_closer_is_missing_operand() {
        assert_eq!(
            parse_str("(a = -)").unwrap_err(),
            ParseError::MissingOperand {
                operator: "-".to_string()
            }
        );
    }

    #[test]
    fn test_slice_without_end_of_input() {
        let tokens = vec![
            Token::new(TokenKind::Ident, "x"),
            Token::new(TokenKind::Assign, "="),
            Token::new(TokenKind::Number, "1"),
        ];
        assert_eq!(
            parse(&tokens).unwrap_err(),
            ParseError::unexpected_end(Construct::Assignment)
        );
    }
}
