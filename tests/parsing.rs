use capuchin::{
    ast::{Expr, Program, Statement},
    interpreter::{
        lexer::{Token, tokens},
        parser::parse,
    },
};

fn parsed(src: &str) -> Program {
    let (program, errors) = parse(src);
    assert!(errors.is_empty(), "unexpected parse errors for {src:?}: {errors:?}");
    program
}

fn rendered(src: &str) -> String {
    parsed(src).to_string()
}

fn error_messages(src: &str) -> Vec<String> {
    let (_, errors) = parse(src);
    errors.iter().map(ToString::to_string).collect()
}

#[test]
fn illegal_input_becomes_illegal_tokens() {
    let toks = tokens("let a = @;");
    assert!(toks.contains(&(Token::Illegal("@".to_string()), 1)));

    // Lexing itself never fails; the whole rest of the stream is intact.
    assert_eq!(toks.last(), Some(&(Token::Semicolon, 1)));
}

#[test]
fn line_numbers_count_newlines() {
    let toks = tokens("let a = 1;\nlet b = 2;");
    let b_line = toks.iter()
                     .find(|(token, _)| *token == Token::Identifier("b".to_string()))
                     .map(|(_, line)| *line);
    assert_eq!(b_line, Some(2));
}

#[test]
fn let_statements_parse_their_expressions() {
    let program = parsed("let x = 5;");
    assert_eq!(program.statements.len(), 1);

    let Statement::Let { name, value, .. } = &program.statements[0] else {
        panic!("expected a let statement");
    };
    assert_eq!(name, "x");
    assert_eq!(*value, Expr::IntegerLiteral { value: 5, line: 1 });
}

#[test]
fn return_statements_parse_their_expressions() {
    let program = parsed("return 5 + 10;");
    assert_eq!(program.statements.len(), 1);

    let Statement::Return { value, .. } = &program.statements[0] else {
        panic!("expected a return statement");
    };
    assert_eq!(value.to_string(), "(5 + 10)");
}

#[test]
fn precedence_produces_expected_groupings() {
    let cases = [("-a * b", "((-a) * b)"),
                 ("!-a", "(!(-a))"),
                 ("a + b + c", "((a + b) + c)"),
                 ("a + b - c", "((a + b) - c)"),
                 ("a * b * c", "((a * b) * c)"),
                 ("a * b / c", "((a * b) / c)"),
                 ("a + b / c", "(a + (b / c))"),
                 ("a + b * c + d / e - f", "(((a + (b * c)) + (d / e)) - f)"),
                 ("3 + 4; -5 * 5", "(3 + 4) ((-5) * 5)"),
                 ("5 > 4 == 3 < 4", "((5 > 4) == (3 < 4))"),
                 ("5 < 4 != 3 > 4", "((5 < 4) != (3 > 4))"),
                 ("3 + 4 * 5 == 3 * 1 + 4 * 5", "((3 + (4 * 5)) == ((3 * 1) + (4 * 5)))"),
                 ("true", "true"),
                 ("false", "false"),
                 ("3 > 5 == false", "((3 > 5) == false)"),
                 ("1 + (2 + 3) + 4", "((1 + (2 + 3)) + 4)"),
                 ("(5 + 5) * 2", "((5 + 5) * 2)"),
                 ("2 / (5 + 5)", "(2 / (5 + 5))"),
                 ("-(5 + 5)", "(-(5 + 5))"),
                 ("!(true == true)", "(!(true == true))"),
                 ("a + add(b * c) + d", "((a + add((b * c))) + d)"),
                 ("add(a, b, 1, 2 * 3, 4 + 5, add(6, 7 * 8))",
                  "add(a, b, 1, (2 * 3), (4 + 5), add(6, (7 * 8)))"),
                 ("add(a + b + c * d / f + g)", "add((((a + b) + ((c * d) / f)) + g))")];

    for (source, expected) in cases {
        assert_eq!(rendered(source), expected, "source: {source}");
    }
}

#[test]
fn call_expressions_bind_tightest() {
    let program = parsed("add(1, 2 * 3, 4 + 5);");
    let Statement::Expression { expr: Expr::Call { callee, arguments, .. },
                                .. } = &program.statements[0]
    else {
        panic!("expected a call expression");
    };

    assert_eq!(callee.to_string(), "add");
    assert_eq!(arguments.len(), 3);
    assert_eq!(arguments[2].to_string(), "(4 + 5)");
}

#[test]
fn if_expressions_parse_both_arms() {
    let program = parsed("if (x < y) { x } else { y }");
    let Statement::Expression { expr: Expr::If { condition, alternative, .. },
                                .. } = &program.statements[0]
    else {
        panic!("expected an if expression");
    };

    assert_eq!(condition.to_string(), "(x < y)");
    assert!(alternative.is_some());
}

#[test]
fn function_literals_parse_parameter_lists() {
    for (source, expected) in [("fn() {};", Vec::new()),
                               ("fn(x) {};", vec!["x"]),
                               ("fn(x, y, z) {};", vec!["x", "y", "z"])]
    {
        let program = parsed(source);
        let Statement::Expression { expr: Expr::FunctionLiteral { parameters, .. },
                                    .. } = &program.statements[0]
        else {
            panic!("expected a function literal for {source:?}");
        };
        assert_eq!(*parameters, expected, "source: {source}");
    }
}

#[test]
fn macro_literals_parse_like_functions() {
    let program = parsed("macro(x, y) { x + y; }");
    let Statement::Expression { expr: Expr::MacroLiteral { parameters, body, .. },
                                .. } = &program.statements[0]
    else {
        panic!("expected a macro literal");
    };

    assert_eq!(*parameters, vec!["x", "y"]);
    assert_eq!(body.to_string(), "(x + y)");
}

#[test]
fn errors_accumulate_across_statements() {
    assert_eq!(error_messages("let x 5; let = 10; let 838383;"),
               vec!["expected next token to be =, got INT instead",
                    "expected next token to be IDENT, got = instead",
                    "no prefix parse function for = found",
                    "expected next token to be IDENT, got INT instead"]);
}

#[test]
fn malformed_statements_do_not_block_later_ones() {
    let (program, errors) = parse("let x 5; let y = 7;");
    assert_eq!(errors.len(), 1);

    // `5` salvages into an expression statement and `let y = 7;` parses
    // normally, so the surviving statements are still there.
    assert!(program.statements
                   .iter()
                   .any(|s| matches!(s, Statement::Let { name, .. } if name == "y")));
}

#[test]
fn prefix_position_operators_report_missing_rules() {
    assert_eq!(error_messages("+ 5;"), vec!["no prefix parse function for + found"]);
    assert_eq!(error_messages("@"), vec!["no prefix parse function for ILLEGAL found"]);
}

#[test]
fn unterminated_constructs_report_expected_tokens() {
    assert_eq!(error_messages("(1 + 2"),
               vec!["expected next token to be ), got EOF instead"]);
    assert_eq!(error_messages("if (x) 1"),
               vec!["expected next token to be {, got INT instead"]);
    // Recovery re-enters at the offending token, so the parameter-list
    // error comes first and the salvaged remainder trails after it.
    assert_eq!(error_messages("fn(x y) { x }").first().map(String::as_str),
               Some("expected next token to be ), got IDENT instead"));
}

#[test]
fn oversized_integer_literals_are_parse_errors() {
    assert_eq!(error_messages("9223372036854775808"),
               vec!["could not parse \"9223372036854775808\" as integer"]);
}

#[test]
fn pretty_printed_programs_reparse_equivalently() {
    let sources = ["let x = 5; let y = true; let foobar = y;",
                   "return 5 + 10;",
                   "-a * b; !(a == b);",
                   "if (x < y) { x } else { let z = y; z }",
                   "let getOne = fn() { 1 }; getOne();",
                   "let add = fn(x, y) { x + y; }; add(1, 2 * 3);",
                   "macro(x) { x + x }"];

    for source in sources {
        let program = parsed(source);
        let reparsed = parsed(&program.to_string());
        assert_eq!(reparsed, program, "source: {source}");
    }
}
