use std::fs;

use capuchin::{
    interpret,
    interpreter::{environment::Environment, value::Value},
};
use walkdir::WalkDir;

#[test]
fn book_examples_work() {
    let mut count = 0;

    for entry in
        WalkDir::new("book/src").into_iter()
                                .filter_map(Result::ok)
                                .filter(|e| e.path().extension().is_some_and(|ext| ext == "md"))
    {
        let path = entry.path();
        let content =
            fs::read_to_string(path).unwrap_or_else(|e| panic!("Failed to read {path:?}: {e}"));

        for (i, code) in extract_capuchin_blocks(&content).into_iter().enumerate() {
            count += 1;
            if let Err(e) = run(&code) {
                panic!("Example {} in {:?} failed:\n{}\nError: {}", i + 1, path, code, e);
            }
        }
    }

    assert!(count > 0, "No capuchin examples found in book/src");
}

fn extract_capuchin_blocks(content: &str) -> Vec<String> {
    let mut blocks = Vec::new();
    let mut inside = false;
    let mut buf = String::new();

    for line in content.lines() {
        let trimmed = line.trim_start();
        if trimmed.starts_with("```capuchin") {
            inside = true;
            buf.clear();
            continue;
        }
        if inside && trimmed.starts_with("```") {
            inside = false;
            blocks.push(buf.clone());
            continue;
        }
        if inside {
            buf.push_str(line);
            buf.push('\n');
        }
    }

    blocks
}

fn run(source: &str) -> Result<Option<Value>, Box<dyn std::error::Error>> {
    let env = Environment::new();
    interpret(source, &env)
}

fn assert_success(src: &str) {
    if let Err(e) = run(src) {
        panic!("Script failed: {e}\nsource: {src}");
    }
}

fn assert_value(src: &str, expected: Value) {
    match run(src) {
        Ok(Some(value)) => assert_eq!(value, expected, "source: {src}"),
        Ok(None) => panic!("Script produced no value: {src}"),
        Err(e) => panic!("Script failed: {e}\nsource: {src}"),
    }
}

fn assert_error(src: &str, expected: &str) {
    match run(src) {
        Err(e) => assert_eq!(e.to_string(), expected, "source: {src}"),
        Ok(value) => panic!("Script succeeded with {value:?} but was expected to fail: {src}"),
    }
}

#[test]
fn integer_and_boolean_literals() {
    assert_value("5", Value::Integer(5));
    assert_value("-5", Value::Integer(-5));
    assert_value("9223372036854775807", Value::Integer(i64::MAX));
    assert_value("true", Value::Bool(true));
    assert_value("false", Value::Bool(false));
}

#[test]
fn operator_precedence_and_grouping() {
    assert_value("5 + 5 * 2", Value::Integer(15));
    assert_value("(5 + 5) * 2", Value::Integer(20));
    assert_value("2 * 2 * 2 * 2 * 2", Value::Integer(32));
    assert_value("50 / 2 * 2 + 10", Value::Integer(60));
    assert_value("3 * (3 * 3) + 10", Value::Integer(37));
    assert_value("-7 / 2", Value::Integer(-3));
}

#[test]
fn comparison_and_equality() {
    assert_value("1 < 2", Value::Bool(true));
    assert_value("1 > 2", Value::Bool(false));
    assert_value("1 == 1", Value::Bool(true));
    assert_value("1 != 1", Value::Bool(false));
    assert_value("true == true", Value::Bool(true));
    assert_value("false == false", Value::Bool(true));
    assert_value("true == false", Value::Bool(false));
    assert_value("(1 < 2) == true", Value::Bool(true));
    assert_value("(1 > 2) == true", Value::Bool(false));
}

#[test]
fn equality_outside_integers_is_identity() {
    // Mixed types never raise for `==`/`!=`; they are simply unequal.
    assert_value("1 == true", Value::Bool(false));
    assert_value("true != if (false) { 1 }", Value::Bool(true));

    // Two separately written function literals are distinct values; a
    // function is only equal to itself.
    assert_value("fn(x) { x } == fn(x) { x }", Value::Bool(false));
    assert_value("let f = fn(x) { x }; f == f", Value::Bool(true));
}

#[test]
fn bang_operator_uses_truthiness() {
    assert_value("!true", Value::Bool(false));
    assert_value("!false", Value::Bool(true));
    assert_value("!5", Value::Bool(false));
    assert_value("!0", Value::Bool(false));
    assert_value("!!true", Value::Bool(true));
    assert_value("!!5", Value::Bool(true));
}

#[test]
fn conditionals() {
    assert_value("if (true) { 10 }", Value::Integer(10));
    assert_value("if (false) { 10 }", Value::Null);
    assert_value("if (1) { 10 }", Value::Integer(10));
    assert_value("if (0) { 10 }", Value::Integer(10));
    assert_value("if (1 > 2) { 10 } else { 20 }", Value::Integer(20));
    assert_value("let a = 5; let b = a > 3; let c = a * 99; if (b) { 10 } else { 1 };",
                 Value::Integer(10));
}

#[test]
fn skipped_conditionals_share_the_null_value() {
    assert_value("if (false) { 1 } == if (false) { 2 }", Value::Bool(true));
}

#[test]
fn let_bindings() {
    assert_value("let a = 5; a;", Value::Integer(5));
    assert_value("let a = 5 * 5; a;", Value::Integer(25));
    assert_value("let a = 5; let b = a; b;", Value::Integer(5));
    assert_value("let a = 5; let b = a; let c = a + b + 5; c;", Value::Integer(15));
}

#[test]
fn let_statements_produce_no_value() {
    let result = run("let a = 5;").expect("script failed");
    assert_eq!(result, None);
}

#[test]
fn return_statements() {
    assert_value("return 10;", Value::Integer(10));
    assert_value("return 10; 9;", Value::Integer(10));
    assert_value("return 2 * 5; 9;", Value::Integer(10));
    assert_value("9; return 2 * 5; 9;", Value::Integer(10));
}

#[test]
fn return_unwraps_only_at_the_function_boundary() {
    assert_value("if (10 > 1) { if (10 > 1) { return 10; } return 1; }", Value::Integer(10));
    assert_value("let f = fn() { if (true) { return 1; } 2 }; f() + 10;", Value::Integer(11));
}

#[test]
fn functions_and_calls() {
    assert_value("let identity = fn(x) { x; }; identity(5);", Value::Integer(5));
    assert_value("let identity = fn(x) { return x; }; identity(5);", Value::Integer(5));
    assert_value("let double = fn(x) { x * 2; }; double(5);", Value::Integer(10));
    assert_value("let add = fn(x, y) { x + y; }; add(5, 5);", Value::Integer(10));
    assert_value("let add = fn(x, y) { x + y; }; add(5 + 5, add(5, 5));", Value::Integer(20));
    assert_value("fn(x) { x; }(5)", Value::Integer(5));
}

#[test]
fn closures_capture_their_definition_site() {
    assert_value("let newAdder = fn(x) { fn(y) { x + y } }; let addTwo = newAdder(2); addTwo(3);",
                 Value::Integer(5));

    // The closure keeps seeing its defining environment even when the
    // calling function binds the same name.
    assert_value("let n = 1;
                  let f = fn() { n };
                  let g = fn() { let n = 99; f() };
                  g();",
                 Value::Integer(1));
}

#[test]
fn recursion_with_early_return() {
    assert_value("let counter = fn(x) { if (x > 100) { return true; } else { counter(x + 1); } }; \
                  counter(0);",
                 Value::Bool(true));
}

#[test]
fn functions_render_their_source_form() {
    let result = run("fn(x) { x + 2; }").expect("script failed");
    assert_eq!(result.expect("no value").to_string(), "fn(x) {\n(x + 2)\n}");
}

#[test]
fn runtime_errors_have_stable_messages() {
    assert_error("foobar", "identifier not found: foobar");
    assert_error("5 + true;", "type mismatch: INTEGER + BOOLEAN");
    assert_error("5 + true; 5;", "type mismatch: INTEGER + BOOLEAN");
    assert_error("-true", "unknown operator: -BOOLEAN");
    assert_error("true + false;", "unknown operator: BOOLEAN + BOOLEAN");
    assert_error("5; true + false; 5", "unknown operator: BOOLEAN + BOOLEAN");
    assert_error("if (10 > 1) { true + false; }", "unknown operator: BOOLEAN + BOOLEAN");
}

#[test]
fn division_by_zero_is_an_error() {
    assert_error("1 / 0", "division by zero");
    assert_error("let x = 10; x / (5 - 5)", "division by zero");
}

#[test]
fn errors_are_sticky() {
    assert_error("let x = foobar; 1;", "identifier not found: foobar");
    assert_error("foobar + 1", "identifier not found: foobar");
    assert_error("-(1 / 0)", "division by zero");
    assert_error("!(1 / 0)", "division by zero");
    assert_error("if (foobar) { 1 }", "identifier not found: foobar");
    assert_error("let f = fn(x) { x }; f(foobar)", "identifier not found: foobar");
}

#[test]
fn calling_a_non_function_is_an_error() {
    assert_error("let x = 5; x(1);", "not a function: INTEGER");
    assert_error("true();", "not a function: BOOLEAN");
}

#[test]
fn wrong_argument_count_is_an_error() {
    assert_error("let add = fn(x, y) { x + y }; add(1);",
                 "wrong number of arguments: expected 2, got 1");
    assert_error("let id = fn(x) { x }; id(1, 2);",
                 "wrong number of arguments: expected 1, got 2");
}

#[test]
fn macro_definitions_are_collected_before_evaluation() {
    // The definition statement is filtered out; the rest runs normally.
    assert_value("let ignored = macro(x) { x }; 5;", Value::Integer(5));
    // The bound macro is visible in the environment afterwards.
    assert_success("let m = macro(x) { x }; m;");
}

#[test]
fn script_file_runs() {
    let script = fs::read_to_string("tests/example.cap").expect("missing file");
    assert_value(&script, Value::Integer(55));
}
