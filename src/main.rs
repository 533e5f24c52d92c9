use std::{
    fs,
    io::{self, BufRead, Write},
};

use capuchin::interpreter::{
    environment::{Env, Environment},
    evaluator::{core::eval_program, macros::define_macros},
    parser::parse,
    value::Value,
};
use clap::Parser;

/// capuchin is a small dynamically typed scripting language with
/// first-class functions and lexical closures.
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    /// Tells capuchin to treat the argument as a path to a script file
    /// instead of inline source.
    #[arg(short, long)]
    file: bool,

    /// Inline source to run, or a file path with `--file`. Omit to start
    /// the interactive session.
    contents: Option<String>,
}

fn main() {
    let args = Args::parse();

    let Some(contents) = args.contents else {
        repl();
        return;
    };

    let script = if args.file {
        fs::read_to_string(&contents).unwrap_or_else(|_| {
            eprintln!("Failed to read the input file '{contents}'. Perhaps this file does not exist?");
            std::process::exit(1);
        })
    } else {
        contents
    };

    let env = Environment::new();
    if let Some(value) = run(&script, &env) {
        println!("{value}");
    }
}

/// Runs a script in `env`: reports every parse error (line-prefixed) or
/// the runtime error, and returns the final value when there is one worth
/// printing.
fn run(source: &str, env: &Env) -> Option<Value> {
    let (mut program, errors) = parse(source);
    if !errors.is_empty() {
        for error in &errors {
            eprintln!("line {}: {error}", error.line());
        }
        return None;
    }

    define_macros(&mut program, env);

    match eval_program(&program, env) {
        Ok(value) => value,
        Err(error) => {
            eprintln!("ERROR: {error}");
            None
        },
    }
}

/// The read-eval-print loop.
///
/// Each input line is a full statement list, evaluated in a persistent
/// environment so bindings survive between lines. Statements that produce
/// nothing observable print nothing.
fn repl() {
    let env = Environment::new();
    let stdin = io::stdin();
    let mut stdout = io::stdout();

    print!(">> ");
    let _ = stdout.flush();

    for line in stdin.lock().lines() {
        let Ok(line) = line else { break };

        if let Some(value) = run(&line, &env) {
            println!("{value}");
        }

        print!(">> ");
        let _ = stdout.flush();
    }
}
