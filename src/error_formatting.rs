use crate::reader::ParseError;
use crate::value::Value;

use colored::*;

fn format_input(origin: &str, source: &str, line: usize, col: usize) {
    eprintln!("in {}, at line {}, column {}:", origin, line, col);
    if let Some(text) = source.lines().nth(line.saturating_sub(1)) {
        eprintln!("{}", text);
        eprint!("{:~<1$}", "".blue().bold(), col.saturating_sub(1));
        eprintln!("{}", "^".blue().bold());
    }
}

pub fn format_parse_error(err: &ParseError, source: &str) {
    eprintln!(
        "lispy: {}: {}",
        "parse error".red().bold(),
        err.message.white().bold(),
    );

    format_input(&err.origin, source, err.line, err.col);
}

/// Prints the result of one top-level form. Errors go to stderr in red.
pub fn format_result(value: &Value) {
    match value {
        Value::Error(msg) => eprintln!("{}: {}", "Error".red().bold(), msg.white().bold()),
        Value::ExitRequest(msg) => eprintln!("{}", msg.yellow()),
        other => println!("{}", other),
    }
}

pub fn format_host_error(what: &str) {
    eprintln!("lispy: {}: {}", "error".red().bold(), what.white().bold());
}
