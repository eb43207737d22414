mod builtins;
mod cli;
mod environment;
mod error_formatting;
mod interpreter;
mod line_reader;
mod reader;
mod value;

use cli::Config;
use environment::Environment;
use line_reader::{LineReadStatus, LineReader};
use std::process;
use std::thread;
use value::Value;

fn init_tracing(verbosity: u8) {
    use tracing_subscriber::{fmt, prelude::*, EnvFilter};

    let filter = if std::env::var("RUST_LOG").is_ok() {
        EnvFilter::from_default_env()
    } else {
        EnvFilter::new(match verbosity {
            0 => "warn",
            1 => "info",
            2 => "debug",
            _ => "trace",
        })
    };
    tracing_subscriber::registry()
        .with(
            fmt::layer()
                .with_writer(std::io::stderr)
                .with_target(true)
                .with_level(true),
        )
        .with(filter)
        .init();
}

enum Outcome {
    Continue,
    Exit,
}

fn load_files(env: &Environment, files: &[String]) -> Result<Outcome, String> {
    let mut failed = 0;
    for path in files {
        match builtins::io::load_file(env, path) {
            Ok(value) if value.is_exit_request() => return Ok(Outcome::Exit),
            Ok(_) => {}
            Err(err) => {
                error_formatting::format_host_error(&err.to_string());
                failed += 1;
            }
        }
    }
    if failed > 0 {
        return Err(format!("{} of {} files could not be loaded", failed, files.len()));
    }
    Ok(Outcome::Continue)
}

fn repl(env: &Environment, config: &Config) -> Result<(), String> {
    let mut reader = LineReader::new(&config.history_file, &config.prompt)
        .map_err(|err| format!("could not start line editor: {}", err))?;

    println!("Lispy Version {}", env!("CARGO_PKG_VERSION"));
    println!("Press Ctrl+C, Ctrl+D, or type \"(exit 0)\" to exit\n");

    loop {
        let line = match reader.readline() {
            LineReadStatus::Line(line) => line,
            LineReadStatus::Done => {
                println!("End of input detected, exiting...");
                return Ok(());
            }
        };
        if line.trim().is_empty() {
            continue;
        }

        match interpreter::eval_line(env, "<stdin>", &line) {
            Ok(value) => {
                tracing::debug!(result = %value.type_name(), "line evaluated");
                error_formatting::format_result(&value);
                if let Value::ExitRequest(_) = value {
                    return Ok(());
                }
            }
            Err(err) => error_formatting::format_parse_error(&err, &line),
        }
    }
}

fn run(config: &Config) -> Result<(), String> {
    let env = Environment::with_builtins();
    tracing::info!(files = config.files.len(), "session started");

    if let Outcome::Exit = load_files(&env, &config.files)? {
        return Ok(());
    }
    if config.wants_repl() {
        repl(&env, config)?;
    }
    Ok(())
}

fn main() {
    let config = cli::parse_args();
    init_tracing(config.verbosity);

    let stack_size = match config.stack_size_bytes() {
        Ok(size) => size,
        Err(err) => {
            error_formatting::format_host_error(&err);
            process::exit(2);
        }
    };

    // recursion depth is bounded by this thread's stack
    let result = thread::Builder::new()
        .name("lispy-eval".to_string())
        .stack_size(stack_size)
        .spawn(move || run(&config))
        .map_err(|err| format!("failed to start evaluator thread: {}", err))
        .and_then(|handle| {
            handle
                .join()
                .map_err(|_| "evaluator thread panicked".to_string())?
        });

    if let Err(err) = result {
        error_formatting::format_host_error(&err);
        process::exit(1);
    }
}
