use clap::{value_parser, Arg, ArgAction, ArgMatches, Command};

pub const DEFAULT_HISTORY_FILE: &str = ".lispy_history";
pub const DEFAULT_PROMPT: &str = "lispy> ";
pub const DEFAULT_STACK_MB: usize = 256;

#[derive(Debug, Clone, PartialEq)]
pub struct Config {
    pub files: Vec<String>,
    pub interactive: bool,
    pub history_file: String,
    pub prompt: String,
    pub stack_mb: usize,
    pub verbosity: u8,
}

impl Config {
    /// Whether the interactive prompt runs after the files are loaded.
    pub fn wants_repl(&self) -> bool {
        self.files.is_empty() || self.interactive
    }

    pub fn stack_size_bytes(&self) -> Result<usize, String> {
        self.stack_mb
            .checked_mul(1024 * 1024)
            .ok_or_else(|| format!("invalid --stack-mb: {}", self.stack_mb))
    }

    fn from_matches(matches: &ArgMatches) -> Config {
        Config {
            files: matches
                .get_many::<String>("files")
                .map(|files| files.cloned().collect())
                .unwrap_or_default(),
            interactive: matches.get_flag("interactive"),
            history_file: matches
                .get_one::<String>("history")
                .cloned()
                .unwrap_or_else(|| DEFAULT_HISTORY_FILE.to_string()),
            prompt: matches
                .get_one::<String>("prompt")
                .cloned()
                .unwrap_or_else(|| DEFAULT_PROMPT.to_string()),
            stack_mb: matches
                .get_one::<usize>("stack-mb")
                .copied()
                .unwrap_or(DEFAULT_STACK_MB),
            verbosity: matches.get_count("verbose"),
        }
    }
}

fn command() -> Command {
    Command::new("lispy")
        .version(env!("CARGO_PKG_VERSION"))
        .about("A small Lisp with S-Expressions, Q-Expressions and curried closures")
        .arg(
            Arg::new("files")
                .value_name("FILES")
                .help("Source files to load, in order")
                .num_args(1..)
                .action(ArgAction::Append),
        )
        .arg(
            Arg::new("interactive")
                .short('i')
                .long("interactive")
                .help("Start the prompt after loading FILES")
                .action(ArgAction::SetTrue),
        )
        .arg(
            Arg::new("history")
                .long("history")
                .value_name("PATH")
                .help("Line editor history file")
                .default_value(DEFAULT_HISTORY_FILE),
        )
        .arg(
            Arg::new("prompt")
                .long("prompt")
                .value_name("TEXT")
                .default_value(DEFAULT_PROMPT),
        )
        .arg(
            Arg::new("stack-mb")
                .long("stack-mb")
                .value_name("N")
                .help("Stack size of the evaluator thread in MiB")
                .value_parser(value_parser!(usize))
                .default_value("256"),
        )
        .arg(
            Arg::new("verbose")
                .short('v')
                .long("verbose")
                .help("Log more; repeat for debug and trace output")
                .action(ArgAction::Count),
        )
}

pub fn parse_args() -> Config {
    Config::from_matches(&command().get_matches())
}
