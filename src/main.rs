use std::{
    fs,
    io::{self, BufRead, Write},
    path::PathBuf,
    process::ExitCode,
};

use clap::{ArgAction, Parser};
use log::{LevelFilter, info};
use reckon::{
    Environment, Error, evaluate,
    interpreter::{lexer::tokenize, parser::core::parse},
};

/// reckon is an interactive calculator: type an arithmetic expression and get
/// its value. Results can be stored in variables, e.g. `x = 2 * 3`.
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    /// Runs every line of a script file instead of reading from the terminal.
    #[arg(short, long, value_name = "PATH", conflicts_with = "expressions")]
    file: Option<PathBuf>,

    /// Prints the tokens of each line before evaluating it.
    #[arg(short, long)]
    tokens: bool,

    /// Prints the parsed tree of each line before evaluating it.
    #[arg(short, long)]
    ast: bool,

    /// Raises the log level; repeat for more detail (-v, -vv, -vvv).
    #[arg(short, long, action = ArgAction::Count)]
    verbose: u8,

    /// Expressions to evaluate in order. They share one set of variables.
    expressions: Vec<String>,
}

/// One calculator session and its debug output switches.
struct Session {
    env:    Environment,
    tokens: bool,
    ast:    bool,
}

impl Session {
    fn new(args: &Args) -> Self {
        Self { env:    Environment::new(),
               tokens: args.tokens,
               ast:    args.ast, }
    }

    fn run_line(&mut self, line: &str) -> Result<f64, Error> {
        let tokens = tokenize(line)?;
        if self.tokens {
            let dump = tokens.iter()
                             .map(|token| format!("{} {:?}", token.kind, token.text(line)))
                             .collect::<Vec<_>>()
                             .join(" ");
            println!("{dump}");
        }

        let node = parse(&tokens, line)?;
        if self.ast {
            println!("{node}");
        }

        evaluate(&node, &mut self.env)
    }
}

fn format_value(value: f64) -> String {
    format!("{value:?}")
}

fn init_logging(verbose: u8) {
    let level = match verbose {
        0 => LevelFilter::Warn,
        1 => LevelFilter::Info,
        2 => LevelFilter::Debug,
        _ => LevelFilter::Trace,
    };
    env_logger::Builder::new().filter_level(level)
                              .parse_default_env()
                              .init();
}

fn run_interactive(session: &mut Session) -> io::Result<()> {
    info!("starting interactive session");
    println!("Type \"quit\" to leave.");

    let mut stdin = io::stdin().lock();
    let mut stdout = io::stdout();
    let mut input = String::new();

    loop {
        print!(">> ");
        stdout.flush()?;

        input.clear();
        if stdin.read_line(&mut input)? == 0 {
            break;
        }

        let line = input.trim_end_matches(['\n', '\r']);
        if line == "quit" {
            break;
        }
        if line.trim().is_empty() {
            continue;
        }

        match session.run_line(line) {
            Ok(value) => println!("{}", format_value(value)),
            Err(e) => println!("{e}"),
        }
    }

    let bindings = session.env
                          .variables()
                          .map(|(name, value)| format!("{name} = {}", format_value(value)))
                          .collect::<Vec<_>>();
    info!("session ended with {} variable(s) bound: {}",
          bindings.len(),
          bindings.join(", "));
    Ok(())
}

/// Runs each line in order, returning `false` if any line failed.
fn run_lines<'a>(session: &mut Session, lines: impl Iterator<Item = &'a str>) -> bool {
    let mut ok = true;

    for (index, line) in lines.enumerate() {
        if line.trim().is_empty() {
            continue;
        }
        match session.run_line(line) {
            Ok(value) => println!("{}", format_value(value)),
            Err(e) => {
                eprintln!("line {}: {e}", index + 1);
                ok = false;
            },
        }
    }

    ok
}

fn main() -> ExitCode {
    let args = Args::parse();
    init_logging(args.verbose);

    let mut session = Session::new(&args);

    let ok = if let Some(path) = &args.file {
        info!("running script {}", path.display());
        let Ok(script) = fs::read_to_string(path) else {
            eprintln!("Failed to read the input file '{}'. Perhaps this file does not exist?",
                      path.display());
            return ExitCode::FAILURE;
        };
        run_lines(&mut session, script.lines())
    } else if args.expressions.is_empty() {
        if let Err(e) = run_interactive(&mut session) {
            eprintln!("{e}");
            return ExitCode::FAILURE;
        }
        true
    } else {
        run_lines(&mut session, args.expressions.iter().map(String::as_str))
    };

    if ok { ExitCode::SUCCESS } else { ExitCode::FAILURE }
}
