use std::{
    fs,
    io::{self, Read},
    path::PathBuf,
    process::ExitCode,
    rc::Rc,
    time::Instant,
};

use clap::Parser;
use ll_parser::{
    checker::checker::{check_with_options, CheckerOptions, UnresolvedPolicy},
    display_error,
    errors::errors::Error,
    lexer::lexer::tokenize,
    parser::parser::{parse_with_options, ParserOptions},
};
use tracing::debug;
use tracing_subscriber::EnvFilter;

/// Parse and evaluate an arithmetic expression with `let` bindings.
#[derive(clap::Parser, Debug)]
#[command(version)]
struct Args {
    /// File containing the expression; reads stdin when omitted
    file: Option<PathBuf>,

    /// Maximum nesting of parentheses and `let` expressions
    #[arg(long, default_value_t = ParserOptions::default().max_depth)]
    max_depth: usize,

    /// Fail on identifiers that no enclosing `let` binds
    #[arg(long)]
    strict: bool,

    /// Print the token stream before the tree
    #[arg(long)]
    tokens: bool,

    /// Log phase timings and scope activity
    #[arg(short, long)]
    verbose: bool,
}

const EXIT_DATA_ERROR: u8 = 65;
const EXIT_IO_ERROR: u8 = 74;

fn main() -> ExitCode {
    let args = Args::parse();

    let filter = if args.verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"))
    };
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .with_target(false)
        .init();

    let (name, source) = match read_source(args.file.as_ref()) {
        Ok(input) => input,
        Err(e) => {
            eprintln!("Error: failed to read input: {}", e);
            return ExitCode::from(EXIT_IO_ERROR);
        }
    };

    match run(&args, name, &source) {
        Ok(()) => ExitCode::SUCCESS,
        Err(error) => {
            if error.get_position().is_null() {
                eprintln!("Error: {} ({})", error.get_error_name(), error.get_tip());
            } else {
                display_error(&error, &source);
            }
            ExitCode::from(EXIT_DATA_ERROR)
        }
    }
}

fn read_source(file: Option<&PathBuf>) -> io::Result<(String, String)> {
    match file {
        Some(path) => Ok((path.display().to_string(), fs::read_to_string(path)?)),
        None => {
            let mut source = String::new();
            io::stdin().read_to_string(&mut source)?;
            Ok((String::from("<stdin>"), source))
        }
    }
}

fn run(args: &Args, name: String, source: &str) -> Result<(), Error> {
    let start = Instant::now();

    let tokens = tokenize(source.to_string(), Some(name.clone()))?;
    debug!(elapsed = ?start.elapsed(), "tokenized");

    if args.tokens {
        for token in tokens.iter() {
            println!("{}", token);
        }
        println!();
    }

    let parse_start = Instant::now();
    let ast = parse_with_options(
        tokens,
        Rc::new(name),
        ParserOptions {
            max_depth: args.max_depth,
        },
    )?;
    debug!(elapsed = ?parse_start.elapsed(), "parsed");

    print!("{}", ast);

    let check_start = Instant::now();
    let unresolved = if args.strict {
        UnresolvedPolicy::Reject
    } else {
        UnresolvedPolicy::Tolerate
    };
    let result = check_with_options(&ast, CheckerOptions { unresolved })?;
    debug!(elapsed = ?check_start.elapsed(), total = ?start.elapsed(), "checked");

    println!("well-formed: {}", result.well_formed);
    println!("value: {}", result.value);

    Ok(())
}
