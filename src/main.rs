mod error;

use std::{fs, path::PathBuf, process};

use clap::Parser;
use error::{AppError, ErrorHandler, GuidingErrorHandler, SimpleErrorHandler};
use strint_parse::{lex, parse};
use tracing_subscriber::EnvFilter;

/// Input that is parsed when none is given.
const EXAMPLE_INPUT: &str = r#""echo $HOME ${foo}""#;

/// Command line options for the application's CLI.
#[derive(Parser)]
#[command(about = "Parses string literals containing ${...} interpolations.", version)]
struct Opts {
    /// Source to parse
    #[arg(conflicts_with = "file")]
    input: Option<String>,

    /// Read the source to parse from a file
    #[arg(short, long)]
    file: Option<PathBuf>,

    /// Print the token stream instead of the syntax tree
    #[arg(short, long, conflicts_with = "source")]
    tokens: bool,

    /// Print the syntax tree as source text
    #[arg(short, long)]
    source: bool,

    /// Display errors on a single line
    #[arg(long)]
    simple_errors: bool,
}

/// Entrypoint for the application.
pub fn main() {
    let opts = Opts::parse();
    init_tracing();

    let handler: Box<dyn ErrorHandler> = if opts.simple_errors {
        Box::new(SimpleErrorHandler)
    } else {
        Box::new(GuidingErrorHandler)
    };

    if let Err(error) = read_input(&opts).and_then(|src| run(&opts, &src)) {
        handler.display_error(error);
        process::exit(1);
    }
}

/// Installs a subscriber writing to stderr, filtered through `RUST_LOG`.
fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

/// Returns the source to parse, as given by the command line options.
fn read_input(opts: &Opts) -> Result<String, AppError> {
    match (&opts.file, &opts.input) {
        (Some(path), _) => fs::read_to_string(path)
            .map(|contents| strip_trailing_newline(&contents).to_owned())
            .map_err(|source| AppError::Io {
                path: path.clone(),
                source,
            }),
        (None, Some(input)) => Ok(input.clone()),
        (None, None) => Ok(EXAMPLE_INPUT.to_owned()),
    }
}

/// Parses the source and prints the requested representation to stdout.
fn run(opts: &Opts, src: &str) -> Result<(), AppError> {
    if opts.tokens {
        let tokens = lex(src).map_err(|error| AppError::Parse(error.into(), src.to_owned()))?;
        for token in tokens {
            println!("{} {:?} {:?}", token.position, token.kind, token.text);
        }
        return Ok(());
    }

    let ast = parse(src).map_err(|error| AppError::Parse(error, src.to_owned()))?;

    if opts.source {
        println!("{ast}");
    } else {
        println!("{ast:#?}");
    }

    Ok(())
}

/// Removes a single trailing newline, as left by most editors.
fn strip_trailing_newline(contents: &str) -> &str {
    contents
        .strip_suffix("\r\n")
        .or_else(|| contents.strip_suffix('\n'))
        .unwrap_or(contents)
}
