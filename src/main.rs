use std::{fs, process::ExitCode};

use clap::Parser;
use hopscotch::{EngineOptions, parse, run, tokenize};
use tracing_subscriber::EnvFilter;

/// hopscotch runs programs written in a small block-structured teaching
/// language with unrestricted goto.
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    /// Tells hopscotch to look at a file instead of a script.
    #[arg(short, long)]
    file: bool,

    /// Print the token stream before running.
    #[arg(long)]
    tokens: bool,

    /// Print the parsed program tree before running.
    #[arg(long)]
    ast: bool,

    /// Do not print `Enter value for ...` before reading input.
    #[arg(long)]
    no_prompt: bool,

    /// Log interpreter activity to stderr; repeat for more detail.
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,

    contents: String,
}

fn main() -> ExitCode {
    let args = Args::parse();
    init_tracing(args.verbose);

    let source = if args.file {
        match fs::read_to_string(&args.contents) {
            Ok(source) => source,
            Err(_) => {
                eprintln!("Failed to read the input file '{}'. Perhaps this file does not exist?",
                          &args.contents);
                return ExitCode::from(66);
            },
        }
    } else {
        args.contents
    };

    if args.tokens {
        match tokenize(&source) {
            Ok(tokens) => {
                for (token, line) in tokens {
                    println!("{line:>4}  {token:?}");
                }
            },
            Err(e) => {
                eprintln!("{e}");
                return ExitCode::from(65);
            },
        }
    }

    if args.ast {
        match parse(&source) {
            Ok(program) => println!("{program:#?}"),
            Err(e) => {
                eprintln!("{e}");
                return ExitCode::from(65);
            },
        }
    }

    match run(&source, EngineOptions { prompt: !args.no_prompt }) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("{e}");
            ExitCode::from(e.exit_code())
        },
    }
}

/// Installs the stderr log subscriber.
///
/// `RUST_LOG` wins when set; otherwise each `-v` raises the level from
/// `warn` through `info` and `debug` to `trace`.
fn init_tracing(verbosity: u8) {
    let level = match verbosity {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));

    tracing_subscriber::fmt().with_env_filter(filter)
                             .with_writer(std::io::stderr)
                             .with_target(false)
                             .init();
}
