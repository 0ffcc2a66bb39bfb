use clap::{Parser, Subcommand};
use fun_interpreter::Output;
use fun_parser::parse_program;
use miette::{MietteHandlerOpts, NamedSource, Report};
use std::fs;
use std::path::{Path, PathBuf};
use std::process;
use std::sync::Once;

mod repl;

use repl::{DebuggerRepl, ReplConfig};

#[derive(Parser)]
#[command(
    name = "fun",
    version,
    about = "Interpreter and steppable debugger for the Fun scripting language"
)]
struct Cli {
    /// Emit debug logging to stderr (RUST_LOG takes precedence)
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Interpret a Fun source file, printing to standard output
    Run {
        #[arg(value_name = "FILE")]
        file: PathBuf,
    },

    /// Start the interactive debugger, optionally loading a file first
    Debug {
        #[arg(value_name = "FILE")]
        file: Option<PathBuf>,

        /// Do not read or write the history file
        #[arg(long)]
        no_history: bool,
    },

    /// Parse a Fun source file and print it back as source
    Parse {
        #[arg(value_name = "FILE")]
        file: PathBuf,

        /// Print the AST with span information instead
        #[arg(short, long)]
        debug: bool,
    },
}

fn main() {
    setup_miette_handler();

    let cli = Cli::parse();
    init_tracing(cli.verbose);

    let success = match cli.command {
        Some(Commands::Run { file }) => handle_run_command(&file),
        Some(Commands::Debug { file, no_history }) => handle_debug_command(file, no_history),
        Some(Commands::Parse { file, debug }) => handle_parse_command(&file, debug),
        None => {
            // No subcommand provided, show help
            Cli::parse_from(["fun", "--help"]);
            true
        }
    };

    if !success {
        process::exit(1);
    }
}

/// Configure miette for error reporting
fn setup_miette_handler() {
    miette::set_hook(Box::new(|_| {
        Box::new(
            MietteHandlerOpts::new()
                .terminal_links(true)
                .unicode(true)
                .color(true)
                .tab_width(4)
                .with_cause_chain()
                .build(),
        )
    }))
    .ok();
}

static TRACING: Once = Once::new();

/// Install the stderr subscriber. `RUST_LOG` wins over `--verbose`.
fn init_tracing(verbose: bool) {
    use tracing_subscriber::{EnvFilter, fmt, prelude::*};

    TRACING.call_once(|| {
        let default_level = if verbose { "debug" } else { "warn" };
        let filter = EnvFilter::try_from_default_env()
            .unwrap_or_else(|_| EnvFilter::new(default_level));

        tracing_subscriber::registry()
            .with(
                fmt::layer()
                    .with_writer(std::io::stderr)
                    .with_target(true)
                    .with_level(true),
            )
            .with(filter)
            .init();
    });
}

fn read_source(path: &Path) -> Option<String> {
    match fs::read_to_string(path) {
        Ok(source) => Some(source),
        Err(error) => {
            eprintln!("Error reading {}: {}", path.display(), error);
            None
        }
    }
}

fn report<E>(error: E, path: &Path, source: String) -> Report
where
    E: miette::Diagnostic + Send + Sync + 'static,
{
    Report::new(error).with_source_code(NamedSource::new(path.display().to_string(), source))
}

fn handle_run_command(path: &Path) -> bool {
    let Some(source) = read_source(path) else {
        return false;
    };

    let program = match parse_program(&source) {
        Ok(program) => program,
        Err(error) => {
            eprintln!("{:?}", report(error, path, source));
            return false;
        }
    };

    tracing::debug!(path = %path.display(), "running program");
    match fun_interpreter::interpret(&program, Output::stdout()) {
        Ok(()) => true,
        Err(error) => {
            eprintln!("{:?}", report(error, path, source));
            false
        }
    }
}

fn handle_debug_command(file: Option<PathBuf>, no_history: bool) -> bool {
    let mut config = ReplConfig::default();
    if no_history {
        config.persist_history = false;
    }

    let result = DebuggerRepl::with_config(config).and_then(|mut repl| {
        if let Some(file) = file {
            repl.preload(&file);
        }
        repl.run()
    });

    match result {
        Ok(()) => true,
        Err(error) => {
            eprintln!("{:?}", Report::new(error));
            false
        }
    }
}

fn handle_parse_command(path: &Path, debug: bool) -> bool {
    let Some(source) = read_source(path) else {
        return false;
    };

    match parse_program(&source) {
        Ok(program) => {
            if debug {
                println!("{program:#?}");
            } else {
                println!("{program}");
            }
            true
        }
        Err(error) => {
            eprintln!("{:?}", report(error, path, source));
            false
        }
    }
}
