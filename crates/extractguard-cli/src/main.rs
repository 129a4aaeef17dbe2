mod checks_doc;
mod constructor;
mod errors;
mod parser;
mod runner;
mod writer;

use clap::{Parser, ValueEnum};
use tracing_subscriber::EnvFilter;

/// Output format for validation results
#[derive(Debug, Clone, ValueEnum)]
enum OutputFormat {
    /// Print results to standard output (human-readable)
    Stdout,
    /// Output results in JSON format
    Json,
}

#[derive(Parser, Debug)]
#[command(
    name = "extractguard",
    version,
    author = "ExtractGuard Contributors",
    about = "ExtractGuard CLI - Quality checks for delimited data extracts",
    long_about = "ExtractGuard checks '|'-delimited extract files before they are loaded \
                  downstream: structure, nulls in critical columns, declared types and row \
                  counts, all collected into one report.\n\n\
                  Example usage:\n  \
                  extractguard --config extracts.toml --output stdout"
)]
struct Args {
    /// Path to the TOML configuration file that declares the extracts
    #[arg(
        short,
        long,
        value_name = "FILE",
        required_unless_present = "list_checks"
    )]
    config: Option<String>,

    /// Output format for validation results
    #[arg(short, long, value_enum, default_value = "stdout")]
    output: OutputFormat,

    /// File or directory the JSON report is written to (stdout when omitted)
    #[arg(long, value_name = "PATH")]
    output_file: Option<String>,

    /// Run the checks of each extract in parallel
    #[arg(long)]
    parallel: bool,

    /// Log each check as it runs
    #[arg(short, long)]
    verbose: bool,

    /// Enable debug mode with detailed error backtraces
    #[arg(short, long)]
    debug: bool,

    /// Describe every available check and exit
    #[arg(long)]
    list_checks: bool,
}

/// Logs go to stderr so they never mix with the report.
fn init_logging(args: &Args) {
    let default_level = match (args.debug, args.verbose) {
        (true, _) => "debug",
        (false, true) => "info",
        (false, false) => "warn",
    };
    let env_filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));

    tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}

fn main() {
    let args = Args::parse();

    if args.list_checks {
        checks_doc::print_checks_documentation();
        return;
    }

    // Enable backtraces in debug mode
    if args.debug {
        std::env::set_var("RUST_BACKTRACE", "1");
    }
    init_logging(&args);

    match runner::run(&args) {
        Ok(true) => {}
        Ok(false) => std::process::exit(1),
        Err(err) => {
            if std::env::var("RUST_BACKTRACE").is_ok() {
                eprintln!("Error: {:?}", err);
            } else {
                eprintln!("Error: {:#}", err);
                eprintln!("\nHint: Run with --debug flag for detailed stack traces");
            }
            std::process::exit(2);
        }
    }
}
