use std::io;
use std::process;

use clap::{Parser, Subcommand};
use tracing::debug;

use mergesort::{bench, driver};

/// Merge sort demo: sorts a sample array, then a line of integers from stdin.
#[derive(Parser, Debug)]
#[command(name = "mergesort", version, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Time the sort variants on random data
    Bench {
        /// Largest input size to time, as log2 of the element count
        #[arg(long, default_value_t = 20, value_parser = clap::value_parser!(u32).range(10..=25))]
        max_lg_size: u32,
    },
}

fn main() {
    // Logs go to stderr and stay quiet unless RUST_LOG asks for more.
    let _ = tracing_subscriber::fmt()
        .with_writer(io::stderr)
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("warn")),
        )
        .try_init();

    let cli = Cli::parse();
    match cli.command {
        Some(Command::Bench { max_lg_size }) => bench::run(max_lg_size),
        None => {
            let stdin = io::stdin();
            if let Err(e) = driver::run_demo(stdin.lock(), io::stdout()) {
                debug!(error = ?e, "demo failed");
                eprintln!("error: {e}");
                process::exit(1);
            }
        }
    }
}
