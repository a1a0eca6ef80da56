mod commands;
mod logging;
mod output;
mod repository;

use clap::{Parser, Subcommand, ValueEnum};
use colored::Colorize;
use std::process;

use commands::overdue::ListOverdueArgs;

/// Overdue-title reporting with penalty and interest revaluation
#[derive(Parser)]
#[command(
    name = "arrears",
    version,
    about = "Overdue-title reporting with penalty and interest revaluation",
    long_about = "Lists financial titles with at least one unpaid installment past its due \
                  date and computes each title's updated amount: face value plus a flat 2% \
                  late penalty plus per-installment daily interest at a 1%-per-30-days rate."
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Output format
    #[arg(long, default_value = "json", global = true)]
    output: OutputFormat,

    /// Enable debug logging
    #[arg(short, long, global = true)]
    verbose: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// List overdue titles with updated amounts
    ListOverdue(ListOverdueArgs),
    /// Print version information
    Version,
}

#[derive(Debug, Clone, ValueEnum)]
pub enum OutputFormat {
    Json,
    Table,
    Csv,
    Minimal,
}

#[tokio::main]
async fn main() {
    let cli = Cli::parse();
    logging::init(cli.verbose);

    if !atty::is(atty::Stream::Stdout) {
        colored::control::set_override(false);
    }

    let result = match cli.command {
        Commands::ListOverdue(args) => commands::overdue::run_list_overdue(args).await,
        Commands::Version => {
            println!("arrears {}", env!("CARGO_PKG_VERSION"));
            return;
        }
    };

    match result {
        Ok(rows) => {
            output::render(&cli.output, &rows);
            process::exit(0);
        }
        Err(e) => {
            eprintln!("{}: {}", "error".red().bold(), e);
            process::exit(1);
        }
    }
}
