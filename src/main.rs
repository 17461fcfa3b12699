//! # AS Summarizer CLI (`asref`)
//!
//! Command-line interface for the Accounting Standards summarizer.
//!
//! ## Commands
//!
//! | Command | Description |
//! |---------|-------------|
//! | `asref resolve "<query>"` | Resolve free text to a standard's summary |
//! | `asref show <code>` | Look up a standard by its exact code |
//! | `asref list` | List every known standard |
//! | `asref export <code>` | Write a standard's summary as a PDF |
//! | `asref ask "<query>"` | Ask the remote assistant instead of the table |
//! | `asref serve` | Start the web form server |
//!
//! Commands that only read the built-in table work without a config file;
//! `ask` and `serve` read `--config` (default `./config/asref.toml`).

mod assistant;
mod config;
mod export;
mod kb;
mod resolve;
mod server;

use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// AS Summarizer — quick summaries of ICAI Accounting Standards (AS)
/// with real-life examples and PDF export.
#[derive(Parser)]
#[command(
    name = "asref",
    about = "AS Summarizer — quick summaries of ICAI Accounting Standards for CA students",
    version
)]
struct Cli {
    /// Path to configuration file (TOML).
    ///
    /// Only `ask` and `serve` require it; table-only commands fall back
    /// to built-in defaults when the file is absent.
    #[arg(long, global = true, default_value = "./config/asref.toml")]
    config: PathBuf,

    #[command(subcommand)]
    command: Commands,
}

/// Top-level CLI commands.
#[derive(Subcommand)]
enum Commands {
    /// Resolve a free-text query to a standard.
    ///
    /// Scans the query for a known code (case-insensitive, surrounding
    /// words allowed) and prints the summary and examples, or a warning
    /// when nothing matches.
    Resolve {
        /// The query text, e.g. "Summarize AS 10".
        query: String,
    },

    /// Look up a standard by its exact code.
    ///
    /// Direct lookup, e.g. `asref show "AS 10"`. Exits non-zero for
    /// unknown codes.
    Show {
        /// Standard code, e.g. "AS 10".
        code: String,
    },

    /// List all known standards with their titles.
    List,

    /// Export a standard's summary as a PDF document.
    Export {
        /// Standard code, e.g. "AS 1".
        code: String,

        /// Output file path. Defaults to the derived filename
        /// (e.g. `AS1_Summary.pdf`) in the current directory.
        #[arg(long)]
        output: Option<PathBuf>,
    },

    /// Ask the remote assistant instead of the static table.
    ///
    /// Sends the query to the configured completions provider with a
    /// fixed CA-tutor persona. Requires `[assistant]` configuration and
    /// the `OPENAI_API_KEY` environment variable.
    Ask {
        /// The question text.
        query: String,
    },

    /// Start the HTTP form server.
    ///
    /// Serves the query form, result display, and PDF download on the
    /// address configured in `[server].bind`.
    Serve,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    match cli.command {
        // Table-only commands never need the config file.
        Commands::Resolve { query } => resolve::run_resolve(&query)?,
        Commands::Show { code } => resolve::run_show(&code)?,
        Commands::List => resolve::run_list()?,
        Commands::Export { code, output } => export::run_export(&code, output.as_deref())?,
        Commands::Ask { query } => {
            let cfg = config::load_config(&cli.config)
                .unwrap_or_else(|_| config::Config::minimal());
            assistant::run_ask(&cfg.assistant, &query).await?;
        }
        Commands::Serve => {
            let cfg = config::load_config(&cli.config)?;
            server::run_server(&cfg).await?;
        }
    }

    Ok(())
}
