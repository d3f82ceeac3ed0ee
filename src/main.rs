mod cli;

use std::path::PathBuf;

use clap::{Parser, Subcommand};

use cli::{OutputFormat, RecordArgs};

#[derive(Parser)]
#[command(name = "thread-summary", version, about = "Styled thread-list summary lines")]
struct App {
    /// Config file (defaults to <config dir>/thread-summary/config.toml)
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Summarize one record
    Summarize {
        #[command(flatten)]
        record: RecordArgs,
        /// Output format: plain, markdown, ansi, html, json
        #[arg(long)]
        format: Option<OutputFormat>,
    },
    /// Print the category a record falls into
    Classify {
        #[command(flatten)]
        record: RecordArgs,
    },
    /// Summarize JSON records from stdin, one per line
    Batch {
        /// Output format: plain, markdown, ansi, html, json
        #[arg(long)]
        format: Option<OutputFormat>,
    },
    /// List the active template catalog
    Templates,
}

fn main() {
    let app = App::parse();

    let cfg = match cli::load_config(app.config.as_deref()) {
        Ok(cfg) => cfg,
        Err(e) => {
            eprintln!("Error: {:#}", e);
            std::process::exit(1);
        }
    };
    thread_summary::tracing_init::init_stderr_tracing(&cfg.log_level);

    let result = match app.command {
        Commands::Summarize { record, format } => cli::summarize::run(&record, format, &cfg),
        Commands::Classify { record } => cli::classify::run(&record),
        Commands::Batch { format } => cli::batch::run(format, &cfg),
        Commands::Templates => cli::templates::run(&cfg),
    };

    if let Err(e) = result {
        eprintln!("Error: {:#}", e);
        std::process::exit(1);
    }
}
