mod commands;

use clap::{CommandFactory, Parser};
use clap_complete::{Shell, generate};
use commands::export::ExportFormat;
use std::io;
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "site-nav")]
#[command(version, about = "Header and footer navigation data for the site layout", long_about = None)]
struct Cli {
    /// Print debug diagnostics to stderr
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Parser)]
enum Command {
    /// Write a navigation.toml reproducing the built-in navigation
    Init {
        /// Directory to write navigation.toml into
        path: PathBuf,

        /// Absolute site origin, used for canonical URLs
        #[arg(long)]
        site: Option<String>,

        /// Overwrite an existing navigation.toml
        #[arg(long)]
        force: bool,
    },

    /// Print a summary of header and footer navigation
    Show {
        /// navigation.toml to load (defaults to the built-in navigation)
        #[arg(short, long)]
        config: Option<PathBuf>,
    },

    /// Serialize navigation for page templates
    Export {
        /// navigation.toml to load (defaults to the built-in navigation)
        #[arg(short, long)]
        config: Option<PathBuf>,

        /// Output format
        #[arg(short, long, value_enum, default_value_t = ExportFormat::Json)]
        format: ExportFormat,

        /// File to write instead of stdout
        #[arg(short, long)]
        output: Option<PathBuf>,
    },

    /// Generate shell completion scripts
    Completions {
        /// Shell to generate completions for
        #[arg(value_enum)]
        shell: Shell,
    },
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    // Diagnostics go to stderr, stdout carries exported data
    let log_level = if cli.verbose { "debug" } else { "warn" };
    tracing_subscriber::fmt()
        .with_env_filter(log_level)
        .with_writer(io::stderr)
        .init();

    match cli.command {
        Command::Init { path, site, force } => commands::init::run(path, site, force).await,
        Command::Show { config } => commands::show::run(config).await,
        Command::Export {
            config,
            format,
            output,
        } => commands::export::run(config, format, output).await,
        Command::Completions { shell } => {
            let mut cmd = Cli::command();
            generate(shell, &mut cmd, "site-nav", &mut io::stdout());
            Ok(())
        }
    }
}
