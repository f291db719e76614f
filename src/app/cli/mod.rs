//! CLI Adapter.

mod init;
mod path;
mod show;

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand, ValueEnum};

use crate::adapters::BaseDirSource;
use crate::domain::AppError;

#[derive(Parser)]
#[command(name = "projlayout")]
#[command(version)]
#[command(
    about = "Create and resolve the data/plots/images/scripts project layout",
    long_about = None
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Ensure data/, plots/, images/ and scripts/ exist under the base directory
    #[clap(visible_alias = "i")]
    Init {
        #[command(flatten)]
        base: BaseArgs,
    },
    /// Print the path of a file inside one of the managed directories
    #[clap(visible_alias = "p")]
    Path {
        /// Category: data, plots, images, or scripts
        category: String,
        /// File name or relative path inside the category
        name: String,
        #[command(flatten)]
        base: BaseArgs,
    },
    /// Show the resolved layout
    Show {
        /// Output format
        #[arg(long, value_enum, default_value_t = OutputFormat::Text)]
        format: OutputFormat,
        #[command(flatten)]
        base: BaseArgs,
    },
}

/// Base directory selection shared by every command.
///
/// Without a flag, `projlayout.toml` in the current directory decides and the
/// working directory is the fallback.
#[derive(Args, Debug)]
#[group(multiple = false)]
struct BaseArgs {
    /// Use the current working directory as the base
    #[arg(long)]
    cwd: bool,
    /// Use the parent of the directory holding this script as the base
    #[arg(long, value_name = "PATH")]
    script: Option<PathBuf>,
    /// Use this directory as the base, creating it if needed
    #[arg(long, value_name = "DIR")]
    base: Option<PathBuf>,
}

impl BaseArgs {
    fn into_source(self) -> Result<BaseDirSource, AppError> {
        if let Some(script) = self.script {
            return Ok(BaseDirSource::ScriptRelative(script));
        }
        if let Some(base) = self.base {
            return Ok(BaseDirSource::Explicit(base));
        }
        if self.cwd {
            return Ok(BaseDirSource::WorkingDirectory);
        }
        crate::app::api::configured_source()
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
enum OutputFormat {
    Text,
    Json,
}

/// Entry point for the CLI.
pub fn run() {
    let cli = Cli::parse();

    let result: Result<(), AppError> = match cli.command {
        Commands::Init { base } => base.into_source().and_then(init::run_init),
        Commands::Path { category, name, base } => {
            base.into_source().and_then(|source| path::run_path(source, &category, &name))
        }
        Commands::Show { format, base } => {
            base.into_source().and_then(|source| show::run_show(source, format))
        }
    };

    if let Err(e) = result {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}
