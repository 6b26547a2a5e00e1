//! Command-line interface definitions.

use clap::{ColorChoice, Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

/// Check, dump and watch a blog's configuration
#[derive(Parser, Debug, Clone)]
#[command(version, about, long_about = None, arg_required_else_help = true)]
pub struct Cli {
    /// Control colored output (auto, always, never)
    #[arg(long, global = true, default_value = "auto")]
    pub color: ColorChoice,

    /// Config file path, searched upward from the current directory
    #[arg(short = 'C', long, global = true, default_value = "blog.toml", value_hint = clap::ValueHint::FilePath)]
    pub config: PathBuf,

    /// Enable verbose output for debugging
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// subcommands
    #[command(subcommand)]
    pub command: Commands,
}

/// Available subcommands
#[derive(Subcommand, Debug, Clone)]
pub enum Commands {
    /// Write a commented starter config
    #[command(visible_alias = "i")]
    Init {
        /// Directory to write the config into (default: current directory)
        #[arg(value_hint = clap::ValueHint::DirPath)]
        dir: Option<PathBuf>,

        /// Print the config instead of writing it
        #[arg(short, long)]
        dry: bool,

        /// Overwrite an existing config file
        #[arg(short, long)]
        force: bool,
    },

    /// Load and validate the config
    #[command(visible_alias = "c")]
    Check {
        #[command(flatten)]
        args: CheckArgs,
    },

    /// Print the validated records
    #[command(visible_alias = "d")]
    Dump {
        /// Output format
        #[arg(short, long, value_enum, default_value_t = DumpFormat::Json)]
        format: DumpFormat,

        /// Pretty-print the output
        #[arg(short, long)]
        pretty: bool,
    },

    /// Reload the config whenever it changes
    #[command(visible_alias = "w")]
    Watch {
        /// Treat unknown fields as errors
        #[arg(short, long)]
        strict: bool,
    },
}

/// Check command arguments.
#[derive(clap::Args, Debug, Clone, Default)]
pub struct CheckArgs {
    /// Treat unknown fields as errors
    #[arg(short, long)]
    pub strict: bool,

    /// Also verify that local files referenced by the config exist
    #[arg(short, long)]
    pub assets: bool,

    /// Directory served at `/` (default: `public/` next to the config)
    #[arg(long, value_hint = clap::ValueHint::DirPath, requires = "assets")]
    pub public: Option<PathBuf>,

    /// Directory relative asset paths resolve against (default: `src/` next to the config)
    #[arg(long, value_hint = clap::ValueHint::DirPath, requires = "assets")]
    pub source: Option<PathBuf>,
}

/// Output format of `dump`.
#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq)]
pub enum DumpFormat {
    Json,
    Toml,
}
