use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};

#[derive(Parser)]
#[command(name = "etcc")]
#[command(about = "Classify files under /etc by path and content")]
#[command(version)]
pub struct Cli {
    /// Verbose output (debug logging)
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Quiet output (errors only)
    #[arg(short, long, global = true, conflicts_with = "verbose")]
    pub quiet: bool,

    /// Base directory holding config.toml (default: ~/.etcc)
    #[arg(long, global = true)]
    pub base_dir: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Clone, Copy, Debug, ValueEnum)]
#[allow(clippy::enum_variant_names)]
pub enum Shell {
    Bash,
    Zsh,
    Fish,
    PowerShell,
    Elvish,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Walk a directory and write the classification report
    Classify {
        /// Directory to classify (default: scan.root, usually /etc)
        #[arg(long)]
        root: Option<PathBuf>,

        /// Report file (default: scan.output, usually class.json)
        #[arg(short, long)]
        output: Option<PathBuf>,

        /// Print the report to stdout instead of writing a file
        #[arg(long, conflicts_with = "output")]
        stdout: bool,

        /// Skip resolved paths matching this glob (repeatable)
        #[arg(long, value_name = "GLOB")]
        exclude: Vec<String>,
    },

    /// List categories and their path patterns in evaluation order
    Categories,

    /// Show which category each path string falls into
    Which {
        /// Paths to classify (need not exist)
        #[arg(required = true)]
        paths: Vec<String>,
    },

    /// Run the content detectors over files
    Identify {
        /// Files to inspect
        #[arg(required = true)]
        files: Vec<PathBuf>,
    },

    /// Manage configuration
    Config {
        #[command(subcommand)]
        action: ConfigAction,
    },

    /// Generate shell completions
    Completions {
        /// Shell to generate completions for
        #[arg(value_enum)]
        shell: Shell,
    },
}

#[derive(Subcommand)]
pub enum ConfigAction {
    /// Get a config value
    Get {
        /// Config key (e.g., scan.root)
        key: String,
    },

    /// Set a config value
    Set {
        /// Config key (e.g., scan.exclude)
        key: String,

        /// Value to set (e.g., "*.bak,*.orig" or "[*.bak, *.orig]")
        value: String,
    },

    /// List all config values
    List,

    /// Show config file path
    Path,

    /// Initialize config file with defaults
    Init,
}
