pub mod list;
pub mod shell;
pub mod show;

use std::path::PathBuf;

use clap::{Parser, Subcommand};
use roster_common::config::{Config, DEFAULT_DATA_FILE};

#[derive(Parser)]
#[command(name = "roster")]
#[command(version, about = "Keep a roster of student records in a flat file.")]
pub struct CommandLine {
    /// File the roster is read from and saved to
    #[arg(global = true, short, long, default_value = DEFAULT_DATA_FILE)]
    pub file: PathBuf,

    /// Hide banners and headers (-qq also hides totals)
    #[arg(global = true, short, long, action = clap::ArgAction::Count)]
    pub quiet: u8,

    /// Do not print the banner
    #[arg(global = true, long)]
    pub no_banner: bool,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand, Debug, Clone, PartialEq)]
pub enum Commands {
    /// Manage records interactively (default)
    #[command(alias = "sh")]
    Shell,
    /// Print every record as a table
    #[command(alias = "ls")]
    List,
    /// Print a single record
    #[command(alias = "s")]
    Show { id: String },
}

impl CommandLine {
    pub fn parse_args() -> Self {
        Self::parse()
    }

    pub fn to_config(&self) -> Config {
        Config {
            data_file: self.file.clone(),
            quiet: self.quiet,
            no_banner: self.no_banner,
        }
    }
}
