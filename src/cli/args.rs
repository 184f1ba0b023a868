//! CLI argument definitions using clap

use std::path::PathBuf;

use clap::{ArgAction, Parser, Subcommand, ValueHint};

/// Browse the sample discography: a composite tree of albums and songs
#[derive(Parser, Debug)]
#[command(name = "discography")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
#[command(arg_required_else_help = true)]
pub struct Cli {
    /// Increase log verbosity (-v, -vv, -vvv)
    #[arg(short, long, global = true, action = ArgAction::Count)]
    pub verbose: u8,

    /// Extra config file layered over the global one
    #[arg(short, long, global = true, value_hint = ValueHint::FilePath)]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Render the discography as a tree
    Tree,

    /// List album titles in order
    Albums,

    /// List the songs of one album
    Songs {
        /// 0-based album position
        album: usize,
    },

    /// Walk from a song up to the discography via parent links
    Lineage {
        /// 0-based album position
        album: usize,
        /// 0-based song position within the album
        song: usize,
    },

    /// Show node counts and depth
    Stats,

    /// Manage settings
    Config {
        #[command(subcommand)]
        command: ConfigCommands,
    },

    /// Generate shell completions
    Completion {
        /// Shell type
        #[arg(value_enum)]
        shell: clap_complete::Shell,
    },
}

#[derive(Subcommand, Debug)]
pub enum ConfigCommands {
    /// Print effective settings as TOML
    Show,
    /// Print a commented template config
    Template,
    /// Print the global config file location
    Path,
}
