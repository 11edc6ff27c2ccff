//! CLI argument definitions using clap

use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueHint};

use crate::domain::Quaternion;

/// Small data-transformation exercises: quaternions, persistent trees, coin change and friends
#[derive(Parser, Debug)]
#[command(name = "exkit")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Debug verbosity (-d info, -dd debug, -ddd trace)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub debug: u8,

    /// Config file layered over the global config
    #[arg(long, global = true, env = "EXKIT_CONFIG", value_hint = ValueHint::FilePath)]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Fewest coins for an amount in cents
    Change {
        /// Amount in cents
        #[arg(allow_hyphen_values = true)]
        amount: i64,
    },

    /// Count non-blank, non-comment lines in a file
    Lines {
        /// Text file
        #[arg(value_hint = ValueHint::FilePath)]
        file: PathBuf,
    },

    /// Quaternion arithmetic; quaternions are written `a,b,c,d`
    Quat {
        #[command(subcommand)]
        command: QuatCommands,
    },

    /// Build a persistent search tree from keys
    Tree {
        /// Keys in insertion order
        keys: Vec<String>,
        /// Show an indented tree instead of the parenthesized form
        #[arg(long)]
        tree: bool,
    },

    /// Chain words into a phrase
    Say {
        words: Vec<String>,
    },

    /// Powers of a base
    Powers {
        #[arg(short, long)]
        base: u64,
        /// Largest value to print (default: until overflow)
        #[arg(short, long)]
        limit: Option<u64>,
    },

    /// Volume and surface area of a solid
    Shape {
        #[command(subcommand)]
        command: ShapeCommands,
    },

    /// Manage settings
    Config {
        #[command(subcommand)]
        command: ConfigCommands,
    },

    /// Show version and config locations
    Info,

    /// Generate shell completions
    Completion {
        /// Shell type
        #[arg(value_enum)]
        shell: clap_complete::Shell,
    },
}

#[derive(Subcommand, Debug)]
pub enum QuatCommands {
    /// Component-wise sum
    Add {
        #[arg(allow_hyphen_values = true)]
        left: Quaternion,
        #[arg(allow_hyphen_values = true)]
        right: Quaternion,
    },
    /// Hamilton product left * right
    Mul {
        #[arg(allow_hyphen_values = true)]
        left: Quaternion,
        #[arg(allow_hyphen_values = true)]
        right: Quaternion,
    },
    /// Conjugate
    Conj {
        #[arg(allow_hyphen_values = true)]
        value: Quaternion,
    },
}

#[derive(Subcommand, Debug)]
pub enum ShapeCommands {
    Sphere {
        radius: f64,
    },
    #[command(name = "box")]
    Cuboid {
        width: f64,
        length: f64,
        depth: f64,
    },
}

#[derive(Subcommand, Debug)]
pub enum ConfigCommands {
    /// Show effective configuration
    Show,
    /// Print a commented template
    Template,
    /// Print the global config path
    Path,
}
