//! Command-line argument definitions and parsing
//!
//! The CLI is a thin layer over the library: `get` and `set` drive a
//! `PathMap` loaded from YAML, `list` drives a `Sequence` built from the
//! positional arguments.

use clap::{Args, Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

/// Main CLI application
#[derive(Parser)]
#[command(
    name = "dotlist",
    version,
    about = "Dotted-path access to YAML mappings and chainable list formatting",
    long_about = "dotlist reads and writes single values in a YAML mapping using dotted \
                  paths such as author.contact.email, and formats lists of words with \
                  prefixes, filters and human-readable joins."
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Enable verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Suppress non-error output
    #[arg(short, long, global = true, conflicts_with = "verbose")]
    pub quiet: bool,

    /// YAML configuration file
    #[arg(long, global = true, value_name = "FILE")]
    pub config: Option<PathBuf>,
}

/// Available commands
#[derive(Subcommand)]
pub enum Commands {
    /// Read the value at a dotted path
    Get(GetArgs),
    /// Write a value at a dotted path and print the document
    Set(SetArgs),
    /// Transform and format a list of items
    List(ListArgs),
}

/// Where the YAML document comes from
#[derive(Args, Debug, Clone)]
pub struct InputOptions {
    /// YAML file to read (stdin when omitted)
    #[arg(short, long, value_name = "FILE")]
    pub file: Option<PathBuf>,
}

/// Arguments for the get command
#[derive(Args, Debug)]
pub struct GetArgs {
    /// Dotted path; the whole document when omitted
    pub path: Option<String>,

    #[command(flatten)]
    pub input: InputOptions,

    /// Value printed when the path is missing
    #[arg(short, long, value_name = "VALUE", allow_hyphen_values = true)]
    pub default: Option<String>,

    /// Print only the first element of the mapping or sequence at the path
    #[arg(long)]
    pub first: bool,

    /// Output format
    #[arg(long, value_enum, default_value = "yaml")]
    pub format: OutputFormat,
}

/// Arguments for the set command
#[derive(Args, Debug)]
pub struct SetArgs {
    /// Dotted path to write
    pub path: String,

    /// Value to set
    #[arg(allow_hyphen_values = true)]
    pub value: String,

    #[command(flatten)]
    pub input: InputOptions,

    /// Value type for conversion (string, int, float, bool, array, object)
    #[arg(short, long = "type", value_name = "TYPE")]
    pub type_: Option<String>,

    /// Fail instead of replacing a scalar in the middle of the path
    #[arg(long)]
    pub strict: bool,

    /// Output format
    #[arg(long, value_enum, default_value = "yaml")]
    pub format: OutputFormat,
}

/// Arguments for the list command
#[derive(Args, Debug)]
pub struct ListArgs {
    /// Items of the list (put items starting with '-' after `--`)
    pub items: Vec<String>,

    /// Prepend a string to every item
    #[arg(long, value_name = "STRING", allow_hyphen_values = true)]
    pub prefix: Option<String>,

    /// Append a string to every item
    #[arg(long, value_name = "STRING", allow_hyphen_values = true)]
    pub suffix: Option<String>,

    /// Put a string on both sides of every item
    #[arg(long, value_name = "STRING", allow_hyphen_values = true)]
    pub surround: Option<String>,

    /// Map every item (upper, lower, trim, reverse, len); repeatable
    #[arg(long = "map", value_name = "NAME")]
    pub maps: Vec<String>,

    /// Keep items passing a named test (nonempty, numeric, alpha); repeatable
    #[arg(long = "filter", value_name = "NAME")]
    pub filters: Vec<String>,

    /// Keep items matching a regular expression
    #[arg(long, value_name = "REGEX")]
    pub matching: Option<String>,

    /// Keep the first N items, or all but the last N when negative
    #[arg(long, value_name = "N", allow_hyphen_values = true)]
    pub take: Option<String>,

    /// Join for humans, with ENDING before the last item (default " and")
    #[arg(long, value_name = "ENDING", num_args = 0..=1)]
    pub human: Option<Option<String>>,

    /// Separator between items
    #[arg(long, value_name = "STRING", conflicts_with = "human")]
    pub delimiter: Option<String>,

    /// Added before each item in the output only
    #[arg(long, value_name = "STRING", conflicts_with = "human")]
    pub item_prefix: Option<String>,

    /// Added after each item in the output only
    #[arg(long, value_name = "STRING", conflicts_with = "human")]
    pub item_suffix: Option<String>,
}

/// Output formats for values
#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputFormat {
    /// YAML format
    Yaml,
    /// JSON format
    Json,
}
