use crate::utils::validation::FqdnOptions;
use clap::builder::FalseyValueParser;
use clap::{Args, Parser, Subcommand};

#[derive(Parser, Debug)]
#[command(name = "edgekit")]
#[command(about = "Check domain names, IEC sizes and client addresses from the command line")]
#[command(version)]
pub struct Cli {
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[arg(long, global = true, env = "EDGEKIT_CONFIG_DIR")]
    pub config_dir: Option<String>,

    /// Disable colored table output
    #[arg(long, global = true, env = "NO_COLOR", value_parser = FalseyValueParser::new())]
    pub no_color: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Validate one or more domain names
    Fqdn {
        /// Names to check; flags must come before them
        #[arg(required = true, allow_hyphen_values = true)]
        names: Vec<String>,
        #[command(flatten)]
        flags: FqdnFlags,
    },
    /// Convert IEC sizes such as 100M or 2.5Gi to bytes
    Iec {
        #[arg(required = true, allow_hyphen_values = true)]
        values: Vec<String>,
        /// Format byte counts as IEC sizes instead
        #[arg(long)]
        to_iec: bool,
    },
    /// Resolve the client address from request headers
    ClientIp {
        /// Request header in 'Name: value' form, may be repeated
        #[arg(short = 'H', long = "header")]
        headers: Vec<String>,
        /// Address of the connected peer
        #[arg(long)]
        remote_host: Option<String>,
        /// Also print which header supplied the address
        #[arg(long)]
        explain: bool,
    },
    /// Check whether text ends with a line break
    LineBreak { text: String },
    /// Check whether a JSON value is an empty object or array
    Empty { json: String },
    /// Items of OTHER missing from BASE (comma-separated lists)
    Diff { base: String, other: String },
    /// Deduplicated union of two comma-separated lists
    Merge { first: String, second: String },
    /// Print the UTF-8 bytes of text as hex
    Encode { text: String },
    /// Decode hex bytes as UTF-8 text
    Decode {
        hex: String,
        /// Replace invalid sequences instead of failing
        #[arg(long)]
        lossy: bool,
    },
    /// Configuration management
    Config {
        #[command(subcommand)]
        command: ConfigCommands,
    },
}

#[derive(Subcommand, Debug)]
pub enum ConfigCommands {
    /// Show the effective configuration
    Show,
    /// Write a configuration file with default values
    Init {
        /// Overwrite an existing file
        #[arg(long)]
        force: bool,
    },
}

/// Command-line switches mirroring [`FqdnOptions`]
#[derive(Args, Debug, Clone, Copy, Default)]
pub struct FqdnFlags {
    #[arg(long)]
    pub require_tld: bool,
    #[arg(long)]
    pub allow_underscores: bool,
    #[arg(long)]
    pub allow_trailing_dot: bool,
    #[arg(long)]
    pub allow_numeric_tld: bool,
    #[arg(long)]
    pub allow_wildcard: bool,
    #[arg(long)]
    pub ignore_max_length: bool,
}

impl From<FqdnFlags> for FqdnOptions {
    fn from(flags: FqdnFlags) -> Self {
        FqdnOptions::new()
            .require_tld(flags.require_tld)
            .allow_underscores(flags.allow_underscores)
            .allow_trailing_dot(flags.allow_trailing_dot)
            .allow_numeric_tld(flags.allow_numeric_tld)
            .allow_wildcard(flags.allow_wildcard)
            .ignore_max_length(flags.ignore_max_length)
    }
}
