pub mod convert;
pub mod validate;

use std::path::PathBuf;

use clap::{Parser, Subcommand};

#[derive(Parser)]
#[command(name = "argot")]
#[command(about = "Validate and convert command-line argument values.")]
pub struct CommandLine {
    #[command(subcommand)]
    pub command: Commands,

    /// Enable debug logging
    #[arg(short, long, global = true)]
    pub debug: bool,

    /// Services database to resolve names against (default: /etc/services)
    #[arg(long, global = true, value_name = "PATH")]
    pub services: Option<PathBuf>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Validate a boolean (y/yes/1/on/enabled, n/no/0/off/disabled)
    #[command(alias = "b")]
    Bool { value: Option<String> },
    /// Validate an integer within optional bounds
    #[command(alias = "i")]
    Int {
        #[arg(allow_negative_numbers = true)]
        value: Option<String>,
        #[arg(long, allow_negative_numbers = true)]
        min: Option<i64>,
        #[arg(long, allow_negative_numbers = true)]
        max: Option<i64>,
    },
    /// Validate a size with an M or G suffix, printed in bytes
    Size {
        value: Option<String>,
        /// Unit assumed when the value has no suffix, and of the bounds
        #[arg(long, default_value_t = 'M')]
        unit: char,
        #[arg(long)]
        min: Option<u64>,
        #[arg(long)]
        max: Option<u64>,
    },
    /// Validate an interval with an M or H suffix, printed in seconds
    Interval {
        value: Option<String>,
        #[arg(long, default_value_t = 'M')]
        unit: char,
        #[arg(long)]
        min: Option<u64>,
        #[arg(long)]
        max: Option<u64>,
    },
    /// Validate a value against a set of choices
    #[command(alias = "e")]
    Enum {
        value: Option<String>,
        #[arg(long, value_delimiter = ',', required = true)]
        choices: Vec<String>,
        /// Reject '?' instead of listing the choices
        #[arg(long)]
        no_query: bool,
    },
    /// Validate 'dhcp' or an address/bits network
    #[command(alias = "n")]
    Network { value: Option<String> },
    /// Validate a port, a port range, or a service name
    #[command(alias = "s")]
    Service { value: Option<String> },
    /// Expand a comma-separated value to a fixed count
    Multival {
        value: Option<String>,
        #[arg(long)]
        count: usize,
    },
    /// Allocate a unique <prefix>-<n> name
    Name {
        prefix: String,
        /// Names already in use
        #[arg(long, value_delimiter = ',')]
        existing: Vec<String>,
    },
    /// Convert a dotted quad to an integer
    InetAton { addr: String },
    /// Convert an integer to a dotted quad
    InetNtoa { value: u32 },
    /// Convert a Mac address to an integer
    MacAton { mac: String },
    /// Convert an integer to a Mac address
    MacNtoa { value: u64 },
}

impl CommandLine {
    pub fn parse_args() -> Self {
        Self::parse()
    }
}
