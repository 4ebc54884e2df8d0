//! Command-line interface definitions
//!
//! Only the first argument is looked at: none runs the selection, `-h` or
//! `--help` prints the fixed usage message below (whatever follows it), and
//! anything else maps to [`Invocation::InvalidFlag`]. clap's generated help and
//! version flags are disabled so the usage text stays fixed.

use std::ffi::OsString;

use clap::Parser;
use tracing::debug;

/// Fixed usage message printed for `-h`/`--help`
pub const HELP: &str = "\
Usage: soundwrap
This program is a wrapper around wpctl that uses wofi to select the default audio sink
It reads the output of wpctl status and displays the sinks in a wofi dmenu
The selected sink is then set as the default sink using wpctl set-default";

/// Message printed for any unrecognized argument
pub const INVALID_FLAG: &str = "Invalid flag";

/// soundwrap - pick the default audio sink from a menu
#[derive(Parser, Debug)]
#[command(name = "soundwrap")]
#[command(disable_help_flag = true, disable_version_flag = true)]
pub struct Args {
    /// Print usage and exit
    #[arg(short, long)]
    pub help: bool,
}

/// What the binary was asked to do
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Invocation {
    /// No arguments: run the interactive selection
    Run,
    /// `-h` or `--help`
    Help,
    /// Anything else
    InvalidFlag,
}

impl Invocation {
    /// Classify a full argument list (program name first)
    pub fn from_args<I, T>(args: I) -> Self
    where
        I: IntoIterator<Item = T>,
        T: Into<OsString> + Clone,
    {
        let mut args = args.into_iter().map(Into::into);
        let program = args.next().unwrap_or_else(|| OsString::from("soundwrap"));

        let Some(first) = args.next() else {
            return Self::Run;
        };

        // A bare `--` parses as "no flags" in clap but is still an argument
        if first == "--" {
            debug!("Rejected argument: --");
            return Self::InvalidFlag;
        }

        match Args::try_parse_from([program, first]) {
            Ok(args) if args.help => Self::Help,
            Ok(_) => Self::InvalidFlag,
            Err(e) => {
                debug!("Rejected argument: {}", e.kind());
                Self::InvalidFlag
            }
        }
    }
}
