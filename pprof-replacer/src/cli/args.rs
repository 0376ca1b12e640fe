//! CLI argument definitions

use clap::Parser;
use std::path::{Path, PathBuf};

use crate::domain::{Replacement, ReplacerError};

/// Named flags accepted on the command line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Flag {
    From,
    To,
}

impl Flag {
    pub const fn long(self) -> &'static str {
        match self {
            Flag::From => "from",
            Flag::To => "to",
        }
    }

    pub const fn short(self) -> char {
        match self {
            Flag::From => 'f',
            Flag::To => 't',
        }
    }
}

#[derive(Parser, Debug)]
#[command(
    name = "pprof-replacer",
    version,
    about = "Rename a symbol in the string table of a pprof profile",
    after_help = "\
EXAMPLES:
    pprof-replacer -f main.foo -t main.bar cpu.pb       Writes cpu_new.pb
    pprof-replacer -f old -t new heap.pb.gz             Writes heap_new.pb (uncompressed)

Output is written to the current directory as <name>_new.pb, where <name> is
the input file name up to its first dot."
)]
pub struct Args {
    /// Profile to rewrite (.pb or .pb.gz)
    #[arg(value_name = "FILE")]
    pub file: Option<PathBuf>,

    /// Anything after FILE is accepted and ignored
    #[arg(value_name = "IGNORED", hide = true)]
    pub ignored: Vec<String>,

    /// Symbol name to be replaced from
    #[arg(long = Flag::From.long(), short = Flag::From.short(), allow_hyphen_values = true)]
    pub from: String,

    /// Symbol name to be replaced to
    #[arg(long = Flag::To.long(), short = Flag::To.short(), allow_hyphen_values = true)]
    pub to: String,

    /// Suppress non-essential output
    #[arg(short, long)]
    pub quiet: bool,
}

impl Args {
    /// The input file, required even though clap treats it as optional.
    ///
    /// # Errors
    /// `MissingTarget` if no file was given.
    pub fn target(&self) -> Result<&Path, ReplacerError> {
        self.file.as_deref().ok_or(ReplacerError::MissingTarget)
    }

    pub fn replacement(&self) -> Replacement {
        Replacement::new(self.from.clone(), self.to.clone())
    }
}
