//! # pprof-replacer - Rename Symbols in pprof Profiles
//!
//! pprof-replacer rewrites one value in the string table of a pprof profile
//! and writes the result next to the caller as a new file. It is useful for
//! renaming functions, files or label values in a captured profile without
//! re-recording it.
//!
//! ## Architecture Overview
//!
//! ```text
//! ┌──────────────┐   ┌──────────────┐   ┌──────────────┐   ┌──────────────┐
//! │  container   │──▶│   profile    │──▶│   profile    │──▶│   output     │
//! │ (.pb / .gz)  │   │   decode     │   │   rewrite    │   │  <x>_new.pb  │
//! └──────────────┘   └──────────────┘   └──────┬───────┘   └──────────────┘
//!                                              │
//!                                       profile encode
//! ```
//!
//! ## Module Structure
//!
//! - [`container`]: Detects `.pb` / `.pb.gz` from the file name and removes
//!   the gzip envelope
//! - [`profile`]: pprof protobuf schema, decode/encode, string-table rewrite
//! - [`replace`]: The end-to-end pipeline for one file
//! - [`output`]: Output file naming and writing
//! - [`cli`]: Command-line argument parsing
//! - [`domain`]: Replacement request and error types
//!
//! ## Typical Usage
//!
//! ```bash
//! # Rename a function in a CPU profile; writes cpu_new.pb
//! pprof-replacer --from main.handler --to main.renamedHandler cpu.pb
//!
//! # Gzipped input is accepted; output is always uncompressed
//! pprof-replacer -f old/pkg.Func -t new/pkg.Func heap.pb.gz
//! ```
//!
//! ## Limitations
//!
//! - One replacement per run
//! - Output is never re-compressed, even for `.pb.gz` input

pub mod cli;
pub mod container;
pub mod domain;
pub mod output;
pub mod profile;
pub mod replace;

pub use replace::{replace_symbol, transform, ReplaceSummary};
