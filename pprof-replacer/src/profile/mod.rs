//! # pprof Profile Transform
//!
//! Decodes the protobuf payload of a pprof profile, rewrites entries of its
//! string table and encodes the result.
//!
//! ## String table
//!
//! A pprof profile stores every piece of text once, in `string_table`. All
//! other messages (functions, mappings, labels, value types) refer to text by
//! index:
//!
//! ```text
//! string_table: ["", "cpu", "nanoseconds", "main.foo", "/src/main.go"]
//!                 0    1          2            3             4
//! Function { id: 1, name: 3, system_name: 3, filename: 4 }
//! ```
//!
//! Renaming a symbol therefore only needs to change the text at one slot.
//! Nothing is inserted, removed or reordered, and the index references stay
//! valid without being touched.
//!
//! ## Round-trip fidelity
//!
//! Only the string table is decoded into owned values. Every other field is
//! carried as the raw bytes it was read from, including fields the schema in
//! [`proto`] does not know about. [`proto`] is still used to validate the
//! whole payload on decode. Rewritten strings are re-encoded in place, so an
//! untouched profile encodes back to identical bytes.

pub mod codec;
pub mod proto;
pub mod rewrite;

pub use codec::{decode, encode, Profile};
pub use rewrite::rewrite_string_table;
