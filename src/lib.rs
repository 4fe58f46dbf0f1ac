#![forbid(unsafe_code)]
//! Span-preserving parser and merger for Apple `.strings` localization files.
//!
//! Parses `"key" = "value"; // comment` entries (and the block-comment
//! variant) while keeping each entry's exact original source slice, so files
//! round-trip byte-for-byte until a merge actually changes a value.
//!
//! # Quick Start
//!
//! ```rust
//! use locmerge::{StringsFile, merge};
//!
//! let base = StringsFile::decode(b"\"greeting\" = \"Hello\";\n")?;
//! let incoming = StringsFile::decode(b"\"greeting\" = \"Bonjour\";\n")?;
//!
//! let merged = merge(&base, &incoming);
//! assert_eq!(merged.entries()[0].value(), "Bonjour");
//! assert!(merged.entries()[0].modified());
//! # Ok::<(), locmerge::Error>(())
//! ```
//!
//! # Behavior notes
//!
//! - Text that matches no entry grammar is silently skipped by the scanner
//!   and dropped from the model; unrecognized lines are not an error.
//! - [`merge`] is an overlay, not a union: keys present only in the incoming
//!   file are dropped from the result.
//! - Encoding is detected as UTF-8 first, then UTF-16; bytes valid in
//!   neither are reported as [`Error::UnsupportedEncoding`].

pub mod entry;
pub mod error;
pub mod file;
pub mod merge;
pub mod patterns;
pub mod scanner;

// Re-export most used types for easy consumption
pub use crate::{
    entry::Entry,
    error::Error,
    file::{Encoding, StringsFile},
    merge::merge,
    patterns::{EntryPattern, PatternTable},
    scanner::Scanner,
};
