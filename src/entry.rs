//! A single parsed localization entry.

use std::fmt;
use std::ops::Range;

use regex::Captures;
use serde::{Deserialize, Serialize};

use crate::patterns::EntryPattern;

/// One key/value/optional-comment occurrence in a `.strings` file.
///
/// `source` is the exact substring of the original file the entry was
/// matched from, whitespace included, so unmodified entries reproduce their
/// original bytes on serialization. The key, value, and comment are byte
/// ranges into `source`, never stored redundantly.
///
/// Entries are immutable value objects: a changed value is represented by a
/// new `Entry`, never by mutating one in place.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Entry {
    source: String,
    key_span: Range<usize>,
    value_span: Range<usize>,
    #[serde(skip_serializing_if = "Option::is_none")]
    #[serde(default)]
    comment_span: Option<Range<usize>>,
    #[serde(default)]
    modified: bool,
}

impl Entry {
    /// Materializes an entry from a scanner match, re-basing the capture
    /// group spans to be relative to the start of the matched slice.
    ///
    /// Returns `None` when a configured capture group did not participate in
    /// the match (a misconfigured user-supplied pattern).
    pub(crate) fn from_captures(caps: &Captures, pattern: &EntryPattern) -> Option<Entry> {
        let whole = caps.get(0)?;
        let base = whole.start();
        let rebase = |m: regex::Match| (m.start() - base)..(m.end() - base);

        let key_span = rebase(caps.get(pattern.key_group())?);
        let value_span = rebase(caps.get(pattern.value_group())?);
        let comment_span = match pattern.comment_group() {
            Some(group) => Some(rebase(caps.get(group)?)),
            None => None,
        };

        Some(Entry {
            source: whole.as_str().to_string(),
            key_span,
            value_span,
            comment_span,
            modified: false,
        })
    }

    /// The exact substring of the original file this entry was matched from.
    pub fn source(&self) -> &str {
        &self.source
    }

    /// The key, sliced from the source span.
    pub fn key(&self) -> &str {
        &self.source[self.key_span.clone()]
    }

    /// The value, sliced from the source span.
    pub fn value(&self) -> &str {
        &self.source[self.value_span.clone()]
    }

    /// The comment, when the matching grammar captured one.
    pub fn comment(&self) -> Option<&str> {
        self.comment_span
            .clone()
            .map(|span| &self.source[span])
    }

    /// True only when this entry's value was changed by a merge.
    pub fn modified(&self) -> bool {
        self.modified
    }

    /// A copy of this entry with the modified flag set.
    pub(crate) fn as_modified(&self) -> Entry {
        Entry {
            modified: true,
            ..self.clone()
        }
    }
}

/// Renders the canonical one-line form, `"key" = "value";` with a trailing
/// comment suffix when a comment is present. Used for serializing modified
/// entries, whose original source no longer reflects their value.
impl fmt::Display for Entry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "\"{}\" = \"{}\";", self.key(), self.value())?;
        if let Some(comment) = self.comment() {
            write!(f, " // {}", comment)?;
        }
        Ok(())
    }
}
