//! Entry grammars for the `.strings` format.
//!
//! Each [`EntryPattern`] is a compiled regular expression plus the capture
//! group positions holding the key, the value, and an optional comment.
//! A [`PatternTable`] is an ordered, immutable collection of patterns; the
//! order is significant, acting as the tie-break priority when two patterns
//! match at the same offset (see [`crate::scanner::Scanner`]).

use lazy_static::lazy_static;
use regex::Regex;

use crate::error::Error;

/// One recognized textual form of a localization entry.
#[derive(Debug, Clone)]
pub struct EntryPattern {
    expression: Regex,
    key_group: usize,
    value_group: usize,
    comment_group: Option<usize>,
}

impl EntryPattern {
    /// Compiles `pattern` into an entry grammar.
    ///
    /// `key_group` and `value_group` are 1-based capture group positions;
    /// `comment_group` is `None` for grammars without a comment.
    pub fn new(
        pattern: &str,
        key_group: usize,
        value_group: usize,
        comment_group: Option<usize>,
    ) -> Result<Self, Error> {
        let expression = Regex::new(pattern).map_err(|source| Error::InvalidPattern {
            pattern: pattern.to_string(),
            source,
        })?;
        Ok(EntryPattern {
            expression,
            key_group,
            value_group,
            comment_group,
        })
    }

    pub(crate) fn expression(&self) -> &Regex {
        &self.expression
    }

    pub(crate) fn key_group(&self) -> usize {
        self.key_group
    }

    pub(crate) fn value_group(&self) -> usize {
        self.value_group
    }

    pub(crate) fn comment_group(&self) -> Option<usize> {
        self.comment_group
    }
}

/// Ordered, immutable collection of entry patterns.
#[derive(Debug, Clone)]
pub struct PatternTable {
    patterns: Vec<EntryPattern>,
}

impl PatternTable {
    /// Builds a table from `patterns`, keeping their order.
    pub fn new(patterns: Vec<EntryPattern>) -> Self {
        PatternTable { patterns }
    }

    /// The built-in table: block-comment form, trailing-comment form, bare
    /// form, in that priority order.
    pub fn builtin() -> &'static PatternTable {
        &BUILTIN
    }

    /// Patterns in priority order.
    pub fn patterns(&self) -> &[EntryPattern] {
        &self.patterns
    }
}

// (expression, key group, value group, comment group)
const RAW_BUILTIN: [(&str, usize, usize, Option<usize>); 3] = [
    // /** comment **/ "key" = "value";
    (
        r#"\s*/\*+\s*(.*)\s*\*+/\s*"(.*)"\s*=\s*"(.*)";\s*"#,
        2,
        3,
        Some(1),
    ),
    // "key" = "value"; // comment
    (r#"\s*"(.+)"\s*=\s*"(.+)";\s*//\s*(.*)\s*"#, 1, 2, Some(3)),
    // "key" = "value";
    (r#"\s*"(.+)"\s*=\s*"(.+)";\s*"#, 1, 2, None),
];

lazy_static! {
    static ref BUILTIN: PatternTable = {
        let patterns = RAW_BUILTIN
            .iter()
            .map(|&(pattern, key, value, comment)| {
                EntryPattern::new(pattern, key, value, comment)
                    .expect("built-in entry pattern must compile")
            })
            .collect();
        PatternTable::new(patterns)
    };
}
