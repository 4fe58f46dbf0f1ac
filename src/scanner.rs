//! The entry scanner: extracts ordered entries from decoded file text.

use crate::entry::Entry;
use crate::patterns::PatternTable;

/// Scans file text for localization entries using an injected pattern table.
///
/// The scanner maintains a cursor over the text. Each round it finds, for
/// every pattern, the first match at or after the cursor, then selects the
/// match with the smallest start offset; ties at the same offset go to the
/// pattern listed earlier in the table (stable earliest-wins, not longest
/// match). Text between the cursor and the winning match — stray whitespace,
/// unrecognized lines — is skipped and not retained.
pub struct Scanner<'a> {
    table: &'a PatternTable,
}

impl<'a> Scanner<'a> {
    pub fn new(table: &'a PatternTable) -> Self {
        Scanner { table }
    }

    /// Extracts all entries from `text`, in order of occurrence.
    ///
    /// A text with no recognizable entries yields an empty vector, not an
    /// error; scanning stops at the first position from which no pattern
    /// matches anywhere in the remaining text.
    pub fn scan(&self, text: &str) -> Vec<Entry> {
        let mut entries = Vec::new();
        let mut cursor = 0;

        while cursor < text.len() {
            let mut winner: Option<(usize, usize, Entry)> = None;

            for pattern in self.table.patterns() {
                let Some(caps) = pattern.expression().captures_at(text, cursor) else {
                    continue;
                };
                let Some(whole) = caps.get(0) else {
                    continue;
                };
                let earlier = match &winner {
                    None => true,
                    // Strictly earlier wins; an equal offset keeps the
                    // pattern found first in table order.
                    Some((start, _, _)) => whole.start() < *start,
                };
                if earlier {
                    if let Some(entry) = Entry::from_captures(&caps, pattern) {
                        winner = Some((whole.start(), whole.end(), entry));
                    }
                }
            }

            let Some((_, end, entry)) = winner else {
                break;
            };
            entries.push(entry);

            // Advance to the absolute end of the match. Advancing by the
            // match length alone under-advances when non-matching text was
            // skipped, rescanning the same span.
            if end <= cursor {
                break;
            }
            cursor = end;
        }

        entries
    }
}
