//! The merge engine: reconciles two parsed files by key.

use std::collections::HashMap;

use crate::entry::Entry;
use crate::file::StringsFile;

/// Reconciles `incoming` into `base`, producing a new model.
///
/// This is an overlay, not a union — a deliberate asymmetry:
///
/// - A base entry whose key is absent from `incoming` is kept unchanged.
/// - When both sides have the key and the values are textually identical,
///   the base entry is kept verbatim and its modified flag stays false.
/// - When the values differ, the result entry is the incoming entry (its
///   source slice and spans) with the modified flag forced to true.
/// - Keys present only in `incoming` are dropped: merge reconciles
///   translations for known keys, it never introduces new ones.
///
/// Duplicate keys in `incoming` are not validated; the last occurrence wins.
/// Keys are compared by exact string equality. The result keeps `base`'s
/// encoding and entry order. Merge never fails.
pub fn merge(base: &StringsFile, incoming: &StringsFile) -> StringsFile {
    let mut latest: HashMap<&str, &Entry> = HashMap::new();
    for entry in incoming.entries() {
        latest.insert(entry.key(), entry);
    }

    let entries = base
        .entries()
        .iter()
        .map(|ours| match latest.get(ours.key()) {
            Some(theirs) if theirs.value() != ours.value() => theirs.as_modified(),
            _ => ours.clone(),
        })
        .collect();

    StringsFile::from_parts(entries, base.encoding())
}
