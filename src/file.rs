//! The in-memory model of a `.strings` file: ordered entries plus the
//! character encoding detected at decode time.

use std::fmt;
use std::fs::File;
use std::path::Path;

use encoding_rs::{UTF_8, UTF_16LE};
use serde::{Deserialize, Serialize};

use crate::entry::Entry;
use crate::error::Error;
use crate::merge::merge;
use crate::patterns::PatternTable;
use crate::scanner::Scanner;

/// Character encoding of a `.strings` file on disk.
///
/// Detected once at decode time and immutable for the model's lifetime; a
/// merge result adopts the base model's encoding.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Encoding {
    Utf8,
    Utf16,
}

impl fmt::Display for Encoding {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Encoding::Utf8 => write!(f, "UTF-8"),
            Encoding::Utf16 => write!(f, "UTF-16"),
        }
    }
}

/// An ordered sequence of entries plus the detected encoding.
///
/// The entry order is the order of first occurrence in the scanned text and
/// is preserved by every operation, including merge. Models are never
/// mutated in place: merging and importing produce a new `StringsFile`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StringsFile {
    entries: Vec<Entry>,
    encoding: Encoding,
}

impl StringsFile {
    /// An empty UTF-8 model, for hosts creating a document from scratch.
    pub fn new() -> Self {
        StringsFile {
            entries: Vec::new(),
            encoding: Encoding::Utf8,
        }
    }

    pub(crate) fn from_parts(entries: Vec<Entry>, encoding: Encoding) -> Self {
        StringsFile { entries, encoding }
    }

    /// Decodes raw file bytes using the built-in pattern table.
    ///
    /// Encoding detection attempts UTF-8 first, then UTF-16; the first
    /// successful decode wins (a BOM, when present, settles it directly).
    /// When neither succeeds this returns [`Error::UnsupportedEncoding`]
    /// rather than an empty model.
    pub fn decode(bytes: &[u8]) -> Result<Self, Error> {
        Self::decode_with(bytes, PatternTable::builtin())
    }

    /// Decodes raw file bytes, scanning with a caller-supplied table.
    pub fn decode_with(bytes: &[u8], table: &PatternTable) -> Result<Self, Error> {
        let (text, encoding) = decode_text(bytes)?;
        let entries = Scanner::new(table).scan(&text);
        Ok(StringsFile { entries, encoding })
    }

    /// Serializes the model back to bytes.
    ///
    /// Unmodified entries replay their original source slice verbatim, so a
    /// model whose entries are all unmodified reproduces the scanned portion
    /// of the input byte-for-byte. Modified entries are rendered fresh in
    /// the canonical `"key" = "value";` form, with a trailing comment suffix
    /// when they carry one. UTF-16 output is little-endian with a BOM.
    pub fn encode(&self) -> Vec<u8> {
        let mut text = String::new();
        for entry in &self.entries {
            if entry.modified() {
                text.push_str(&entry.to_string());
                text.push('\n');
            } else {
                text.push_str(entry.source());
            }
        }
        encode_text(&text, self.encoding)
    }

    /// Entries in order of first occurrence in the scanned text.
    pub fn entries(&self) -> &[Entry] {
        &self.entries
    }

    /// The encoding detected when this model was decoded.
    pub fn encoding(&self) -> Encoding {
        self.encoding
    }

    /// Reads and decodes the file at `path`.
    pub fn read_from<P: AsRef<Path>>(path: P) -> Result<Self, Error> {
        let bytes = std::fs::read(path)?;
        Self::decode(&bytes)
    }

    /// Encodes the model and writes it to `path`.
    pub fn write_to<P: AsRef<Path>>(&self, path: P) -> Result<(), Error> {
        std::fs::write(path, self.encode())?;
        Ok(())
    }

    /// Reads the file at `path` and merges it into this model as the
    /// incoming side, producing a new model.
    ///
    /// Values for keys present in both files are taken from the imported
    /// file and flagged as modified when they differ; keys only present in
    /// the imported file are dropped (see [`crate::merge::merge`]).
    pub fn import_from<P: AsRef<Path>>(&self, path: P) -> Result<Self, Error> {
        let incoming = Self::read_from(path)?;
        Ok(merge(self, &incoming))
    }

    /// Caches the parsed model to a JSON file.
    pub fn cache_to_file<P: AsRef<Path>>(&self, path: P) -> Result<(), Error> {
        let mut writer = File::create(path)?;
        serde_json::to_writer(&mut writer, self)?;
        Ok(())
    }

    /// Loads a model from a JSON cache file.
    pub fn load_from_cache<P: AsRef<Path>>(path: P) -> Result<Self, Error> {
        let mut reader = File::open(path)?;
        let model = serde_json::from_reader(&mut reader)?;
        Ok(model)
    }
}

impl Default for StringsFile {
    fn default() -> Self {
        Self::new()
    }
}

/// Detects the encoding and decodes `bytes` to text.
///
/// A recognized BOM settles the encoding directly (and is stripped);
/// otherwise UTF-8 is attempted first, then UTF-16 little-endian.
fn decode_text(bytes: &[u8]) -> Result<(String, Encoding), Error> {
    if let Some((detected, bom_len)) = encoding_rs::Encoding::for_bom(bytes) {
        let text = detected
            .decode_without_bom_handling_and_without_replacement(&bytes[bom_len..])
            .ok_or(Error::UnsupportedEncoding)?;
        let encoding = if detected == UTF_8 {
            Encoding::Utf8
        } else {
            Encoding::Utf16
        };
        return Ok((text.into_owned(), encoding));
    }

    if let Some(text) = UTF_8.decode_without_bom_handling_and_without_replacement(bytes) {
        return Ok((text.into_owned(), Encoding::Utf8));
    }

    if let Some(text) = UTF_16LE.decode_without_bom_handling_and_without_replacement(bytes) {
        return Ok((text.into_owned(), Encoding::Utf16));
    }

    Err(Error::UnsupportedEncoding)
}

/// Encodes `text` per the model encoding. encoding_rs is decode-only for
/// UTF-16, so the UTF-16 byte layout (LE, BOM first) is produced directly.
fn encode_text(text: &str, encoding: Encoding) -> Vec<u8> {
    match encoding {
        Encoding::Utf8 => text.as_bytes().to_vec(),
        Encoding::Utf16 => {
            let mut bytes = Vec::with_capacity(2 + text.len() * 2);
            bytes.extend_from_slice(&[0xFF, 0xFE]);
            for unit in text.encode_utf16() {
                bytes.extend_from_slice(&unit.to_le_bytes());
            }
            bytes
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn utf16le_with_bom(text: &str) -> Vec<u8> {
        let mut bytes = vec![0xFF, 0xFE];
        for unit in text.encode_utf16() {
            bytes.extend_from_slice(&unit.to_le_bytes());
        }
        bytes
    }

    #[test]
    fn test_decode_utf8_detects_encoding_and_entries() {
        let model = StringsFile::decode(b"\"hello\" = \"Hello\";\n").unwrap();
        assert_eq!(model.encoding(), Encoding::Utf8);
        assert_eq!(model.entries().len(), 1);
        assert_eq!(model.entries()[0].key(), "hello");
    }

    #[test]
    fn test_decode_utf16_with_bom() {
        let bytes = utf16le_with_bom("\"hello\" = \"Bonjour\";\n");
        let model = StringsFile::decode(&bytes).unwrap();
        assert_eq!(model.encoding(), Encoding::Utf16);
        assert_eq!(model.entries()[0].value(), "Bonjour");
    }

    #[test]
    fn test_decode_utf16_without_bom_when_utf8_fails() {
        // Non-ASCII UTF-16LE without BOM: the 0xE9 0x00 pair is invalid as
        // UTF-8, so detection falls through to UTF-16.
        let mut bytes = Vec::new();
        for unit in "\"clé\" = \"é\";\n".encode_utf16() {
            bytes.extend_from_slice(&unit.to_le_bytes());
        }
        let model = StringsFile::decode(&bytes).unwrap();
        assert_eq!(model.encoding(), Encoding::Utf16);
        assert_eq!(model.entries()[0].key(), "clé");
    }

    #[test]
    fn test_decode_rejects_bytes_invalid_in_both_encodings() {
        // A single 0xFF byte is invalid UTF-8 and has odd length for UTF-16.
        let result = StringsFile::decode(&[0xFF]);
        assert!(matches!(result, Err(Error::UnsupportedEncoding)));
    }

    #[test]
    fn test_encode_replays_unmodified_sources_verbatim() {
        let text = "\"a\" = \"1\";\n\"b\" = \"2\";\n";
        let model = StringsFile::decode(text.as_bytes()).unwrap();
        assert_eq!(model.encode(), text.as_bytes());
    }

    #[test]
    fn test_encode_utf16_round_trips_bom_files() {
        let bytes = utf16le_with_bom("\"a\" = \"1\";\n");
        let model = StringsFile::decode(&bytes).unwrap();
        assert_eq!(model.encode(), bytes);
    }

    #[test]
    fn test_empty_model_defaults_to_utf8() {
        let model = StringsFile::new();
        assert_eq!(model.encoding(), Encoding::Utf8);
        assert!(model.entries().is_empty());
        assert!(model.encode().is_empty());
    }

    #[test]
    fn test_encoding_display_names() {
        assert_eq!(Encoding::Utf8.to_string(), "UTF-8");
        assert_eq!(Encoding::Utf16.to_string(), "UTF-16");
    }

    #[test]
    fn test_decode_with_substituted_table() {
        use crate::patterns::{EntryPattern, PatternTable};

        let pattern = EntryPattern::new(r"(\w+)=(\w+)", 1, 2, None).unwrap();
        let table = PatternTable::new(vec![pattern]);
        let model = StringsFile::decode_with(b"name=value\n", &table).unwrap();
        assert_eq!(model.entries().len(), 1);
        assert_eq!(model.entries()[0].key(), "name");
        assert_eq!(model.entries()[0].value(), "value");
    }
}
