//! All error types for the locmerge crate.
//!
//! These are returned from all fallible operations (decoding, pattern
//! construction, file I/O, caching). Unrecognized text inside a `.strings`
//! file is never an error: the scanner silently skips it.

use thiserror::Error;

#[derive(Error, Debug)]
pub enum Error {
    /// The input bytes decoded as neither UTF-8 nor UTF-16.
    #[error("unsupported encoding: data is neither valid UTF-8 nor valid UTF-16")]
    UnsupportedEncoding,

    /// An entry pattern failed to compile.
    #[error("invalid entry pattern `{pattern}`: {source}")]
    InvalidPattern {
        pattern: String,
        #[source]
        source: regex::Error,
    },

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("cache error: {0}")]
    Cache(#[from] serde_json::Error),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unsupported_encoding_message() {
        let error = Error::UnsupportedEncoding;
        assert!(error.to_string().contains("neither valid UTF-8"));
    }

    #[test]
    fn test_invalid_pattern_carries_expression() {
        let source = regex::Regex::new("(").unwrap_err();
        let error = Error::InvalidPattern {
            pattern: "(".to_string(),
            source,
        };
        assert!(error.to_string().contains("invalid entry pattern `(`"));
    }

    #[test]
    fn test_io_error_conversion() {
        let io_error = std::io::Error::new(std::io::ErrorKind::NotFound, "missing");
        let error = Error::from(io_error);
        assert!(error.to_string().contains("I/O error"));
    }
}
