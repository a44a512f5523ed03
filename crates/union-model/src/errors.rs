use thiserror::Error;

/// Decode failures for encoded identifiers.
#[derive(Debug, Error)]
pub enum IdParseError {
    /// First segment is not in the closed set of supported blockchain tags.
    #[error("unknown blockchain tag '{value}'")]
    UnknownBlockchain {
        /// Offending tag text.
        value: String,
    },
    /// Segment count is below the arity of the decoded variant.
    #[error("malformed identifier '{value}': expected {expected_segments} ':'-separated segments")]
    Malformed {
        /// Full input text.
        value: String,
        /// Segment count required by the variant, including the chain tag.
        expected_segments: usize,
    },
    /// Token id segment is not an integer.
    #[error("invalid token id segment '{value}'")]
    InvalidTokenId {
        /// Offending segment text.
        value: String,
        /// Underlying numeric parse failure.
        #[source]
        source: NumberParseError,
    },
}

/// Parse failures for arbitrary-precision numeric text.
#[derive(Debug, Error)]
pub enum NumberParseError {
    /// Text is not an integer or decimal literal under the lenient grammar.
    #[error("'{value}' is not a valid number literal")]
    Malformed {
        /// Offending text.
        value: String,
    },
    /// Exponent too large to expand into plain decimal digits.
    #[error("exponent of '{value}' is out of range")]
    ExponentOverflow {
        /// Offending text.
        value: String,
    },
}
