//! # Error Types

/// Errors from tagprep operations.
///
/// Data errors (a bad line, an unknown token) carry enough position
/// context to find the offending record; configuration errors
/// ([`TagprepError::NotAdapted`], [`TagprepError::InvalidSplit`],
/// [`TagprepError::InvalidConfig`]) are kept apart from them.
#[derive(Debug, thiserror::Error)]
pub enum TagprepError {
    /// An annotated-document line is malformed.
    #[error("{source_name}:{line}: {message}")]
    Parse {
        /// The document the line came from.
        source_name: String,
        /// The 1-based line number.
        line: usize,
        /// What is wrong with the line.
        message: String,
    },

    /// An embedding table line is malformed.
    #[error("embedding table line {line}: {message}")]
    Format {
        /// The 1-based line number.
        line: usize,
        /// What is wrong with the line.
        message: String,
    },

    /// A vectorizer was used before `adapt` fixed its state.
    #[error("{component} has not been adapted; call adapt() first")]
    NotAdapted {
        /// The unfitted component.
        component: &'static str,
    },

    /// A document holds a token the vocabulary has no vector for.
    #[error("document {document}, token {position}: {token:?} is not in the vocabulary")]
    UnknownToken {
        /// Index of the document in the transformed batch.
        document: usize,
        /// Index of the token in the document.
        position: usize,
        /// The missing token.
        token: String,
    },

    /// A tag sequence holds a tag outside the fitted class set.
    #[error("document {document}, tag {position}: {tag:?} is not a known class")]
    UnknownTag {
        /// Index of the document in the transformed batch.
        document: usize,
        /// Index of the tag in the document.
        position: usize,
        /// The unknown tag.
        tag: String,
    },

    /// An encoded tag vector does not have one entry per class.
    #[error("document {document}, row {position}: expected {expected} classes, found {found}")]
    ClassCountMismatch {
        /// Index of the document in the batch.
        document: usize,
        /// Index of the row in the document.
        position: usize,
        /// The fitted class count.
        expected: usize,
        /// The row width.
        found: usize,
    },

    /// An encoded tag row holds a NaN or infinite score.
    #[error("document {document}, row {position}: non-finite score {value}")]
    NonFiniteScore {
        /// Index of the document in the batch.
        document: usize,
        /// Index of the row in the document.
        position: usize,
        /// The offending entry.
        value: f32,
    },

    /// A vocabulary word cannot be written as an embedding table row.
    #[error("word {word:?} cannot be saved: embedding table words must be non-empty and hold no spaces or line breaks")]
    UnwritableWord {
        /// The word.
        word: String,
    },

    /// Token and tag sequences differ in length.
    #[error("misaligned document: {tokens} tokens but {tags} tags")]
    Misaligned {
        /// The token count.
        tokens: usize,
        /// The tag count.
        tags: usize,
    },

    /// Train/dev fractions are out of range.
    #[error("invalid split: train_size={train_size}, dev_size={dev_size}")]
    InvalidSplit {
        /// The requested train fraction.
        train_size: f64,
        /// The requested dev fraction.
        dev_size: f64,
    },

    /// A configuration value is unusable.
    #[error("invalid config: {0}")]
    InvalidConfig(String),

    /// I/O error.
    #[error(transparent)]
    Io(#[from] std::io::Error),

    /// Error from an external component.
    #[error("{0}")]
    External(String),
}

/// Result type for tagprep operations.
pub type TPResult<T> = core::result::Result<T, TagprepError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_messages_carry_context() {
        let err = TagprepError::Parse {
            source_name: "wsj_0001.dp".to_string(),
            line: 7,
            message: "expected 3 tab-separated fields, found 2".to_string(),
        };
        assert_eq!(
            err.to_string(),
            "wsj_0001.dp:7: expected 3 tab-separated fields, found 2"
        );

        let err = TagprepError::UnknownToken {
            document: 3,
            position: 1,
            token: "fox".to_string(),
        };
        assert_eq!(
            err.to_string(),
            "document 3, token 1: \"fox\" is not in the vocabulary"
        );

        let err = TagprepError::NotAdapted {
            component: "TagVectorizer",
        };
        assert_eq!(
            err.to_string(),
            "TagVectorizer has not been adapted; call adapt() first"
        );

        let err = TagprepError::UnwritableWord {
            word: "New York".to_string(),
        };
        assert!(err.to_string().starts_with("word \"New York\" cannot be saved"));
    }
}
