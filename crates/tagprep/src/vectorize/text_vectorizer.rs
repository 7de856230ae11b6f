//! # Text Vectorizer

use rand::{Rng, SeedableRng, rngs::StdRng};

use crate::{
    embedding::EmbeddingVocab,
    errors::{TPResult, TagprepError},
    types::{BatchTensor, DocumentTensor},
};

/// Maps token sequences to sequences of embedding vectors.
///
/// Owns its [`EmbeddingVocab`]; the vocabulary only changes through
/// [`TextVectorizer::adapt`], which draws OOV vectors from `R`.
#[derive(Debug, Clone)]
pub struct TextVectorizer<R: Rng = StdRng> {
    vocab: EmbeddingVocab,
    rng: R,
}

impl TextVectorizer<StdRng> {
    /// Build with a [`StdRng`]; seeded when `seed` is set, else from the OS.
    pub fn seeded(
        vocab: EmbeddingVocab,
        seed: Option<u64>,
    ) -> Self {
        let rng = match seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_os_rng(),
        };
        Self::new(vocab, rng)
    }
}

impl<R: Rng> TextVectorizer<R> {
    /// Build from a vocabulary and the generator used for OOV vectors.
    pub fn new(
        vocab: EmbeddingVocab,
        rng: R,
    ) -> Self {
        Self { vocab, rng }
    }

    /// The current vocabulary.
    pub fn vocabulary(&self) -> &EmbeddingVocab {
        &self.vocab
    }

    /// Unwrap the vocabulary.
    pub fn into_vocabulary(self) -> EmbeddingVocab {
        self.vocab
    }

    /// The vector width.
    pub fn embedding_dim(&self) -> usize {
        self.vocab.embedding_dim()
    }

    /// Give every unseen token in `documents` a random vector.
    ///
    /// See [`EmbeddingVocab::adapt`].
    ///
    /// # Returns
    /// The number of words added.
    pub fn adapt<D: AsRef<[String]>>(
        &mut self,
        documents: &[D],
    ) -> usize {
        self.vocab.adapt(documents, &mut self.rng)
    }

    /// Map one token sequence to its vectors, in order.
    ///
    /// The first token missing from the vocabulary aborts the document.
    /// The error names the token and its position; `document` is 0.
    pub fn transform_document(
        &self,
        tokens: &[String],
    ) -> TPResult<DocumentTensor> {
        self.transform_indexed(0, tokens)
    }

    fn transform_indexed(
        &self,
        document: usize,
        tokens: &[String],
    ) -> TPResult<DocumentTensor> {
        tokens
            .iter()
            .enumerate()
            .map(|(position, token)| {
                self.vocab
                    .get(token)
                    .map(<[f32]>::to_vec)
                    .ok_or_else(|| TagprepError::UnknownToken {
                        document,
                        position,
                        token: token.clone(),
                    })
            })
            .collect()
    }

    /// Map each token sequence to its vectors.
    ///
    /// Output shape is `(documents, tokens-per-document, embedding_dim)`,
    /// unpadded.
    ///
    /// # Errors
    /// [`TagprepError::UnknownToken`] for the first token, in the first
    /// document, that the vocabulary lacks. Nothing is returned for the
    /// rest of the batch.
    pub fn transform<D: AsRef<[String]>>(
        &self,
        documents: &[D],
    ) -> TPResult<BatchTensor> {
        documents
            .iter()
            .enumerate()
            .map(|(idx, doc)| self.transform_indexed(idx, doc.as_ref()))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use proptest::prelude::*;

    use super::*;
    use crate::embedding::{EmbeddingTableOptions, read_embedding_table};

    fn docs(items: &[&[&str]]) -> Vec<Vec<String>> {
        items
            .iter()
            .map(|d| d.iter().map(|s| s.to_string()).collect())
            .collect()
    }

    fn pets() -> TextVectorizer {
        let vocab = read_embedding_table(
            "cat 0.1 0.2\ndog 0.3 0.4\n".as_bytes(),
            &EmbeddingTableOptions::new(2),
        )
        .unwrap();
        TextVectorizer::seeded(vocab, Some(11))
    }

    #[test]
    fn test_transform_known_tokens() {
        let vectorizer = pets();
        let out = vectorizer
            .transform(&docs(&[&["cat", "dog", "cat"], &["dog"], &[]]))
            .unwrap();
        assert_eq!(
            out,
            vec![
                vec![vec![0.1, 0.2], vec![0.3, 0.4], vec![0.1, 0.2]],
                vec![vec![0.3, 0.4]],
                vec![],
            ]
        );
    }

    #[test]
    fn test_unknown_token_aborts_batch() {
        let vectorizer = pets();
        let err = vectorizer
            .transform(&docs(&[&["cat"], &["dog", "fox", "owl"], &["emu"]]))
            .unwrap_err();
        match err {
            TagprepError::UnknownToken {
                document,
                position,
                token,
            } => {
                assert_eq!((document, position), (1, 1));
                assert_eq!(token, "fox");
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    fn test_adapt_then_transform() {
        let mut vectorizer = pets();
        let corpus = docs(&[&["cat", "fox"]]);

        assert!(vectorizer.transform(&corpus).is_err());
        assert_eq!(vectorizer.adapt(&corpus), 1);
        assert_eq!(vectorizer.adapt(&corpus), 0);

        let out = vectorizer.transform(&corpus).unwrap();
        assert_eq!(out[0][0], vec![0.1, 0.2]);
        assert_eq!(out[0][1].len(), 2);
        assert!(out[0][1].iter().all(|v| (-1.0..=1.0).contains(v)));
        assert_eq!(out[0][1], vectorizer.vocabulary().get("fox").unwrap());
    }

    #[test]
    fn test_transform_document() {
        let vectorizer = pets();
        let doc = ["dog".to_string()];
        assert_eq!(vectorizer.transform_document(&doc).unwrap(), vec![vec![0.3, 0.4]]);
    }

    proptest! {
        #[test]
        fn prop_transform_after_adapt_never_fails(
            corpus in prop::collection::vec(
                prop::collection::vec("[a-e]{1,3}", 0..8),
                0..8,
            ),
            seed in any::<u64>(),
        ) {
            let mut vectorizer =
                TextVectorizer::seeded(EmbeddingVocab::new(3).unwrap(), Some(seed));
            vectorizer.adapt(&corpus);

            let out = vectorizer.transform(&corpus).unwrap();
            prop_assert_eq!(out.len(), corpus.len());
            for (doc, vectors) in corpus.iter().zip(&out) {
                prop_assert_eq!(doc.len(), vectors.len());
                prop_assert!(vectors.iter().all(|v| v.len() == 3));
            }
        }
    }
}
