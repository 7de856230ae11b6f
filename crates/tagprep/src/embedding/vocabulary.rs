//! # Embedding Vocabulary

use rand::Rng;

use crate::{
    errors::{TPResult, TagprepError},
    types::{TPHashMap, TPHashSet, Vector, hash_map_new, hash_set_new},
};

/// A word → vector table with a fixed embedding width.
///
/// The table only grows: pretrained rows are loaded once, and
/// [`EmbeddingVocab::adapt`] adds each unseen word at most once.
#[derive(Debug, Clone, PartialEq)]
pub struct EmbeddingVocab {
    embedding_dim: usize,
    table: TPHashMap<String, Vector>,
}

impl EmbeddingVocab {
    /// Create an empty vocabulary.
    ///
    /// # Errors
    /// [`TagprepError::InvalidConfig`] if `embedding_dim` is 0.
    pub fn new(embedding_dim: usize) -> TPResult<Self> {
        if embedding_dim == 0 {
            return Err(TagprepError::InvalidConfig(
                "embedding_dim must be > 0".to_string(),
            ));
        }
        Ok(Self {
            embedding_dim,
            table: hash_map_new(),
        })
    }

    /// The vector width.
    pub fn embedding_dim(&self) -> usize {
        self.embedding_dim
    }

    /// The number of words.
    pub fn len(&self) -> usize {
        self.table.len()
    }

    /// Is the vocabulary empty?
    pub fn is_empty(&self) -> bool {
        self.table.is_empty()
    }

    /// Look up a word.
    pub fn get(
        &self,
        word: &str,
    ) -> Option<&[f32]> {
        self.table.get(word).map(Vec::as_slice)
    }

    /// Is `word` present?
    pub fn contains(
        &self,
        word: &str,
    ) -> bool {
        self.table.contains_key(word)
    }

    /// Iterate over `(word, vector)` entries, in no particular order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &[f32])> {
        self.table.iter().map(|(w, v)| (w.as_str(), v.as_slice()))
    }

    /// Insert `word` unless already present.
    ///
    /// Returns `true` if the word was added.
    ///
    /// # Errors
    /// [`TagprepError::InvalidConfig`] if `vector` has the wrong width.
    pub fn try_insert(
        &mut self,
        word: impl Into<String>,
        vector: Vector,
    ) -> TPResult<bool> {
        if vector.len() != self.embedding_dim {
            return Err(TagprepError::InvalidConfig(format!(
                "vector width {} != embedding_dim {}",
                vector.len(),
                self.embedding_dim
            )));
        }
        let word = word.into();
        if self.table.contains_key(&word) {
            return Ok(false);
        }
        self.table.insert(word, vector);
        Ok(true)
    }

    /// Add a random vector for every unseen token in `documents`.
    ///
    /// Each new word gets an independent draw, uniform over `[-1, 1]` per
    /// component. Existing entries, including earlier random ones, are never
    /// touched; calling this twice with the same documents adds nothing the
    /// second time.
    ///
    /// New words are drawn in order of first occurrence, so a seeded `rng`
    /// reproduces the same vectors.
    ///
    /// # Returns
    /// The number of words added.
    pub fn adapt<D, R>(
        &mut self,
        documents: &[D],
        rng: &mut R,
    ) -> usize
    where
        D: AsRef<[String]>,
        R: Rng + ?Sized,
    {
        let mut seen: TPHashSet<&str> = hash_set_new();
        let mut oov: Vec<&str> = Vec::new();
        for doc in documents {
            for token in doc.as_ref() {
                let token = token.as_str();
                if !self.table.contains_key(token) && seen.insert(token) {
                    oov.push(token);
                }
            }
        }

        for word in &oov {
            let vector: Vector = (0..self.embedding_dim)
                .map(|_| rng.random_range(-1.0f32..=1.0))
                .collect();
            self.table.insert(word.to_string(), vector);
        }

        log::info!("generated embeddings for {} OOV words", oov.len());
        oov.len()
    }
}
