//! # Documents and Corpora

use crate::errors::{TPResult, TagprepError};

/// A token sequence and its aligned tag sequence.
///
/// `tokens().len() == tags().len()` always holds; the fields are private
/// so the only ways in are the checked constructors.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Document {
    tokens: Vec<String>,
    tags: Vec<String>,
}

impl Document {
    /// Build a document from parallel token and tag sequences.
    ///
    /// # Errors
    /// [`TagprepError::Misaligned`] if the lengths differ.
    pub fn new(
        tokens: Vec<String>,
        tags: Vec<String>,
    ) -> TPResult<Self> {
        if tokens.len() != tags.len() {
            return Err(TagprepError::Misaligned {
                tokens: tokens.len(),
                tags: tags.len(),
            });
        }
        Ok(Self { tokens, tags })
    }

    /// Build a document from `(token, tag)` pairs.
    pub fn from_pairs<I, S, T>(pairs: I) -> Self
    where
        I: IntoIterator<Item = (S, T)>,
        S: Into<String>,
        T: Into<String>,
    {
        let mut doc = Self::default();
        for (token, tag) in pairs {
            doc.push(token, tag);
        }
        doc
    }

    /// Append one aligned `(token, tag)` pair.
    pub fn push(
        &mut self,
        token: impl Into<String>,
        tag: impl Into<String>,
    ) {
        self.tokens.push(token.into());
        self.tags.push(tag.into());
    }

    /// The tokens.
    pub fn tokens(&self) -> &[String] {
        &self.tokens
    }

    /// The tags.
    pub fn tags(&self) -> &[String] {
        &self.tags
    }

    /// The number of tokens (and tags).
    pub fn len(&self) -> usize {
        self.tokens.len()
    }

    /// Is the document empty?
    pub fn is_empty(&self) -> bool {
        self.tokens.is_empty()
    }

    /// Split into `(tokens, tags)`.
    pub fn into_parts(self) -> (Vec<String>, Vec<String>) {
        (self.tokens, self.tags)
    }
}

/// An ordered collection of [`Document`]s.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Corpus {
    documents: Vec<Document>,
}

impl From<Vec<Document>> for Corpus {
    fn from(documents: Vec<Document>) -> Self {
        Self { documents }
    }
}

impl FromIterator<Document> for Corpus {
    fn from_iter<I: IntoIterator<Item = Document>>(iter: I) -> Self {
        Self {
            documents: iter.into_iter().collect(),
        }
    }
}

impl IntoIterator for Corpus {
    type Item = Document;
    type IntoIter = std::vec::IntoIter<Document>;

    fn into_iter(self) -> Self::IntoIter {
        self.documents.into_iter()
    }
}

impl Corpus {
    /// Build a corpus from the parallel `(X, y)` representation.
    ///
    /// # Errors
    /// [`TagprepError::Misaligned`] if `x` and `y` hold a different number of
    /// sequences (reported as sequence counts), or if any pair differs in length.
    pub fn from_parallel(
        x: Vec<Vec<String>>,
        y: Vec<Vec<String>>,
    ) -> TPResult<Self> {
        if x.len() != y.len() {
            return Err(TagprepError::Misaligned {
                tokens: x.len(),
                tags: y.len(),
            });
        }
        x.into_iter()
            .zip(y)
            .map(|(tokens, tags)| Document::new(tokens, tags))
            .collect()
    }

    /// The documents.
    pub fn documents(&self) -> &[Document] {
        &self.documents
    }

    /// The number of documents.
    pub fn len(&self) -> usize {
        self.documents.len()
    }

    /// Is the corpus empty?
    pub fn is_empty(&self) -> bool {
        self.documents.is_empty()
    }

    /// Append a document.
    pub fn push(
        &mut self,
        document: Document,
    ) {
        self.documents.push(document);
    }

    /// Append all documents of `other`.
    pub fn extend(
        &mut self,
        other: Corpus,
    ) {
        self.documents.extend(other.documents);
    }

    /// The token sequences, `X`.
    pub fn x(&self) -> Vec<&[String]> {
        self.documents.iter().map(Document::tokens).collect()
    }

    /// The tag sequences, `y`.
    pub fn y(&self) -> Vec<&[String]> {
        self.documents.iter().map(Document::tags).collect()
    }

    /// Split into the owned parallel `(X, y)` representation.
    pub fn into_parallel(self) -> (Vec<Vec<String>>, Vec<Vec<String>>) {
        self.documents.into_iter().map(Document::into_parts).unzip()
    }

    /// Unwrap the documents.
    pub fn into_documents(self) -> Vec<Document> {
        self.documents
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn strings(items: &[&str]) -> Vec<String> {
        items.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn test_document_alignment() {
        let doc = Document::new(strings(&["a", "b"]), strings(&["DT", "NN"])).unwrap();
        assert_eq!(doc.len(), 2);
        assert_eq!(doc.tokens(), &strings(&["a", "b"])[..]);

        assert!(matches!(
            Document::new(strings(&["a", "b"]), strings(&["DT"])),
            Err(TagprepError::Misaligned { tokens: 2, tags: 1 })
        ));
    }

    #[test]
    fn test_from_pairs() {
        let doc = Document::from_pairs([("the", "DT"), ("cat", "NN")]);
        assert_eq!(doc.tags(), &strings(&["DT", "NN"])[..]);
    }

    #[test]
    fn test_parallel_roundtrip() {
        let x = vec![strings(&["a", "b"]), strings(&["c"])];
        let y = vec![strings(&["NN", "VB"]), strings(&["NN"])];

        let corpus = Corpus::from_parallel(x.clone(), y.clone()).unwrap();
        assert_eq!(corpus.len(), 2);
        assert_eq!(corpus.y()[1], &strings(&["NN"])[..]);
        assert_eq!(corpus.into_parallel(), (x, y));
    }

    #[test]
    fn test_from_parallel_rejects_mismatch() {
        let x = vec![strings(&["a"]), strings(&["b"])];
        let y = vec![strings(&["NN"])];
        assert!(matches!(
            Corpus::from_parallel(x, y),
            Err(TagprepError::Misaligned { tokens: 2, tags: 1 })
        ));

        let x = vec![strings(&["a", "b"])];
        let y = vec![strings(&["NN"])];
        assert!(Corpus::from_parallel(x, y).is_err());
    }
}
