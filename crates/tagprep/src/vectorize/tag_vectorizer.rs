//! # Tag Vectorizer
//!
//! One-hot encoding of tag sequences over a sorted class set.

use std::collections::BTreeSet;

use crate::{
    errors::{TPResult, TagprepError},
    types::{BatchTensor, DocumentTensor, TPHashMap, Vector, hash_map_new},
};

const COMPONENT: &str = "TagVectorizer";

/// What [`TagVectorizer::transform`] does with a tag outside the class set.
#[derive(
    Default,
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    strum_macros::EnumString,
    strum_macros::EnumIter,
    strum_macros::Display,
)]
#[strum(serialize_all = "kebab-case")]
pub enum UnknownTagPolicy {
    /// Fail with [`TagprepError::UnknownTag`].
    #[default]
    Error,

    /// Encode the tag as an all-zero row.
    ///
    /// A zero row has no largest entry, so
    /// [`TagVectorizer::inverse_transform`] decodes it to the first class.
    ZeroRow,
}

/// One-hot encoder for tag sequences.
///
/// The class set is fixed by [`TagVectorizer::adapt`]; class `i` is the
/// `i`-th distinct tag in sorted order, and owns position `i` of every
/// encoded vector.
#[derive(Debug, Clone, Default)]
pub struct TagVectorizer {
    classes: Vec<String>,
    index: TPHashMap<String, usize>,
    unknown_tags: UnknownTagPolicy,
}

impl TagVectorizer {
    /// Create an unfitted vectorizer.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the [`UnknownTagPolicy`].
    pub fn with_unknown_tag_policy(
        mut self,
        policy: UnknownTagPolicy,
    ) -> Self {
        self.unknown_tags = policy;
        self
    }

    /// The [`UnknownTagPolicy`].
    pub fn unknown_tag_policy(&self) -> UnknownTagPolicy {
        self.unknown_tags
    }

    /// The fitted classes, in one-hot position order.
    pub fn classes(&self) -> &[String] {
        &self.classes
    }

    /// The number of classes; the width of every encoded vector.
    pub fn num_classes(&self) -> usize {
        self.classes.len()
    }

    /// Has [`Self::adapt`] fixed a non-empty class set?
    pub fn is_adapted(&self) -> bool {
        !self.classes.is_empty()
    }

    fn ensure_adapted(&self) -> TPResult<()> {
        if self.is_adapted() {
            Ok(())
        } else {
            Err(TagprepError::NotAdapted {
                component: COMPONENT,
            })
        }
    }

    /// Fix the class set to the distinct tags in `targets`.
    ///
    /// Replaces any previous class set.
    pub fn adapt<D: AsRef<[String]>>(
        &mut self,
        targets: &[D],
    ) {
        let distinct: BTreeSet<&str> = targets
            .iter()
            .flat_map(|doc| doc.as_ref().iter().map(String::as_str))
            .collect();

        self.classes = distinct.into_iter().map(str::to_string).collect();
        self.index = hash_map_new();
        for (idx, class) in self.classes.iter().enumerate() {
            self.index.insert(class.clone(), idx);
        }
        log::info!("tag classes ({}): {:?}", self.classes.len(), self.classes);
    }

    fn one_hot(
        &self,
        position: usize,
    ) -> Vector {
        let mut vector = vec![0.0; self.num_classes()];
        vector[position] = 1.0;
        vector
    }

    /// Encode one tag sequence.
    pub fn transform_document(
        &self,
        tags: &[String],
    ) -> TPResult<DocumentTensor> {
        self.ensure_adapted()?;
        self.transform_indexed(0, tags)
    }

    fn transform_indexed(
        &self,
        document: usize,
        tags: &[String],
    ) -> TPResult<DocumentTensor> {
        tags.iter()
            .enumerate()
            .map(|(position, tag)| match (self.index.get(tag), self.unknown_tags) {
                (Some(&class), _) => Ok(self.one_hot(class)),
                (None, UnknownTagPolicy::ZeroRow) => {
                    log::debug!("document {document}, tag {position}: unknown tag {tag:?}");
                    Ok(vec![0.0; self.num_classes()])
                }
                (None, UnknownTagPolicy::Error) => Err(TagprepError::UnknownTag {
                    document,
                    position,
                    tag: tag.clone(),
                }),
            })
            .collect()
    }

    /// Encode each tag sequence as one-hot vectors.
    ///
    /// Output shape is `(documents, tags-per-document, num_classes)`.
    ///
    /// A tag outside the class set is handled per [`UnknownTagPolicy`].
    ///
    /// # Errors
    /// * [`TagprepError::NotAdapted`] before [`Self::adapt`].
    /// * [`TagprepError::UnknownTag`] for a tag outside the class set, under
    ///   [`UnknownTagPolicy::Error`].
    pub fn transform<D: AsRef<[String]>>(
        &self,
        targets: &[D],
    ) -> TPResult<BatchTensor> {
        self.ensure_adapted()?;
        targets
            .iter()
            .enumerate()
            .map(|(idx, doc)| self.transform_indexed(idx, doc.as_ref()))
            .collect()
    }

    /// Decode rows back to tags.
    ///
    /// Each row decodes to the class of its largest entry (the first one on
    /// ties), so model scores decode as well as exact one-hot rows.
    ///
    /// # Errors
    /// * [`TagprepError::NotAdapted`] before [`Self::adapt`].
    /// * [`TagprepError::ClassCountMismatch`] for a row of the wrong width.
    /// * [`TagprepError::NonFiniteScore`] for a row holding NaN or infinity.
    pub fn inverse_transform<D: AsRef<[Vector]>>(
        &self,
        encoded: &[D],
    ) -> TPResult<Vec<Vec<String>>> {
        self.ensure_adapted()?;
        encoded
            .iter()
            .enumerate()
            .map(|(document, rows)| {
                rows.as_ref()
                    .iter()
                    .enumerate()
                    .map(|(position, row)| self.decode_row(document, position, row))
                    .collect()
            })
            .collect()
    }

    fn decode_row(
        &self,
        document: usize,
        position: usize,
        row: &[f32],
    ) -> TPResult<String> {
        if row.len() != self.num_classes() {
            return Err(TagprepError::ClassCountMismatch {
                document,
                position,
                expected: self.num_classes(),
                found: row.len(),
            });
        }
        if let Some(&value) = row.iter().find(|v| !v.is_finite()) {
            return Err(TagprepError::NonFiniteScore {
                document,
                position,
                value,
            });
        }
        let mut best = 0;
        for (idx, value) in row.iter().enumerate() {
            if *value > row[best] {
                best = idx;
            }
        }
        Ok(self.classes[best].clone())
    }
}
