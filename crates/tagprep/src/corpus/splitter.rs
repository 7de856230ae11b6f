//! # Train/Dev/Test Splitter
//!
//! Shuffles a [`Corpus`] with one permutation of document indices and cuts
//! it into three contiguous runs. Tokens and tags travel together inside each
//! [`Document`], so alignment survives the shuffle.
//!
//! The result is only reproducible when the caller seeds the generator;
//! see [`SplitOptions::seed`] and [`SplitOptions::rng`].

use rand::{Rng, SeedableRng, rngs::StdRng, seq::SliceRandom};

use crate::{
    corpus::{Corpus, Document},
    errors::{TPResult, TagprepError},
};

/// The name of a partition.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    strum_macros::EnumString,
    strum_macros::EnumIter,
    strum_macros::Display,
)]
#[strum(serialize_all = "lowercase")]
pub enum SplitKind {
    /// Training partition.
    Train,

    /// Development (validation) partition.
    Dev,

    /// Test partition.
    Test,
}

/// One named partition of a corpus.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Split {
    /// Which partition this is.
    pub kind: SplitKind,

    /// The documents in the partition.
    pub documents: Vec<Document>,
}

impl Split {
    /// The number of documents.
    pub fn len(&self) -> usize {
        self.documents.len()
    }

    /// Is the partition empty?
    pub fn is_empty(&self) -> bool {
        self.documents.is_empty()
    }

    /// The token sequences, `X_<kind>`.
    pub fn x(&self) -> Vec<&[String]> {
        self.documents.iter().map(Document::tokens).collect()
    }

    /// The tag sequences, `y_<kind>`.
    pub fn y(&self) -> Vec<&[String]> {
        self.documents.iter().map(Document::tags).collect()
    }
}

/// The three disjoint partitions of a corpus.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CorpusSplits {
    /// Training partition.
    pub train: Split,

    /// Development partition.
    pub dev: Split,

    /// Test partition.
    pub test: Split,
}

impl CorpusSplits {
    /// Get a partition by name.
    pub fn get(
        &self,
        kind: SplitKind,
    ) -> &Split {
        match kind {
            SplitKind::Train => &self.train,
            SplitKind::Dev => &self.dev,
            SplitKind::Test => &self.test,
        }
    }

    /// Iterate `train`, `dev`, `test` in that order.
    pub fn iter(&self) -> impl Iterator<Item = &Split> {
        [&self.train, &self.dev, &self.test].into_iter()
    }

    /// The total number of documents across partitions.
    pub fn total_len(&self) -> usize {
        self.iter().map(Split::len).sum()
    }
}

/// Options for [`split_corpus`].
#[derive(Debug, Clone, PartialEq)]
pub struct SplitOptions {
    /// Fraction of documents for training, in `[0, 1]`.
    pub train_size: f64,

    /// Fraction of documents for development, in `[0, 1]`.
    ///
    /// Test gets whatever `train_size` and `dev_size` leave over.
    pub dev_size: f64,

    /// Seed for the shuffle; `None` draws one from the OS.
    pub seed: Option<u64>,
}

impl Default for SplitOptions {
    fn default() -> Self {
        Self {
            train_size: 0.8,
            dev_size: 0.1,
            seed: None,
        }
    }
}

impl SplitOptions {
    /// Create new options.
    pub fn new(
        train_size: f64,
        dev_size: f64,
    ) -> Self {
        Self {
            train_size,
            dev_size,
            seed: None,
        }
    }

    /// Set the shuffle seed.
    pub fn with_seed(
        mut self,
        seed: Option<u64>,
    ) -> Self {
        self.seed = seed;
        self
    }

    /// Check both fractions lie in `[0, 1]` and sum to at most 1.
    pub fn validate(&self) -> TPResult<()> {
        let in_range = |f: f64| f.is_finite() && (0.0..=1.0).contains(&f);
        if in_range(self.train_size)
            && in_range(self.dev_size)
            && self.train_size + self.dev_size <= 1.0
        {
            Ok(())
        } else {
            Err(TagprepError::InvalidSplit {
                train_size: self.train_size,
                dev_size: self.dev_size,
            })
        }
    }

    /// Partition sizes `(train, dev, test)` for `n` documents.
    ///
    /// Train and dev are truncated, not rounded; test takes the remainder.
    pub fn sizes(
        &self,
        n: usize,
    ) -> TPResult<(usize, usize, usize)> {
        self.validate()?;
        let train = ((self.train_size * n as f64) as usize).min(n);
        let dev = ((self.dev_size * n as f64) as usize).min(n - train);
        Ok((train, dev, n - train - dev))
    }

    /// A generator for this configuration; seeded when [`Self::seed`] is set.
    pub fn rng(&self) -> StdRng {
        match self.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_os_rng(),
        }
    }
}

/// Shuffle `corpus` and cut it into train/dev/test.
///
/// # Arguments
/// * `corpus` - the documents to partition (consumed).
/// * `options` - the partition fractions; [`SplitOptions::seed`] is ignored
///   here, the caller's `rng` is used as given.
/// * `rng` - the shuffle source.
pub fn split_corpus<R: Rng + ?Sized>(
    corpus: Corpus,
    options: &SplitOptions,
    rng: &mut R,
) -> TPResult<CorpusSplits> {
    let n = corpus.len();
    let (train_len, dev_len, _) = options.sizes(n)?;

    let mut order: Vec<usize> = (0..n).collect();
    order.shuffle(rng);

    let mut slots: Vec<Option<Document>> = corpus.into_documents().into_iter().map(Some).collect();
    let mut shuffled = order.into_iter().filter_map(|idx| slots[idx].take());

    let train: Vec<Document> = shuffled.by_ref().take(train_len).collect();
    let dev: Vec<Document> = shuffled.by_ref().take(dev_len).collect();
    let test: Vec<Document> = shuffled.collect();

    let splits = CorpusSplits {
        train: Split {
            kind: SplitKind::Train,
            documents: train,
        },
        dev: Split {
            kind: SplitKind::Dev,
            documents: dev,
        },
        test: Split {
            kind: SplitKind::Test,
            documents: test,
        },
    };
    for split in splits.iter() {
        log::info!("{} set size: {}", split.kind, split.len());
    }

    Ok(splits)
}
