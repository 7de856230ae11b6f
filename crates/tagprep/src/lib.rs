//! # `tagprep` POS-Tagged Corpus Preparation
//!
//! Turns a part-of-speech annotated corpus into tensors for a sequence
//! tagger: acquire the dataset and pretrained word embeddings, parse aligned
//! token/tag sequences, cut train/dev/test splits, and vectorize tokens
//! (embedding lookup with random OOV vectors) and tags (one-hot).
//!
//! See:
//! * [`corpus`] to parse annotated files and split them.
//! * [`embedding`] to load and extend word embedding tables.
//! * [`vectorize`] to turn token and tag sequences into vectors.
//! * [`dataset`] for the acquire → parse → split → store facade.
//! * [`pretrained`] for the known remote datasets and embeddings.
//!
//! ## Crate Features
//!
//! #### feature: ``default``
//!
//! * ``ahash``
//! * ``download``
//!
//! #### feature: ``download``
//!
//! * ``tagprep-disk-cache``
//!
//! The download feature enables fetching and unpacking datasets and
//! embedding tables from the internet; it is re-exported as [`disk_cache`].
//! Without it, nothing in this crate touches the network.
//!
//! #### feature: ``ahash``
//!
//! This swaps all HashMap/HashSet implementations for ``ahash``.
//!
//! This is done by the ``types::TPHash{*}`` type alias machinery.
//!
//! ## Preparing The Treebank
//!
//! ```rust,no_run
//! use tagprep::{
//!     dataset::{DataInput, DataInputOptions},
//!     disk_cache::TagprepDiskCache,
//!     pretrained::{PTB_DEPENDENCY_TREEBANK, load_glove_6b_vocab},
//!     vectorize::{TagVectorizer, TextVectorizer},
//! };
//!
//! fn example() -> anyhow::Result<()> {
//!     let mut disk_cache = TagprepDiskCache::new(Default::default())?;
//!
//!     let options = DataInputOptions::default().with_seed(Some(7));
//!     let input = DataInput::acquire(PTB_DEPENDENCY_TREEBANK.url, &options, &mut disk_cache)?;
//!
//!     let vocab = load_glove_6b_vocab(&mut disk_cache, 50, None)?;
//!     let mut text = TextVectorizer::seeded(vocab, Some(7));
//!     let mut tags = TagVectorizer::new();
//!
//!     text.adapt(&input.train().x());
//!     tags.adapt(&input.train().y());
//!
//!     let x_train = text.transform(&input.train().x())?;
//!     let y_train = tags.transform(&input.train().y())?;
//!     assert_eq!(x_train.len(), y_train.len());
//!     Ok(())
//! }
//! ```
#![warn(missing_docs, unused)]

#[cfg(feature = "download")]
#[doc(inline)]
pub use tagprep_disk_cache as disk_cache;

pub mod corpus;
pub mod dataset;
pub mod embedding;
pub mod errors;
pub mod pretrained;
pub mod types;
pub mod vectorize;

#[doc(inline)]
pub use errors::{TPResult, TagprepError};
