//! # Corpus
//!
//! Annotated documents, from raw files to train/dev/test partitions:
//! * [`parser`] reads `token<TAB>tag<TAB>aux` files into a [`Corpus`].
//! * [`splitter`] shuffles and partitions a [`Corpus`] into [`CorpusSplits`].
//! * [`persist`] writes (and reads back) the split files.

pub mod document;
pub mod parser;
pub mod persist;
pub mod splitter;

#[doc(inline)]
pub use document::{Corpus, Document};
#[doc(inline)]
pub use parser::{ParseMode, parse_dataset, parse_document_path, parse_document_reader};
#[doc(inline)]
pub use persist::{read_corpus_splits, read_split_files, write_corpus_splits, write_split_files};
#[doc(inline)]
pub use splitter::{CorpusSplits, Split, SplitKind, SplitOptions, split_corpus};
