//! # Dataset Input
//!
//! The end-to-end loader: acquire → parse → split → store.
//!
//! ```rust,no_run
//! use tagprep::{
//!     dataset::{DataInput, DataInputOptions},
//!     disk_cache::TagprepDiskCache,
//!     pretrained::PTB_DEPENDENCY_TREEBANK,
//! };
//!
//! fn example() -> anyhow::Result<()> {
//!     let mut disk_cache = TagprepDiskCache::new(Default::default())?;
//!     let options = DataInputOptions::default()
//!         .with_split_sentences(true)
//!         .with_seed(Some(1337));
//!
//!     let input = DataInput::acquire(PTB_DEPENDENCY_TREEBANK.url, &options, &mut disk_cache)?;
//!     println!("train: {}", input.train().len());
//!     Ok(())
//! }
//! ```

mod data_input;
mod data_input_options;

#[doc(inline)]
pub use data_input::{DataInput, list_dataset_files};
#[doc(inline)]
pub use data_input_options::{DataInputOptions, SPLIT_DIR_NAME};
