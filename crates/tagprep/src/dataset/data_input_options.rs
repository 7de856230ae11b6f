//! # Data Input Options

use std::path::{Path, PathBuf};

use crate::corpus::{ParseMode, SplitOptions};

/// Name of the directory, under the dataset folder, the splits are stored in.
pub const SPLIT_DIR_NAME: &str = "split";

/// Options for [`DataInput`](`super::DataInput`).
#[derive(Debug, Clone, PartialEq)]
pub struct DataInputOptions {
    /// Where the dataset is downloaded and extracted.
    pub dataset_folder: PathBuf,

    /// Extension of the annotated files in the dataset.
    pub file_extension: String,

    /// Fraction of documents for training.
    pub train_size: f64,

    /// Fraction of documents for development.
    pub dev_size: f64,

    /// Make each sentence a document, rather than each file.
    pub split_sentences: bool,

    /// Shuffle seed; `None` draws one from the OS.
    pub seed: Option<u64>,

    /// Write the splits under `{dataset_folder}/split`.
    pub store_splits: bool,
}

impl Default for DataInputOptions {
    fn default() -> Self {
        let split = SplitOptions::default();
        Self {
            dataset_folder: PathBuf::from("data"),
            file_extension: "dp".to_string(),
            train_size: split.train_size,
            dev_size: split.dev_size,
            split_sentences: false,
            seed: None,
            store_splits: true,
        }
    }
}

impl DataInputOptions {
    /// Set the dataset folder.
    pub fn with_dataset_folder<P: AsRef<Path>>(
        mut self,
        dataset_folder: P,
    ) -> Self {
        self.dataset_folder = dataset_folder.as_ref().to_path_buf();
        self
    }

    /// Set the annotated file extension.
    pub fn with_file_extension<S: Into<String>>(
        mut self,
        file_extension: S,
    ) -> Self {
        self.file_extension = file_extension.into();
        self
    }

    /// Set the train and dev fractions.
    pub fn with_sizes(
        mut self,
        train_size: f64,
        dev_size: f64,
    ) -> Self {
        self.train_size = train_size;
        self.dev_size = dev_size;
        self
    }

    /// Set sentence splitting.
    pub fn with_split_sentences(
        mut self,
        split_sentences: bool,
    ) -> Self {
        self.split_sentences = split_sentences;
        self
    }

    /// Set the shuffle seed.
    pub fn with_seed(
        mut self,
        seed: Option<u64>,
    ) -> Self {
        self.seed = seed;
        self
    }

    /// Set whether splits are written to disk.
    pub fn with_store_splits(
        mut self,
        store_splits: bool,
    ) -> Self {
        self.store_splits = store_splits;
        self
    }

    /// The parser mode.
    pub fn parse_mode(&self) -> ParseMode {
        ParseMode::from_split_sentences(self.split_sentences)
    }

    /// The splitter options.
    pub fn split_options(&self) -> SplitOptions {
        SplitOptions::new(self.train_size, self.dev_size).with_seed(self.seed)
    }

    /// Where splits are stored: `{dataset_folder}/split`.
    pub fn split_store_path(&self) -> PathBuf {
        self.dataset_folder.join(SPLIT_DIR_NAME)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let options = DataInputOptions::default();
        assert_eq!(options.dataset_folder, PathBuf::from("data"));
        assert_eq!(options.file_extension, "dp");
        assert!(options.store_splits);
        assert_eq!(options.parse_mode(), ParseMode::WholeDocument);
        assert_eq!(options.split_options(), SplitOptions::default());
        assert_eq!(options.split_store_path(), PathBuf::from("data/split"));
    }

    #[test]
    fn test_builders() {
        let options = DataInputOptions::default()
            .with_dataset_folder("/tmp/ptb")
            .with_file_extension("conll")
            .with_sizes(0.6, 0.2)
            .with_split_sentences(true)
            .with_seed(Some(5))
            .with_store_splits(false);

        assert_eq!(options.parse_mode(), ParseMode::Sentences);
        assert_eq!(
            options.split_options(),
            SplitOptions::new(0.6, 0.2).with_seed(Some(5))
        );
        assert_eq!(options.split_store_path(), PathBuf::from("/tmp/ptb/split"));
        assert_eq!(options.file_extension, "conll");
        assert!(!options.store_splits);
    }
}
