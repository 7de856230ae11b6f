use std::path::PathBuf;

use tagprep::{
    dataset::{DataInput, DataInputOptions},
    disk_cache::TagprepDiskCache,
    pretrained::PTB_DEPENDENCY_TREEBANK,
};

/// Dataset preparation argument group.
#[derive(clap::Args, Debug)]
pub struct DataArgs {
    /// Dataset archive URL.
    #[arg(long, default_value_t = PTB_DEPENDENCY_TREEBANK.url.to_string())]
    url: String,

    /// Only read the already extracted dataset in `--folder`; never download.
    #[arg(long)]
    local: bool,

    /// Dataset folder; the archive is extracted and the splits stored here.
    #[arg(long, default_value = "data")]
    folder: PathBuf,

    /// Extension of the annotated files.
    #[arg(long, default_value = PTB_DEPENDENCY_TREEBANK.file_extension)]
    extension: String,

    /// Fraction of documents for training.
    #[arg(long, default_value_t = 0.8)]
    train_size: f64,

    /// Fraction of documents for development; test gets the rest.
    #[arg(long, default_value_t = 0.1)]
    dev_size: f64,

    /// Make every sentence a document.
    #[arg(long)]
    sentences: bool,

    /// Shuffle seed; random when unset.
    #[arg(long)]
    pub seed: Option<u64>,

    /// Do not write the splits to `{folder}/split`.
    #[arg(long)]
    no_store: bool,
}

impl DataArgs {
    /// The facade options for these args.
    pub fn options(&self) -> DataInputOptions {
        DataInputOptions::default()
            .with_dataset_folder(&self.folder)
            .with_file_extension(self.extension.clone())
            .with_sizes(self.train_size, self.dev_size)
            .with_split_sentences(self.sentences)
            .with_seed(self.seed)
            .with_store_splits(!self.no_store)
    }

    /// Acquire (unless `--local`), parse, split and store the dataset.
    pub fn load(
        &self,
        disk_cache: &mut TagprepDiskCache,
    ) -> Result<DataInput, Box<dyn std::error::Error>> {
        let options = self.options();
        let input = if self.local {
            DataInput::from_folder(&options)?
        } else {
            DataInput::acquire(&self.url, &options, disk_cache)?
        };

        for split in input.splits().iter() {
            log::info!("{} set size: {}", split.kind, split.len());
        }
        if let Some(path) = input.store_path() {
            log::info!("splits stored under {}", path.display());
        }
        Ok(input)
    }
}
