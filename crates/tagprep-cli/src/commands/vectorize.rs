use std::path::PathBuf;

use tagprep::{
    embedding::{
        EmbeddingTableOptions,
        EmbeddingVocab,
        load_embedding_table_path,
        save_embedding_table_path,
    },
    pretrained::load_glove_6b_vocab,
    types::BatchTensor,
    vectorize::{TagVectorizer, TextVectorizer, UnknownTagPolicy},
};

use crate::{data_args::DataArgs, disk_cache::DiskCacheArgs, logging::LogArgs};

/// Args for the vectorize command.
#[derive(clap::Args, Debug)]
pub struct VectorizeArgs {
    #[clap(flatten)]
    data: DataArgs,

    /// Embedding table to load; GloVe 6B from the disk cache when unset.
    #[arg(long)]
    embeddings: Option<PathBuf>,

    /// Embedding width.
    #[arg(long, default_value_t = 50)]
    dim: usize,

    /// Read at most this many pretrained rows.
    #[arg(long)]
    max_entries: Option<usize>,

    /// Fit the tag classes on every split rather than only on train.
    #[arg(long)]
    tags_from_all_splits: bool,

    /// How dev/test tags unseen in the fitted classes are encoded:
    /// `zero-row` or `error`.
    #[arg(long, default_value_t = UnknownTagPolicy::ZeroRow)]
    unknown_tags: UnknownTagPolicy,

    /// Write the adapted vocabulary (pretrained + OOV rows) here.
    #[arg(long)]
    save_vocab: Option<PathBuf>,

    #[clap(flatten)]
    disk_cache: DiskCacheArgs,

    #[clap(flatten)]
    logging: LogArgs,
}

fn shape(batch: &BatchTensor) -> String {
    let tokens: usize = batch.iter().map(Vec::len).sum();
    let width = batch
        .iter()
        .flat_map(|doc| doc.first())
        .map(Vec::len)
        .next()
        .unwrap_or(0);
    format!("({}, ~{}, {})", batch.len(), tokens / batch.len().max(1), width)
}

impl VectorizeArgs {
    pub fn run(&self) -> Result<(), Box<dyn std::error::Error>> {
        self.logging.setup_logging(3)?;

        let mut disk_cache = self.disk_cache.init_disk_cache()?;
        let splits = self.data.load(&mut disk_cache)?.into_splits();

        let vocab: EmbeddingVocab = match &self.embeddings {
            Some(path) => load_embedding_table_path(
                path,
                &EmbeddingTableOptions::new(self.dim).with_max_entries(self.max_entries),
            )?,
            None => load_glove_6b_vocab(&mut disk_cache, self.dim, self.max_entries)?,
        };
        let pretrained = vocab.len();

        let mut text = TextVectorizer::seeded(vocab, self.data.seed);
        for split in splits.iter() {
            let added = text.adapt(&split.x());
            log::info!("{}: {added} OOV words", split.kind);
        }

        let mut tags = TagVectorizer::new().with_unknown_tag_policy(self.unknown_tags);
        if self.tags_from_all_splits {
            let all: Vec<&[String]> = splits.iter().flat_map(|s| s.y()).collect();
            tags.adapt(&all);
        } else {
            tags.adapt(&splits.train.y());
        }

        println!(
            "vocabulary: {} words ({pretrained} pretrained), dim {}",
            text.vocabulary().len(),
            text.embedding_dim()
        );
        println!("classes ({}): {}", tags.num_classes(), tags.classes().join(" "));

        for split in splits.iter() {
            let x = text.transform(&split.x())?;
            let y = tags.transform(&split.y())?;
            println!("{}\tX {}\ty {}", split.kind, shape(&x), shape(&y));
        }

        if let Some(path) = &self.save_vocab {
            save_embedding_table_path(text.vocabulary(), path)?;
            log::info!("saved vocabulary to {}", path.display());
        }
        Ok(())
    }
}
