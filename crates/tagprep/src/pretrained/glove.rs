//! # GloVe Loader

use tagprep_disk_cache::{ExtractOptions, TagprepDiskCache};

use crate::{
    embedding::{EmbeddingTableOptions, EmbeddingVocab, load_embedding_table_path},
    errors::{TPResult, TagprepError},
    pretrained::{GLOVE_6B, GLOVE_6B_DIMS, glove_6b_file_name},
};

/// Data-dir folder the [`GLOVE_6B`] archive is unpacked into.
const GLOVE_6B_FOLDER: &str = "glove.6B";

/// Load the [`GLOVE_6B`] table of width `dim`.
///
/// The archive is downloaded and extracted into the disk cache's data dir
/// on first use; the archive itself is removed after extraction.
///
/// # Arguments
/// * `dim` - one of [`GLOVE_6B_DIMS`].
/// * `max_entries` - read only the leading (most frequent) rows.
///
/// # Errors
/// * [`TagprepError::InvalidConfig`] for an unsupported `dim`.
/// * [`TagprepError::External`] if fetching or extraction fails.
pub fn load_glove_6b_vocab(
    disk_cache: &mut TagprepDiskCache,
    dim: usize,
    max_entries: Option<usize>,
) -> TPResult<EmbeddingVocab> {
    if !GLOVE_6B_DIMS.contains(&dim) {
        return Err(TagprepError::InvalidConfig(format!(
            "unsupported GloVe 6B dim {dim}; expected one of {GLOVE_6B_DIMS:?}"
        )));
    }

    let folder = disk_cache.data_dir().join(GLOVE_6B_FOLDER);
    let root = disk_cache
        .ensure_available(
            GLOVE_6B.url,
            &folder,
            GLOVE_6B.file_extension,
            &ExtractOptions::default().with_remove_archive(true),
        )
        .map_err(|e| TagprepError::External(format!("{e:#}")))?;

    let path = root.join(glove_6b_file_name(dim));
    log::info!("loading {}", path.display());
    load_embedding_table_path(
        &path,
        &EmbeddingTableOptions::new(dim).with_max_entries(max_entries),
    )
}
