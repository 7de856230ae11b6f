//! # Data Input

use std::{
    fs,
    path::{Path, PathBuf},
};

use crate::{
    corpus::{CorpusSplits, Split, parse_dataset, split_corpus, write_corpus_splits},
    dataset::{DataInputOptions, SPLIT_DIR_NAME},
    errors::{TPResult, TagprepError},
};

fn has_extension(
    path: &Path,
    extension: &str,
) -> bool {
    path.extension().is_some_and(|ext| ext == extension)
}

fn contains_extension(
    dir: &Path,
    extension: &str,
) -> TPResult<bool> {
    for entry in fs::read_dir(dir)? {
        let path = entry?.path();
        if path.is_dir() {
            if contains_extension(&path, extension)? {
                return Ok(true);
            }
        } else if has_extension(&path, extension) {
            return Ok(true);
        }
    }
    Ok(false)
}

fn dataset_root(
    folder: &Path,
    extension: &str,
) -> TPResult<PathBuf> {
    let mut subdirs: Vec<PathBuf> = fs::read_dir(folder)?
        .map(|entry| entry.map(|e| e.path()))
        .collect::<Result<_, _>>()?;
    subdirs.retain(|p| p.is_dir() && !p.ends_with(SPLIT_DIR_NAME));
    subdirs.sort();

    for dir in subdirs {
        if contains_extension(&dir, extension)? {
            return Ok(dir);
        }
    }
    Ok(folder.to_path_buf())
}

/// List the annotated files of an extracted dataset.
///
/// The dataset root is the first sub-directory of `folder` (in name order,
/// skipping the split store) which holds `extension` files at any depth,
/// or `folder` itself. The files directly inside the root with
/// `extension` are returned, sorted.
///
/// # Errors
/// [`TagprepError::InvalidConfig`] when no such file exists.
pub fn list_dataset_files(
    folder: &Path,
    extension: &str,
) -> TPResult<Vec<PathBuf>> {
    let root = dataset_root(folder, extension)?;
    list_files_in(&root, extension)
}

/// The `extension` files directly inside `root`, sorted; at least one.
fn list_files_in(
    root: &Path,
    extension: &str,
) -> TPResult<Vec<PathBuf>> {
    let mut files = Vec::new();
    if root.is_dir() {
        for entry in fs::read_dir(root)? {
            let path = entry?.path();
            if path.is_file() && has_extension(&path, extension) {
                files.push(path);
            }
        }
    }
    files.sort();

    if files.is_empty() {
        return Err(TagprepError::InvalidConfig(format!(
            "no .{extension} files under {}",
            root.display()
        )));
    }
    log::debug!("found {} .{extension} files in {}", files.len(), root.display());
    Ok(files)
}

/// A parsed, shuffled and partitioned dataset.
///
/// Built by one of:
/// * [`DataInput::from_paths`] - explicit annotated files.
/// * [`DataInput::from_folder`] - an already extracted dataset folder.
/// * [`DataInput::acquire`] - download and extract first (`download` feature).
#[derive(Debug, Clone)]
pub struct DataInput {
    splits: CorpusSplits,
    store_path: Option<PathBuf>,
}

impl DataInput {
    /// Parse, split and (optionally) store the given annotated files.
    pub fn from_paths<P: AsRef<Path>>(
        paths: &[P],
        options: &DataInputOptions,
    ) -> TPResult<Self> {
        let split_options = options.split_options();
        split_options.validate()?;

        let corpus = parse_dataset(paths, options.parse_mode())?;
        let splits = split_corpus(corpus, &split_options, &mut split_options.rng())?;

        let store_path = if options.store_splits {
            let path = options.split_store_path();
            write_corpus_splits(&path, &splits)?;
            Some(path)
        } else {
            None
        };

        Ok(Self { splits, store_path })
    }

    /// Load the dataset already extracted under `options.dataset_folder`.
    ///
    /// See [`list_dataset_files`].
    pub fn from_folder(options: &DataInputOptions) -> TPResult<Self> {
        let files = list_dataset_files(&options.dataset_folder, &options.file_extension)?;
        Self::from_paths(&files, options)
    }

    /// Download and extract the dataset at `url` (unless already present),
    /// then load it.
    ///
    /// The archive is extracted into `options.dataset_folder`, which is also
    /// the presence check: any `options.file_extension` file below it means
    /// nothing is fetched. The files are read from the extracted root the
    /// disk cache reports.
    #[cfg(feature = "download")]
    pub fn acquire(
        url: &str,
        options: &DataInputOptions,
        disk_cache: &mut tagprep_disk_cache::TagprepDiskCache,
    ) -> TPResult<Self> {
        let root = disk_cache
            .ensure_available(
                url,
                &options.dataset_folder,
                &options.file_extension,
                &tagprep_disk_cache::ExtractOptions::default(),
            )
            .map_err(|e| TagprepError::External(format!("{e:#}")))?;
        log::info!("dataset available at {}", root.display());

        let files = list_files_in(&root, &options.file_extension)?;
        Self::from_paths(&files, options)
    }

    /// The training partition.
    pub fn train(&self) -> &Split {
        &self.splits.train
    }

    /// The development partition.
    pub fn dev(&self) -> &Split {
        &self.splits.dev
    }

    /// The test partition.
    pub fn test(&self) -> &Split {
        &self.splits.test
    }

    /// All three partitions.
    pub fn splits(&self) -> &CorpusSplits {
        &self.splits
    }

    /// Where the splits were stored, if they were.
    pub fn store_path(&self) -> Option<&Path> {
        self.store_path.as_deref()
    }

    /// Unwrap the partitions.
    pub fn into_splits(self) -> CorpusSplits {
        self.splits
    }
}
