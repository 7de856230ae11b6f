//! # Tagprep Disk Cache

use std::{
    fs,
    path::{Path, PathBuf},
};

use anyhow::Context;
use downloader::{Download, Downloader};

use crate::{
    TAGPREP_CACHE_CONFIG,
    archive::{ExtractOptions, extract_zip_archive},
    path_utils,
};

/// Sub-directory of the cache dir that downloaded archives land in.
pub const ARCHIVE_CONTEXT: &str = "archives";

/// Options for [`TagprepDiskCache`].
#[derive(Clone, Default, Debug)]
pub struct TagprepDiskCacheOptions {
    /// Optional path to the cache directory.
    pub cache_dir: Option<PathBuf>,

    /// Optional path to the data directory.
    pub data_dir: Option<PathBuf>,

    /// Optional [`Downloader`] builder.
    pub downloader: Option<fn() -> Downloader>,
}

impl TagprepDiskCacheOptions {
    /// Set the cache directory.
    pub fn with_cache_dir<P: AsRef<Path>>(
        mut self,
        cache_dir: Option<P>,
    ) -> Self {
        self.cache_dir = cache_dir.map(|p| p.as_ref().to_path_buf());
        self
    }

    /// Set the data directory.
    pub fn with_data_dir<P: AsRef<Path>>(
        mut self,
        data_dir: Option<P>,
    ) -> Self {
        self.data_dir = data_dir.map(|p| p.as_ref().to_path_buf());
        self
    }

    /// Set the downloader builder.
    pub fn with_downloader(
        mut self,
        downloader: Option<fn() -> Downloader>,
    ) -> Self {
        self.downloader = downloader;
        self
    }
}

/// Disk cache for downloaded datasets and embedding tables.
///
/// Leverages [`Downloader`] for downloading files,
/// and [`PathResolver`](`crate::path_resolver::PathResolver`) for resolving
/// cache and data paths appropriate for a user/system combo, and any
/// environment overrides.
pub struct TagprepDiskCache {
    /// Cache directory.
    cache_dir: PathBuf,

    /// Data directory.
    data_dir: PathBuf,

    /// Connection pool for downloading files.
    downloader: Downloader,
}

impl TagprepDiskCache {
    /// Construct a new [`TagprepDiskCache`].
    pub fn new(options: TagprepDiskCacheOptions) -> anyhow::Result<Self> {
        let cache_dir = TAGPREP_CACHE_CONFIG
            .resolve_cache_dir(options.cache_dir)
            .context("failed to resolve cache directory")?;

        let data_dir = TAGPREP_CACHE_CONFIG
            .resolve_data_dir(options.data_dir)
            .context("failed to resolve data directory")?;

        let downloader = match options.downloader {
            Some(builder) => builder(),
            None => Downloader::builder().build()?,
        };

        Ok(Self {
            cache_dir,
            data_dir,
            downloader,
        })
    }

    /// Get the cache directory.
    pub fn cache_dir(&self) -> &Path {
        &self.cache_dir
    }

    /// Get the data directory.
    pub fn data_dir(&self) -> &Path {
        &self.data_dir
    }

    /// Get the cache path for the given key.
    ///
    /// * Does not check that the path exists.
    /// * Does not initialize the containing directories.
    pub fn cache_path<C, F>(
        &self,
        context: &[C],
        file: F,
    ) -> PathBuf
    where
        C: AsRef<Path>,
        F: AsRef<Path>,
    {
        path_utils::extend_path(&self.cache_dir, context, file)
    }

    /// Download `url` to `path`, unless `path` already exists.
    fn fetch_to(
        &mut self,
        url: &str,
        path: &Path,
    ) -> anyhow::Result<()> {
        if path.exists() {
            log::debug!("{} already cached", path.display());
            return Ok(());
        }
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }

        log::info!("downloading {url}");
        for summary in self
            .downloader
            .download(&[Download::new(url).file_name(path)])?
        {
            summary.with_context(|| format!("failed to download {url}"))?;
        }
        log::info!("downloaded {}", path.display());
        Ok(())
    }

    /// Make sure the archive at `url` is unpacked under `folder`.
    ///
    /// Nothing is fetched when `folder` already holds (recursively) any file
    /// with `marker_extension`. Otherwise the archive is downloaded to
    /// `{cache_dir}/archives/{file}` (unless a previous download is still
    /// there) and extracted into `folder`. With
    /// [`ExtractOptions::remove_archive`] the cached archive is deleted
    /// after extraction.
    ///
    /// # Returns
    /// The extracted root: the first sub-directory of `folder` which holds
    /// `marker_extension` files, or `folder` itself when the archive unpacks
    /// flat.
    pub fn ensure_available(
        &mut self,
        url: &str,
        folder: &Path,
        marker_extension: &str,
        options: &ExtractOptions,
    ) -> anyhow::Result<PathBuf> {
        fs::create_dir_all(folder)
            .with_context(|| format!("failed to create {}", folder.display()))?;

        if path_utils::contains_file_with_extension(folder, marker_extension)? {
            log::debug!("{} already extracted", folder.display());
        } else {
            let file_name = path_utils::url_file_name(url)
                .with_context(|| format!("no file name in url: {url}"))?;
            let archive_path = self.cache_path(&[ARCHIVE_CONTEXT], file_name);

            self.fetch_to(url, &archive_path)?;
            extract_zip_archive(&archive_path, folder, options)?;

            if !path_utils::contains_file_with_extension(folder, marker_extension)? {
                anyhow::bail!(
                    "archive {} holds no .{} files",
                    archive_path.display(),
                    marker_extension
                );
            }
        }

        extracted_root(folder, marker_extension)
    }
}

/// The first sub-directory of `folder` holding `marker_extension` files, else `folder`.
pub fn extracted_root(
    folder: &Path,
    marker_extension: &str,
) -> anyhow::Result<PathBuf> {
    for dir in path_utils::sorted_subdirs(folder)? {
        if path_utils::contains_file_with_extension(&dir, marker_extension)? {
            return Ok(dir);
        }
    }
    Ok(folder.to_path_buf())
}
