//! # tagprep-disk-cache
//!
//! Acquisition of remote datasets and embedding tables:
//! * [`PathResolver`] resolves the cache and data directories.
//! * [`TagprepDiskCache`] downloads files into the cache, and fetches
//!   and unpacks archives with [`TagprepDiskCache::ensure_available`].
#![warn(missing_docs)]

use crate::path_resolver::PathResolver;

pub mod archive;
pub mod disk_cache;
pub mod path_resolver;
pub mod path_utils;

pub use archive::{ExtractOptions, extract_zip_archive};
pub use disk_cache::{TagprepDiskCache, TagprepDiskCacheOptions};

/// Environment variable key to override the default cache directory.
pub const TAGPREP_CACHE_DIR: &str = "TAGPREP_CACHE_DIR";
/// Environment variable key to override the default data directory.
pub const TAGPREP_DATA_DIR: &str = "TAGPREP_DATA_DIR";

/// Default [`PathResolver`] for tagprep.
pub const TAGPREP_CACHE_CONFIG: PathResolver = PathResolver {
    qualifier: "io.crates.tagprep",
    organization: "",
    application: "tagprep",
    cache_env_vars: &[TAGPREP_CACHE_DIR],
    data_env_vars: &[TAGPREP_DATA_DIR],
};
