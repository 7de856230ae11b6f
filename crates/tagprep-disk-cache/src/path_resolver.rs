//! # Cache Path Resolver
//!
//! Static defaults for where downloaded archives and extracted data live.

use std::{
    env,
    path::{Path, PathBuf},
};

use directories_next::ProjectDirs;

/// Static configuration for cache/data directory resolution.
pub struct PathResolver {
    /// The qualifier for [`ProjectDirs`].
    pub qualifier: &'static str,

    /// The organization for [`ProjectDirs`].
    pub organization: &'static str,

    /// The application for [`ProjectDirs`].
    pub application: &'static str,

    /// Cache directory environment variables, highest priority first.
    pub cache_env_vars: &'static [&'static str],

    /// Data directory environment variables, highest priority first.
    pub data_env_vars: &'static [&'static str],
}

/// Which of the two managed directories to resolve.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum DirKind {
    Cache,
    Data,
}

impl PathResolver {
    /// Get the [`ProjectDirs`] for this config.
    pub fn project_dirs(&self) -> Option<ProjectDirs> {
        ProjectDirs::from(self.qualifier, self.organization, self.application)
    }

    /// Resolve the cache directory; downloaded archives land here.
    ///
    /// Resolution Order:
    /// 1. `path`, if present.
    /// 2. ``env[$VAR]`` for each `self.cache_env_vars`; in order.
    /// 3. `self.project_dirs().cache_dir()`, if present.
    /// 4. `None`
    pub fn resolve_cache_dir<P: AsRef<Path>>(
        &self,
        path: Option<P>,
    ) -> Option<PathBuf> {
        self.resolve(DirKind::Cache, path)
    }

    /// Resolve the data directory; extracted datasets land here.
    ///
    /// Resolution Order:
    /// 1. `path`, if present.
    /// 2. ``env[$VAR]`` for each `self.data_env_vars`; in order.
    /// 3. `self.project_dirs().data_dir()`, if present.
    /// 4. `None`
    pub fn resolve_data_dir<P: AsRef<Path>>(
        &self,
        path: Option<P>,
    ) -> Option<PathBuf> {
        self.resolve(DirKind::Data, path)
    }

    fn resolve<P: AsRef<Path>>(
        &self,
        kind: DirKind,
        path: Option<P>,
    ) -> Option<PathBuf> {
        if let Some(path) = path {
            return Some(path.as_ref().to_path_buf());
        }

        let env_vars = match kind {
            DirKind::Cache => self.cache_env_vars,
            DirKind::Data => self.data_env_vars,
        };
        if let Some(path) = env_vars.iter().find_map(|var| env::var(var).ok()) {
            return Some(PathBuf::from(path));
        }

        self.project_dirs().map(|pds| match kind {
            DirKind::Cache => pds.cache_dir().to_path_buf(),
            DirKind::Data => pds.data_dir().to_path_buf(),
        })
    }
}
