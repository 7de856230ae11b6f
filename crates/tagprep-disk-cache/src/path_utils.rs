//! # Path Utilities

use std::{
    fs,
    io,
    path::{Path, PathBuf},
};

/// Extend a path with a context and filename.
///
/// * Does not check that the path exists.
/// * Does not initialize the containing directories.
///
/// # Arguments
/// * `context` - prefix dirs, inserted between `path` and `filename`.
/// * `filename` - the final file name.
pub fn extend_path<P, S, F>(
    path: P,
    context: &[S],
    filename: F,
) -> PathBuf
where
    P: AsRef<Path>,
    S: AsRef<Path>,
    F: AsRef<Path>,
{
    let mut path = path.as_ref().to_path_buf();
    path.extend(context.iter().map(|s| s.as_ref()));
    path.push(filename.as_ref());
    path
}

/// The last non-empty path segment of a URL, without query or fragment.
///
/// `"http://host/data/glove.6B.zip?x=1"` is `Some("glove.6B.zip")`.
pub fn url_file_name(url: &str) -> Option<&str> {
    let end = url.find(['?', '#']).unwrap_or(url.len());
    url[..end].rsplit('/').find(|s| !s.is_empty() && !s.contains(':'))
}

/// Does `path` carry the extension `ext` (without the leading dot)?
pub fn has_extension(
    path: &Path,
    ext: &str,
) -> bool {
    path.extension().is_some_and(|e| e == ext)
}

/// Recursively search `dir` for any regular file with extension `ext`.
///
/// A missing `dir` is not an error; it simply contains nothing.
pub fn contains_file_with_extension(
    dir: &Path,
    ext: &str,
) -> io::Result<bool> {
    if !dir.is_dir() {
        return Ok(false);
    }
    for entry in fs::read_dir(dir)? {
        let entry = entry?;
        let path = entry.path();
        let file_type = entry.file_type()?;
        if file_type.is_dir() {
            if contains_file_with_extension(&path, ext)? {
                return Ok(true);
            }
        } else if file_type.is_file() && has_extension(&path, ext) {
            return Ok(true);
        }
    }
    Ok(false)
}

/// The direct sub-directories of `dir`, sorted by name.
pub fn sorted_subdirs(dir: &Path) -> io::Result<Vec<PathBuf>> {
    let mut dirs = Vec::new();
    for entry in fs::read_dir(dir)? {
        let entry = entry?;
        if entry.file_type()?.is_dir() {
            dirs.push(entry.path());
        }
    }
    dirs.sort();
    Ok(dirs)
}

#[cfg(test)]
mod tests {
    use std::fs::File;

    use tempdir::TempDir;

    use super::*;

    #[test]
    fn test_extend_path() {
        let path = extend_path("/tmp/tagprep", &["cache", "glove"], "file.txt");
        assert_eq!(path, PathBuf::from("/tmp/tagprep/cache/glove/file.txt"));
    }

    #[test]
    fn test_url_file_name() {
        assert_eq!(
            url_file_name("http://nlp.stanford.edu/data/glove.6B.zip"),
            Some("glove.6B.zip")
        );
        assert_eq!(
            url_file_name("https://example.com/a/b.zip?raw=true#frag"),
            Some("b.zip")
        );
        assert_eq!(url_file_name("https://example.com/dir/"), Some("dir"));
        assert_eq!(url_file_name("https://"), None);
    }

    #[test]
    fn test_contains_file_with_extension() -> io::Result<()> {
        let tmp = TempDir::new("tagprep-path-utils")?;
        let root = tmp.path();

        assert!(!contains_file_with_extension(&root.join("missing"), "dp")?);
        assert!(!contains_file_with_extension(root, "dp")?);

        fs::create_dir_all(root.join("treebank/nested"))?;
        File::create(root.join("treebank/readme.txt"))?;
        assert!(!contains_file_with_extension(root, "dp")?);

        File::create(root.join("treebank/nested/wsj_0001.dp"))?;
        assert!(contains_file_with_extension(root, "dp")?);

        fs::create_dir_all(root.join("a_first"))?;
        assert_eq!(
            sorted_subdirs(root)?,
            vec![root.join("a_first"), root.join("treebank")]
        );

        Ok(())
    }
}
