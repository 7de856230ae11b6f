//! # Archive Extraction

use std::{
    fs::{self, File},
    io::{self, BufReader},
    path::{Path, PathBuf},
};

use anyhow::Context;
use zip::ZipArchive;

/// Options for [`extract_zip_archive`].
#[derive(Clone, Debug, Default)]
pub struct ExtractOptions {
    /// Delete the archive once it has been fully extracted.
    pub remove_archive: bool,
}

impl ExtractOptions {
    /// Set whether the archive is removed after extraction.
    pub fn with_remove_archive(
        mut self,
        remove_archive: bool,
    ) -> Self {
        self.remove_archive = remove_archive;
        self
    }
}

/// Extract every entry of a zip archive under `dest`.
///
/// Entries whose names would escape `dest` (absolute paths, `..`)
/// fail the whole extraction.
///
/// # Returns
/// The paths of the extracted regular files, in archive order.
pub fn extract_zip_archive(
    archive_path: &Path,
    dest: &Path,
    options: &ExtractOptions,
) -> anyhow::Result<Vec<PathBuf>> {
    let file = File::open(archive_path)
        .with_context(|| format!("failed to open archive {}", archive_path.display()))?;
    let mut archive = ZipArchive::new(BufReader::new(file))
        .with_context(|| format!("failed to read archive {}", archive_path.display()))?;

    fs::create_dir_all(dest)?;

    let mut extracted = Vec::new();
    for idx in 0..archive.len() {
        let mut entry = archive.by_index(idx)?;
        let Some(relative) = entry.enclosed_name() else {
            anyhow::bail!(
                "archive {} has an unsafe entry path: {:?}",
                archive_path.display(),
                entry.name()
            );
        };
        let out_path = dest.join(relative);

        if entry.is_dir() {
            fs::create_dir_all(&out_path)?;
            continue;
        }

        if let Some(parent) = out_path.parent() {
            fs::create_dir_all(parent)?;
        }
        let mut out = File::create(&out_path)
            .with_context(|| format!("failed to create {}", out_path.display()))?;
        io::copy(&mut entry, &mut out)?;
        extracted.push(out_path);
    }

    log::info!(
        "extracted {} files from {} into {}",
        extracted.len(),
        archive_path.display(),
        dest.display()
    );

    if options.remove_archive {
        fs::remove_file(archive_path)?;
    }

    Ok(extracted)
}

#[cfg(test)]
pub(crate) mod tests {
    use std::io::Write;

    use tempdir::TempDir;
    use zip::{CompressionMethod, ZipWriter, write::SimpleFileOptions};

    use super::*;

    /// Write a stored (uncompressed) zip with the given `(name, contents)` entries.
    pub(crate) fn write_test_zip(
        path: &Path,
        entries: &[(&str, &str)],
    ) -> anyhow::Result<()> {
        let mut zip = ZipWriter::new(File::create(path)?);
        let options = SimpleFileOptions::default().compression_method(CompressionMethod::Stored);
        for (name, contents) in entries {
            zip.start_file(*name, options)?;
            zip.write_all(contents.as_bytes())?;
        }
        zip.finish()?;
        Ok(())
    }

    #[test]
    fn test_extract_zip_archive() -> anyhow::Result<()> {
        let tmp = TempDir::new("tagprep-archive")?;
        let archive = tmp.path().join("treebank.zip");
        write_test_zip(
            &archive,
            &[
                ("treebank/wsj_0001.dp", "a\tDT\t2\n"),
                ("treebank/wsj_0002.dp", "b\tNN\t0\n"),
            ],
        )?;

        let dest = tmp.path().join("data");
        let files = extract_zip_archive(&archive, &dest, &ExtractOptions::default())?;
        assert_eq!(
            files,
            vec![
                dest.join("treebank/wsj_0001.dp"),
                dest.join("treebank/wsj_0002.dp"),
            ]
        );
        assert_eq!(
            fs::read_to_string(dest.join("treebank/wsj_0002.dp"))?,
            "b\tNN\t0\n"
        );
        assert!(archive.exists());

        Ok(())
    }

    #[test]
    fn test_extract_removes_archive() -> anyhow::Result<()> {
        let tmp = TempDir::new("tagprep-archive")?;
        let archive = tmp.path().join("glove.zip");
        write_test_zip(&archive, &[("glove.6B.2d.txt", "cat 0.1 0.2\n")])?;

        let options = ExtractOptions::default().with_remove_archive(true);
        let files = extract_zip_archive(&archive, tmp.path(), &options)?;
        assert_eq!(files, vec![tmp.path().join("glove.6B.2d.txt")]);
        assert!(!archive.exists());

        Ok(())
    }

    #[test]
    fn test_rejects_escaping_entries() -> anyhow::Result<()> {
        let tmp = TempDir::new("tagprep-archive")?;
        let archive = tmp.path().join("evil.zip");
        write_test_zip(&archive, &[("../escape.txt", "nope")])?;

        let dest = tmp.path().join("data");
        assert!(extract_zip_archive(&archive, &dest, &ExtractOptions::default()).is_err());
        assert!(!tmp.path().join("escape.txt").exists());

        Ok(())
    }
}
