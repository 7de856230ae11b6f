//! # Split Files
//!
//! Layout:
//! ```terminaloutput
//! {STORE}/{train,dev,test}/X_{split}.txt
//! {STORE}/{train,dev,test}/y_{split}.txt
//! ```
//!
//! One document per line; fields are joined with a TAB. Tokens and tags come
//! out of tab-separated records, so neither can hold a TAB or a newline, and
//! the files re-parse unambiguously.

use std::{
    fs::{self, File},
    io::{BufRead, BufReader, BufWriter, Write},
    path::{Path, PathBuf},
};

use crate::{
    corpus::{CorpusSplits, Document, Split, SplitKind},
    errors::{TPResult, TagprepError},
};

/// The field separator within a line.
pub const FIELD_SEPARATOR: char = '\t';

/// Paths `(X, y)` of the files for `kind` under `store_path`.
pub fn split_file_paths(
    store_path: &Path,
    kind: SplitKind,
) -> (PathBuf, PathBuf) {
    let dir = store_path.join(kind.to_string());
    (
        dir.join(format!("X_{kind}.txt")),
        dir.join(format!("y_{kind}.txt")),
    )
}

/// Write one line per sequence.
pub fn write_sequences<W, S>(
    sequences: &[S],
    writer: &mut W,
) -> TPResult<()>
where
    W: Write,
    S: AsRef<[String]>,
{
    for seq in sequences {
        let mut first = true;
        for field in seq.as_ref() {
            if !first {
                write!(writer, "{FIELD_SEPARATOR}")?;
            }
            first = false;
            writer.write_all(field.as_bytes())?;
        }
        writeln!(writer)?;
    }
    Ok(())
}

/// Read one sequence per line.
///
/// An empty line is an empty sequence.
pub fn read_sequences<R: BufRead>(reader: R) -> TPResult<Vec<Vec<String>>> {
    let mut sequences = Vec::new();
    for line in reader.lines() {
        let line = line?;
        if line.is_empty() {
            sequences.push(Vec::new());
        } else {
            sequences.push(line.split(FIELD_SEPARATOR).map(str::to_string).collect());
        }
    }
    Ok(sequences)
}

fn write_sequences_path<S: AsRef<[String]>>(
    sequences: &[S],
    path: &Path,
) -> TPResult<()> {
    let mut writer = BufWriter::new(File::create(path)?);
    write_sequences(sequences, &mut writer)?;
    writer.flush()?;
    Ok(())
}

/// Write one split's `X` and `y` files, creating the split directory.
pub fn write_split_files(
    store_path: &Path,
    split: &Split,
) -> TPResult<()> {
    let (x_path, y_path) = split_file_paths(store_path, split.kind);
    if let Some(dir) = x_path.parent() {
        fs::create_dir_all(dir)?;
    }
    write_sequences_path(&split.x(), &x_path)?;
    write_sequences_path(&split.y(), &y_path)?;
    log::debug!("wrote {} documents to {}", split.len(), x_path.display());
    Ok(())
}

/// Write all three splits under `store_path`.
pub fn write_corpus_splits(
    store_path: &Path,
    splits: &CorpusSplits,
) -> TPResult<()> {
    for split in splits.iter() {
        write_split_files(store_path, split)?;
    }
    log::info!("stored splits under {}", store_path.display());
    Ok(())
}

/// Read one split back from `store_path`.
///
/// # Errors
/// [`TagprepError::Misaligned`] if the two files disagree on the number of
/// lines or on the length of any line.
pub fn read_split_files(
    store_path: &Path,
    kind: SplitKind,
) -> TPResult<Split> {
    let (x_path, y_path) = split_file_paths(store_path, kind);
    let x = read_sequences(BufReader::new(File::open(&x_path)?))?;
    let y = read_sequences(BufReader::new(File::open(&y_path)?))?;

    if x.len() != y.len() {
        return Err(TagprepError::Misaligned {
            tokens: x.len(),
            tags: y.len(),
        });
    }
    let documents = x
        .into_iter()
        .zip(y)
        .map(|(tokens, tags)| Document::new(tokens, tags))
        .collect::<TPResult<Vec<_>>>()?;

    Ok(Split { kind, documents })
}

/// Read all three splits back from `store_path`.
pub fn read_corpus_splits(store_path: &Path) -> TPResult<CorpusSplits> {
    Ok(CorpusSplits {
        train: read_split_files(store_path, SplitKind::Train)?,
        dev: read_split_files(store_path, SplitKind::Dev)?,
        test: read_split_files(store_path, SplitKind::Test)?,
    })
}
