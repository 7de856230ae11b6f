//! # Annotated Corpus Parser
//!
//! Lines are:
//! ```terminaloutput
//! {TOKEN}\t{TAG}\t{AUX}
//! ```
//!
//! The auxiliary field (the dependency head, for the Penn treebank sample)
//! is checked for presence and otherwise ignored.

use std::{
    fs::File,
    io::{BufRead, BufReader},
    path::Path,
};

use crate::{
    corpus::{Corpus, Document},
    errors::{TPResult, TagprepError},
};

/// The number of tab-separated fields on each record line.
pub const RECORD_FIELDS: usize = 3;

/// How a source file is cut into [`Document`]s.
#[derive(
    Default,
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    strum_macros::EnumString,
    strum_macros::EnumIter,
    strum_macros::Display,
)]
#[strum(serialize_all = "kebab-case")]
pub enum ParseMode {
    /// One document per file; blank lines are skipped.
    #[default]
    WholeDocument,

    /// A new document starts after each blank line.
    Sentences,
}

impl ParseMode {
    /// Map a "split into sentences" flag to a mode.
    pub fn from_split_sentences(split_sentences: bool) -> Self {
        if split_sentences {
            Self::Sentences
        } else {
            Self::WholeDocument
        }
    }
}

/// Parse one record line into `(token, tag)`.
fn parse_record<'a>(
    source_name: &str,
    line_no: usize,
    line: &'a str,
) -> TPResult<(&'a str, &'a str)> {
    let fields: Vec<&str> = line.split('\t').collect();
    if fields.len() != RECORD_FIELDS {
        return Err(TagprepError::Parse {
            source_name: source_name.to_string(),
            line: line_no,
            message: format!(
                "expected {RECORD_FIELDS} tab-separated fields, found {}: {line:?}",
                fields.len()
            ),
        });
    }
    if fields[0].is_empty() || fields[1].is_empty() {
        return Err(TagprepError::Parse {
            source_name: source_name.to_string(),
            line: line_no,
            message: format!("empty token or tag: {line:?}"),
        });
    }
    Ok((fields[0], fields[1]))
}

/// Parse one annotated source into documents.
///
/// Zero-length documents (an empty file, a leading blank line, or a run of
/// blank lines in [`ParseMode::Sentences`]) are never emitted.
///
/// # Arguments
/// * `source_name` - names the source in [`TagprepError::Parse`] errors.
/// * `reader` - the line reader.
/// * `mode` - how to cut the source into documents.
pub fn parse_document_reader<R: BufRead>(
    source_name: &str,
    reader: R,
    mode: ParseMode,
) -> TPResult<Vec<Document>> {
    let mut documents = Vec::new();
    let mut current = Document::default();

    for (idx, line) in reader.lines().enumerate() {
        let line = line?;
        let line = line.strip_suffix('\r').unwrap_or(&line);

        if line.trim().is_empty() {
            if mode == ParseMode::Sentences && !current.is_empty() {
                documents.push(std::mem::take(&mut current));
            }
            continue;
        }

        let (token, tag) = parse_record(source_name, idx + 1, line)?;
        current.push(token, tag);
    }

    if !current.is_empty() {
        documents.push(current);
    }

    Ok(documents)
}

/// Parse one annotated file into documents.
///
/// See [`parse_document_reader`].
pub fn parse_document_path<P: AsRef<Path>>(
    path: P,
    mode: ParseMode,
) -> TPResult<Vec<Document>> {
    let path = path.as_ref();
    let reader = BufReader::new(File::open(path)?);
    parse_document_reader(&path.display().to_string(), reader, mode)
}

/// Parse a set of annotated files into a [`Corpus`].
///
/// Documents are appended in the order of `paths`, and file order within each.
pub fn parse_dataset<P: AsRef<Path>>(
    paths: &[P],
    mode: ParseMode,
) -> TPResult<Corpus> {
    let mut corpus = Corpus::default();
    for path in paths {
        for doc in parse_document_path(path, mode)? {
            corpus.push(doc);
        }
    }
    log::info!(
        "parsed {} documents from {} files ({mode})",
        corpus.len(),
        paths.len()
    );
    Ok(corpus)
}
