//! # Embedding Table IO
//!
//! Lines are:
//! ```terminaloutput
//! {WORD} {F32} {F32} ... {F32}
//! ```
//!
//! with exactly `embedding_dim` floats, single spaces, and no header row;
//! the GloVe text format.

use std::{
    fs::File,
    io::{BufRead, BufReader, BufWriter, Write},
    path::Path,
};

use crate::{
    embedding::EmbeddingVocab,
    errors::{TPResult, TagprepError},
    types::Vector,
};

/// Options for reading an embedding table.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EmbeddingTableOptions {
    /// The expected vector width of every row.
    pub embedding_dim: usize,

    /// Read at most this many rows; `None` reads the whole table.
    pub max_entries: Option<usize>,
}

impl EmbeddingTableOptions {
    /// Create new options for `embedding_dim` wide rows.
    pub fn new(embedding_dim: usize) -> Self {
        Self {
            embedding_dim,
            max_entries: None,
        }
    }

    /// Cap the number of rows read.
    pub fn with_max_entries(
        mut self,
        max_entries: Option<usize>,
    ) -> Self {
        self.max_entries = max_entries;
        self
    }
}

fn format_error(
    line: usize,
    message: impl Into<String>,
) -> TagprepError {
    TagprepError::Format {
        line,
        message: message.into(),
    }
}

/// Parse one table row into `(word, vector)`.
///
/// # Arguments
/// * `line_no` - 1-based, for error messages.
pub fn parse_embedding_line(
    line_no: usize,
    line: &str,
    embedding_dim: usize,
) -> TPResult<(&str, Vector)> {
    let Some((word, rest)) = line.split_once(' ') else {
        return Err(format_error(line_no, "expected a word followed by floats"));
    };
    if word.is_empty() {
        return Err(format_error(line_no, "empty word"));
    }

    let mut vector = Vec::with_capacity(embedding_dim);
    for (idx, field) in rest.split(' ').enumerate() {
        if field.is_empty() {
            return Err(format_error(
                line_no,
                format!("empty field at position {idx} (doubled or trailing space)"),
            ));
        }
        let value: f32 = field.parse().map_err(|e| {
            format_error(line_no, format!("bad float {field:?} at position {idx}: {e}"))
        })?;
        vector.push(value);
    }

    if vector.len() != embedding_dim {
        return Err(format_error(
            line_no,
            format!(
                "word {word:?} has {} values, expected {embedding_dim}",
                vector.len()
            ),
        ));
    }
    Ok((word, vector))
}

/// Read an [`EmbeddingVocab`] from a table line reader.
///
/// When a word occurs twice, the first row wins.
pub fn read_embedding_table<R: BufRead>(
    reader: R,
    options: &EmbeddingTableOptions,
) -> TPResult<EmbeddingVocab> {
    let mut vocab = EmbeddingVocab::new(options.embedding_dim)?;
    let limit = options.max_entries.unwrap_or(usize::MAX);

    let mut rows = 0;
    for (idx, line) in reader.lines().enumerate() {
        if rows >= limit {
            break;
        }
        let line = line?;
        let line = line.strip_suffix('\r').unwrap_or(&line);
        let (word, vector) = parse_embedding_line(idx + 1, line, options.embedding_dim)?;
        if !vocab.try_insert(word, vector)? {
            log::debug!("line {}: duplicate word {word:?} ignored", idx + 1);
        }
        rows += 1;
    }

    log::info!(
        "loaded {} pretrained embeddings (dim={})",
        vocab.len(),
        vocab.embedding_dim()
    );
    Ok(vocab)
}

/// Load an [`EmbeddingVocab`] from a table file.
pub fn load_embedding_table_path<P: AsRef<Path>>(
    path: P,
    options: &EmbeddingTableOptions,
) -> TPResult<EmbeddingVocab> {
    let reader = BufReader::new(File::open(path)?);
    read_embedding_table(reader, options)
}

/// Can `word` be written as the first field of a table row?
///
/// The reader splits rows on the first space and lines on `\n`, so a word
/// holding either (or `\r`, or nothing) would not read back as itself.
pub fn is_writable_word(word: &str) -> bool {
    !word.is_empty() && !word.contains([' ', '\n', '\r'])
}

fn check_writable(vocab: &EmbeddingVocab) -> TPResult<()> {
    match vocab.iter().map(|(word, _)| word).find(|w| !is_writable_word(w)) {
        Some(word) => Err(TagprepError::UnwritableWord {
            word: word.to_string(),
        }),
        None => Ok(()),
    }
}

/// Write an [`EmbeddingVocab`] as a table, sorted by word.
///
/// # Errors
/// [`TagprepError::UnwritableWord`] if any word fails [`is_writable_word`];
/// nothing is written in that case.
pub fn write_embedding_table<W: Write>(
    vocab: &EmbeddingVocab,
    writer: &mut W,
) -> TPResult<()> {
    check_writable(vocab)?;

    let mut rows: Vec<(&str, &[f32])> = vocab.iter().collect();
    rows.sort_by_key(|(word, _)| *word);

    for (word, vector) in rows {
        write!(writer, "{word}")?;
        for value in vector {
            write!(writer, " {value}")?;
        }
        writeln!(writer)?;
    }
    Ok(())
}

/// Save an [`EmbeddingVocab`] to a table file.
///
/// The file is not created when the vocabulary holds an unwritable word.
pub fn save_embedding_table_path<P: AsRef<Path>>(
    vocab: &EmbeddingVocab,
    path: P,
) -> TPResult<()> {
    check_writable(vocab)?;

    let mut writer = BufWriter::new(File::create(path)?);
    write_embedding_table(vocab, &mut writer)?;
    writer.flush()?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use rand::{SeedableRng, rngs::StdRng};
    use tempdir::TempDir;

    use super::*;

    fn read(
        text: &str,
        dim: usize,
    ) -> TPResult<EmbeddingVocab> {
        read_embedding_table(text.as_bytes(), &EmbeddingTableOptions::new(dim))
    }

    fn format_line(err: TagprepError) -> usize {
        match err {
            TagprepError::Format { line, .. } => line,
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    fn test_read_table() {
        let vocab = read("cat 0.1 0.2\ndog 0.3 0.4\n", 2).unwrap();
        assert_eq!(vocab.len(), 2);
        assert_eq!(vocab.get("cat"), Some(&[0.1f32, 0.2][..]));
        assert_eq!(vocab.get("dog"), Some(&[0.3f32, 0.4][..]));
        assert_eq!(vocab.get("fox"), None);
    }

    #[test]
    fn test_punctuation_words() {
        let vocab = read(", 0.5 -1e-3\n\"\" 1 2\n", 2).unwrap();
        assert_eq!(vocab.get(","), Some(&[0.5f32, -0.001][..]));
        assert!(vocab.contains("\"\""));
    }

    #[test]
    fn test_width_mismatch() {
        assert_eq!(format_line(read("cat 0.1 0.2\ndog 0.3\n", 2).unwrap_err()), 2);
        assert_eq!(format_line(read("cat 0.1 0.2 0.3\n", 2).unwrap_err()), 1);
    }

    #[test]
    fn test_malformed_lines() {
        assert_eq!(format_line(read("cat\n", 2).unwrap_err()), 1);
        assert_eq!(format_line(read("cat 0.1  0.2\n", 2).unwrap_err()), 1);
        assert_eq!(format_line(read("cat 0.1 0.2 \n", 2).unwrap_err()), 1);
        assert_eq!(format_line(read("cat 0.1 zero\n", 2).unwrap_err()), 1);
        assert_eq!(format_line(read(" 0.1 0.2\n", 2).unwrap_err()), 1);
        assert_eq!(format_line(read("cat 0.1 0.2\n\ndog 0.3 0.4\n", 2).unwrap_err()), 2);
    }

    #[test]
    fn test_duplicates_keep_first() {
        let vocab = read("cat 0.1 0.2\ncat 0.9 0.9\n", 2).unwrap();
        assert_eq!(vocab.len(), 1);
        assert_eq!(vocab.get("cat"), Some(&[0.1f32, 0.2][..]));
    }

    #[test]
    fn test_max_entries() {
        let options = EmbeddingTableOptions::new(1).with_max_entries(Some(2));
        let vocab = read_embedding_table("a 1\nb 2\nc 3\nbroken\n".as_bytes(), &options).unwrap();
        assert_eq!(vocab.len(), 2);
        assert!(!vocab.contains("c"));
    }

    #[test]
    fn test_save_load_adapted_vocab() -> TPResult<()> {
        let mut vocab = read("the 0.25 -0.5\n", 2)?;
        vocab.adapt(&[vec!["Vinken".to_string()]], &mut StdRng::seed_from_u64(3));

        let tmp = TempDir::new("tagprep-embedding-io")?;
        let path = tmp.path().join("vocab.txt");
        save_embedding_table_path(&vocab, &path)?;

        let loaded = load_embedding_table_path(&path, &EmbeddingTableOptions::new(2))?;
        assert_eq!(loaded, vocab);
        Ok(())
    }

    #[test]
    fn test_save_rejects_words_with_spaces() -> TPResult<()> {
        let mut vocab = read("the 0.25 -0.5\n", 2)?;
        vocab.adapt(
            &[vec!["New York".to_string(), "Vinken".to_string()]],
            &mut StdRng::seed_from_u64(4),
        );

        let tmp = TempDir::new("tagprep-embedding-io")?;
        let path = tmp.path().join("vocab.txt");
        match save_embedding_table_path(&vocab, &path) {
            Err(TagprepError::UnwritableWord { word }) => assert_eq!(word, "New York"),
            other => panic!("unexpected result: {other:?}"),
        }
        assert!(!path.exists());

        let mut buf = Vec::new();
        assert!(write_embedding_table(&vocab, &mut buf).is_err());
        assert!(buf.is_empty());
        Ok(())
    }

    #[test]
    fn test_writable_words() {
        assert!(is_writable_word("Vinken"));
        assert!(is_writable_word(","));
        assert!(is_writable_word("a\tb"));
        assert!(!is_writable_word(""));
        assert!(!is_writable_word("New York"));
        assert!(!is_writable_word("line\nbreak"));
        assert!(!is_writable_word("cr\r"));
    }
}
