//! # Resource Descriptors

/// A remote archive with a constant URL.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ConstUrlResource {
    /// Short name.
    pub name: &'static str,

    /// The archive URL.
    pub url: &'static str,

    /// Extension of the payload files inside the archive.
    pub file_extension: &'static str,

    /// One-line description.
    pub description: &'static str,
}

/// The NLTK sample of the Penn Treebank, in dependency (`.dp`) format.
///
/// Lines are `token<TAB>tag<TAB>head`; sentences are separated by blank lines.
pub const PTB_DEPENDENCY_TREEBANK: ConstUrlResource = ConstUrlResource {
    name: "dependency_treebank",
    url: "https://raw.githubusercontent.com/nltk/nltk_data/gh-pages/packages/corpora/dependency_treebank.zip",
    file_extension: "dp",
    description: "Penn Treebank WSJ sample, POS-tagged, 199 documents",
};

/// GloVe 6B word vectors (Wikipedia 2014 + Gigaword 5), 400k words.
pub const GLOVE_6B: ConstUrlResource = ConstUrlResource {
    name: "glove.6B",
    url: "http://nlp.stanford.edu/data/glove.6B.zip",
    file_extension: "txt",
    description: "GloVe 6B uncased word vectors, 50/100/200/300 dims",
};

/// The embedding widths shipped in [`GLOVE_6B`].
pub const GLOVE_6B_DIMS: [usize; 4] = [50, 100, 200, 300];

/// Every known resource.
pub const KNOWN_RESOURCES: &[ConstUrlResource] = &[PTB_DEPENDENCY_TREEBANK, GLOVE_6B];

/// The name of the [`GLOVE_6B`] table of width `dim`.
pub fn glove_6b_file_name(dim: usize) -> String {
    format!("glove.6B.{dim}d.txt")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_glove_file_names() {
        let names: Vec<String> = GLOVE_6B_DIMS.iter().map(|d| glove_6b_file_name(*d)).collect();
        assert_eq!(
            names,
            vec![
                "glove.6B.50d.txt",
                "glove.6B.100d.txt",
                "glove.6B.200d.txt",
                "glove.6B.300d.txt",
            ]
        );
    }

    #[test]
    fn test_known_resources() {
        assert_eq!(KNOWN_RESOURCES.len(), 2);
        for resource in KNOWN_RESOURCES {
            assert!(resource.url.ends_with(".zip"), "{}", resource.name);
        }
    }
}
