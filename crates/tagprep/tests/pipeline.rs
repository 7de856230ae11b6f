//! End-to-end: annotated files → splits on disk → tensors.

use std::{fs, path::Path};

use tagprep::{
    TPResult,
    TagprepError,
    corpus::{SplitKind, read_split_files},
    dataset::{DataInput, DataInputOptions},
    embedding::{EmbeddingTableOptions, read_embedding_table},
    vectorize::{TagVectorizer, TextVectorizer, UnknownTagPolicy},
};
use tempdir::TempDir;

const WSJ_0001: &str = "\
Pierre\tNNP\t2
Vinken\tNNP\t8
,\t,\t2
61\tCD\t5
years\tNNS\t6
old\tJJ\t2

Mr.\tNNP\t2
Vinken\tNNP\t3
is\tVBZ\t0
chairman\tNN\t3
.\t.\t3
";

const WSJ_0002: &str = "\
Rudolph\tNNP\t2
Agnew\tNNP\t0
was\tVBD\t2
named\tVBN\t3
a\tDT\t6
director\tNN\t4
.\t.\t2
";

const WSJ_0003: &str = "\
A\tDT\t2
form\tNN\t0
of\tIN\t2
asbestos\tNN\t3

has\tVBZ\t0
caused\tVBN\t1

the\tDT\t2
deaths\tNNS\t0
.\t.\t2
";

const EMBEDDINGS: &str = "\
the 0.1 0.2 0.3
, 0.0 0.0 0.1
. 0.0 0.1 0.0
of 0.2 0.2 0.2
is 0.3 0.1 0.0
";

fn write_treebank(folder: &Path) {
    let root = folder.join("dependency_treebank");
    fs::create_dir_all(&root).unwrap();
    for (name, text) in [
        ("wsj_0001.dp", WSJ_0001),
        ("wsj_0002.dp", WSJ_0002),
        ("wsj_0003.dp", WSJ_0003),
    ] {
        fs::write(root.join(name), text).unwrap();
    }
}

fn options(folder: &Path) -> DataInputOptions {
    DataInputOptions::default()
        .with_dataset_folder(folder)
        .with_sizes(0.6, 0.2)
        .with_split_sentences(true)
        .with_seed(Some(2024))
}

#[test]
fn test_prepare_and_vectorize() -> TPResult<()> {
    let tmp = TempDir::new("tagprep-pipeline")?;
    write_treebank(tmp.path());

    let input = DataInput::from_folder(&options(tmp.path()))?;
    let splits = input.splits();

    // 2 + 1 + 3 sentences: 3 train, 1 dev, 2 test.
    assert_eq!(
        (splits.train.len(), splits.dev.len(), splits.test.len()),
        (3, 1, 2)
    );

    let store = input.store_path().unwrap();
    for kind in [SplitKind::Train, SplitKind::Dev, SplitKind::Test] {
        assert_eq!(&read_split_files(store, kind)?, splits.get(kind));
    }

    let vocab = read_embedding_table(EMBEDDINGS.as_bytes(), &EmbeddingTableOptions::new(3))?;
    let pretrained = vocab.clone();
    let mut text = TextVectorizer::seeded(vocab, Some(5));
    let mut tags = TagVectorizer::new();

    for split in splits.iter() {
        text.adapt(&split.x());
    }
    tags.adapt(&splits.train.y());

    // Pretrained rows are never overwritten.
    for (word, vector) in pretrained.iter() {
        assert_eq!(text.vocabulary().get(word), Some(vector));
    }

    let x_train = text.transform(&splits.train.x())?;
    let y_train = tags.transform(&splits.train.y())?;
    assert_eq!(x_train.len(), splits.train.len());
    assert_eq!(y_train.len(), splits.train.len());
    for ((doc, xs), ys) in splits.train.documents.iter().zip(&x_train).zip(&y_train) {
        assert_eq!(xs.len(), doc.len());
        assert_eq!(ys.len(), doc.len());
        assert!(xs.iter().all(|v| v.len() == 3));
        assert!(ys.iter().all(|v| v.len() == tags.num_classes()));
    }

    let decoded = tags.inverse_transform(&y_train)?;
    let expected: Vec<Vec<String>> = splits.train.y().iter().map(|t| t.to_vec()).collect();
    assert_eq!(decoded, expected);

    // Dev/test tokens were adapted too; only their tags may be unseen.
    assert!(text.transform(&splits.dev.x()).is_ok());
    assert!(text.transform(&splits.test.x()).is_ok());
    match tags.transform(&splits.test.y()) {
        Ok(encoded) => assert_eq!(encoded.len(), splits.test.len()),
        Err(TagprepError::UnknownTag { tag, .. }) => {
            assert!(!tags.classes().contains(&tag));
        }
        Err(other) => panic!("unexpected error: {other:?}"),
    }

    // Under the zero-row policy every split encodes.
    let lenient = tags.clone().with_unknown_tag_policy(UnknownTagPolicy::ZeroRow);
    for split in splits.iter() {
        let encoded = lenient.transform(&split.y())?;
        for (doc, rows) in split.y().iter().zip(&encoded) {
            for (tag, row) in doc.iter().zip(rows) {
                let hot = row.iter().filter(|v| **v == 1.0).count();
                assert_eq!(hot, usize::from(tags.classes().contains(tag)));
            }
        }
    }
    Ok(())
}

#[test]
fn test_same_seed_same_splits() -> TPResult<()> {
    let tmp = TempDir::new("tagprep-pipeline-seed")?;
    write_treebank(tmp.path());

    let a = DataInput::from_folder(&options(tmp.path()).with_store_splits(false))?;
    let b = DataInput::from_folder(&options(tmp.path()).with_store_splits(false))?;
    assert_eq!(a.splits(), b.splits());
    Ok(())
}

#[test]
fn test_whole_document_mode() -> TPResult<()> {
    let tmp = TempDir::new("tagprep-pipeline-docs")?;
    write_treebank(tmp.path());

    let input = DataInput::from_folder(
        &options(tmp.path())
            .with_split_sentences(false)
            .with_store_splits(false),
    )?;
    assert_eq!(input.splits().total_len(), 3);

    let lens: Vec<usize> = {
        let mut lens: Vec<usize> = input
            .splits()
            .iter()
            .flat_map(|s| s.documents.iter().map(|d| d.len()))
            .collect();
        lens.sort();
        lens
    };
    assert_eq!(lens, vec![7, 9, 11]);
    Ok(())
}
