//! # Word Embeddings
//!
//! * [`EmbeddingVocab`] - the word → vector table, with OOV extension.
//! * [`io`] - the text table reader/writer.
//!
//! ## Loading A Table
//!
//! ```rust,no_run
//! use rand::{SeedableRng, rngs::StdRng};
//! use tagprep::embedding::{EmbeddingTableOptions, load_embedding_table_path};
//!
//! fn example() -> tagprep::TPResult<()> {
//!     let mut vocab =
//!         load_embedding_table_path("glove.6B.50d.txt", &EmbeddingTableOptions::new(50))?;
//!
//!     let docs = vec![vec!["Vinken".to_string(), "joined".to_string()]];
//!     let added = vocab.adapt(&docs, &mut StdRng::seed_from_u64(0));
//!     println!("{added} OOV words");
//!     Ok(())
//! }
//! ```

pub mod io;
pub mod vocabulary;

#[doc(inline)]
pub use io::{
    EmbeddingTableOptions,
    is_writable_word,
    load_embedding_table_path,
    read_embedding_table,
    save_embedding_table_path,
    write_embedding_table,
};
#[doc(inline)]
pub use vocabulary::EmbeddingVocab;
