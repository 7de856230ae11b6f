//! # Pretrained Resources
//!
//! Known remote datasets and embedding tables.
//!
//! With the `download` feature, [`load_glove_6b_vocab`] fetches, unpacks and
//! loads a GloVe 6B table through the disk cache.

#[cfg(feature = "download")]
mod glove;
mod resources;

#[cfg(feature = "download")]
#[doc(inline)]
pub use glove::load_glove_6b_vocab;
#[doc(inline)]
pub use resources::{
    ConstUrlResource,
    GLOVE_6B,
    GLOVE_6B_DIMS,
    KNOWN_RESOURCES,
    PTB_DEPENDENCY_TREEBANK,
    glove_6b_file_name,
};
