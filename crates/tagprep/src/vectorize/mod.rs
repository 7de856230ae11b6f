//! # Vectorizers
//!
//! * [`TextVectorizer`] - tokens → embedding vectors.
//! * [`TagVectorizer`] - tags → one-hot vectors, and back.
//!
//! Both are fitted with `adapt` on the training split and then applied to
//! every split; the text vectorizer may also be adapted on dev/test so
//! their OOV words get vectors.

mod tag_vectorizer;
mod text_vectorizer;

#[doc(inline)]
pub use tag_vectorizer::{TagVectorizer, UnknownTagPolicy};
#[doc(inline)]
pub use text_vectorizer::TextVectorizer;
