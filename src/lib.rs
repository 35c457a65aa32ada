//! Narrative Flexion: German surface forms for interactive narrative.
//!
//! Given a lexical item and its grammatical context (case, list case,
//! list article, person, tense) the crate picks the inflected form the
//! content author registered, and keeps the little cross-clause state
//! needed to coordinate separable verbs.

pub mod core;
pub mod schema;

pub use crate::core::config::NarrationConfig;
pub use crate::core::context::RenderingContext;
pub use crate::core::pipeline::{NarrationError, Narrator, NarratorBuilder, Sentence, SentenceState};
pub use crate::core::verb::VerbHelper;
pub use crate::schema::grammar::{Case, Gender, ListArticle, Person, Tense};
