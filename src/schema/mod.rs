pub mod entity;
pub mod grammar;
pub mod lexicon;
