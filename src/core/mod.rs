pub mod case;
pub mod config;
pub mod context;
pub mod infinitive;
pub mod list;
pub mod pipeline;
pub mod tense;
pub mod verb;
