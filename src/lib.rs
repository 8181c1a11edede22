// Builds an n-way multilingual corpus from a Tatoeba-style sentence export:
// given N languages, finds the sentences that have a mutual translation in
// every one of them and writes one aligned file per language.

pub mod config;
pub mod frequency;
pub mod intersect;
pub mod lang_codes;
pub mod relation;
pub mod summary;

pub use config::Config;
pub use intersect::{IntersectSession, RunOutcome};
