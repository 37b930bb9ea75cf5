//! Training records — people and the trainings they completed.
//!
//! The record module provides:
//! - [`Completion`] values with `MM/DD/YYYY` serde mapping
//! - [`Person`] construction with latest-completion dedup
//! - Raw input records ([`PersonRecord`], [`CompletionRecord`]) that carry
//!   unparsed date strings for the loader

pub mod completion;
pub mod person;

pub use completion::{Completion, CompletionRecord};
pub use person::{Person, PersonRecord};
