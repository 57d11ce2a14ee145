//! Domain layer - Tag derivation

pub mod date_prefix;
pub mod sequencer;
pub mod suffix;
pub mod tag;

pub use date_prefix::{DatePrefix, YearFormat};
pub use sequencer::{NextReason, NextTag, TagSequencer, TagSource};
pub use suffix::Suffix;
pub use tag::Tag;
