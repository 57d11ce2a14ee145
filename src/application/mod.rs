//! Application layer - Use cases and orchestration

pub mod next_tag;

pub use next_tag::{NextTagRequest, NextTagService};
