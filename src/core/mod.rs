//! Core data model: build requests, tag policy, and resolved build plans.

pub mod plan;
pub mod request;
pub mod tag;

pub use plan::{resolve, BuildPlan};
pub use request::BuildRequest;
pub use tag::{apply_tag, Tag};
