//! Domain logic - pure business rules independent of git operations

pub mod tag;

pub use tag::{TagPattern, VERSION_TOKEN};
