//! Route handlers organized by resource

pub mod posts;
pub mod root;
