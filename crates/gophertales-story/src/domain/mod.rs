//! Story data model.

pub mod arc;
pub mod graph;
pub mod image;
