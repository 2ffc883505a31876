//! GopherTales Core — shared domain abstractions.
//!
//! This crate defines the partition key, the error taxonomy and the
//! collaborator traits the story engine depends on. It contains no story
//! logic and no infrastructure code.

pub mod clock;
pub mod error;
pub mod gopher;
pub mod progress;
