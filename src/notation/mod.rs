//! Move notation: text to `MoveDescriptor`.
//!
//! Parsing has no board knowledge. It fails fast on malformed text; the
//! board-independent rule checks (carry limit, reserves, distribution,
//! trajectory) are collected by `MoveDescriptor::validate`.

mod scanner;
pub mod descriptor;

pub use descriptor::MoveDescriptor;
