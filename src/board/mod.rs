//! Board snapshots: persistent stacks, structural queries and rendering.

pub mod state;
mod render;

pub use state::{BoardState, FlatCounts, Stack};
