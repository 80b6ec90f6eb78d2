//! Domain-independent building blocks.

pub mod graph;
