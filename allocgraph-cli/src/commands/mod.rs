pub mod analyze;
pub mod common;
pub mod example;
pub mod matrices;
