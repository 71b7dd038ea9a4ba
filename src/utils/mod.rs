//! Small helpers shared across the crate.

pub mod paths;

pub use paths::DataPaths;
