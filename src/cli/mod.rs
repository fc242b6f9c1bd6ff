//! Command-line front end for the `graphwalk` binary.

pub mod commands;

pub use commands::GraphSource;
