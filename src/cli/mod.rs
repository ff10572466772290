//! Command-line support for the `costgraph` binary.

pub mod commands;
