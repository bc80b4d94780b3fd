//! citypath CLI library.
//!
//! This crate provides the output formatting used by the `citypath` binary.

pub mod output;
