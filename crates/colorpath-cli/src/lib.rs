//! colorpath CLI library.
//!
//! This crate provides command-line interface utilities for the colorpath
//! route planner, including terminal styling and output formatting.

pub mod output;
pub mod terminal;
