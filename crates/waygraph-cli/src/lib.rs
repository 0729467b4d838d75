//! Waygraph CLI library.
//!
//! Command handlers and output formatting for the `waygraph` binary. Every
//! routing decision is delegated to `waygraph-lib`; this crate only loads the
//! network, forwards arguments, and prints results.

pub mod commands;
pub mod output;
