//! gicon CLI library.

pub mod cli;
