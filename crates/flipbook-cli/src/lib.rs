//! Flipbook CLI library.
//!
//! Command implementations for the `flipbook` binary, kept in a library so
//! they can be tested without spawning a process.

pub mod commands;
