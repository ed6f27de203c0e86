//! # Shared Scan Model
//!
//! Types every other crate of the workspace agrees on:
//!
//! * **[`network`]**: address ranges, port sets and the probe work units.
//! * **[`error`]**: the parse-time error taxonomy.
//! * **[`config`]**: run options handed from the command line to the commands.

pub mod config;
pub mod error;
pub mod network;
