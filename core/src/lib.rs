//! # Scan Engine
//!
//! * **[`scanner`]**: fans a range x port set out into concurrent probes and
//!   waits for all of them.
//! * **[`network`]**: the concrete TCP connect probe.
//! * **[`report`]**: where open ports go once found.

pub mod network;
pub mod report;
pub mod scanner;
