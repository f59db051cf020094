//! elide driver library entry.
//!
//! Wires the strict config loader, the run-scoped elision policy, and report
//! rendering into the `elide` command-line tool. Consumed by the binary
//! (`main.rs`) and by integration tests.

pub mod cli;
pub mod config;
pub mod policy;
pub mod report;

pub use cli::{run, Cli};
