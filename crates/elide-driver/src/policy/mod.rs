//! Policy layer: run threshold against tagged declarations.
//!
//! Compiles the run's threshold once and evaluates each declaration the host
//! reports, yielding keep/elide decisions with the placeholder to substitute.

pub mod engine;

pub use engine::{Declaration, DecisionRecord, ElisionDecision, ElisionPolicy, KeepReason};
