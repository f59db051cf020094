//! elide core: the elision policy table shared by build tools.
//!
//! Defines the priority levels, the fixed name table used on command lines,
//! the strict `declared < threshold` comparison, and the placeholder
//! precedence a host compiler applies to elided call sites. It carries no
//! I/O or runtime dependencies so any build-time tool can embed it.
//!
//! # Defensive guarantees
//! Panics, `unwrap`, and `expect` are compile-denied here
//! (`#![deny(clippy::panic, clippy::unwrap_used, clippy::expect_used)]`).
//! All fallible paths surface as `ElideError`/`Result`.

#![deny(clippy::unwrap_used)]
#![deny(clippy::expect_used)]
#![deny(clippy::panic)]

pub mod annotation;
pub mod error;
pub mod level;
pub mod placeholder;

pub use annotation::Elidable;
/// Shared result type.
pub use error::{ElideError, ErrorCode, Result};
pub use level::{named_levels, parse_threshold, resolve, should_elide, Level};
pub use placeholder::{placeholder_for, placeholder_for_candidates, Placeholder, ResultKind};
