//! Top-level facade crate for elide.
//!
//! Re-exports the policy table and the driver library so users can depend on a single crate.

pub mod core {
    pub use elide_core::*;
}

pub mod driver {
    pub use elide_driver::*;
}
