//! Top-level facade crate for blogstats.
//!
//! Re-exports core types and the gateway library so users can depend on a single crate.

pub mod core {
    pub use blogstats_core::*;
}

pub mod gateway {
    pub use blogstats_gateway::*;
}
