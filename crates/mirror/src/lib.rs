//! Top-level facade crate for the telemetry mirror.
//!
//! Re-exports the protocol core and the server library so users can depend on a single crate.

pub mod core {
    pub use mirror_core::*;
}

pub mod server {
    pub use mirror_server::*;
}
