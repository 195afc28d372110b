//! Top-level facade crate for daytally.
//!
//! Re-exports the core types and the server library so users can depend on a single crate.

pub mod core {
    pub use daytally_core::*;
}

pub mod server {
    pub use daytally_server::*;
}
