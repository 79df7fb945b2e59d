//! Workspace facade crate.
//!
//! Re-exports the workspace crates behind feature flags so host applications
//! can depend on `wave-analyzer` alone:
//! - `decoder` (default): the WAVE decoder from `core-wav`
//! - `logging`: tracing setup from `core-runtime`

#[cfg(feature = "decoder")]
pub use core_wav::*;

#[cfg(feature = "logging")]
pub use core_runtime::logging;
