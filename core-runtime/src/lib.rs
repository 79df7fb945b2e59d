//! # Core Runtime Module
//!
//! Provides the runtime infrastructure shared by the workspace crates:
//! - Logging and tracing setup
//! - Host log forwarding
//!
//! ## Overview
//!
//! Decoding crates only emit `tracing` events. Binaries and host
//! integrations call [`logging::init_logging`] once to decide where those
//! events go.

pub mod error;
pub mod logging;

pub use error::{Error, Result};
