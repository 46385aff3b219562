//! Typed endpoint registry for the device configuration portal HTTP API.
//!
//! The portal exposes a small fixed surface (reboot, Wi-Fi management,
//! settings). This crate maps that surface to URL strings, optionally
//! prefixed with a base address configured once at startup via
//! `CONFPORTAL_BASE_ADDRESS`.

pub mod config;
pub mod endpoint;
pub mod errors;
pub mod registry;

pub use config::RegistryConfig;
pub use endpoint::Endpoint;
pub use errors::RegistryError;
pub use registry::{global, try_init, EndpointRegistry};
