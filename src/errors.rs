use thiserror::Error;

/// Failures raised while configuring the registry. Lookups themselves
/// cannot fail: every `Endpoint` carries a path fixed at definition time.
#[derive(Debug, Error)]
pub enum RegistryError {
    #[error("Invalid base address: {0}")]
    InvalidBaseAddress(String),

    #[error("Endpoint registry already initialized")]
    AlreadyInitialized,
}
