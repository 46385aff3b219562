use std::sync::OnceLock;

use tracing::{debug, warn};
use validator::Validate;

use crate::config::RegistryConfig;
use crate::endpoint::Endpoint;
use crate::errors::RegistryError;

static REGISTRY: OnceLock<EndpointRegistry> = OnceLock::new();

/// Immutable mapping from endpoints to fully resolved URLs.
///
/// Every entry is computed once at construction time; lookups afterwards
/// are pure reads, safe to share across threads without synchronization.
#[derive(Debug, Clone)]
pub struct EndpointRegistry {
    base_address: String,
    resolved: [String; Endpoint::COUNT],
}

impl EndpointRegistry {
    /// Validate the configuration and resolve every endpoint up front.
    ///
    /// A trailing slash on the base address is stripped so the joined
    /// URLs never contain an empty path segment.
    pub fn new(config: RegistryConfig) -> Result<Self, RegistryError> {
        config
            .validate()
            .map_err(|_| RegistryError::InvalidBaseAddress(config.base_address.clone()))?;

        let base_address = config.base_address.trim_end_matches('/').to_string();
        let resolved =
            Endpoint::ALL.map(|endpoint| format!("{}{}", base_address, endpoint.as_path()));
        debug!(base_address = %base_address, "Resolved endpoint registry");

        Ok(Self {
            base_address,
            resolved,
        })
    }

    /// Resolved URL for the endpoint. Constant-time, infallible.
    pub fn resolve(&self, endpoint: Endpoint) -> &str {
        &self.resolved[endpoint as usize]
    }

    /// Resolve by symbolic name (`"WIFI_SCAN"` etc., case-insensitive).
    pub fn resolve_code<S: AsRef<str>>(&self, code: S) -> Option<&str> {
        Endpoint::from_code(code).map(|endpoint| self.resolve(endpoint))
    }

    pub fn base_address(&self) -> &str {
        &self.base_address
    }

    pub fn iter(&self) -> impl Iterator<Item = (Endpoint, &str)> + '_ {
        Endpoint::ALL
            .into_iter()
            .map(|endpoint| (endpoint, self.resolve(endpoint)))
    }
}

impl Default for EndpointRegistry {
    fn default() -> Self {
        Self {
            base_address: String::new(),
            resolved: Endpoint::ALL.map(|endpoint| endpoint.as_path().to_string()),
        }
    }
}

/// Process-wide registry, built from the environment on first access.
///
/// A malformed environment value is logged and replaced by the default
/// configuration so that lookups stay infallible.
pub fn global() -> &'static EndpointRegistry {
    REGISTRY.get_or_init(
        || match RegistryConfig::from_env().and_then(EndpointRegistry::new) {
            Ok(registry) => registry,
            Err(err) => {
                warn!(error = %err, "Falling back to default endpoint configuration");
                EndpointRegistry::default()
            }
        },
    )
}

/// Install an explicit configuration ahead of the first `global()` use.
pub fn try_init(config: RegistryConfig) -> Result<&'static EndpointRegistry, RegistryError> {
    let registry = EndpointRegistry::new(config)?;
    let mut installed = false;
    let slot = REGISTRY.get_or_init(|| {
        installed = true;
        registry
    });
    if installed {
        Ok(slot)
    } else {
        Err(RegistryError::AlreadyInitialized)
    }
}

/* ---------------- Tests ---------------- */

#[cfg(test)]
mod tests {
    use super::*;
    use tracing_subscriber::{fmt, EnvFilter};

    #[test]
    fn test_resolves_bare_paths_with_empty_base() {
        let registry = EndpointRegistry::new(RegistryConfig::default()).unwrap();
        assert_eq!(registry.resolve(Endpoint::Reboot), "/reboot");
        assert_eq!(registry.resolve(Endpoint::WifiScan), "/wifi/scan");
        assert_eq!(registry.resolve(Endpoint::Settings), "/settings");
        assert_eq!(registry.base_address(), "");
    }

    #[test]
    fn test_resolves_with_base_address() {
        let config = RegistryConfig::with_base_address("http://localhost:4010");
        let registry = EndpointRegistry::new(config).unwrap();
        assert_eq!(
            registry.resolve(Endpoint::WifiConnect),
            "http://localhost:4010/wifi/connect"
        );
    }

    #[test]
    fn test_trailing_slash_is_normalized() {
        let config = RegistryConfig::with_base_address("http://192.168.4.1/");
        let registry = EndpointRegistry::new(config).unwrap();
        for (endpoint, url) in registry.iter() {
            assert_eq!(url, format!("http://192.168.4.1{}", endpoint.as_path()));
        }
    }

    #[test]
    fn test_resolution_is_idempotent() {
        let registry = EndpointRegistry::new(RegistryConfig::default()).unwrap();
        for endpoint in Endpoint::ALL {
            let first = registry.resolve(endpoint);
            let second = registry.resolve(endpoint);
            assert_eq!(first, second);
            assert_eq!(first.as_ptr(), second.as_ptr());
        }
    }

    #[test]
    fn test_covers_every_endpoint() {
        let config = RegistryConfig::with_base_address("https://device.local");
        let registry = EndpointRegistry::new(config).unwrap();
        assert_eq!(registry.iter().count(), Endpoint::COUNT);
        for (endpoint, url) in registry.iter() {
            assert!(!url.is_empty());
            assert!(url.starts_with("https://device.local/"));
            assert!(url.ends_with(endpoint.as_path()));
        }
    }

    #[test]
    fn test_resolve_code_maps_known_names() {
        let registry = EndpointRegistry::new(RegistryConfig::default()).unwrap();
        assert_eq!(
            registry.resolve_code("WIFI_DISCONNECT"),
            Some("/wifi/disconnect")
        );
        assert_eq!(registry.resolve_code("firmware"), None);
    }

    #[test]
    fn test_rejects_invalid_base_address() {
        let result = EndpointRegistry::new(RegistryConfig::with_base_address("device.local"));
        assert!(matches!(result, Err(RegistryError::InvalidBaseAddress(_))));
    }

    #[test]
    fn test_global_lifecycle() {
        let _ = fmt()
            .with_env_filter(EnvFilter::new("debug"))
            .with_test_writer()
            .try_init();

        let first = global();
        assert!(first.resolve(Endpoint::Reboot).ends_with("/reboot"));
        assert!(std::ptr::eq(first, global()));

        // The slot is taken, explicit init must refuse.
        let result = try_init(RegistryConfig::default());
        assert!(matches!(result, Err(RegistryError::AlreadyInitialized)));
    }
}
