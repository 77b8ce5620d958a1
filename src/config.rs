//! Bridge configuration.

use std::path::Path;
use std::time::Duration;

use anyhow::Context;
use serde::{Deserialize, Serialize};

/// Tunables for the client bridge.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct BridgeConfig {
    /// Upper bound for one synchronous remote call, enforced by the
    /// transport. Expiry surfaces as a recoverable `RpcError::TimedOut`.
    pub call_timeout_ms: u64,

    /// Whether the local fallback composer performs dead-key composition.
    /// When off it still commits plain printable keystrokes.
    pub compose_enabled: bool,
}

impl Default for BridgeConfig {
    fn default() -> Self {
        Self {
            call_timeout_ms: 5000,
            compose_enabled: true,
        }
    }
}

impl BridgeConfig {
    /// Load configuration from a TOML file. Missing fields take defaults.
    pub fn load(path: impl AsRef<Path>) -> anyhow::Result<Self> {
        let path = path.as_ref();
        let raw = std::fs::read_to_string(path)
            .with_context(|| format!("reading config {}", path.display()))?;
        let config = toml::from_str(&raw)
            .with_context(|| format!("parsing config {}", path.display()))?;
        Ok(config)
    }

    pub fn call_timeout(&self) -> Duration {
        Duration::from_millis(self.call_timeout_ms)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults() {
        let config = BridgeConfig::default();
        assert_eq!(config.call_timeout(), Duration::from_millis(5000));
        assert!(config.compose_enabled);
    }

    #[test]
    fn partial_toml_takes_defaults() {
        let config: BridgeConfig = toml::from_str("call_timeout_ms = 250").unwrap();
        assert_eq!(config.call_timeout_ms, 250);
        assert!(config.compose_enabled);
    }
}
