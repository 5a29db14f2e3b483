//! Embed configuration

use serde::{Deserialize, Serialize};

/// Configuration shared by all embeds
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EmbedConfig {
    /// Whether embeds may call out to provider oEmbed endpoints
    pub network_enabled: bool,
}

impl Default for EmbedConfig {
    fn default() -> Self {
        Self {
            network_enabled: true,
        }
    }
}

impl EmbedConfig {
    /// Create a new config with default settings
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a config that never touches the network
    pub fn offline() -> Self {
        Self {
            network_enabled: false,
        }
    }

    /// Enable or disable network access
    pub fn with_network_enabled(mut self, enabled: bool) -> Self {
        self.network_enabled = enabled;
        self
    }
}
