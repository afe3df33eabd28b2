//! Host identity sources

use crate::domain::ports::HostIdentity;

/// Reads the host's bundle identifier from an environment variable.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EnvHostIdentity {
    var_name: String,
}

impl EnvHostIdentity {
    /// Variable consulted by [`EnvHostIdentity::default`]
    pub const DEFAULT_VAR: &'static str = "LINKSKIT_BUNDLE_ID";

    pub fn with_var(var_name: impl Into<String>) -> Self {
        Self {
            var_name: var_name.into(),
        }
    }

    pub fn var_name(&self) -> &str {
        &self.var_name
    }
}

impl Default for EnvHostIdentity {
    fn default() -> Self {
        Self::with_var(Self::DEFAULT_VAR)
    }
}

impl HostIdentity for EnvHostIdentity {
    fn bundle_identifier(&self) -> Option<String> {
        std::env::var(&self.var_name)
            .ok()
            .map(|value| value.trim().to_string())
            .filter(|value| !value.is_empty())
    }
}
