// Copyright (C) 2026 Parity Technologies (UK) Ltd.
// SPDX-License-Identifier: GPL-3.0-or-later

use crate::ConfigError;

/// Settings of the swapservice module routes.
#[derive(Debug, Clone)]
pub struct ModuleConfig {
    /// Store name used as URL prefix and as query routing key
    ///
    /// Env: SWAP_MODULE_STORE_NAME
    /// Default: swapservice
    pub store_name: String,

    /// Pretty-print proxied query responses unless the request overrides it
    ///
    /// Env: SWAP_MODULE_INDENT
    /// Default: false
    pub indent: bool,

    /// Bech32 human readable part of account addresses
    ///
    /// Env: SWAP_MODULE_ACCOUNT_PREFIX
    /// Default: cosmos
    pub account_prefix: String,
}

pub(crate) fn default_store_name() -> String {
    "swapservice".to_string()
}

pub(crate) fn default_account_prefix() -> String {
    "cosmos".to_string()
}

impl ModuleConfig {
    pub(crate) fn validate(&self) -> Result<(), ConfigError> {
        if self.store_name.is_empty() {
            return Err(ConfigError::ValidateError(
                "Module store name cannot be empty".to_string(),
            ));
        }

        if !self
            .store_name
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || c == '_' || c == '-')
        {
            return Err(ConfigError::ValidateError(format!(
                "Module store name '{}' may only contain [a-zA-Z0-9_-]",
                self.store_name
            )));
        }

        // bech32 human readable parts are 1-83 printable ASCII characters
        if self.account_prefix.is_empty()
            || self.account_prefix.len() > 83
            || !self
                .account_prefix
                .chars()
                .all(|c| c.is_ascii_lowercase() || c.is_ascii_digit())
        {
            return Err(ConfigError::ValidateError(format!(
                "Invalid account prefix '{}'",
                self.account_prefix
            )));
        }

        Ok(())
    }
}

impl Default for ModuleConfig {
    fn default() -> Self {
        Self {
            store_name: default_store_name(),
            indent: false,
            account_prefix: default_account_prefix(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_module_config() {
        let config = ModuleConfig::default();
        assert_eq!(config.store_name, "swapservice");
        assert!(!config.indent);
        assert_eq!(config.account_prefix, "cosmos");
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_store_name_with_slash_rejected() {
        let config = ModuleConfig {
            store_name: "swap/service".to_string(),
            ..Default::default()
        };
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_empty_store_name_rejected() {
        let config = ModuleConfig {
            store_name: String::new(),
            ..Default::default()
        };
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_uppercase_prefix_rejected() {
        let config = ModuleConfig {
            account_prefix: "Cosmos".to_string(),
            ..Default::default()
        };
        assert!(config.validate().is_err());
    }
}
