// Copyright (C) 2026 Parity Technologies (UK) Ltd.
// SPDX-License-Identifier: GPL-3.0-or-later

mod args;
mod error;
mod express;
mod log;
mod metrics;
mod module;
mod node;

pub use args::Args;
pub use error::ConfigError;
pub use express::ExpressConfig;
pub use log::LogConfig;
pub use metrics::{MetricsConfig, MetricsError};
pub use module::ModuleConfig;
pub use node::NodeConfig;

use serde::Deserialize;
use std::path::Path;

/// Prefix shared by every environment variable read by the service.
pub const ENV_PREFIX: &str = "SWAP_";

#[derive(Debug, Clone, Default)]
pub struct SwapServiceConfig {
    pub express: ExpressConfig,
    pub log: LogConfig,
    pub node: NodeConfig,
    pub module: ModuleConfig,
    pub metrics: MetricsConfig,
}

/// Flat view of the `SWAP_*` environment, one field per variable.
#[derive(Debug, Default, Deserialize)]
struct EnvVars {
    express_bind_host: Option<String>,
    express_port: Option<u16>,
    express_request_limit: Option<usize>,

    log_level: Option<String>,
    log_json: Option<bool>,
    log_strip_ansi: Option<bool>,
    log_write: Option<bool>,
    log_write_path: Option<String>,
    log_write_max_file_size: Option<u64>,
    log_write_max_files: Option<usize>,

    node_url: Option<String>,
    node_timeout_secs: Option<u64>,

    module_store_name: Option<String>,
    module_indent: Option<bool>,
    module_account_prefix: Option<String>,

    metrics_enabled: Option<bool>,
    metrics_prometheus_prefix: Option<String>,
    metrics_include_queryparams: Option<bool>,
    metrics_loki_enabled: Option<bool>,
    metrics_loki_host: Option<String>,
    metrics_loki_port: Option<u16>,
}

impl From<EnvVars> for SwapServiceConfig {
    fn from(env: EnvVars) -> Self {
        let metrics_defaults = MetricsConfig::default();

        Self {
            express: ExpressConfig {
                bind_host: env.express_bind_host.unwrap_or_else(express::default_bind_host),
                port: env.express_port.unwrap_or_else(express::default_port),
                request_limit: env
                    .express_request_limit
                    .unwrap_or_else(express::default_request_limit),
            },
            log: LogConfig {
                level: env.log_level.unwrap_or_else(log::default_level),
                json: env.log_json.unwrap_or(false),
                strip_ansi: env.log_strip_ansi.unwrap_or(false),
                write: env.log_write.unwrap_or(false),
                write_path: env.log_write_path.unwrap_or_else(log::default_write_path),
                write_max_file_size: env
                    .log_write_max_file_size
                    .unwrap_or_else(log::default_write_max_file_size),
                write_max_files: env
                    .log_write_max_files
                    .unwrap_or_else(log::default_write_max_files),
            },
            node: NodeConfig {
                url: env.node_url.unwrap_or_else(node::default_url),
                timeout_secs: env
                    .node_timeout_secs
                    .unwrap_or_else(node::default_timeout_secs),
            },
            module: ModuleConfig {
                store_name: env
                    .module_store_name
                    .unwrap_or_else(module::default_store_name),
                indent: env.module_indent.unwrap_or(false),
                account_prefix: env
                    .module_account_prefix
                    .unwrap_or_else(module::default_account_prefix),
            },
            metrics: MetricsConfig {
                enabled: env.metrics_enabled.unwrap_or(metrics_defaults.enabled),
                prometheus_prefix: env
                    .metrics_prometheus_prefix
                    .unwrap_or(metrics_defaults.prometheus_prefix),
                include_queryparams: env
                    .metrics_include_queryparams
                    .unwrap_or(metrics_defaults.include_queryparams),
                loki_enabled: env
                    .metrics_loki_enabled
                    .unwrap_or(metrics_defaults.loki_enabled),
                loki_host: env.metrics_loki_host.unwrap_or(metrics_defaults.loki_host),
                loki_port: env.metrics_loki_port.unwrap_or(metrics_defaults.loki_port),
            },
        }
    }
}

impl SwapServiceConfig {
    /// Load configuration from the process environment.
    pub fn from_env() -> Result<Self, ConfigError> {
        let env = envy::prefixed(ENV_PREFIX).from_env::<EnvVars>()?;
        let config = Self::from(env);
        config.validate()?;
        Ok(config)
    }

    /// Load configuration from explicit key/value pairs (keys carry the `SWAP_` prefix).
    pub fn from_pairs<I>(pairs: I) -> Result<Self, ConfigError>
    where
        I: IntoIterator<Item = (String, String)>,
    {
        let env = envy::prefixed(ENV_PREFIX).from_iter::<_, EnvVars>(pairs)?;
        let config = Self::from(env);
        config.validate()?;
        Ok(config)
    }

    /// Load the env file if it exists, then read the process environment.
    ///
    /// Variables already set in the environment win over the file.
    pub fn load(env_file: &str) -> Result<Self, ConfigError> {
        if Path::new(env_file).exists() {
            dotenv::from_path(env_file).map_err(|source| ConfigError::EnvFileError {
                path: env_file.to_string(),
                source,
            })?;
        }
        Self::from_env()
    }

    fn validate(&self) -> Result<(), ConfigError> {
        self.express.validate()?;
        self.log.validate()?;
        self.node.validate()?;
        self.module.validate()?;
        self.metrics.validate()?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serial_test::serial;
    use std::io::Write;

    fn pairs(items: &[(&str, &str)]) -> Vec<(String, String)> {
        items
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect()
    }

    #[test]
    fn test_default_config() {
        let config = SwapServiceConfig::default();
        assert_eq!(config.express.port, 1317);
        assert_eq!(config.log.level, "info");
        assert_eq!(config.module.store_name, "swapservice");
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_from_pairs_empty_uses_defaults() {
        let config = SwapServiceConfig::from_pairs(Vec::new()).unwrap();
        assert_eq!(config.express.bind_host, "127.0.0.1");
        assert_eq!(config.node.url, "http://127.0.0.1:26657");
        assert!(!config.module.indent);
    }

    #[test]
    fn test_from_pairs_overrides() {
        let config = SwapServiceConfig::from_pairs(pairs(&[
            ("SWAP_EXPRESS_PORT", "8080"),
            ("SWAP_LOG_LEVEL", "debug"),
            ("SWAP_NODE_URL", "https://rpc.testnet.example:443"),
            ("SWAP_MODULE_STORE_NAME", "pooldata"),
            ("SWAP_MODULE_INDENT", "true"),
            ("SWAP_METRICS_ENABLED", "true"),
            ("UNRELATED", "ignored"),
        ]))
        .unwrap();

        assert_eq!(config.express.port, 8080);
        assert_eq!(config.log.level, "debug");
        assert_eq!(config.node.url, "https://rpc.testnet.example:443");
        assert_eq!(config.module.store_name, "pooldata");
        assert!(config.module.indent);
        assert!(config.metrics.enabled);
    }

    #[test]
    fn test_from_pairs_invalid_number() {
        let result = SwapServiceConfig::from_pairs(pairs(&[("SWAP_EXPRESS_PORT", "http")]));
        assert!(matches!(result, Err(ConfigError::EnvError(_))));
    }

    #[test]
    fn test_from_pairs_fails_validation() {
        let result = SwapServiceConfig::from_pairs(pairs(&[("SWAP_LOG_LEVEL", "loud")]));
        assert!(matches!(result, Err(ConfigError::ValidateError(_))));

        let result =
            SwapServiceConfig::from_pairs(pairs(&[("SWAP_METRICS_PROMETHEUS_PREFIX", "1abc")]));
        assert!(matches!(result, Err(ConfigError::MetricsError(_))));
    }

    #[test]
    #[serial]
    fn test_load_reads_env_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "SWAP_MODULE_STORE_NAME=fromfile").unwrap();
        writeln!(file, "SWAP_EXPRESS_PORT=9000").unwrap();

        let config = SwapServiceConfig::load(file.path().to_str().unwrap()).unwrap();
        assert_eq!(config.module.store_name, "fromfile");
        assert_eq!(config.express.port, 9000);

        unsafe {
            std::env::remove_var("SWAP_MODULE_STORE_NAME");
            std::env::remove_var("SWAP_EXPRESS_PORT");
        }
    }

    #[test]
    #[serial]
    fn test_load_missing_env_file_is_ignored() {
        let config = SwapServiceConfig::load("/nonexistent/.env.swapservice").unwrap();
        assert_eq!(config.module.store_name, "swapservice");
    }
}
