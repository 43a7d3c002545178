// Copyright (C) 2026 Parity Technologies (UK) Ltd.
// SPDX-License-Identifier: GPL-3.0-or-later

use std::net::IpAddr;
use std::str::FromStr;
use thiserror::Error;

/// Validates that a string is a valid host (IP address or hostname)
fn is_valid_host(host: &str) -> bool {
    if IpAddr::from_str(host).is_ok() {
        return true;
    }

    // RFC 1123
    if host.is_empty() || host.len() > 253 {
        return false;
    }

    host.split('.').all(|label| {
        !label.is_empty()
            && label.len() <= 63
            && label.chars().all(|c| c.is_ascii_alphanumeric() || c == '-')
            && !label.starts_with('-')
            && !label.ends_with('-')
    })
}

#[derive(Debug, Error)]
pub enum MetricsError {
    #[error("Invalid host address or hostname: {0}")]
    InvalidHost(String),

    #[error("Port must be between 1 and 65535, got {0}")]
    InvalidPort(u16),

    #[error(
        "Invalid Prometheus prefix '{0}': must start with [a-zA-Z_:] and contain only [a-zA-Z0-9_:]"
    )]
    InvalidPrometheusPrefix(String),
}

/// Configuration for Prometheus metrics and Loki logging
#[derive(Debug, Clone)]
pub struct MetricsConfig {
    /// Expose `/metrics` and `/metrics.json` and record request metrics
    ///
    /// Env: SWAP_METRICS_ENABLED
    pub enabled: bool,

    /// Prometheus metric name prefix
    ///
    /// Env: SWAP_METRICS_PROMETHEUS_PREFIX
    pub prometheus_prefix: String,

    /// Include query parameter names in route labels
    ///
    /// Env: SWAP_METRICS_INCLUDE_QUERYPARAMS
    pub include_queryparams: bool,

    /// Ship logs to Loki
    ///
    /// Env: SWAP_METRICS_LOKI_ENABLED
    pub loki_enabled: bool,

    /// Env: SWAP_METRICS_LOKI_HOST
    pub loki_host: String,

    /// Env: SWAP_METRICS_LOKI_PORT
    pub loki_port: u16,
}

impl Default for MetricsConfig {
    fn default() -> Self {
        Self {
            enabled: false,
            prometheus_prefix: "swapservice_rest".to_string(),
            include_queryparams: false,
            loki_enabled: false,
            loki_host: "127.0.0.1".to_string(),
            loki_port: 3100,
        }
    }
}

impl MetricsConfig {
    pub fn validate(&self) -> Result<(), MetricsError> {
        // Prometheus silently drops metrics whose names don't match [a-zA-Z_:][a-zA-Z0-9_:]*
        let mut chars = self.prometheus_prefix.chars();
        if let Some(first) = chars.next() {
            if !first.is_ascii_alphabetic() && first != '_' && first != ':' {
                return Err(MetricsError::InvalidPrometheusPrefix(
                    self.prometheus_prefix.clone(),
                ));
            }
            if chars.any(|ch| !ch.is_ascii_alphanumeric() && ch != '_' && ch != ':') {
                return Err(MetricsError::InvalidPrometheusPrefix(
                    self.prometheus_prefix.clone(),
                ));
            }
        }

        if !is_valid_host(&self.loki_host) {
            return Err(MetricsError::InvalidHost(self.loki_host.clone()));
        }

        if self.loki_port == 0 {
            return Err(MetricsError::InvalidPort(self.loki_port));
        }

        Ok(())
    }

    /// Loki push endpoint, if log shipping is enabled.
    pub fn loki_url(&self) -> Option<String> {
        self.loki_enabled
            .then(|| format!("http://{}:{}", self.loki_host, self.loki_port))
    }
}
