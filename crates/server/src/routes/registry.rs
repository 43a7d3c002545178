// Copyright (C) 2026 Parity Technologies (UK) Ltd.
// SPDX-License-Identifier: GPL-3.0-or-later

//! Route registry for dynamic endpoint introspection.
//!
//! Every route added through [`RegisterRoute`] is recorded here so the root
//! endpoint can list what the service exposes.

use axum::{Router, routing::MethodRouter};
use serde::Serialize;
use std::sync::{Arc, RwLock};

/// Information about a registered route.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RouteInfo {
    /// The path pattern (e.g., "/swapservice/pools/{pooldata}")
    pub path: String,
    /// The HTTP method (e.g., "get", "put")
    pub method: String,
}

/// A thread-safe registry of routes.
///
/// A (path, method) pair is recorded once no matter how often it is
/// registered.
#[derive(Clone, Default)]
pub struct RouteRegistry(Arc<RwLock<Vec<RouteInfo>>>);

impl RouteRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a route to the registry unless it is already present.
    pub fn add(&self, path: &str, method: &str) {
        let mut routes = self.0.write().unwrap_or_else(|poisoned| poisoned.into_inner());
        if !routes.iter().any(|r| r.path == path && r.method == method) {
            routes.push(RouteInfo {
                path: path.to_string(),
                method: method.to_string(),
            });
        }
    }

    /// All registered routes, in registration order.
    pub fn routes(&self) -> Vec<RouteInfo> {
        self.0
            .read()
            .map(|r| r.clone())
            .unwrap_or_else(|poisoned| poisoned.into_inner().clone())
    }
}

/// Extension trait for registering routes with automatic registry tracking.
pub trait RegisterRoute<S: Clone + Send + Sync + 'static> {
    /// Register a route and track it in the registry.
    ///
    /// # Arguments
    /// * `registry` - The route registry to add the route to
    /// * `prefix` - Prepended to the path in the registry only, for routers that get nested
    /// * `path` - The route path
    /// * `method` - The HTTP method (e.g., "get", "put")
    /// * `handler` - The route handler
    fn route_registered(
        self,
        registry: &RouteRegistry,
        prefix: &str,
        path: &str,
        method: &str,
        handler: MethodRouter<S>,
    ) -> Self;
}

impl<S: Clone + Send + Sync + 'static> RegisterRoute<S> for Router<S> {
    fn route_registered(
        self,
        registry: &RouteRegistry,
        prefix: &str,
        path: &str,
        method: &str,
        handler: MethodRouter<S>,
    ) -> Self {
        registry.add(&format!("{prefix}{path}"), method);
        self.route(path, handler)
    }
}
