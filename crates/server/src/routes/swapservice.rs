// Copyright (C) 2026 Parity Technologies (UK) Ltd.
// SPDX-License-Identifier: GPL-3.0-or-later

use axum::{
    Router,
    routing::{get, put},
};

use crate::{
    handlers::swapservice,
    routes::{RegisterRoute, RouteRegistry},
    state::{AppState, ModuleState},
};

/// Bind the module's read and write routes under `/<store>`.
pub fn routes(registry: &RouteRegistry, module: ModuleState) -> Router<AppState> {
    let store = format!("/{}", module.store_name);

    let module_routes: Router<AppState> = Router::<ModuleState>::new()
        .route_registered(registry, &store, "/pools", "get", get(swapservice::get_pools))
        .route_registered(registry, &store, "/pools", "put", put(swapservice::set_pool_data))
        .route_registered(
            registry,
            &store,
            "/pools/{pooldata}",
            "get",
            get(swapservice::get_pool),
        )
        .route_registered(
            registry,
            &store,
            "/pools/{pooldata}/poolstruct",
            "get",
            get(swapservice::get_pool_struct),
        )
        .route_registered(
            registry,
            &store,
            "/stake/{stakedata}",
            "get",
            get(swapservice::get_stake),
        )
        .route_registered(registry, &store, "/stake", "put", put(swapservice::set_stake_data))
        .route_registered(
            registry,
            &store,
            "/account/{account}",
            "get",
            get(swapservice::get_account),
        )
        .with_state(module);

    Router::new().nest(&store, module_routes)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::handlers::swapservice::test_support::{FakeNode, RecordingGenerator, module_state};
    use std::collections::BTreeSet;
    use std::sync::Arc;

    fn bindings(registry: &RouteRegistry) -> BTreeSet<(String, String)> {
        registry
            .routes()
            .into_iter()
            .map(|r| (r.method, r.path))
            .collect()
    }

    #[test]
    fn test_registers_documented_bindings_once() {
        let registry = RouteRegistry::new();
        let module = module_state(
            Arc::new(FakeNode::default()),
            Arc::new(RecordingGenerator::default()),
        );
        let _ = routes(&registry, module.clone());
        let _ = routes(&registry, module);

        let expected: BTreeSet<(String, String)> = [
            ("get", "/swapservice/pools"),
            ("put", "/swapservice/pools"),
            ("get", "/swapservice/pools/{pooldata}"),
            ("get", "/swapservice/pools/{pooldata}/poolstruct"),
            ("get", "/swapservice/stake/{stakedata}"),
            ("put", "/swapservice/stake"),
            ("get", "/swapservice/account/{account}"),
        ]
        .into_iter()
        .map(|(m, p)| (m.to_string(), p.to_string()))
        .collect();

        assert_eq!(registry.routes().len(), 7);
        assert_eq!(bindings(&registry), expected);
    }
}
