// Copyright (C) 2026 Parity Technologies (UK) Ltd.
// SPDX-License-Identifier: GPL-3.0-or-later

use axum::{Router, middleware, routing::get};
use tower::Layer;
use tower_http::{
    cors::CorsLayer,
    limit::RequestBodyLimitLayer,
    normalize_path::{NormalizePath, NormalizePathLayer},
};

use crate::{logging::http_logger_middleware, metrics::metrics_middleware, routes, state::AppState};

/// Assemble every route and the shared middleware stack.
///
/// Module routes are bound under the configured store name; metrics routes
/// and middleware are only mounted when metrics are enabled.
pub fn create_app(state: AppState) -> NormalizePath<Router> {
    let registry = state.route_registry.clone();

    let mut router = Router::new()
        .route("/", get(routes::root::root_handler))
        .merge(routes::health::routes(&registry))
        .merge(routes::swapservice::routes(&registry, state.module_state()))
        .merge(routes::docs::routes());

    if state.config.metrics.enabled {
        router = router
            .merge(routes::metrics::routes())
            .layer(middleware::from_fn_with_state(state.clone(), metrics_middleware));
    }

    let router = router
        .layer(middleware::from_fn(http_logger_middleware))
        .layer(RequestBodyLimitLayer::new(state.config.express.request_limit))
        .layer(CorsLayer::permissive())
        .with_state(state);

    NormalizePathLayer::trim_trailing_slash().layer(router)
}
