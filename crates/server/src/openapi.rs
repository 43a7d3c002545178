// Copyright (C) 2026 Parity Technologies (UK) Ltd.
// SPDX-License-Identifier: GPL-3.0-or-later

use utoipa::OpenApi;

/// Store name the path annotations are written against.
pub const DOCUMENTED_STORE: &str = "swapservice";

#[derive(OpenApi)]
#[openapi(
    info(
        title = "Swapservice REST API",
        version = "0.1.0",
        description = "REST client layer of the swapservice module: proxied pool, stake and account queries and unsigned transaction generation.",
        license(name = "GPL-3.0-or-later"),
        contact(url = "https://github.com/paritytech/swapservice-rest")
    ),
    servers(
        (url = "http://localhost:1317", description = "Localhost")
    ),
    tags(
        (name = "health", description = "Health check"),
        (name = "swapservice", description = "Pool, stake and account queries and transaction generation"),
    ),
    paths(
        crate::handlers::health::get_health::get_health,
        crate::handlers::swapservice::get_pools::get_pools,
        crate::handlers::swapservice::get_pools::get_pool,
        crate::handlers::swapservice::get_pools::get_pool_struct,
        crate::handlers::swapservice::get_stake::get_stake,
        crate::handlers::swapservice::get_account::get_account,
        crate::handlers::swapservice::set_pool_data::set_pool_data,
        crate::handlers::swapservice::set_stake_data::set_stake_data,
    ),
)]
pub struct ApiDoc;

/// The OpenAPI document with module paths moved under `store_name`.
pub fn api_doc(store_name: &str) -> utoipa::openapi::OpenApi {
    let mut doc = ApiDoc::openapi();
    if store_name == DOCUMENTED_STORE {
        return doc;
    }

    let documented = format!("/{DOCUMENTED_STORE}/");
    let served = format!("/{store_name}/");
    let paths = std::mem::take(&mut doc.paths.paths);
    doc.paths.paths = paths
        .into_iter()
        .map(|(path, item)| match path.strip_prefix(&documented) {
            Some(rest) => (format!("{served}{rest}"), item),
            None => (path, item),
        })
        .collect();
    doc
}
