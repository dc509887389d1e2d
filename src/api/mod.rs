// SPDX-License-Identifier: AGPL-3.0-or-later
//
// Copyright (C) 2026 Relational Network

//! HTTP mounting surface.
//!
//! Assembles the request pipeline around the application routes. Stage
//! order, outermost first: CORS -> request-id/trace -> failure interceptor
//! -> authentication gate -> handlers. `/health` and `/docs` are mounted
//! outside the gated `/v1` subtree and are reachable without credentials;
//! the failure interceptor still wraps them.

use axum::{
    middleware::{from_fn, from_fn_with_state},
    routing::get,
    Router,
};
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

use crate::{auth, middleware, state::AppState};

pub mod health;
pub mod identity;

pub fn router(state: AppState) -> Router {
    let protected = Router::new()
        .route("/me", get(identity::me))
        .layer(from_fn_with_state(
            state.clone(),
            auth::middleware::require_bearer,
        ));

    let app = Router::new()
        .route("/health", get(health::health))
        .nest("/v1", protected)
        .merge(SwaggerUi::new("/docs").url("/api-doc/openapi.json", ApiDoc::openapi()))
        .layer(from_fn(middleware::failure::intercept_failures))
        .with_state(state);

    middleware::http::apply(app).layer(middleware::cors::cors_layer())
}

#[derive(OpenApi)]
#[openapi(
    paths(health::health, identity::me),
    components(schemas(health::HealthResponse, identity::IdentityResponse)),
    tags(
        (name = "Health", description = "Liveness probes"),
        (name = "Identity", description = "Authenticated caller identity")
    )
)]
struct ApiDoc;
