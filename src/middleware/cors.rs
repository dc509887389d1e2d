// SPDX-License-Identifier: AGPL-3.0-or-later
//
// Copyright (C) 2026 Relational Network

//! CORS policy.
//!
//! The gateway accepts browser clients from any origin, with any request
//! headers and methods, and allows credentials. The CORS layer is mounted
//! outside the failure interceptor so error responses carry these headers
//! too.

use tower_http::cors::{AllowHeaders, AllowMethods, AllowOrigin, CorsLayer};

/// Build the permissive-with-credentials CORS layer.
///
/// A literal wildcard origin cannot be combined with
/// `Access-Control-Allow-Credentials: true`, so the layer mirrors each
/// request's origin, headers and methods back instead - the
/// wildcard-equivalent that remains valid alongside credentials.
pub fn cors_layer() -> CorsLayer {
    CorsLayer::new()
        .allow_origin(AllowOrigin::mirror_request())
        .allow_methods(AllowMethods::mirror_request())
        .allow_headers(AllowHeaders::mirror_request())
        .allow_credentials(true)
}
