// SPDX-License-Identifier: AGPL-3.0-or-later
//
// Copyright (C) 2026 Relational Network

//! Axum extractor for the verified identity context.
//!
//! Use the `Identity` extractor in handlers behind the authentication gate:
//!
//! ```rust,ignore
//! async fn my_handler(Identity(claims): Identity) -> impl IntoResponse {
//!     // claims is the verified token payload
//! }
//! ```

use axum::{extract::FromRequestParts, http::request::Parts};

use super::claims::Claims;
use crate::error::PipelineFailure;

/// Extracts the [`Claims`] the authentication gate attached to the request.
///
/// Rejects if no claims are present, which means the route was mounted
/// outside the gated subtree; the extractor does not validate tokens itself.
pub struct Identity(pub Claims);

impl<S> FromRequestParts<S> for Identity
where
    S: Send + Sync,
{
    type Rejection = PipelineFailure;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        parts
            .extensions
            .get::<Claims>()
            .cloned()
            .map(Identity)
            .ok_or_else(|| PipelineFailure::invalid("Authentication context missing"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::http::Request;

    fn parts() -> Parts {
        Request::builder()
            .uri("/test")
            .body(())
            .unwrap()
            .into_parts()
            .0
    }

    #[tokio::test]
    async fn extracts_claims_set_by_the_gate() {
        let mut parts = parts();
        parts.extensions.insert(Claims {
            sub: "user_123".to_string(),
            iss: "https://issuer.test".to_string(),
            aud: "gateway-clients".to_string(),
            exp: 1_700_003_600,
            nbf: None,
            iat: None,
        });

        let Identity(claims) = Identity::from_request_parts(&mut parts, &()).await.unwrap();
        assert_eq!(claims.sub, "user_123");
    }

    #[tokio::test]
    async fn rejects_when_no_claims_are_attached() {
        let mut parts = parts();

        let result = Identity::from_request_parts(&mut parts, &()).await;
        assert!(matches!(
            result,
            Err(PipelineFailure::AuthenticationInvalid(_))
        ));
    }
}
