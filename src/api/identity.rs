// SPDX-License-Identifier: AGPL-3.0-or-later
//
// Copyright (C) 2026 Relational Network

use axum::Json;
use serde::Serialize;
use utoipa::ToSchema;

use crate::auth::Identity;

/// The caller's verified identity, as established by the authentication gate.
#[derive(Debug, Serialize, ToSchema)]
pub struct IdentityResponse {
    /// Canonical caller identity (token `sub` claim)
    pub subject: String,
    /// Token issuer
    pub issuer: String,
    /// Token audience
    pub audience: String,
    /// Token expiration (Unix timestamp, seconds)
    pub expires_at: i64,
}

/// Return the identity attached to the authenticated request.
#[utoipa::path(
    get,
    path = "/v1/me",
    tag = "Identity",
    responses(
        (status = 200, body = IdentityResponse),
        (status = 401, description = "Token expired"),
        (status = 500, description = "Authentication failed")
    )
)]
pub async fn me(Identity(claims): Identity) -> Json<IdentityResponse> {
    Json(IdentityResponse {
        subject: claims.sub,
        issuer: claims.iss,
        audience: claims.aud,
        expires_at: claims.exp,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::auth::Claims;

    #[tokio::test]
    async fn me_echoes_the_verified_claims() {
        let claims = Claims {
            sub: "user_123".to_string(),
            iss: "https://issuer.test".to_string(),
            aud: "gateway-clients".to_string(),
            exp: 1_700_003_600,
            nbf: None,
            iat: None,
        };

        let Json(response) = me(Identity(claims)).await;
        assert_eq!(response.subject, "user_123");
        assert_eq!(response.issuer, "https://issuer.test");
        assert_eq!(response.audience, "gateway-clients");
        assert_eq!(response.expires_at, 1_700_003_600);
    }
}
