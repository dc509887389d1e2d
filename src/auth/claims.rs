// SPDX-License-Identifier: AGPL-3.0-or-later
//
// Copyright (C) 2026 Relational Network

//! Verified JWT claims.

use serde::{Deserialize, Serialize};

/// The decoded, verified payload of an accepted bearer token.
///
/// Attached to the request's extensions by the authentication gate and
/// dropped when the request completes. A request reaches a protected handler
/// if and only if this value is present.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Claims {
    /// Subject - the canonical identity of the caller
    pub sub: String,

    /// Issuer, matched exactly against the configured trust issuer
    pub iss: String,

    /// Audience, matched exactly against the configured trust audience
    pub aud: String,

    /// Expiration (Unix timestamp, seconds)
    pub exp: i64,

    /// Not-before (Unix timestamp, seconds)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub nbf: Option<i64>,

    /// Issued-at (Unix timestamp, seconds)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub iat: Option<i64>,
}
