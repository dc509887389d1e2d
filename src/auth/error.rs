// SPDX-License-Identifier: AGPL-3.0-or-later
//
// Copyright (C) 2026 Relational Network

//! Authentication errors.

use thiserror::Error;

/// Reasons a request fails authentication.
///
/// Display messages are rendered verbatim into the client-facing error body
/// by the failure interceptor, so they must stay free of secrets and token
/// material.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum AuthError {
    /// No authorization header present
    #[error("Authorization header is required")]
    MissingAuthHeader,
    /// Invalid authorization header format
    #[error("Invalid authorization header format (expected 'Bearer <token>')")]
    InvalidAuthHeader,
    /// Token cannot be decoded
    #[error("Token is malformed")]
    MalformedToken,
    /// Token signature is invalid
    #[error("Token signature is invalid")]
    InvalidSignature,
    /// Token issuer is invalid
    #[error("Token issuer is invalid")]
    InvalidIssuer,
    /// Token audience is invalid
    #[error("Token audience is invalid")]
    InvalidAudience,
    /// Token has expired
    #[error("Token has expired")]
    TokenExpired,
    /// Token is not yet valid
    #[error("Token is not yet valid")]
    TokenNotYetValid,
}
