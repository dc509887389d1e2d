// SPDX-License-Identifier: AGPL-3.0-or-later
//
// Copyright (C) 2026 Relational Network

//! # Authentication Module
//!
//! Bearer-token (JWT, HS256) authentication for the gateway.
//!
//! ## Auth Flow
//!
//! 1. Client sends `Authorization: Bearer <JWT>`
//! 2. The authentication gate (`middleware.rs`):
//!    - extracts the bearer token from the header
//!    - verifies signature, issuer, audience and lifetime against the
//!      configured [`TrustConfig`]
//!    - attaches the verified [`Claims`] to the request, or raises a typed
//!      pipeline failure for the interceptor to render
//!
//! ## Security
//!
//! - Tokens are verified against a local shared secret; there is no remote
//!   key fetching and no network I/O on the validation path
//! - Clock skew tolerance defaults to zero and is configurable via
//!   `AUTH_CLOCK_SKEW_SECONDS`
//! - Only routes mounted behind the gate require authentication; exemption
//!   is a routing decision, not a gate decision

pub mod claims;
pub mod error;
pub mod extractor;
pub mod middleware;
pub mod trust;
pub mod validator;

pub use claims::Claims;
pub use error::AuthError;
pub use extractor::Identity;
pub use trust::TrustConfig;
