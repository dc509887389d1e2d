// SPDX-License-Identifier: AGPL-3.0-or-later
//
// Copyright (C) 2026 Relational Network

//! Pipeline middleware stages.
//!
//! Request flow, outermost first: CORS -> request-id/trace -> failure
//! interceptor -> authentication gate (protected subtree only) -> handler.
//! The interceptor sits inside CORS so every error response still carries
//! CORS headers, and outside everything that can fail so nothing propagates
//! past it.

pub mod cors;
pub mod failure;
pub mod http;
