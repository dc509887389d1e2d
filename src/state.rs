// SPDX-License-Identifier: AGPL-3.0-or-later
//
// Copyright (C) 2026 Relational Network

use std::sync::Arc;

use crate::auth::TrustConfig;

/// Shared application state.
///
/// The trust configuration is built once at startup and never mutated, so it
/// is shared read-only across all in-flight requests.
#[derive(Clone)]
pub struct AppState {
    pub trust: Arc<TrustConfig>,
}

impl AppState {
    pub fn new(trust: TrustConfig) -> Self {
        Self {
            trust: Arc::new(trust),
        }
    }
}
