// SPDX-License-Identifier: AGPL-3.0-or-later
//
// Copyright (C) 2026 Relational Network

//! Trust parameters for token validation.

use jsonwebtoken::DecodingKey;

/// Immutable bundle of trust parameters the validator checks tokens against.
///
/// Constructed once at startup from process configuration and shared
/// read-only by all requests; there is no ambient global state.
#[derive(Clone)]
pub struct TrustConfig {
    /// Verification key derived from the shared HMAC signing secret
    pub(crate) decoding_key: DecodingKey,
    /// Expected `iss` claim (exact string equality)
    pub issuer: String,
    /// Expected `aud` claim (exact string equality)
    pub audience: String,
    /// Tolerance applied to lifetime checks, in seconds
    pub clock_skew_seconds: i64,
}

impl TrustConfig {
    /// Create a trust configuration from a shared HMAC secret.
    ///
    /// Clock skew defaults to zero: token lifetimes are checked with no
    /// tolerance unless [`with_clock_skew`](Self::with_clock_skew) is used.
    pub fn from_secret(
        secret: &[u8],
        issuer: impl Into<String>,
        audience: impl Into<String>,
    ) -> Self {
        Self {
            decoding_key: DecodingKey::from_secret(secret),
            issuer: issuer.into(),
            audience: audience.into(),
            clock_skew_seconds: 0,
        }
    }

    /// Set the clock-skew tolerance in seconds.
    pub fn with_clock_skew(mut self, seconds: i64) -> Self {
        self.clock_skew_seconds = seconds;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn trust_config_defaults_to_zero_skew() {
        let trust = TrustConfig::from_secret(b"secret", "https://issuer.test", "gateway");
        assert_eq!(trust.issuer, "https://issuer.test");
        assert_eq!(trust.audience, "gateway");
        assert_eq!(trust.clock_skew_seconds, 0);
    }

    #[test]
    fn with_clock_skew_overrides_default() {
        let trust =
            TrustConfig::from_secret(b"secret", "iss", "aud").with_clock_skew(60);
        assert_eq!(trust.clock_skew_seconds, 60);
    }
}
