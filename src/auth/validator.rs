// SPDX-License-Identifier: AGPL-3.0-or-later
//
// Copyright (C) 2026 Relational Network

//! Token validation.
//!
//! [`validate`] is a pure function of the token, the trust configuration and
//! the supplied clock reading: no I/O, no side effects, deterministic given
//! `now`. Checks run in order - signature, issuer, audience, lifetime - and
//! each rejects independently. Only the lifetime check can produce
//! [`AuthError::TokenExpired`]; every other rejection is the invalid class.

use chrono::{DateTime, Utc};
use jsonwebtoken::{decode, errors::ErrorKind, Algorithm, Validation};

use super::claims::Claims;
use super::error::AuthError;
use super::trust::TrustConfig;

/// Verify a raw bearer token against the trust configuration.
///
/// Signature, issuer and audience are checked by `jsonwebtoken::decode`.
/// The lifetime window is checked by hand against the injected `now` so the
/// decision stays deterministic and the clock-skew widening is explicit:
/// a token is expired iff `exp < now - clock_skew`, and not yet valid iff
/// `now + clock_skew < nbf`.
pub fn validate(
    token: &str,
    trust: &TrustConfig,
    now: DateTime<Utc>,
) -> Result<Claims, AuthError> {
    let mut validation = Validation::new(Algorithm::HS256);
    validation.set_issuer(&[&trust.issuer]);
    validation.set_audience(&[&trust.audience]);
    validation.validate_exp = false;
    validation.validate_nbf = false;

    let token_data = decode::<Claims>(token, &trust.decoding_key, &validation).map_err(|e| {
        match e.kind() {
            ErrorKind::InvalidSignature => AuthError::InvalidSignature,
            ErrorKind::InvalidIssuer => AuthError::InvalidIssuer,
            ErrorKind::InvalidAudience => AuthError::InvalidAudience,
            _ => AuthError::MalformedToken,
        }
    })?;

    let claims = token_data.claims;
    let now = now.timestamp();
    let skew = trust.clock_skew_seconds;

    if let Some(nbf) = claims.nbf {
        if now + skew < nbf {
            return Err(AuthError::TokenNotYetValid);
        }
    }

    if claims.exp < now - skew {
        return Err(AuthError::TokenExpired);
    }

    Ok(claims)
}

#[cfg(test)]
mod tests {
    use super::*;
    use jsonwebtoken::{encode, EncodingKey, Header};

    const SECRET: &[u8] = b"test-signing-secret";
    const ISSUER: &str = "https://issuer.test";
    const AUDIENCE: &str = "gateway-clients";

    fn trust() -> TrustConfig {
        TrustConfig::from_secret(SECRET, ISSUER, AUDIENCE)
    }

    fn now() -> DateTime<Utc> {
        DateTime::from_timestamp(1_700_000_000, 0).unwrap()
    }

    fn claims(exp: i64) -> Claims {
        Claims {
            sub: "user_123".to_string(),
            iss: ISSUER.to_string(),
            aud: AUDIENCE.to_string(),
            exp,
            nbf: None,
            iat: Some(now().timestamp() - 60),
        }
    }

    fn sign(claims: &Claims, secret: &[u8]) -> String {
        encode(&Header::new(Algorithm::HS256), claims, &EncodingKey::from_secret(secret))
            .expect("failed to sign test token")
    }

    #[test]
    fn accepts_valid_token_and_returns_its_claims() {
        let claims = claims(now().timestamp() + 3600);
        let token = sign(&claims, SECRET);

        let verified = validate(&token, &trust(), now()).unwrap();
        assert_eq!(verified, claims);
    }

    #[test]
    fn validation_is_idempotent() {
        let token = sign(&claims(now().timestamp() + 3600), SECRET);

        let first = validate(&token, &trust(), now()).unwrap();
        let second = validate(&token, &trust(), now()).unwrap();
        assert_eq!(first, second);
    }

    #[test]
    fn rejects_token_signed_with_a_different_key() {
        let token = sign(&claims(now().timestamp() + 3600), b"some-other-secret");

        let err = validate(&token, &trust(), now()).unwrap_err();
        assert_eq!(err, AuthError::InvalidSignature);
    }

    #[test]
    fn rejects_wrong_issuer() {
        let mut claims = claims(now().timestamp() + 3600);
        claims.iss = "https://someone-else.test".to_string();
        let token = sign(&claims, SECRET);

        let err = validate(&token, &trust(), now()).unwrap_err();
        assert_eq!(err, AuthError::InvalidIssuer);
    }

    #[test]
    fn rejects_wrong_audience() {
        let mut claims = claims(now().timestamp() + 3600);
        claims.aud = "other-consumers".to_string();
        let token = sign(&claims, SECRET);

        let err = validate(&token, &trust(), now()).unwrap_err();
        assert_eq!(err, AuthError::InvalidAudience);
    }

    #[test]
    fn rejects_expired_token_as_expired_specifically() {
        let token = sign(&claims(now().timestamp() - 3600), SECRET);

        let err = validate(&token, &trust(), now()).unwrap_err();
        assert_eq!(err, AuthError::TokenExpired);
    }

    #[test]
    fn expiry_check_honors_clock_skew() {
        let trust = trust().with_clock_skew(60);
        let within_skew = sign(&claims(now().timestamp() - 30), SECRET);
        let beyond_skew = sign(&claims(now().timestamp() - 61), SECRET);

        assert!(validate(&within_skew, &trust, now()).is_ok());
        assert_eq!(
            validate(&beyond_skew, &trust, now()).unwrap_err(),
            AuthError::TokenExpired
        );
    }

    #[test]
    fn zero_skew_means_no_tolerance() {
        let token = sign(&claims(now().timestamp() - 1), SECRET);

        let err = validate(&token, &trust(), now()).unwrap_err();
        assert_eq!(err, AuthError::TokenExpired);
    }

    #[test]
    fn rejects_token_not_yet_valid() {
        let mut claims = claims(now().timestamp() + 3600);
        claims.nbf = Some(now().timestamp() + 600);
        let token = sign(&claims, SECRET);

        let err = validate(&token, &trust(), now()).unwrap_err();
        assert_eq!(err, AuthError::TokenNotYetValid);
    }

    #[test]
    fn issuer_mismatch_wins_over_expiry() {
        // Checks run in order; an expired token with a wrong issuer is
        // reported as invalid, not expired.
        let mut claims = claims(now().timestamp() - 3600);
        claims.iss = "https://someone-else.test".to_string();
        let token = sign(&claims, SECRET);

        let err = validate(&token, &trust(), now()).unwrap_err();
        assert_eq!(err, AuthError::InvalidIssuer);
    }

    #[test]
    fn rejects_garbage_as_malformed() {
        let err = validate("not-a-jwt", &trust(), now()).unwrap_err();
        assert_eq!(err, AuthError::MalformedToken);
    }

    #[test]
    fn rejects_unsigned_token_as_malformed() {
        use base64::{engine::general_purpose::URL_SAFE_NO_PAD, Engine};

        let header = URL_SAFE_NO_PAD.encode(br#"{"alg":"none","typ":"JWT"}"#);
        let body = format!(
            r#"{{"sub":"user_123","iss":"{ISSUER}","aud":"{AUDIENCE}","exp":9999999999}}"#
        );
        let payload = URL_SAFE_NO_PAD.encode(body.as_bytes());
        let token = format!("{header}.{payload}.");

        let err = validate(&token, &trust(), now()).unwrap_err();
        assert_eq!(err, AuthError::MalformedToken);
    }
}
