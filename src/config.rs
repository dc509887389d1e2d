// SPDX-License-Identifier: AGPL-3.0-or-later
//
// Copyright (C) 2026 Relational Network

//! # Runtime Configuration
//!
//! Configuration is loaded from the environment once at startup. Missing or
//! unparseable required values abort startup with a [`ConfigError`].
//!
//! ## Environment Variables
//!
//! | Variable | Description | Default |
//! |----------|-------------|---------|
//! | `HOST` | Server bind address | `0.0.0.0` |
//! | `PORT` | Server bind port | `8080` |
//! | `AUTH_SIGNING_SECRET` | HMAC secret shared with the token issuer | Required |
//! | `AUTH_ISSUER` | Expected JWT issuer claim | Required |
//! | `AUTH_AUDIENCE` | Expected JWT audience claim | Required |
//! | `AUTH_CLOCK_SKEW_SECONDS` | Leeway applied to token lifetime checks | `0` |
//! | `LOG_FORMAT` | Logging format (`json` or `pretty`) | `pretty` |
//! | `RUST_LOG` | Log level filter | `info,tower_http=debug` |

use std::env;
use std::net::SocketAddr;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("missing required environment variable: {0}")]
    Missing(&'static str),
    #[error("invalid value for environment variable: {0}")]
    Invalid(&'static str),
}

/// Logging output format, selected via `LOG_FORMAT`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LogFormat {
    Json,
    Pretty,
}

/// Process-wide configuration, read from the environment at startup.
#[derive(Debug, Clone)]
pub struct Config {
    pub addr: SocketAddr,
    pub signing_secret: String,
    pub issuer: String,
    pub audience: String,
    pub clock_skew_seconds: i64,
    pub log_format: LogFormat,
}

impl Config {
    pub fn from_env() -> Result<Self, ConfigError> {
        let host = env::var("HOST").unwrap_or_else(|_| "0.0.0.0".to_string());
        let port: u16 = env::var("PORT")
            .unwrap_or_else(|_| "8080".to_string())
            .parse()
            .map_err(|_| ConfigError::Invalid("PORT"))?;

        let addr: SocketAddr = format!("{host}:{port}")
            .parse()
            .map_err(|_| ConfigError::Invalid("HOST"))?;

        let signing_secret = env::var("AUTH_SIGNING_SECRET")
            .map_err(|_| ConfigError::Missing("AUTH_SIGNING_SECRET"))?;
        if signing_secret.is_empty() {
            return Err(ConfigError::Invalid("AUTH_SIGNING_SECRET"));
        }

        let issuer = env::var("AUTH_ISSUER").map_err(|_| ConfigError::Missing("AUTH_ISSUER"))?;
        let audience =
            env::var("AUTH_AUDIENCE").map_err(|_| ConfigError::Missing("AUTH_AUDIENCE"))?;

        let clock_skew_seconds = match env::var("AUTH_CLOCK_SKEW_SECONDS") {
            Ok(raw) => raw
                .parse::<i64>()
                .ok()
                .filter(|s| *s >= 0)
                .ok_or(ConfigError::Invalid("AUTH_CLOCK_SKEW_SECONDS"))?,
            Err(_) => 0,
        };

        let log_format = match env::var("LOG_FORMAT").as_deref() {
            Ok("json") => LogFormat::Json,
            _ => LogFormat::Pretty,
        };

        Ok(Self {
            addr,
            signing_secret,
            issuer,
            audience,
            clock_skew_seconds,
            log_format,
        })
    }
}
