// SPDX-License-Identifier: AGPL-3.0-or-later
//
// Copyright (C) 2026 Relational Network

use relational_auth_gateway::{
    api,
    auth::TrustConfig,
    config::{Config, LogFormat},
    state::AppState,
};

#[tokio::main]
async fn main() {
    let config = Config::from_env().expect("Failed to load configuration");
    init_tracing(config.log_format);

    // Trust parameters are built once here and injected; nothing else in the
    // process reads the auth environment.
    let trust = TrustConfig::from_secret(
        config.signing_secret.as_bytes(),
        &config.issuer,
        &config.audience,
    )
    .with_clock_skew(config.clock_skew_seconds);

    let state = AppState::new(trust);
    let app = api::router(state);

    let listener = tokio::net::TcpListener::bind(config.addr)
        .await
        .expect("Failed to bind listen address");

    tracing::info!(addr = %config.addr, "auth gateway listening (docs at /docs)");

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .expect("Server failed");
}

fn init_tracing(format: LogFormat) {
    use tracing_subscriber::EnvFilter;

    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("info,tower_http=debug"));

    match format {
        LogFormat::Json => tracing_subscriber::fmt()
            .json()
            .with_env_filter(filter)
            .init(),
        LogFormat::Pretty => tracing_subscriber::fmt().with_env_filter(filter).init(),
    }
}

async fn shutdown_signal() {
    let ctrl_c = async {
        tokio::signal::ctrl_c()
            .await
            .expect("Failed to install Ctrl+C handler");
    };

    #[cfg(unix)]
    let terminate = async {
        tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate())
            .expect("Failed to install signal handler")
            .recv()
            .await;
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }
}
