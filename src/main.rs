use config_greeter::config::GreeterConfig;
use config_greeter::greeter::{router, AppState};
use config_greeter::render::Renderer;
use config_greeter::settings::{GreeterSettings, ServerSettings};

#[tokio::main]
async fn main() {
    config_greeter::init_tracing();

    // load() succeeds even when application.yaml is absent (env vars still
    // overlay); every recognized key falls back to its documented default.
    let config = GreeterConfig::load("dev").unwrap_or_else(|err| {
        tracing::warn!(%err, "configuration load failed, starting with empty config");
        GreeterConfig::empty()
    });

    let settings = GreeterSettings::from_config(&config);
    let server = ServerSettings::from_config(&config);
    tracing::info!(profile = config.profile(), "resolved greeter settings");

    let app = router(AppState {
        settings,
        renderer: Renderer::new(),
    });

    let addr = server.bind_addr();
    let listener = tokio::net::TcpListener::bind(&addr).await.unwrap();
    tracing::info!(%addr, "listening");
    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .unwrap();
}

/// Wait for a shutdown signal (Ctrl-C or SIGTERM on Unix).
async fn shutdown_signal() {
    let ctrl_c = async {
        tokio::signal::ctrl_c()
            .await
            .expect("failed to listen for Ctrl-C");
    };

    #[cfg(unix)]
    let terminate = async {
        tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate())
            .expect("failed to listen for SIGTERM")
            .recv()
            .await;
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }

    tracing::info!("Shutdown signal received, starting graceful shutdown");
}
