//! Socket binding, serving, and shutdown signalling.

use axum::Router;
use tokio::net::TcpListener;
use tokio::signal;

use crate::config::Config;
use crate::error::ServerError;
use crate::telemetry::STARTUP_TARGET;

/// Binds the listening socket at the configured address.
///
/// Emits the two startup log lines once the socket is held.
pub async fn bind(config: &Config) -> Result<TcpListener, ServerError> {
    let addr = config.addr();
    let listener = TcpListener::bind(addr)
        .await
        .map_err(|source| ServerError::Bind { addr, source })?;

    let port = listener
        .local_addr()
        .map(|a| a.port())
        .unwrap_or(config.port);
    tracing::info!(target: STARTUP_TARGET, "Server is running on port {port}");
    tracing::info!(target: STARTUP_TARGET, "Environment: {}", config.environment);

    Ok(listener)
}

/// Serves `app` on `listener` until `shutdown` resolves.
///
/// In-flight requests are allowed to finish once shutdown begins.
pub async fn serve<F>(listener: TcpListener, app: Router, shutdown: F) -> Result<(), ServerError>
where
    F: Future<Output = ()> + Send + 'static,
{
    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown)
        .await?;
    Ok(())
}

/// Waits for a shutdown signal (SIGINT or SIGTERM).
///
/// A handler that fails to install is logged and never fires.
pub async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(err) = signal::ctrl_c().await {
            tracing::error!(error = %err, "failed to install SIGINT handler");
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match signal::unix::signal(signal::unix::SignalKind::terminate()) {
            Ok(mut sigterm) => {
                sigterm.recv().await;
            }
            Err(err) => {
                tracing::error!(error = %err, "failed to install SIGTERM handler");
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        () = ctrl_c => {
            tracing::info!("received SIGINT, starting graceful shutdown");
        }
        () = terminate => {
            tracing::info!("received SIGTERM, starting graceful shutdown");
        }
    }
}

#[cfg(test)]
mod tests {
    use std::io;
    use std::net::{IpAddr, Ipv4Addr};
    use std::sync::{Arc, Mutex};

    use super::*;
    use crate::telemetry::env_filter;

    /// In-memory log sink shared with the fmt subscriber.
    #[derive(Clone, Default)]
    struct Captured(Arc<Mutex<Vec<u8>>>);

    impl io::Write for Captured {
        fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
            self.0.lock().unwrap().extend_from_slice(buf);
            Ok(buf.len())
        }

        fn flush(&mut self) -> io::Result<()> {
            Ok(())
        }
    }

    impl Captured {
        fn contents(&self) -> String {
            String::from_utf8(self.0.lock().unwrap().clone()).unwrap()
        }
    }

    fn loopback(port: u16) -> Config {
        Config {
            host: IpAddr::V4(Ipv4Addr::LOCALHOST),
            port,
            ..Config::default()
        }
    }

    #[tokio::test]
    async fn bind_uses_configured_port() {
        let probe = TcpListener::bind("127.0.0.1:0").await.unwrap();
        let port = probe.local_addr().unwrap().port();
        drop(probe);

        let listener = bind(&loopback(port)).await.unwrap();
        assert_eq!(listener.local_addr().unwrap().port(), port);
    }

    #[tokio::test]
    async fn bind_logs_port_and_environment() {
        let config = Config {
            environment: "staging".to_string(),
            log_filter: "warn".to_string(),
            ..loopback(0)
        };
        let captured = Captured::default();
        let writer = captured.clone();
        let subscriber = tracing_subscriber::fmt()
            .with_env_filter(env_filter(&config))
            .with_ansi(false)
            .with_writer(move || writer.clone())
            .finish();
        let _guard = tracing::subscriber::set_default(subscriber);

        let listener = bind(&config).await.unwrap();
        let port = listener.local_addr().unwrap().port();

        let logs = captured.contents();
        let lines: Vec<&str> = logs.lines().collect();
        assert_eq!(lines.len(), 2, "{logs}");
        assert!(
            lines[0].ends_with(&format!("Server is running on port {port}")),
            "{logs}"
        );
        assert!(lines[1].ends_with("Environment: staging"), "{logs}");
    }

    #[tokio::test]
    async fn bind_fails_when_port_is_taken() {
        let held = TcpListener::bind("127.0.0.1:0").await.unwrap();
        let port = held.local_addr().unwrap().port();

        let err = bind(&loopback(port)).await.unwrap_err();
        match err {
            ServerError::Bind { addr, source } => {
                assert_eq!(addr.port(), port);
                assert_eq!(source.kind(), std::io::ErrorKind::AddrInUse);
            }
            other => panic!("expected bind error, got {other:?}"),
        }
    }

    #[tokio::test]
    async fn serve_returns_after_shutdown() {
        let listener = bind(&loopback(0)).await.unwrap();
        serve(listener, Router::new(), async {}).await.unwrap();
    }
}
