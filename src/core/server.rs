use crate::core::ConfigProvider;
use crate::utils::error::Result;
use crate::utils::monitor::SystemMonitor;
use axum::Router;
use std::sync::Arc;
use tokio::net::TcpListener;

pub struct ApiServer<C: ConfigProvider> {
    config: C,
    monitor: Arc<SystemMonitor>,
}

impl<C: ConfigProvider> ApiServer<C> {
    pub fn new(config: C) -> Self {
        Self::new_with_monitoring(config, false)
    }

    pub fn new_with_monitoring(config: C, monitor_enabled: bool) -> Self {
        Self {
            config,
            monitor: Arc::new(SystemMonitor::new(monitor_enabled)),
        }
    }

    /// Shared handle for the status endpoint.
    pub fn monitor(&self) -> Arc<SystemMonitor> {
        Arc::clone(&self.monitor)
    }

    pub async fn run(&self, router: Router) -> Result<()> {
        let addr = format!("{}:{}", self.config.bind_addr(), self.config.port());

        self.monitor.log_stats("Startup");

        let listener = TcpListener::bind(&addr).await?;
        let local_addr = listener.local_addr()?;
        tracing::info!("✅ Listening on http://{}", local_addr);

        axum::serve(listener, router)
            .with_graceful_shutdown(shutdown_signal())
            .await?;

        self.monitor.log_final_stats();
        Ok(())
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
            .expect("Failed to install SIGTERM handler")
            .recv()
            .await;
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }

    tracing::info!("🛑 Shutdown signal received, draining connections");
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::utils::error::MathApiError;

    struct TestConfig {
        bind_addr: String,
        port: u16,
    }

    impl ConfigProvider for TestConfig {
        fn bind_addr(&self) -> &str {
            &self.bind_addr
        }

        fn port(&self) -> u16 {
            self.port
        }

        fn monitor_enabled(&self) -> bool {
            false
        }
    }

    #[tokio::test]
    async fn test_run_fails_with_io_error_on_unresolvable_addr() {
        let config = TestConfig {
            bind_addr: "999.999.999.999".to_string(),
            port: 8080,
        };
        let server = ApiServer::new(config);

        let err = server.run(Router::new()).await.unwrap_err();
        assert!(matches!(err, MathApiError::IoError(_)));
    }

    #[tokio::test]
    async fn test_run_fails_when_port_already_bound() {
        let holder = TcpListener::bind("127.0.0.1:0").await.unwrap();
        let taken_port = holder.local_addr().unwrap().port();

        let config = TestConfig {
            bind_addr: "127.0.0.1".to_string(),
            port: taken_port,
        };
        let server = ApiServer::new(config);

        let err = server.run(Router::new()).await.unwrap_err();
        assert!(matches!(err, MathApiError::IoError(_)));
    }
}
