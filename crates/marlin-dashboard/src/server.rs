//! Dashboard server implementation.

use crate::error::DashboardError;
use crate::routes;
use crate::state::AppState;
use marlin_core::DashboardConfig;
use tokio::net::TcpListener;
use tower_http::trace::TraceLayer;

/// The dashboard server.
pub struct DashboardServer {
    config: DashboardConfig,
    state: AppState,
}

impl DashboardServer {
    /// Create a new dashboard server with the given configuration.
    pub fn new(config: DashboardConfig, state: AppState) -> Self {
        Self { config, state }
    }

    /// Start the dashboard server.
    pub async fn run(&self) -> Result<(), DashboardError> {
        let addr = self.config.listen_address();
        tracing::info!(address = %addr, "Starting Marlin dashboard");

        let app = routes::create_router(self.state.clone()).layer(TraceLayer::new_for_http());

        let listener = TcpListener::bind(&addr)
            .await
            .map_err(|e| DashboardError::StartupFailed(e.to_string()))?;

        axum::serve(listener, app)
            .await
            .map_err(|e| DashboardError::StartupFailed(e.to_string()))?;

        Ok(())
    }

    /// Get the configured listen port.
    pub fn listen_port(&self) -> u16 {
        self.config.port
    }
}
