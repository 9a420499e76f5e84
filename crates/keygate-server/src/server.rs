//! HTTP server

use tracing::info;

use crate::routes::router;
use keygate_core::Keygate;

/// HTTP server for the login and item endpoints
pub struct ApiServer {
    keygate: Keygate,
    addr: String,
}

impl ApiServer {
    /// Create a new server that will listen on `addr` (e.g. `0.0.0.0:8000`)
    pub fn new(keygate: Keygate, addr: impl Into<String>) -> Self {
        Self {
            keygate,
            addr: addr.into(),
        }
    }

    /// Run the server until the process is stopped
    pub async fn run(&self) -> Result<(), Box<dyn std::error::Error>> {
        let app = router(self.keygate.clone());

        let listener = tokio::net::TcpListener::bind(&self.addr).await?;
        info!(
            "Server started on {} ({} store)",
            listener.local_addr()?,
            self.keygate.backend_name()
        );

        axum::serve(listener, app).await?;

        Ok(())
    }
}
