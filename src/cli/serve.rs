use std::sync::Arc;

use crate::{config::Config, error, management::NoopStore, server::start_api_server};

/// Runs the HTTP API with a [`NoopStore`] behind the write actions.
///
/// Exits the process when the server cannot start or stops with an error.
pub async fn serve(config: Arc<Config>) {
    if let Err(e) = start_api_server(config, Arc::new(NoopStore)).await {
        error!("Server stopped. Err: {}", e);
    }
}
