//! Graceful shutdown: stop asset loads, release GPU resources.

use std::time::Duration;

use super::core::ReliefApp;

impl ReliefApp {
    /// Perform graceful shutdown.
    ///
    /// The asset channel goes first so late completions are dropped, then the
    /// runtime, then the GPU resources.
    pub(super) fn shutdown(&mut self) {
        tracing::info!("Initiating graceful shutdown");

        self.asset_rx = None;
        self.debouncer.cancel();

        if let Some(rt) = self.tokio_runtime.take() {
            rt.shutdown_timeout(Duration::from_secs(2));
        }

        self.mesh = None;
        self.render_state = None;

        tracing::info!("Graceful shutdown complete");
    }
}
