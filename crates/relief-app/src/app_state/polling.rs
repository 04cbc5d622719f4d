//! Per-iteration polling: asset completions, pending rebuilds, and
//! scheduling the next wake-up.

use std::time::Instant;

use winit::event_loop::{ActiveEventLoop, ControlFlow};

use super::core::ReliefApp;

impl ReliefApp {
    /// Run polling and schedule the next wake-up.
    ///
    /// The scene redraws continuously while the window exists so damping
    /// keeps playing out; without a window the loop only wakes for a pending
    /// rebuild.
    pub(super) fn poll_and_schedule(&mut self, event_loop: &ActiveEventLoop) {
        let now = Instant::now();
        self.poll_assets();
        self.poll_debounce(now);

        if self.window.is_some() {
            event_loop.set_control_flow(ControlFlow::Poll);
        } else if let Some(deadline) = self.debouncer.deadline() {
            event_loop.set_control_flow(ControlFlow::WaitUntil(deadline));
        } else {
            event_loop.set_control_flow(ControlFlow::Wait);
        }
    }

    /// Apply every asset completion received since the last poll.
    pub(super) fn poll_assets(&mut self) {
        let mut events = Vec::new();
        if let Some(ref rx) = self.asset_rx {
            while let Ok(ev) = rx.try_recv() {
                events.push(ev);
            }
        }
        for ev in events {
            self.handle_asset_event(ev);
        }
    }

    /// Fire the pending rebuild if its deadline has passed.
    pub(super) fn poll_debounce(&mut self, now: Instant) -> bool {
        if self.debouncer.poll(now) {
            self.rebuild_text();
            true
        } else {
            false
        }
    }
}
