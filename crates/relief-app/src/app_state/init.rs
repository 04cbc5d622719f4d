//! Window creation, renderer initialization, and asset loading kickoff.

use std::sync::mpsc;
use std::sync::Arc;

use winit::event_loop::ActiveEventLoop;
use winit::window::{Fullscreen, WindowAttributes};

use relief_common::Color;
use relief_config::schema::StartupMode;
use relief_renderer::{RenderState, Viewport};

use crate::assets::spawn_asset_loads;

use super::core::ReliefApp;

impl ReliefApp {
    /// Create the window and initialize the GPU renderer.
    /// Returns `false` if initialization failed and the event loop should exit.
    pub(super) fn initialize_window(&mut self, event_loop: &ActiveEventLoop) -> bool {
        let window_config = &self.config.window;
        let attrs = WindowAttributes::default()
            .with_title(window_config.title.clone())
            .with_inner_size(winit::dpi::LogicalSize::new(
                window_config.width as f64,
                window_config.height as f64,
            ));
        let attrs = match window_config.startup_mode {
            StartupMode::Windowed => attrs,
            StartupMode::Maximized => attrs.with_maximized(true),
            StartupMode::Fullscreen => attrs.with_fullscreen(Some(Fullscreen::Borderless(None))),
        };

        let window = match event_loop.create_window(attrs) {
            Ok(w) => Arc::new(w),
            Err(e) => {
                tracing::error!("Failed to create window: {e}");
                return false;
            }
        };

        let inner = window.inner_size();
        self.viewport = Viewport::from_physical(
            inner.width,
            inner.height,
            window.scale_factor(),
            window_config.max_pixel_ratio,
        );
        self.camera.set_aspect(self.viewport.aspect());

        let render_state = pollster::block_on(RenderState::new(
            window.clone(),
            self.viewport.drawing_buffer_size(),
            window_config.vsync,
        ));

        match render_state {
            Ok(mut rs) => {
                match Color::from_hex(&window_config.background) {
                    Some(color) => rs.set_clear_color(&color),
                    None => tracing::warn!(
                        background = %window_config.background,
                        "Invalid background color, using black"
                    ),
                }
                self.render_state = Some(rs);
            }
            Err(e) => {
                tracing::error!("Failed to initialize renderer: {e}");
                return false;
            }
        }

        self.window = Some(window);
        tracing::info!(
            width = self.viewport.size().width,
            height = self.viewport.size().height,
            pixel_ratio = self.viewport.pixel_ratio(),
            "Window created and renderer initialized"
        );

        self.start_asset_loads();
        true
    }

    /// Spin up the runtime and start the font and matcap loads.
    fn start_asset_loads(&mut self) {
        let runtime = match tokio::runtime::Builder::new_multi_thread()
            .worker_threads(1)
            .thread_name("relief-assets")
            .enable_all()
            .build()
        {
            Ok(rt) => rt,
            Err(e) => {
                tracing::error!("Failed to start asset runtime, text will not load: {e}");
                return;
            }
        };

        let (tx, rx) = mpsc::channel();
        spawn_asset_loads(&runtime, &self.config.assets, tx);
        self.asset_rx = Some(rx);
        self.tokio_runtime = Some(runtime);
    }
}
