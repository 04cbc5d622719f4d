//! ReliefApp struct definition and constructor.

use std::sync::mpsc::Receiver;
use std::sync::Arc;
use std::time::Duration;

use glam::Vec2;
use winit::window::Window;

use relief_common::LogicalSize;
use relief_config::ReliefConfig;
use relief_platform::{Debouncer, TextInput};
use relief_renderer::{
    OrbitControls, PerspectiveCamera, RenderState, TextMesh, TextMeshBuilder, TextStyle, Viewport,
};

use crate::assets::AssetEvent;

/// Top-level application state.
pub struct ReliefApp {
    pub(super) config: ReliefConfig,

    // Windowing
    pub(super) window: Option<Arc<Window>>,
    pub(super) render_state: Option<RenderState>,
    pub(super) viewport: Viewport,

    // Scene
    pub(super) camera: PerspectiveCamera,
    pub(super) controls: OrbitControls,
    pub(super) style: TextStyle,
    pub(super) builder: Option<TextMeshBuilder>,
    pub(super) mesh: Option<TextMesh>,

    // Text editing
    pub(super) text_input: TextInput,
    pub(super) debouncer: Debouncer,

    // Input tracking (winit sends these separately)
    pub(super) modifiers: winit::keyboard::ModifiersState,
    pub(super) cursor: Vec2,

    // Asset loading
    pub(super) tokio_runtime: Option<tokio::runtime::Runtime>,
    pub(super) asset_rx: Option<Receiver<AssetEvent>>,
}

impl ReliefApp {
    pub fn new(config: ReliefConfig) -> Self {
        let viewport = Viewport::new(
            LogicalSize::new(config.window.width as f64, config.window.height as f64),
            1.0,
            config.window.max_pixel_ratio,
        );
        let camera = PerspectiveCamera::from_config(&config.camera, viewport.aspect());
        let controls = OrbitControls::from_config(&config.controls);
        let style = TextStyle::from(&config.text);
        let text_input = TextInput::new(&config.text.initial);
        let debouncer = Debouncer::new(Duration::from_millis(config.input.debounce_ms));

        Self {
            config,
            window: None,
            render_state: None,
            viewport,
            camera,
            controls,
            style,
            builder: None,
            mesh: None,
            text_input,
            debouncer,
            modifiers: winit::keyboard::ModifiersState::empty(),
            cursor: Vec2::ZERO,
            tokio_runtime: None,
            asset_rx: None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_app_starts_in_placeholder_mode_without_mesh() {
        let app = ReliefApp::new(ReliefConfig::default());
        assert_eq!(app.text_input.text(), "This is Three.js");
        assert!(app.mesh.is_none());
        assert!(app.builder.is_none());
        assert!(app.render_state.is_none());
        assert!(!app.debouncer.is_pending());
    }

    #[test]
    fn camera_aspect_follows_configured_window() {
        let app = ReliefApp::new(ReliefConfig::default());
        assert!((app.camera.aspect - 1280.0 / 800.0).abs() < 1e-6);
    }
}
