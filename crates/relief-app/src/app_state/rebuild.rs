//! Applying loaded assets and rebuilding the text geometry.

use std::sync::Arc;
use std::time::Instant;

use relief_common::AssetError;
use relief_renderer::{Font, MatcapImage, TextMesh, TextMeshBuilder};

use crate::assets::AssetEvent;

use super::core::ReliefApp;

impl ReliefApp {
    pub(super) fn handle_asset_event(&mut self, event: AssetEvent) {
        match event {
            AssetEvent::Font(result) => self.on_font_loaded(result),
            AssetEvent::Matcap(result) => self.on_matcap_loaded(result),
        }
    }

    /// Create the mesh from the current buffer once the font arrives.
    ///
    /// The first mesh stays at the origin; only rebuilds apply the anchor
    /// offset.
    pub(super) fn on_font_loaded(&mut self, result: Result<Font, AssetError>) {
        let font = match result {
            Ok(font) => font,
            Err(e) => {
                tracing::error!("Font load failed, no text will be shown: {e}");
                return;
            }
        };
        tracing::info!(family = font.family_name(), "Font loaded");

        let builder = TextMeshBuilder::new(Arc::new(font), self.style);
        let geometry = match builder.build(self.text_input.text()) {
            Ok(geometry) => geometry,
            Err(e) => {
                tracing::error!("Initial text geometry failed: {e}");
                self.builder = Some(builder);
                return;
            }
        };

        if let Some(ref mut rs) = self.render_state {
            rs.set_mesh(&geometry);
        }
        tracing::debug!(
            triangles = geometry.triangle_count(),
            width = geometry.bounding_box().width(),
            "Text mesh created"
        );
        self.mesh = Some(TextMesh::new(geometry));
        self.builder = Some(builder);
        self.request_redraw();
    }

    pub(super) fn on_matcap_loaded(&mut self, result: Result<MatcapImage, AssetError>) {
        match result {
            Ok(image) => {
                tracing::info!(
                    width = image.width,
                    height = image.height,
                    "Matcap texture loaded"
                );
                if let Some(ref mut rs) = self.render_state {
                    rs.set_matcap(&image);
                }
                self.request_redraw();
            }
            Err(e) => {
                tracing::error!("Matcap load failed, keeping placeholder: {e}");
            }
        }
    }

    /// Called after every key press that changed the buffer.
    pub(super) fn on_text_changed(&mut self, now: Instant) {
        self.debouncer.cancel();
        if self.debouncer.is_immediate() {
            self.rebuild_text();
        } else {
            self.debouncer.schedule(now);
        }
    }

    /// Rebuild the geometry from the current buffer. No-op until the mesh
    /// exists; on failure the previous geometry stays.
    pub(super) fn rebuild_text(&mut self) {
        let (Some(builder), Some(mesh)) = (self.builder.as_ref(), self.mesh.as_mut()) else {
            return;
        };

        let geometry = match builder.build(self.text_input.text()) {
            Ok(geometry) => geometry,
            Err(e) => {
                tracing::warn!("Text rebuild failed, keeping previous geometry: {e}");
                return;
            }
        };

        if let Some(ref mut rs) = self.render_state {
            rs.set_mesh(&geometry);
        }
        let triangles = geometry.triangle_count();
        let width = geometry.bounding_box().width();
        mesh.replace_geometry(geometry, self.config.text.anchor_factor);
        tracing::debug!(
            triangles,
            width,
            offset = mesh.position.x,
            "Text mesh rebuilt"
        );
        self.request_redraw();
    }
}
