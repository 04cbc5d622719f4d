//! Mouse input routed to the orbit controls.

use glam::Vec2;
use winit::dpi::PhysicalPosition;
use winit::event::{ElementState, MouseButton, MouseScrollDelta};

use relief_renderer::PointerButton;

use super::core::ReliefApp;

/// Pixels of trackpad scroll treated as one wheel notch.
const PIXELS_PER_LINE: f64 = 40.0;

fn pointer_button(button: MouseButton) -> Option<PointerButton> {
    match button {
        MouseButton::Left => Some(PointerButton::Left),
        MouseButton::Middle => Some(PointerButton::Middle),
        MouseButton::Right => Some(PointerButton::Right),
        _ => None,
    }
}

impl ReliefApp {
    /// Track the cursor in logical pixels and feed active drags.
    pub(super) fn handle_cursor_moved(&mut self, position: PhysicalPosition<f64>) {
        let scale = self
            .window
            .as_ref()
            .map(|w| w.scale_factor())
            .unwrap_or(1.0);
        let logical = position.to_logical::<f64>(scale);
        self.cursor = Vec2::new(logical.x as f32, logical.y as f32);

        let height = self.viewport.size().height as f32;
        if self
            .controls
            .pointer_move(self.cursor, &mut self.camera, height)
        {
            self.request_redraw();
        }
    }

    pub(super) fn handle_mouse_input(&mut self, state: ElementState, button: MouseButton) {
        let Some(button) = pointer_button(button) else {
            return;
        };
        match state {
            ElementState::Pressed => {
                let shift = self.modifiers.shift_key();
                self.controls.pointer_down(button, self.cursor, shift);
            }
            ElementState::Released => self.controls.pointer_up(),
        }
    }

    pub(super) fn handle_mouse_wheel(&mut self, delta: MouseScrollDelta) {
        let notches = match delta {
            MouseScrollDelta::LineDelta(_, y) => y,
            MouseScrollDelta::PixelDelta(pos) => (pos.y / PIXELS_PER_LINE) as f32,
        };
        self.controls.wheel(notches, &mut self.camera);
        self.request_redraw();
    }
}
