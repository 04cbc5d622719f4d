//! Top-level application state.
//!
//! Implements `winit::application::ApplicationHandler` to drive the main
//! event loop. Owns the window, renderer, camera, controls, text buffer and
//! the mesh, and applies asset completions delivered from the runtime.

mod core;
mod event_handler;
mod init;
mod keyboard;
mod pointer;
mod polling;
mod rebuild;
mod render;
mod shutdown;

pub use core::ReliefApp;
