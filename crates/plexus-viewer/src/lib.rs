//! Plexus Viewer - windowed host for the particle field
//!
//! Exposes [`FieldApp`], the winit application driving the simulation
//! and renderer. The binary in `main.rs` handles CLI parsing, config
//! loading, and the low-end capability gate.

mod app;

pub use app::FieldApp;
