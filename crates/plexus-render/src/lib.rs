//! Plexus Render - wgpu renderer for the particle field
//!
//! Backs the simulation core's `Surface` trait with a GPU frame: the
//! [`FrameRecorder`] buffers one tick's draw commands, and the
//! [`FieldPipeline`] uploads and draws them as instanced circle quads
//! plus an alpha-faded line list.

mod context;
mod pipeline;
mod recorder;

pub use context::{RenderContext, RenderError};
pub use pipeline::{FieldPipeline, BACKGROUND};
pub use recorder::{DotInstance, FrameRecorder, LineVertex};
