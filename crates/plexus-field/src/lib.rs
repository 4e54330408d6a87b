//! Plexus Field - network-particle background simulation core
//!
//! Owns the drifting-dot field and its update/draw cycle:
//! - Per-frame position integration with reflect-on-contact bounds
//! - O(n²) pairwise proximity links with distance-faded stroke weight
//! - A ~60 Hz acceptance gate over host-supplied frame timestamps
//! - Capability probing for low-end degradation
//!
//! Rendering goes through the [`Surface`] trait so the core stays free of
//! windowing and GPU dependencies.

pub mod capability;
pub mod config;
mod error;
mod pacer;
pub mod particle;
pub mod pointer;
mod rand;
pub mod simulator;
pub mod surface;

pub use capability::DeviceProfile;
pub use config::{Color, FieldConfig};
pub use error::{FieldError, Result};
pub use pacer::FramePacer;
pub use particle::Particle;
pub use pointer::PointerTracker;
pub use rand::FieldRng;
pub use simulator::{link_weight, FieldSimulator, Tick};
pub use surface::{DrawCommand, RecordingSurface, Surface};
