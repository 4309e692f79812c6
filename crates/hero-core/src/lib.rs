//! Hero Orbit Core Library
//!
//! Animation logic for the atomic-rings landing hero: track allocation with
//! mutual exclusion, rotating ring arcs, and marker kinematics.
//!
//! Rendering is left to the embedding UI, which polls [`HeroStore`] snapshots
//! published by [`HeroEngine`] after each fixed-timestep update.

#![allow(clippy::must_use_candidate)]
#![allow(clippy::missing_panics_doc)]
#![allow(clippy::missing_errors_doc)]
#![allow(clippy::module_name_repetitions)]

pub mod allocator;
pub mod config;
pub mod engine;
pub mod geometry;
pub mod material;
pub mod rotor;
pub mod store;
pub mod track;

pub use allocator::{MarkerId, OrbitAllocator, SwapEvent, SwapPhase};
pub use config::{
    ConfigError, EasingType, HeroConfig, MarkerConfig, RingConfig, SpinDirection,
};
pub use engine::{HERO_DT, HeroEngine, MAX_FRAME_DT};
pub use material::Material;
pub use rotor::RingRotor;
pub use store::{HeroStore, MarkerSnapshot, RingSnapshot};
pub use track::{Track, TrackId, TrackSet};
