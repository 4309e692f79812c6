//! Shared render-state store for engine-to-renderer handoff.
//!
//! The engine publishes a full snapshot after each update; the renderer polls
//! and compares versions to decide whether anything changed. Keeps the
//! renderer from ever borrowing the engine.

use parking_lot::RwLock;
use serde::{Deserialize, Serialize};

use crate::material::Material;

/// Render state for one ring.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RingSnapshot {
    pub radius: f32,
    pub stroke_width: f32,
    pub track_radius: f32,
    pub arc_start_deg: f32,
    pub arc_sweep_deg: f32,
    /// SVG path data for the coloured arc at its current rotation.
    pub arc_path: String,
}

/// Render state for one marker.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MarkerSnapshot {
    pub label: String,
    pub letter: char,
    pub material: Material,
    pub track: usize,
    /// Displayed orbit radius, eased mid-transition.
    pub radius: f32,
    pub angle_deg: f32,
    /// Position on the ring plane derived from radius and angle.
    pub position: [f32; 2],
    pub size: f32,
    /// Renderer suspends the self-rotation animation while set.
    pub hovered: bool,
    /// Renderer applies the swap fade while set.
    pub transitioning: bool,
}

/// Store polled by the renderer.
#[derive(Debug, Default)]
pub struct HeroStore {
    rings: RwLock<Vec<RingSnapshot>>,
    markers: RwLock<Vec<MarkerSnapshot>>,
    version: RwLock<u64>,
}

impl HeroStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn rings(&self) -> Vec<RingSnapshot> {
        self.rings.read().clone()
    }

    pub fn markers(&self) -> Vec<MarkerSnapshot> {
        self.markers.read().clone()
    }

    pub fn version(&self) -> u64 {
        *self.version.read()
    }

    /// Replaces the published state and bumps the version.
    pub fn publish(&self, rings: Vec<RingSnapshot>, markers: Vec<MarkerSnapshot>) {
        *self.rings.write() = rings;
        *self.markers.write() = markers;
        *self.version.write() += 1;
    }
}
