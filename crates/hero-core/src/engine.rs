//! Hero animation engine.
//!
//! Owns the allocator, the ring rotors, and per-marker kinematics, and
//! advances all of them from a single fixed-timestep [`update`] call. Hover
//! and breakpoint events arrive between updates; there are no free-running
//! timers, so dropping the engine cancels everything outstanding.
//!
//! [`update`]: HeroEngine::update

use crate::allocator::{MarkerId, OrbitAllocator, SwapEvent};
use crate::config::{ConfigError, HeroConfig, RingConfig};
use crate::geometry::{arc_path, norm_deg, point_on_ring};
use crate::material::Material;
use crate::rotor::RingRotor;
use crate::store::{HeroStore, MarkerSnapshot, RingSnapshot};
use crate::track::{TrackId, TrackSet};

/// Fixed timestep for the animation (60Hz).
pub const HERO_DT: f32 = 1.0 / 60.0;

/// Upper bound on a single frame delta so a backgrounded host cannot produce
/// a catastrophic jump when frames resume.
pub const MAX_FRAME_DT: f32 = 0.05;

/// Per-marker motion state.
#[derive(Debug, Clone)]
struct MarkerMotion {
    angle_deg: f32,
    /// Seconds until the next reassignment attempt.
    swap_countdown: f32,
}

/// Complete hero animation state.
#[derive(Debug, Clone)]
pub struct HeroEngine {
    config: HeroConfig,
    tracks: TrackSet,
    rotors: Vec<RingRotor>,
    allocator: OrbitAllocator,
    motions: Vec<MarkerMotion>,
}

impl HeroEngine {
    /// Builds an engine from a configuration, validating it first.
    pub fn new(config: HeroConfig) -> Result<Self, ConfigError> {
        config.validate()?;

        let tracks = TrackSet::from_rings(&config.rings);
        let rotors = config.rings.iter().map(RingRotor::from_ring).collect();
        let initial: Vec<TrackId> = config.markers.iter().map(|m| m.initial_track).collect();
        let allocator = OrbitAllocator::new(
            &initial,
            tracks.len(),
            config.swap_pre_delay,
            config.swap_transition,
            config.seed,
        );
        let motions = config
            .markers
            .iter()
            .map(|m| MarkerMotion {
                angle_deg: norm_deg(m.initial_angle_deg),
                swap_countdown: m.swap_interval,
            })
            .collect();

        Ok(Self {
            config,
            tracks,
            rotors,
            allocator,
            motions,
        })
    }

    pub fn config(&self) -> &HeroConfig {
        &self.config
    }

    pub fn tracks(&self) -> &TrackSet {
        &self.tracks
    }

    pub fn allocator(&self) -> &OrbitAllocator {
        &self.allocator
    }

    pub fn marker_count(&self) -> usize {
        self.motions.len()
    }

    /// Current self-rotation angle of a marker, degrees.
    pub fn marker_angle(&self, marker: MarkerId) -> f32 {
        self.motions[marker].angle_deg
    }

    /// Radius the renderer should draw a marker at right now.
    pub fn displayed_radius(&self, marker: MarkerId) -> f32 {
        self.allocator
            .displayed_radius(marker, &self.tracks, self.config.easing)
    }

    /// Advances the animation by `dt` seconds (clamped to [`MAX_FRAME_DT`]).
    /// Returns the track swaps committed during this frame.
    pub fn update(&mut self, dt: f32) -> Vec<SwapEvent> {
        let dt = dt.clamp(0.0, MAX_FRAME_DT);

        for rotor in &mut self.rotors {
            rotor.advance(dt);
        }

        // Marker kinematics. Self-rotation pauses under hover and while the
        // radius is moving; a marker drifting off its ring's coloured arc
        // snaps back to the arc start.
        for (marker, motion) in self.motions.iter_mut().enumerate() {
            if self.allocator.is_hovered(marker) || self.allocator.is_transitioning(marker) {
                continue;
            }
            let speed = 360.0 / self.config.markers[marker].orbit_duration;
            motion.angle_deg = norm_deg(motion.angle_deg + speed * dt);

            if let Some(rotor) = self.rotors.get(self.allocator.track_of(marker)) {
                if !rotor.contains(motion.angle_deg) {
                    motion.angle_deg = rotor.arc_start();
                }
            }
        }

        // Per-marker reassignment cadence. A blocked attempt (hover, mid-swap,
        // nothing free) is simply deferred to the next interval.
        for (marker, motion) in self.motions.iter_mut().enumerate() {
            motion.swap_countdown -= dt;
            if motion.swap_countdown <= 0.0 {
                motion.swap_countdown = self.config.markers[marker].swap_interval;
                self.allocator.tick(marker);
            }
        }

        self.allocator.advance(dt)
    }

    /// Hover-enter/leave from the pointer layer. Idempotent.
    pub fn hover(&mut self, marker: MarkerId, entered: bool) {
        if marker < self.motions.len() {
            self.allocator.set_hovered(marker, entered);
        }
    }

    /// Replaces a marker's reassignment cadence, restarting its countdown
    /// from zero. Non-positive intervals are ignored.
    pub fn set_swap_interval(&mut self, marker: MarkerId, interval: f32) {
        if interval <= 0.0 {
            return;
        }
        let Some(motion) = self.motions.get_mut(marker) else {
            return;
        };
        self.config.markers[marker].swap_interval = interval;
        motion.swap_countdown = interval;
    }

    /// Applies a new ring layout (responsive breakpoint change).
    ///
    /// Every marker is force-assigned under the new track set, cancelling any
    /// in-flight swap: a marker keeps its track index where that track still
    /// exists and is unclaimed, and otherwise takes the first free one.
    /// Rotors restart from their configured start angles.
    pub fn apply_rings(&mut self, rings: Vec<RingConfig>) -> Result<(), ConfigError> {
        if rings.is_empty() {
            return Err(ConfigError::NoRings);
        }
        if self.motions.len() > rings.len() {
            return Err(ConfigError::TooManyMarkers {
                markers: self.motions.len(),
                tracks: rings.len(),
            });
        }
        for ring in &rings {
            if ring.rotor_duration <= 0.0 {
                return Err(ConfigError::NonPositiveDuration {
                    field: "rotor_duration",
                    value: ring.rotor_duration,
                });
            }
            if ring.coverage <= 0.0 || ring.coverage > 1.0 {
                return Err(ConfigError::CoverageOutOfRange(ring.coverage));
            }
        }

        self.tracks = TrackSet::from_rings(&rings);
        self.rotors = rings.iter().map(RingRotor::from_ring).collect();
        self.config.rings = rings;

        let mut taken = vec![false; self.tracks.len()];
        for marker in 0..self.allocator.marker_count() {
            let current = self.allocator.track_of(marker);
            let target = if current < taken.len() && !taken[current] {
                current
            } else {
                (0..taken.len()).find(|&t| !taken[t]).unwrap_or(0)
            };
            taken[target] = true;
            self.allocator.force_assign(marker, target);
        }
        tracing::debug!(
            tracks = self.tracks.len(),
            "applied ring layout, markers reseated"
        );

        Ok(())
    }

    /// Publishes the current render state to a store.
    pub fn publish(&self, store: &HeroStore) {
        let rings = self
            .config
            .rings
            .iter()
            .zip(&self.rotors)
            .map(|(ring, rotor)| RingSnapshot {
                radius: ring.radius,
                stroke_width: ring.stroke_width,
                track_radius: ring.track_radius(),
                arc_start_deg: rotor.arc_start(),
                arc_sweep_deg: rotor.sweep(),
                arc_path: arc_path(
                    ring.track_radius(),
                    rotor.arc_start(),
                    rotor.arc_start() + rotor.sweep(),
                ),
            })
            .collect();

        let markers = self
            .config
            .markers
            .iter()
            .enumerate()
            .map(|(marker, cfg)| {
                let radius = self.displayed_radius(marker);
                let angle_deg = self.motions[marker].angle_deg;
                MarkerSnapshot {
                    label: cfg.label.clone(),
                    letter: cfg.letter,
                    material: Material::by_id(&cfg.material),
                    track: self.allocator.track_of(marker),
                    radius,
                    angle_deg,
                    position: point_on_ring(radius, angle_deg),
                    size: cfg.size,
                    hovered: self.allocator.is_hovered(marker),
                    transitioning: self.allocator.is_transitioning(marker),
                }
            })
            .collect();

        store.publish(rings, markers);
    }
}
