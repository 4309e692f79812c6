//! Hero layout configuration.
//!
//! A configuration lists the concentric rings (each contributing one orbit
//! track) and the markers riding them, plus the global swap timing knobs.
//! Serialized as JSON; every field the designers usually leave alone has a
//! serde default.

use serde::{Deserialize, Serialize};

/// Error type for hero configuration loading and validation.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("configuration JSON error: {0}")]
    Json(#[from] serde_json::Error),
    #[error("at least one ring is required")]
    NoRings,
    #[error("at least one marker is required")]
    NoMarkers,
    #[error("{markers} markers cannot share {tracks} tracks")]
    TooManyMarkers { markers: usize, tracks: usize },
    #[error("marker `{label}` starts on out-of-range track {track}")]
    TrackOutOfRange { label: String, track: usize },
    #[error("markers `{first}` and `{second}` both start on track {track}")]
    DuplicateInitialTrack {
        first: String,
        second: String,
        track: usize,
    },
    #[error("marker label `{label}` is not unique")]
    DuplicateLabel { label: String },
    #[error("{field} must be positive, got {value}")]
    NonPositiveDuration { field: &'static str, value: f32 },
    #[error("arc coverage must be within (0, 1], got {0}")]
    CoverageOutOfRange(f32),
}

/// Rotation direction for a ring's coloured arc.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "snake_case")]
pub enum SpinDirection {
    #[default]
    Clockwise,
    Counterclockwise,
}

impl SpinDirection {
    /// Sign applied to angular speed (clockwise is positive in top-origin
    /// degrees).
    pub fn signum(self) -> f32 {
        match self {
            Self::Clockwise => 1.0,
            Self::Counterclockwise => -1.0,
        }
    }
}

/// Easing type for radius transitions.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "snake_case")]
pub enum EasingType {
    Linear,
    EaseIn,
    EaseOut,
    #[default]
    EaseInOut,
}

impl EasingType {
    /// Applies the easing function to a normalized time value (0.0 to 1.0).
    pub fn apply(self, t: f32) -> f32 {
        let t = t.clamp(0.0, 1.0);
        match self {
            Self::Linear => t,
            Self::EaseIn => t * t,
            Self::EaseOut => t * (2.0 - t),
            Self::EaseInOut => {
                if t < 0.5 {
                    2.0 * t * t
                } else {
                    -1.0 + (4.0 - 2.0 * t) * t
                }
            }
        }
    }
}

/// One concentric ring. Each ring contributes one orbit track whose radius is
/// the ring radius minus half the stroke width, so a marker riding the track
/// center-aligns on the ring stroke.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RingConfig {
    pub radius: f32,
    #[serde(default = "default_stroke_width")]
    pub stroke_width: f32,
    /// Start angle of the coloured arc before any rotation, degrees.
    #[serde(default)]
    pub rotor_start_deg: f32,
    /// Seconds per full arc revolution.
    #[serde(default = "default_rotor_duration")]
    pub rotor_duration: f32,
    #[serde(default)]
    pub rotor_direction: SpinDirection,
    /// Fraction of the circumference covered by the coloured arc.
    #[serde(default = "default_coverage")]
    pub coverage: f32,
}

impl RingConfig {
    /// Orbit track radius derived from the ring geometry.
    pub fn track_radius(&self) -> f32 {
        self.radius - self.stroke_width / 2.0
    }

    /// Angular extent of the coloured arc, degrees.
    pub fn sweep_deg(&self) -> f32 {
        360.0 * self.coverage
    }
}

fn default_stroke_width() -> f32 {
    20.0
}

fn default_rotor_duration() -> f32 {
    18.0
}

fn default_coverage() -> f32 {
    0.65
}

/// One orbiting marker.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MarkerConfig {
    /// Tooltip label, unique within the marker set.
    pub label: String,
    /// Single letter rendered inside the marker.
    pub letter: char,
    /// Material id resolved against [`crate::material::Material`].
    #[serde(default = "default_material")]
    pub material: String,
    /// Seconds per full self-rotation lap around the track.
    #[serde(default = "default_orbit_duration")]
    pub orbit_duration: f32,
    #[serde(default)]
    pub initial_angle_deg: f32,
    /// Seconds between reassignment attempts. Staggered per marker so swaps
    /// never look synchronized.
    #[serde(default = "default_swap_interval")]
    pub swap_interval: f32,
    /// Rendered diameter in pixels.
    #[serde(default = "default_marker_size")]
    pub size: f32,
    /// Track occupied at startup.
    pub initial_track: usize,
}

fn default_material() -> String {
    "library".to_string()
}

fn default_orbit_duration() -> f32 {
    20.0
}

fn default_swap_interval() -> f32 {
    25.0
}

fn default_marker_size() -> f32 {
    48.0
}

/// Complete hero configuration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HeroConfig {
    pub rings: Vec<RingConfig>,
    pub markers: Vec<MarkerConfig>,
    /// Pause between scheduling a swap and committing it, seconds.
    #[serde(default = "default_pre_delay")]
    pub swap_pre_delay: f32,
    /// Radius interpolation window, seconds.
    #[serde(default = "default_transition")]
    pub swap_transition: f32,
    #[serde(default)]
    pub easing: EasingType,
    /// Seed for the reassignment RNG.
    #[serde(default = "default_seed")]
    pub seed: u64,
}

fn default_pre_delay() -> f32 {
    0.25
}

fn default_transition() -> f32 {
    1.2
}

fn default_seed() -> u64 {
    0x5a4a
}

impl HeroConfig {
    /// The three-ring layout shipped on the landing page. Three markers over
    /// three tracks: saturated, so periodic reassignment never finds a free
    /// target and the layout stays fixed.
    pub fn default_classic() -> Self {
        Self {
            rings: vec![
                RingConfig {
                    radius: 260.0,
                    stroke_width: 20.0,
                    rotor_start_deg: -36.0,
                    rotor_duration: 14.0,
                    rotor_direction: SpinDirection::Clockwise,
                    coverage: 0.65,
                },
                RingConfig {
                    radius: 300.0,
                    stroke_width: 20.0,
                    rotor_start_deg: 12.0,
                    rotor_duration: 18.0,
                    rotor_direction: SpinDirection::Counterclockwise,
                    coverage: 0.65,
                },
                RingConfig {
                    radius: 350.0,
                    stroke_width: 20.0,
                    rotor_start_deg: -18.0,
                    rotor_duration: 22.0,
                    rotor_direction: SpinDirection::Clockwise,
                    coverage: 0.65,
                },
            ],
            markers: vec![
                MarkerConfig {
                    label: "Social Media".to_string(),
                    letter: 'S',
                    material: "social".to_string(),
                    orbit_duration: 16.0,
                    initial_angle_deg: 0.0,
                    swap_interval: 34.0,
                    size: 48.0,
                    initial_track: 0,
                },
                MarkerConfig {
                    label: "Authors".to_string(),
                    letter: 'A',
                    material: "author".to_string(),
                    orbit_duration: 20.0,
                    initial_angle_deg: 120.0,
                    swap_interval: 27.0,
                    size: 48.0,
                    initial_track: 1,
                },
                MarkerConfig {
                    label: "Library".to_string(),
                    letter: 'L',
                    material: "library".to_string(),
                    orbit_duration: 24.0,
                    initial_angle_deg: 240.0,
                    swap_interval: 20.0,
                    size: 48.0,
                    initial_track: 2,
                },
            ],
            swap_pre_delay: default_pre_delay(),
            swap_transition: default_transition(),
            easing: EasingType::default(),
            seed: default_seed(),
        }
    }

    /// Wide-breakpoint layout: the classic markers over four rings, leaving a
    /// spare track so reassignment actually fires.
    pub fn default_wide() -> Self {
        let mut config = Self::default_classic();
        config.rings.push(RingConfig {
            radius: 410.0,
            stroke_width: 20.0,
            rotor_start_deg: 30.0,
            rotor_duration: 26.0,
            rotor_direction: SpinDirection::Counterclockwise,
            coverage: 0.65,
        });
        config
    }

    /// Parses a configuration from JSON and validates it.
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        let config: Self = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    /// Checks structural invariants the engine relies on.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.rings.is_empty() {
            return Err(ConfigError::NoRings);
        }
        if self.markers.is_empty() {
            return Err(ConfigError::NoMarkers);
        }
        if self.markers.len() > self.rings.len() {
            return Err(ConfigError::TooManyMarkers {
                markers: self.markers.len(),
                tracks: self.rings.len(),
            });
        }

        for ring in &self.rings {
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

        if self.swap_pre_delay <= 0.0 {
            return Err(ConfigError::NonPositiveDuration {
                field: "swap_pre_delay",
                value: self.swap_pre_delay,
            });
        }
        if self.swap_transition <= 0.0 {
            return Err(ConfigError::NonPositiveDuration {
                field: "swap_transition",
                value: self.swap_transition,
            });
        }

        for (i, marker) in self.markers.iter().enumerate() {
            if marker.orbit_duration <= 0.0 {
                return Err(ConfigError::NonPositiveDuration {
                    field: "orbit_duration",
                    value: marker.orbit_duration,
                });
            }
            if marker.swap_interval <= 0.0 {
                return Err(ConfigError::NonPositiveDuration {
                    field: "swap_interval",
                    value: marker.swap_interval,
                });
            }
            if marker.initial_track >= self.rings.len() {
                return Err(ConfigError::TrackOutOfRange {
                    label: marker.label.clone(),
                    track: marker.initial_track,
                });
            }
            for other in &self.markers[..i] {
                if other.label == marker.label {
                    return Err(ConfigError::DuplicateLabel {
                        label: marker.label.clone(),
                    });
                }
                if other.initial_track == marker.initial_track {
                    return Err(ConfigError::DuplicateInitialTrack {
                        first: other.label.clone(),
                        second: marker.label.clone(),
                        track: marker.initial_track,
                    });
                }
            }
        }

        Ok(())
    }
}
