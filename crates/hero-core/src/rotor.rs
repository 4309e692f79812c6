//! Rotating coloured arcs riding each ring.
//!
//! Each ring shows a single arc covering part of its circumference, rotating
//! continuously. Markers must stay on the coloured arc; the engine snaps a
//! marker back to the arc start when its angle drifts into the blank span.

use crate::config::RingConfig;
use crate::geometry::{in_arc_interval, norm_deg};

/// Rotation state of one ring's coloured arc.
#[derive(Debug, Clone, PartialEq)]
pub struct RingRotor {
    start_deg: f32,
    sweep_deg: f32,
    /// Signed angular speed in degrees per second.
    speed: f32,
    angle: f32,
}

impl RingRotor {
    /// Builds a rotor from its ring configuration.
    pub fn from_ring(ring: &RingConfig) -> Self {
        Self {
            start_deg: ring.rotor_start_deg,
            sweep_deg: ring.sweep_deg(),
            speed: (360.0 / ring.rotor_duration) * ring.rotor_direction.signum(),
            angle: 0.0,
        }
    }

    /// Advances the arc rotation by `dt` seconds.
    pub fn advance(&mut self, dt: f32) {
        self.angle = norm_deg(self.angle + self.speed * dt);
    }

    /// Accumulated rotation, degrees in `[0, 360)`.
    pub fn angle(&self) -> f32 {
        self.angle
    }

    /// Current start angle of the coloured arc.
    pub fn arc_start(&self) -> f32 {
        norm_deg(self.start_deg + self.angle)
    }

    /// Current end angle of the coloured arc.
    pub fn arc_end(&self) -> f32 {
        norm_deg(self.arc_start() + self.sweep_deg)
    }

    /// Angular extent of the coloured arc, degrees.
    pub fn sweep(&self) -> f32 {
        self.sweep_deg
    }

    /// True if a top-origin angle lies on the coloured arc.
    pub fn contains(&self, deg: f32) -> bool {
        in_arc_interval(deg, self.arc_start(), self.arc_end())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::SpinDirection;

    fn ring(start: f32, duration: f32, direction: SpinDirection) -> RingConfig {
        RingConfig {
            radius: 300.0,
            stroke_width: 20.0,
            rotor_start_deg: start,
            rotor_duration: duration,
            rotor_direction: direction,
            coverage: 0.65,
        }
    }

    #[test]
    fn test_advance_clockwise() {
        let mut rotor = RingRotor::from_ring(&ring(0.0, 18.0, SpinDirection::Clockwise));
        rotor.advance(1.0);
        assert!((rotor.angle() - 20.0).abs() < 1e-3);
    }

    #[test]
    fn test_advance_counterclockwise_wraps() {
        let mut rotor = RingRotor::from_ring(&ring(0.0, 18.0, SpinDirection::Counterclockwise));
        rotor.advance(1.0);
        assert!((rotor.angle() - 340.0).abs() < 1e-3);
    }

    #[test]
    fn test_arc_span_tracks_rotation() {
        let mut rotor = RingRotor::from_ring(&ring(-18.0, 22.0, SpinDirection::Clockwise));
        let start0 = rotor.arc_start();
        rotor.advance(11.0);
        // Half a revolution later the arc start has moved 180°
        assert!((rotor.arc_start() - norm_deg(start0 + 180.0)).abs() < 1e-2);
        assert!((rotor.sweep() - 234.0).abs() < 1e-3);
    }

    #[test]
    fn test_contains_wraps() {
        // Arc [300, 174] after normalization: sweep 234° starting at 300°
        let mut rotor = RingRotor::from_ring(&ring(300.0, 18.0, SpinDirection::Clockwise));
        assert!(rotor.contains(350.0));
        assert!(rotor.contains(100.0));
        assert!(!rotor.contains(250.0));

        rotor.advance(0.0);
        assert!(rotor.contains(rotor.arc_start()));
        assert!(rotor.contains(rotor.arc_end()));
    }
}
