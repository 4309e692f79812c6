//! Orbit tracks derived from ring geometry.

use serde::{Deserialize, Serialize};

use crate::config::RingConfig;

/// Index of a track within the ordered track set.
pub type TrackId = usize;

/// One concentric orbit radius a marker can occupy.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Track {
    pub radius: f32,
}

/// Ordered set of concentric tracks, one per ring, innermost first.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TrackSet {
    tracks: Vec<Track>,
}

impl TrackSet {
    /// Derives the track set from ring configurations.
    pub fn from_rings(rings: &[RingConfig]) -> Self {
        Self {
            tracks: rings
                .iter()
                .map(|ring| Track {
                    radius: ring.track_radius(),
                })
                .collect(),
        }
    }

    pub fn len(&self) -> usize {
        self.tracks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tracks.is_empty()
    }

    pub fn get(&self, id: TrackId) -> Option<Track> {
        self.tracks.get(id).copied()
    }

    /// Radius of a track. Out-of-range ids yield 0.0; validated
    /// configurations never produce one.
    pub fn radius(&self, id: TrackId) -> f32 {
        self.tracks.get(id).map_or(0.0, |t| t.radius)
    }

    pub fn iter(&self) -> impl Iterator<Item = &Track> {
        self.tracks.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::HeroConfig;

    #[test]
    fn test_from_rings_center_alignment() {
        let config = HeroConfig::default_classic();
        let tracks = TrackSet::from_rings(&config.rings);

        assert_eq!(tracks.len(), 3);
        // Track radius sits half a stroke inside the ring radius
        assert_eq!(tracks.radius(0), 250.0);
        assert_eq!(tracks.radius(1), 290.0);
        assert_eq!(tracks.radius(2), 340.0);
    }

    #[test]
    fn test_out_of_range_radius() {
        let tracks = TrackSet::from_rings(&HeroConfig::default_classic().rings);
        assert!(tracks.get(9).is_none());
        assert_eq!(tracks.radius(9), 0.0);
    }
}
