//! Orbit allocation with mutual exclusion over the track set.
//!
//! Each marker owns exactly one track at a time. A reassignment proposes a
//! move to a different, currently-unoccupied track; the move commits when its
//! pre-delay expires and the displayed radius then interpolates over the
//! transition window. All countdowns advance from a single [`advance`] entry
//! point, so dropping the allocator cancels everything outstanding.
//!
//! [`advance`]: OrbitAllocator::advance

use rand::prelude::*;
use rand_chacha::ChaCha8Rng;
use serde::{Deserialize, Serialize};

use crate::config::EasingType;
use crate::track::{TrackId, TrackSet};

/// Index of a marker within the fixed marker set.
pub type MarkerId = usize;

/// Swap phase for a single marker.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize, Default)]
#[serde(tag = "state", rename_all = "snake_case")]
pub enum SwapPhase {
    /// Marker sits on its assigned track, orbiting normally.
    #[default]
    Idle,
    /// A target track has been chosen; the swap commits when the pre-delay
    /// runs out.
    PendingSwap { target: TrackId, remaining: f32 },
    /// The displayed radius is interpolating from the previous track to the
    /// committed one.
    Transitioning { from: TrackId, elapsed: f32 },
}

/// A committed track reassignment.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SwapEvent {
    pub marker: MarkerId,
    pub from: TrackId,
    pub to: TrackId,
}

/// Allocates markers across tracks, at most one marker per track.
///
/// The occupancy map is the sole shared state; markers affect each other only
/// through it. All mutation goes through [`tick`], [`advance`],
/// [`force_assign`], and [`set_hovered`].
///
/// [`tick`]: OrbitAllocator::tick
/// [`advance`]: OrbitAllocator::advance
/// [`force_assign`]: OrbitAllocator::force_assign
/// [`set_hovered`]: OrbitAllocator::set_hovered
#[derive(Debug, Clone)]
pub struct OrbitAllocator {
    occupancy: Vec<TrackId>,
    phases: Vec<SwapPhase>,
    hovered: Vec<bool>,
    track_count: usize,
    pre_delay: f32,
    transition: f32,
    rng: ChaCha8Rng,
}

impl OrbitAllocator {
    /// Creates an allocator with the given initial assignment.
    ///
    /// Callers validate the assignment first (in-range, duplicate-free, no
    /// more markers than tracks); [`crate::config::HeroConfig::validate`]
    /// covers the configuration path.
    pub fn new(
        initial: &[TrackId],
        track_count: usize,
        pre_delay: f32,
        transition: f32,
        seed: u64,
    ) -> Self {
        Self {
            occupancy: initial.to_vec(),
            phases: vec![SwapPhase::Idle; initial.len()],
            hovered: vec![false; initial.len()],
            track_count,
            pre_delay,
            transition,
            rng: ChaCha8Rng::seed_from_u64(seed),
        }
    }

    pub fn marker_count(&self) -> usize {
        self.occupancy.len()
    }

    pub fn track_count(&self) -> usize {
        self.track_count
    }

    /// The live occupancy map, marker index to track.
    pub fn occupancy(&self) -> &[TrackId] {
        &self.occupancy
    }

    /// Track currently assigned to a marker.
    pub fn track_of(&self, marker: MarkerId) -> TrackId {
        self.occupancy[marker]
    }

    pub fn phase(&self, marker: MarkerId) -> SwapPhase {
        self.phases[marker]
    }

    pub fn is_hovered(&self, marker: MarkerId) -> bool {
        self.hovered[marker]
    }

    pub fn is_transitioning(&self, marker: MarkerId) -> bool {
        matches!(self.phases[marker], SwapPhase::Transitioning { .. })
    }

    /// Tracks a marker may legally occupy right now: its own track plus every
    /// track not assigned to any other marker. Recomputed from the live map
    /// on every call, so in-flight commits are always reflected.
    pub fn available_tracks(&self, marker: MarkerId) -> Vec<TrackId> {
        (0..self.track_count)
            .filter(|&t| {
                t == self.occupancy[marker]
                    || !self
                        .occupancy
                        .iter()
                        .enumerate()
                        .any(|(other, &held)| other != marker && held == t)
            })
            .collect()
    }

    /// Reassignment attempt for one marker, invoked on its cadence.
    ///
    /// No-ops (returning false) when fewer than two tracks exist, the marker
    /// is hovered or mid-swap, or no other track is free. Otherwise picks a
    /// target uniformly at random and enters the pre-delay.
    pub fn tick(&mut self, marker: MarkerId) -> bool {
        if self.track_count < 2 {
            return false;
        }
        if self.hovered[marker] || self.phases[marker] != SwapPhase::Idle {
            return false;
        }

        let current = self.occupancy[marker];
        let candidates: Vec<TrackId> = self
            .available_tracks(marker)
            .into_iter()
            .filter(|&t| t != current)
            .collect();
        if candidates.is_empty() {
            return false;
        }

        let target = candidates[self.rng.random_range(0..candidates.len())];
        self.phases[marker] = SwapPhase::PendingSwap {
            target,
            remaining: self.pre_delay,
        };
        tracing::debug!(marker, from = current, to = target, "scheduled track swap");
        true
    }

    /// Advances all pending and transitioning swaps by `dt` seconds.
    /// Returns the swaps that committed during this step.
    pub fn advance(&mut self, dt: f32) -> Vec<SwapEvent> {
        let mut committed = Vec::new();

        for marker in 0..self.phases.len() {
            match self.phases[marker] {
                SwapPhase::Idle => {}
                SwapPhase::PendingSwap { target, remaining } => {
                    let remaining = remaining - dt;
                    if remaining > 0.0 {
                        self.phases[marker] = SwapPhase::PendingSwap { target, remaining };
                        continue;
                    }
                    // Commit against the live map: another marker may have
                    // claimed the target during the pre-delay.
                    let taken = self
                        .occupancy
                        .iter()
                        .enumerate()
                        .any(|(other, &held)| other != marker && held == target);
                    if taken {
                        self.phases[marker] = SwapPhase::Idle;
                        tracing::debug!(marker, to = target, "swap target taken, dropping");
                        continue;
                    }
                    let from = self.occupancy[marker];
                    self.occupancy[marker] = target;
                    self.phases[marker] = SwapPhase::Transitioning { from, elapsed: 0.0 };
                    committed.push(SwapEvent {
                        marker,
                        from,
                        to: target,
                    });
                    tracing::debug!(marker, from, to = target, "committed track swap");
                }
                SwapPhase::Transitioning { from, elapsed } => {
                    let elapsed = elapsed + dt;
                    self.phases[marker] = if elapsed >= self.transition {
                        SwapPhase::Idle
                    } else {
                        SwapPhase::Transitioning { from, elapsed }
                    };
                }
            }
        }

        committed
    }

    /// Hover flag from the pointer layer. Idempotent; blocks new swaps but
    /// never interrupts one already in flight.
    pub fn set_hovered(&mut self, marker: MarkerId, hovered: bool) {
        self.hovered[marker] = hovered;
    }

    /// Force-sets a marker's track, bypassing the swap machinery. Any
    /// in-flight pre-delay or transition for that marker is cancelled.
    pub fn force_assign(&mut self, marker: MarkerId, track: TrackId) {
        self.occupancy[marker] = track;
        self.phases[marker] = SwapPhase::Idle;
    }

    /// Radius to render for a marker: the assigned track's radius, eased
    /// between the old and new radii while a transition is in flight.
    pub fn displayed_radius(
        &self,
        marker: MarkerId,
        tracks: &TrackSet,
        easing: EasingType,
    ) -> f32 {
        let to = tracks.radius(self.occupancy[marker]);
        match self.phases[marker] {
            SwapPhase::Transitioning { from, elapsed } => {
                let t = if self.transition > 0.0 {
                    (elapsed / self.transition).clamp(0.0, 1.0)
                } else {
                    1.0
                };
                let from = tracks.radius(from);
                from + (to - from) * easing.apply(t)
            }
            _ => to,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::HeroConfig;
    use crate::track::TrackSet;

    fn setup(initial: &[TrackId], track_count: usize) -> OrbitAllocator {
        OrbitAllocator::new(initial, track_count, 0.25, 1.2, 42)
    }

    fn assert_exclusive(allocator: &OrbitAllocator) {
        let occupancy = allocator.occupancy();
        for (i, &a) in occupancy.iter().enumerate() {
            for &b in &occupancy[..i] {
                assert_ne!(a, b, "two markers share track {a}");
            }
        }
    }

    #[test]
    fn test_availability_includes_own_excludes_others() {
        let allocator = setup(&[0, 1, 2], 4);

        let available = allocator.available_tracks(0);
        assert!(available.contains(&0));
        assert!(!available.contains(&1));
        assert!(!available.contains(&2));
        assert!(available.contains(&3));
    }

    #[test]
    fn test_saturated_never_swaps() {
        // Three markers over three tracks: every other track is held, so the
        // candidate set is always empty.
        let mut allocator = setup(&[0, 1, 2], 3);

        for _ in 0..100 {
            for marker in 0..3 {
                assert!(!allocator.tick(marker));
            }
            assert!(allocator.advance(0.1).is_empty());
        }
        assert_eq!(allocator.occupancy(), &[0, 1, 2]);
    }

    #[test]
    fn test_single_track_noop() {
        let mut allocator = setup(&[0], 1);
        assert!(!allocator.tick(0));
        assert_eq!(allocator.phase(0), SwapPhase::Idle);
    }

    #[test]
    fn test_spare_track_swap_lifecycle() {
        let mut allocator = setup(&[0, 1, 2], 4);

        // Only track 3 is free, so the pick is forced.
        assert!(allocator.tick(0));
        assert!(matches!(
            allocator.phase(0),
            SwapPhase::PendingSwap { target: 3, .. }
        ));
        // Occupancy unchanged until the pre-delay expires
        assert_eq!(allocator.track_of(0), 0);

        let events = allocator.advance(0.3);
        assert_eq!(
            events,
            vec![SwapEvent {
                marker: 0,
                from: 0,
                to: 3
            }]
        );
        assert_eq!(allocator.track_of(0), 3);
        assert!(allocator.is_transitioning(0));
        assert_exclusive(&allocator);

        // Freed track 0 is immediately visible to other markers
        assert!(allocator.available_tracks(1).contains(&0));

        // Transition runs out and the marker settles
        allocator.advance(1.3);
        assert_eq!(allocator.phase(0), SwapPhase::Idle);
    }

    #[test]
    fn test_tick_while_pending_noop() {
        let mut allocator = setup(&[0, 1, 2], 4);

        assert!(allocator.tick(0));
        assert!(!allocator.tick(0));
    }

    #[test]
    fn test_hover_blocks_tick() {
        let mut allocator = setup(&[0, 1, 2], 4);

        allocator.set_hovered(0, true);
        // Idempotent: a second enter changes nothing
        allocator.set_hovered(0, true);
        assert!(!allocator.tick(0));
        assert_eq!(allocator.track_of(0), 0);

        allocator.set_hovered(0, false);
        allocator.set_hovered(0, false);
        assert!(allocator.tick(0));
    }

    #[test]
    fn test_hover_does_not_interrupt_transition() {
        let mut allocator = setup(&[0, 1, 2], 4);

        allocator.tick(0);
        allocator.advance(0.3);
        assert!(allocator.is_transitioning(0));

        allocator.set_hovered(0, true);
        allocator.advance(1.3);
        assert_eq!(allocator.phase(0), SwapPhase::Idle);
        assert_eq!(allocator.track_of(0), 3);
    }

    #[test]
    fn test_force_assign_cancels_in_flight() {
        let mut allocator = setup(&[0, 1, 2], 4);

        allocator.tick(0);
        assert!(matches!(allocator.phase(0), SwapPhase::PendingSwap { .. }));

        allocator.force_assign(0, 0);
        assert_eq!(allocator.phase(0), SwapPhase::Idle);
        assert_eq!(allocator.track_of(0), 0);
        // The cancelled swap never commits
        assert!(allocator.advance(5.0).is_empty());
    }

    #[test]
    fn test_commit_rechecks_live_map() {
        // Two markers, one spare track: both tick before either commits, so
        // both pend on track 2. The second commit must see the first and drop.
        let mut allocator = setup(&[0, 1], 3);

        assert!(allocator.tick(0));
        assert!(allocator.tick(1));

        let events = allocator.advance(0.3);
        assert_eq!(events.len(), 1);
        assert_exclusive(&allocator);

        // The loser returned to Idle on its old track
        let loser = 1 - events[0].marker;
        assert_eq!(allocator.phase(loser), SwapPhase::Idle);
        assert_eq!(allocator.track_of(loser), loser);
    }

    #[test]
    fn test_mutual_exclusion_under_churn() {
        let mut allocator = setup(&[0, 1, 2], 5);

        for round in 0..500 {
            let marker = round % 3;
            allocator.tick(marker);
            allocator.advance(0.05);
            assert_exclusive(&allocator);

            let available = allocator.available_tracks(marker);
            assert!(available.contains(&allocator.track_of(marker)));
            for other in 0..3 {
                if other != marker {
                    assert!(!available.contains(&allocator.track_of(other)));
                }
            }
        }
    }

    #[test]
    fn test_deterministic_with_seed() {
        let mut a = OrbitAllocator::new(&[0, 1, 2], 5, 0.25, 1.2, 7);
        let mut b = OrbitAllocator::new(&[0, 1, 2], 5, 0.25, 1.2, 7);

        for round in 0..200 {
            let marker = round % 3;
            a.tick(marker);
            b.tick(marker);
            a.advance(0.1);
            b.advance(0.1);
            assert_eq!(a.occupancy(), b.occupancy());
        }
    }

    #[test]
    fn test_displayed_radius_eases_between_tracks() {
        let config = HeroConfig::default_wide();
        let tracks = TrackSet::from_rings(&config.rings);
        let mut allocator = OrbitAllocator::new(&[0, 1, 2], 4, 0.25, 1.0, 42);

        allocator.tick(0);
        allocator.advance(0.25);
        assert_eq!(allocator.track_of(0), 3);

        // At the start of the transition the marker still renders at its old
        // radius even though the map has committed.
        let start = allocator.displayed_radius(0, &tracks, EasingType::Linear);
        assert!((start - tracks.radius(0)).abs() < 1.0);

        allocator.advance(0.5);
        let mid = allocator.displayed_radius(0, &tracks, EasingType::Linear);
        let expected = tracks.radius(0) + (tracks.radius(3) - tracks.radius(0)) * 0.5;
        assert!((mid - expected).abs() < 1.0);

        allocator.advance(0.6);
        let settled = allocator.displayed_radius(0, &tracks, EasingType::Linear);
        assert!((settled - tracks.radius(3)).abs() < 1e-3);
    }
}
