//! Lane selection randomness.
//!
//! The spawner only needs one capability from its random source: produce
//! the next spawn lane. Wrapping that behind [`LaneSource`] keeps the
//! simulation deterministic under test, where a seeded [`rand::rngs::StdRng`]
//! or a scripted stub stands in for the OS-seeded generator.

use rand::Rng;

use crate::runner::Lane;

/// A source of spawn lanes.
pub trait LaneSource {
    /// Returns the lane the next obstacle should spawn on.
    fn next_lane(&mut self) -> Lane;
}

/// A [`LaneSource`] drawing uniformly from the three lanes with any
/// [`rand::Rng`].
pub struct RngLaneSource<R: Rng> {
    rng: R,
}

impl<R: Rng> RngLaneSource<R> {
    pub fn new(rng: R) -> Self {
        Self { rng }
    }
}

impl<R: Rng> LaneSource for RngLaneSource<R> {
    fn next_lane(&mut self) -> Lane {
        match self.rng.random_range(0..3) {
            0 => Lane::Left,
            1 => Lane::Center,
            _ => Lane::Right,
        }
    }
}
