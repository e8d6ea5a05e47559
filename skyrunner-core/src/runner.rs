//! The lane-runner simulation.
//!
//! [`LaneRunner`] owns the player state and the obstacle list and advances
//! both once per rendered frame. The host loop supplies the elapsed time
//! and an [`InputSnapshot`]; after [`LaneRunner::advance`] returns, the
//! renderer reads the player position and the obstacle list and draws only
//! the active obstacles.

use glam::{Vec3, vec3};

use crate::input::InputSnapshot;
use crate::random::LaneSource;

/// One of the three fixed lateral positions a player or obstacle occupies.
#[derive(Debug, Clone, Copy, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub enum Lane {
    Left,
    Center,
    Right,
}

impl Lane {
    /// World-space X coordinate of this lane for the given lane width.
    pub fn offset_x(self, lane_width: f32) -> f32 {
        match self {
            Lane::Left => -lane_width,
            Lane::Center => 0.0,
            Lane::Right => lane_width,
        }
    }

    /// The lane one step to the left, saturating at [`Lane::Left`].
    pub fn shifted_left(self) -> Lane {
        match self {
            Lane::Left => Lane::Left,
            Lane::Center => Lane::Left,
            Lane::Right => Lane::Center,
        }
    }

    /// The lane one step to the right, saturating at [`Lane::Right`].
    pub fn shifted_right(self) -> Lane {
        match self {
            Lane::Left => Lane::Center,
            Lane::Center => Lane::Right,
            Lane::Right => Lane::Right,
        }
    }
}

/// Tuning constants for the lane runner.
///
/// Values are taken as-is; degenerate settings (for example
/// `max_obstacles = 0`) produce an obstacle-free run rather than an error.
#[derive(Debug, Clone, Copy, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct RunnerConfig {
    /// Lateral distance between adjacent lanes.
    pub lane_width: f32,
    /// Forward (+Z) speed while the forward input is held.
    pub forward_speed: f32,
    /// Exponential rate at which the player slides toward the current lane.
    pub lane_lerp_rate: f32,
    /// Vertical speed while the up/down inputs are held.
    pub climb_speed: f32,
    /// Altitude band the player is clamped to, `(min, max)`.
    pub altitude_range: (f32, f32),
    /// An active obstacle closer than this deactivates and emits a hit.
    pub collision_radius: f32,
    /// New obstacles appear this far ahead of the player.
    pub spawn_distance: f32,
    /// Minimum Z gap between successively spawned obstacles.
    pub spawn_spacing: f32,
    /// Obstacles this far behind the player are dropped from the list.
    pub despawn_margin: f32,
    /// Upper bound on the obstacle list length.
    pub max_obstacles: usize,
}

impl Default for RunnerConfig {
    fn default() -> Self {
        Self {
            lane_width: 3.0,
            forward_speed: 12.0,
            lane_lerp_rate: 8.0,
            climb_speed: 4.0,
            altitude_range: (0.0, 6.0),
            collision_radius: 1.5,
            spawn_distance: 20.0,
            spawn_spacing: 8.0,
            despawn_margin: 5.0,
            max_obstacles: 10,
        }
    }
}

/// The single moving entity of the runner.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PlayerState {
    pub position: Vec3,
    /// The lane last selected by input. `target_x` always equals its X.
    pub lane: Lane,
    /// World X the player is sliding toward. `position.x` converges on it
    /// exponentially and only ever matches within an epsilon.
    pub target_x: f32,
}

/// An obstacle ahead of (or recently behind) the player.
///
/// Spawned active; deactivated on collision and never reactivated; removed
/// from the list once it falls a despawn margin behind the player.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Obstacle {
    pub position: Vec3,
    pub lane: Lane,
    pub active: bool,
}

/// Emitted when the player passes within the collision radius of an active
/// obstacle. A hit deactivates the obstacle; the run continues.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Collision {
    pub lane: Lane,
    pub position: Vec3,
}

/// Owns the player and obstacle state and the per-frame update.
pub struct LaneRunner<S: LaneSource> {
    config: RunnerConfig,
    player: PlayerState,
    obstacles: Vec<Obstacle>,
    prev_input: InputSnapshot,
    lanes: S,
}

impl<S: LaneSource> LaneRunner<S> {
    /// Creates a runner with the player at rest on the center lane.
    pub fn new(config: RunnerConfig, lanes: S) -> Self {
        let lane = Lane::Center;
        let target_x = lane.offset_x(config.lane_width);
        Self {
            config,
            player: PlayerState {
                position: vec3(target_x, config.altitude_range.0, 0.0),
                lane,
                target_x,
            },
            obstacles: Vec::new(),
            prev_input: InputSnapshot::default(),
            lanes,
        }
    }

    pub fn config(&self) -> &RunnerConfig {
        &self.config
    }

    pub fn player(&self) -> &PlayerState {
        &self.player
    }

    /// The obstacle list in spawn order, including deactivated entries that
    /// have not yet fallen behind the despawn margin.
    pub fn obstacles(&self) -> &[Obstacle] {
        &self.obstacles
    }

    /// Advances the simulation by `dt` seconds and returns the collisions
    /// that occurred this frame.
    ///
    /// Steps run in a fixed order: forward/vertical movement, edge-triggered
    /// lane changes, lateral interpolation, obstacle spawn/despawn, then the
    /// collision sweep. Must be called before the frame's render pass reads
    /// the state.
    pub fn advance(&mut self, dt: f32, input: &InputSnapshot) -> Vec<Collision> {
        self.step_movement(dt, input);
        self.step_lane_change(input);
        self.step_lateral(dt);
        self.step_obstacles();
        let hits = self.step_collisions();
        self.prev_input = *input;
        hits
    }

    fn step_movement(&mut self, dt: f32, input: &InputSnapshot) {
        if input.forward {
            self.player.position.z += self.config.forward_speed * dt;
        }
        if input.up {
            self.player.position.y += self.config.climb_speed * dt;
        }
        if input.down {
            self.player.position.y -= self.config.climb_speed * dt;
        }
        let (low, high) = self.config.altitude_range;
        self.player.position.y = self.player.position.y.max(low).min(high);
    }

    fn step_lane_change(&mut self, input: &InputSnapshot) {
        let mut lane = self.player.lane;
        if input.lane_left && !self.prev_input.lane_left {
            lane = lane.shifted_left();
        }
        if input.lane_right && !self.prev_input.lane_right {
            lane = lane.shifted_right();
        }
        if lane != self.player.lane {
            log::debug!("lane change: {:?} -> {:?}", self.player.lane, lane);
            self.player.lane = lane;
            self.player.target_x = lane.offset_x(self.config.lane_width);
        }
    }

    fn step_lateral(&mut self, dt: f32) {
        let t = (self.config.lane_lerp_rate * dt).clamp(0.0, 1.0);
        self.player.position.x = lerp(self.player.position.x, self.player.target_x, t);
    }

    fn step_obstacles(&mut self) {
        let cutoff = self.player.position.z - self.config.despawn_margin;
        self.obstacles.retain(|o| o.position.z >= cutoff);

        if self.obstacles.len() >= self.config.max_obstacles {
            return;
        }
        let due = match self.obstacles.last() {
            None => true,
            Some(last) => {
                last.position.z
                    < self.player.position.z + self.config.spawn_distance
                        - self.config.spawn_spacing
            }
        };
        if due {
            let lane = self.lanes.next_lane();
            let position = vec3(
                lane.offset_x(self.config.lane_width),
                0.0,
                self.player.position.z + self.config.spawn_distance,
            );
            log::trace!("spawned obstacle at {position} on {lane:?}");
            self.obstacles.push(Obstacle {
                position,
                lane,
                active: true,
            });
        }
    }

    fn step_collisions(&mut self) -> Vec<Collision> {
        let mut hits = Vec::new();
        let player_pos = self.player.position;
        let radius = self.config.collision_radius;
        for obstacle in self.obstacles.iter_mut().filter(|o| o.active) {
            if obstacle.position.distance(player_pos) < radius {
                obstacle.active = false;
                log::debug!(
                    "collision at {} on {:?} lane",
                    obstacle.position,
                    obstacle.lane
                );
                hits.push(Collision {
                    lane: obstacle.lane,
                    position: obstacle.position,
                });
            }
        }
        hits
    }
}

fn lerp(a: f32, b: f32, t: f32) -> f32 {
    a + (b - a) * t
}

#[cfg(test)]
mod tests {
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    use super::*;
    use crate::random::RngLaneSource;

    /// Replays a fixed list of lanes, then sticks on the last one.
    struct ScriptedLanes {
        lanes: Vec<Lane>,
        next: usize,
    }

    impl ScriptedLanes {
        fn new(lanes: &[Lane]) -> Self {
            Self {
                lanes: lanes.to_vec(),
                next: 0,
            }
        }
    }

    impl LaneSource for ScriptedLanes {
        fn next_lane(&mut self) -> Lane {
            let lane = self.lanes[self.next.min(self.lanes.len() - 1)];
            self.next += 1;
            lane
        }
    }

    const DT: f32 = 1.0 / 60.0;

    fn runner(config: RunnerConfig) -> LaneRunner<ScriptedLanes> {
        LaneRunner::new(config, ScriptedLanes::new(&[Lane::Center]))
    }

    fn idle() -> InputSnapshot {
        InputSnapshot::default()
    }

    fn held(forward: bool, left: bool, right: bool) -> InputSnapshot {
        InputSnapshot {
            forward,
            lane_left: left,
            lane_right: right,
            ..InputSnapshot::default()
        }
    }

    /// One press-and-release of a lane key.
    fn tap(runner: &mut LaneRunner<ScriptedLanes>, left: bool, right: bool) {
        runner.advance(DT, &held(false, left, right));
        runner.advance(DT, &idle());
    }

    #[test]
    fn lane_bounds_saturate() {
        let mut r = runner(RunnerConfig::default());

        tap(&mut r, true, false);
        assert_eq!(r.player().lane, Lane::Left);
        tap(&mut r, true, false);
        assert_eq!(r.player().lane, Lane::Left);

        tap(&mut r, false, true);
        assert_eq!(r.player().lane, Lane::Center);
        tap(&mut r, false, true);
        assert_eq!(r.player().lane, Lane::Right);
        tap(&mut r, false, true);
        assert_eq!(r.player().lane, Lane::Right);
    }

    #[test]
    fn single_change_per_press() {
        let mut r = runner(RunnerConfig::default());
        tap(&mut r, false, true);
        assert_eq!(r.player().lane, Lane::Right);

        // Holding the key for many frames moves exactly one lane.
        for _ in 0..50 {
            r.advance(DT, &held(false, true, false));
        }
        assert_eq!(r.player().lane, Lane::Center);

        // A fresh press after release moves again.
        r.advance(DT, &idle());
        r.advance(DT, &held(false, true, false));
        assert_eq!(r.player().lane, Lane::Left);
    }

    #[test]
    fn target_x_tracks_lane() {
        let config = RunnerConfig::default();
        let mut r = runner(config);
        assert_eq!(r.player().target_x, 0.0);

        r.advance(DT, &held(false, false, true));
        assert_eq!(r.player().lane, Lane::Right);
        assert_eq!(r.player().target_x, config.lane_width);
    }

    #[test]
    fn lateral_convergence_is_monotone() {
        let config = RunnerConfig::default();
        let mut r = runner(config);
        r.advance(DT, &held(false, false, true));

        let target = r.player().target_x;
        let mut dist = (r.player().position.x - target).abs();
        let mut frames = 0;
        while dist > 1e-3 {
            let side = (target - r.player().position.x).signum();
            r.advance(DT, &idle());
            let next = (r.player().position.x - target).abs();
            assert!(next < dist, "distance must strictly decrease");
            // Exponential interpolation never overshoots the target.
            assert_eq!((target - r.player().position.x).signum(), side);
            dist = next;
            frames += 1;
            assert!(frames < 1000, "did not converge");
        }
    }

    #[test]
    fn forward_integration_is_exact() {
        let config = RunnerConfig::default();
        let mut r = runner(config);
        for _ in 0..100 {
            let before = r.player().position.z;
            r.advance(DT, &held(true, false, false));
            assert_eq!(r.player().position.z, before + config.forward_speed * DT);
        }
    }

    #[test]
    fn z_unchanged_without_forward_input() {
        let mut r = runner(RunnerConfig::default());
        for _ in 0..100 {
            r.advance(DT, &idle());
        }
        assert_eq!(r.player().position.z, 0.0);
    }

    #[test]
    fn altitude_stays_in_band() {
        let config = RunnerConfig::default();
        let mut r = runner(config);
        let climb = InputSnapshot {
            up: true,
            ..InputSnapshot::default()
        };
        for _ in 0..1000 {
            r.advance(DT, &climb);
            assert!(r.player().position.y <= config.altitude_range.1);
        }
        assert_eq!(r.player().position.y, config.altitude_range.1);

        let dive = InputSnapshot {
            down: true,
            ..InputSnapshot::default()
        };
        for _ in 0..1000 {
            r.advance(DT, &dive);
            assert!(r.player().position.y >= config.altitude_range.0);
        }
        assert_eq!(r.player().position.y, config.altitude_range.0);
    }

    #[test]
    fn spawn_spacing_holds_at_spawn_time() {
        let config = RunnerConfig::default();
        let mut r = LaneRunner::new(
            config,
            RngLaneSource::new(StdRng::seed_from_u64(7)),
        );
        let mut last_spawn_z: Option<f32> = None;
        let mut spawns = 0;
        for _ in 0..2000 {
            let len_before = r.obstacles().len();
            let tail_before = r.obstacles().last().map(|o| o.position.z);
            r.advance(DT, &held(true, false, false));
            let appended = r.obstacles().len() > len_before
                || r.obstacles().last().map(|o| o.position.z) != tail_before;
            if appended {
                let z = r.obstacles().last().unwrap().position.z;
                if let Some(prev) = last_spawn_z {
                    assert!(
                        z - prev >= config.spawn_spacing - 1e-3,
                        "spacing violated: {prev} -> {z}"
                    );
                }
                last_spawn_z = Some(z);
                spawns += 1;
            }
        }
        assert!(spawns > 10, "expected a steady stream of spawns");
    }

    #[test]
    fn obstacles_despawn_behind_player() {
        let config = RunnerConfig::default();
        let mut r = LaneRunner::new(
            config,
            RngLaneSource::new(StdRng::seed_from_u64(7)),
        );
        // First advance spawns the first obstacle at spawn_distance.
        r.advance(DT, &held(true, false, false));
        let first_z = r.obstacles()[0].position.z;

        for _ in 0..20000 {
            r.advance(DT, &held(true, false, false));
            let cutoff = r.player().position.z - config.despawn_margin;
            assert!(
                r.obstacles().iter().all(|o| o.position.z >= cutoff),
                "stale obstacle survived an advance"
            );
            if r.player().position.z > first_z + config.despawn_margin + 1.0 {
                break;
            }
        }
        assert!(r.player().position.z > first_z);
        assert!(
            r.obstacles().iter().all(|o| o.position.z != first_z),
            "first obstacle should be gone"
        );
    }

    #[test]
    fn collision_fires_once_per_obstacle() {
        // Obstacle spawns dead ahead at half the collision radius.
        let config = RunnerConfig {
            collision_radius: 1.5,
            spawn_distance: 0.75,
            ..RunnerConfig::default()
        };
        let mut r = LaneRunner::new(config, ScriptedLanes::new(&[Lane::Center]));

        let hits = r.advance(DT, &idle());
        assert_eq!(hits.len(), 1);
        assert_eq!(hits[0].lane, Lane::Center);
        assert_eq!(hits[0].position, vec3(0.0, 0.0, 0.75));
        assert!(!r.obstacles()[0].active);

        // Same positions, no second event for the deactivated obstacle.
        let hits = r.advance(DT, &idle());
        assert!(hits.is_empty());
        assert!(!r.obstacles()[0].active);
    }

    #[test]
    fn deactivated_obstacles_stay_inactive() {
        let config = RunnerConfig {
            collision_radius: 1.5,
            spawn_distance: 0.75,
            ..RunnerConfig::default()
        };
        let mut r = LaneRunner::new(config, ScriptedLanes::new(&[Lane::Center]));
        r.advance(DT, &idle());
        for _ in 0..100 {
            r.advance(DT, &idle());
            assert!(r.obstacles().iter().all(|o| !o.active));
        }
    }

    #[test]
    fn obstacle_count_never_exceeds_cap() {
        // A huge despawn margin keeps every spawn alive so the cap binds.
        let config = RunnerConfig {
            despawn_margin: 10000.0,
            ..RunnerConfig::default()
        };
        let mut r = LaneRunner::new(
            config,
            RngLaneSource::new(StdRng::seed_from_u64(99)),
        );
        for _ in 0..5000 {
            r.advance(DT, &held(true, false, false));
            assert!(r.obstacles().len() <= config.max_obstacles);
        }
        // The stream actually reaches the cap under continuous motion.
        assert_eq!(r.obstacles().len(), config.max_obstacles);
    }

    #[test]
    fn zero_cap_yields_an_obstacle_free_run() {
        let config = RunnerConfig {
            max_obstacles: 0,
            ..RunnerConfig::default()
        };
        let mut r = runner(config);
        for _ in 0..500 {
            let hits = r.advance(DT, &held(true, false, false));
            assert!(hits.is_empty());
            assert!(r.obstacles().is_empty());
        }
    }

    #[test]
    fn first_spawn_matches_example_scenario() {
        // W=3, D=20, G=8, K=10, player starting at the origin.
        let config = RunnerConfig {
            lane_width: 3.0,
            spawn_distance: 20.0,
            spawn_spacing: 8.0,
            max_obstacles: 10,
            altitude_range: (0.0, 6.0),
            ..RunnerConfig::default()
        };
        let mut r = LaneRunner::new(config, ScriptedLanes::new(&[Lane::Right]));
        assert_eq!(r.player().position, Vec3::ZERO);

        r.advance(DT, &idle());
        let first = &r.obstacles()[0];
        assert_eq!(first.position.z, 20.0);
        assert_eq!(first.lane, Lane::Right);
        assert_eq!(first.position.x, 3.0);
        assert!(first.active);
    }

    #[test]
    fn seeded_sources_reproduce_a_run() {
        let config = RunnerConfig::default();
        let mut a = LaneRunner::new(config, RngLaneSource::new(StdRng::seed_from_u64(3)));
        let mut b = LaneRunner::new(config, RngLaneSource::new(StdRng::seed_from_u64(3)));
        for _ in 0..1000 {
            a.advance(DT, &held(true, false, false));
            b.advance(DT, &held(true, false, false));
        }
        assert_eq!(a.obstacles(), b.obstacles());
        assert_eq!(a.player(), b.player());
    }

    #[test]
    fn config_round_trips_through_json() {
        let config = RunnerConfig {
            lane_width: 4.5,
            max_obstacles: 3,
            ..RunnerConfig::default()
        };
        let json = serde_json::to_string(&config).unwrap();
        let back: RunnerConfig = serde_json::from_str(&json).unwrap();
        assert_eq!(config, back);
    }

    #[test]
    fn partial_config_json_uses_defaults() {
        let back: RunnerConfig = serde_json::from_str(r#"{"forward_speed": 20.0}"#).unwrap();
        assert_eq!(back.forward_speed, 20.0);
        assert_eq!(back.lane_width, RunnerConfig::default().lane_width);
    }
}
