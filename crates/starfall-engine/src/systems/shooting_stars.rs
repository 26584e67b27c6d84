//! Shooting-star scheduler: two uncoordinated spawn loops feeding a bounded
//! collection of transient events, each retired on its own timer.

use glam::Vec2;

use crate::anim::Easing;
use crate::api::backdrop::BackdropConfig;
use crate::api::types::{MeteorId, SkyEvent};
use crate::core::rng::Rng;
use crate::systems::spawn_loop::SpawnLoop;

/// How far a shooting star travels from its start point, in percent space.
pub const TRAVEL_DISTANCE: f32 = 30.0;

/// A single shooting-star event. Immutable once spawned; everything the
/// render layer animates is derived from these fields and the current clock.
#[derive(Debug, Clone, Copy)]
pub struct ShootingStar {
    pub id: MeteorId,
    /// Start position: anywhere horizontally, upper half vertically.
    pub start: Vec2,
    /// Travel angle in degrees, [20, 65).
    pub angle_deg: f32,
    /// Travel time in seconds, [1.5, 2.5).
    pub duration: f32,
    /// Virtual-clock time at which the event was created.
    pub spawned_at: f32,
}

impl ShootingStar {
    /// Where the travel ends. Recomputed from the stored fields rather than
    /// stored, so it can never go stale.
    pub fn end_point(&self) -> Vec2 {
        let theta = self.angle_deg.to_radians();
        self.start + Vec2::new(theta.cos(), theta.sin()) * TRAVEL_DISTANCE
    }

    /// Position along the travel path, quad-out eased, clamped at the end.
    pub fn position_at(&self, elapsed: f32) -> Vec2 {
        if self.duration <= 0.0 {
            return self.end_point();
        }
        let t = Easing::QuadOut.apply(elapsed / self.duration);
        self.start.lerp(self.end_point(), t)
    }

    /// Trail opacity along the travel: fade in over the first third, hold,
    /// fade out over the last third.
    pub fn opacity_at(&self, elapsed: f32) -> f32 {
        if self.duration <= 0.0 {
            return 0.0;
        }
        let t = (elapsed / self.duration).clamp(0.0, 1.0);
        if t < 1.0 / 3.0 {
            t * 3.0
        } else if t < 2.0 / 3.0 {
            1.0
        } else {
            (1.0 - t) * 3.0
        }
    }
}

/// A pending removal: fires `fire_at` seconds into the virtual clock and
/// retires exactly one event. Held as owned state so teardown can cancel
/// every outstanding timer by clearing the list.
#[derive(Debug, Clone, Copy)]
struct Retirement {
    id: MeteorId,
    fire_at: f32,
}

/// Container for the live shooting-star field. Single writer: only `tick`
/// and `stop` mutate, the render layer reads `meteors`.
pub struct ShootingStarState {
    /// Active events in insertion order.
    pub meteors: Vec<ShootingStar>,
    /// The uncoordinated spawn loops. Public so tests can script countdowns.
    pub loops: Vec<SpawnLoop>,
    retirements: Vec<Retirement>,
    rng: Rng,
    clock: f32,
    running: bool,
    next_id: u64,
    generation: u64,
    events: Vec<SkyEvent>,
    duration_range: (f32, f32),
    angle_range: (f32, f32),
    settle_margin: f32,
}

impl ShootingStarState {
    pub fn new(config: &BackdropConfig, seed: u64) -> Self {
        let loops = (0..config.spawn_loop_count)
            .map(|i| {
                SpawnLoop::new(
                    seed.wrapping_add(7919u64.wrapping_mul(i as u64 + 1)),
                    config.spawn_delay_range,
                )
            })
            .collect();

        ShootingStarState {
            meteors: Vec::with_capacity(config.max_meteors),
            loops,
            retirements: Vec::with_capacity(config.max_meteors),
            rng: Rng::new(seed.wrapping_add(104_729)),
            clock: 0.0,
            running: false,
            next_id: 1,
            generation: 0,
            events: Vec::new(),
            duration_range: config.duration_range,
            angle_range: config.angle_range,
            settle_margin: config.settle_margin,
        }
    }

    /// Begin both spawn loops. Idempotent: calling again while running is a
    /// no-op and does not reset any countdown.
    pub fn start(&mut self) {
        if self.running {
            return;
        }
        self.running = true;
        for spawn_loop in &mut self.loops {
            spawn_loop.active = true;
        }
    }

    /// Cancel every outstanding timer: both spawn loops' pending waits and
    /// every scheduled retirement. After this returns nothing mutates the
    /// collection until `start` is called again.
    pub fn stop(&mut self) {
        self.running = false;
        for spawn_loop in &mut self.loops {
            spawn_loop.active = false;
        }
        self.retirements.clear();
    }

    /// Advance the virtual clock: run spawn loops, then fire due retirements.
    pub fn tick(&mut self, dt: f32) {
        if !self.running {
            return;
        }
        self.clock += dt;

        let mut fires = 0;
        for spawn_loop in &mut self.loops {
            fires += spawn_loop.tick(dt);
        }
        for _ in 0..fires {
            self.spawn();
        }

        let clock = self.clock;
        let due: Vec<MeteorId> = self
            .retirements
            .iter()
            .filter(|r| r.fire_at <= clock)
            .map(|r| r.id)
            .collect();
        if !due.is_empty() {
            self.retirements.retain(|r| r.fire_at > clock);
            for id in due {
                self.retire(id);
            }
        }
    }

    fn spawn(&mut self) {
        let id = MeteorId(self.next_id);
        self.next_id += 1;

        let star = ShootingStar {
            id,
            start: Vec2::new(self.rng.range(0.0, 100.0), self.rng.range(0.0, 50.0)),
            angle_deg: self.rng.range(self.angle_range.0, self.angle_range.1),
            duration: self.rng.range(self.duration_range.0, self.duration_range.1),
            spawned_at: self.clock,
        };
        let fire_at = self.clock + star.duration + self.settle_margin;

        self.meteors.push(star);
        self.retirements.push(Retirement { id, fire_at });
        self.events.push(SkyEvent::MeteorSpawned(id));
        self.generation += 1;
        log::trace!("shooting star {:?} spawned at t={:.2}", id, self.clock);
    }

    /// Remove the event with `id` if it is still present. Silently a no-op
    /// otherwise, so a timer firing for an already-removed event never
    /// touches an unrelated one.
    fn retire(&mut self, id: MeteorId) {
        if let Some(idx) = self.meteors.iter().position(|m| m.id == id) {
            self.meteors.remove(idx);
            self.events.push(SkyEvent::MeteorRetired(id));
            self.generation += 1;
            log::trace!("shooting star {:?} retired at t={:.2}", id, self.clock);
        }
    }

    /// Force an event out before its timer fires. The scheduled retirement
    /// stays queued and no-ops later.
    pub fn retire_now(&mut self, id: MeteorId) {
        self.retire(id);
    }

    /// Monotonic change counter; bumps on every insert and removal.
    pub fn generation(&self) -> u64 {
        self.generation
    }

    /// Drain queued change notifications.
    pub fn drain_events(&mut self) -> impl Iterator<Item = SkyEvent> + '_ {
        self.events.drain(..)
    }

    /// Outstanding removal timers. Zero after `stop`.
    pub fn pending_retirements(&self) -> usize {
        self.retirements.len()
    }

    /// Virtual seconds since construction (only advances while running).
    pub fn clock(&self) -> f32 {
        self.clock
    }

    pub fn len(&self) -> usize {
        self.meteors.len()
    }

    pub fn is_empty(&self) -> bool {
        self.meteors.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn test_state(seed: u64) -> ShootingStarState {
        ShootingStarState::new(&BackdropConfig::default(), seed)
    }

    /// Advance in fixed small steps, returning the largest live count seen.
    fn run_for(state: &mut ShootingStarState, seconds: f32) -> usize {
        let mut max_live = 0;
        let steps = (seconds / 0.05).round() as usize;
        for _ in 0..steps {
            state.tick(0.05);
            max_live = max_live.max(state.len());
        }
        max_live
    }

    #[test]
    fn meteor_fields_within_ranges() {
        let mut state = test_state(42);
        state.start();
        let mut seen = 0;
        for _ in 0..2400 {
            state.tick(0.05);
            for m in &state.meteors {
                assert!((0.0..100.0).contains(&m.start.x));
                assert!((0.0..50.0).contains(&m.start.y));
                assert!((20.0..65.0).contains(&m.angle_deg));
                assert!((1.5..2.5).contains(&m.duration));
                seen += 1;
            }
        }
        assert!(seen > 0, "nothing spawned in 120s");
    }

    #[test]
    fn end_point_projects_thirty_units() {
        let star = ShootingStar {
            id: MeteorId(1),
            start: Vec2::new(10.0, 20.0),
            angle_deg: 45.0,
            duration: 2.0,
            spawned_at: 0.0,
        };
        let end = star.end_point();
        let expected = 30.0 * std::f32::consts::FRAC_1_SQRT_2;
        assert!((end.x - (10.0 + expected)).abs() < 1e-3);
        assert!((end.y - (20.0 + expected)).abs() < 1e-3);
        assert!(((end - star.start).length() - TRAVEL_DISTANCE).abs() < 1e-3);
    }

    #[test]
    fn travel_starts_at_start_and_clamps_at_end() {
        let star = ShootingStar {
            id: MeteorId(1),
            start: Vec2::new(50.0, 25.0),
            angle_deg: 30.0,
            duration: 2.0,
            spawned_at: 0.0,
        };
        assert!((star.position_at(0.0) - star.start).length() < 1e-4);
        assert!((star.position_at(2.0) - star.end_point()).length() < 1e-4);
        assert!((star.position_at(99.0) - star.end_point()).length() < 1e-4);
    }

    #[test]
    fn opacity_keyframes() {
        let star = ShootingStar {
            id: MeteorId(1),
            start: Vec2::ZERO,
            angle_deg: 45.0,
            duration: 3.0,
            spawned_at: 0.0,
        };
        assert_eq!(star.opacity_at(0.0), 0.0);
        assert!((star.opacity_at(1.5) - 1.0).abs() < 1e-5);
        assert!(star.opacity_at(2.9) < 0.15);
        assert_eq!(star.opacity_at(3.0), 0.0);
    }

    #[test]
    fn insertion_precedes_retirement_and_collection_stays_bounded() {
        let mut state = test_state(7);
        state.start();
        // Min spawn gap 2.0s per loop, max lifetime 2.5 + 0.5 = 3.0s:
        // at most 2 concurrent per loop, 4 across both.
        let max_live = run_for(&mut state, 60.0);
        assert!(max_live <= 4, "collection grew to {}", max_live);
        assert!(max_live >= 1, "no spawns observed");
    }

    #[test]
    fn drains_to_empty_once_loops_go_quiet() {
        let mut state = test_state(21);
        state.start();
        run_for(&mut state, 30.0);
        for spawn_loop in &mut state.loops {
            spawn_loop.active = false;
        }
        // Longest possible remaining lifetime is duration + settle < 3.0s.
        run_for(&mut state, 3.1);
        assert_eq!(state.len(), 0);
        assert_eq!(state.pending_retirements(), 0);
    }

    #[test]
    fn stop_freezes_all_mutation() {
        let mut state = test_state(99);
        state.start();
        run_for(&mut state, 10.0);
        state.stop();
        assert_eq!(state.pending_retirements(), 0);

        let live_before = state.len();
        let generation_before = state.generation();
        let _ = state.drain_events().count();

        run_for(&mut state, 120.0);
        assert_eq!(state.len(), live_before);
        assert_eq!(state.generation(), generation_before);
        assert_eq!(state.drain_events().count(), 0);
    }

    #[test]
    fn retirement_is_id_keyed_and_idempotent() {
        let mut state = test_state(5);
        state.start();
        // Force the first spawn immediately, freeze the second loop.
        state.loops[0].countdown = 0.05;
        state.loops[1].countdown = 1000.0;
        state.tick(0.05);
        assert_eq!(state.len(), 1);
        let id = state.meteors[0].id;

        // Force a second spawn so an unrelated event is present.
        state.loops[0].countdown = 0.05;
        state.tick(0.05);
        assert_eq!(state.len(), 2);
        let other = state.meteors[1].id;

        // Early removal, then let the original timer fire naturally.
        state.retire_now(id);
        assert_eq!(state.len(), 1);
        state.loops[0].countdown = 1000.0;
        run_for(&mut state, 3.1);

        // The stale timer must not have taken the unrelated event with it:
        // that one retires on its own schedule, which also elapsed by now.
        assert_eq!(state.len(), 0);
        let retired: Vec<SkyEvent> = state
            .drain_events()
            .filter(|e| matches!(e, SkyEvent::MeteorRetired(_)))
            .collect();
        assert_eq!(retired.len(), 2);
        assert!(retired.contains(&SkyEvent::MeteorRetired(id)));
        assert!(retired.contains(&SkyEvent::MeteorRetired(other)));
    }

    #[test]
    fn scripted_timeline_end_to_end() {
        let mut state = test_state(1);
        state.start();
        // Loop A fires at roughly t=2.1 and t=3.4; loop B would fire at
        // t=4.0 but is pushed past the window after its draw is scripted
        // away. Countdowns sit just under the tick boundary so accumulated
        // f32 rounding cannot push the fire into the next step.
        state.loops[0].countdown = 2.09;
        state.loops[1].countdown = 4.0;

        // t -> 2.1: first spawn.
        for _ in 0..42 {
            state.tick(0.05);
        }
        assert_eq!(state.len(), 1);
        state.loops[0].countdown = 1.29; // next fire at t=3.4
        state.loops[1].countdown = 10.0; // keep B out of the window

        // t -> 5.0.
        for _ in 0..58 {
            state.tick(0.05);
        }
        // Durations are >= 1.5 + 0.5 settle, so nothing retired before
        // t=2.1+2.0; both events are live iff their lifetimes reach 5.0s.
        let spawned: Vec<SkyEvent> = state.drain_events().collect();
        assert_eq!(
            spawned
                .iter()
                .filter(|e| matches!(e, SkyEvent::MeteorSpawned(_)))
                .count(),
            2
        );

        // By t=6.5 every lifetime (max 2.5 + 0.5 after a 3.4s spawn) is over.
        for _ in 0..30 {
            state.tick(0.05);
        }
        assert_eq!(state.len(), 0);
    }

    #[test]
    fn loops_are_uncoordinated() {
        let state = test_state(1);
        assert_ne!(state.loops[0].countdown, state.loops[1].countdown);
    }

    #[test]
    fn clock_only_advances_while_running() {
        let mut state = test_state(3);
        state.tick(5.0);
        assert_eq!(state.clock(), 0.0);
        state.start();
        state.tick(0.5);
        assert!((state.clock() - 0.5).abs() < 1e-6);
    }
}
