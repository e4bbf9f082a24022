//! The player-controlled actor: flight kinematics and behavior states
//!
//! Motion is a deliberately simple constant-gravity/impulse model. The
//! behavioral state machine drives rotation handling and the wing animation;
//! it never gates physics except in the terminal Dead state, which only
//! `reset` can leave.

use glam::Vec2;

use super::rect::Aabb;
use crate::consts::*;
use crate::approach;

/// Mutually exclusive high-level behavior modes
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ActorState {
    /// Pre-game hover; physics only runs with a zero frame delta
    Idle,
    /// Brief wing-burst right after an impulse
    Flapping,
    /// Level flight, wings neutral
    Gliding,
    /// Fast descent
    Falling,
    /// Terminal; exits only via `reset`
    Dead,
    /// Cosmetic overlay after a score milestone; physics unchanged
    Celebrating,
}

/// Wing pose, driven by its own clock independent of [`ActorState`]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WingPhase {
    Up,
    Mid,
    Down,
    Neutral,
}

impl WingPhase {
    /// Next pose in the idle Up -> Mid -> Down cycle
    fn cycled(self) -> Self {
        match self {
            WingPhase::Up => WingPhase::Mid,
            WingPhase::Mid => WingPhase::Down,
            WingPhase::Down | WingPhase::Neutral => WingPhase::Up,
        }
    }
}

/// The controllable actor
#[derive(Debug, Clone)]
pub struct Actor {
    /// World position, y grows downward
    pub position: Vec2,
    /// Vertical velocity (px/s, positive = descending)
    pub velocity: f32,
    /// Rotation in degrees (positive = nose down)
    pub rotation: f32,
    pub state: ActorState,
    pub wing: WingPhase,
    /// Cosmetic vertical offset while celebrating
    pub celebrate_bounce: f32,
    gravity: f32,
    impulse_strength: f32,
    /// Clock since entering the current state
    state_timer: f32,
    /// Wing animation clock
    wing_timer: f32,
    /// Clock local to the Celebrating state
    celebrate_timer: f32,
}

impl Actor {
    pub fn new(position: Vec2, gravity: f32, impulse_strength: f32) -> Self {
        Self {
            position,
            velocity: 0.0,
            rotation: 0.0,
            state: ActorState::Idle,
            wing: WingPhase::Neutral,
            celebrate_bounce: 0.0,
            gravity,
            impulse_strength,
            state_timer: 0.0,
            wing_timer: 0.0,
            celebrate_timer: 0.0,
        }
    }

    /// Apply the flap impulse: velocity snaps to the impulse strength and the
    /// actor enters Flapping. Works from every state except Dead; cancels an
    /// in-progress celebration by forcing its timer past the exit threshold.
    pub fn impulse(&mut self) {
        if self.state == ActorState::Dead {
            return;
        }
        if self.state == ActorState::Celebrating {
            self.celebrate_timer = CELEBRATE_DURATION;
            self.celebrate_bounce = 0.0;
        }
        self.velocity = self.impulse_strength;
        self.state = ActorState::Flapping;
        self.state_timer = 0.0;
        self.wing_timer = 0.0;
        self.wing = WingPhase::Up;
    }

    /// Start the celebration overlay. Velocity is untouched - the actor keeps
    /// flying under normal gravity for the whole duration. No-op while Dead.
    pub fn celebrate(&mut self) {
        if self.state == ActorState::Dead {
            return;
        }
        self.state = ActorState::Celebrating;
        self.state_timer = 0.0;
        self.celebrate_timer = 0.0;
    }

    /// Force the terminal state. Idempotent.
    pub fn kill(&mut self) {
        self.state = ActorState::Dead;
        self.wing = WingPhase::Down;
    }

    /// Restore every field to its initial value at the given position
    pub fn reset(&mut self, position: Vec2) {
        self.position = position;
        self.velocity = 0.0;
        self.rotation = 0.0;
        self.state = ActorState::Idle;
        self.wing = WingPhase::Neutral;
        self.celebrate_bounce = 0.0;
        self.state_timer = 0.0;
        self.wing_timer = 0.0;
        self.celebrate_timer = 0.0;
    }

    /// Advance physics and state clocks by one frame.
    ///
    /// The only place where position, velocity, rotation or timers change.
    /// Callers clamp `dt`; a zero delta leaves the actor bit-identical, which
    /// is how the menu keeps it hovering.
    pub fn advance(&mut self, dt: f32) {
        self.update_transitions(dt);
        self.update_wings(dt);

        match self.state {
            ActorState::Dead => {
                self.velocity += self.gravity * dt;
                self.position.y += self.velocity * dt;
                self.rotation =
                    (self.rotation + DEAD_SPIN_RATE * dt).clamp(0.0, ROTATION_MAX);
            }
            ActorState::Celebrating => {
                self.celebrate_timer += dt;
                self.celebrate_bounce = (self.celebrate_timer * 10.0).sin() * 4.0;

                // Normal physics continue underneath the overlay
                self.velocity += self.gravity * dt;
                self.position.y += self.velocity * dt;

                // Wobble keyed to the local clock, not to velocity
                self.rotation = (self.celebrate_timer * 6.0).sin() * 10.0;

                if self.celebrate_timer >= CELEBRATE_DURATION {
                    self.state = ActorState::Gliding;
                    self.state_timer = 0.0;
                    self.rotation = 0.0;
                    self.celebrate_bounce = 0.0;
                }
            }
            _ => {
                self.velocity += self.gravity * dt;
                self.position.y += self.velocity * dt;

                let target = (self.velocity * ROTATION_VELOCITY_SCALE)
                    .clamp(ROTATION_MIN, ROTATION_MAX);
                let rate = if self.state == ActorState::Flapping {
                    ROTATION_RATE_FLAPPING
                } else {
                    ROTATION_RATE_DEFAULT
                };
                self.rotation = approach(self.rotation, target, rate, dt);
            }
        }
    }

    /// Menu-idle wing cycle, independent of `advance`
    pub fn animate_wing(&mut self, dt: f32) {
        self.wing_timer += dt;
        if self.wing_timer > WING_IDLE_PERIOD {
            self.wing_timer = 0.0;
            self.wing = self.wing.cycled();
        }
    }

    /// Collision query box centered on the current position
    pub fn bounding_box(&self) -> Aabb {
        Aabb::from_center_half(
            self.position,
            Vec2::new(ACTOR_HALF_WIDTH, ACTOR_HALF_HEIGHT),
        )
    }

    #[inline]
    pub fn is_dead(&self) -> bool {
        self.state == ActorState::Dead
    }

    #[inline]
    pub fn is_celebrating(&self) -> bool {
        self.state == ActorState::Celebrating
    }

    /// Evaluate timed/velocity-driven state transitions, in fixed order
    fn update_transitions(&mut self, dt: f32) {
        match self.state {
            // Terminal, and the celebration exit is handled with its physics
            ActorState::Dead | ActorState::Celebrating => {}
            ActorState::Flapping => {
                self.state_timer += dt;
                if self.state_timer > FLAP_DURATION {
                    self.state = ActorState::Gliding;
                    self.state_timer = 0.0;
                }
            }
            ActorState::Gliding => {
                if self.velocity > FALL_VELOCITY_THRESHOLD {
                    self.state = ActorState::Falling;
                    self.state_timer = 0.0;
                    self.wing_timer = 0.0;
                }
            }
            ActorState::Falling => {
                if self.velocity < 0.0 {
                    self.state = ActorState::Gliding;
                    self.state_timer = 0.0;
                }
            }
            ActorState::Idle => {}
        }
    }

    /// Drive the wing pose from the state-appropriate clock
    fn update_wings(&mut self, dt: f32) {
        match self.state {
            ActorState::Celebrating => {
                self.wing_timer += dt;
                if self.wing_timer > WING_ANIM_PERIOD * 0.5 {
                    self.wing_timer = 0.0;
                    self.wing = if self.wing == WingPhase::Up {
                        WingPhase::Down
                    } else {
                        WingPhase::Up
                    };
                }
            }
            ActorState::Flapping => {
                // Three-step burst keyed to time since the impulse
                self.wing = if self.state_timer < 0.05 {
                    WingPhase::Up
                } else if self.state_timer < 0.10 {
                    WingPhase::Mid
                } else {
                    WingPhase::Down
                };
            }
            ActorState::Gliding => {
                self.wing = WingPhase::Neutral;
            }
            ActorState::Falling => {
                self.wing_timer += dt;
                if self.wing_timer > WING_ANIM_PERIOD * 2.0 {
                    self.wing_timer = 0.0;
                }
                self.wing = if self.wing_timer < WING_ANIM_PERIOD {
                    WingPhase::Mid
                } else {
                    WingPhase::Neutral
                };
            }
            ActorState::Dead => {
                self.wing = WingPhase::Down;
            }
            ActorState::Idle => {}
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const GRAVITY: f32 = 1500.0;
    const IMPULSE: f32 = -520.0;
    const DT: f32 = 1.0 / 60.0;

    fn actor() -> Actor {
        Actor::new(Vec2::new(150.0, 320.0), GRAVITY, IMPULSE)
    }

    #[test]
    fn test_impulse_sets_velocity_and_flapping() {
        let mut a = actor();
        a.impulse();
        assert_eq!(a.velocity, IMPULSE);
        assert_eq!(a.state, ActorState::Flapping);
        assert_eq!(a.wing, WingPhase::Up);
    }

    #[test]
    fn test_impulse_works_from_every_live_state() {
        for start in [
            ActorState::Idle,
            ActorState::Flapping,
            ActorState::Gliding,
            ActorState::Falling,
            ActorState::Celebrating,
        ] {
            let mut a = actor();
            a.state = start;
            a.velocity = 250.0;
            a.impulse();
            assert_eq!(a.state, ActorState::Flapping, "from {start:?}");
            assert_eq!(a.velocity, IMPULSE, "from {start:?}");
        }
    }

    #[test]
    fn test_impulse_ignored_while_dead() {
        let mut a = actor();
        a.kill();
        a.impulse();
        assert_eq!(a.state, ActorState::Dead);
        assert_eq!(a.velocity, 0.0);
    }

    #[test]
    fn test_repeated_impulses_never_revert_to_idle() {
        let mut a = actor();
        for _ in 0..20 {
            a.impulse();
            assert_eq!(a.state, ActorState::Flapping);
            a.advance(DT);
            assert_ne!(a.state, ActorState::Idle);
        }
    }

    #[test]
    fn test_celebrate_then_impulse_lands_in_flapping() {
        let mut a = actor();
        a.celebrate();
        assert_eq!(a.state, ActorState::Celebrating);
        a.impulse();
        assert_eq!(a.state, ActorState::Flapping);
        a.advance(DT);
        assert_ne!(a.state, ActorState::Celebrating);
    }

    #[test]
    fn test_celebrate_keeps_falling() {
        let mut a = actor();
        a.velocity = 50.0;
        a.celebrate();
        let y0 = a.position.y;
        a.advance(DT);
        assert!(a.position.y > y0, "gravity must keep acting");
        assert_eq!(a.state, ActorState::Celebrating);
    }

    #[test]
    fn test_celebrate_auto_exits_to_gliding_with_zero_rotation() {
        for start_rotation in [-30.0, 0.0, 45.0, 90.0] {
            let mut a = actor();
            a.rotation = start_rotation;
            a.celebrate();
            let mut steps = 0;
            while a.state == ActorState::Celebrating && steps < 120 {
                a.advance(DT);
                steps += 1;
            }
            assert_eq!(a.state, ActorState::Gliding);
            assert_eq!(a.rotation, 0.0);
            // Exit lands on the frame the 0.5 s clock elapses
            assert!((29..=31).contains(&steps), "exited after {steps} frames");
        }
    }

    #[test]
    fn test_celebrate_while_dead_is_noop() {
        let mut a = actor();
        a.kill();
        a.celebrate();
        assert_eq!(a.state, ActorState::Dead);
    }

    #[test]
    fn test_dead_is_terminal_until_reset() {
        let mut a = actor();
        a.kill();
        for _ in 0..120 {
            a.advance(DT);
            assert_eq!(a.state, ActorState::Dead);
            assert_eq!(a.wing, WingPhase::Down);
        }
        a.reset(Vec2::new(150.0, 320.0));
        assert_eq!(a.state, ActorState::Idle);
        assert_eq!(a.velocity, 0.0);
        assert_eq!(a.rotation, 0.0);
    }

    #[test]
    fn test_kill_is_idempotent() {
        let mut a = actor();
        a.kill();
        let snapshot = (a.state, a.wing);
        a.kill();
        assert_eq!((a.state, a.wing), snapshot);
    }

    #[test]
    fn test_dead_rotation_clamped_to_quarter_turn() {
        let mut a = actor();
        a.rotation = -30.0;
        a.kill();
        for _ in 0..300 {
            a.advance(DT);
            assert!(a.rotation >= 0.0 && a.rotation <= 90.0);
        }
        assert_eq!(a.rotation, 90.0);
    }

    #[test]
    fn test_rotation_stays_in_flight_clamp() {
        let mut a = actor();
        // Long free fall drives the target to the +90 clamp
        for _ in 0..600 {
            a.advance(DT);
            assert!(a.rotation >= ROTATION_MIN && a.rotation <= ROTATION_MAX);
        }
        // Repeated impulses drive it toward the -30 clamp
        for _ in 0..600 {
            a.impulse();
            a.advance(DT);
            assert!(a.rotation >= ROTATION_MIN && a.rotation <= ROTATION_MAX);
        }
    }

    #[test]
    fn test_flapping_hands_off_to_gliding() {
        let mut a = actor();
        a.impulse();
        let mut t = 0.0;
        while t <= FLAP_DURATION {
            a.advance(DT);
            t += DT;
        }
        a.advance(DT);
        assert_eq!(a.state, ActorState::Gliding);
        assert_eq!(a.wing, WingPhase::Neutral);
    }

    #[test]
    fn test_gliding_falls_then_recovers() {
        let mut a = actor();
        a.state = ActorState::Gliding;
        a.velocity = FALL_VELOCITY_THRESHOLD + 1.0;
        a.advance(DT);
        assert_eq!(a.state, ActorState::Falling);

        a.velocity = -1.0;
        a.advance(DT);
        assert_eq!(a.state, ActorState::Gliding);
    }

    #[test]
    fn test_zero_dt_leaves_actor_unchanged() {
        let mut a = actor();
        let (pos, vel, rot) = (a.position, a.velocity, a.rotation);
        // One simulated second of menu frames, each advanced with dt = 0
        for _ in 0..60 {
            a.advance(0.0);
            a.animate_wing(1.0 / 60.0);
        }
        assert_eq!(a.position, pos);
        assert_eq!(a.velocity, vel);
        assert_eq!(a.rotation, rot);
        assert_eq!(a.state, ActorState::Idle);
    }

    #[test]
    fn test_idle_wing_cycle() {
        let mut a = actor();
        assert_eq!(a.wing, WingPhase::Neutral);
        a.animate_wing(0.25);
        assert_eq!(a.wing, WingPhase::Up);
        a.animate_wing(0.25);
        assert_eq!(a.wing, WingPhase::Mid);
        a.animate_wing(0.25);
        assert_eq!(a.wing, WingPhase::Down);
        a.animate_wing(0.25);
        assert_eq!(a.wing, WingPhase::Up);
    }

    #[test]
    fn test_flapping_wing_sequence() {
        let mut a = actor();
        a.impulse();
        a.advance(0.01);
        assert_eq!(a.wing, WingPhase::Up);
        a.advance(0.05);
        assert_eq!(a.wing, WingPhase::Mid);
        a.advance(0.05);
        assert_eq!(a.wing, WingPhase::Down);
    }

    #[test]
    fn test_bounding_box_centered_on_position() {
        let a = actor();
        let bb = a.bounding_box();
        assert_eq!(bb.center(), a.position);
        assert_eq!(bb.width(), ACTOR_HALF_WIDTH * 2.0);
        assert_eq!(bb.height(), ACTOR_HALF_HEIGHT * 2.0);
    }
}
