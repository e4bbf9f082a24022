//! Gated obstacles: paired vertical barriers with an open corridor
//!
//! Each obstacle owns its horizontal motion and four collision surfaces: two
//! barrier bodies plus the wider cap lips at the gap edges. The `passed` flag
//! is one-shot for the obstacle's lifetime; the coordinator decides when to
//! set it so a pass can never award score twice.

use glam::Vec2;

use super::rect::Aabb;
use crate::consts::*;

/// A barrier pair scrolling right to left
#[derive(Debug, Clone)]
pub struct Obstacle {
    /// Leading (left) edge of the barrier body
    pub x: f32,
    /// Vertical center of the open corridor
    pub gap_center_y: f32,
    /// Corridor height
    pub gap_height: f32,
    /// Horizontal speed, captured from the difficulty level at spawn time
    pub speed: f32,
    /// Bottom of the playable area; the lower barrier extends down to it
    pub ground_line: f32,
    passed: bool,
    top_body: Aabb,
    top_cap: Aabb,
    bottom_body: Aabb,
    bottom_cap: Aabb,
}

impl Obstacle {
    pub fn new(x: f32, gap_center_y: f32, gap_height: f32, speed: f32, ground_line: f32) -> Self {
        let mut obstacle = Self {
            x,
            gap_center_y,
            gap_height,
            speed,
            ground_line,
            passed: false,
            top_body: Aabb::from_min_size(Vec2::ZERO, Vec2::ZERO),
            top_cap: Aabb::from_min_size(Vec2::ZERO, Vec2::ZERO),
            bottom_body: Aabb::from_min_size(Vec2::ZERO, Vec2::ZERO),
            bottom_cap: Aabb::from_min_size(Vec2::ZERO, Vec2::ZERO),
        };
        obstacle.update_surfaces();
        obstacle
    }

    /// Scroll left and rebuild the collision surfaces
    pub fn advance(&mut self, dt: f32) {
        self.x -= self.speed * dt;
        self.update_surfaces();
    }

    /// True while the trailing edge sits left of `reference_x` and the pass
    /// has not been claimed yet. Pure query; [`Self::mark_passed`] claims it.
    pub fn has_passed(&self, reference_x: f32) -> bool {
        !self.passed && self.trailing_edge() < reference_x
    }

    /// Claim the pass. One-shot: `passed` never resets for this obstacle.
    pub fn mark_passed(&mut self) {
        self.passed = true;
    }

    #[inline]
    pub fn passed(&self) -> bool {
        self.passed
    }

    /// Whether the query box overlaps any barrier body or cap lip
    pub fn collides_with(&self, query: &Aabb) -> bool {
        query.intersects(&self.top_body)
            || query.intersects(&self.top_cap)
            || query.intersects(&self.bottom_body)
            || query.intersects(&self.bottom_cap)
    }

    /// Fully past the left playfield boundary
    pub fn is_offscreen(&self) -> bool {
        self.trailing_edge() < 0.0
    }

    #[inline]
    pub fn trailing_edge(&self) -> f32 {
        self.x + OBSTACLE_WIDTH
    }

    /// Top edge of the corridor
    #[inline]
    pub fn gap_top(&self) -> f32 {
        self.gap_center_y - self.gap_height / 2.0
    }

    /// Bottom edge of the corridor
    #[inline]
    pub fn gap_bottom(&self) -> f32 {
        self.gap_center_y + self.gap_height / 2.0
    }

    /// Collision surfaces in draw order: top body, top cap, bottom body,
    /// bottom cap. Caps overhang the body on both sides, modeling the lip.
    pub fn surfaces(&self) -> [&Aabb; 4] {
        [
            &self.top_body,
            &self.top_cap,
            &self.bottom_body,
            &self.bottom_cap,
        ]
    }

    fn update_surfaces(&mut self) {
        let top_h = self.gap_top();
        let bottom_y = self.gap_bottom();
        let cap_x = self.x - OBSTACLE_CAP_OVERHANG;
        let cap_w = OBSTACLE_WIDTH + OBSTACLE_CAP_OVERHANG * 2.0;

        self.top_body = Aabb::from_min_size(
            Vec2::new(self.x, 0.0),
            Vec2::new(OBSTACLE_WIDTH, top_h),
        );
        self.top_cap = Aabb::from_min_size(
            Vec2::new(cap_x, top_h - OBSTACLE_CAP_HEIGHT),
            Vec2::new(cap_w, OBSTACLE_CAP_HEIGHT),
        );
        self.bottom_body = Aabb::from_min_size(
            Vec2::new(self.x, bottom_y),
            Vec2::new(OBSTACLE_WIDTH, self.ground_line - bottom_y),
        );
        self.bottom_cap = Aabb::from_min_size(
            Vec2::new(cap_x, bottom_y),
            Vec2::new(cap_w, OBSTACLE_CAP_HEIGHT),
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const GROUND: f32 = 720.0;

    fn obstacle() -> Obstacle {
        Obstacle::new(400.0, 300.0, 185.0, 160.0, GROUND)
    }

    #[test]
    fn test_advance_moves_left_and_tracks_surfaces() {
        let mut o = obstacle();
        o.advance(0.5);
        assert_eq!(o.x, 320.0);
        assert_eq!(o.surfaces()[0].min.x, 320.0);
        assert_eq!(o.surfaces()[1].min.x, 320.0 - OBSTACLE_CAP_OVERHANG);
    }

    #[test]
    fn test_box_inside_gap_never_collides() {
        let o = obstacle();
        // Actor-sized box dead center in the corridor
        let query = Aabb::from_center_half(
            Vec2::new(o.x + OBSTACLE_WIDTH / 2.0, o.gap_center_y),
            Vec2::new(ACTOR_HALF_WIDTH, ACTOR_HALF_HEIGHT),
        );
        assert!(!o.collides_with(&query));
    }

    #[test]
    fn test_box_overlapping_barrier_collides() {
        let o = obstacle();
        let above_gap = Aabb::from_center_half(
            Vec2::new(o.x + OBSTACLE_WIDTH / 2.0, o.gap_top() - 40.0),
            Vec2::new(ACTOR_HALF_WIDTH, ACTOR_HALF_HEIGHT),
        );
        let below_gap = Aabb::from_center_half(
            Vec2::new(o.x + OBSTACLE_WIDTH / 2.0, o.gap_bottom() + 40.0),
            Vec2::new(ACTOR_HALF_WIDTH, ACTOR_HALF_HEIGHT),
        );
        assert!(o.collides_with(&above_gap));
        assert!(o.collides_with(&below_gap));
    }

    #[test]
    fn test_cap_lip_is_wider_than_body() {
        let o = obstacle();
        // A box brushing the lip overhang but left of the barrier body
        let query = Aabb::from_min_size(
            Vec2::new(o.x - 10.0, o.gap_top() - 10.0),
            Vec2::new(8.0, 8.0),
        );
        assert!(o.collides_with(&query));

        // Same x but vertically inside the gap, clear of the caps
        let query = Aabb::from_min_size(
            Vec2::new(o.x - 10.0, o.gap_center_y - 4.0),
            Vec2::new(8.0, 8.0),
        );
        assert!(!o.collides_with(&query));
    }

    #[test]
    fn test_has_passed_requires_trailing_edge() {
        let o = obstacle();
        assert!(!o.has_passed(o.x + OBSTACLE_WIDTH - 1.0));
        assert!(!o.has_passed(o.x + OBSTACLE_WIDTH));
        assert!(o.has_passed(o.x + OBSTACLE_WIDTH + 1.0));
    }

    #[test]
    fn test_mark_passed_is_one_shot() {
        let mut o = obstacle();
        let reference = o.x + OBSTACLE_WIDTH + 1.0;
        assert!(o.has_passed(reference));
        o.mark_passed();
        assert!(o.passed());
        assert!(!o.has_passed(reference));
        // Stays claimed as the obstacle keeps moving
        o.advance(1.0);
        assert!(o.passed());
        assert!(!o.has_passed(reference));
    }

    #[test]
    fn test_offscreen_at_left_boundary() {
        let mut o = obstacle();
        o.x = -OBSTACLE_WIDTH + 0.5;
        o.advance(0.0);
        assert!(!o.is_offscreen());
        o.x = -OBSTACLE_WIDTH - 0.5;
        assert!(o.is_offscreen());
    }

    #[test]
    fn test_bottom_barrier_reaches_ground_line() {
        let o = obstacle();
        assert_eq!(o.surfaces()[2].max.y, GROUND);
    }
}
