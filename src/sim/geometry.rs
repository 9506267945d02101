//! Axis-aligned rectangle geometry
//!
//! Screen coordinates: x grows right, y grows down. A rectangle is its
//! top-left corner plus a size; edges are derived.

use glam::Vec2;
use serde::{Deserialize, Serialize};

/// Axis-aligned rectangle
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Rect {
    /// Top-left corner
    pub pos: Vec2,
    pub size: Vec2,
}

impl Rect {
    pub fn new(x: f32, y: f32, width: f32, height: f32) -> Self {
        Self {
            pos: Vec2::new(x, y),
            size: Vec2::new(width, height),
        }
    }

    /// Rectangle of the given size centered on `center`
    pub fn from_center(center: Vec2, size: Vec2) -> Self {
        Self {
            pos: center - size / 2.0,
            size,
        }
    }

    #[inline]
    pub fn left(&self) -> f32 {
        self.pos.x
    }

    #[inline]
    pub fn right(&self) -> f32 {
        self.pos.x + self.size.x
    }

    #[inline]
    pub fn top(&self) -> f32 {
        self.pos.y
    }

    #[inline]
    pub fn bottom(&self) -> f32 {
        self.pos.y + self.size.y
    }

    #[inline]
    pub fn width(&self) -> f32 {
        self.size.x
    }

    #[inline]
    pub fn height(&self) -> f32 {
        self.size.y
    }

    pub fn center(&self) -> Vec2 {
        self.pos + self.size / 2.0
    }

    pub fn set_left(&mut self, left: f32) {
        self.pos.x = left;
    }

    pub fn set_right(&mut self, right: f32) {
        self.pos.x = right - self.size.x;
    }

    pub fn set_top(&mut self, top: f32) {
        self.pos.y = top;
    }

    pub fn set_bottom(&mut self, bottom: f32) {
        self.pos.y = bottom - self.size.y;
    }

    pub fn set_center_x(&mut self, x: f32) {
        self.pos.x = x - self.size.x / 2.0;
    }

    pub fn translate(&mut self, delta: Vec2) {
        self.pos += delta;
    }

    /// Strict overlap test: rectangles that only share an edge do not intersect.
    pub fn intersects(&self, other: &Rect) -> bool {
        self.left() < other.right()
            && self.right() > other.left()
            && self.top() < other.bottom()
            && self.bottom() > other.top()
    }
}

/// Obstacle edge a moving rectangle was pushed out through
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Side {
    Left,
    Right,
    Top,
    Bottom,
}

/// Outcome of `reflect_on_rect`
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Reflection {
    pub vel: Vec2,
    /// Ball rectangle moved flush against `side` of the obstacle
    pub rect: Rect,
    pub side: Side,
}

/// Push `ball` out of `obstacle` through the edge of least penetration and
/// point the matching velocity component away from the obstacle.
///
/// Penetration depths are compared in the order left, right, top, bottom;
/// the first minimum wins, so a tie always resolves to the earlier edge.
pub fn reflect_on_rect(ball: Rect, vel: Vec2, obstacle: &Rect) -> Reflection {
    let overlaps = [
        (Side::Left, ball.right() - obstacle.left()),
        (Side::Right, obstacle.right() - ball.left()),
        (Side::Top, ball.bottom() - obstacle.top()),
        (Side::Bottom, obstacle.bottom() - ball.top()),
    ];

    let mut side = overlaps[0].0;
    let mut min_overlap = overlaps[0].1;
    for &(candidate, overlap) in &overlaps[1..] {
        if overlap < min_overlap {
            side = candidate;
            min_overlap = overlap;
        }
    }

    let mut rect = ball;
    let mut vel = vel;
    match side {
        Side::Left => {
            rect.set_right(obstacle.left());
            vel.x = -vel.x.abs();
        }
        Side::Right => {
            rect.set_left(obstacle.right());
            vel.x = vel.x.abs();
        }
        Side::Top => {
            rect.set_bottom(obstacle.top());
            vel.y = -vel.y.abs();
        }
        Side::Bottom => {
            rect.set_top(obstacle.bottom());
            vel.y = vel.y.abs();
        }
    }

    Reflection { vel, rect, side }
}
