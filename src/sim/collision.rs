//! Ball collision response
//!
//! Three passes per ball per frame, always in this order: walls and bottom,
//! then the bat, then bricks. The system holds only tuning values and the
//! audio sink; entities are borrowed per call.

use super::geometry::reflect_on_rect;
use super::state::{Ball, Bat, Brick};
use crate::audio::{AudioSink, SoundEffect};
use crate::clamp;
use crate::settings::Settings;

pub struct CollisionSystem<'a> {
    width: f32,
    height: f32,
    max_speed: f32,
    paddle_english: f32,
    force_down_after_brick: bool,
    audio: &'a mut dyn AudioSink,
}

impl<'a> CollisionSystem<'a> {
    pub fn new(settings: &Settings, audio: &'a mut dyn AudioSink) -> Self {
        Self {
            width: settings.screen.width,
            height: settings.screen.height,
            max_speed: settings.ball.max_speed,
            paddle_english: settings.ball.paddle_english,
            force_down_after_brick: settings.rules.force_ball_down_after_brick,
            audio,
        }
    }

    /// Bounce off the left, right and top boundaries. Returns true once the
    /// ball's top edge is below the playfield; the caller removes it.
    pub fn resolve_walls_and_bottom(&mut self, ball: &mut Ball) -> bool {
        if ball.rect.left() <= 0.0 {
            ball.rect.set_left(0.0);
            ball.vel.x = ball.vel.x.abs();
            self.audio.play(SoundEffect::Bounce);
        } else if ball.rect.right() >= self.width {
            ball.rect.set_right(self.width);
            ball.vel.x = -ball.vel.x.abs();
            self.audio.play(SoundEffect::Bounce);
        }

        if ball.rect.top() <= 0.0 {
            ball.rect.set_top(0.0);
            ball.vel.y = ball.vel.y.abs();
            self.audio.play(SoundEffect::Bounce);
        }

        ball.rect.top() > self.height
    }

    /// Bounce off the bat. Only a descending ball reacts, so a ball resting
    /// on the bat does not retrigger every frame. Off-center contact adds
    /// horizontal speed, and the bounce re-arms brick scoring.
    pub fn resolve_paddle(&mut self, ball: &mut Ball, bat: &Bat) {
        if !ball.rect.intersects(&bat.rect) || ball.vel.y <= 0.0 {
            return;
        }

        ball.rect.set_bottom(bat.rect.top());

        let offset = (ball.rect.center().x - bat.rect.center().x) / (bat.rect.width() / 2.0);
        ball.vel.x = clamp(
            ball.vel.x + offset * self.paddle_english,
            -self.max_speed,
            self.max_speed,
        );
        ball.vel.y = -ball.vel.y.abs();
        ball.speed_cap(self.max_speed);

        ball.can_score_on_brick = true;
        self.audio.play(SoundEffect::Bounce);
    }

    /// Bounce off the first brick in `bricks` the ball overlaps.
    ///
    /// Every contact bounces the ball, but only a contact made while moving
    /// up with scoring armed counts. Returns the index of the brick that
    /// should take a hit, if any.
    pub fn resolve_bricks(&mut self, ball: &mut Ball, bricks: &[Brick]) -> Option<usize> {
        let index = bricks.iter().position(|b| ball.rect.intersects(&b.rect))?;

        let was_moving_up = ball.vel.y < 0.0;

        let reflection = reflect_on_rect(ball.rect, ball.vel, &bricks[index].rect);
        ball.rect = reflection.rect;
        ball.vel = reflection.vel;

        // One extra step so the ball clears the brick before next frame
        ball.rect.translate(ball.vel);

        if self.force_down_after_brick {
            ball.vel.y = ball.vel.y.abs();
        }
        ball.speed_cap(self.max_speed);

        if ball.can_score_on_brick && was_moving_up {
            ball.can_score_on_brick = false;
            self.audio.play(SoundEffect::BrickHit);
            return Some(index);
        }

        None
    }
}
