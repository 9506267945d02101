//! Per-frame simulation tick
//!
//! One call advances the round by exactly one frame: move the bat, move the
//! balls, resolve collisions, pay out brick hits, drop lost balls, then
//! settle lives and the win/lose transition.

use super::collision::CollisionSystem;
use super::state::{GamePhase, GameState};
use crate::audio::AudioSink;

/// Key states sampled for a single frame
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct TickInput {
    pub move_left: bool,
    pub move_right: bool,
    /// Handled by the frame driver; the simulation ignores it
    pub quit: bool,
    /// Start a new game; only honored in `Won` or `Lost`
    pub restart: bool,
}

/// Advance the game state by one frame
pub fn tick(state: &mut GameState, input: &TickInput, audio: &mut dyn AudioSink) {
    if state.phase != GamePhase::Playing {
        if input.restart {
            state.restart();
        }
        return;
    }

    state.frame += 1;

    let width = state.settings.screen.width;
    state.bat.update(input.move_left, input.move_right, width);

    for ball in &mut state.balls {
        ball.advance();
    }

    let mut collision = CollisionSystem::new(&state.settings, audio);
    let mut lost_balls = Vec::new();

    // Balls spawned by power bricks this frame join the end of the list and
    // are first resolved next frame.
    let served = state.balls.len();
    for i in 0..served {
        let ball = &mut state.balls[i];
        if collision.resolve_walls_and_bottom(ball) {
            lost_balls.push(ball.id);
            continue;
        }

        collision.resolve_paddle(ball, &state.bat);

        if let Some(index) = collision.resolve_bricks(ball, &state.bricks) {
            state.apply_brick_hit(index);
        }
    }

    if !lost_balls.is_empty() {
        state.balls.retain(|b| !lost_balls.contains(&b.id));
    }

    if state.balls.is_empty() {
        state.lives = state.lives.saturating_sub(1);
        if state.lives == 0 {
            state.phase = GamePhase::Lost;
            log::info!("Game over, final score {}", state.score);
        } else {
            log::info!("Ball lost, {} lives left", state.lives);
            state.reset_round();
        }
    }

    if state.bricks.is_empty() {
        state.phase = GamePhase::Won;
        log::info!(
            "All bricks cleared at frame {}, score {}",
            state.frame,
            state.score
        );
    }
}
