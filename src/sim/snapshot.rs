//! Per-frame view for renderers
//!
//! Everything a renderer or HUD needs, detached from the live state so it
//! can be serialized or handed to another thread.

use serde::{Deserialize, Serialize};

use super::geometry::Rect;
use super::state::{BrickKind, GamePhase, GameState, Sprite};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BrickView {
    pub rect: Rect,
    pub kind: BrickKind,
    pub color: [u8; 3],
    pub hits_remaining: u32,
    /// Draw the inner outline
    pub reinforced: bool,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Snapshot {
    pub frame: u64,
    pub phase: GamePhase,
    pub score: u64,
    pub lives: u32,
    pub ball_count: usize,
    pub bat: Rect,
    pub balls: Vec<Rect>,
    pub bricks: Vec<BrickView>,
}

impl Snapshot {
    pub fn capture(state: &GameState) -> Self {
        let mut balls = Vec::with_capacity(state.balls.len());
        let mut bricks = Vec::with_capacity(state.bricks.len());
        let mut bat = state.bat.rect;

        for sprite in state.sprites() {
            match sprite {
                Sprite::Bat(b) => bat = b.rect,
                Sprite::Ball(ball) => balls.push(ball.rect),
                Sprite::Brick(brick) => bricks.push(BrickView {
                    rect: brick.rect,
                    kind: brick.kind,
                    color: sprite.color(),
                    hits_remaining: brick.hits_remaining,
                    reinforced: brick.is_reinforced(),
                }),
            }
        }

        Self {
            frame: state.frame,
            phase: state.phase,
            score: state.score,
            lives: state.lives,
            ball_count: balls.len(),
            bat,
            balls,
            bricks,
        }
    }

    /// One-line HUD text
    pub fn hud_line(&self) -> String {
        format!(
            "Score: {}    Lives: {}    Balls: {}",
            self.score, self.lives, self.ball_count
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::settings::Settings;

    #[test]
    fn test_capture_matches_state() {
        let state = GameState::with_seed(Settings::default(), 5);
        let snap = Snapshot::capture(&state);
        assert_eq!(snap.bricks.len(), state.bricks.len());
        assert_eq!(snap.ball_count, 1);
        assert_eq!(snap.bat, state.bat.rect);
        assert_eq!(snap.phase, GamePhase::Playing);
        assert_eq!(snap.hud_line(), "Score: 0    Lives: 5    Balls: 1");

        let hard = snap.bricks.iter().find(|b| b.kind == BrickKind::Hard).unwrap();
        assert!(hard.reinforced);
        assert_eq!(hard.color, [67, 60, 200]);
    }

    #[test]
    fn test_snapshot_json_roundtrip() {
        let state = GameState::with_seed(Settings::default(), 8);
        let snap = Snapshot::capture(&state);
        let json = serde_json::to_string(&snap).unwrap();
        assert!(json.contains("\"phase\":\"Playing\""));
        let back: Snapshot = serde_json::from_str(&json).unwrap();
        assert_eq!(back, snap);
    }
}
