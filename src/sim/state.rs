//! Game state and entity types
//!
//! `GameState` is the round controller's data: it owns the bat, every live
//! ball and brick, the score and lives, and the phase. Frame logic that
//! mutates it lives in `tick`.

use glam::Vec2;
use serde::{Deserialize, Serialize};

use super::geometry::Rect;
use super::layout::build_bricks;
use super::rng::{PcgRandom, RandomSource};
use crate::settings::{BatSettings, Settings};

/// Round phase
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum GamePhase {
    Playing,
    /// Every brick destroyed
    Won,
    /// Out of lives
    Lost,
}

/// A ball entity
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Ball {
    pub id: u32,
    pub rect: Rect,
    /// Pixels per frame, each axis capped at the configured max speed
    pub vel: Vec2,
    /// Re-armed by a bat bounce, spent by the first scoring brick hit
    pub can_score_on_brick: bool,
}

impl Ball {
    pub fn new(id: u32, center: Vec2, size: Vec2, vel: Vec2) -> Self {
        Self {
            id,
            rect: Rect::from_center(center, size),
            vel,
            can_score_on_brick: true,
        }
    }

    /// Move one frame along the current velocity
    pub fn advance(&mut self) {
        self.rect.translate(self.vel);
    }

    /// Clamp each velocity component to `[-max_speed, max_speed]`
    pub fn speed_cap(&mut self, max_speed: f32) {
        self.vel = self.vel.clamp(Vec2::splat(-max_speed), Vec2::splat(max_speed));
    }
}

/// Brick types
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum BrickKind {
    Soft,
    Hard,
    /// Spawns an extra ball when destroyed
    Power,
}

impl BrickKind {
    /// RGB fill color
    pub fn color(&self) -> [u8; 3] {
        match self {
            BrickKind::Soft => [169, 42, 189],
            BrickKind::Hard => [67, 60, 200],
            BrickKind::Power => [255, 180, 80],
        }
    }
}

/// A brick entity. Its rectangle never moves.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Brick {
    /// Layout slot, row-major
    pub id: u32,
    pub rect: Rect,
    pub kind: BrickKind,
    pub hits_remaining: u32,
    pub reward_points: u32,
}

impl Brick {
    /// Take one hit. Returns true when this hit destroyed the brick.
    pub fn apply_hit(&mut self) -> bool {
        self.hits_remaining = self.hits_remaining.saturating_sub(1);
        self.hits_remaining == 0
    }

    /// Hard bricks with more than one hit left get an inner outline
    pub fn is_reinforced(&self) -> bool {
        self.kind == BrickKind::Hard && self.hits_remaining > 1
    }
}

/// The player's paddle
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Bat {
    pub rect: Rect,
    /// Pixels per frame
    pub speed: f32,
}

impl Bat {
    /// Bat centered horizontally near the bottom of the playfield
    pub fn new(bat: &BatSettings, playfield_width: f32, playfield_height: f32) -> Self {
        let mut rect = Rect::new(
            0.0,
            playfield_height - bat.y_offset_from_bottom,
            bat.width,
            bat.height,
        );
        rect.set_center_x(playfield_width / 2.0);
        Self {
            rect,
            speed: bat.speed,
        }
    }

    /// Apply held move keys, then keep the bat inside `[0, playfield_width]`
    pub fn update(&mut self, move_left: bool, move_right: bool, playfield_width: f32) {
        if move_left {
            self.rect.pos.x -= self.speed;
        }
        if move_right {
            self.rect.pos.x += self.speed;
        }
        let max_left = (playfield_width - self.rect.width()).max(0.0);
        self.rect.pos.x = crate::clamp(self.rect.pos.x, 0.0, max_left);
    }

    pub fn recenter(&mut self, playfield_width: f32) {
        self.rect.set_center_x(playfield_width / 2.0);
    }
}

/// Drawable view over one entity, in draw order
#[derive(Debug, Clone, Copy)]
pub enum Sprite<'a> {
    Bat(&'a Bat),
    Brick(&'a Brick),
    Ball(&'a Ball),
}

impl Sprite<'_> {
    pub fn bounds(&self) -> Rect {
        match self {
            Sprite::Bat(bat) => bat.rect,
            Sprite::Brick(brick) => brick.rect,
            Sprite::Ball(ball) => ball.rect,
        }
    }

    /// Fill color, used when no image is available for the entity
    pub fn color(&self) -> [u8; 3] {
        match self {
            Sprite::Bat(_) => [235, 235, 235],
            Sprite::Brick(brick) => brick.kind.color(),
            Sprite::Ball(_) => [255, 255, 255],
        }
    }
}

/// Complete round state
#[derive(Debug)]
pub struct GameState {
    pub settings: Settings,
    pub bat: Bat,
    /// Live balls, in serve/spawn order
    pub balls: Vec<Ball>,
    /// Live bricks, in layout order. Collision scans them in this order.
    pub bricks: Vec<Brick>,
    pub score: u64,
    pub lives: u32,
    pub phase: GamePhase,
    /// Frames simulated while Playing
    pub frame: u64,
    rng: Box<dyn RandomSource>,
    next_ball_id: u32,
}

impl GameState {
    /// Fresh game: full brick layout, one served ball, `Playing`.
    ///
    /// `settings` must already be validated.
    pub fn new(settings: Settings, rng: Box<dyn RandomSource>) -> Self {
        let bat = Bat::new(&settings.bat, settings.screen.width, settings.screen.height);
        let lives = settings.rules.start_lives;
        let mut state = Self {
            settings,
            bat,
            balls: Vec::new(),
            bricks: Vec::new(),
            score: 0,
            lives,
            phase: GamePhase::Playing,
            frame: 0,
            rng,
            next_ball_id: 1,
        };
        state.rebuild_bricks();
        state.serve_ball();
        state
    }

    /// Fresh game driven by a seeded PCG generator
    pub fn with_seed(settings: Settings, seed: u64) -> Self {
        Self::new(settings, Box::new(PcgRandom::new(seed)))
    }

    /// Launch a ball from `center`: random horizontal direction, upward
    /// vertical speed. Used for serves and power-brick spawns alike.
    pub fn launch_ball(&mut self, center: Vec2) -> u32 {
        let speed = self.settings.ball.serve_speed;
        let vx = if self.rng.coin_flip() { -speed } else { speed };
        let size = Vec2::new(self.settings.ball.width, self.settings.ball.height);

        let id = self.next_ball_id;
        self.next_ball_id += 1;
        self.balls.push(Ball::new(id, center, size, Vec2::new(vx, -speed)));
        id
    }

    /// Launch a ball just above the bat
    pub fn serve_ball(&mut self) -> u32 {
        let center = Vec2::new(
            self.bat.rect.center().x,
            self.bat.rect.top() - self.settings.ball.serve_height_above_bat,
        );
        self.launch_ball(center)
    }

    /// After a lost life: recenter the bat and serve a single ball
    pub fn reset_round(&mut self) {
        self.balls.clear();
        self.bat.recenter(self.settings.screen.width);
        self.serve_ball();
    }

    /// Start over from `Won` or `Lost`
    pub fn restart(&mut self) {
        self.score = 0;
        self.lives = self.settings.rules.start_lives;
        self.rebuild_bricks();
        self.balls.clear();
        self.bat.recenter(self.settings.screen.width);
        self.serve_ball();
        self.phase = GamePhase::Playing;
        log::info!(
            "Game restarted: {} bricks, {} lives",
            self.bricks.len(),
            self.lives
        );
    }

    fn rebuild_bricks(&mut self) {
        self.bricks = build_bricks(
            &self.settings.bricks,
            self.settings.screen.width,
            self.rng.as_mut(),
        );
    }

    /// Apply a scored hit to the brick at `index`: destroy it and pay out
    /// its reward, or pay the partial-hit bonus if that rule is on. A
    /// destroyed Power brick launches a ball from its center.
    pub fn apply_brick_hit(&mut self, index: usize) {
        if !self.bricks[index].apply_hit() {
            if let Some(bonus) = self.settings.rules.partial_hit_bonus {
                self.score += u64::from(bonus);
            }
            return;
        }

        let brick = self.bricks.remove(index);
        self.score += u64::from(brick.reward_points);
        log::debug!(
            "Brick {} ({:?}) destroyed, +{} -> {}",
            brick.id,
            brick.kind,
            brick.reward_points,
            self.score
        );

        if brick.kind == BrickKind::Power {
            let id = self.launch_ball(brick.rect.center());
            log::debug!("Power brick {} spawned ball {}", brick.id, id);
        }
    }

    pub fn live_ball_count(&self) -> usize {
        self.balls.len()
    }

    /// Every entity in draw order: bat, bricks, balls
    pub fn sprites(&self) -> impl Iterator<Item = Sprite<'_>> {
        std::iter::once(Sprite::Bat(&self.bat))
            .chain(self.bricks.iter().map(Sprite::Brick))
            .chain(self.balls.iter().map(Sprite::Ball))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sim::rng::ScriptedRandom;

    fn state_without_power() -> GameState {
        GameState::new(Settings::default(), Box::new(ScriptedRandom::default()))
    }

    #[test]
    fn test_new_game() {
        let state = state_without_power();
        assert_eq!(state.phase, GamePhase::Playing);
        assert_eq!(state.lives, 5);
        assert_eq!(state.score, 0);
        assert_eq!(state.balls.len(), 1);
        assert!(!state.bricks.is_empty());
        assert!(state.bricks.iter().all(|b| b.kind != BrickKind::Power));
    }

    #[test]
    fn test_serve_position_and_velocity() {
        let state = state_without_power();
        let ball = &state.balls[0];
        assert_eq!(ball.rect.center().x, state.bat.rect.center().x);
        assert_eq!(ball.rect.center().y, state.bat.rect.top() - 20.0);
        // Exhausted script: coin flip is false, serve goes right
        assert_eq!(ball.vel, Vec2::new(4.0, -4.0));
        assert!(ball.can_score_on_brick);
    }

    #[test]
    fn test_launch_direction_from_rng() {
        let mut state =
            GameState::new(Settings::default(), Box::new(ScriptedRandom::new(Vec::new())));
        state.rng = Box::new(ScriptedRandom::new([0.1]));
        let id = state.launch_ball(Vec2::new(300.0, 300.0));
        let ball = state.balls.iter().find(|b| b.id == id).unwrap();
        assert_eq!(ball.vel, Vec2::new(-4.0, -4.0));
        assert_eq!(ball.rect.center(), Vec2::new(300.0, 300.0));
    }

    #[test]
    fn test_ball_speed_cap() {
        let mut ball = Ball::new(1, Vec2::ZERO, Vec2::splat(18.0), Vec2::new(9.0, -12.0));
        ball.speed_cap(6.0);
        assert_eq!(ball.vel, Vec2::new(6.0, -6.0));
    }

    #[test]
    fn test_brick_apply_hit() {
        let mut brick = Brick {
            id: 0,
            rect: Rect::new(0.0, 0.0, 80.0, 50.0),
            kind: BrickKind::Hard,
            hits_remaining: 2,
            reward_points: 120,
        };
        assert!(brick.is_reinforced());
        assert!(!brick.apply_hit());
        assert!(!brick.is_reinforced());
        assert!(brick.apply_hit());
        assert!(brick.apply_hit());
        assert_eq!(brick.hits_remaining, 0);
    }

    #[test]
    fn test_bat_clamped_to_playfield() {
        let settings = Settings::default();
        let mut bat = Bat::new(&settings.bat, 900.0, 900.0);
        assert_eq!(bat.rect.left(), 390.0);
        assert_eq!(bat.rect.top(), 845.0);

        for _ in 0..100 {
            bat.update(true, false, 900.0);
            assert!(bat.rect.left() >= 0.0);
        }
        assert_eq!(bat.rect.left(), 0.0);

        for _ in 0..200 {
            bat.update(false, true, 900.0);
            assert!(bat.rect.right() <= 900.0);
        }
        assert_eq!(bat.rect.right(), 900.0);

        // Both keys cancel out
        let before = bat.rect;
        bat.update(true, true, 900.0);
        assert_eq!(bat.rect, before);
    }

    #[test]
    fn test_sprites_draw_order() {
        let state = state_without_power();
        let sprites: Vec<_> = state.sprites().collect();
        assert_eq!(sprites.len(), 1 + state.bricks.len() + state.balls.len());
        assert!(matches!(sprites[0], Sprite::Bat(_)));
        assert!(matches!(sprites[1], Sprite::Brick(_)));
        assert!(matches!(sprites.last(), Some(Sprite::Ball(_))));
        assert_eq!(sprites[1].color(), state.bricks[0].kind.color());
    }
}
