//! Deterministic simulation module
//!
//! All gameplay logic lives here. This module must be pure and deterministic:
//! - One call to `tick` per frame, no wall-clock time
//! - Randomness only through an injected `RandomSource`
//! - Stable iteration order (layout order for bricks, spawn order for balls)
//! - No rendering, audio backend or platform dependencies

pub mod collision;
pub mod geometry;
pub mod layout;
pub mod rng;
pub mod snapshot;
pub mod state;
pub mod tick;

pub use collision::CollisionSystem;
pub use geometry::{Rect, Reflection, Side, reflect_on_rect};
pub use layout::build_bricks;
pub use rng::{PcgRandom, RandomSource, ScriptedRandom};
pub use snapshot::{BrickView, Snapshot};
pub use state::{Ball, Bat, Brick, BrickKind, GamePhase, GameState, Sprite};
pub use tick::{TickInput, tick};
