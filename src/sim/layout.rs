//! Brick wall layout
//!
//! Rows of equal cells centered in the playfield. Odd rows shift right by
//! half a brick for a staggered pattern, and a brick the shift would push
//! past the side margin is dropped rather than clipped. The leading
//! `hard_rows` rows are Hard; every other brick is Soft unless a
//! `power_chance` roll upgrades it to Power.

use super::geometry::Rect;
use super::rng::RandomSource;
use super::state::{Brick, BrickKind};
use crate::settings::BrickSettings;

/// Build the full brick wall in row-major order
pub fn build_bricks(
    cfg: &BrickSettings,
    playfield_width: f32,
    rng: &mut dyn RandomSource,
) -> Vec<Brick> {
    let cols = cfg.cols as f32;
    let grid_width = cols * cfg.width + (cols - 1.0) * cfg.gap;
    let start_x = ((playfield_width - grid_width) / 2.0).floor();
    let half_shift = (cfg.width / 2.0).floor();
    let right_limit = playfield_width - cfg.side_margin;

    let mut bricks = Vec::with_capacity((cfg.rows * cfg.cols) as usize);
    let mut slot = 0u32;

    for row in 0..cfg.rows {
        let y = cfg.top_margin + row as f32 * (cfg.height + cfg.gap);
        let shift = if row % 2 == 1 { half_shift } else { 0.0 };

        for col in 0..cfg.cols {
            let x = start_x + shift + col as f32 * (cfg.width + cfg.gap);
            let rect = Rect::new(x, y, cfg.width, cfg.height);
            let id = slot;
            slot += 1;

            if rect.right() > right_limit {
                continue;
            }

            let kind = if row < cfg.hard_rows {
                BrickKind::Hard
            } else if rng.chance(cfg.power_chance) {
                BrickKind::Power
            } else {
                BrickKind::Soft
            };
            let stats = cfg.stats(kind);

            bricks.push(Brick {
                id,
                rect,
                kind,
                hits_remaining: stats.hits,
                reward_points: stats.points,
            });
        }
    }

    log::info!(
        "Built {} bricks ({} power) in {}x{} grid",
        bricks.len(),
        bricks.iter().filter(|b| b.kind == BrickKind::Power).count(),
        cfg.rows,
        cfg.cols
    );

    bricks
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sim::rng::{PcgRandom, ScriptedRandom};

    #[test]
    fn test_default_grid_shape() {
        let cfg = BrickSettings::default();
        let bricks = build_bricks(&cfg, 900.0, &mut ScriptedRandom::default());

        // 854px wide grid: even rows fit all 10, odd rows lose their last brick
        assert_eq!(bricks.len(), 4 * 10 + 3 * 9);
        assert_eq!(bricks[0].rect, Rect::new(23.0, 50.0, 80.0, 50.0));
        assert_eq!(bricks[10].rect, Rect::new(63.0, 106.0, 80.0, 50.0));
        assert!(bricks.iter().all(|b| b.rect.right() <= 890.0));
        assert!(bricks.iter().all(|b| b.rect.left() >= 0.0));
    }

    #[test]
    fn test_leading_rows_are_hard() {
        let cfg = BrickSettings::default();
        let bricks = build_bricks(&cfg, 900.0, &mut ScriptedRandom::default());
        for brick in &bricks {
            if brick.rect.top() < 150.0 {
                assert_eq!(brick.kind, BrickKind::Hard);
                assert_eq!(brick.hits_remaining, 3);
                assert_eq!(brick.reward_points, 120);
            } else {
                assert_eq!(brick.kind, BrickKind::Soft);
                assert_eq!(brick.hits_remaining, 2);
                assert_eq!(brick.reward_points, 60);
            }
        }
    }

    #[test]
    fn test_power_rolls_only_for_soft_rows() {
        let cfg = BrickSettings {
            rows: 3,
            cols: 2,
            hard_rows: 1,
            ..Default::default()
        };
        // Row 0 is Hard and draws nothing; row 1 and 2 draw one roll each brick
        let mut rng = ScriptedRandom::new([0.05, 0.5, 0.5, 0.01]);
        let bricks = build_bricks(&cfg, 900.0, &mut rng);
        let kinds: Vec<_> = bricks.iter().map(|b| b.kind).collect();
        assert_eq!(
            kinds,
            vec![
                BrickKind::Hard,
                BrickKind::Hard,
                BrickKind::Power,
                BrickKind::Soft,
                BrickKind::Soft,
                BrickKind::Power,
            ]
        );
        assert_eq!(rng.remaining(), 0);
        assert_eq!(bricks[2].hits_remaining, 3);
        assert_eq!(bricks[2].reward_points, 150);
    }

    #[test]
    fn test_shifted_brick_skipped_not_clipped() {
        let cfg = BrickSettings {
            rows: 2,
            cols: 3,
            width: 100.0,
            gap: 0.0,
            side_margin: 0.0,
            hard_rows: 0,
            power_chance: 0.0,
            ..Default::default()
        };
        // Grid fills the 300px playfield exactly, so the shifted row drops its last brick
        let bricks = build_bricks(&cfg, 300.0, &mut ScriptedRandom::default());
        assert_eq!(bricks.len(), 5);
        assert_eq!(bricks[3].rect.left(), 50.0);
        assert_eq!(bricks[4].rect.right(), 250.0);
        // Slot ids keep their grid position even when a cell is skipped
        assert_eq!(bricks.iter().map(|b| b.id).collect::<Vec<_>>(), vec![0, 1, 2, 3, 4]);
    }

    #[test]
    fn test_bricks_never_overlap() {
        let cfg = BrickSettings::default();
        let bricks = build_bricks(&cfg, 900.0, &mut PcgRandom::new(3));
        for (i, a) in bricks.iter().enumerate() {
            for b in &bricks[i + 1..] {
                assert!(!a.rect.intersects(&b.rect));
            }
        }
    }

    #[test]
    fn test_seeded_layout_reproducible() {
        let cfg = BrickSettings::default();
        let a = build_bricks(&cfg, 900.0, &mut PcgRandom::new(11));
        let b = build_bricks(&cfg, 900.0, &mut PcgRandom::new(11));
        assert_eq!(a, b);
    }
}
