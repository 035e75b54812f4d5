//! Placement generator: dragon balls, then enemies, then obstacles.
//!
//! Order matters. Enemy acceptance looks at the balls already placed and
//! obstacle acceptance looks at both balls and enemies.

use log::{debug, trace};

use dragonradar_core::constants::DRAGON_BALL_COUNT;
use dragonradar_core::difficulty::DifficultyProfile;
use dragonradar_core::error::ConfigError;
use dragonradar_core::types::GridPos;

use crate::layout::Layout;
use crate::source::CoordinateSource;

/// Build a fully populated `size`×`size` layout.
pub fn generate<S>(
    size: usize,
    difficulty: &DifficultyProfile,
    source: &mut S,
) -> Result<Layout, ConfigError>
where
    S: CoordinateSource + ?Sized,
{
    difficulty.validate(size)?;
    let mut layout = Layout::empty(size)?;

    place_dragon_balls(&mut layout, source);
    place_enemies(&mut layout, difficulty, source);
    place_obstacles(&mut layout, difficulty, source);

    debug!(
        "generated {size}x{size} layout: {} balls, {} enemies, {} obstacles",
        layout.balls.len(),
        layout.enemies.len(),
        layout.obstacles.len()
    );
    debug_assert!(layout.is_consistent());
    Ok(layout)
}

/// Candidate test for an enemy: empty, or adjacent to a ball.
pub fn accepts_enemy_at(layout: &Layout, pos: GridPos) -> bool {
    layout.grid.is_empty_at(pos) || layout.is_adjacent_to_ball(pos)
}

/// Candidate test for an obstacle: empty, or adjacent to a ball or an enemy.
pub fn accepts_obstacle_at(layout: &Layout, pos: GridPos) -> bool {
    layout.grid.is_empty_at(pos)
        || layout.is_adjacent_to_ball(pos)
        || layout.is_adjacent_to_enemy(pos)
}

fn place_dragon_balls<S>(layout: &mut Layout, source: &mut S)
where
    S: CoordinateSource + ?Sized,
{
    for _ in 0..DRAGON_BALL_COUNT {
        let pos = sample_until(layout, source, |l, p| l.grid.is_empty_at(p));
        let id = layout.place_ball(pos);
        trace!("dragon ball {id} placed at {pos}");
    }
}

fn place_enemies<S>(layout: &mut Layout, difficulty: &DifficultyProfile, source: &mut S)
where
    S: CoordinateSource + ?Sized,
{
    let count = source.next_count(difficulty.max_enemies(layout.size()));
    for _ in 0..count {
        let pos = sample_until(layout, source, accepts_enemy_at);
        let id = layout.place_enemy(pos);
        trace!("enemy {id} placed at {pos}");
    }
}

fn place_obstacles<S>(layout: &mut Layout, difficulty: &DifficultyProfile, source: &mut S)
where
    S: CoordinateSource + ?Sized,
{
    let count = source.next_count(difficulty.max_obstacles(layout.size()));
    for _ in 0..count {
        let pos = sample_until(layout, source, accepts_obstacle_at);
        let id = layout.place_obstacle(pos);
        trace!("obstacle {id} placed at {pos}");
    }
}

/// Draw cells until one passes `accepts` and is free.
///
/// A cell can pass the adjacency branch of `accepts` while already holding
/// another entity. Such a candidate is drawn again so that no entity is ever
/// overwritten.
fn sample_until<S, F>(layout: &Layout, source: &mut S, accepts: F) -> GridPos
where
    S: CoordinateSource + ?Sized,
    F: Fn(&Layout, GridPos) -> bool,
{
    loop {
        let pos = source.next_pos(layout.size());
        if !accepts(layout, pos) {
            continue;
        }
        if layout.grid.is_empty_at(pos) {
            return pos;
        }
        debug!(
            "candidate {pos} passed adjacency but holds {:?}, resampling",
            layout.grid.content_at(pos)
        );
    }
}
