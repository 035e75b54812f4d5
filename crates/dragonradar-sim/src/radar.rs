//! Radar: distance and heading from the player to every dragon ball.
//!
//! Collected balls stay in the report, flagged as collected.

use log::{debug, log_enabled, Level};

use dragonradar_core::enums::CellStatus;
use dragonradar_core::state::{RadarReading, RadarReport};
use dragonradar_core::types::GridPos;
use dragonradar_grid::{EntityRegistry, Grid};

/// Build a radar report for a player at `player`.
pub fn build_report(
    player: GridPos,
    player_energy: i32,
    balls: &EntityRegistry,
    grid: &Grid,
) -> RadarReport {
    let readings = balls
        .iter()
        .map(|(id, ball)| {
            let collected = grid.content_at(ball) == CellStatus::Collected;
            (id, RadarReading::between(player, ball, collected))
        })
        .collect();

    let report = RadarReport {
        player,
        player_energy,
        readings,
    };
    if log_enabled!(Level::Debug) {
        log_report(&report);
    }
    report
}

fn log_report(report: &RadarReport) {
    debug!("radar from {}, energy {}", report.player, report.player_energy);
    for (id, r) in &report.readings {
        let heading = [r.col_direction, r.row_direction]
            .iter()
            .flatten()
            .map(ToString::to_string)
            .collect::<Vec<_>>()
            .join(" ");
        debug!(
            "  ball {id}: {} col, {} row, heading [{heading}]{}",
            r.col_distance,
            r.row_distance,
            if r.collected { " (collected)" } else { "" }
        );
    }
}
