//! Value-per-distance target choice for the autonomous agent.

use super::pathfinding::breadth_first;
use crate::grid::Grid;
use crate::types::Pos;

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Target {
    pub pos: Pos,
    pub value: u32,
    /// Steps along the breadth-first route, never less than 1.
    pub distance: usize,
    pub score: f64,
}

/// Picks the resource maximising `value / max(distance, 1)`.
///
/// Distances are true breadth-first route lengths under `max_expansions`; resources
/// with no route inside that budget are skipped. Ties keep the first resource in
/// row-major order. `None` means nothing reachable is left.
pub fn select_target(grid: &Grid, from: Pos, max_expansions: usize) -> Option<Target> {
    let mut best: Option<Target> = None;

    for pos in grid.resource_positions() {
        let path = breadth_first(grid, from, pos, max_expansions);
        if path.is_empty() {
            continue;
        }
        let value = grid.value_at(pos);
        let distance = (path.len() - 1).max(1);
        let score = f64::from(value) / distance as f64;
        if best.is_none_or(|current| score > current.score) {
            best = Some(Target { pos, value, distance, score });
        }
    }

    best
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::engine::pathfinding::DEFAULT_MAX_EXPANSIONS;

    #[test]
    fn lone_diamond_across_an_open_board_scores_value_over_steps() {
        let grid = Grid::from_ascii(&[
            ".....", //
            ".....",
            ".....",
            ".....",
            "....5",
        ])
        .expect("fixture should parse");

        let target = select_target(&grid, Pos::new(0, 0), DEFAULT_MAX_EXPANSIONS)
            .expect("the diamond should be selected");

        assert_eq!(target.pos, Pos::new(4, 4));
        assert_eq!(target.distance, 8);
        assert_eq!(target.score, 62.5);
    }

    #[test]
    fn nearer_cheap_gem_can_beat_distant_expensive_one() {
        let grid = Grid::from_ascii(&[
            ".2....", //
            "......",
            "......",
            "......",
            "......",
            ".....5",
        ])
        .expect("fixture should parse");

        let target = select_target(&grid, Pos::new(0, 0), DEFAULT_MAX_EXPANSIONS)
            .expect("a gem should be selected");

        assert_eq!(target.pos, Pos::new(0, 1));
        assert_eq!(target.score, 200.0);
    }

    #[test]
    fn equal_scores_keep_the_first_in_row_major_order() {
        let grid = Grid::from_ascii(&[
            "..2", //
            "...",
            "2..",
        ])
        .expect("fixture should parse");

        let target = select_target(&grid, Pos::new(1, 1), DEFAULT_MAX_EXPANSIONS)
            .expect("a gem should be selected");

        assert_eq!(target.pos, Pos::new(0, 2));
    }

    #[test]
    fn standing_on_a_gem_counts_as_distance_one() {
        let grid = Grid::from_ascii(&["3.", ".."]).expect("fixture should parse");
        let target = select_target(&grid, Pos::new(0, 0), DEFAULT_MAX_EXPANSIONS)
            .expect("a gem should be selected");
        assert_eq!(target.distance, 1);
        assert_eq!(target.score, 300.0);
    }

    #[test]
    fn unreachable_gems_are_skipped_rather_than_chosen() {
        let grid = Grid::from_ascii(&[
            "..#5", //
            "..##",
            "....",
            "1...",
        ])
        .expect("fixture should parse");

        let target = select_target(&grid, Pos::new(0, 0), DEFAULT_MAX_EXPANSIONS)
            .expect("the gold should be selected");

        assert_eq!(target.pos, Pos::new(3, 0));
    }

    #[test]
    fn an_explicit_budget_below_the_default_is_honoured() {
        let grid = Grid::from_ascii(&[
            ".....", //
            ".....",
            ".....",
            ".....",
            "....5",
        ])
        .expect("fixture should parse");
        assert_eq!(select_target(&grid, Pos::new(0, 0), 5), None);
    }

    #[test]
    fn no_resources_means_no_target() {
        let grid = Grid::from_ascii(&["..", ".."]).expect("fixture should parse");
        assert_eq!(select_target(&grid, Pos::new(0, 0), DEFAULT_MAX_EXPANSIONS), None);
    }
}
