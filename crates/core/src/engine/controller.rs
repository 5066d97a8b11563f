//! One autonomous turn: choose a target, plan a route, advance a single cell, collect.

use super::pathfinding::{DEFAULT_MAX_EXPANSIONS, find_path};
use super::targeting::{Target, select_target};
use crate::agent::Agent;
use crate::grid::Grid;
use crate::types::{GemKind, Pos, Strategy};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Collection {
    pub pos: Pos,
    pub gem: GemKind,
    pub value: u32,
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct TurnEvent {
    pub from: Pos,
    pub to: Pos,
    pub target: Option<Target>,
    pub collected: Option<Collection>,
}

impl TurnEvent {
    pub fn moved(&self) -> bool {
        self.from != self.to
    }
}

/// Target plus the freshly planned route toward it.
///
/// Target choice always explores at least `DEFAULT_MAX_EXPANSIONS` cells; the
/// caller's budget only bounds the route search.
pub fn plan(
    grid: &Grid,
    from: Pos,
    strategy: Strategy,
    max_expansions: usize,
) -> Option<(Target, Vec<Pos>)> {
    let target = select_target(grid, from, max_expansions.max(DEFAULT_MAX_EXPANSIONS))?;
    let path = find_path(grid, from, target.pos, strategy, max_expansions);
    tracing::debug!(
        ?from,
        goal = ?target.pos,
        score = target.score,
        ?strategy,
        path_len = path.len(),
        "planned autonomous move"
    );
    Some((target, path))
}

/// Where the agent at `from` should stand after this turn. Returns `from` itself when
/// there is no target or the route has fewer than two cells.
pub fn decide_move(grid: &Grid, from: Pos, strategy: Strategy, max_expansions: usize) -> Pos {
    match plan(grid, from, strategy, max_expansions) {
        Some((_, path)) if path.len() >= 2 => path[1],
        _ => from,
    }
}

/// Moves `agent` at most one cell and collects whatever resource it lands on.
///
/// Only the position is written; crediting the collected value and counting moves
/// is left to the caller.
pub fn take_turn(
    grid: &mut Grid,
    agent: &mut Agent,
    strategy: Strategy,
    max_expansions: usize,
) -> TurnEvent {
    let from = agent.pos;
    let planned = plan(grid, from, strategy, max_expansions);
    let target = planned.as_ref().map(|(target, _)| *target);
    let to = match &planned {
        Some((_, path)) if path.len() >= 2 => path[1],
        _ => from,
    };

    agent.pos = to;
    let collected = if to != from { collect_at(grid, to) } else { None };
    if let Some(collection) = collected {
        tracing::debug!(pos = ?collection.pos, value = collection.value, "autonomous agent collected");
    }

    TurnEvent { from, to, target, collected }
}

/// Collects the resource at `pos`, reporting what was taken.
pub fn collect_at(grid: &mut Grid, pos: Pos) -> Option<Collection> {
    let gem = grid.gem_at(pos)?;
    let value = grid.collect(pos);
    Some(Collection { pos, gem, value })
}
