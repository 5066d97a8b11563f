//! Stand-in for the human player in headless matches.
//!
//! The autopilot chases the same value-per-distance target the autonomous agent
//! would pick, walking there by breadth-first search. With nothing reachable in
//! budget it wanders to a seeded random open neighbour, so a run is reproducible
//! and never wastes a turn bumping into a wall.

use gemrush_core::engine::breadth_first;
use gemrush_core::{DEFAULT_MAX_EXPANSIONS, Direction, Session, select_target};
use rand_chacha::ChaCha8Rng;
use rand_chacha::rand_core::{Rng, SeedableRng};

pub struct Autopilot {
    rng: ChaCha8Rng,
}

impl Autopilot {
    pub fn new(seed: u64) -> Self {
        Self { rng: ChaCha8Rng::seed_from_u64(seed) }
    }

    pub fn choose(&mut self, session: &Session) -> Direction {
        planned_direction(session).unwrap_or_else(|| self.wander(session))
    }

    fn wander(&mut self, session: &Session) -> Direction {
        let from = session.human().pos;
        let open: Vec<Direction> = Direction::ALL
            .into_iter()
            .filter(|&direction| session.grid().valid(from.step(direction)))
            .collect();
        let choices = if open.is_empty() { &Direction::ALL[..] } else { &open[..] };
        choices[(self.rng.next_u32() % choices.len() as u32) as usize]
    }
}

fn planned_direction(session: &Session) -> Option<Direction> {
    let grid = session.grid();
    let from = session.human().pos;
    let budget = session.max_expansions();
    let target = select_target(grid, from, budget.max(DEFAULT_MAX_EXPANSIONS))?;
    let path = breadth_first(grid, from, target.pos, budget);
    match path.as_slice() {
        [current, next, ..] => Direction::between(*current, *next),
        _ => None,
    }
}
