//! A single match: the human moves, the autonomous agent answers with one step,
//! and the match ends when the move budget or the resources run out.

use std::cmp::Ordering;
use std::hash::Hasher;

use rand_chacha::rand_core::Rng;
use serde::{Deserialize, Serialize};
use xxhash_rust::xxh3::Xxh3;

use crate::agent::Agent;
use crate::engine::{Collection, TurnEvent, collect_at, take_turn};
use crate::error::ConfigError;
use crate::grid::Grid;
use crate::mapgen;
use crate::mapgen::repair::check_playable;
use crate::settings::MatchSettings;
use crate::types::{Direction, Pos, Strategy};

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum Winner {
    Human,
    Autonomous,
    Draw,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum Margin {
    /// Human scored more than twice the autonomous agent.
    Crushing,
    /// Autonomous agent scored more than twice the human.
    Dominated,
    Close,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct MatchOutcome {
    pub winner: Winner,
    pub margin: Margin,
    pub human_score: u32,
    pub autonomous_score: u32,
}

impl MatchOutcome {
    pub fn from_scores(human_score: u32, autonomous_score: u32) -> Self {
        let winner = match human_score.cmp(&autonomous_score) {
            Ordering::Greater => Winner::Human,
            Ordering::Less => Winner::Autonomous,
            Ordering::Equal => Winner::Draw,
        };
        let human = u64::from(human_score);
        let autonomous = u64::from(autonomous_score);
        let margin = if human > autonomous * 2 {
            Margin::Crushing
        } else if autonomous > human * 2 {
            Margin::Dominated
        } else {
            Margin::Close
        };
        Self { winner, margin, human_score, autonomous_score }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum HumanAction {
    Moved { to: Pos, collected: Option<Collection> },
    /// The requested cell was a wall or off the board; no move was spent.
    Bumped { at: Pos },
    /// The match was already over.
    Ignored,
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct TurnReport {
    pub human: HumanAction,
    pub autonomous: Option<TurnEvent>,
    pub outcome: Option<MatchOutcome>,
}

#[derive(Clone, Debug)]
pub struct Session {
    grid: Grid,
    human: Agent,
    autonomous: Agent,
    strategy: Strategy,
    max_expansions: usize,
    move_limit: u32,
    moves_remaining: u32,
    finished: bool,
}

impl Session {
    /// Generates a fresh grid from `rng` and places both agents on their start cells.
    pub fn new<R: Rng + ?Sized>(
        settings: &MatchSettings,
        rng: &mut R,
    ) -> Result<Self, ConfigError> {
        let grid = mapgen::generate(settings.generation_params()?, rng)?;
        Self::with_grid(grid, settings)
    }

    /// Plays on an existing grid, such as an ASCII fixture. The grid is not repaired
    /// here: a blocked start or goal, an unreachable goal or an orphaned resource is
    /// rejected with `ConfigError::UnplayableGrid`.
    pub fn with_grid(grid: Grid, settings: &MatchSettings) -> Result<Self, ConfigError> {
        check_playable(&grid)?;
        let move_limit = settings.move_limit()?;
        let human = Agent::new(grid.start());
        let autonomous = Agent::new(grid.goal());
        Ok(Self {
            grid,
            human,
            autonomous,
            strategy: settings.strategy,
            max_expansions: settings.max_expansions,
            move_limit,
            moves_remaining: move_limit,
            finished: false,
        })
    }

    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    pub fn human(&self) -> &Agent {
        &self.human
    }

    pub fn autonomous(&self) -> &Agent {
        &self.autonomous
    }

    pub fn strategy(&self) -> Strategy {
        self.strategy
    }

    pub fn max_expansions(&self) -> usize {
        self.max_expansions
    }

    pub fn moves_remaining(&self) -> u32 {
        self.moves_remaining
    }

    pub fn is_finished(&self) -> bool {
        self.finished
    }

    pub fn outcome(&self) -> Option<MatchOutcome> {
        self.finished
            .then(|| MatchOutcome::from_scores(self.human.score, self.autonomous.score))
    }

    /// Applies one human move and, while moves remain, one autonomous reply.
    pub fn human_move(&mut self, direction: Direction) -> TurnReport {
        if self.finished || self.moves_remaining == 0 {
            return TurnReport {
                human: HumanAction::Ignored,
                autonomous: None,
                outcome: self.outcome(),
            };
        }

        let next = self.human.pos.step(direction);
        let human = if self.grid.valid(next) {
            self.human.pos = next;
            self.human.moves += 1;
            let collected = collect_at(&mut self.grid, next);
            if let Some(collection) = collected {
                self.human.credit(collection.value);
            }
            self.moves_remaining -= 1;
            HumanAction::Moved { to: next, collected }
        } else {
            HumanAction::Bumped { at: next }
        };

        let autonomous = if self.moves_remaining > 0 {
            let event =
                take_turn(&mut self.grid, &mut self.autonomous, self.strategy, self.max_expansions);
            if let Some(collection) = event.collected {
                self.autonomous.credit(collection.value);
            }
            self.autonomous.moves += 1;
            if !self.grid.any_resource_left() {
                self.finish();
            }
            Some(event)
        } else {
            self.finish();
            None
        };

        TurnReport { human, autonomous, outcome: self.outcome() }
    }

    /// Back to the post-repair layout with both agents on their start cells.
    pub fn restart(&mut self) {
        self.grid.restore();
        self.human.reset(self.grid.start());
        self.autonomous.reset(self.grid.goal());
        self.moves_remaining = self.move_limit;
        self.finished = false;
    }

    pub fn snapshot_hash(&self) -> u64 {
        let mut hasher = Xxh3::new();
        hasher.write(&self.grid.canonical_bytes());
        for agent in [&self.human, &self.autonomous] {
            hasher.write_i32(agent.pos.y);
            hasher.write_i32(agent.pos.x);
            hasher.write_u32(agent.score);
            hasher.write_u32(agent.moves);
        }
        hasher.write_u32(self.moves_remaining);
        hasher.write_u8(u8::from(self.finished));
        hasher.finish()
    }

    fn finish(&mut self) {
        if self.finished {
            return;
        }
        self.finished = true;
        tracing::info!(
            human = self.human.score,
            autonomous = self.autonomous.score,
            moves_remaining = self.moves_remaining,
            resources_left = self.grid.remaining_resource_count(),
            "match finished"
        );
    }
}
