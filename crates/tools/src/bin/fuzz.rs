use anyhow::{Result, ensure};
use clap::Parser;
use gemrush_core::engine::{breadth_first, manhattan};
use gemrush_core::{Difficulty, Grid, HumanAction, MatchSettings, Session, Strategy};
use gemrush_tools::autopilot::Autopilot;
use rand_chacha::{
    ChaCha8Rng,
    rand_core::{Rng, SeedableRng},
};

#[derive(Parser)]
#[command(author, version, about, long_about = None)]
struct Args {
    #[arg(short, long, default_value_t = 42)]
    seed: u64,
    #[arg(short, long, default_value_t = 200)]
    matches: u32,
}

fn choose<T: Copy>(rng: &mut ChaCha8Rng, slice: &[T]) -> T {
    slice[rng.next_u64() as usize % slice.len()]
}

/// Uniform probability in `[0, max)` with two decimals, so sums stay exact enough.
fn probability(rng: &mut ChaCha8Rng, max_hundredths: u32) -> f64 {
    f64::from(rng.next_u32() % max_hundredths) / 100.0
}

fn random_settings(rng: &mut ChaCha8Rng) -> MatchSettings {
    MatchSettings {
        difficulty: choose(rng, &[Difficulty::Easy, Difficulty::Medium, Difficulty::Hard]),
        strategy: choose(rng, &Strategy::ALL),
        max_expansions: 1 + rng.next_u32() as usize % 400,
        seed: None,
        size: Some(1 + rng.next_u32() as usize % 24),
        wall_probability: Some(probability(rng, 60)),
        resource_probability: Some(probability(rng, 40)),
        move_limit: Some(1 + rng.next_u32() % 120),
    }
}

fn resource_total(grid: &Grid) -> u32 {
    grid.resource_positions().map(|pos| grid.value_at(pos)).sum()
}

fn check_generated(grid: &Grid) -> Result<()> {
    let budget = grid.size() * grid.size();
    ensure!(grid.valid(grid.start()), "start cell is blocked");
    ensure!(grid.valid(grid.goal()), "goal cell is blocked");
    ensure!(!grid.has_resource(grid.start()), "start cell holds a resource");
    ensure!(
        !breadth_first(grid, grid.start(), grid.goal(), budget).is_empty(),
        "goal unreachable from start"
    );
    for pos in grid.resource_positions() {
        ensure!(
            !breadth_first(grid, grid.start(), pos, budget).is_empty(),
            "resource at {pos:?} is unreachable"
        );
    }
    Ok(())
}

fn play(settings: &MatchSettings, seed: u64) -> Result<u32> {
    let mut rng = ChaCha8Rng::seed_from_u64(seed);
    let mut session = Session::new(settings, &mut rng)?;
    check_generated(session.grid())?;

    let initial_hash = session.snapshot_hash();
    let initial_total = resource_total(session.grid());
    let mut autopilot = Autopilot::new(seed);
    let mut turns = 0;

    while !session.is_finished() {
        let moves_before = session.moves_remaining();
        let report = session.human_move(autopilot.choose(&session));
        turns += 1;

        ensure!(report.human != HumanAction::Ignored, "live session ignored a move");
        ensure!(session.moves_remaining() <= moves_before, "move budget grew");
        if let Some(event) = report.autonomous {
            ensure!(manhattan(event.from, event.to) <= 1, "autonomous agent jumped: {event:?}");
        }
        for agent in [session.human(), session.autonomous()] {
            ensure!(session.grid().valid(agent.pos), "agent stands on {:?}", agent.pos);
        }
        let collected = session.human().score + session.autonomous().score;
        ensure!(
            collected + resource_total(session.grid()) == initial_total,
            "resource value was created or lost"
        );
        ensure!(turns <= 10_000, "match never finished");
    }

    let human_score = session.human().score;
    session.restart();
    ensure!(session.snapshot_hash() == initial_hash, "restart did not restore the match");
    ensure!(resource_total(session.grid()) == initial_total, "restore lost resources");

    Ok(human_score)
}

fn main() -> Result<()> {
    let args = Args::parse();

    println!("Starting fuzz harness on seed {} for {} matches...", args.seed, args.matches);
    let mut rng = ChaCha8Rng::seed_from_u64(args.seed);

    let mut best = 0;
    for index in 0..args.matches {
        let settings = random_settings(&mut rng);
        let seed = rng.next_u64();
        let score = play(&settings, seed).map_err(|error| {
            anyhow::anyhow!("match {index} (seed {seed}, settings {settings:?}): {error}")
        })?;
        best = best.max(score);
    }

    println!("All {} matches held their invariants. Best human score: {best}", args.matches);
    Ok(())
}
