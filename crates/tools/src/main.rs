//! Headless match simulator: the autopilot plays the human side against the
//! autonomous agent for a number of seeded matches.

use std::io;
use std::path::PathBuf;
use std::time::{SystemTime, UNIX_EPOCH};

use anyhow::{Context, Result};
use clap::Parser;
use gemrush_core::{Difficulty, MatchSettings, Margin, Session, Strategy, Winner};
use gemrush_tools::autopilot::Autopilot;
use gemrush_tools::leaderboard::Leaderboard;
use gemrush_tools::settings::{Overrides, load_settings, parse_difficulty, parse_strategy};
use rand_chacha::ChaCha8Rng;
use rand_chacha::rand_core::SeedableRng;
use serde::Serialize;
use tracing::Level;
use tracing_subscriber::EnvFilter;

/// Seeds the autopilot apart from the grid so the two streams never line up.
const AUTOPILOT_SEED_SALT: u64 = 0x9e37_79b9_7f4a_7c15;

#[derive(Parser)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// TOML file with match settings; flags below take precedence
    #[arg(short, long)]
    config: Option<PathBuf>,
    /// easy, medium or hard
    #[arg(short, long, value_parser = parse_difficulty)]
    difficulty: Option<Difficulty>,
    /// Search strategy driving the autonomous agent
    #[arg(long, value_parser = parse_strategy)]
    strategy: Option<Strategy>,
    /// Seed of the first match; later matches count up from it
    #[arg(short, long)]
    seed: Option<u64>,
    #[arg(short, long, default_value_t = 1)]
    matches: u32,
    /// Cells a single search may expand before giving up
    #[arg(long)]
    max_expansions: Option<usize>,
    /// Print one JSON document instead of text summaries
    #[arg(long)]
    json: bool,
}

#[derive(Serialize)]
struct MatchSummary {
    seed: u64,
    strategy: Strategy,
    size: usize,
    human_score: u32,
    autonomous_score: u32,
    winner: Winner,
    margin: Margin,
    turns: u32,
    resources_left: usize,
    rank: Option<usize>,
}

#[derive(Serialize)]
struct RunReport {
    difficulty: Difficulty,
    matches: Vec<MatchSummary>,
    leaderboard: Vec<u32>,
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(log_filter(EnvFilter::from_default_env()))
        .with_writer(io::stderr)
        .init();

    let args = Args::parse();

    let mut settings = match &args.config {
        Some(path) => load_settings(path)?,
        None => MatchSettings::default(),
    };
    Overrides {
        difficulty: args.difficulty,
        strategy: args.strategy,
        seed: args.seed,
        max_expansions: args.max_expansions,
    }
    .apply(&mut settings);

    let base_seed = settings.seed.unwrap_or_else(runtime_seed);
    let mut leaderboard = Leaderboard::default();
    let mut summaries = Vec::with_capacity(args.matches as usize);

    for index in 0..args.matches {
        let seed = base_seed.wrapping_add(u64::from(index));
        let mut summary = play_match(&settings, seed)
            .with_context(|| format!("match {} (seed {seed}) failed", index + 1))?;
        summary.rank = leaderboard.record(summary.human_score);
        if !args.json {
            print_summary(index + 1, &summary);
        }
        summaries.push(summary);
    }

    if args.json {
        let report = RunReport {
            difficulty: settings.difficulty,
            matches: summaries,
            leaderboard: leaderboard.top().to_vec(),
        };
        println!("{}", serde_json::to_string_pretty(&report)?);
    } else {
        let top: Vec<String> = leaderboard.top().iter().map(u32::to_string).collect();
        println!("Top scores: {}", top.join(", "));
    }

    Ok(())
}

fn play_match(settings: &MatchSettings, seed: u64) -> Result<MatchSummary> {
    let mut rng = ChaCha8Rng::seed_from_u64(seed);
    let mut session = Session::new(settings, &mut rng).context("invalid match settings")?;
    let mut autopilot = Autopilot::new(seed ^ AUTOPILOT_SEED_SALT);

    let mut turns = 0;
    let outcome = loop {
        if let Some(outcome) = session.outcome() {
            break outcome;
        }
        let direction = autopilot.choose(&session);
        session.human_move(direction);
        turns += 1;
    };

    Ok(MatchSummary {
        seed,
        strategy: session.strategy(),
        size: session.grid().size(),
        human_score: outcome.human_score,
        autonomous_score: outcome.autonomous_score,
        winner: outcome.winner,
        margin: outcome.margin,
        turns,
        resources_left: session.grid().remaining_resource_count(),
        rank: None,
    })
}

fn print_summary(number: u32, summary: &MatchSummary) {
    let verdict = match (summary.winner, summary.margin) {
        (Winner::Draw, _) => "draw",
        (_, Margin::Crushing) => "crushing human win",
        (_, Margin::Dominated) => "autonomous agent dominated",
        (Winner::Human, Margin::Close) => "close human win",
        (Winner::Autonomous, Margin::Close) => "close autonomous win",
    };
    println!(
        "Match {number} [seed {}, {}x{}, {}]: human {} vs autonomous {} after {} turns ({verdict})",
        summary.seed,
        summary.size,
        summary.size,
        summary.strategy.name(),
        summary.human_score,
        summary.autonomous_score,
        summary.turns,
    );
    if let Some(rank) = summary.rank {
        println!("  new leaderboard entry at #{rank}");
    }
}

/// `RUST_LOG` directives plus an INFO default, as the other clients do.
fn log_filter(from_env: EnvFilter) -> EnvFilter {
    from_env.add_directive(Level::INFO.into())
}

fn runtime_seed() -> u64 {
    let nanos =
        SystemTime::now().duration_since(UNIX_EPOCH).map_or(0_u128, |duration| duration.as_nanos());
    (nanos as u64) ^ ((nanos >> 64) as u64)
}

#[cfg(test)]
mod tests {
    use tracing::level_filters::LevelFilter;

    use super::*;

    #[test]
    fn default_log_level_is_info() {
        let filter = log_filter(EnvFilter::new(""));
        assert_eq!(filter.max_level_hint(), Some(LevelFilter::INFO));
    }

    #[test]
    fn module_directives_survive_the_default() {
        let filter = log_filter(EnvFilter::new("gemrush_core=debug"));
        assert_eq!(filter.max_level_hint(), Some(LevelFilter::DEBUG));
    }
}
