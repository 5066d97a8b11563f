use gemrush_core::{Difficulty, MatchOutcome, MatchSettings, Session, Strategy};
use gemrush_tools::autopilot::Autopilot;
use gemrush_tools::leaderboard::Leaderboard;
use rand_chacha::ChaCha8Rng;
use rand_chacha::rand_core::SeedableRng;

fn play(settings: &MatchSettings, seed: u64) -> (MatchOutcome, u64) {
    let mut rng = ChaCha8Rng::seed_from_u64(seed);
    let mut session = Session::new(settings, &mut rng).expect("settings should be valid");
    let mut autopilot = Autopilot::new(seed);
    let limit = session.moves_remaining();

    let mut turns = 0;
    while !session.is_finished() {
        session.human_move(autopilot.choose(&session));
        turns += 1;
        assert!(turns <= limit + 1, "autopilot should never stall a match");
    }
    let outcome = session.outcome().expect("finished match has an outcome");
    (outcome, session.snapshot_hash())
}

#[test]
fn seeded_matches_replay_identically() {
    for strategy in Strategy::ALL {
        let settings = MatchSettings { strategy, ..MatchSettings::for_difficulty(Difficulty::Easy) };
        assert_eq!(play(&settings, 31), play(&settings, 31), "{strategy:?} diverged");
    }
}

#[test]
fn autopilot_beats_an_idle_player() {
    let settings = MatchSettings::for_difficulty(Difficulty::Easy);
    let total: u32 = (0..8).map(|seed| play(&settings, seed).0.human_score).sum();
    assert!(total > 0);
}

#[test]
fn leaderboard_tracks_the_best_matches_of_a_run() {
    let settings = MatchSettings::for_difficulty(Difficulty::Medium);
    let mut board = Leaderboard::default();
    let mut scores = Vec::new();
    for seed in 100..110 {
        let score = play(&settings, seed).0.human_score;
        board.record(score);
        scores.push(score);
    }
    scores.sort_unstable_by(|a, b| b.cmp(a));
    scores.truncate(5);
    assert_eq!(board.top(), scores.as_slice());
}
