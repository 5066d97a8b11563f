//! TOML match settings and command-line overrides.

use std::fs;
use std::path::Path;

use anyhow::{Context, Result};
use gemrush_core::{Difficulty, MatchSettings, Strategy};

/// Reads a settings file. Missing keys fall back to the medium preset.
pub fn load_settings(path: &Path) -> Result<MatchSettings> {
    let content = fs::read_to_string(path)
        .with_context(|| format!("failed to read settings file: {}", path.display()))?;
    let settings: MatchSettings = toml::from_str(&content)
        .with_context(|| format!("failed to parse settings file: {}", path.display()))?;
    Ok(settings)
}

/// Values given on the command line; each one wins over the settings file.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Overrides {
    pub difficulty: Option<Difficulty>,
    pub strategy: Option<Strategy>,
    pub seed: Option<u64>,
    pub max_expansions: Option<usize>,
}

impl Overrides {
    pub fn apply(&self, settings: &mut MatchSettings) {
        if let Some(difficulty) = self.difficulty {
            settings.difficulty = difficulty;
        }
        if let Some(strategy) = self.strategy {
            settings.strategy = strategy;
        }
        if let Some(seed) = self.seed {
            settings.seed = Some(seed);
        }
        if let Some(max_expansions) = self.max_expansions {
            settings.max_expansions = max_expansions;
        }
    }
}

pub fn parse_difficulty(value: &str) -> Result<Difficulty, String> {
    Difficulty::from_name(value)
        .ok_or_else(|| format!("unknown difficulty '{value}' (expected easy, medium or hard)"))
}

pub fn parse_strategy(value: &str) -> Result<Strategy, String> {
    Strategy::from_name(value).ok_or_else(|| {
        let names: Vec<&str> = Strategy::ALL.iter().map(|strategy| strategy.name()).collect();
        format!("unknown strategy '{value}' (expected one of {})", names.join(", "))
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn settings_file_overrides_only_the_keys_it_names() {
        let dir = tempdir().expect("tempdir");
        let path = dir.path().join("match.toml");
        fs::write(
            &path,
            "difficulty = \"hard\"\nstrategy = \"a_star\"\nmove_limit = 40\nseed = 9\n",
        )
        .expect("write");

        let settings = load_settings(&path).expect("load");

        assert_eq!(settings.difficulty, Difficulty::Hard);
        assert_eq!(settings.strategy, Strategy::AStar);
        assert_eq!(settings.move_limit, Some(40));
        assert_eq!(settings.seed, Some(9));
        assert_eq!(settings.max_expansions, 100);
        assert_eq!(settings.size, None);
    }

    #[test]
    fn unknown_keys_are_rejected() {
        let dir = tempdir().expect("tempdir");
        let path = dir.path().join("match.toml");
        fs::write(&path, "difficulty = \"easy\"\nlives = 3\n").expect("write");

        let error = load_settings(&path).expect_err("unknown key should fail");
        assert!(format!("{error:#}").contains("lives"));
    }

    #[test]
    fn missing_file_names_the_path() {
        let dir = tempdir().expect("tempdir");
        let path = dir.path().join("absent.toml");
        let error = load_settings(&path).expect_err("missing file should fail");
        assert!(error.to_string().contains("absent.toml"));
    }

    #[test]
    fn command_line_values_win() {
        let mut settings = MatchSettings { seed: Some(1), ..MatchSettings::default() };
        let overrides = Overrides {
            strategy: Some(Strategy::GreedyManhattan),
            seed: Some(5),
            ..Overrides::default()
        };

        overrides.apply(&mut settings);

        assert_eq!(settings.strategy, Strategy::GreedyManhattan);
        assert_eq!(settings.seed, Some(5));
        assert_eq!(settings.difficulty, Difficulty::Medium);
    }

    #[test]
    fn names_parse_into_presets() {
        assert_eq!(parse_difficulty("easy"), Ok(Difficulty::Easy));
        assert!(parse_difficulty("nightmare").is_err());
        assert_eq!(parse_strategy("divide_and_conquer"), Ok(Strategy::DivideAndConquer));
        assert!(parse_strategy("dijkstra").is_err_and(|message| message.contains("a_star")));
    }
}
