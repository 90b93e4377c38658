use anyhow::{Context, Result};
use catnect_core::engine::config::EngineConfig;
use clap::Parser;
use rand::rngs::StdRng;
use rand::SeedableRng;
use std::path::PathBuf;

/// Play Connect Four against a minimax opponent.
#[derive(Parser, Debug)]
#[command(name = "catnect4", about = "Play Connect Four against a minimax opponent")]
pub struct Cli {
    /// Plies searched below each candidate move (overrides the config file)
    #[arg(long, short)]
    pub depth: Option<u8>,

    /// Path to a JSON engine configuration
    #[arg(long)]
    pub config: Option<PathBuf>,

    /// Seed for the opponent's comments
    #[arg(long)]
    pub seed: Option<u64>,

    /// Print the board without ANSI colors
    #[arg(long)]
    pub no_color: bool,
}

impl Cli {
    /// Engine settings from `--config`, with `--depth` applied on top.
    ///
    /// # Errors
    ///
    /// Fails when the config file cannot be read or is not valid JSON.
    pub fn engine_config(&self) -> Result<EngineConfig> {
        let config = match &self.config {
            Some(path) => {
                let json = std::fs::read_to_string(path)
                    .with_context(|| format!("reading engine config {}", path.display()))?;
                EngineConfig::load_from_json(&json)
                    .with_context(|| format!("parsing engine config {}", path.display()))?
            }
            None => EngineConfig::default(),
        };

        Ok(match self.depth {
            Some(depth) => config.with_depth(depth).validated(),
            None => config,
        })
    }

    pub fn rng(&self) -> StdRng {
        self.seed
            .map_or_else(StdRng::from_entropy, StdRng::seed_from_u64)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::Rng;

    #[test]
    fn test_defaults() -> Result<()> {
        let cli = Cli::try_parse_from(["catnect4"])?;
        assert!(!cli.no_color);
        assert_eq!(cli.engine_config()?, EngineConfig::default());
        Ok(())
    }

    #[test]
    fn test_depth_override() -> Result<()> {
        let cli = Cli::try_parse_from(["catnect4", "--depth", "2", "--no-color"])?;
        assert!(cli.no_color);
        assert_eq!(cli.engine_config()?.max_depth, 2);

        let cli = Cli::try_parse_from(["catnect4", "-d", "99"])?;
        assert_eq!(cli.engine_config()?.max_depth, 42);
        Ok(())
    }

    #[test]
    fn test_config_file_and_override() -> Result<()> {
        let path = std::env::temp_dir().join(format!("catnect4-cli-{}.json", std::process::id()));
        std::fs::write(&path, r#"{ "max_depth": 3, "take_immediate_wins": false }"#)?;

        let arg = path.display().to_string();
        let from_file = Cli::try_parse_from(["catnect4", "--config", &arg])?.engine_config()?;
        let overridden =
            Cli::try_parse_from(["catnect4", "--config", &arg, "--depth", "1"])?.engine_config()?;
        std::fs::remove_file(&path)?;

        assert_eq!(from_file.max_depth, 3);
        assert!(!from_file.take_immediate_wins);
        assert_eq!(overridden.max_depth, 1);
        assert!(!overridden.take_immediate_wins);
        Ok(())
    }

    #[test]
    fn test_missing_config_file() -> Result<()> {
        let cli = Cli::try_parse_from(["catnect4", "--config", "/nonexistent/catnect4.json"])?;
        let err = cli.engine_config().err().map(|e| e.to_string());
        assert_eq!(
            err.as_deref(),
            Some("reading engine config /nonexistent/catnect4.json")
        );
        Ok(())
    }

    #[test]
    fn test_seed_is_reproducible() -> Result<()> {
        let cli = Cli::try_parse_from(["catnect4", "--seed", "7"])?;
        let a: u64 = cli.rng().gen();
        let b: u64 = cli.rng().gen();
        assert_eq!(a, b);
        Ok(())
    }
}
