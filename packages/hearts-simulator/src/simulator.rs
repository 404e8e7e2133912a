//! Runs one seeded game in memory and hands back its report.

use hearts::{ConfigError, DomainError, Game, GameConfig, GameReport};
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

/// Result of simulating a complete game.
#[derive(Debug, Clone)]
pub struct GameResult {
    pub report: GameReport,
}

impl GameResult {
    /// Final totals in seating order.
    pub fn final_totals(&self) -> Vec<(String, u32)> {
        self.report
            .seating
            .iter()
            .map(|name| (name.clone(), self.report.total_for(name).unwrap_or(0)))
            .collect()
    }
}

pub struct Simulator<'a> {
    config: &'a GameConfig,
    game_seed: [u8; 32],
    game_id: u32,
}

impl<'a> Simulator<'a> {
    pub fn new(config: &'a GameConfig, game_seed: [u8; 32], game_id: u32) -> Self {
        Self {
            config,
            game_seed,
            game_id,
        }
    }

    pub fn simulate_game(&self) -> Result<GameResult, SimulatorError> {
        let rng = ChaCha8Rng::from_seed(self.game_seed);
        let mut game = Game::with_rng(self.config, rng).map_err(SimulatorError::Config)?;
        let report = game
            .start()
            .map_err(|e| SimulatorError::Domain(self.game_id, e))?;
        Ok(GameResult { report })
    }
}

/// Errors that can occur during simulation.
#[derive(Debug)]
pub enum SimulatorError {
    /// Configuration rejected before play
    Config(ConfigError),
    /// Engine failure inside a game
    Domain(u32, DomainError),
}

impl std::fmt::Display for SimulatorError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            SimulatorError::Config(err) => write!(f, "Config error: {err}"),
            SimulatorError::Domain(game, err) => {
                write!(f, "Domain error (game {game}, {}): {err}", err.code())
            }
        }
    }
}

impl std::error::Error for SimulatorError {}
