//! Metrics collection and output for simulation results.

use hearts::domain::passing::PassDirection;
use hearts::domain::report::HandReport;
use serde::Serialize;

use crate::simulator::GameResult;
use crate::types::MetricsLevel;

/// Complete game metrics for output.
#[derive(Debug, Clone, Serialize)]
pub struct GameMetrics {
    pub game_id: u32,
    /// Hex-encoded 32-byte RNG seed
    pub seed: String,
    pub timestamp: String,
    pub config: RunConfig,
    pub result: GameResultMetrics,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub hands: Vec<HandMetrics>,
    pub player_metrics: Vec<PlayerMetrics>,
}

#[derive(Debug, Clone, Serialize)]
pub struct RunConfig {
    pub players: Vec<String>,
    pub max_points: u32,
    pub total_games: u32,
}

#[derive(Debug, Clone, Serialize)]
pub struct GameResultMetrics {
    /// Totals in seating order.
    pub final_totals: Vec<PlayerPoints>,
    pub winner: String,
    pub hands_played: usize,
    pub moon_shots: usize,
    pub duration_ms: f64,
}

#[derive(Debug, Clone, Serialize)]
pub struct PlayerPoints {
    pub player: String,
    pub points: u32,
}

#[derive(Debug, Clone, Serialize)]
pub struct HandMetrics {
    pub hand_number: u32,
    pub pass_direction: PassDirection,
    pub shot_the_moon: bool,
    pub hand_winner: Option<String>,
    pub points: Vec<PlayerPoints>,
}

#[derive(Debug, Clone, Serialize)]
pub struct PlayerMetrics {
    pub seat: usize,
    pub player: String,
    pub total_points: u32,
    pub hands_won: usize,
    pub moons_shot: usize,
    pub avg_points_per_hand: f64,
}

/// Build metrics from a finished game.
pub fn build_game_metrics(
    game_id: u32,
    seed: &[u8; 32],
    total_games: u32,
    result: &GameResult,
    duration_ms: f64,
    level: &MetricsLevel,
) -> GameMetrics {
    let timestamp = time::OffsetDateTime::now_utc()
        .format(&time::format_description::well_known::Rfc3339)
        .unwrap_or_else(|_| String::from("unknown"));
    let report = &result.report;

    let hands = match level {
        MetricsLevel::Basic => Vec::new(),
        MetricsLevel::Detailed => report.hands.iter().map(build_hand_metrics).collect(),
    };

    let player_metrics = report
        .seating
        .iter()
        .enumerate()
        .map(|(seat, name)| build_player_metrics(seat, name, &report.hands, report.total_for(name)))
        .collect();

    GameMetrics {
        game_id,
        seed: hex::encode(seed),
        timestamp,
        config: RunConfig {
            players: report.seating.clone(),
            max_points: report.max_points,
            total_games,
        },
        result: GameResultMetrics {
            final_totals: result
                .final_totals()
                .into_iter()
                .map(|(player, points)| PlayerPoints { player, points })
                .collect(),
            winner: report.winner.clone(),
            hands_played: report.hands_played(),
            moon_shots: report.moon_shots(),
            duration_ms,
        },
        hands,
        player_metrics,
    }
}

fn build_hand_metrics(hand: &HandReport) -> HandMetrics {
    HandMetrics {
        hand_number: hand.hand_number,
        pass_direction: hand.pass_direction,
        shot_the_moon: hand.shot_the_moon,
        hand_winner: hand.hand_winner.clone(),
        points: hand
            .scores
            .iter()
            .map(|s| PlayerPoints {
                player: s.player.clone(),
                points: s.points,
            })
            .collect(),
    }
}

fn build_player_metrics(
    seat: usize,
    name: &str,
    hands: &[HandReport],
    total: Option<u32>,
) -> PlayerMetrics {
    let hands_won = hands
        .iter()
        .filter(|h| h.hand_winner.as_deref() == Some(name))
        .count();
    let moons_shot = hands
        .iter()
        .filter(|h| h.shot_the_moon && h.points_for(name) == Some(0))
        .count();
    let total_points = total.unwrap_or(0);
    let avg_points_per_hand = if hands.is_empty() {
        0.0
    } else {
        total_points as f64 / hands.len() as f64
    };

    PlayerMetrics {
        seat,
        player: name.to_string(),
        total_points,
        hands_won,
        moons_shot,
        avg_points_per_hand,
    }
}

/// CSV summary row for quick analysis.
#[derive(Debug, Serialize)]
pub struct CsvSummaryRow {
    pub game_id: u32,
    pub seed: String,
    pub winner: String,
    pub hands_played: usize,
    pub moon_shots: usize,
    /// `name=points` pairs in seating order, `;`-separated
    pub totals: String,
}

impl From<&GameMetrics> for CsvSummaryRow {
    fn from(metrics: &GameMetrics) -> Self {
        let totals = metrics
            .result
            .final_totals
            .iter()
            .map(|p| format!("{}={}", p.player, p.points))
            .collect::<Vec<_>>()
            .join(";");
        CsvSummaryRow {
            game_id: metrics.game_id,
            seed: metrics.seed.clone(),
            winner: metrics.result.winner.clone(),
            hands_played: metrics.result.hands_played,
            moon_shots: metrics.result.moon_shots,
            totals,
        }
    }
}
