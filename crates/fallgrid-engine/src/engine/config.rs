use serde::{Deserialize, Serialize};

/// Immutable per-match rules.
///
/// A config is supplied once at match start; the engine never mutates it.
/// All timing values are expressed in ticks, so hosts choose the real-time
/// pace by choosing how often they call [`GameState::tick`].
///
/// [`GameState::tick`]: crate::engine::GameState::tick
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GameConfig {
    /// Columns in the play field.
    pub width: i32,
    /// Visible rows; pieces spawn just above them.
    pub height: i32,
    /// Total rows including the hidden buffer above the visible area.
    pub full_height: i32,
    /// Rows descended per tick. Values above 1.0 drop several rows per
    /// tick; fractional values accumulate across ticks.
    pub gravity: f64,
    /// Ticks a grounded, untouched piece survives before locking.
    pub lock_delay: u32,
    /// How many successful moves or rotations may refresh the lock delay
    /// for a single piece.
    pub max_move_reset: u32,
    /// Length of the next-piece preview queue (0 disables the preview).
    pub next_queue_size: usize,
    /// Points awarded by number of lines cleared at once, indexed 0..=4.
    pub clear_scores: [u32; 5],
    /// Ticks the match stays frozen after a line clear.
    pub line_clear_delay: u32,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            width: 10,
            height: 20,
            full_height: 40,
            gravity: 1.0 / 60.0,
            lock_delay: 30,
            max_move_reset: 15,
            next_queue_size: 3,
            clear_scores: [0, 100, 300, 500, 800],
            line_clear_delay: 20,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_describe_a_standard_field() {
        let config = GameConfig::default();
        assert_eq!(config.width, 10);
        assert_eq!(config.height, 20);
        assert_eq!(config.full_height, 40);
        assert_eq!(config.clear_scores[0], 0);
        assert_eq!(config.clear_scores[4], 800);
    }

    #[test]
    fn missing_json_fields_fall_back_to_defaults() {
        let config: GameConfig = serde_json::from_str(r#"{"gravity": 1.0, "lock_delay": 5}"#)
            .unwrap();
        assert!((config.gravity - 1.0).abs() < f64::EPSILON);
        assert_eq!(config.lock_delay, 5);
        assert_eq!(config.width, 10);
    }

    #[test]
    fn json_round_trip_preserves_the_config() {
        let config = GameConfig {
            gravity: 0.25,
            next_queue_size: 5,
            ..GameConfig::default()
        };
        let json = serde_json::to_string(&config).unwrap();
        let back: GameConfig = serde_json::from_str(&json).unwrap();
        assert_eq!(back, config);
    }
}
