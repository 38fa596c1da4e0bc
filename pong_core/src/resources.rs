use crate::components::Side;

/// Match score tracking
#[derive(Debug, Clone, Copy, Default)]
pub struct Score {
    pub player: u32,
    pub opponent: u32,
}

impl Score {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn increment_player(&mut self) {
        self.player += 1;
    }

    pub fn increment_opponent(&mut self) {
        self.opponent += 1;
    }

    pub fn has_winner(&self, win_score: u32) -> Option<Side> {
        if self.player >= win_score {
            Some(Side::Player)
        } else if self.opponent >= win_score {
            Some(Side::Opponent)
        } else {
            None
        }
    }
}

/// Match lifecycle state
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum MatchState {
    /// Created, waiting for a start command
    #[default]
    Idle,
    /// Simulation advancing each tick
    Running,
    /// Frozen mid-match
    Paused,
    /// A side reached the winning score
    GameOver,
}

/// Random number generator
pub struct GameRng(pub rand::rngs::StdRng);

impl GameRng {
    pub fn new(seed: u64) -> Self {
        use rand::SeedableRng;
        Self(rand::rngs::StdRng::seed_from_u64(seed))
    }
}

impl Default for GameRng {
    fn default() -> Self {
        Self::new(12345)
    }
}

/// Events that occurred during this tick
#[derive(Debug, Clone, Copy, Default)]
pub struct Events {
    pub player_scored: bool,
    pub opponent_scored: bool,
    pub ball_hit_paddle: bool,
    pub ball_hit_wall: bool,
}

impl Events {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn clear(&mut self) {
        *self = Self::default();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_score_increment() {
        let mut score = Score::new();
        assert_eq!(score.player, 0);
        score.increment_player();
        score.increment_player();
        score.increment_opponent();
        assert_eq!(score.player, 2);
        assert_eq!(score.opponent, 1);
    }

    #[test]
    fn test_score_has_winner() {
        let mut score = Score::new();
        for _ in 0..10 {
            score.increment_opponent();
        }
        assert_eq!(score.has_winner(10), Some(Side::Opponent));
        assert_eq!(score.has_winner(11), None);
    }

    #[test]
    fn test_events_clear() {
        let mut events = Events::new();
        events.player_scored = true;
        events.ball_hit_wall = true;

        events.clear();

        assert!(!events.player_scored);
        assert!(!events.opponent_scored);
        assert!(!events.ball_hit_paddle);
        assert!(!events.ball_hit_wall);
    }
}
