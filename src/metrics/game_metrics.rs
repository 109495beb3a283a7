/// Statistics kept across rounds of one session
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct GameMetrics {
    pub high_score: u32,
    pub games_played: u32,
    /// Longest round so far, in seconds
    pub longest_round_secs: u32,
}

impl GameMetrics {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn on_game_over(&mut self, final_score: u32, elapsed_secs: u32) {
        self.games_played += 1;
        if final_score > self.high_score {
            self.high_score = final_score;
        }
        self.longest_round_secs = self.longest_round_secs.max(elapsed_secs);
    }

    /// `mm:ss`; minutes keep growing past 59
    pub fn format_time(total_secs: u32) -> String {
        let minutes = total_secs / 60;
        let seconds = total_secs % 60;
        format!("{:02}:{:02}", minutes, seconds)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_time_formatting() {
        assert_eq!(GameMetrics::format_time(125), "02:05");
        assert_eq!(GameMetrics::format_time(0), "00:00");
        assert_eq!(GameMetrics::format_time(3661), "61:01");
    }

    #[test]
    fn test_high_score_tracking() {
        let mut metrics = GameMetrics::new();

        metrics.on_game_over(10, 30);
        assert_eq!(metrics.high_score, 10);
        assert_eq!(metrics.games_played, 1);

        metrics.on_game_over(5, 90);
        assert_eq!(metrics.high_score, 10); // Should not decrease
        assert_eq!(metrics.games_played, 2);
        assert_eq!(metrics.longest_round_secs, 90);

        metrics.on_game_over(15, 12);
        assert_eq!(metrics.high_score, 15); // Should update
        assert_eq!(metrics.games_played, 3);
        assert_eq!(metrics.longest_round_secs, 90);
    }
}
