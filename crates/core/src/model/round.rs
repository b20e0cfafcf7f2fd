use serde::{Deserialize, Serialize};

/// Number of lanes the player can stand in.
pub const LANE_COUNT: u8 = 3;

/// A lane index, always in `0..LANE_COUNT`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Lane(u8);

impl Lane {
    pub const TOP: Self = Self(0);
    pub const MIDDLE: Self = Self(1);
    pub const BOTTOM: Self = Self(LANE_COUNT - 1);

    /// Returns the lane for an index, or `None` when out of range.
    #[must_use]
    pub fn new(index: u8) -> Option<Self> {
        (index < LANE_COUNT).then_some(Self(index))
    }

    #[must_use]
    pub fn index(self) -> usize {
        usize::from(self.0)
    }

    #[must_use]
    pub fn up(self) -> Self {
        Self(self.0.saturating_sub(1))
    }

    #[must_use]
    pub fn down(self) -> Self {
        Self((self.0 + 1).min(LANE_COUNT - 1))
    }

    pub fn all() -> impl Iterator<Item = Self> {
        (0..LANE_COUNT).map(Self)
    }
}

impl Default for Lane {
    fn default() -> Self {
        Self::MIDDLE
    }
}

/// Input edges observed since the previous tick.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct InputEdges {
    pub up: bool,
    pub down: bool,
    pub confirm: bool,
}

impl InputEdges {
    #[must_use]
    pub fn none() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn up() -> Self {
        Self {
            up: true,
            ..Self::default()
        }
    }

    #[must_use]
    pub fn down() -> Self {
        Self {
            down: true,
            ..Self::default()
        }
    }

    #[must_use]
    pub fn confirm() -> Self {
        Self {
            confirm: true,
            ..Self::default()
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RoundOutcome {
    Win,
    Lose,
}

impl RoundOutcome {
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            RoundOutcome::Win => "win",
            RoundOutcome::Lose => "lose",
        }
    }
}

/// Final numbers reported once a round ends.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct RoundResult {
    pub score: u32,
    pub lives: u8,
    pub outcome: RoundOutcome,
}

/// Mutable state of one quiz round.
#[derive(Clone, Debug, PartialEq)]
pub struct RoundState {
    pub(crate) score: u32,
    pub(crate) lives: u8,
    pub(crate) question_index: usize,
    pub(crate) time_remaining: f64,
    pub(crate) current_lane: Lane,
    pub(crate) active_answers: Vec<String>,
}

impl RoundState {
    pub const STARTING_LIVES: u8 = 3;
    pub const SECONDS_PER_QUESTION: f64 = 5.0;

    #[must_use]
    pub fn new() -> Self {
        Self {
            score: 0,
            lives: Self::STARTING_LIVES,
            question_index: 0,
            time_remaining: Self::SECONDS_PER_QUESTION,
            current_lane: Lane::default(),
            active_answers: Vec::new(),
        }
    }

    #[must_use]
    pub fn score(&self) -> u32 {
        self.score
    }

    #[must_use]
    pub fn lives(&self) -> u8 {
        self.lives
    }

    #[must_use]
    pub fn question_index(&self) -> usize {
        self.question_index
    }

    #[must_use]
    pub fn time_remaining(&self) -> f64 {
        self.time_remaining
    }

    #[must_use]
    pub fn current_lane(&self) -> Lane {
        self.current_lane
    }

    #[must_use]
    pub fn active_answers(&self) -> &[String] {
        &self.active_answers
    }

    /// Answer shown in the lane the player currently occupies.
    #[must_use]
    pub fn chosen_answer(&self) -> Option<&str> {
        self.active_answers
            .get(self.current_lane.index())
            .map(String::as_str)
    }

    /// Whole seconds shown on the countdown (ceiling).
    #[must_use]
    pub fn countdown_secs(&self) -> u32 {
        // Saturating float-to-int cast: negatives clamp to 0.
        self.time_remaining.ceil() as u32
    }
}

impl Default for RoundState {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn lane_moves_saturate_at_edges() {
        assert_eq!(Lane::TOP.up(), Lane::TOP);
        assert_eq!(Lane::BOTTOM.down(), Lane::BOTTOM);
        assert_eq!(Lane::MIDDLE.up(), Lane::TOP);
        assert_eq!(Lane::MIDDLE.down(), Lane::BOTTOM);
        assert!(Lane::new(3).is_none());
        assert_eq!(Lane::all().count(), usize::from(LANE_COUNT));
    }

    #[test]
    fn countdown_rounds_up_and_clamps() {
        let mut state = RoundState::new();
        state.time_remaining = 4.01;
        assert_eq!(state.countdown_secs(), 5);
        state.time_remaining = -0.3;
        assert_eq!(state.countdown_secs(), 0);
    }

    #[test]
    fn outcome_strings_match_result_labels() {
        assert_eq!(RoundOutcome::Win.as_str(), "win");
        assert_eq!(RoundOutcome::Lose.as_str(), "lose");
    }
}
