/// Running score. Never drops below zero, no upper bound.
#[derive(Clone, Debug)]
pub struct ScoreLedger {
    score: u64,
    award_points: u64,
    penalty_points: u64,
}

impl ScoreLedger {
    pub fn new(award_points: u64, penalty_points: u64) -> Self {
        Self {
            score: 0,
            award_points,
            penalty_points,
        }
    }

    pub fn score(&self) -> u64 {
        self.score
    }

    /// Add the award amount. Returns the new total.
    pub fn award(&mut self) -> u64 {
        self.score = self.score.saturating_add(self.award_points);
        self.score
    }

    /// Subtract the penalty, clamped at zero. Returns the new total.
    pub fn penalize(&mut self) -> u64 {
        self.score = self.score.saturating_sub(self.penalty_points);
        self.score
    }
}

impl Default for ScoreLedger {
    fn default() -> Self {
        Self::new(crate::constants::AWARD_POINTS, crate::constants::PENALTY_POINTS)
    }
}
