//! Session statistics
//!
//! One `SessionStats` lives for the duration of a drill and is mutated
//! only by recording round outcomes. Setup rounds (root-note
//! confirmations) are never recorded.

use std::fmt;

/// Correct/incorrect counters for one practice session.
#[derive(Clone, Debug, Default)]
pub struct SessionStats {
    pub correct: u32,
    pub incorrect: u32,
    pub total_attempts: u32,
}

impl SessionStats {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn record_correct(&mut self) {
        self.correct += 1;
        self.total_attempts += 1;
    }

    pub fn record_incorrect(&mut self) {
        self.incorrect += 1;
        self.total_attempts += 1;
    }

    /// Accuracy as a percentage; 0.0 before any attempt is recorded.
    pub fn accuracy(&self) -> f64 {
        if self.total_attempts == 0 {
            return 0.0;
        }
        (self.correct as f64 / self.total_attempts as f64) * 100.0
    }
}

impl fmt::Display for SessionStats {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Correct: {} | Incorrect: {} | Accuracy: {:.1}%",
            self.correct,
            self.incorrect,
            self.accuracy()
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_accuracy_zero_without_attempts() {
        let stats = SessionStats::new();
        assert_eq!(stats.accuracy(), 0.0);
    }

    #[test]
    fn test_counters_and_accuracy() {
        let mut stats = SessionStats::new();
        stats.record_correct();
        stats.record_correct();
        stats.record_correct();
        stats.record_incorrect();
        assert_eq!(stats.correct, 3);
        assert_eq!(stats.incorrect, 1);
        assert_eq!(stats.total_attempts, 4);
        assert!((stats.accuracy() - 75.0).abs() < 1e-9);
    }

    #[test]
    fn test_attempt_invariant_holds() {
        let mut stats = SessionStats::new();
        for i in 0..20 {
            if i % 3 == 0 {
                stats.record_incorrect();
            } else {
                stats.record_correct();
            }
            assert_eq!(stats.correct + stats.incorrect, stats.total_attempts);
        }
    }

    #[test]
    fn test_summary_format() {
        let mut stats = SessionStats::new();
        stats.record_correct();
        stats.record_incorrect();
        assert_eq!(
            stats.to_string(),
            "Correct: 1 | Incorrect: 1 | Accuracy: 50.0%"
        );
    }
}
