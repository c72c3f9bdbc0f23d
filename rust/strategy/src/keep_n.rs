use leher_engine::cards::Card;
use leher_engine::logger::ActionOutcome;
use leher_engine::scorer::{standard_scorer, Scorer};
use leher_engine::strategy::Strategy;

use crate::StrategyError;

/// Threshold strategy: act whenever the current card scores below the
/// threshold, keep it otherwise.
///
/// Works identically for both roles since trading and redrawing answer the
/// same question. Thresholds run 1 (never act, every card scores at least
/// one) through 14 (always act, nothing scores that high).
pub struct KeepNAndAbove {
    threshold: u32,
    scorer: Scorer,
    name: String,
}

impl KeepNAndAbove {
    pub fn new(threshold: u32) -> Result<Self, StrategyError> {
        if !(1..=14).contains(&threshold) {
            return Err(StrategyError::ThresholdOutOfRange(threshold));
        }
        Ok(Self {
            threshold,
            scorer: standard_scorer,
            name: format!("keep{threshold}"),
        })
    }

    pub fn threshold(&self) -> u32 {
        self.threshold
    }
}

impl Strategy for KeepNAndAbove {
    fn decide(
        &self,
        my_cards: &[Card],
        _revealed_player_cards: &[bool],
        _revealed_dealer_cards: &[bool],
        _player_history: &[ActionOutcome],
        _dealer_history: &[ActionOutcome],
        current_turn: usize,
    ) -> bool {
        (self.scorer)(my_cards[current_turn]) < self.threshold
    }

    fn name(&self) -> &str {
        &self.name
    }
}
