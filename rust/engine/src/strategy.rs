//! The decision-strategy seam between the engine and its pluggable brains.
//!
//! The engine consults one strategy per role per turn: the player's right
//! after the draw phase, the dealer's after the player's action resolves.
//! A strategy answers a single question, attempt your action this turn or
//! not, from the state it is handed and nothing else.

use crate::cards::Card;
use crate::logger::ActionOutcome;

/// Trait for decision strategies consulted once per role per turn.
///
/// `decide` must be a pure function of its arguments (plus whatever fixed
/// configuration the strategy was built with); no hidden state across
/// calls. The full argument set is part of the contract: reference
/// strategies ignore the reveal and history slices, but the seam exists so
/// smarter strategies can exploit them.
///
/// # Example implementation
///
/// ```
/// use leher_engine::cards::Card;
/// use leher_engine::logger::ActionOutcome;
/// use leher_engine::strategy::Strategy;
///
/// struct AlwaysAct;
///
/// impl Strategy for AlwaysAct {
///     fn decide(
///         &self,
///         _my_cards: &[Card],
///         _revealed_player_cards: &[bool],
///         _revealed_dealer_cards: &[bool],
///         _player_history: &[ActionOutcome],
///         _dealer_history: &[ActionOutcome],
///         _current_turn: usize,
///     ) -> bool {
///         true
///     }
///
///     fn name(&self) -> &str {
///         "always-act"
///     }
/// }
/// ```
pub trait Strategy: Send + Sync {
    /// Decide whether this role attempts its action on `current_turn`.
    ///
    /// * `my_cards` - this role's hand so far, indexed by turn
    /// * `revealed_player_cards` - per turn, whether the player's card at
    ///   that turn is visible to the dealer
    /// * `revealed_dealer_cards` - per turn, whether the dealer's card at
    ///   that turn is visible to the player
    /// * `player_history` - trade outcomes for completed player decisions
    /// * `dealer_history` - redraw outcomes for completed dealer decisions
    /// * `current_turn` - zero-based index of the turn being decided
    #[allow(clippy::too_many_arguments)]
    fn decide(
        &self,
        my_cards: &[Card],
        revealed_player_cards: &[bool],
        revealed_dealer_cards: &[bool],
        player_history: &[ActionOutcome],
        dealer_history: &[ActionOutcome],
        current_turn: usize,
    ) -> bool;

    /// Identifier used in logs and CLI output.
    fn name(&self) -> &str;
}

impl std::fmt::Debug for dyn Strategy {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Strategy")
            .field("name", &self.name())
            .finish()
    }
}
