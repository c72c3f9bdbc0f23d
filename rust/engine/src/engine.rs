use crate::cards::{standard_deck, Card};
use crate::deck::Deck;
use crate::errors::EngineError;
use crate::logger::ActionOutcome;
use crate::scorer::{standard_scorer, Scorer};
use crate::strategy::Strategy;

/// The two game participants.
#[derive(Debug, Clone, Copy, Eq, PartialEq)]
pub enum Role {
    Player,
    Dealer,
}

/// Where the state machine stands inside a game.
///
/// `reset` moves to `Draw` at turn 0. Each turn runs
/// `Draw → PlayerDecision → DealerDecision` and then either wraps back to
/// `Draw` for the next turn or lands on `Complete` after the final one.
/// Calling an operation outside its phase is a usage error, never a game
/// outcome.
#[derive(Debug, Clone, Copy, Eq, PartialEq)]
enum Phase {
    Idle,
    Draw,
    PlayerDecision,
    DealerDecision,
    Complete,
}

/// Fixed per-engine configuration; everything else is rebuilt by `reset`.
pub struct EngineConfig {
    /// The base deck games are built from (shuffled or resampled)
    pub base_deck: Vec<Card>,
    /// Number of turns per game
    pub turns_per_game: usize,
    /// Scoring function applied to final hands
    pub scorer: Scorer,
    /// RNG seed; `None` picks a random one
    pub seed: Option<u64>,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            base_deck: standard_deck(),
            turns_per_game: 13,
            scorer: standard_scorer,
            seed: None,
        }
    }
}

/// Everything a completed automated game hands to the batch path: final
/// hands, action histories, scores, and the deck log (starting stack order
/// without replacement, audit log of sampled values with it).
#[derive(Debug, Clone)]
pub struct GameSummary {
    pub player_cards: Vec<Card>,
    pub dealer_cards: Vec<Card>,
    pub player_history: Vec<ActionOutcome>,
    pub dealer_history: Vec<ActionOutcome>,
    pub player_score: u32,
    pub dealer_score: u32,
    pub deck_log: Vec<Card>,
}

/// The Le Her game engine: a single-threaded per-turn state machine.
///
/// One engine instance owns all mutable state for one game at a time
/// (hands, reveal flags, histories, the deck). `reset` rebuilds that state
/// for a fresh game; the configuration, strategies and RNG stream persist
/// across resets. Concurrent simulations want one engine and one seed per
/// worker; there is no internal locking.
///
/// # Examples
///
/// ```
/// use leher_engine::engine::{Engine, EngineConfig};
/// use leher_engine::cards::Card;
/// use leher_engine::logger::ActionOutcome;
/// use leher_engine::strategy::Strategy;
///
/// struct Never;
/// impl Strategy for Never {
///     fn decide(
///         &self,
///         _: &[Card], _: &[bool], _: &[bool],
///         _: &[ActionOutcome], _: &[ActionOutcome], _: usize,
///     ) -> bool {
///         false
///     }
///     fn name(&self) -> &str { "never" }
/// }
///
/// let config = EngineConfig { seed: Some(42), ..Default::default() };
/// let mut engine = Engine::new(config, Box::new(Never), Box::new(Never));
/// engine.reset(true, None).unwrap();
/// let summary = engine.run_automated_game().unwrap();
/// assert_eq!(summary.player_cards.len(), 13);
/// ```
pub struct Engine {
    base_deck: Vec<Card>,
    turns_per_game: usize,
    scorer: Scorer,
    player_strategy: Box<dyn Strategy>,
    dealer_strategy: Box<dyn Strategy>,
    deck: Deck,

    phase: Phase,
    turn: usize,
    player_cards: Vec<Card>,
    dealer_cards: Vec<Card>,
    revealed_player_cards: Vec<bool>,
    revealed_dealer_cards: Vec<bool>,
    player_history: Vec<ActionOutcome>,
    dealer_history: Vec<ActionOutcome>,
    /// Single-slot hand-off: set by a dealer redraw under the sampled
    /// discipline, consumed by the very next player draw
    next_player_card: Option<Card>,
    /// Stack order at the start of the game, for logging
    starting_deck: Vec<Card>,
    scores: Option<(u32, u32)>,
}

impl Engine {
    pub fn new(
        config: EngineConfig,
        player_strategy: Box<dyn Strategy>,
        dealer_strategy: Box<dyn Strategy>,
    ) -> Self {
        let seed = config.seed.unwrap_or_else(rand::random);
        Self {
            base_deck: config.base_deck,
            turns_per_game: config.turns_per_game,
            scorer: config.scorer,
            player_strategy,
            dealer_strategy,
            deck: Deck::new_with_seed(seed),
            phase: Phase::Idle,
            turn: 0,
            player_cards: Vec::new(),
            dealer_cards: Vec::new(),
            revealed_player_cards: Vec::new(),
            revealed_dealer_cards: Vec::new(),
            player_history: Vec::new(),
            dealer_history: Vec::new(),
            next_player_card: None,
            starting_deck: Vec::new(),
            scores: None,
        }
    }

    /// Rebuilds all per-game state for a fresh game. Must be called before
    /// any other operation and before each new game.
    ///
    /// `remove_drawn` selects the discipline: `true` (or any call supplying
    /// `pre_shuffled`) plays from a finite stack without replacement;
    /// `false` with no pre-shuffled sequence resamples the base deck with
    /// replacement. A supplied `pre_shuffled` sequence is used verbatim as
    /// the stack, last card on top.
    ///
    /// # Errors
    ///
    /// * `EmptyDeck` - the base deck (or supplied sequence) is empty
    /// * `DeckTooSmall` - a finite stack cannot cover two draws per turn
    pub fn reset(
        &mut self,
        remove_drawn: bool,
        pre_shuffled: Option<&[Card]>,
    ) -> Result<(), EngineError> {
        let sampled = !remove_drawn && pre_shuffled.is_none();
        if sampled {
            if self.base_deck.is_empty() {
                return Err(EngineError::EmptyDeck);
            }
            self.deck.reset_sampled(self.base_deck.clone());
            self.starting_deck = self.base_deck.clone();
        } else {
            let cards = match pre_shuffled {
                Some(seq) => {
                    let cards = seq.to_vec();
                    self.deck.reset_stack(cards.clone());
                    cards
                }
                None => self.deck.reset_stack_shuffled(&self.base_deck),
            };
            if cards.is_empty() {
                return Err(EngineError::EmptyDeck);
            }
            if self.turns_per_game * 2 > cards.len() {
                return Err(EngineError::DeckTooSmall {
                    cards: cards.len(),
                    turns: self.turns_per_game,
                });
            }
            self.starting_deck = cards;
        }

        self.phase = Phase::Draw;
        self.turn = 0;
        self.player_cards = Vec::with_capacity(self.turns_per_game);
        self.dealer_cards = Vec::with_capacity(self.turns_per_game);
        self.revealed_player_cards = vec![false; self.turns_per_game];
        self.revealed_dealer_cards = vec![false; self.turns_per_game];
        self.player_history = Vec::with_capacity(self.turns_per_game);
        self.dealer_history = Vec::with_capacity(self.turns_per_game);
        self.next_player_card = None;
        self.scores = None;
        Ok(())
    }

    /// Runs the draw phase for the current turn: one card for the player,
    /// then one for the dealer, appended at index = turn. A queued hand-off
    /// card overrides the player's draw and is consumed by it.
    pub fn draw_turn(&mut self) -> Result<(), EngineError> {
        self.expect_phase(Phase::Draw, "draw before resolving the current turn")?;
        let player_card = match self.next_player_card.take() {
            // Already logged when it was originally drawn
            Some(card) => card,
            None => self.deck.draw().ok_or(EngineError::DeckExhausted)?,
        };
        let dealer_card = self.deck.draw().ok_or(EngineError::DeckExhausted)?;
        self.player_cards.push(player_card);
        self.dealer_cards.push(dealer_card);
        self.phase = Phase::PlayerDecision;
        Ok(())
    }

    /// The player attempts to trade hands with the dealer.
    ///
    /// A King in the dealer's hand blocks the trade (`Ok(false)`, recorded
    /// as `ATTEMPTED_BUT_FAILED`). Otherwise the current-turn cards swap in
    /// place and both become mutually visible at this turn.
    pub fn perform_player_action(&mut self) -> Result<bool, EngineError> {
        self.expect_phase(Phase::PlayerDecision, "player action needs a drawn turn")?;
        let turn = self.turn;
        let succeeded = if self.dealer_cards[turn].is_king() {
            self.player_history.push(ActionOutcome::AttemptedButFailed);
            false
        } else {
            std::mem::swap(&mut self.player_cards[turn], &mut self.dealer_cards[turn]);
            self.revealed_player_cards[turn] = true;
            self.revealed_dealer_cards[turn] = true;
            self.player_history.push(ActionOutcome::Succeeded);
            true
        };
        self.phase = Phase::DealerDecision;
        Ok(succeeded)
    }

    /// Records that the player declined to act this turn.
    pub fn skip_player_action(&mut self) -> Result<(), EngineError> {
        self.expect_phase(Phase::PlayerDecision, "player decision already resolved")?;
        self.player_history.push(ActionOutcome::NotAttempted);
        self.phase = Phase::DealerDecision;
        Ok(())
    }

    /// The dealer attempts to redraw their current card.
    ///
    /// Attempting at all, win or lose, grants the dealer foreknowledge of
    /// the player's next card when a next turn exists. The redraw itself
    /// follows the active discipline: without replacement the candidate is
    /// the top of the stack (swapped through on success, merely inspected
    /// on failure); with replacement the candidate is a fresh sample, and
    /// the displaced card (the old one on success, the blocking King on
    /// failure) is queued as the player's next draw.
    pub fn perform_dealer_action(&mut self) -> Result<bool, EngineError> {
        self.expect_phase(Phase::DealerDecision, "dealer action needs a resolved player")?;
        if self.turn + 1 < self.turns_per_game {
            self.revealed_player_cards[self.turn + 1] = true;
        }
        let succeeded = if self.deck.is_sampled() {
            let candidate = self.deck.draw().ok_or(EngineError::DeckExhausted)?;
            if candidate.is_king() {
                self.dealer_history.push(ActionOutcome::AttemptedButFailed);
                self.next_player_card = Some(candidate);
                false
            } else {
                self.next_player_card = Some(self.dealer_cards[self.turn]);
                self.dealer_cards[self.turn] = candidate;
                self.revealed_dealer_cards[self.turn] = false;
                self.dealer_history.push(ActionOutcome::Succeeded);
                true
            }
        } else {
            match self.deck.peek_top() {
                None => return Err(EngineError::DeckExhausted),
                Some(top) if top.is_king() => {
                    self.dealer_history.push(ActionOutcome::AttemptedButFailed);
                    false
                }
                Some(_) => {
                    let candidate = self.deck.draw().ok_or(EngineError::DeckExhausted)?;
                    self.deck.push_top(self.dealer_cards[self.turn]);
                    self.dealer_cards[self.turn] = candidate;
                    self.revealed_dealer_cards[self.turn] = false;
                    self.dealer_history.push(ActionOutcome::Succeeded);
                    true
                }
            }
        };
        self.advance_turn();
        Ok(succeeded)
    }

    /// Records that the dealer declined to act this turn.
    pub fn skip_dealer_action(&mut self) -> Result<(), EngineError> {
        self.expect_phase(Phase::DealerDecision, "dealer decision already resolved")?;
        self.dealer_history.push(ActionOutcome::NotAttempted);
        self.advance_turn();
        Ok(())
    }

    /// Read-only consultation of a configured strategy: would `role` act at
    /// `turn` given the current state? Mutates nothing.
    pub fn strategy_would_act(&self, role: Role, turn: usize) -> Result<bool, EngineError> {
        let (strategy, cards) = match role {
            Role::Player => (&self.player_strategy, &self.player_cards),
            Role::Dealer => (&self.dealer_strategy, &self.dealer_cards),
        };
        if turn >= cards.len() {
            return Err(EngineError::NoSuchTurn(turn));
        }
        Ok(strategy.decide(
            cards,
            &self.revealed_player_cards,
            &self.revealed_dealer_cards,
            &self.player_history,
            &self.dealer_history,
            turn,
        ))
    }

    /// Final scores, computed once after the last turn by summing the
    /// scorer over each hand. Calling before the game completes is a usage
    /// error.
    pub fn score(&mut self) -> Result<(u32, u32), EngineError> {
        if self.phase != Phase::Complete {
            return Err(EngineError::GameNotFinished);
        }
        if self.scores.is_none() {
            let player = self.player_cards.iter().map(|&c| (self.scorer)(c)).sum();
            let dealer = self.dealer_cards.iter().map(|&c| (self.scorer)(c)).sum();
            self.scores = Some((player, dealer));
        }
        Ok(self.scores.unwrap_or((0, 0)))
    }

    /// Drives a freshly reset game to completion, consulting both
    /// strategies each turn, and returns the completed-game summary.
    pub fn run_automated_game(&mut self) -> Result<GameSummary, EngineError> {
        if self.phase == Phase::Idle {
            return Err(EngineError::NotReady);
        }
        if self.phase != Phase::Draw || self.turn != 0 {
            return Err(EngineError::OutOfSequence("game already in progress"));
        }
        while self.phase != Phase::Complete {
            self.draw_turn()?;
            if self.strategy_would_act(Role::Player, self.turn)? {
                self.perform_player_action()?;
            } else {
                self.skip_player_action()?;
            }
            if self.strategy_would_act(Role::Dealer, self.turn)? {
                self.perform_dealer_action()?;
            } else {
                self.skip_dealer_action()?;
            }
        }
        let (player_score, dealer_score) = self.score()?;
        Ok(GameSummary {
            player_cards: self.player_cards.clone(),
            dealer_cards: self.dealer_cards.clone(),
            player_history: self.player_history.clone(),
            dealer_history: self.dealer_history.clone(),
            player_score,
            dealer_score,
            deck_log: self.deck_log().to_vec(),
        })
    }

    fn advance_turn(&mut self) {
        self.turn += 1;
        self.phase = if self.turn == self.turns_per_game {
            Phase::Complete
        } else {
            Phase::Draw
        };
    }

    fn expect_phase(&self, phase: Phase, what: &'static str) -> Result<(), EngineError> {
        if self.phase == Phase::Idle {
            return Err(EngineError::NotReady);
        }
        if self.phase != phase {
            return Err(EngineError::OutOfSequence(what));
        }
        Ok(())
    }

    pub fn current_turn(&self) -> usize {
        self.turn
    }

    pub fn turns_per_game(&self) -> usize {
        self.turns_per_game
    }

    pub fn is_complete(&self) -> bool {
        self.phase == Phase::Complete
    }

    pub fn player_cards(&self) -> &[Card] {
        &self.player_cards
    }

    pub fn dealer_cards(&self) -> &[Card] {
        &self.dealer_cards
    }

    pub fn player_history(&self) -> &[ActionOutcome] {
        &self.player_history
    }

    pub fn dealer_history(&self) -> &[ActionOutcome] {
        &self.dealer_history
    }

    /// The card `role` holds at `turnIndex`, if that turn has been drawn.
    pub fn card(&self, role: Role, turn: usize) -> Result<Card, EngineError> {
        let cards = match role {
            Role::Player => &self.player_cards,
            Role::Dealer => &self.dealer_cards,
        };
        cards.get(turn).copied().ok_or(EngineError::NoSuchTurn(turn))
    }

    /// Whether `role`'s card at `turn` is currently visible to the
    /// opponent.
    pub fn is_revealed(&self, role: Role, turn: usize) -> bool {
        let revealed = match role {
            Role::Player => &self.revealed_player_cards,
            Role::Dealer => &self.revealed_dealer_cards,
        };
        revealed.get(turn).copied().unwrap_or(false)
    }

    /// The hand-off card queued for the next player draw, if any.
    pub fn pending_player_card(&self) -> Option<Card> {
        self.next_player_card
    }

    /// What the log records for this game's deck: the starting stack order
    /// without replacement, the ever-growing audit log with it.
    pub fn deck_log(&self) -> &[Card] {
        if self.deck.is_sampled() {
            self.deck.audit_log()
        } else {
            &self.starting_deck
        }
    }

    pub fn player_strategy_name(&self) -> &str {
        self.player_strategy.name()
    }

    pub fn dealer_strategy_name(&self) -> &str {
        self.dealer_strategy.name()
    }
}
