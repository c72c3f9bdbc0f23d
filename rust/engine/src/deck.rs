use rand::seq::SliceRandom;
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha20Rng;

use crate::cards::Card;

/// The two sampling disciplines a game can run under.
///
/// A stack pile is a finite buffer drawn without replacement: draws pop
/// from the end and a dealer redraw swaps through the top, so the pile only
/// shrinks during the draw phase. A sampled pile is a fixed pool resampled
/// uniformly with replacement; every fresh sample is also appended to an
/// audit log so completed games can be replayed from the record.
#[derive(Debug)]
enum Pile {
    Stack(Vec<Card>),
    Sampled { pool: Vec<Card>, log: Vec<Card> },
}

/// The per-game draw source. Owns the seeded RNG so that resetting for a
/// new game keeps consuming the same reproducible stream.
#[derive(Debug)]
pub struct Deck {
    pile: Pile,
    rng: ChaCha20Rng,
}

impl Deck {
    pub fn new_with_seed(seed: u64) -> Self {
        Self {
            pile: Pile::Stack(Vec::new()),
            rng: ChaCha20Rng::seed_from_u64(seed),
        }
    }

    /// Installs a finite stack in the given order, verbatim. The last card
    /// of `cards` is the top of the stack.
    pub fn reset_stack(&mut self, cards: Vec<Card>) {
        self.pile = Pile::Stack(cards);
    }

    /// Installs a finite stack holding a freshly shuffled copy of `base`.
    /// Returns the shuffled order for callers that record it.
    pub fn reset_stack_shuffled(&mut self, base: &[Card]) -> Vec<Card> {
        let mut cards = base.to_vec();
        cards.shuffle(&mut self.rng);
        self.pile = Pile::Stack(cards.clone());
        cards
    }

    /// Installs a resampled pool with an empty audit log.
    pub fn reset_sampled(&mut self, pool: Vec<Card>) {
        self.pile = Pile::Sampled {
            pool,
            log: Vec::new(),
        };
    }

    pub fn is_sampled(&self) -> bool {
        matches!(self.pile, Pile::Sampled { .. })
    }

    /// Produces one card: pops the top of a stack, or samples the pool
    /// uniformly (logging the sample). `None` only when a stack runs dry or
    /// a pool is empty; reset-time validation keeps both out of reach in a
    /// well-configured game.
    pub fn draw(&mut self) -> Option<Card> {
        match &mut self.pile {
            Pile::Stack(cards) => cards.pop(),
            Pile::Sampled { pool, log } => {
                if pool.is_empty() {
                    return None;
                }
                let card = pool[self.rng.random_range(0..pool.len())];
                log.push(card);
                Some(card)
            }
        }
    }

    /// Inspects the top of a stack without consuming it. A failed dealer
    /// redraw only ever looks; the stack must stay untouched.
    pub fn peek_top(&self) -> Option<Card> {
        match &self.pile {
            Pile::Stack(cards) => cards.last().copied(),
            Pile::Sampled { .. } => None,
        }
    }

    /// Pushes a card back on top of a stack. Paired with `draw` by a
    /// successful dealer redraw so the stack size stays constant outside
    /// the draw phase. Ignored under the sampled discipline.
    pub fn push_top(&mut self, card: Card) {
        if let Pile::Stack(cards) = &mut self.pile {
            cards.push(card);
        }
    }

    pub fn remaining(&self) -> usize {
        match &self.pile {
            Pile::Stack(cards) => cards.len(),
            Pile::Sampled { pool, .. } => pool.len(),
        }
    }

    /// Every card value a sampled pile has produced, in draw order.
    /// Empty for stacks, whose full order is known up front.
    pub fn audit_log(&self) -> &[Card] {
        match &self.pile {
            Pile::Stack(_) => &[],
            Pile::Sampled { log, .. } => log,
        }
    }
}
