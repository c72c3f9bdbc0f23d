use crate::cards::Card;

/// A scoring function maps a card to its numeric value. Strategies and the
/// engine take one of these so alternative scorers can be swapped in.
pub type Scorer = fn(Card) -> u32;

/// The standard Le Her scorer.
///
/// Aces score 1, numeral cards their face value, Jack 11, Queen 12 and
/// King 13. The suit never affects the score, and every rank has a score,
/// so the function is total.
pub fn standard_scorer(card: Card) -> u32 {
    card.rank as u32
}
