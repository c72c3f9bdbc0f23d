use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum EngineError {
    #[error("base deck is empty")]
    EmptyDeck,
    #[error("deck of {cards} cards cannot cover {turns} turns without replacement")]
    DeckTooSmall { cards: usize, turns: usize },
    #[error("deck exhausted mid-game")]
    DeckExhausted,
    #[error("reset must be called before playing")]
    NotReady,
    #[error("out of sequence: {0}")]
    OutOfSequence(&'static str),
    #[error("game is not finished")]
    GameNotFinished,
    #[error("no card has been drawn for turn {0}")]
    NoSuchTurn(usize),
}

/// Raised when a card token does not name a valid rank and suit.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ParseCardError {
    #[error("empty card token")]
    Empty,
    #[error("unknown rank token: {0}")]
    UnknownRank(String),
    #[error("unknown suit marker: {0}")]
    UnknownSuit(char),
}
