//! Core game engine for Le Her simulations.
//!
//! Le Her is a two-person card game of asymmetric information: each turn
//! the player and the dealer draw one card apiece, the player may force a
//! trade of the current cards (blocked by a King in the dealer's hand), and
//! the dealer may redraw from the deck (blocked by drawing a King). After a
//! fixed number of turns both hands are scored and the higher total wins.
//!
//! The crate is organised around a per-turn state machine:
//!
//! * [`cards`] - ranks, suits, compact card tokens, the canonical deck
//! * [`deck`] - the two draw disciplines (finite stack vs. resampled pool)
//! * [`engine`] - the state machine itself and the automated game driver
//! * [`strategy`] - the decision seam strategies plug into
//! * [`scorer`] - hand scoring
//! * [`logger`] - JSONL persistence of completed games
//! * [`errors`] - engine and parsing error types
//!
//! # Quick start
//!
//! ```
//! use leher_engine::engine::{Engine, EngineConfig};
//! use leher_engine::cards::Card;
//! use leher_engine::logger::ActionOutcome;
//! use leher_engine::strategy::Strategy;
//!
//! struct AlwaysAct;
//! impl Strategy for AlwaysAct {
//!     fn decide(
//!         &self,
//!         _: &[Card], _: &[bool], _: &[bool],
//!         _: &[ActionOutcome], _: &[ActionOutcome], _: usize,
//!     ) -> bool {
//!         true
//!     }
//!     fn name(&self) -> &str { "always-act" }
//! }
//!
//! let config = EngineConfig { seed: Some(1), ..Default::default() };
//! let mut engine = Engine::new(config, Box::new(AlwaysAct), Box::new(AlwaysAct));
//! engine.reset(true, None)?;
//! let summary = engine.run_automated_game()?;
//! println!("{} vs {}", summary.player_score, summary.dealer_score);
//! # Ok::<(), leher_engine::errors::EngineError>(())
//! ```

pub mod cards;
pub mod deck;
pub mod engine;
pub mod errors;
pub mod logger;
pub mod scorer;
pub mod strategy;

pub use crate::cards::Card;
pub use crate::engine::{Engine, EngineConfig, GameSummary, Role};
pub use crate::errors::EngineError;
pub use crate::logger::{ActionOutcome, GameLogger, GameRecord};
pub use crate::strategy::Strategy;
