//! Reference decision strategies for the Le Her engine.
//!
//! The engine defines the [`Strategy`] seam; this crate supplies the
//! concrete strategies simulations actually run with, plus a small factory
//! that builds one from a CLI-friendly name such as `keep8`.

mod keep_n;

pub use keep_n::KeepNAndAbove;

use leher_engine::strategy::Strategy;
use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum StrategyError {
    #[error("unknown strategy: {0} (expected keepN, e.g. keep8)")]
    Unknown(String),
    #[error("keep threshold must be between 1 and 14, got {0}")]
    ThresholdOutOfRange(u32),
}

/// Builds a strategy from its name.
///
/// `keepN` keeps any card scoring N or higher and tries to replace anything
/// below, so `keep1` never acts and `keep14` always does. The classical
/// house recommendation for both roles is `keep8`.
///
/// # Examples
///
/// ```
/// use leher_strategy::create_strategy;
///
/// let strategy = create_strategy("keep8").unwrap();
/// assert_eq!(strategy.name(), "keep8");
/// assert!(create_strategy("bluff").is_err());
/// ```
pub fn create_strategy(name: &str) -> Result<Box<dyn Strategy>, StrategyError> {
    let threshold = name
        .strip_prefix("keep")
        .and_then(|n| n.parse::<u32>().ok())
        .ok_or_else(|| StrategyError::Unknown(name.to_string()))?;
    Ok(Box::new(KeepNAndAbove::new(threshold)?))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn factory_builds_keep_thresholds() {
        for n in 1..=14 {
            let strategy = create_strategy(&format!("keep{n}")).unwrap();
            assert_eq!(strategy.name(), format!("keep{n}"));
        }
    }

    #[test]
    fn factory_rejects_unknown_names() {
        assert_eq!(
            create_strategy("bluff").unwrap_err(),
            StrategyError::Unknown("bluff".to_string())
        );
        assert_eq!(
            create_strategy("keepX").unwrap_err(),
            StrategyError::Unknown("keepX".to_string())
        );
        assert_eq!(
            create_strategy("keep0").unwrap_err(),
            StrategyError::ThresholdOutOfRange(0)
        );
        assert_eq!(
            create_strategy("keep15").unwrap_err(),
            StrategyError::ThresholdOutOfRange(15)
        );
    }
}
