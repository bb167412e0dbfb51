//! Tween configuration errors

use kinet_core::Attribute;
use thiserror::Error;

/// Errors raised while configuring a tween.
///
/// Every variant surfaces at configuration time; a running tween never
/// fails, it only finishes or is killed.
#[derive(Debug, Error)]
pub enum TweenError {
    /// Duration must be a positive number of milliseconds
    #[error("tween duration must be positive, got {0} ms")]
    NonPositiveDuration(f64),

    /// End values must match the attribute's component count
    #[error("{attribute:?} carries {expected} component(s), got {actual}")]
    ArityMismatch {
        attribute: Attribute,
        expected: usize,
        actual: usize,
    },

    /// No end values were configured before build
    #[error("no end values configured")]
    MissingEndValues,

    /// Sampling current values requires a bound target
    #[error("cannot sample current values: no target bound")]
    NoTarget,

    /// The unit has been started; its configuration is frozen
    #[error("tween already started, configuration is frozen")]
    Frozen,
}

/// Result type for tween configuration.
pub type Result<T> = std::result::Result<T, TweenError>;
