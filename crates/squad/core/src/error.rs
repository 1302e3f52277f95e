//! Error taxonomy for squad construction.
//!
//! Draw failures come from a single strategy call; squad failures wrap a draw
//! failure with enough context to report which run stalled and where.
//!
//! # Severity
//!
//! - **Recoverable**: an empty tier, which [`RandomStrategy`](crate::RandomStrategy)
//!   absorbs by retrying with another tier
//! - **Fatal**: everything else; the run cannot produce a valid squad

use crate::strategy::StrategyKind;

/// Severity level of an error, used to decide whether a retry makes sense.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum ErrorSeverity {
    /// Another attempt with a different tier may succeed.
    Recoverable,

    /// The run has to stop.
    Fatal,
}

impl ErrorSeverity {
    /// Returns true if this error is potentially recoverable.
    pub const fn is_recoverable(&self) -> bool {
        matches!(self, Self::Recoverable)
    }
}

/// Errors raised while drawing one item for a squad.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum DrawError {
    #[error("no items left in cost tier {cost}")]
    EmptyTier { cost: u32 },

    #[error("gave up after {attempts} attempts, last cost choice {cost}")]
    RetryExhausted { cost: u32, attempts: u32 },

    #[error("inventory has no items left in any cost tier")]
    InventoryExhausted,
}

impl DrawError {
    pub const fn severity(&self) -> ErrorSeverity {
        match self {
            Self::EmptyTier { .. } => ErrorSeverity::Recoverable,
            Self::RetryExhausted { .. } | Self::InventoryExhausted => ErrorSeverity::Fatal,
        }
    }

    /// The cost tier that caused the stall, if one was involved.
    pub const fn stuck_cost(&self) -> Option<u32> {
        match self {
            Self::EmptyTier { cost } | Self::RetryExhausted { cost, .. } => Some(*cost),
            Self::InventoryExhausted => None,
        }
    }

    /// Stable machine-readable name of this error.
    pub const fn error_code(&self) -> &'static str {
        match self {
            Self::EmptyTier { .. } => "empty_tier",
            Self::RetryExhausted { .. } => "retry_exhausted",
            Self::InventoryExhausted => "inventory_exhausted",
        }
    }
}

/// A squad run that stopped before reaching its budget.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum SquadError {
    #[error(
        "{strategy} strategy aborted after {picks_made} picks ({spent}/{max_cost} spent): {source}"
    )]
    Aborted {
        strategy: StrategyKind,
        picks_made: usize,
        spent: u32,
        max_cost: u32,
        #[source]
        source: DrawError,
    },
}

impl SquadError {
    /// The draw failure behind this abort.
    pub fn draw_error(&self) -> &DrawError {
        match self {
            Self::Aborted { source, .. } => source,
        }
    }

    pub fn stuck_cost(&self) -> Option<u32> {
        self.draw_error().stuck_cost()
    }
}
