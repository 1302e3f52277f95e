use crate::strategy::StrategyKind;

/// What the run driver does after a run aborts.
#[derive(
    Clone,
    Copy,
    Debug,
    Default,
    PartialEq,
    Eq,
    Hash,
    strum::Display,
    strum::EnumString,
    strum::AsRefStr,
)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
#[strum(serialize_all = "snake_case", ascii_case_insensitive)]
pub enum AbortPolicy {
    /// Stop every remaining run after the first abort.
    #[default]
    HaltAll,
    /// Record the abort and move on to the next run.
    Continue,
}

/// Cost budget and slot limit a squad must satisfy.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Budget {
    pub max_cost: u32,
    pub max_squad_size: usize,
}

impl Budget {
    pub const fn new(max_cost: u32, max_squad_size: usize) -> Self {
        Self {
            max_cost,
            max_squad_size,
        }
    }
}

/// Squad generation parameters.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct SquadConfig {
    /// Exact total cost every finished squad must reach.
    pub max_cost: u32,
    /// Upper bound on the number of items in a squad.
    pub max_squad_size: usize,
    /// Number of independent runs.
    pub num_squads: usize,
    pub strategy: StrategyKind,
    /// Attempts the random strategy makes before giving up on a pick.
    pub max_retries: u32,
    pub on_abort: AbortPolicy,
}

impl SquadConfig {
    pub const DEFAULT_MAX_COST: u32 = 15;
    pub const DEFAULT_MAX_SQUAD_SIZE: usize = 5;
    pub const DEFAULT_NUM_SQUADS: usize = 1;
    pub const DEFAULT_MAX_RETRIES: u32 = 1000;

    pub fn new() -> Self {
        Self {
            max_cost: Self::DEFAULT_MAX_COST,
            max_squad_size: Self::DEFAULT_MAX_SQUAD_SIZE,
            num_squads: Self::DEFAULT_NUM_SQUADS,
            strategy: StrategyKind::default(),
            max_retries: Self::DEFAULT_MAX_RETRIES,
            on_abort: AbortPolicy::default(),
        }
    }

    pub const fn budget(&self) -> Budget {
        Budget::new(self.max_cost, self.max_squad_size)
    }

    /// Rejects parameters no run could satisfy.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.max_squad_size == 0 {
            return Err(ConfigError::ZeroSquadSize);
        }
        if self.max_retries == 0 {
            return Err(ConfigError::ZeroRetries);
        }
        Ok(())
    }
}

impl Default for SquadConfig {
    fn default() -> Self {
        Self::new()
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, thiserror::Error)]
pub enum ConfigError {
    #[error("max squad size must be at least 1")]
    ZeroSquadSize,

    #[error("max retries must be at least 1")]
    ZeroRetries,
}
