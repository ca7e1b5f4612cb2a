use thiserror::Error;

/// Rejected game configuration
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ConfigError {
    #[error("{name} must be positive, got {value}")]
    NonPositive { name: &'static str, value: f32 },

    #[error("{name} must be finite, got {value}")]
    NonFinite { name: &'static str, value: f32 },

    #[error("{name} timer period must be at least 1ms")]
    ZeroPeriod { name: &'static str },

    #[error("win score must be at least 1")]
    ZeroWinScore,
}
