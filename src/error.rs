//! Error types for the HeatGrid firmware.
//!
//! Only the boot path can fail: configuration validation and peripheral
//! bring-up.  The scan loop itself has no error path: out-of-range points
//! cannot be built, and a conversion that never completes hangs the loop.

use core::fmt;

pub use crate::drivers::hw_init::HwInitError;

// ---------------------------------------------------------------------------
// Top-level firmware error
// ---------------------------------------------------------------------------

/// Every fallible boot step funnels into this type.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Error {
    /// Peripheral initialisation failed.
    Init(HwInitError),
    /// Compile-time configuration failed validation.
    Config(ConfigError),
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Init(e) => write!(f, "init: {e}"),
            Self::Config(e) => write!(f, "config: {e}"),
        }
    }
}

impl std::error::Error for Error {}

impl From<HwInitError> for Error {
    fn from(e: HwInitError) -> Self {
        Self::Init(e)
    }
}

impl From<ConfigError> for Error {
    fn from(e: ConfigError) -> Self {
        Self::Config(e)
    }
}

// ---------------------------------------------------------------------------
// Configuration errors
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConfigError {
    /// A target entry exceeds the reading full scale.
    TargetOutOfRange { row: usize, col: usize },
    /// The error margin exceeds the reading full scale.
    MarginOutOfRange,
    /// Dwell time of zero would spin the scan without settling.
    ZeroDwell,
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::TargetOutOfRange { row, col } => {
                write!(f, "target at ({row},{col}) exceeds full scale")
            }
            Self::MarginOutOfRange => write!(f, "error margin exceeds full scale"),
            Self::ZeroDwell => write!(f, "dwell time must be non-zero"),
        }
    }
}

impl std::error::Error for ConfigError {}

// ---------------------------------------------------------------------------
// Convenience Result alias
// ---------------------------------------------------------------------------

/// Firmware-wide `Result` alias.
pub type Result<T> = core::result::Result<T, Error>;
