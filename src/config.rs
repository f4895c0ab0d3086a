use std::ops::RangeInclusive;

use serde::{Deserialize, Serialize};

use crate::{DEFAULT_MASK, DEFAULT_PLACEHOLDER, MAX_YEAR, MIN_YEAR};

/// Error type for mask configuration.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ConfigError {
    /// Year bounds must start at 1 or later; 0 is the unset year.
    #[error("Invalid minimum year: {0} (must be at least {min})", min = MIN_YEAR)]
    YearOutOfRange(u32),

    /// Minimum year is after maximum year.
    #[error("Invalid year bounds: min ({min}) is after max ({max})")]
    InvertedYearBounds { min: u32, max: u32 },

    /// Placeholders must be distinguishable from typed digits.
    #[error("Invalid placeholder {0:?}: must not be an ASCII digit")]
    DigitPlaceholder(char),
}

/// Mask pattern plus the bounds applied while formatting.
///
/// Fields are private so every instance has passed validation, including deserialized ones.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "MaskConfigRepr", into = "MaskConfigRepr")]
pub struct MaskConfig {
    mask:        String,
    min_year:    u32,
    max_year:    u32,
    placeholder: char,
}

impl MaskConfig {
    /// Creates a config for `mask` with years `1..=9999` and `_` placeholders
    pub fn new(mask: impl Into<String>) -> Self {
        Self {
            mask:        mask.into(),
            min_year:    MIN_YEAR,
            max_year:    MAX_YEAR,
            placeholder: DEFAULT_PLACEHOLDER,
        }
    }

    /// Replaces the year bounds (inclusive)
    ///
    /// # Errors
    /// Returns `ConfigError::YearOutOfRange` if `min` is 0, and
    /// `ConfigError::InvertedYearBounds` if `min > max`.
    pub fn with_year_bounds(mut self, min: u32, max: u32) -> Result<Self, ConfigError> {
        if min < MIN_YEAR {
            return Err(ConfigError::YearOutOfRange(min));
        }
        if min > max {
            return Err(ConfigError::InvertedYearBounds { min, max });
        }
        self.min_year = min;
        self.max_year = max;
        Ok(self)
    }

    /// Replaces the placeholder character
    ///
    /// # Errors
    /// Returns `ConfigError::DigitPlaceholder` if `placeholder` is an ASCII digit.
    pub fn with_placeholder(mut self, placeholder: char) -> Result<Self, ConfigError> {
        if placeholder.is_ascii_digit() {
            return Err(ConfigError::DigitPlaceholder(placeholder));
        }
        self.placeholder = placeholder;
        Ok(self)
    }

    pub fn mask(&self) -> &str {
        &self.mask
    }

    pub const fn min_year(&self) -> u32 {
        self.min_year
    }

    pub const fn max_year(&self) -> u32 {
        self.max_year
    }

    pub const fn years(&self) -> RangeInclusive<u32> {
        self.min_year..=self.max_year
    }

    pub const fn placeholder(&self) -> char {
        self.placeholder
    }
}

impl Default for MaskConfig {
    fn default() -> Self {
        Self::new(DEFAULT_MASK)
    }
}

impl From<&str> for MaskConfig {
    fn from(mask: &str) -> Self {
        Self::new(mask)
    }
}

#[derive(Serialize, Deserialize)]
#[serde(default)]
struct MaskConfigRepr {
    mask:        String,
    min_year:    u32,
    max_year:    u32,
    placeholder: char,
}

impl Default for MaskConfigRepr {
    fn default() -> Self {
        MaskConfig::default().into()
    }
}

impl TryFrom<MaskConfigRepr> for MaskConfig {
    type Error = ConfigError;

    fn try_from(repr: MaskConfigRepr) -> Result<Self, Self::Error> {
        Self::new(repr.mask)
            .with_year_bounds(repr.min_year, repr.max_year)?
            .with_placeholder(repr.placeholder)
    }
}

impl From<MaskConfig> for MaskConfigRepr {
    fn from(config: MaskConfig) -> Self {
        Self {
            mask:        config.mask,
            min_year:    config.min_year,
            max_year:    config.max_year,
            placeholder: config.placeholder,
        }
    }
}
