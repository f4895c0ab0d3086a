mod calendar;
mod config;
mod consts;
mod cursor;
mod fields;
mod prelude;
mod render;
mod token;

pub use calendar::{DateFields, days_in_month, is_leap_year, validate};
pub use config::{ConfigError, MaskConfig};
pub use consts::*;
pub use cursor::{digits_before, map_cursor};
pub use fields::{RawFields, allocate, extract_digits};
pub use render::render;
pub use token::{FieldKind, Mask, MaskToken};

use std::ops::RangeInclusive;

use log::trace;
use serde::{Deserialize, Serialize};

use crate::prelude::*;

/// Text as the user left it, before formatting, with the caret position in chars.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct EditState {
    pub raw_text:      String,
    pub cursor_offset: usize,
}

impl EditState {
    pub fn new(raw_text: impl Into<String>, cursor_offset: usize) -> Self {
        Self {
            raw_text: raw_text.into(),
            cursor_offset,
        }
    }
}

/// Fully masked text and the caret position in chars.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Display, Serialize, Deserialize)]
#[display(fmt = "{text}")]
pub struct FormatResult {
    pub text:          String,
    pub cursor_offset: usize,
}

impl FormatResult {
    pub fn new(text: impl Into<String>, cursor_offset: usize) -> Self {
        Self {
            text: text.into(),
            cursor_offset,
        }
    }
}

impl From<FormatResult> for EditState {
    fn from(result: FormatResult) -> Self {
        Self::new(result.text, result.cursor_offset)
    }
}

/// A compiled mask together with its configuration.
///
/// Compile once per distinct config and reuse it for every edit of the field.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DateMask {
    config: MaskConfig,
    mask:   Mask,
    years:  RangeInclusive<u32>,
}

impl DateMask {
    pub fn new(config: MaskConfig) -> Self {
        let mask = Mask::compile(config.mask());
        let years = displayable_years(&config, mask.width(FieldKind::Year));
        Self { config, mask, years }
    }

    pub const fn config(&self) -> &MaskConfig {
        &self.config
    }

    pub const fn mask(&self) -> &Mask {
        &self.mask
    }

    /// Length of every non-empty formatted text
    pub fn len(&self) -> usize {
        self.mask.len()
    }

    pub fn is_empty(&self) -> bool {
        self.mask.is_empty()
    }

    /// Year bounds in effect: the configured bounds, capped to what the year field can show
    pub const fn years(&self) -> &RangeInclusive<u32> {
        &self.years
    }

    /// Validated field values for any text, formatted or not
    pub fn fields(&self, raw_text: &str) -> DateFields {
        let digits = extract_digits(raw_text);
        validate(&allocate(&digits, &self.mask), &self.years)
    }

    /// True when `text` has the mask's length and every digit slot holds a digit
    pub fn is_complete(&self, text: &str) -> bool {
        text.chars().count() == self.mask.len()
            && self
                .mask
                .tokens()
                .iter()
                .zip(text.chars())
                .all(|(token, c)| !token.is_field() || c.is_ascii_digit())
    }

    /// Formats `new` without regard to the previous value.
    pub fn format(&self, new: &EditState) -> FormatResult {
        if new.raw_text.is_empty() {
            return FormatResult::default();
        }

        let digits = extract_digits(&new.raw_text);
        let raw = allocate(&digits, &self.mask);
        let fields = validate(&raw, &self.years);
        let text = render(&fields, &self.mask, self.config.placeholder());

        let before = digits_before(&new.raw_text, new.cursor_offset);
        let cursor_offset = map_cursor(before, &text, self.config.placeholder());

        trace!(
            "format {:?}@{} digits={digits:?} raw={raw:?} fields={fields:?} -> {text:?}@{cursor_offset}",
            new.raw_text,
            new.cursor_offset,
        );

        FormatResult {
            text,
            cursor_offset,
        }
    }

    /// Formats the user's edit `new` of the previously formatted `old`.
    ///
    /// The result depends on `new` alone; `old` is only logged.
    pub fn apply_edit(&self, old: &FormatResult, new: &EditState) -> FormatResult {
        trace!("edit of {:?}@{}", old.text, old.cursor_offset);
        self.format(new)
    }
}

impl From<MaskConfig> for DateMask {
    fn from(config: MaskConfig) -> Self {
        Self::new(config)
    }
}

impl Default for DateMask {
    fn default() -> Self {
        Self::new(MaskConfig::default())
    }
}

/// Caps the configured year bounds to the largest number `width` digits can hold, so a
/// clamped year never renders wider than its field.
fn displayable_years(config: &MaskConfig, width: usize) -> RangeInclusive<u32> {
    let widest = u32::try_from(width)
        .ok()
        .and_then(|w| 10_u32.checked_pow(w))
        .map_or(u32::MAX, |n| n - 1);
    config.min_year().min(widest)..=config.max_year().min(widest)
}

/// Formats a raw edit against `config`. Never fails: every input is clamped or defaulted.
pub fn apply_edit(old: &FormatResult, new: &EditState, config: &MaskConfig) -> FormatResult {
    DateMask::new(config.clone()).apply_edit(old, new)
}
