use std::{convert::Infallible, fmt, str::FromStr};

use serde::{Deserialize, Serialize};

use crate::{DAY_CHAR, MONTH_CHAR, YEAR_CHAR, prelude::*};

/// One of the three date fields a mask can hold.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display, Serialize, Deserialize)]
pub enum FieldKind {
    #[display(fmt = "day")]
    Day,
    #[display(fmt = "month")]
    Month,
    #[display(fmt = "year")]
    Year,
}

impl FieldKind {
    pub const ALL: [Self; 3] = [Self::Day, Self::Month, Self::Year];

    /// Mask character that produces a token of this kind
    pub const fn mask_char(self) -> char {
        match self {
            Self::Day => DAY_CHAR,
            Self::Month => MONTH_CHAR,
            Self::Year => YEAR_CHAR,
        }
    }

    pub(crate) const fn index(self) -> usize {
        match self {
            Self::Day => 0,
            Self::Month => 1,
            Self::Year => 2,
        }
    }

    const fn from_mask_char(c: char) -> Option<Self> {
        match c {
            DAY_CHAR => Some(Self::Day),
            MONTH_CHAR => Some(Self::Month),
            YEAR_CHAR => Some(Self::Year),
            _ => None,
        }
    }
}

/// One classified character of a mask.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display)]
pub enum MaskToken {
    /// One digit slot of a date field
    #[display(fmt = "{}", "_0.mask_char()")]
    Field(FieldKind),
    /// A literal rendered verbatim
    #[display(fmt = "{_0}")]
    Separator(char),
}

impl MaskToken {
    pub const fn field(self) -> Option<FieldKind> {
        match self {
            Self::Field(kind) => Some(kind),
            Self::Separator(_) => None,
        }
    }

    pub const fn is_field(self) -> bool {
        matches!(self, Self::Field(_))
    }
}

impl From<char> for MaskToken {
    fn from(c: char) -> Self {
        FieldKind::from_mask_char(c).map_or(Self::Separator(c), Self::Field)
    }
}

/// A compiled mask: the token sequence plus the field widths and field order derived from it.
///
/// Compilation never fails. A mask without any day characters simply has a day width of 0.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Mask {
    tokens: Vec<MaskToken>,
    widths: [usize; 3],
    order:  Vec<FieldKind>,
}

impl Mask {
    /// Classifies every character of `mask` into a token.
    pub fn compile(mask: &str) -> Self {
        let tokens: Vec<MaskToken> = mask.chars().map(MaskToken::from).collect();

        let mut widths = [0; 3];
        let mut order = Vec::with_capacity(FieldKind::ALL.len());
        for kind in tokens.iter().filter_map(|t| t.field()) {
            if widths[kind.index()] == 0 {
                order.push(kind);
            }
            widths[kind.index()] += 1;
        }

        Self { tokens, widths, order }
    }

    pub fn tokens(&self) -> &[MaskToken] {
        &self.tokens
    }

    /// Number of tokens, which is also the length of every rendered text
    pub fn len(&self) -> usize {
        self.tokens.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tokens.is_empty()
    }

    /// Number of tokens of the given field kind
    pub const fn width(&self, kind: FieldKind) -> usize {
        self.widths[kind.index()]
    }

    /// Fields in the order their first token appears in the mask.
    /// Fields with width 0 are not listed.
    pub fn field_order(&self) -> &[FieldKind] {
        &self.order
    }

    /// Total number of digit slots across all fields
    pub fn digit_slots(&self) -> usize {
        self.widths.iter().sum()
    }
}

impl fmt::Display for Mask {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.tokens.iter().try_for_each(|t| write!(f, "{t}"))
    }
}

impl From<&str> for Mask {
    fn from(mask: &str) -> Self {
        Self::compile(mask)
    }
}

impl FromStr for Mask {
    type Err = Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(Self::compile(s))
    }
}
