use serde::{Deserialize, Serialize};

use crate::token::{FieldKind, Mask};

/// Keeps the ASCII digits of `text`, in order.
pub fn extract_digits(text: &str) -> String {
    text.chars().filter(char::is_ascii_digit).collect()
}

/// Digit strings sliced out of the user's input, one per field, not yet validated.
///
/// An empty string means the user has not reached that field yet.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RawFields {
    pub day:   String,
    pub month: String,
    pub year:  String,
}

impl RawFields {
    pub fn get(&self, kind: FieldKind) -> &str {
        match kind {
            FieldKind::Day => &self.day,
            FieldKind::Month => &self.month,
            FieldKind::Year => &self.year,
        }
    }

    fn get_mut(&mut self, kind: FieldKind) -> &mut String {
        match kind {
            FieldKind::Day => &mut self.day,
            FieldKind::Month => &mut self.month,
            FieldKind::Year => &mut self.year,
        }
    }
}

/// Hands out `digits` to the mask's fields greedily, in mask order.
///
/// Each field takes up to its width; whatever is left over after the last field is dropped.
pub fn allocate(digits: &str, mask: &Mask) -> RawFields {
    let mut fields = RawFields::default();
    let mut rest = digits;

    for &kind in mask.field_order() {
        // digits are ASCII, so byte and char offsets agree
        let take = mask.width(kind).min(rest.len());
        let (head, tail) = rest.split_at(take);
        head.clone_into(fields.get_mut(kind));
        rest = tail;
    }

    fields
}
