use crate::{
    calendar::DateFields,
    token::{FieldKind, Mask, MaskToken},
};

/// Fixed-width text for one field: zero-padded digits, or all placeholders when unset.
///
/// A partly typed field is padded too: "2" in a day renders "02", and the caret lands
/// between the pad zero and the typed digit.
///
/// A value wider than the field keeps its low-order digits, so the output length never
/// depends on the value.
fn field_text(value: u32, width: usize, placeholder: char) -> Vec<char> {
    if value == 0 {
        return vec![placeholder; width];
    }
    let digits: Vec<char> = format!("{value:0width$}").chars().collect();
    digits[digits.len() - width..].to_vec()
}

/// Lays the field values out along the mask. Separators are copied as-is; the n-th token of a
/// field emits the n-th character of that field's text.
pub fn render(fields: &DateFields, mask: &Mask, placeholder: char) -> String {
    let texts = FieldKind::ALL.map(|kind| field_text(fields.get(kind), mask.width(kind), placeholder));
    let mut next = [0_usize; 3];

    mask.tokens()
        .iter()
        .map(|token| match *token {
            MaskToken::Separator(c) => c,
            MaskToken::Field(kind) => {
                let i = kind.index();
                let c = texts[i][next[i]];
                next[i] += 1;
                c
            },
        })
        .collect()
}
