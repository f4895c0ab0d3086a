/// Number of ASCII digits in `text` before the char offset `cursor`.
/// A cursor past the end counts every digit.
pub fn digits_before(text: &str, cursor: usize) -> usize {
    text.chars()
        .take(cursor)
        .filter(char::is_ascii_digit)
        .count()
}

/// Char offset in `rendered` just before digit slot number `digits` (0-indexed).
///
/// A digit slot is any char that is an ASCII digit or the placeholder, so the caret can sit
/// inside an unfilled field. With fewer slots than `digits` the cursor goes to the end.
pub fn map_cursor(mut digits: usize, rendered: &str, placeholder: char) -> usize {
    let mut len = 0;
    for (pos, c) in rendered.chars().enumerate() {
        len = pos + 1;
        if !(c.is_ascii_digit() || c == placeholder) {
            continue;
        }
        if digits == 0 {
            return pos;
        }
        digits -= 1;
    }
    len
}
