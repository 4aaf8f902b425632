//! Keystroke shaping for numeric input fields.
//!
//! Policy only: discrete data admits digits; continuous data additionally
//! admits the decimal point and minus sign. Authoritative validation happens
//! on submit, not here.

/// Whether a typed character may enter a numeric field.
pub fn key_permitted(key: char, discrete: bool) -> bool {
    key.is_ascii_digit() || (!discrete && (key == '.' || key == '-'))
}

/// Apply the keystroke policy to a whole buffer (paste handling).
pub fn sanitize(text: &str, discrete: bool) -> String {
    text.chars().filter(|c| key_permitted(*c, discrete)).collect()
}
