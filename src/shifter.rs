//! Letter rotation (Caesar shift)
//!
//! Rotates ASCII letters within their own case by a fixed offset. Every
//! other character, including non-ASCII text, is passed through untouched.

use std::fmt;

/// Number of letters in each alphabet.
pub const ALPHABET_LEN: u8 = 26;

/// Uppercase Latin alphabet, indexed by letter position.
pub const UPPERCASE: &[u8; ALPHABET_LEN as usize] = b"ABCDEFGHIJKLMNOPQRSTUVWXYZ";

/// Lowercase Latin alphabet, indexed by letter position.
pub const LOWERCASE: &[u8; ALPHABET_LEN as usize] = b"abcdefghijklmnopqrstuvwxyz";

/// A rotation amount normalized into `0..26`.
///
/// Any `i64` converts into a `Shift`: the amount is reduced with a
/// Euclidean remainder, so negative amounts rotate backwards and amounts
/// spanning several full cycles wrap in either direction.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct Shift(u8);

impl Shift {
    pub fn new(amount: i64) -> Self {
        // rem_euclid(26) is always in 0..26, so the cast cannot truncate.
        Self(amount.rem_euclid(i64::from(ALPHABET_LEN)) as u8)
    }

    /// The normalized offset, in `0..26`.
    pub fn offset(self) -> u8 {
        self.0
    }

    /// The shift that undoes this one.
    pub fn inverse(self) -> Self {
        Self((ALPHABET_LEN - self.0) % ALPHABET_LEN)
    }

    pub fn apply_byte(self, b: u8) -> u8 {
        match b {
            b'A'..=b'Z' => UPPERCASE[self.rotate(b - b'A')],
            b'a'..=b'z' => LOWERCASE[self.rotate(b - b'a')],
            _ => b,
        }
    }

    pub fn apply_char(self, c: char) -> char {
        if c.is_ascii_alphabetic() {
            char::from(self.apply_byte(c as u8))
        } else {
            c
        }
    }

    /// Shift every letter of `input`.
    pub fn apply(self, input: &str) -> String {
        input.chars().map(|c| self.apply_char(c)).collect()
    }

    /// Shift a raw line in place.
    ///
    /// Only ASCII letter bytes are touched. UTF-8 lead and continuation
    /// bytes are never ASCII, so valid UTF-8 stays valid and any other
    /// bytes pass through unchanged.
    pub fn apply_in_place(self, bytes: &mut [u8]) {
        if self.0 == 0 {
            return;
        }
        for b in bytes.iter_mut() {
            *b = self.apply_byte(*b);
        }
    }

    fn rotate(self, pos: u8) -> usize {
        usize::from((pos + self.0) % ALPHABET_LEN)
    }
}

impl From<i64> for Shift {
    fn from(amount: i64) -> Self {
        Self::new(amount)
    }
}

impl fmt::Display for Shift {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Rotate every ASCII letter of `input` by `amount` positions, preserving case.
///
/// ```
/// assert_eq!(shiftbox::shifter::shift("Hello, World! 123", 3), "Khoor, Zruog! 123");
/// assert_eq!(shiftbox::shifter::shift("ABC", -3), "XYZ");
/// ```
pub fn shift(input: &str, amount: i64) -> String {
    Shift::new(amount).apply(input)
}
