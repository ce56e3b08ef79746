//! Lines are colored with the basic 16-color SGR codes rather than 24-bit escapes, so
//! the output renders the same on every terminal and in captured logs.

use std::fmt;

/// A foreground SGR code. A dedicated type keeps raw numbers from leaking into rendering code.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Color(u8);

impl Color {
    pub const WHITE: Self = Self(37);
    pub const BRIGHT_RED: Self = Self(91);
    pub const BRIGHT_YELLOW: Self = Self(93);
    pub const BRIGHT_CYAN: Self = Self(96);

    /// Terminates the line's styling. The explicit `00` is part of the line format.
    pub const RESET: &'static str = "\x1b[0;00m";

    /// The raw `\x1b[<code>m` escape.
    #[must_use]
    pub fn fg_ansi(self) -> String {
        format!("\x1b[{}m", self.0)
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "\x1b[{}m", self.0)
    }
}

/// Wraps `text` in `color` and the reset sequence.
#[must_use]
pub fn colorize(text: &str, color: Color) -> String {
    let reset = Color::RESET;
    format!("{color}{text}{reset}")
}

/// Removes SGR escapes so adapters writing to files can reuse colored text.
#[must_use]
pub fn strip_ansi(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    let mut chars = text.chars().peekable();

    while let Some(c) = chars.next() {
        if c == '\x1b' && chars.peek() == Some(&'[') {
            chars.next();
            // Parameters run until the final byte of the sequence
            for c in chars.by_ref() {
                if c.is_ascii_alphabetic() {
                    break;
                }
            }
            continue;
        }
        out.push(c);
    }

    out
}
