//! ANSI SGR codes for the symbolic palette.
//!
//! Pure functions only. `Color` is a closed enum, so every mapping is total.

use std::fmt;

use crate::types::Color;

/// SGR reset sequence.
pub const RESET: &str = "\x1b[0m";

/// Color channel targeted by an SGR code.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Channel {
    Foreground,
    Background,
}

/// SGR parameter for `color` on `channel`.
///
/// Palette entries map to 30..37 / 40..47; `Default` maps to 39 / 49.
pub fn sgr_code(color: Color, channel: Channel) -> u8 {
    let base = match channel {
        Channel::Foreground => 30,
        Channel::Background => 40,
    };
    base + color.palette_index().unwrap_or(9)
}

pub fn fg_code(color: Color) -> u8 {
    sgr_code(color, Channel::Foreground)
}

pub fn bg_code(color: Color) -> u8 {
    sgr_code(color, Channel::Background)
}

/// Escape prefix that selects `color` on `channel`.
///
/// Implements `Display` so it can be written without allocating.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Sgr {
    pub color: Color,
    pub channel: Channel,
}

impl fmt::Display for Sgr {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "\x1b[{}m", sgr_code(self.color, self.channel))
    }
}

pub fn fg(color: Color) -> Sgr {
    Sgr {
        color,
        channel: Channel::Foreground,
    }
}

pub fn bg(color: Color) -> Sgr {
    Sgr {
        color,
        channel: Channel::Background,
    }
}

/// Append the reset suffix.
pub fn rs(s: &str) -> String {
    let mut out = String::with_capacity(s.len() + RESET.len());
    out.push_str(s);
    out.push_str(RESET);
    out
}

/// Wrap `s` as background, then foreground, then text, then reset.
pub fn paint(s: &str, fg_color: Color, bg_color: Color) -> String {
    format!("{}{}{}{}", bg(bg_color), fg(fg_color), s, RESET)
}
