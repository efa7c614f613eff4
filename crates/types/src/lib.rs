//! Core types module - shared data structures and constants
//!
//! This module defines the fundamental types used throughout the application.
//! All types are pure data structures with no external dependencies, making them
//! usable in any context (canvas, scene simulation, terminal output).
//!
//! # Cell Geometry
//!
//! Every terminal character cell covers a 2x4 grid of logical pixels. Each of
//! the 8 pixels maps to one bit of a dot mask, rendered as a Unicode braille
//! glyph at `BRAILLE_BASE + mask`.
//!
//! | Row | Col 0 | Col 1 |
//! |-----|-------|-------|
//! | 0 | `0x01` | `0x08` |
//! | 1 | `0x02` | `0x10` |
//! | 2 | `0x04` | `0x20` |
//! | 3 | `0x40` | `0x80` |
//!
//! # Examples
//!
//! ```
//! use tui_orrery_types::{dot_mask, Color, CELL_HEIGHT, CELL_WIDTH};
//!
//! assert_eq!(Color::from_str("Cyan"), Some(Color::Cyan));
//! assert_eq!(dot_mask(3, 1), 0x80);
//! assert_eq!((CELL_WIDTH, CELL_HEIGHT), (2, 4));
//! ```

/// Logical pixels per cell, horizontally.
pub const CELL_WIDTH: usize = 2;

/// Logical pixels per cell, vertically.
pub const CELL_HEIGHT: usize = 4;

/// Code point of the empty braille pattern.
pub const BRAILLE_BASE: u32 = 0x2800;

/// Bit-to-position table, indexed `[row][col]` within a cell.
pub const DOT_MAP: [[u8; CELL_WIDTH]; CELL_HEIGHT] = [
    [0x01, 0x08],
    [0x02, 0x10],
    [0x04, 0x20],
    [0x40, 0x80],
];

/// Default frame rate when none is configured.
pub const DEFAULT_FPS: u32 = 20;

/// Dot mask for the pixel at (`row`, `col`) inside a cell.
///
/// Both indices are reduced modulo the cell size.
#[inline(always)]
pub fn dot_mask(row: usize, col: usize) -> u8 {
    DOT_MAP[row % CELL_HEIGHT][col % CELL_WIDTH]
}

/// Braille glyph for a dot mask.
///
/// ```
/// use tui_orrery_types::braille_char;
///
/// assert_eq!(braille_char(0), '\u{2800}');
/// assert_eq!(braille_char(0xff), '\u{28ff}');
/// ```
#[inline]
pub fn braille_char(dots: u8) -> char {
    // 0x2800..=0x28FF is entirely assigned.
    char::from_u32(BRAILLE_BASE + dots as u32).unwrap_or(' ')
}

/// Tick interval for a frame rate: `round(1000 / fps)` milliseconds, at least 1.
pub fn tick_interval_ms(fps: u32) -> u64 {
    if fps == 0 {
        return 1000;
    }
    let ms = (1000.0 / fps as f64).round() as u64;
    ms.max(1)
}

/// The closed 8-color palette plus the terminal default.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Color {
    #[default]
    Default,
    Black,
    Red,
    Green,
    Yellow,
    Blue,
    Magenta,
    Cyan,
    White,
}

impl Color {
    pub const ALL: [Color; 9] = [
        Color::Default,
        Color::Black,
        Color::Red,
        Color::Green,
        Color::Yellow,
        Color::Blue,
        Color::Magenta,
        Color::Cyan,
        Color::White,
    ];

    /// Parse a color from its name (case-insensitive)
    ///
    /// # Examples
    ///
    /// ```
    /// use tui_orrery_types::Color;
    ///
    /// assert_eq!(Color::from_str("red"), Some(Color::Red));
    /// assert_eq!(Color::from_str("DEFAULT"), Some(Color::Default));
    /// assert_eq!(Color::from_str("orange"), None);
    /// ```
    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "default" => Some(Color::Default),
            "black" => Some(Color::Black),
            "red" => Some(Color::Red),
            "green" => Some(Color::Green),
            "yellow" => Some(Color::Yellow),
            "blue" => Some(Color::Blue),
            "magenta" => Some(Color::Magenta),
            "cyan" => Some(Color::Cyan),
            "white" => Some(Color::White),
            _ => None,
        }
    }

    /// Convert to lowercase string representation
    pub fn as_str(&self) -> &'static str {
        match self {
            Color::Default => "default",
            Color::Black => "black",
            Color::Red => "red",
            Color::Green => "green",
            Color::Yellow => "yellow",
            Color::Blue => "blue",
            Color::Magenta => "magenta",
            Color::Cyan => "cyan",
            Color::White => "white",
        }
    }

    /// Offset of this color within an SGR color block (30..37 / 40..47).
    ///
    /// `Default` has no slot in the block and returns `None`.
    pub fn palette_index(&self) -> Option<u8> {
        match self {
            Color::Default => None,
            Color::Black => Some(0),
            Color::Red => Some(1),
            Color::Green => Some(2),
            Color::Yellow => Some(3),
            Color::Blue => Some(4),
            Color::Magenta => Some(5),
            Color::Cyan => Some(6),
            Color::White => Some(7),
        }
    }
}


/// User-level controls for the running scene.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SceneAction {
    /// Stop the render loop
    Quit,
    /// Freeze or resume the simulation clock
    TogglePause,
    /// Show or hide planet orbit outlines
    ToggleOrbits,
    /// Show or hide the key hint overlay
    ToggleHints,
    /// Double the simulation speed
    SpeedUp,
    /// Halve the simulation speed
    SlowDown,
}
