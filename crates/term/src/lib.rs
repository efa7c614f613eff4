//! Terminal braille rendering module.
//!
//! A small rendering layer for real-time 2D vector graphics in a terminal.
//! Shapes are rasterized into a [`Canvas`] of sub-character pixels packed
//! into braille glyphs, serialized to an ANSI-styled frame string and pushed
//! to the terminal by a [`TerminalWriter`].
//!
//! Goals:
//! - Keep rasterization pure and testable (no I/O in `canvas` or `color`)
//! - Allocation-free frame serialization when the output buffer is reused
//! - Cheap terminal updates via line-diffed partial writes

pub mod canvas;
pub mod color;
pub mod monitor;
pub mod writer;

pub use tui_orrery_types as types;

pub use canvas::{Canvas, CanvasError, Cell, Frame};
pub use color::{bg, fg, paint, rs, Channel, Sgr, RESET};
pub use monitor::FrameMonitor;
pub use writer::TerminalWriter;
