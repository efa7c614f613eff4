//! Braille canvas: a logical pixel grid packed into terminal cells.
//!
//! Pixels live in *logical pixel space* (`width` x `height`), while colors and
//! text live in *cell space* (one entry per terminal character). Each cell
//! holds an 8-bit dot mask covering a 2x4 pixel block and renders as the
//! braille glyph `U+2800 + mask`.
//!
//! Color is tracked per cell, not per pixel: the last colored write into a
//! cell decides the foreground of the whole cell. Shapes that share a cell
//! therefore share a color. This is the intended rendering model.

use std::collections::TryReserveError;
use std::fmt;

use thiserror::Error;

use crate::color::{bg, fg, RESET};
use crate::types::{braille_char, dot_mask, Color, CELL_HEIGHT, CELL_WIDTH};

/// Errors raised while building a canvas.
#[derive(Debug, Error)]
pub enum CanvasError {
    /// Pixel dimensions do not tile into whole 2x4 cells.
    #[error("canvas size {width}x{height} is not a multiple of the 2x4 cell size")]
    Geometry { width: usize, height: usize },

    /// The cell grid could not be allocated.
    #[error("failed to allocate {cells} canvas cells")]
    Alloc {
        cells: usize,
        #[source]
        source: TryReserveError,
    },
}

/// A single terminal cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Cell {
    /// One bit per pixel of the 2x4 block.
    pub dots: u8,
    pub fg: Color,
    pub bg: Color,
    /// Literal character shown instead of the braille glyph.
    pub text: Option<char>,
}

impl Cell {
    const fn blank(color: Color) -> Self {
        Self {
            dots: 0,
            fg: color,
            bg: color,
            text: None,
        }
    }

    /// The character this cell displays.
    pub fn glyph(&self) -> char {
        match self.text {
            Some(ch) => ch,
            None if self.dots != 0 => braille_char(self.dots),
            None => ' ',
        }
    }

    pub fn is_blank(&self) -> bool {
        self.dots == 0 && self.text.is_none()
    }
}

/// Packed braille framebuffer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Canvas {
    width: usize,
    height: usize,
    cells: Vec<Cell>,
}

impl Canvas {
    /// Create a blank canvas of `width` x `height` logical pixels.
    ///
    /// Both dimensions must tile into whole cells (width even, height a
    /// multiple of four). Zero-sized canvases are allowed.
    pub fn new(width: usize, height: usize) -> Result<Self, CanvasError> {
        let cells = alloc_cells(width, height)?;
        Ok(Self {
            width,
            height,
            cells,
        })
    }

    /// Canvas sized for a terminal of `columns` x `rows` characters.
    ///
    /// One column is left free so the last glyph never wraps.
    pub fn for_terminal(columns: u16, rows: u16) -> Result<Self, CanvasError> {
        let (width, height) = terminal_pixels(columns, rows);
        Self::new(width, height)
    }

    /// Canvas sized for the current terminal.
    pub fn from_terminal() -> anyhow::Result<Self> {
        let (columns, rows) = crossterm::terminal::size()?;
        Ok(Self::for_terminal(columns, rows)?)
    }

    /// Replace the grid with a blank one at new dimensions.
    ///
    /// On error the canvas is left untouched.
    pub fn rebuild(&mut self, width: usize, height: usize) -> Result<(), CanvasError> {
        let cells = alloc_cells(width, height)?;
        log::debug!(
            "canvas rebuilt {}x{} -> {}x{} px",
            self.width,
            self.height,
            width,
            height
        );
        self.width = width;
        self.height = height;
        self.cells = cells;
        Ok(())
    }

    /// Rebuild for a terminal of `columns` x `rows` characters.
    pub fn rebuild_for_terminal(&mut self, columns: u16, rows: u16) -> Result<(), CanvasError> {
        let (width, height) = terminal_pixels(columns, rows);
        self.rebuild(width, height)
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn height(&self) -> usize {
        self.height
    }

    /// Cells per row.
    pub fn columns(&self) -> usize {
        self.width / CELL_WIDTH
    }

    /// Rows of cells.
    pub fn rows(&self) -> usize {
        self.height / CELL_HEIGHT
    }

    pub fn cells(&self) -> &[Cell] {
        &self.cells
    }

    pub fn cell(&self, col: usize, row: usize) -> Option<Cell> {
        if col >= self.columns() || row >= self.rows() {
            return None;
        }
        Some(self.cells[row * self.columns() + col])
    }

    /// Whether the pixel at (`x`, `y`) is on. Out of bounds reads as off.
    pub fn is_set(&self, x: usize, y: usize) -> bool {
        match self.locate(x as i64, y as i64) {
            Some((i, mask)) => self.cells[i].dots & mask != 0,
            None => false,
        }
    }

    /// Blank every cell with default colors.
    pub fn clear(&mut self) {
        self.clear_with(Color::Default);
    }

    /// Blank every cell, setting both fg and bg to `color`.
    pub fn clear_with(&mut self, color: Color) {
        self.cells.fill(Cell::blank(color));
    }

    /// Cell index and dot mask for an integer pixel.
    #[inline(always)]
    fn locate(&self, x: i64, y: i64) -> Option<(usize, u8)> {
        if x < 0 || y < 0 || x >= self.width as i64 || y >= self.height as i64 {
            return None;
        }
        let (x, y) = (x as usize, y as usize);
        let i = x / CELL_WIDTH + self.columns() * (y / CELL_HEIGHT);
        Some((i, dot_mask(y % CELL_HEIGHT, x % CELL_WIDTH)))
    }

    #[inline(always)]
    fn in_bounds(&self, x: f64, y: f64) -> bool {
        // NaN fails every comparison and lands here as out of bounds.
        x >= 0.0 && x < self.width as f64 && y >= 0.0 && y < self.height as f64
    }

    /// Whether a disc of `radius` around an integer centre can reach the grid.
    fn disc_touches(&self, cx: i64, cy: i64, radius: i64) -> bool {
        (0..=COORD_LIMIT).contains(&radius)
            && cx + radius >= 0
            && cx - radius < self.width as i64
            && cy + radius >= 0
            && cy - radius < self.height as i64
    }

    /// Floor a rectangle's corners and pull them to one pixel outside the
    /// grid. Axis-aligned shapes keep the same visible pixels.
    fn clip_rect(&self, x0: f64, y0: f64, x1: f64, y1: f64) -> Option<[i64; 4]> {
        if [x0, y0, x1, y1].iter().any(|c| !c.is_finite()) {
            return None;
        }
        let (w, h) = (self.width as f64, self.height as f64);
        let clip = |c: f64, max: f64| c.floor().clamp(-1.0, max) as i64;
        Some([clip(x0, w), clip(y0, h), clip(x1, w), clip(y1, h)])
    }

    #[inline]
    fn plot(&mut self, x: i64, y: i64, color: Option<Color>) {
        if let Some((i, mask)) = self.locate(x, y) {
            let cell = &mut self.cells[i];
            cell.dots |= mask;
            if let Some(color) = color {
                cell.fg = color;
            }
        }
    }

    /// Turn on the pixel at (`x`, `y`).
    ///
    /// Fractional coordinates are floored. Out-of-bounds pixels are ignored.
    /// When `color` is given it becomes the foreground of the owning cell.
    pub fn set(&mut self, x: f64, y: f64, color: impl Into<Option<Color>>) {
        if !self.in_bounds(x, y) {
            return;
        }
        self.plot(x.floor() as i64, y.floor() as i64, color.into());
    }

    /// Turn off the pixel at (`x`, `y`) and reset the cell foreground.
    pub fn unset(&mut self, x: f64, y: f64) {
        if !self.in_bounds(x, y) {
            return;
        }
        if let Some((i, mask)) = self.locate(x.floor() as i64, y.floor() as i64) {
            let cell = &mut self.cells[i];
            cell.dots &= !mask;
            cell.fg = Color::Default;
        }
    }

    /// Bresenham line, both endpoints included.
    pub fn line(&mut self, x0: f64, y0: f64, x1: f64, y1: f64, color: impl Into<Option<Color>>) {
        let Some([x0, y0, x1, y1]) = floor_all([x0, y0, x1, y1]) else {
            return;
        };
        self.line_px(x0, y0, x1, y1, color.into());
    }

    /// Integer Bresenham walk. Endpoints must lie within `±COORD_LIMIT`.
    ///
    /// Walks that miss the canvas are skipped, axis-aligned spans are clipped
    /// up front, and a diagonal walk stops once it has left the canvas.
    fn line_px(&mut self, mut x0: i64, mut y0: i64, x1: i64, y1: i64, color: Option<Color>) {
        let (w, h) = (self.width as i64, self.height as i64);
        if x0.max(x1) < 0 || x0.min(x1) >= w || y0.max(y1) < 0 || y0.min(y1) >= h {
            return;
        }
        if y0 == y1 {
            for x in x0.min(x1).max(0)..=x0.max(x1).min(w - 1) {
                self.plot(x, y0, color);
            }
            return;
        }
        if x0 == x1 {
            for y in y0.min(y1).max(0)..=y0.max(y1).min(h - 1) {
                self.plot(x0, y, color);
            }
            return;
        }

        let dx = (x1 - x0).abs();
        let dy = (y1 - y0).abs();
        let sx = if x0 < x1 { 1 } else { -1 };
        let sy = if y0 < y1 { 1 } else { -1 };
        let mut err = dx - dy;

        loop {
            // Both axes are monotone, so a walk that has left never returns.
            if (sx > 0 && x0 >= w) || (sx < 0 && x0 < 0) || (sy > 0 && y0 >= h) || (sy < 0 && y0 < 0)
            {
                break;
            }
            self.plot(x0, y0, color);
            if x0 == x1 && y0 == y1 {
                break;
            }
            let e2 = 2 * err;
            if e2 > -dy {
                err -= dy;
                x0 += sx;
            }
            if e2 < dx {
                err += dx;
                y0 += sy;
            }
        }
    }

    /// Filled disc.
    ///
    /// Runs the midpoint circle iteration and, at each step, draws the four
    /// horizontal chords at y offsets `±y` and `±x`.
    pub fn circle(&mut self, x0: f64, y0: f64, radius: i64, color: impl Into<Option<Color>>) {
        let Some([cx, cy]) = floor_all([x0, y0]) else {
            return;
        };
        if !self.disc_touches(cx, cy, radius) {
            return;
        }
        let color = color.into();
        for_each_octant_step(radius, |x, y| {
            self.line_px(cx - x, cy + y, cx + x, cy + y, color);
            self.line_px(cx - x, cy - y, cx + x, cy - y, color);
            self.line_px(cx - y, cy + x, cx + y, cy + x, color);
            self.line_px(cx - y, cy - x, cx + y, cy - x, color);
        });
    }

    /// Circle outline: eight symmetric points per midpoint step.
    pub fn ring(&mut self, x0: f64, y0: f64, radius: i64, color: impl Into<Option<Color>>) {
        let Some([cx, cy]) = floor_all([x0, y0]) else {
            return;
        };
        if !self.disc_touches(cx, cy, radius) {
            return;
        }
        let color = color.into();
        for_each_octant_step(radius, |x, y| {
            self.plot(cx + x, cy + y, color);
            self.plot(cx + y, cy + x, color);
            self.plot(cx - y, cy + x, color);
            self.plot(cx - x, cy + y, color);
            self.plot(cx - x, cy - y, color);
            self.plot(cx - y, cy - x, color);
            self.plot(cx + y, cy - x, color);
            self.plot(cx + x, cy - y, color);
        });
    }

    /// Unfilled rectangle through both corners.
    pub fn rect(&mut self, x0: f64, y0: f64, x1: f64, y1: f64, color: impl Into<Option<Color>>) {
        let Some([x0, y0, x1, y1]) = self.clip_rect(x0, y0, x1, y1) else {
            return;
        };
        let color = color.into();
        self.line_px(x0, y0, x1, y0, color);
        self.line_px(x1, y0, x1, y1, color);
        self.line_px(x1, y1, x0, y1, color);
        self.line_px(x0, y1, x0, y0, color);
    }

    /// One horizontal line from `x0` to `x1` for every row in `[y0, y1)`.
    pub fn fill_rect(
        &mut self,
        x0: f64,
        y0: f64,
        x1: f64,
        y1: f64,
        color: impl Into<Option<Color>>,
    ) {
        let Some([x0, y0, x1, y1]) = self.clip_rect(x0, y0, x1, y1) else {
            return;
        };
        let color = color.into();
        // Rows outside the canvas draw nothing.
        let (y0, y1) = (y0.max(0), y1.min(self.height as i64));
        for y in y0..y1 {
            self.line_px(x0, y, x1, y, color);
        }
    }

    /// Set the background of every cell whose top-left pixel lies in
    /// `[x0, x1) x [y0, y1)`. Dots and foreground are untouched.
    pub fn bg_rect(&mut self, x0: f64, y0: f64, x1: f64, y1: f64, color: Color) {
        let Some([x0, y0, x1, y1]) = self.clip_rect(x0, y0, x1, y1) else {
            return;
        };
        let cols = self.columns();
        for (i, cell) in self.cells.iter_mut().enumerate() {
            let px = ((i % cols) * CELL_WIDTH) as i64;
            let py = ((i / cols) * CELL_HEIGHT) as i64;
            if px >= x0 && px < x1 && py >= y0 && py < y1 {
                cell.bg = color;
            }
        }
    }

    /// `unset` every pixel in `[x0, x1) x [y0, y1)`.
    pub fn clear_rect(&mut self, x0: f64, y0: f64, x1: f64, y1: f64) {
        let Some([x0, y0, x1, y1]) = self.clip_rect(x0, y0, x1, y1) else {
            return;
        };
        let (x0, x1) = (x0.max(0), x1.min(self.width as i64));
        let (y0, y1) = (y0.max(0), y1.min(self.height as i64));
        for y in y0..y1 {
            for x in x0..x1 {
                if let Some((i, mask)) = self.locate(x, y) {
                    let cell = &mut self.cells[i];
                    cell.dots &= !mask;
                    cell.fg = Color::Default;
                }
            }
        }
    }

    /// Write `s` one character per cell, starting at the cell holding
    /// (`x`, `y`).
    ///
    /// Only the starting pixel is bounds-checked; text that runs past the
    /// right edge continues on the next row and stops at the end of the grid.
    pub fn text(&mut self, x: f64, y: f64, s: &str, color: Color) {
        if !self.in_bounds(x, y) {
            return;
        }
        let Some((start, _)) = self.locate(x.floor() as i64, y.floor() as i64) else {
            return;
        };
        for (cell, ch) in self.cells[start..].iter_mut().zip(s.chars()) {
            cell.text = Some(ch);
            cell.fg = color;
        }
    }

    /// Lazily formatted frame; see [`Frame`].
    pub fn display<'a>(&'a self, delimiter: &'a str) -> Frame<'a> {
        Frame {
            canvas: self,
            delimiter,
        }
    }

    /// Append the serialized frame to `out`.
    ///
    /// Reuse one `String` across ticks to avoid per-frame allocation.
    pub fn write_frame<W: fmt::Write>(&self, out: &mut W, delimiter: &str) -> fmt::Result {
        let cols = self.columns();
        for (i, cell) in self.cells.iter().enumerate() {
            if i % cols == 0 {
                out.write_str(delimiter)?;
            }
            write!(out, "{}{}{}{}", bg(cell.bg), fg(cell.fg), cell.glyph(), RESET)?;
        }
        out.write_str(delimiter)
    }

    /// Serialize the whole grid.
    pub fn frame(&self, delimiter: &str) -> String {
        // ~16 bytes of escapes per cell.
        let mut out = String::with_capacity(self.cells.len() * 20 + self.rows() + 1);
        // Writing into a String cannot fail.
        let _ = self.write_frame(&mut out, delimiter);
        out
    }
}

/// Serialized frame: each row starts with the delimiter and the frame ends
/// with one. Every cell is emitted as background SGR, foreground SGR, glyph,
/// reset.
#[derive(Clone, Copy)]
pub struct Frame<'a> {
    canvas: &'a Canvas,
    delimiter: &'a str,
}

impl fmt::Display for Frame<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.canvas.write_frame(f, self.delimiter)
    }
}

fn terminal_pixels(columns: u16, rows: u16) -> (usize, usize) {
    (
        (columns as usize * CELL_WIDTH).saturating_sub(CELL_WIDTH),
        rows as usize * CELL_HEIGHT,
    )
}

fn alloc_cells(width: usize, height: usize) -> Result<Vec<Cell>, CanvasError> {
    if width % CELL_WIDTH != 0 || height % CELL_HEIGHT != 0 {
        return Err(CanvasError::Geometry { width, height });
    }
    let len = (width / CELL_WIDTH) * (height / CELL_HEIGHT);
    let mut cells = Vec::new();
    cells
        .try_reserve_exact(len)
        .map_err(|source| CanvasError::Alloc { cells: len, source })?;
    cells.resize(len, Cell::default());
    Ok(cells)
}

/// Largest coordinate magnitude, in pixels, accepted by `line`, `circle` and
/// `ring`. Keeps every intermediate of the integer walks far from overflow.
const COORD_LIMIT: i64 = 1 << 24;

/// Floor every coordinate, or `None` if any is not finite or lies beyond
/// `COORD_LIMIT`.
#[inline]
fn floor_all<const N: usize>(coords: [f64; N]) -> Option<[i64; N]> {
    let limit = COORD_LIMIT as f64;
    if coords.iter().any(|c| !(c.abs() <= limit)) {
        return None;
    }
    Some(coords.map(|c| c.floor() as i64))
}

/// Midpoint circle iteration over the first octant, `x` from `radius` down
/// while `x >= y`.
#[inline]
fn for_each_octant_step(radius: i64, mut f: impl FnMut(i64, i64)) {
    let mut x = radius;
    let mut y = 0;
    let mut decision = 1 - x;

    while x >= y {
        f(x, y);
        y += 1;
        if decision <= 0 {
            decision += 2 * y + 1;
        } else {
            x -= 1;
            decision += 2 * (y - x) + 1;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn lit(canvas: &Canvas) -> Vec<(usize, usize)> {
        let mut out = Vec::new();
        for y in 0..canvas.height() {
            for x in 0..canvas.width() {
                if canvas.is_set(x, y) {
                    out.push((x, y));
                }
            }
        }
        out
    }

    #[test]
    fn rejects_sizes_that_do_not_tile() {
        assert!(matches!(
            Canvas::new(3, 4),
            Err(CanvasError::Geometry { width: 3, height: 4 })
        ));
        assert!(Canvas::new(4, 6).is_err());
        assert!(Canvas::new(0, 0).is_ok());
    }

    #[test]
    fn terminal_geometry_leaves_one_column() {
        let c = Canvas::for_terminal(80, 24).unwrap();
        assert_eq!(c.width(), 158);
        assert_eq!(c.height(), 96);
        assert_eq!(c.columns(), 79);
        assert_eq!(c.rows(), 24);

        let tiny = Canvas::for_terminal(0, 0).unwrap();
        assert_eq!((tiny.width(), tiny.height()), (0, 0));
    }

    #[test]
    fn set_uses_bit_layout_table() {
        let mut c = Canvas::new(2, 4).unwrap();
        c.set(1.0, 3.0, None);
        assert_eq!(c.cell(0, 0).unwrap().dots, 0x80);
        c.set(0.0, 0.0, None);
        assert_eq!(c.cell(0, 0).unwrap().dots, 0x81);
        assert_eq!(c.cell(0, 0).unwrap().glyph(), '\u{2881}');
    }

    #[test]
    fn set_floors_fractional_coordinates() {
        let mut c = Canvas::new(4, 8).unwrap();
        c.set(2.9, 5.5, None);
        assert!(c.is_set(2, 5));
        assert_eq!(lit(&c), vec![(2, 5)]);
        // Cell index is floor(x/2) + cols * floor(y/4).
        assert_eq!(c.cell(1, 1).unwrap().dots, dot_mask(1, 0));
    }

    #[test]
    fn set_then_unset_restores_bit() {
        let mut c = Canvas::new(6, 8).unwrap();
        c.set(1.0, 1.0, Color::Red);
        for y in 0..8 {
            for x in 0..6 {
                let before = c.is_set(x, y);
                c.set(x as f64, y as f64, None);
                c.unset(x as f64, y as f64);
                assert!(!c.is_set(x, y));
                // Re-setting restores whatever was there before.
                if before {
                    c.set(x as f64, y as f64, None);
                }
                assert_eq!(c.is_set(x, y), before);
            }
        }
    }

    #[test]
    fn out_of_bounds_is_a_noop() {
        let mut c = Canvas::new(4, 4).unwrap();
        c.set(1.0, 1.0, Color::Green);
        let before = c.clone();
        for &(x, y) in &[
            (-1.0, 0.0),
            (0.0, -0.5),
            (4.0, 0.0),
            (0.0, 4.0),
            (100.0, 100.0),
            (f64::NAN, 0.0),
            (0.0, f64::INFINITY),
        ] {
            c.set(x, y, Color::Red);
            c.unset(x, y);
        }
        assert_eq!(c, before);
    }

    #[test]
    fn last_colored_write_owns_the_cell() {
        let mut c = Canvas::new(2, 4).unwrap();
        c.set(0.0, 0.0, Color::Red);
        c.set(1.0, 1.0, Color::Blue);
        assert_eq!(c.cell(0, 0).unwrap().fg, Color::Blue);
        // Uncolored writes keep the current color.
        c.set(0.0, 2.0, None);
        assert_eq!(c.cell(0, 0).unwrap().fg, Color::Blue);
    }

    #[test]
    fn unset_resets_foreground() {
        let mut c = Canvas::new(2, 4).unwrap();
        c.set(0.0, 0.0, Color::Red);
        c.set(1.0, 0.0, Color::Red);
        c.unset(0.0, 0.0);
        let cell = c.cell(0, 0).unwrap();
        assert_eq!(cell.dots, 0x08);
        assert_eq!(cell.fg, Color::Default);
    }

    #[test]
    fn degenerate_line_sets_one_pixel() {
        let mut c = Canvas::new(8, 8).unwrap();
        c.line(3.0, 5.0, 3.0, 5.0, None);
        assert_eq!(lit(&c), vec![(3, 5)]);
    }

    #[test]
    fn horizontal_line_has_no_drift() {
        let mut c = Canvas::new(8, 4).unwrap();
        c.line(0.0, 0.0, 4.0, 0.0, None);
        assert_eq!(lit(&c), vec![(0, 0), (1, 0), (2, 0), (3, 0), (4, 0)]);
    }

    #[test]
    fn diagonal_lines_match_bresenham() {
        let mut c = Canvas::new(8, 8).unwrap();
        c.line(0.0, 0.0, 5.0, 2.0, None);
        assert_eq!(
            lit(&c),
            vec![(0, 0), (1, 0), (2, 1), (3, 1), (4, 2), (5, 2)]
        );

        // Reversed endpoints walk the other way but stay on the same cells.
        let mut r = Canvas::new(8, 8).unwrap();
        r.line(5.0, 2.0, 0.0, 0.0, None);
        assert_eq!(lit(&r).len(), 6);
        assert!(r.is_set(0, 0) && r.is_set(5, 2));
    }

    #[test]
    fn line_clips_silently() {
        let mut c = Canvas::new(4, 4).unwrap();
        c.line(-4.0, 1.0, 10.0, 1.0, Color::Cyan);
        assert_eq!(lit(&c), vec![(0, 1), (1, 1), (2, 1), (3, 1)]);
        c.line(f64::NAN, 0.0, 1.0, 1.0, None);
        assert_eq!(lit(&c).len(), 4);
    }

    #[test]
    fn huge_coordinates_draw_nothing_or_clip() {
        let mut c = Canvas::new(8, 8).unwrap();
        c.line(-1e300, 1.0, 1e300, 1.0, Color::Red);
        c.line(0.0, 0.0, 1e12, 0.0, Color::Red);
        c.circle(9.3e18, 1.0, 2, Color::Red);
        c.ring(1.0, -9.3e18, 2, Color::Red);
        c.circle(4.0, 4.0, i64::MAX, Color::Red);
        c.ring(4.0, 4.0, i64::MIN, Color::Red);
        assert!(lit(&c).is_empty());

        // Axis-aligned shapes clip to the grid instead.
        c.rect(-9.3e18, 1.0, 9.3e18, 2.0, None);
        assert_eq!(lit(&c).len(), 16);
        c.fill_rect(0.0, 4.0, 1e12, 1e12, None);
        assert_eq!(lit(&c).len(), 16 + 32);
        c.clear_rect(-1e300, -1e300, 1e300, 3.0);
        assert_eq!(lit(&c).len(), 32);
        c.bg_rect(-1e300, -1e300, 1e300, 1e300, Color::Blue);
        assert!(c.cells().iter().all(|cell| cell.bg == Color::Blue));
    }

    #[test]
    fn clipped_diagonal_matches_unclipped_walk() {
        // Bresenham is translation invariant: the 8x8 window of a line on a
        // larger canvas must match the same line clipped by a small one.
        let mut small = Canvas::new(8, 8).unwrap();
        small.line(-10.0, -3.0, 30.0, 17.0, None);
        small.line(12.0, -5.0, -6.0, 11.0, None);

        let mut big = Canvas::new(64, 48).unwrap();
        big.line(6.0, 13.0, 46.0, 33.0, None);
        big.line(28.0, 11.0, 10.0, 27.0, None);

        let window: Vec<(usize, usize)> = lit(&big)
            .into_iter()
            .filter(|&(x, y)| (16..24).contains(&x) && (16..24).contains(&y))
            .map(|(x, y)| (x - 16, y - 16))
            .collect();
        assert!(!window.is_empty());
        assert_eq!(lit(&small), window);
    }

    #[test]
    fn circle_is_filled_ring_is_not() {
        let mut disc = Canvas::new(20, 20).unwrap();
        disc.circle(10.0, 10.0, 4, None);
        assert!(disc.is_set(10, 10));
        assert!(disc.is_set(12, 11));
        assert!(disc.is_set(14, 10));

        let mut ring = Canvas::new(20, 20).unwrap();
        ring.ring(10.0, 10.0, 4, None);
        assert!(!ring.is_set(10, 10));
        assert!(ring.is_set(14, 10));
        assert!(ring.is_set(10, 6));

        // Every outline pixel is also covered by the disc.
        for (x, y) in lit(&ring) {
            assert!(disc.is_set(x, y), "({x},{y}) missing from disc");
        }
    }

    #[test]
    fn zero_radius_draws_centre_only() {
        let mut c = Canvas::new(8, 8).unwrap();
        c.ring(3.0, 3.0, 0, None);
        assert_eq!(lit(&c), vec![(3, 3)]);
        let mut d = Canvas::new(8, 8).unwrap();
        d.circle(3.5, 3.5, 0, None);
        assert_eq!(lit(&d), vec![(3, 3)]);
        let mut n = Canvas::new(8, 8).unwrap();
        n.ring(3.0, 3.0, -2, None);
        assert!(lit(&n).is_empty());
    }

    #[test]
    fn rect_outline_and_fill() {
        let mut c = Canvas::new(8, 8).unwrap();
        c.rect(1.0, 1.0, 4.0, 3.0, None);
        assert!(c.is_set(1, 1) && c.is_set(4, 1) && c.is_set(4, 3) && c.is_set(1, 3));
        assert!(c.is_set(1, 2) && c.is_set(4, 2));
        assert!(!c.is_set(2, 2));
        assert_eq!(lit(&c).len(), 10);

        let mut f = Canvas::new(8, 8).unwrap();
        f.fill_rect(1.0, 1.0, 4.0, 3.0, Color::Red);
        // Rows 1 and 2, columns 1..=4.
        assert_eq!(lit(&f).len(), 8);
        assert!(!f.is_set(1, 3));
        assert_eq!(f.cell(0, 0).unwrap().fg, Color::Red);
    }

    #[test]
    fn bg_rect_only_touches_background() {
        let mut c = Canvas::new(8, 8).unwrap();
        c.set(0.0, 0.0, Color::Red);
        c.bg_rect(0.0, 0.0, 4.0, 4.0, Color::Blue);
        let a = c.cell(0, 0).unwrap();
        assert_eq!((a.dots, a.fg, a.bg), (0x01, Color::Red, Color::Blue));
        assert_eq!(c.cell(1, 0).unwrap().bg, Color::Blue);
        // Top-left pixel (4,0) is outside [0,4).
        assert_eq!(c.cell(2, 0).unwrap().bg, Color::Default);
        assert_eq!(c.cell(0, 1).unwrap().bg, Color::Default);
    }

    #[test]
    fn clear_rect_unsets_pixels() {
        let mut c = Canvas::new(8, 8).unwrap();
        c.fill_rect(0.0, 0.0, 7.0, 8.0, Color::White);
        c.clear_rect(2.0, 0.0, 4.0, 8.0);
        assert!(c.is_set(1, 3));
        assert!(!c.is_set(2, 3));
        assert!(!c.is_set(3, 7));
        assert!(c.is_set(4, 7));
        assert_eq!(c.cell(1, 0).unwrap().dots, 0);
        assert_eq!(c.cell(1, 0).unwrap().fg, Color::Default);
    }

    #[test]
    fn text_overrides_glyphs_and_runs_on() {
        let mut c = Canvas::new(4, 8).unwrap();
        c.fill_rect(0.0, 0.0, 3.0, 4.0, None);
        c.text(2.0, 0.0, "ABC", Color::Yellow);
        assert_eq!(c.cell(0, 0).unwrap().glyph(), '\u{28ff}');
        let b = c.cell(1, 0).unwrap();
        assert_eq!((b.glyph(), b.fg), ('A', Color::Yellow));
        // Past the right edge the text continues on the next row.
        assert_eq!(c.cell(0, 1).unwrap().glyph(), 'B');
        assert_eq!(c.cell(1, 1).unwrap().glyph(), 'C');

        // Running off the end of the grid stops quietly.
        c.text(2.0, 4.0, "XYZ", Color::White);
        assert_eq!(c.cell(1, 1).unwrap().glyph(), 'X');
    }

    #[test]
    fn clear_resets_everything() {
        let mut c = Canvas::new(4, 4).unwrap();
        c.circle(1.0, 1.0, 2, Color::Red);
        c.text(0.0, 0.0, "hi", Color::White);
        c.clear_with(Color::Blue);
        assert!(c.cells().iter().all(|cell| cell.is_blank()
            && cell.fg == Color::Blue
            && cell.bg == Color::Blue));
        c.clear();
        assert!(c.cells().iter().all(|cell| *cell == Cell::default()));
    }

    #[test]
    fn frame_wraps_each_cell() {
        let mut c = Canvas::new(4, 4).unwrap();
        c.set(0.0, 0.0, Color::Red);
        assert_eq!(
            c.frame("\n"),
            "\n\x1b[49m\x1b[31m\u{2801}\x1b[0m\x1b[49m\x1b[39m \x1b[0m\n"
        );
        assert_eq!(c.display("|").to_string(), c.frame("|"));
    }

    #[test]
    fn rebuild_changes_epoch() {
        let mut c = Canvas::new(4, 4).unwrap();
        c.set(0.0, 0.0, None);
        c.rebuild(6, 8).unwrap();
        assert_eq!((c.columns(), c.rows()), (3, 2));
        assert!(c.cells().iter().all(Cell::is_blank));
        assert!(c.rebuild(5, 8).is_err());
        assert_eq!(c.width(), 6);
        c.rebuild_for_terminal(10, 2).unwrap();
        assert_eq!((c.width(), c.height()), (18, 8));
    }
}
