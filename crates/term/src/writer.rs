//! TerminalWriter: pushes serialized frames to a terminal.
//!
//! Supports full repaints and line-diffed partial repaints. Output for each
//! call is assembled in an internal buffer and flushed with a single write.

use std::io::{self, Write};

use anyhow::Result;

use crossterm::{
    cursor,
    style::{Attribute, Print, ResetColor, SetAttribute},
    terminal, QueueableCommand,
};

/// Move the cursor home.
pub const CURSOR_HOME: &str = "\x1b[H";
/// Erase from the cursor to the end of the screen.
pub const ERASE_DOWN: &str = "\x1b[J";
/// Erase from the cursor to the end of the line.
pub const ERASE_LINE: &str = "\x1b[K";
/// Full terminal reset (RIS).
pub const FULL_RESET: &str = "\x1bc";

/// Row separator used by [`TerminalWriter::partial_write`].
pub const ROW_DELIMITER: char = '\n';

type ResizeHandler = Box<dyn FnMut(u16, u16)>;

pub struct TerminalWriter<W: Write = io::Stdout> {
    out: W,
    buf: Vec<u8>,
    /// Rows emitted by the last `partial_write`, by index.
    previous: Vec<String>,
    resize_handlers: Vec<ResizeHandler>,
}

impl TerminalWriter<io::Stdout> {
    pub fn new() -> Self {
        Self::with_output(io::stdout())
    }
}

impl Default for TerminalWriter<io::Stdout> {
    fn default() -> Self {
        Self::new()
    }
}

impl<W: Write> TerminalWriter<W> {
    pub fn with_output(out: W) -> Self {
        Self {
            out,
            buf: Vec::with_capacity(64 * 1024),
            previous: Vec::new(),
            resize_handlers: Vec::new(),
        }
    }

    pub fn get_ref(&self) -> &W {
        &self.out
    }

    pub fn get_mut(&mut self) -> &mut W {
        &mut self.out
    }

    pub fn into_inner(self) -> W {
        self.out
    }

    /// Raw mode, alternate screen, hidden cursor, no line wrap.
    pub fn enter(&mut self) -> Result<()> {
        terminal::enable_raw_mode()?;
        self.buf.clear();
        self.buf.queue(terminal::EnterAlternateScreen)?;
        self.buf.queue(cursor::Hide)?;
        self.buf.queue(terminal::DisableLineWrap)?;
        self.flush_buf()?;
        Ok(())
    }

    /// Undo [`enter`](Self::enter).
    pub fn exit(&mut self) -> Result<()> {
        self.buf.clear();
        self.buf.queue(ResetColor)?;
        self.buf.queue(SetAttribute(Attribute::Reset))?;
        self.buf.queue(terminal::EnableLineWrap)?;
        self.buf.queue(cursor::Show)?;
        self.buf.queue(terminal::LeaveAlternateScreen)?;
        self.flush_buf()?;
        terminal::disable_raw_mode()?;
        Ok(())
    }

    /// Emit `content` as-is.
    pub fn write(&mut self, content: &str) -> Result<()> {
        self.buf.clear();
        self.buf.queue(Print(content))?;
        self.flush_buf()
    }

    /// Alias of [`write`](Self::write).
    pub fn print(&mut self, content: &str) -> Result<()> {
        self.write(content)
    }

    /// Cursor home, then erase the screen.
    pub fn clear(&mut self) -> Result<()> {
        self.buf.clear();
        self.buf.extend_from_slice(CURSOR_HOME.as_bytes());
        self.buf.extend_from_slice(ERASE_DOWN.as_bytes());
        self.flush_buf()
    }

    /// Full terminal reset. Heavier than [`clear`](Self::clear).
    pub fn reset(&mut self) -> Result<()> {
        self.buf.clear();
        self.buf.extend_from_slice(FULL_RESET.as_bytes());
        self.flush_buf()
    }

    pub fn hide_cursor(&mut self) -> Result<()> {
        self.buf.clear();
        self.buf.queue(cursor::Hide)?;
        self.flush_buf()
    }

    /// Rewrite only the rows of `content` that differ from the previous call.
    ///
    /// Rows are split on `'\n'`; a trailing delimiter ends the last row rather
    /// than starting an empty one. Row `i` is addressed as terminal line `i`
    /// (`ESC [ i ; 0 H`), which lines up with frames that begin with a
    /// delimiter. Returns the number of rows rewritten.
    pub fn partial_write(&mut self, content: &str) -> Result<usize> {
        self.buf.clear();
        let mut written = 0;
        let mut count = 0;

        for (i, row) in content.split_terminator(ROW_DELIMITER).enumerate() {
            count = i + 1;
            if self.previous.get(i).map(String::as_str) == Some(row) {
                continue;
            }

            write!(self.buf, "\x1b[{};0H", i)?;
            self.buf.extend_from_slice(row.as_bytes());
            self.buf.extend_from_slice(ERASE_LINE.as_bytes());
            written += 1;

            match self.previous.get_mut(i) {
                Some(prev) => {
                    prev.clear();
                    prev.push_str(row);
                }
                None => self.previous.push(row.to_owned()),
            }
        }
        self.previous.truncate(count);

        if written > 0 {
            self.flush_buf()?;
        }
        log::trace!("partial write: {written}/{count} rows");
        Ok(written)
    }

    /// Forget the last frame so the next `partial_write` repaints every row.
    pub fn invalidate(&mut self) {
        self.previous.clear();
    }

    /// Register a callback for terminal geometry changes.
    ///
    /// Handlers receive the new size in columns and rows. Rebuilding the
    /// canvas is up to the caller.
    pub fn on_resize(&mut self, handler: impl FnMut(u16, u16) + 'static) {
        self.resize_handlers.push(Box::new(handler));
    }

    /// Deliver a geometry change to every registered handler.
    ///
    /// The diff baseline is dropped since old rows no longer line up.
    pub fn notify_resize(&mut self, columns: u16, rows: u16) {
        log::debug!("terminal resized to {columns}x{rows}");
        self.invalidate();
        for handler in &mut self.resize_handlers {
            handler(columns, rows);
        }
    }

    fn flush_buf(&mut self) -> Result<()> {
        self.out.write_all(&self.buf)?;
        self.out.flush()?;
        Ok(())
    }
}
