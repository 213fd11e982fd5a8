//! Screen buffer types
//!
//! Provides a character-based screen buffer that collects rows from the
//! menu renderer and pushes only the changed ones to a display.

use menuet_core::{Line, LineSink};

use crate::backend::{DisplayBackend, DisplayError};

/// Number of rows of the default screen buffer
pub const SCREEN_ROWS: usize = 8;

/// Text-mode screen buffer
///
/// Implements [`LineSink`], so it can be registered with a navigator
/// directly. Rows written past `ROWS` are dropped.
#[derive(Clone)]
pub struct Screen<const ROWS: usize = SCREEN_ROWS> {
    /// Current display content
    lines: [Line; ROWS],
    /// Rows changed since the last flush
    dirty: [bool; ROWS],
}

impl<const ROWS: usize> Default for Screen<ROWS> {
    fn default() -> Self {
        Self::new()
    }
}

impl<const ROWS: usize> Screen<ROWS> {
    /// Create a new empty screen
    pub fn new() -> Self {
        Self {
            lines: core::array::from_fn(|_| Line::new()),
            dirty: [true; ROWS],
        }
    }

    /// Clear the entire screen
    pub fn clear(&mut self) {
        for line in &mut self.lines {
            line.clear();
        }
        self.mark_dirty();
    }

    /// Set the content of a specific row
    ///
    /// Unchanged content does not mark the row dirty.
    pub fn set_line(&mut self, row: usize, text: &str) {
        let Some(line) = self.lines.get_mut(row) else {
            return;
        };
        if line.as_str() == text {
            return;
        }
        line.clear();
        for c in text.chars() {
            if line.push(c).is_err() {
                break;
            }
        }
        self.dirty[row] = true;
    }

    /// Get the content of a specific row
    pub fn get_line(&self, row: usize) -> Option<&str> {
        self.lines.get(row).map(|s| s.as_str())
    }

    /// Get all lines as an iterator
    pub fn lines(&self) -> impl Iterator<Item = &str> {
        self.lines.iter().map(|s| s.as_str())
    }

    /// Check if any row needs redrawing
    pub fn is_dirty(&self) -> bool {
        self.dirty.iter().any(|&d| d)
    }

    /// Check if a row needs redrawing
    pub fn is_row_dirty(&self, row: usize) -> bool {
        self.dirty.get(row).copied().unwrap_or(false)
    }

    /// Mark every row as needing a redraw
    pub fn mark_dirty(&mut self) {
        self.dirty = [true; ROWS];
    }

    /// Get number of rows
    pub const fn rows(&self) -> usize {
        ROWS
    }

    /// Draw every dirty row to `backend`, then flush it
    ///
    /// Rows and columns beyond the backend's dimensions are clipped.
    /// Returns the number of rows drawn.
    pub fn flush<B: DisplayBackend>(&mut self, backend: &mut B) -> Result<usize, DisplayError> {
        if !backend.is_ready() {
            return Err(DisplayError::NotInitialized);
        }
        let (cols, rows) = backend.dimensions();
        let mut drawn = 0;

        for (row, line) in self.lines.iter().enumerate().take(rows as usize) {
            if !self.dirty[row] {
                continue;
            }
            backend.draw_text(row as u8, 0, clip(line, cols as usize))?;
            self.dirty[row] = false;
            drawn += 1;
        }

        backend.flush()?;
        Ok(drawn)
    }
}

impl<const ROWS: usize> LineSink for Screen<ROWS> {
    fn write_line(&mut self, row: usize, text: &str) {
        self.set_line(row, text);
    }
}

/// First `cols` characters of `text`
fn clip(text: &str, cols: usize) -> &str {
    match text.char_indices().nth(cols) {
        Some((end, _)) => &text[..end],
        None => text,
    }
}

#[cfg(feature = "defmt")]
impl<const ROWS: usize> defmt::Format for Screen<ROWS> {
    fn format(&self, f: defmt::Formatter) {
        defmt::write!(f, "Screen[");
        for (i, line) in self.lines.iter().enumerate() {
            if i > 0 {
                defmt::write!(f, ", ");
            }
            defmt::write!(f, "{}", line.as_str());
        }
        defmt::write!(f, "]");
    }
}
