//! Line layout configuration
//!
//! Field widths used by the formatter and the minimum number of rows the
//! renderer refreshes. The defaults describe a 29-column text menu; hosts
//! with a different panel override them in code or from a small TOML
//! fragment:
//!
//! ```toml
//! [layout]
//! rows = 4              # refresh at least 4 rows
//! param_name_width = 9
//! float_precision = 1
//! ```

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::format::{MARKER_WIDTH, MAX_LINE_LEN};

/// Widest integer field (`i32::MIN` is 11 characters)
pub const MAX_INT_WIDTH: u8 = 11;

/// Most fractional digits shown for floats
pub const MAX_FLOAT_PRECISION: u8 = 6;

/// Most rows a layout may ask the renderer to refresh
pub const MAX_ROWS: u8 = 64;

/// Formatting constants for menu rows
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Layout {
    /// Minimum rows refreshed per render pass (0 = only what the menu needs)
    pub rows: u8,
    /// Name field of generic rows (submenus, functions) and blank rows
    pub name_width: u8,
    /// Name field of parameter rows
    pub param_name_width: u8,
    /// Name field of info rows
    pub info_name_width: u8,
    /// Characters of info text previewed in a listing
    pub info_preview_width: u8,
    /// Info text at least this long gets the `...` indicator
    pub info_threshold: u8,
    /// Zero-padded width of integer values
    pub int_width: u8,
    /// Fractional digits of float values
    pub float_precision: u8,
}

impl Default for Layout {
    fn default() -> Self {
        Self {
            rows: 0,
            name_width: 27,
            param_name_width: 11,
            info_name_width: 12,
            info_preview_width: 10,
            info_threshold: 10,
            int_width: 5,
            float_precision: 2,
        }
    }
}

impl Layout {
    /// Width of a blank row: marker plus the generic name field
    pub fn blank_width(&self) -> usize {
        (MARKER_WIDTH + self.name_width as usize).min(MAX_LINE_LEN)
    }

    /// Check that every field fits on a line
    pub fn validate(&self) -> Result<(), ParseError> {
        let name_limit = (MAX_LINE_LEN - MARKER_WIDTH) as u8;
        let fits = self.rows <= MAX_ROWS
            && self.name_width <= name_limit
            && self.param_name_width <= name_limit
            && self.info_name_width <= name_limit
            && self.info_preview_width as usize <= MAX_LINE_LEN
            && self.int_width <= MAX_INT_WIDTH
            && self.float_precision <= MAX_FLOAT_PRECISION;
        if fits {
            Ok(())
        } else {
            Err(ParseError::InvalidValue)
        }
    }
}

/// Layout parse error
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum ParseError {
    /// Section other than `[layout]`
    InvalidSection,
    /// Key that is not a layout field
    UnknownKey,
    /// Malformed line, non-integer value or width out of range
    InvalidValue,
}

/// Parse a layout from a TOML subset
///
/// Supported: an optional `[layout]` header, `key = integer` lines and `#`
/// comments. Keys not present keep their default value.
pub fn parse_layout(input: &str) -> Result<Layout, ParseError> {
    let mut layout = Layout::default();

    for line in input.lines() {
        let line = strip_comment(line).trim();

        if line.is_empty() {
            continue;
        }

        if line.starts_with('[') && line.ends_with(']') {
            match line[1..line.len() - 1].trim() {
                "layout" => continue,
                _ => return Err(ParseError::InvalidSection),
            }
        }

        let (key, value) = parse_key_value(line).ok_or(ParseError::InvalidValue)?;
        apply_value(&mut layout, key, parse_int(value)?)?;
    }

    layout.validate()?;
    Ok(layout)
}

fn strip_comment(line: &str) -> &str {
    match line.find('#') {
        Some(pos) => &line[..pos],
        None => line,
    }
}

/// Parse "key = value" line
fn parse_key_value(line: &str) -> Option<(&str, &str)> {
    let eq_pos = line.find('=')?;
    let key = line[..eq_pos].trim();
    let value = line[eq_pos + 1..].trim();

    if key.is_empty() || value.is_empty() {
        return None;
    }

    Some((key, value))
}

fn parse_int(value: &str) -> Result<u8, ParseError> {
    value.parse().map_err(|_| ParseError::InvalidValue)
}

fn apply_value(layout: &mut Layout, key: &str, value: u8) -> Result<(), ParseError> {
    let field = match key {
        "rows" => &mut layout.rows,
        "name_width" => &mut layout.name_width,
        "param_name_width" => &mut layout.param_name_width,
        "info_name_width" => &mut layout.info_name_width,
        "info_preview_width" => &mut layout.info_preview_width,
        "info_threshold" => &mut layout.info_threshold,
        "int_width" => &mut layout.int_width,
        "float_precision" => &mut layout.float_precision,
        _ => return Err(ParseError::UnknownKey),
    };
    *field = value;
    Ok(())
}
