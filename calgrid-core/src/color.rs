//! Category color helpers.

use crate::error::{CalGridError, CalGridResult};

/// Color used when an event's category has none.
pub const DEFAULT_EVENT_COLOR: &str = "#3b82f6";

/// Parse a `#RRGGBB` hex color into its components.
pub fn parse_hex(color: &str) -> CalGridResult<(u8, u8, u8)> {
    let hex = color.strip_prefix('#').unwrap_or(color);
    if hex.len() != 6 || !hex.chars().all(|c| c.is_ascii_hexdigit()) {
        return Err(CalGridError::InvalidColor(color.to_string()));
    }

    let channel = |range| u8::from_str_radix(&hex[range], 16).unwrap();
    Ok((channel(0..2), channel(2..4), channel(4..6)))
}

/// Lighten a `#RRGGBB` color by `percent` (0-100) towards white.
/// Used for event badges so the category color reads as a tint.
pub fn lighten(color: &str, percent: u8) -> CalGridResult<String> {
    let (r, g, b) = parse_hex(color)?;
    let percent = percent.min(100) as u32;

    let lift = |c: u8| -> u8 {
        let c = c as u32;
        (c + (255 - c) * percent / 100) as u8
    };

    Ok(format!("#{:02x}{:02x}{:02x}", lift(r), lift(g), lift(b)))
}
