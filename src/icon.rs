use crate::buffer::Buffer;
use crate::rect::Rect;
use crate::text::char_width;
use crate::types::{Color, Theme};

/// A renderable symbol shown ahead of the field label.
///
/// Implementors draw into the given area; `width` reports the cells the
/// label row should reserve for it.
pub trait IconContent: Send + Sync {
    fn render(&self, area: Rect, buf: &mut Buffer, theme: &Theme);
    fn width(&self) -> u16;
}

/// Single-character icon, the stock [`IconContent`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Glyph {
    glyph: char,
    fg: Option<Color>,
}

impl Glyph {
    pub fn new(glyph: char) -> Self {
        Self { glyph, fg: None }
    }

    /// Override the theme's icon color.
    pub fn fg(mut self, color: Color) -> Self {
        self.fg = Some(color);
        self
    }
}

impl From<char> for Glyph {
    fn from(glyph: char) -> Self {
        Self::new(glyph)
    }
}

impl IconContent for Glyph {
    fn render(&self, area: Rect, buf: &mut Buffer, theme: &Theme) {
        if area.is_empty() {
            return;
        }
        let fg = self.fg.unwrap_or(theme.icon).to_rgb();
        if let Some(cell) = buf.get_mut(area.x, area.y) {
            cell.char = self.glyph;
            cell.fg = fg;
            cell.wide_continuation = false;
        }
        if char_width(self.glyph) == 2 && area.x + 1 < area.right() {
            if let Some(cell) = buf.get_mut(area.x + 1, area.y) {
                cell.char = ' ';
                cell.fg = fg;
                cell.wide_continuation = true;
            }
        }
    }

    fn width(&self) -> u16 {
        char_width(self.glyph).max(1) as u16
    }
}
