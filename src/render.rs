use crate::buffer::{Buffer, Cell};
use crate::edit::EditState;
use crate::field::{InputField, InputKind};
use crate::rect::Rect;
use crate::text::{char_width, truncate_to_width};
use crate::types::{Border, Rgb, TextStyle, Theme};

// Cursor and selection colors are fixed rather than themed.
const CURSOR_FG: Rgb = Rgb::new(20, 20, 20);
const CURSOR_BG: Rgb = Rgb::new(215, 215, 215);
const SELECTION_FG: Rgb = Rgb::new(235, 235, 235);
const SELECTION_BG: Rgb = Rgb::new(60, 90, 120);

/// Paint the field into `buf` at `area`.
///
/// Row 0 holds the icon and label, rows 1-3 the bordered input box, row 4
/// the error message when one is set. A pure function of the arguments:
/// drawing the same configuration twice produces identical buffers.
pub fn draw(field: &InputField, state: &EditState, area: Rect, buf: &mut Buffer, theme: &Theme) {
    if area.is_empty() {
        return;
    }

    if let Some(bg) = theme.background {
        fill_background(buf, area, bg.to_rgb());
    }

    draw_label(field, area, buf, theme);

    if area.height < 4 {
        return;
    }
    let box_rect = Rect::new(area.x, area.y + 1, area.width, 3);
    draw_box(field, state, box_rect, buf, theme);

    if field.has_error() && area.height >= 5 {
        let error_rect = Rect::new(area.x, area.y + 4, area.width, 1);
        draw_error(&field.error, error_rect, buf, theme);
    }
}

fn draw_label(field: &InputField, area: Rect, buf: &mut Buffer, theme: &Theme) {
    let mut x = area.x;
    let y = area.y;

    if let Some(icon) = &field.icon {
        let width = icon.width().min(area.width);
        icon.render(Rect::new(x, y, width, 1), buf, theme);
        x = x.saturating_add(icon.width()).saturating_add(1);
    }

    if x >= area.right() {
        return;
    }
    let label = truncate_to_width(&field.label, (area.right() - x) as usize);
    put_str(
        buf,
        x,
        y,
        area.right(),
        &label,
        theme.label.to_rgb(),
        TextStyle::new().bold(),
    );
}

fn draw_box(field: &InputField, state: &EditState, rect: Rect, buf: &mut Buffer, theme: &Theme) {
    let border_color = if field.has_error() {
        theme.border_error
    } else if field.focused {
        theme.border_focused
    } else {
        theme.border
    };
    draw_border(buf, rect, theme.shape, border_color.to_rgb());

    // One cell of horizontal padding inside the border.
    let inner = rect.shrink(1, 2, 1, 2);
    if inner.is_empty() {
        return;
    }
    draw_value(field, state, inner, buf, theme);
}

fn draw_value(field: &InputField, state: &EditState, inner: Rect, buf: &mut Buffer, theme: &Theme) {
    let is_placeholder = field.value.is_empty() && !field.focused;
    let shown: String = if is_placeholder {
        field.placeholder.clone()
    } else if let InputKind::Masked(mask) = field.kind {
        field.value.chars().map(|_| mask).collect()
    } else {
        field.value.clone()
    };
    let chars: Vec<char> = shown.chars().collect();

    let fg = if is_placeholder {
        theme.placeholder.to_rgb()
    } else {
        theme.text.to_rgb()
    };

    let cursor = state.cursor.min(chars.len());
    let selection = if field.focused {
        state
            .selection()
            .map(|(start, end)| (start.min(chars.len()), end.min(chars.len())))
    } else {
        None
    };

    // Horizontal scroll keeps the cursor in view when the text overflows.
    let visible = inner.width as usize;
    let mut scroll = 0;
    if field.focused {
        while scroll < cursor {
            let width_to_cursor: usize = chars[scroll..cursor]
                .iter()
                .map(|&c| char_width(c))
                .sum::<usize>()
                + 1;
            if width_to_cursor <= visible {
                break;
            }
            scroll += 1;
        }
    }

    let y = inner.y;
    let mut x = inner.x;

    for (i, &ch) in chars.iter().enumerate().skip(scroll) {
        let width = char_width(ch);
        if width == 0 {
            continue;
        }
        if x + width as u16 > inner.right() {
            break;
        }

        let (char_fg, char_bg) = if field.focused && !is_placeholder {
            let in_selection = selection
                .map(|(start, end)| i >= start && i < end)
                .unwrap_or(false);
            if i == cursor {
                (CURSOR_FG, Some(CURSOR_BG))
            } else if in_selection {
                (SELECTION_FG, Some(SELECTION_BG))
            } else {
                (fg, None)
            }
        } else {
            (fg, None)
        };

        if let Some(cell) = buf.get_mut(x, y) {
            cell.char = ch;
            cell.fg = char_fg;
            if let Some(bg) = char_bg {
                cell.bg = bg;
            }
            cell.wide_continuation = false;
        }
        if width == 2 && x + 1 < inner.right() {
            if let Some(cell) = buf.get_mut(x + 1, y) {
                cell.char = ' ';
                cell.fg = char_fg;
                if let Some(bg) = char_bg {
                    cell.bg = bg;
                }
                cell.wide_continuation = true;
            }
        }

        x += width as u16;
    }

    // Cursor block after the last character.
    if field.focused && cursor >= chars.len() {
        let width_to_cursor: usize = chars.iter().skip(scroll).map(|&c| char_width(c)).sum();
        let cursor_x = inner.x + width_to_cursor as u16;
        if cursor_x < inner.right() {
            buf.set(
                cursor_x,
                y,
                Cell::new(' ').with_fg(CURSOR_FG).with_bg(CURSOR_BG),
            );
        }
    }
}

fn draw_error(error: &str, rect: Rect, buf: &mut Buffer, theme: &Theme) {
    let message = truncate_to_width(error, rect.width as usize);
    put_str(
        buf,
        rect.x,
        rect.y,
        rect.right(),
        &message,
        theme.error.to_rgb(),
        TextStyle::new().italic(),
    );
}

fn draw_border(buf: &mut Buffer, rect: Rect, shape: Border, fg: Rgb) {
    let (tl, tr, bl, br, h, v) = match shape {
        Border::None => return,
        Border::Single => ('┌', '┐', '└', '┘', '─', '│'),
        Border::Double => ('╔', '╗', '╚', '╝', '═', '║'),
        Border::Rounded => ('╭', '╮', '╰', '╯', '─', '│'),
        Border::Thick => ('┏', '┓', '┗', '┛', '━', '┃'),
    };

    if rect.width < 2 || rect.height < 2 {
        return;
    }

    set_border_char(buf, rect.x, rect.y, tl, fg);
    set_border_char(buf, rect.right() - 1, rect.y, tr, fg);
    set_border_char(buf, rect.x, rect.bottom() - 1, bl, fg);
    set_border_char(buf, rect.right() - 1, rect.bottom() - 1, br, fg);

    for x in (rect.x + 1)..(rect.right() - 1) {
        set_border_char(buf, x, rect.y, h, fg);
        set_border_char(buf, x, rect.bottom() - 1, h, fg);
    }
    for y in (rect.y + 1)..(rect.bottom() - 1) {
        set_border_char(buf, rect.x, y, v, fg);
        set_border_char(buf, rect.right() - 1, y, v, fg);
    }
}

fn set_border_char(buf: &mut Buffer, x: u16, y: u16, ch: char, fg: Rgb) {
    if let Some(cell) = buf.get_mut(x, y) {
        cell.char = ch;
        cell.fg = fg;
        cell.wide_continuation = false;
        // Existing background is preserved.
    }
}

fn put_str(buf: &mut Buffer, mut x: u16, y: u16, right: u16, s: &str, fg: Rgb, style: TextStyle) {
    for ch in s.chars() {
        let width = char_width(ch);
        if width == 0 {
            continue;
        }
        if x + width as u16 > right {
            break;
        }
        if let Some(cell) = buf.get_mut(x, y) {
            cell.char = ch;
            cell.fg = fg;
            cell.style = style;
            cell.wide_continuation = false;
        }
        if width == 2 {
            if let Some(cell) = buf.get_mut(x + 1, y) {
                cell.char = ' ';
                cell.fg = fg;
                cell.style = style;
                cell.wide_continuation = true;
            }
        }
        x += width as u16;
    }
}

fn fill_background(buf: &mut Buffer, area: Rect, bg: Rgb) {
    for y in area.y..area.bottom().min(buf.height()) {
        for x in area.x..area.right().min(buf.width()) {
            if let Some(cell) = buf.get_mut(x, y) {
                cell.char = ' ';
                cell.bg = bg;
                cell.wide_continuation = false;
            }
        }
    }
}
