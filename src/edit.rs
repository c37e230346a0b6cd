use crate::event::{Key, Modifiers};
use crate::field::InputKind;

/// Cursor and selection for one field, in character indices.
///
/// Owned by the caller next to the value itself; the field widget holds no
/// state between renders. The value may change out from under this state
/// (the caller rewrites it on every change callback), so positions are
/// clamped against the current value before every use.
#[derive(Debug, Clone, Default)]
pub struct EditState {
    pub cursor: usize,
    /// Anchor position for selection. When Some and != cursor, text is selected.
    pub anchor: Option<usize>,
}

impl EditState {
    pub fn new() -> Self {
        Self::default()
    }

    /// State with the cursor placed after the last character of `value`.
    pub fn at_end(value: &str) -> Self {
        Self {
            cursor: value.chars().count(),
            anchor: None,
        }
    }

    /// Get the selection range as (start, end) where start <= end.
    pub fn selection(&self) -> Option<(usize, usize)> {
        self.anchor.and_then(|a| {
            if a != self.cursor {
                Some(if a < self.cursor {
                    (a, self.cursor)
                } else {
                    (self.cursor, a)
                })
            } else {
                None
            }
        })
    }

    pub fn has_selection(&self) -> bool {
        self.selection().is_some()
    }

    pub fn clear_selection(&mut self) {
        self.anchor = None;
    }

    /// Select all of `value`.
    pub fn select_all(&mut self, value: &str) {
        if !value.is_empty() {
            self.anchor = Some(0);
            self.cursor = value.chars().count();
        }
    }

    fn clamp(&mut self, char_count: usize) {
        self.cursor = self.cursor.min(char_count);
        if let Some(a) = self.anchor {
            self.anchor = Some(a.min(char_count));
        }
    }
}

/// What a key press did to the field.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EditOutcome {
    /// The text changed; carries the edited value for the change callback.
    Edited(String),
    /// Cursor or selection changed, text untouched.
    Moved,
    /// Enter was pressed.
    Submitted,
    /// Key was not handled.
    Ignored,
}

/// Apply one key press to `value`, updating cursor/selection in `state`.
///
/// Pure with respect to the value: the edited text is returned inside
/// [`EditOutcome::Edited`], never written anywhere. Rejected characters
/// (wrong kind, control chars) leave everything untouched.
pub fn apply_key(
    value: &str,
    state: &mut EditState,
    key: Key,
    modifiers: Modifiers,
    kind: InputKind,
) -> EditOutcome {
    let char_count = value.chars().count();
    state.clamp(char_count);

    match key {
        Key::Char(c) if modifiers.none() || (modifiers.shift && !modifiers.ctrl) => {
            if c.is_control() || !kind.accepts(c) {
                log::debug!("[field] rejected {c:?} for {kind:?} input");
                return EditOutcome::Ignored;
            }
            EditOutcome::Edited(insert_char(value, state, c))
        }

        Key::Backspace if modifiers.none() => match delete_back(value, state) {
            Some(edited) => EditOutcome::Edited(edited),
            None => EditOutcome::Moved,
        },

        Key::Delete if modifiers.none() => match delete_forward(value, state) {
            Some(edited) => EditOutcome::Edited(edited),
            None => EditOutcome::Moved,
        },

        Key::Left if !modifiers.ctrl => {
            move_cursor(state, char_count, -1, modifiers.shift);
            EditOutcome::Moved
        }

        Key::Right if !modifiers.ctrl => {
            move_cursor(state, char_count, 1, modifiers.shift);
            EditOutcome::Moved
        }

        Key::Home if !modifiers.ctrl => {
            move_to(state, 0, modifiers.shift);
            EditOutcome::Moved
        }

        Key::End if !modifiers.ctrl => {
            move_to(state, char_count, modifiers.shift);
            EditOutcome::Moved
        }

        Key::Char('a') if modifiers.ctrl => {
            state.select_all(value);
            EditOutcome::Moved
        }

        Key::Enter => EditOutcome::Submitted,

        _ => EditOutcome::Ignored,
    }
}

/// Insert a character at the cursor, replacing the selection if any.
fn insert_char(value: &str, state: &mut EditState, c: char) -> String {
    if let Some((start, end)) = state.selection() {
        let (start_b, end_b) = (char_to_byte(value, start), char_to_byte(value, end));
        let mut edited = String::with_capacity(value.len() - (end_b - start_b) + c.len_utf8());
        edited.push_str(&value[..start_b]);
        edited.push(c);
        edited.push_str(&value[end_b..]);
        state.cursor = start + 1;
        state.clear_selection();
        edited
    } else {
        let byte_pos = char_to_byte(value, state.cursor);
        let mut edited = value.to_string();
        edited.insert(byte_pos, c);
        state.cursor += 1;
        // A collapsed anchor left behind would turn into a phantom selection.
        state.clear_selection();
        edited
    }
}

/// Delete the selection, or the character before the cursor.
/// Returns None when there is nothing to delete.
fn delete_back(value: &str, state: &mut EditState) -> Option<String> {
    if let Some((start, end)) = state.selection() {
        let edited = remove_range(value, start, end);
        state.cursor = start;
        state.clear_selection();
        Some(edited)
    } else if state.cursor > 0 {
        let edited = remove_range(value, state.cursor - 1, state.cursor);
        state.cursor -= 1;
        state.clear_selection();
        Some(edited)
    } else {
        None
    }
}

/// Delete the selection, or the character at the cursor.
fn delete_forward(value: &str, state: &mut EditState) -> Option<String> {
    if let Some((start, end)) = state.selection() {
        let edited = remove_range(value, start, end);
        state.cursor = start;
        state.clear_selection();
        Some(edited)
    } else if state.cursor < value.chars().count() {
        state.clear_selection();
        Some(remove_range(value, state.cursor, state.cursor + 1))
    } else {
        None
    }
}

fn move_cursor(state: &mut EditState, char_count: usize, delta: i32, extend_selection: bool) {
    if extend_selection && state.anchor.is_none() {
        state.anchor = Some(state.cursor);
    } else if !extend_selection {
        // Collapse an existing selection onto its edge instead of moving.
        if let Some((start, end)) = state.selection() {
            state.cursor = if delta < 0 { start } else { end };
            state.clear_selection();
            return;
        }
        state.clear_selection();
    }

    state.cursor = (state.cursor as i32 + delta).clamp(0, char_count as i32) as usize;
}

fn move_to(state: &mut EditState, position: usize, extend_selection: bool) {
    if extend_selection && state.anchor.is_none() {
        state.anchor = Some(state.cursor);
    } else if !extend_selection {
        state.clear_selection();
    }

    state.cursor = position;
}

/// Remove the character range [start, end) given in character indices.
fn remove_range(value: &str, start: usize, end: usize) -> String {
    let (start_b, end_b) = (char_to_byte(value, start), char_to_byte(value, end));
    let mut edited = String::with_capacity(value.len() - (end_b - start_b));
    edited.push_str(&value[..start_b]);
    edited.push_str(&value[end_b..]);
    edited
}

fn char_to_byte(s: &str, char_idx: usize) -> usize {
    s.char_indices()
        .nth(char_idx)
        .map(|(i, _)| i)
        .unwrap_or(s.len())
}
