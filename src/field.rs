use std::fmt;

use crate::edit::{self, EditOutcome, EditState};
use crate::event::{Key, Modifiers};
use crate::icon::IconContent;

/// Classification of what the field accepts and how it displays.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum InputKind {
    /// Any printable text.
    Text,
    /// Non-negative numbers: digits and a decimal point.
    #[default]
    Numeric,
    /// Any printable text, displayed as the mask character.
    Masked(char),
}

impl InputKind {
    /// Whether an inserted character is allowed for this kind.
    pub fn accepts(&self, c: char) -> bool {
        match self {
            Self::Numeric => c.is_ascii_digit() || c == '.',
            Self::Text | Self::Masked(_) => true,
        }
    }
}

/// A labeled single-line input field.
///
/// Pure view configuration, rebuilt by the caller on every frame. The
/// caller owns the value: the field never stores edits, it hands the
/// edited text to [`on_change`](Self::on_change) and leaves `value`
/// untouched. Validation text arrives pre-computed through
/// [`error`](Self::error); a non-empty message switches the border to the
/// error color and renders below the box.
///
/// Defaults: `kind` is [`InputKind::Numeric`], `placeholder` is `"0"`,
/// `error` is empty, no icon, unfocused.
pub struct InputField<'a> {
    pub label: String,
    pub value: String,
    pub kind: InputKind,
    pub placeholder: String,
    pub error: String,
    pub icon: Option<Box<dyn IconContent + 'a>>,
    pub focused: bool,
    pub on_change: Option<Box<dyn FnMut(&str) + 'a>>,
}

impl<'a> InputField<'a> {
    pub fn new(label: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            value: String::new(),
            kind: InputKind::default(),
            placeholder: "0".to_string(),
            error: String::new(),
            icon: None,
            focused: false,
            on_change: None,
        }
    }

    pub fn value(mut self, value: impl Into<String>) -> Self {
        self.value = value.into();
        self
    }

    pub fn kind(mut self, kind: InputKind) -> Self {
        self.kind = kind;
        self
    }

    pub fn placeholder(mut self, placeholder: impl Into<String>) -> Self {
        self.placeholder = placeholder.into();
        self
    }

    pub fn error(mut self, error: impl Into<String>) -> Self {
        self.error = error.into();
        self
    }

    pub fn icon(mut self, icon: impl IconContent + 'a) -> Self {
        self.icon = Some(Box::new(icon));
        self
    }

    pub fn focused(mut self, focused: bool) -> Self {
        self.focused = focused;
        self
    }

    pub fn on_change(mut self, handler: impl FnMut(&str) + 'a) -> Self {
        self.on_change = Some(Box::new(handler));
        self
    }

    /// Set the field to password mode (displays • for each character).
    pub fn password(self) -> Self {
        self.kind(InputKind::Masked('•'))
    }

    /// Set a custom mask character.
    pub fn masked(self, mask_char: char) -> Self {
        self.kind(InputKind::Masked(mask_char))
    }

    pub fn has_error(&self) -> bool {
        !self.error.is_empty()
    }

    /// Rows the field occupies: label, bordered input box, and the error
    /// line when a message is present.
    pub fn height(&self) -> u16 {
        if self.has_error() {
            5
        } else {
            4
        }
    }

    /// Route one key press through the edit engine.
    ///
    /// When the key edits the text, the change callback fires exactly once
    /// with the new value; `self.value` is left as configured. A missing
    /// callback is not a fault: the edit is dropped with a diagnostic.
    pub fn handle_key(
        &mut self,
        state: &mut EditState,
        key: Key,
        modifiers: Modifiers,
    ) -> EditOutcome {
        let outcome = edit::apply_key(&self.value, state, key, modifiers, self.kind);
        if let EditOutcome::Edited(edited) = &outcome {
            match self.on_change.as_mut() {
                Some(handler) => handler(edited),
                None => log::warn!(
                    "[field] edit on {:?} dropped: no change handler",
                    self.label
                ),
            }
        }
        outcome
    }
}

impl fmt::Debug for InputField<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("InputField")
            .field("label", &self.label)
            .field("value", &self.value)
            .field("kind", &self.kind)
            .field("placeholder", &self.placeholder)
            .field("error", &self.error)
            .field("icon", &self.icon.is_some())
            .field("focused", &self.focused)
            .field("on_change", &self.on_change.is_some())
            .finish()
    }
}
