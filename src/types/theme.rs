use super::{Border, Color};

/// Named colors for the field's visual states.
///
/// The defaults echo the usual form styling: a red error affordance, a
/// blue focus affordance, dimmed placeholder text.
#[derive(Debug, Clone, PartialEq)]
pub struct Theme {
    pub label: Color,
    pub icon: Color,
    pub text: Color,
    pub placeholder: Color,
    pub border: Color,
    pub border_focused: Color,
    pub border_error: Color,
    pub error: Color,
    /// Fill behind the whole field. None leaves existing cells untouched.
    pub background: Option<Color>,
    pub shape: Border,
}

impl Theme {
    pub const fn new() -> Self {
        Self {
            label: Color::Oklch { l: 0.85, c: 0.0, h: 0.0 },
            icon: Color::Oklch { l: 0.65, c: 0.17, h: 280.0 },
            text: Color::Oklch { l: 0.95, c: 0.0, h: 0.0 },
            placeholder: Color::Oklch { l: 0.55, c: 0.0, h: 0.0 },
            border: Color::Oklch { l: 0.45, c: 0.0, h: 0.0 },
            border_focused: Color::Oklch { l: 0.65, c: 0.15, h: 250.0 },
            border_error: Color::Oklch { l: 0.6, c: 0.2, h: 25.0 },
            error: Color::Oklch { l: 0.65, c: 0.2, h: 25.0 },
            background: None,
            shape: Border::Rounded,
        }
    }
}

impl Default for Theme {
    fn default() -> Self {
        Self::new()
    }
}
