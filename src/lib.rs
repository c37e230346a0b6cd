pub mod buffer;
pub mod edit;
pub mod event;
pub mod field;
pub mod icon;
pub mod rect;
pub mod render;
pub mod terminal;
pub mod text;
pub mod types;

pub use buffer::{Buffer, Cell};
pub use edit::{apply_key, EditOutcome, EditState};
pub use event::{Event, Key, Modifiers};
pub use field::{InputField, InputKind};
pub use icon::{Glyph, IconContent};
pub use rect::Rect;
pub use terminal::Terminal;
pub use types::*;
