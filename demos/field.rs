use std::fs::File;

use simplelog::{Config, LevelFilter, WriteLogger};
use tuifield::{render, EditState, Event, Glyph, InputField, Key, Rect, Terminal, Theme};

fn main() -> std::io::Result<()> {
    if let Ok(log_file) = File::create("tuifield-demo.log") {
        let _ = WriteLogger::init(LevelFilter::Debug, Config::default(), log_file);
    }

    let mut term = Terminal::new()?;
    let theme = Theme::new();

    // The caller owns the value, the cursor state, and the validation.
    let mut amount = String::new();
    let mut state = EditState::new();

    loop {
        let error = if !amount.is_empty() && amount.parse::<f64>().is_err() {
            "Enter a valid number".to_string()
        } else {
            String::new()
        };

        let mut next = None;
        let mut field = InputField::new("Amount")
            .icon(Glyph::new('$'))
            .value(amount.as_str())
            .placeholder("0")
            .error(error)
            .focused(true)
            .on_change(|value| next = Some(value.to_string()));

        term.render(|area, buf| {
            let width = area.width.min(40);
            let rect = Rect::new(2, 1, width.saturating_sub(2), field.height());
            render::draw(&field, &state, rect, buf, &theme);
        })?;

        for event in term.poll(None)? {
            match event {
                Event::Key {
                    key: Key::Escape, ..
                } => return Ok(()),
                Event::Key { key, modifiers } => {
                    field.handle_key(&mut state, key, modifiers);
                }
                Event::Resize { .. } => {}
            }
        }

        drop(field);
        if let Some(value) = next {
            amount = value;
        }
    }
}
