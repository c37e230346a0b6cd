use std::cell::RefCell;
use std::rc::Rc;

use tuifield::{apply_key, EditOutcome, EditState, InputField, InputKind, Key, Modifiers};

fn recording_field<'a>(
    value: &str,
    calls: &'a Rc<RefCell<Vec<String>>>,
) -> InputField<'a> {
    let sink = Rc::clone(calls);
    InputField::new("Amount")
        .value(value)
        .on_change(move |text| sink.borrow_mut().push(text.to_string()))
}

#[test]
fn test_change_callback_fires_once_with_new_text() {
    let calls = Rc::new(RefCell::new(Vec::new()));
    let mut field = recording_field("1", &calls);
    let mut state = EditState::at_end("1");

    let outcome = field.handle_key(&mut state, Key::Char('5'), Modifiers::new());

    assert_eq!(outcome, EditOutcome::Edited("15".to_string()));
    assert_eq!(*calls.borrow(), vec!["15".to_string()]);
}

#[test]
fn test_append_carries_the_whole_new_value() {
    // The callback receives the field's full text, not the keystroke.
    let calls = Rc::new(RefCell::new(Vec::new()));
    let mut field = recording_field("10", &calls);
    let mut state = EditState::at_end("10");

    let outcome = field.handle_key(&mut state, Key::Char('5'), Modifiers::new());

    assert_eq!(outcome, EditOutcome::Edited("105".to_string()));
    assert_eq!(*calls.borrow(), vec!["105".to_string()]);
}

#[test]
fn test_value_is_never_mutated() {
    let calls = Rc::new(RefCell::new(Vec::new()));
    let mut field = recording_field("10", &calls);
    let mut state = EditState::at_end("10");

    field.handle_key(&mut state, Key::Char('5'), Modifiers::new());
    field.handle_key(&mut state, Key::Backspace, Modifiers::new());

    assert_eq!(field.value, "10", "the caller owns the value");
}

#[test]
fn test_missing_callback_is_not_a_fault() {
    let mut field = InputField::new("Amount").value("1");
    let mut state = EditState::at_end("1");

    let outcome = field.handle_key(&mut state, Key::Char('5'), Modifiers::new());

    // The edit is computed and dropped; nothing panics.
    assert_eq!(outcome, EditOutcome::Edited("15".to_string()));
}

#[test]
fn test_numeric_kind_rejects_letters() {
    let calls = Rc::new(RefCell::new(Vec::new()));
    let mut field = recording_field("10", &calls);
    let mut state = EditState::at_end("10");

    let outcome = field.handle_key(&mut state, Key::Char('x'), Modifiers::new());

    assert_eq!(outcome, EditOutcome::Ignored);
    assert!(calls.borrow().is_empty());
}

#[test]
fn test_numeric_kind_accepts_decimal_point() {
    let calls = Rc::new(RefCell::new(Vec::new()));
    let mut field = recording_field("10", &calls);
    let mut state = EditState::at_end("10");

    field.handle_key(&mut state, Key::Char('.'), Modifiers::new());

    assert_eq!(*calls.borrow(), vec!["10.".to_string()]);
}

#[test]
fn test_text_kind_accepts_letters() {
    let calls = Rc::new(RefCell::new(Vec::new()));
    let mut field = recording_field("", &calls).kind(InputKind::Text);
    let mut state = EditState::new();

    field.handle_key(&mut state, Key::Char('x'), Modifiers::new());

    assert_eq!(*calls.borrow(), vec!["x".to_string()]);
}

#[test]
fn test_masked_kind_edits_raw_value() {
    let calls = Rc::new(RefCell::new(Vec::new()));
    let mut field = recording_field("a", &calls).password();
    let mut state = EditState::at_end("a");

    field.handle_key(&mut state, Key::Char('b'), Modifiers::new());

    assert_eq!(*calls.borrow(), vec!["ab".to_string()]);
}

#[test]
fn test_control_characters_are_rejected() {
    let mut state = EditState::new();
    let outcome = apply_key("", &mut state, Key::Char('\0'), Modifiers::new(), InputKind::Text);
    assert_eq!(outcome, EditOutcome::Ignored);
}

#[test]
fn test_backspace_deletes_before_cursor() {
    let mut state = EditState::at_end("15");
    let outcome = apply_key("15", &mut state, Key::Backspace, Modifiers::new(), InputKind::Numeric);

    assert_eq!(outcome, EditOutcome::Edited("1".to_string()));
    assert_eq!(state.cursor, 1);
}

#[test]
fn test_backspace_at_start_is_a_no_op() {
    let calls = Rc::new(RefCell::new(Vec::new()));
    let mut field = recording_field("15", &calls);
    let mut state = EditState::new();

    let outcome = field.handle_key(&mut state, Key::Backspace, Modifiers::new());

    assert_eq!(outcome, EditOutcome::Moved);
    assert!(calls.borrow().is_empty());
}

#[test]
fn test_delete_removes_at_cursor() {
    let mut state = EditState::new();
    let outcome = apply_key("15", &mut state, Key::Delete, Modifiers::new(), InputKind::Numeric);

    assert_eq!(outcome, EditOutcome::Edited("5".to_string()));
    assert_eq!(state.cursor, 0);
}

#[test]
fn test_cursor_motion_does_not_fire_callback() {
    let calls = Rc::new(RefCell::new(Vec::new()));
    let mut field = recording_field("15", &calls);
    let mut state = EditState::at_end("15");

    assert_eq!(
        field.handle_key(&mut state, Key::Left, Modifiers::new()),
        EditOutcome::Moved
    );
    assert_eq!(state.cursor, 1);
    assert_eq!(
        field.handle_key(&mut state, Key::Home, Modifiers::new()),
        EditOutcome::Moved
    );
    assert_eq!(state.cursor, 0);
    assert_eq!(
        field.handle_key(&mut state, Key::End, Modifiers::new()),
        EditOutcome::Moved
    );
    assert_eq!(state.cursor, 2);
    assert!(calls.borrow().is_empty());
}

#[test]
fn test_shift_arrow_extends_selection() {
    let mut state = EditState::at_end("ab");
    apply_key("ab", &mut state, Key::Left, Modifiers::shift(), InputKind::Text);

    assert_eq!(state.selection(), Some((1, 2)));

    let outcome = apply_key("ab", &mut state, Key::Backspace, Modifiers::new(), InputKind::Text);
    assert_eq!(outcome, EditOutcome::Edited("a".to_string()));
    assert_eq!(state.cursor, 1);
    assert!(!state.has_selection());
}

#[test]
fn test_ctrl_a_selects_all() {
    let mut state = EditState::new();
    let outcome = apply_key("15", &mut state, Key::Char('a'), Modifiers::ctrl(), InputKind::Numeric);

    assert_eq!(outcome, EditOutcome::Moved);
    assert_eq!(state.selection(), Some((0, 2)));
}

#[test]
fn test_insert_replaces_selection() {
    let mut state = EditState::new();
    state.select_all("15");

    let outcome = apply_key("15", &mut state, Key::Char('9'), Modifiers::new(), InputKind::Numeric);

    assert_eq!(outcome, EditOutcome::Edited("9".to_string()));
    assert_eq!(state.cursor, 1);
}

#[test]
fn test_plain_arrow_collapses_selection() {
    let mut state = EditState::new();
    state.select_all("15");

    apply_key("15", &mut state, Key::Left, Modifiers::new(), InputKind::Numeric);

    assert_eq!(state.cursor, 0);
    assert!(!state.has_selection());
}

#[test]
fn test_enter_submits_without_callback() {
    let calls = Rc::new(RefCell::new(Vec::new()));
    let mut field = recording_field("15", &calls);
    let mut state = EditState::at_end("15");

    let outcome = field.handle_key(&mut state, Key::Enter, Modifiers::new());

    assert_eq!(outcome, EditOutcome::Submitted);
    assert!(calls.borrow().is_empty());
}

#[test]
fn test_multibyte_insert_and_delete() {
    let mut state = EditState::at_end("日");
    let outcome = apply_key("日", &mut state, Key::Char('本'), Modifiers::new(), InputKind::Text);
    assert_eq!(outcome, EditOutcome::Edited("日本".to_string()));
    assert_eq!(state.cursor, 2);

    let mut state = EditState::at_end("日本");
    let outcome = apply_key("日本", &mut state, Key::Backspace, Modifiers::new(), InputKind::Text);
    assert_eq!(outcome, EditOutcome::Edited("日".to_string()));
}

#[test]
fn test_stale_cursor_is_clamped_to_value() {
    // The value shrank since this state was last used.
    let mut state = EditState {
        cursor: 10,
        anchor: Some(7),
    };
    let outcome = apply_key("a", &mut state, Key::Char('b'), Modifiers::new(), InputKind::Text);

    assert_eq!(outcome, EditOutcome::Edited("ab".to_string()));
    assert_eq!(state.cursor, 2);
}

#[test]
fn test_unmapped_keys_are_ignored() {
    let mut state = EditState::at_end("15");
    assert_eq!(
        apply_key("15", &mut state, Key::Tab, Modifiers::new(), InputKind::Numeric),
        EditOutcome::Ignored
    );
    assert_eq!(
        apply_key("15", &mut state, Key::Up, Modifiers::new(), InputKind::Numeric),
        EditOutcome::Ignored
    );
}
