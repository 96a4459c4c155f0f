use super::*;

// =============================================================
// Button mapping
// =============================================================

#[test]
fn dom_button_codes() {
    assert_eq!(Button::from_dom(0), Button::Primary);
    assert_eq!(Button::from_dom(1), Button::Middle);
    assert_eq!(Button::from_dom(2), Button::Secondary);
}

#[test]
fn unknown_dom_code_is_primary() {
    assert_eq!(Button::from_dom(3), Button::Primary);
    assert_eq!(Button::from_dom(-1), Button::Primary);
}

#[test]
fn keymap() {
    assert_eq!(InputAction::for_button(Button::Primary), Some(InputAction::Select));
    assert_eq!(InputAction::for_button(Button::Secondary), Some(InputAction::Delete));
    assert_eq!(InputAction::for_button(Button::Middle), None);
}

// =============================================================
// FrameInput
// =============================================================

#[test]
fn just_pressed_reads_flags() {
    let frame = FrameInput { cursor: Point::default(), select: true, delete: false };
    assert!(frame.just_pressed(InputAction::Select));
    assert!(!frame.just_pressed(InputAction::Delete));
}

// =============================================================
// InputState
// =============================================================

#[test]
fn new_state_has_no_presses() {
    let mut input = InputState::new();
    let frame = input.take_frame();
    assert!(!frame.select);
    assert!(!frame.delete);
    assert_eq!(frame.cursor, Point::default());
}

#[test]
fn pointer_move_updates_cursor_only() {
    let mut input = InputState::new();
    input.pointer_moved(Point::new(12.0, 34.0));
    assert_eq!(input.cursor(), Point::new(12.0, 34.0));
    let frame = input.take_frame();
    assert_eq!(frame.cursor, Point::new(12.0, 34.0));
    assert!(!frame.select && !frame.delete);
}

#[test]
fn press_is_reported_once() {
    let mut input = InputState::new();
    input.pointer_down(Point::new(5.0, 5.0), Button::Primary);
    assert!(input.take_frame().select);
    assert!(!input.take_frame().select);
}

#[test]
fn press_moves_cursor() {
    let mut input = InputState::new();
    input.pointer_moved(Point::new(1.0, 1.0));
    input.pointer_down(Point::new(9.0, 8.0), Button::Secondary);
    let frame = input.take_frame();
    assert_eq!(frame.cursor, Point::new(9.0, 8.0));
    assert!(frame.delete);
    assert!(!frame.select);
}

#[test]
fn both_presses_in_one_frame() {
    let mut input = InputState::new();
    input.pointer_down(Point::new(1.0, 1.0), Button::Primary);
    input.pointer_down(Point::new(1.0, 1.0), Button::Secondary);
    let frame = input.take_frame();
    assert!(frame.select);
    assert!(frame.delete);
}

#[test]
fn middle_button_is_unbound() {
    let mut input = InputState::new();
    input.pointer_down(Point::new(3.0, 4.0), Button::Middle);
    let frame = input.take_frame();
    assert!(!frame.select && !frame.delete);
    assert_eq!(frame.cursor, Point::new(3.0, 4.0));
}

#[test]
fn cursor_persists_across_frames() {
    let mut input = InputState::new();
    input.pointer_moved(Point::new(7.0, 7.0));
    input.take_frame();
    assert_eq!(input.take_frame().cursor, Point::new(7.0, 7.0));
}
