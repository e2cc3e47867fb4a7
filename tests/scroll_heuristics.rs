//! Integration tests for wheel-direction resolution and invalid-mask handling.
//!
//! Wheel-down has been reported as button 2, as bit 21, and as an out-of-range mask.
//! These tests pin down the priority order between those signals.

use curses_mouse::mask::{ButtonState, ALL_MOUSE_EVENTS, SCROLL_DOWN_BIT};
use curses_mouse::{MouseEvent, RawMouseState, CTRL_SCROLLWHEEL_MULTIPLIER};

fn event(bstate: u64) -> MouseEvent {
    MouseEvent::new(RawMouseState::new(5, 5, bstate))
}

const CTRL: u64 = ButtonState::BUTTON_CTRL.bits();

#[test]
fn test_multiplier_value() {
    assert_eq!(CTRL_SCROLLWHEEL_MULTIPLIER, 5);
}

#[test]
fn test_wheel_up() {
    let up = ButtonState::BUTTON4_PRESSED.bits();
    let ctrl_up = event(up | CTRL);

    assert_eq!(event(up).wheel_direction(), -1);
    assert_eq!(ctrl_up.wheel_direction(), -CTRL_SCROLLWHEEL_MULTIPLIER);
}

#[test]
fn test_wheel_down_signals() {
    let signals = [
        ButtonState::BUTTON2_PRESSED.bits(),
        SCROLL_DOWN_BIT,
        ALL_MOUSE_EVENTS + 1,
    ];

    for signal in signals {
        assert_eq!(event(signal).wheel_direction(), 1, "signal {signal:#x}");
        assert_eq!(
            event(signal | CTRL).wheel_direction(),
            CTRL_SCROLLWHEEL_MULTIPLIER,
            "signal {signal:#x} with ctrl"
        );
    }
}

#[test]
fn test_button_two_scrolls_even_without_button_four() {
    let ev = event(ButtonState::BUTTON2_PRESSED.bits());

    assert!(!ev.pressed(4));
    assert_eq!(ev.wheel_direction(), 1);
}

#[test]
fn test_up_takes_priority_over_every_down_signal() {
    let up = ButtonState::BUTTON4_PRESSED.bits();
    let button_two = ButtonState::BUTTON2_PRESSED.bits();

    assert_eq!(event(up | button_two).wheel_direction(), -1);
    assert_eq!(event(up | SCROLL_DOWN_BIT).wheel_direction(), -1);
    assert_eq!(event(up | (ALL_MOUSE_EVENTS + 1)).wheel_direction(), -1);
}

#[test]
fn test_invalid_mask_without_pressed_flags() {
    let ev = event(ALL_MOUSE_EVENTS + 1);

    assert!(ev.key_invalid());
    assert!((1..=4).all(|n| !ev.pressed(n)));
    assert_eq!(ev.wheel_direction(), 1);
}

#[test]
fn test_every_valid_single_bit_below_limit_is_not_invalid() {
    for shift in 0..64 {
        let bit = 1u64 << shift;
        let invalid = event(bit).key_invalid();
        assert_eq!(invalid, bit > ALL_MOUSE_EVENTS, "bit {shift}");
    }
}

#[test]
fn test_non_scroll_buttons_do_not_scroll() {
    let quiet = [
        0,
        ButtonState::BUTTON1_PRESSED.bits(),
        ButtonState::BUTTON3_PRESSED.bits(),
        ButtonState::BUTTON1_CLICKED.bits(),
        ButtonState::BUTTON2_RELEASED.bits(),
        CTRL,
    ];

    for bstate in quiet {
        assert_eq!(event(bstate).wheel_direction(), 0, "bstate {bstate:#x}");
    }
}

#[test]
fn test_motion_report_reads_as_invalid() {
    // REPORT_MOUSE_POSITION sits one past ALL_MOUSE_EVENTS, so curses motion reports
    // fall into the invalid-mask scroll-down fallback.
    let ev = event(ButtonState::REPORT_MOUSE_POSITION.bits());

    assert!(ev.key_invalid());
    assert_eq!(ev.wheel_direction(), 1);
}

#[cfg(not(feature = "ncurses-mouse-v1"))]
#[test]
fn test_scroll_down_bit_is_button_five_pressed() {
    // Button 5 sits in the fifth 5-bit group; "pressed" is its second bit.
    assert_eq!(SCROLL_DOWN_BIT, 0o2 << 20);
    assert_eq!(event(0x0020_0000).wheel_direction(), 1);
}
