//! Curses mouse bitmask definitions and button-action lookup tables.
//!
//! curses reports every mouse event as a single `mmask_t` bitmask. Each button owns a
//! fixed-width group of bits (one bit per action: released, pressed, clicked,
//! double-clicked, triple-clicked), and a pseudo-button slot past the real buttons
//! carries the modifier keys and the motion flag. This module reproduces that layout
//! as [`ButtonState`] and exposes one lookup table per action, indexed by button number.
//!
//! # Layout
//!
//! The group width depends on the ncurses mouse ABI:
//!
//! - **Version 2** (default): 5 bits per button, modifiers in slot 6
//! - **Version 1** (`ncurses-mouse-v1` feature): 6 bits per button, modifiers in slot 5
//!
//! # Example
//!
//! ```rust
//! use curses_mouse::mask::{ButtonState, PRESSED};
//!
//! let state = ButtonState::BUTTON1_PRESSED | ButtonState::BUTTON_CTRL;
//!
//! assert!(state.intersects(PRESSED[1]));
//! assert!(!state.intersects(PRESSED[3]));
//! ```

use bitflags::bitflags;

#[cfg(not(feature = "ncurses-mouse-v1"))]
const BITS_PER_BUTTON: u32 = 5;
#[cfg(not(feature = "ncurses-mouse-v1"))]
const MODIFIER_SLOT: u32 = 6;

#[cfg(feature = "ncurses-mouse-v1")]
const BITS_PER_BUTTON: u32 = 6;
#[cfg(feature = "ncurses-mouse-v1")]
const MODIFIER_SLOT: u32 = 5;

const ACTION_RELEASED: u64 = 0o1;
const ACTION_PRESSED: u64 = 0o2;
const ACTION_CLICKED: u64 = 0o4;
const ACTION_DOUBLE_CLICKED: u64 = 0o10;
const ACTION_TRIPLE_CLICKED: u64 = 0o20;

const MODIFIER_CTRL: u64 = 0o1;
const MODIFIER_SHIFT: u64 = 0o2;
const MODIFIER_ALT: u64 = 0o4;
const MODIFIER_POSITION: u64 = 0o10;

/// Shifts an action code into the bit group owned by `button` (1-based).
const fn mouse_mask(button: u32, action: u64) -> u64 {
    action << ((button - 1) * BITS_PER_BUTTON)
}

bitflags! {
    /// The button-state bitmask of a single curses mouse report.
    ///
    /// Reports may carry bits that have no name here (button 5 on newer ncurses, or
    /// garbage from broken terminals). Build values with
    /// [`ButtonState::from_bits_retain`] so those bits survive; they matter for
    /// [`MouseEvent::key_invalid`](crate::MouseEvent::key_invalid).
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
    pub struct ButtonState: u64 {
        /// Button 1 (left) released.
        const BUTTON1_RELEASED = mouse_mask(1, ACTION_RELEASED);
        /// Button 1 (left) pressed.
        const BUTTON1_PRESSED = mouse_mask(1, ACTION_PRESSED);
        /// Button 1 (left) clicked.
        const BUTTON1_CLICKED = mouse_mask(1, ACTION_CLICKED);
        /// Button 1 (left) double-clicked.
        const BUTTON1_DOUBLE_CLICKED = mouse_mask(1, ACTION_DOUBLE_CLICKED);
        /// Button 1 (left) triple-clicked.
        const BUTTON1_TRIPLE_CLICKED = mouse_mask(1, ACTION_TRIPLE_CLICKED);

        /// Button 2 (middle) released.
        const BUTTON2_RELEASED = mouse_mask(2, ACTION_RELEASED);
        /// Button 2 (middle) pressed.
        const BUTTON2_PRESSED = mouse_mask(2, ACTION_PRESSED);
        /// Button 2 (middle) clicked.
        const BUTTON2_CLICKED = mouse_mask(2, ACTION_CLICKED);
        /// Button 2 (middle) double-clicked.
        const BUTTON2_DOUBLE_CLICKED = mouse_mask(2, ACTION_DOUBLE_CLICKED);
        /// Button 2 (middle) triple-clicked.
        const BUTTON2_TRIPLE_CLICKED = mouse_mask(2, ACTION_TRIPLE_CLICKED);

        /// Button 3 (right) released.
        const BUTTON3_RELEASED = mouse_mask(3, ACTION_RELEASED);
        /// Button 3 (right) pressed.
        const BUTTON3_PRESSED = mouse_mask(3, ACTION_PRESSED);
        /// Button 3 (right) clicked.
        const BUTTON3_CLICKED = mouse_mask(3, ACTION_CLICKED);
        /// Button 3 (right) double-clicked.
        const BUTTON3_DOUBLE_CLICKED = mouse_mask(3, ACTION_DOUBLE_CLICKED);
        /// Button 3 (right) triple-clicked.
        const BUTTON3_TRIPLE_CLICKED = mouse_mask(3, ACTION_TRIPLE_CLICKED);

        /// Button 4 released.
        const BUTTON4_RELEASED = mouse_mask(4, ACTION_RELEASED);
        /// Button 4 pressed. Wheel-up on every terminal we know of.
        const BUTTON4_PRESSED = mouse_mask(4, ACTION_PRESSED);
        /// Button 4 clicked.
        const BUTTON4_CLICKED = mouse_mask(4, ACTION_CLICKED);
        /// Button 4 double-clicked.
        const BUTTON4_DOUBLE_CLICKED = mouse_mask(4, ACTION_DOUBLE_CLICKED);
        /// Button 4 triple-clicked.
        const BUTTON4_TRIPLE_CLICKED = mouse_mask(4, ACTION_TRIPLE_CLICKED);

        /// Control key held.
        const BUTTON_CTRL = mouse_mask(MODIFIER_SLOT, MODIFIER_CTRL);
        /// Shift key held.
        const BUTTON_SHIFT = mouse_mask(MODIFIER_SLOT, MODIFIER_SHIFT);
        /// Alt/Meta key held.
        const BUTTON_ALT = mouse_mask(MODIFIER_SLOT, MODIFIER_ALT);
        /// Pointer motion report.
        const REPORT_MOUSE_POSITION = mouse_mask(MODIFIER_SLOT, MODIFIER_POSITION);
    }
}

/// Largest bitmask curses considers a valid mouse event.
///
/// Anything numerically above this came from a terminal that emitted a button code
/// curses could not map.
pub const ALL_MOUSE_EVENTS: u64 = ButtonState::REPORT_MOUSE_POSITION.bits() - 1;

/// Dedicated scroll-down bit introduced by later ncurses releases (`2^21`).
///
/// Checked as a raw bit rather than a named flag because older layouts never assigned
/// it to wheel-down.
pub const SCROLL_DOWN_BIT: u64 = 1 << 21;

/// Number of slots in each action table: the zero sentinel plus buttons 1-4.
pub const BUTTON_TABLE_LEN: usize = 5;

/// "Button N pressed" flags, indexed by button number. Slot 0 never matches.
pub const PRESSED: [ButtonState; BUTTON_TABLE_LEN] = [
    ButtonState::empty(),
    ButtonState::BUTTON1_PRESSED,
    ButtonState::BUTTON2_PRESSED,
    ButtonState::BUTTON3_PRESSED,
    ButtonState::BUTTON4_PRESSED,
];

/// "Button N released" flags, indexed by button number. Slot 0 never matches.
pub const RELEASED: [ButtonState; BUTTON_TABLE_LEN] = [
    ButtonState::empty(),
    ButtonState::BUTTON1_RELEASED,
    ButtonState::BUTTON2_RELEASED,
    ButtonState::BUTTON3_RELEASED,
    ButtonState::BUTTON4_RELEASED,
];

/// "Button N clicked" flags, indexed by button number. Slot 0 never matches.
pub const CLICKED: [ButtonState; BUTTON_TABLE_LEN] = [
    ButtonState::empty(),
    ButtonState::BUTTON1_CLICKED,
    ButtonState::BUTTON2_CLICKED,
    ButtonState::BUTTON3_CLICKED,
    ButtonState::BUTTON4_CLICKED,
];

/// "Button N double-clicked" flags, indexed by button number. Slot 0 never matches.
pub const DOUBLE_CLICKED: [ButtonState; BUTTON_TABLE_LEN] = [
    ButtonState::empty(),
    ButtonState::BUTTON1_DOUBLE_CLICKED,
    ButtonState::BUTTON2_DOUBLE_CLICKED,
    ButtonState::BUTTON3_DOUBLE_CLICKED,
    ButtonState::BUTTON4_DOUBLE_CLICKED,
];

/// Looks up the flag for button `n`, or an empty flag when `n` is out of range.
pub(crate) fn lookup(table: &[ButtonState], n: i32) -> ButtonState {
    usize::try_from(n)
        .ok()
        .and_then(|index| table.get(index))
        .copied()
        .unwrap_or_else(ButtonState::empty)
}
