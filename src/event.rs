//! Decoded curses mouse events.
//!
//! A [`MouseEvent`] wraps one raw curses mouse report ([`RawMouseState`]) and answers
//! questions about it: which button did what, which modifiers were held, and whether
//! the wheel moved.
//!
//! # Example
//!
//! ```rust
//! use curses_mouse::mask::ButtonState;
//! use curses_mouse::{MouseEvent, RawMouseState};
//!
//! let raw = RawMouseState::new(12, 3, ButtonState::BUTTON1_CLICKED.bits());
//! let event = MouseEvent::new(raw);
//!
//! assert_eq!((event.x(), event.y()), (12, 3));
//! assert!(event.clicked(1));
//! assert!(!event.clicked(2));
//! assert_eq!(event.wheel_direction(), 0);
//! ```

use tracing::debug;

use crate::error::Result;
use crate::mask::{self, ButtonState, ALL_MOUSE_EVENTS, SCROLL_DOWN_BIT};
use crate::source::MouseSource;

/// Wheel distance reported per notch while the control key is held.
pub const CTRL_SCROLLWHEEL_MULTIPLIER: i32 = 5;

/// Amount added to a negative coordinate to undo the one-byte wrap.
const COORDINATE_OVERFLOW_FIX: i32 = 0xFF;

/// A raw mouse report as curses hands it over (`MEVENT`).
///
/// Coordinates may be negative on terminals whose position field overflowed; decoding
/// happens in [`MouseEvent::new`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct RawMouseState {
    /// Device id, used to tell multiple pointing devices apart.
    pub id: i16,
    /// Column, 0-indexed.
    pub x: i32,
    /// Row, 0-indexed.
    pub y: i32,
    /// Unused by curses; kept for completeness.
    pub z: i32,
    /// Button-state bitmask.
    pub bstate: u64,
}

impl RawMouseState {
    /// Creates a report for device 0 at `(x, y)` with the given bitmask.
    pub fn new(x: i32, y: i32, bstate: u64) -> Self {
        Self {
            id: 0,
            x,
            y,
            z: 0,
            bstate,
        }
    }
}

impl From<(i16, i32, i32, i32, u64)> for RawMouseState {
    fn from((id, x, y, z, bstate): (i16, i32, i32, i32, u64)) -> Self {
        Self {
            id,
            x,
            y,
            z,
            bstate,
        }
    }
}

/// A decoded mouse event.
///
/// Immutable once built; every query is a pure function of the corrected coordinates
/// and the button-state bitmask.
///
/// Button queries take a 1-based button number. Numbers with no table entry
/// (0, negatives, anything past button 4) answer `false`, so callers may scan a range
/// such as `1..=8` without knowing which buttons exist.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct MouseEvent {
    x: i32,
    y: i32,
    button_state: ButtonState,
}

impl MouseEvent {
    /// Decodes a raw report.
    ///
    /// Some terminals report columns (and rows) past roughly 220 as negative numbers:
    /// the position travels in a single byte that gets sign-extended along the way.
    /// Adding `0xFF` to a negative coordinate recovers the real value. This is a
    /// compatibility heuristic, not a general fix. It assumes real coordinates are
    /// never negative and that the wrap happens within one byte.
    pub fn new(raw: RawMouseState) -> Self {
        let x = correct_overflow(raw.x);
        let y = correct_overflow(raw.y);
        if x != raw.x || y != raw.y {
            debug!(
                raw_x = raw.x,
                raw_y = raw.y,
                x,
                y,
                "corrected mouse coordinate overflow"
            );
        }

        Self {
            x,
            y,
            button_state: ButtonState::from_bits_retain(raw.bstate),
        }
    }

    /// Reads the next report from `source` and decodes it.
    ///
    /// # Errors
    ///
    /// Returns whatever error the source reports, such as [`MouseError::NoEvent`]
    /// when nothing is queued.
    ///
    /// [`MouseError::NoEvent`]: crate::MouseError::NoEvent
    ///
    /// # Example
    ///
    /// ```rust
    /// use curses_mouse::{MouseEvent, RawMouseState, ScriptedSource};
    ///
    /// # fn main() -> curses_mouse::Result<()> {
    /// let mut source = ScriptedSource::from(vec![RawMouseState::new(-10, 4, 0)]);
    /// let event = MouseEvent::get(&mut source)?;
    ///
    /// assert_eq!(event.x(), 245);
    /// # Ok(())
    /// # }
    /// ```
    pub fn get<S>(source: &mut S) -> Result<Self>
    where
        S: MouseSource + ?Sized,
    {
        source.next_raw().map(Self::new)
    }

    /// Column, 0-indexed, after overflow correction.
    pub fn x(&self) -> i32 {
        self.x
    }

    /// Row, 0-indexed, after overflow correction.
    pub fn y(&self) -> i32 {
        self.y
    }

    /// The button-state bitmask, including bits curses has no name for.
    pub fn button_state(&self) -> ButtonState {
        self.button_state
    }

    /// Whether button `n` was pressed.
    pub fn pressed(&self, n: i32) -> bool {
        self.button_state.intersects(mask::lookup(&mask::PRESSED, n))
    }

    /// Whether button `n` was released.
    pub fn released(&self, n: i32) -> bool {
        self.button_state.intersects(mask::lookup(&mask::RELEASED, n))
    }

    /// Whether button `n` was clicked.
    pub fn clicked(&self, n: i32) -> bool {
        self.button_state.intersects(mask::lookup(&mask::CLICKED, n))
    }

    /// Whether button `n` was double-clicked.
    pub fn double_clicked(&self, n: i32) -> bool {
        self.button_state.intersects(mask::lookup(&mask::DOUBLE_CLICKED, n))
    }

    /// Whether the control key was held.
    pub fn ctrl(&self) -> bool {
        self.button_state.intersects(ButtonState::BUTTON_CTRL)
    }

    /// Whether the alt key was held.
    pub fn alt(&self) -> bool {
        self.button_state.intersects(ButtonState::BUTTON_ALT)
    }

    /// Whether the shift key was held.
    pub fn shift(&self) -> bool {
        self.button_state.intersects(ButtonState::BUTTON_SHIFT)
    }

    /// Whether the bitmask lies above [`ALL_MOUSE_EVENTS`], i.e. names no real button.
    pub fn key_invalid(&self) -> bool {
        self.button_state.bits() > ALL_MOUSE_EVENTS
    }

    /// Direction of a wheel scroll: negative is up, positive is down, `0` is no scroll.
    ///
    /// One notch is `1`, or [`CTRL_SCROLLWHEEL_MULTIPLIER`] with control held.
    ///
    /// Wheel-up is button 4. Wheel-down has been reported three ways over the years,
    /// checked in this order:
    ///
    /// 1. button 2 pressed,
    /// 2. the dedicated [`SCROLL_DOWN_BIT`] of newer ncurses,
    /// 3. an invalid bitmask ([`key_invalid`](Self::key_invalid)), which is what
    ///    broken curses builds send for wheel-down.
    ///
    /// Case 3 means genuinely malformed reports also read as scroll-down.
    pub fn wheel_direction(&self) -> i32 {
        let distance = if self.ctrl() {
            CTRL_SCROLLWHEEL_MULTIPLIER
        } else {
            1
        };

        if self.pressed(4) {
            return -distance;
        }
        if self.pressed(2)
            || self.button_state.bits() & SCROLL_DOWN_BIT != 0
            || self.key_invalid()
        {
            return distance;
        }
        0
    }
}

impl From<RawMouseState> for MouseEvent {
    fn from(raw: RawMouseState) -> Self {
        Self::new(raw)
    }
}

fn correct_overflow(coordinate: i32) -> i32 {
    if coordinate < 0 {
        coordinate + COORDINATE_OVERFLOW_FIX
    } else {
        coordinate
    }
}
