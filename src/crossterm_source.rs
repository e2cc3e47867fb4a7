//! Live mouse reports through crossterm.
//!
//! crossterm already parses the terminal's mouse protocol into structured events. This
//! module folds those events back into the curses bitmask so the rest of an application
//! can keep using one decoding path ([`MouseEvent`](crate::MouseEvent)) regardless of
//! where the reports come from.
//!
//! Mapping:
//!
//! | crossterm                   | curses bits                                          |
//! |-----------------------------|------------------------------------------------------|
//! | `Down(Left/Middle/Right)`   | `BUTTON1/2/3_PRESSED`                                |
//! | `Up(Left/Middle/Right)`     | `BUTTON1/2/3_RELEASED`                               |
//! | `Drag(_)`, `Moved`          | none (`REPORT_MOUSE_POSITION` reads as wheel-down)   |
//! | `ScrollUp`                  | `BUTTON4_PRESSED`                                    |
//! | `ScrollDown`                | `SCROLL_DOWN_BIT` (ABI v2), an invalid bit (ABI v1)  |
//! | `ScrollLeft`, `ScrollRight` | none (curses has no horizontal wheel)                |
//!
//! Mouse capture must already be enabled on the terminal
//! (`crossterm::event::EnableMouseCapture`); this module only reads.

use std::collections::VecDeque;
use std::time::{Duration, Instant};

use crossterm::event::{self, Event, KeyModifiers, MouseButton, MouseEventKind};
use tracing::{debug, trace};

use crate::error::{MouseError, Result};
use crate::event::RawMouseState;
use crate::mask::ButtonState;
#[cfg(not(feature = "ncurses-mouse-v1"))]
use crate::mask::SCROLL_DOWN_BIT;
use crate::source::MouseSource;

/// Bits reported for a crossterm wheel-down.
#[cfg(not(feature = "ncurses-mouse-v1"))]
const WHEEL_DOWN: u64 = SCROLL_DOWN_BIT;

/// Bit 21 is `BUTTON4_DOUBLE_CLICKED` in the v1 layout, so wheel-down uses the first
/// unnamed bit above `ALL_MOUSE_EVENTS` and resolves through `key_invalid`.
#[cfg(feature = "ncurses-mouse-v1")]
const WHEEL_DOWN: u64 = ButtonState::REPORT_MOUSE_POSITION.bits() << 1;

impl From<event::MouseEvent> for RawMouseState {
    fn from(mouse: event::MouseEvent) -> Self {
        let mut state = match mouse.kind {
            MouseEventKind::Down(button) => pressed_flag(button),
            MouseEventKind::Up(button) => released_flag(button),
            MouseEventKind::ScrollUp => ButtonState::BUTTON4_PRESSED,
            MouseEventKind::ScrollDown => ButtonState::from_bits_retain(WHEEL_DOWN),
            MouseEventKind::Drag(_)
            | MouseEventKind::Moved
            | MouseEventKind::ScrollLeft
            | MouseEventKind::ScrollRight => ButtonState::empty(),
        };

        if mouse.modifiers.contains(KeyModifiers::CONTROL) {
            state |= ButtonState::BUTTON_CTRL;
        }
        if mouse.modifiers.contains(KeyModifiers::ALT) {
            state |= ButtonState::BUTTON_ALT;
        }
        if mouse.modifiers.contains(KeyModifiers::SHIFT) {
            state |= ButtonState::BUTTON_SHIFT;
        }

        let x = i32::from(mouse.column);
        let y = i32::from(mouse.row);
        RawMouseState::new(x, y, state.bits())
    }
}

fn pressed_flag(button: MouseButton) -> ButtonState {
    match button {
        MouseButton::Left => ButtonState::BUTTON1_PRESSED,
        MouseButton::Middle => ButtonState::BUTTON2_PRESSED,
        MouseButton::Right => ButtonState::BUTTON3_PRESSED,
    }
}

fn released_flag(button: MouseButton) -> ButtonState {
    match button {
        MouseButton::Left => ButtonState::BUTTON1_RELEASED,
        MouseButton::Middle => ButtonState::BUTTON2_RELEASED,
        MouseButton::Right => ButtonState::BUTTON3_RELEASED,
    }
}

/// Reads mouse reports from the terminal via crossterm.
///
/// crossterm has a single input queue, so keys, resizes and pastes that arrive while
/// waiting for a mouse report have to be read too. They are held in arrival order
/// until the caller collects them with [`take_skipped`](Self::take_skipped).
///
/// # Example
///
/// ```rust,no_run
/// use std::time::Duration;
///
/// use curses_mouse::{CrosstermSource, MouseEvent};
///
/// # fn main() -> curses_mouse::Result<()> {
/// let mut source = CrosstermSource::new().with_timeout(Duration::from_millis(500));
/// let event = MouseEvent::get(&mut source)?;
/// println!("wheel: {}", event.wheel_direction());
///
/// for other in source.take_skipped() {
///     println!("not a mouse event: {other:?}");
/// }
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Clone, Default)]
pub struct CrosstermSource {
    timeout: Option<Duration>,
    skipped: VecDeque<Event>,
}

impl CrosstermSource {
    /// Creates a source that blocks until a mouse report arrives.
    pub fn new() -> Self {
        Self::default()
    }

    /// Gives up with [`MouseError::Timeout`] if no mouse report arrives within `timeout`.
    #[must_use]
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = Some(timeout);
        self
    }

    /// The configured deadline, if any.
    pub fn timeout(&self) -> Option<Duration> {
        self.timeout
    }

    /// Hands back the non-mouse events read while waiting, oldest first.
    pub fn take_skipped(&mut self) -> Vec<Event> {
        self.skipped.drain(..).collect()
    }

    /// Whether non-mouse events are waiting in [`take_skipped`](Self::take_skipped).
    pub fn has_skipped(&self) -> bool {
        !self.skipped.is_empty()
    }

    /// Returns the raw report for a mouse event; holds anything else.
    fn accept(&mut self, input: Event) -> Option<RawMouseState> {
        match input {
            Event::Mouse(mouse) => {
                let raw = RawMouseState::from(mouse);
                trace!(?mouse, ?raw, "crossterm mouse report");
                Some(raw)
            }
            other => {
                trace!(?other, "holding non-mouse event");
                self.skipped.push_back(other);
                None
            }
        }
    }

    fn timeout_error(&self) -> MouseError {
        let timeout = self.timeout.unwrap_or_default();
        let timeout_ms = u64::try_from(timeout.as_millis()).unwrap_or(u64::MAX);
        debug!(timeout_ms, "no mouse event before deadline");
        MouseError::Timeout { timeout_ms }
    }
}

impl MouseSource for CrosstermSource {
    fn next_raw(&mut self) -> Result<RawMouseState> {
        let deadline = self.timeout.map(|timeout| Instant::now() + timeout);

        loop {
            if let Some(deadline) = deadline {
                let remaining = deadline.saturating_duration_since(Instant::now());
                if !event::poll(remaining)? {
                    return Err(self.timeout_error());
                }
            }

            if let Some(raw) = self.accept(event::read()?) {
                return Ok(raw);
            }
        }
    }
}
