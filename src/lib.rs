//! # curses_mouse
//!
//! Decode curses mouse reports into queryable events.
//!
//! ## Overview
//!
//! curses describes each mouse event as a raw `(id, x, y, z, bstate)` record, where
//! `bstate` is a bitmask whose meaning shifts between ncurses versions and whose
//! contents are not always trustworthy across terminal emulators. `curses_mouse` turns
//! that record into a [`MouseEvent`] that answers the questions an input dispatcher
//! actually asks:
//!
//! - **Buttons**: was button *n* pressed, released, clicked or double-clicked?
//! - **Modifiers**: were ctrl, alt or shift held?
//! - **Scroll wheel**: did the wheel move, and which way?
//!
//! It also carries the compatibility fixes that make those answers usable in practice:
//! coordinate overflow correction for wide terminals, and the several historical ways
//! terminals have reported wheel-down.
//!
//! ## Quick Start
//!
//! ```rust
//! use curses_mouse::mask::ButtonState;
//! use curses_mouse::{MouseEvent, RawMouseState};
//!
//! // Wheel-up with control held, reported at an overflowed column.
//! let bstate = (ButtonState::BUTTON4_PRESSED | ButtonState::BUTTON_CTRL).bits();
//! let event = MouseEvent::new(RawMouseState::from((0, -20, 10, 0, bstate)));
//!
//! assert_eq!(event.x(), 235);
//! assert!(event.ctrl());
//! assert_eq!(event.wheel_direction(), -5);
//!
//! // Probing buttons that do not exist is fine.
//! assert!((5..=8).all(|n| !event.pressed(n)));
//! ```
//!
//! ## Reading Events
//!
//! Raw reports come from a [`MouseSource`]. [`ScriptedSource`] replays a fixed queue;
//! with the `crossterm` feature, `CrosstermSource` reads the live terminal.
//!
//! ```rust
//! use curses_mouse::{MouseError, MouseEvent, RawMouseState, ScriptedSource};
//!
//! # fn main() -> curses_mouse::Result<()> {
//! let mut source = ScriptedSource::from(vec![RawMouseState::new(3, 4, 0)]);
//!
//! let event = MouseEvent::get(&mut source)?;
//! assert_eq!((event.x(), event.y()), (3, 4));
//! assert!(matches!(MouseEvent::get(&mut source), Err(MouseError::NoEvent)));
//! # Ok(())
//! # }
//! ```
//!
//! ## Feature Flags
//!
//! - `crossterm`: Enable `CrosstermSource` and conversion from crossterm mouse events
//! - `ncurses-mouse-v1`: Use the ncurses mouse ABI version 1 bit layout
//! - `full`: Enable all optional backends
//!
//! ## Logging
//!
//! The crate emits [`tracing`] events (coordinate corrections at `debug`, raw reports at
//! `trace`) and never installs a subscriber itself.

#![warn(
    missing_docs,
    missing_debug_implementations,
    rust_2018_idioms,
    unreachable_pub
)]
#![deny(unsafe_code)]

mod error;
mod event;
pub mod mask;
mod source;

#[cfg(feature = "crossterm")]
mod crossterm_source;

// Public API exports
pub use error::{MouseError, Result};
pub use event::{MouseEvent, RawMouseState, CTRL_SCROLLWHEEL_MULTIPLIER};
pub use mask::ButtonState;
pub use source::{MouseSource, ScriptedSource};

#[cfg(feature = "crossterm")]
pub use crossterm_source::CrosstermSource;
