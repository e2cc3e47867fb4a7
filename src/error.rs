//! Error types for curses_mouse.
//!
//! Decoding a mouse report never fails. The only fallible operation is reading a raw
//! report from a [`MouseSource`](crate::MouseSource), so [`MouseError`] covers the ways
//! a source can come back empty-handed. [`Result<T>`] is a type alias for convenience.
//!
//! # Examples
//!
//! ```rust
//! use curses_mouse::{MouseError, MouseEvent, ScriptedSource};
//!
//! let mut source = ScriptedSource::new();
//!
//! match MouseEvent::get(&mut source) {
//!     Ok(event) => println!("mouse at ({}, {})", event.x(), event.y()),
//!     Err(MouseError::NoEvent) => println!("nothing queued"),
//!     Err(e) => eprintln!("Error: {}", e),
//! }
//! ```

use std::io;
use thiserror::Error;

/// Result type alias for curses_mouse operations.
///
/// This is a convenience alias for `std::result::Result<T, MouseError>`.
pub type Result<T> = std::result::Result<T, MouseError>;

/// Errors that can occur while reading mouse reports.
///
/// # Variants
///
/// - [`MouseError::Io`]: The terminal backend failed to read input
/// - [`MouseError::Timeout`]: No mouse report arrived before the deadline
/// - [`MouseError::NoEvent`]: The source has no report queued
#[derive(Debug, Error)]
pub enum MouseError {
    /// Standard I/O error.
    ///
    /// Raised by terminal backends when reading or polling the input queue fails.
    /// Automatically converted via `From` trait.
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    /// Timeout waiting for a mouse report.
    ///
    /// Returned by sources configured with a deadline, such as
    /// `CrosstermSource::with_timeout`, when no mouse report arrives in time.
    /// Non-mouse input received while waiting does not extend the deadline.
    #[error("Timeout waiting for mouse event after {timeout_ms}ms")]
    Timeout {
        /// Timeout duration in milliseconds.
        timeout_ms: u64,
    },

    /// No mouse report is available.
    ///
    /// This is the equivalent of curses' `getmouse()` returning `ERR`: the caller
    /// asked for a report when none was queued.
    #[error("No mouse event is queued")]
    NoEvent,
}
