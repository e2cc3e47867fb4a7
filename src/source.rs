//! Sources of raw mouse reports.
//!
//! [`MouseSource`] is the seam between this crate and whatever owns the terminal input
//! queue. It plays the role of curses' `getmouse()`: each call hands back exactly one raw
//! report, which [`MouseEvent::get`](crate::MouseEvent::get) then decodes.
//!
//! Two implementations ship with the crate:
//!
//! - [`ScriptedSource`]: an in-memory queue, for dispatchers fed from elsewhere and tests
//! - `CrosstermSource` (`crossterm` feature): reads the live terminal through crossterm
//!
//! # Example
//!
//! ```rust
//! use curses_mouse::{MouseEvent, MouseSource, RawMouseState, ScriptedSource};
//!
//! # fn main() -> curses_mouse::Result<()> {
//! let mut source: ScriptedSource = vec![
//!     RawMouseState::new(1, 1, 0),
//!     RawMouseState::new(2, 2, 0),
//! ]
//! .into();
//!
//! assert_eq!(MouseEvent::get(&mut source)?.x(), 1);
//! assert_eq!(source.next_raw()?.x, 2);
//! assert!(source.is_empty());
//! # Ok(())
//! # }
//! ```

use std::collections::VecDeque;

use tracing::trace;

use crate::error::{MouseError, Result};
use crate::event::RawMouseState;

/// Something that can produce raw curses mouse reports.
pub trait MouseSource {
    /// Returns the next raw report.
    ///
    /// Implementations backed by a terminal block until a mouse report is available.
    ///
    /// # Errors
    ///
    /// Returns [`MouseError::NoEvent`] when nothing is queued, [`MouseError::Timeout`]
    /// when a deadline expires, or [`MouseError::Io`] when the backend fails.
    fn next_raw(&mut self) -> Result<RawMouseState>;
}

impl<S> MouseSource for &mut S
where
    S: MouseSource + ?Sized,
{
    fn next_raw(&mut self) -> Result<RawMouseState> {
        (**self).next_raw()
    }
}

/// A FIFO of pre-recorded raw reports.
///
/// Returns [`MouseError::NoEvent`] once drained, which is how curses behaves when
/// `getmouse()` is called with an empty queue.
#[derive(Debug, Clone, Default)]
pub struct ScriptedSource {
    queue: VecDeque<RawMouseState>,
}

impl ScriptedSource {
    /// Creates an empty source.
    pub fn new() -> Self {
        Self::default()
    }

    /// Queues a report behind the ones already pending.
    pub fn push(&mut self, raw: RawMouseState) {
        self.queue.push_back(raw);
    }

    /// Builder-style [`push`](Self::push).
    #[must_use]
    pub fn with(mut self, raw: RawMouseState) -> Self {
        self.push(raw);
        self
    }

    /// Number of reports still queued.
    pub fn len(&self) -> usize {
        self.queue.len()
    }

    /// Whether the queue is drained.
    pub fn is_empty(&self) -> bool {
        self.queue.is_empty()
    }
}

impl MouseSource for ScriptedSource {
    fn next_raw(&mut self) -> Result<RawMouseState> {
        let raw = self.queue.pop_front().ok_or(MouseError::NoEvent)?;
        trace!(?raw, remaining = self.queue.len(), "scripted mouse report");
        Ok(raw)
    }
}

impl From<Vec<RawMouseState>> for ScriptedSource {
    fn from(reports: Vec<RawMouseState>) -> Self {
        Self {
            queue: reports.into(),
        }
    }
}

impl FromIterator<RawMouseState> for ScriptedSource {
    fn from_iter<I: IntoIterator<Item = RawMouseState>>(iter: I) -> Self {
        Self {
            queue: iter.into_iter().collect(),
        }
    }
}

impl Extend<RawMouseState> for ScriptedSource {
    fn extend<I: IntoIterator<Item = RawMouseState>>(&mut self, iter: I) {
        self.queue.extend(iter);
    }
}
