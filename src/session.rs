// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Galene-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Galene and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

//! Session state machine.
//!
//! Owns the focus cursor, the mark set, and the line count of the most
//! recent paint. Every operation validates first, mutates only on success,
//! and repaints exactly when it mutates; rejected input is silently ignored
//! so stray indices from custom handlers cannot crash a session.

use std::fmt;
use std::io;

use crate::marks::{MarkSet, MarkSnapshot};
use crate::render::{clear_list, render_list, PrintItem};
use crate::term::LineSink;

/// Resolved state of a confirmed session.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SelectOutcome<P> {
    /// Payload passed by the terminating handler (`None` for the built-in
    /// confirm handler).
    pub status: Option<P>,
    /// Focus index at confirmation time.
    pub index: usize,
    /// Mark state at confirmation time.
    pub checks: MarkSnapshot,
}

/// Failure outcome of a session.
///
/// Either way, the input channel is restored before the error becomes
/// observable; cancellation additionally erases the rendered list first.
#[derive(Debug)]
pub enum SelectError {
    /// The user canceled with ESC or Ctrl-C.
    Canceled,
    /// A terminal read or write failed, or a caller handler reported an
    /// error.
    Io(io::Error),
}

impl fmt::Display for SelectError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Canceled => f.write_str("Canceled"),
            Self::Io(err) => write!(f, "terminal i/o failed: {err}"),
        }
    }
}

impl std::error::Error for SelectError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Canceled => None,
            Self::Io(err) => Some(err),
        }
    }
}

impl From<io::Error> for SelectError {
    fn from(err: io::Error) -> Self {
        Self::Io(err)
    }
}

pub(crate) struct SessionState<'a, T, P> {
    items: &'a [T],
    print_item: &'a PrintItem<T>,
    focus: usize,
    marks: MarkSet,
    line_count: usize,
    // One-shot completion slot; written at most once per session.
    outcome: Option<SelectOutcome<P>>,
}

impl<'a, T, P> SessionState<'a, T, P> {
    /// An out-of-range initial focus falls back to 0.
    pub(crate) fn new(
        items: &'a [T],
        print_item: &'a PrintItem<T>,
        initial_focus: usize,
        marks: MarkSet,
    ) -> Self {
        let focus = if initial_focus < items.len() { initial_focus } else { 0 };
        Self { items, print_item, focus, marks, line_count: 0, outcome: None }
    }

    pub(crate) fn focus(&self) -> usize {
        self.focus
    }

    pub(crate) fn line_count(&self) -> usize {
        self.line_count
    }

    pub(crate) fn is_finished(&self) -> bool {
        self.outcome.is_some()
    }

    pub(crate) fn take_outcome(&mut self) -> Option<SelectOutcome<P>> {
        self.outcome.take()
    }

    /// Paints the list and records the line count for the next erase.
    pub(crate) fn paint(&mut self, sink: &mut dyn LineSink) -> io::Result<()> {
        self.line_count =
            render_list(sink, self.items, self.print_item, self.focus, &self.marks)?;
        Ok(())
    }

    fn repaint(&mut self, sink: &mut dyn LineSink) -> io::Result<()> {
        clear_list(sink, self.line_count)?;
        self.paint(sink)
    }

    /// Moves the focus cursor. Out-of-range candidates and the current
    /// focus are no-ops without a repaint.
    pub(crate) fn set_focus(
        &mut self,
        candidate: isize,
        sink: &mut dyn LineSink,
    ) -> io::Result<()> {
        let Some(target) = self.index_in_range(candidate) else {
            return Ok(());
        };
        if target == self.focus {
            return Ok(());
        }
        self.focus = target;
        self.repaint(sink)
    }

    /// Toggles the mark at `candidate`. Out-of-range candidates are no-ops
    /// without a repaint.
    pub(crate) fn toggle_mark(
        &mut self,
        candidate: isize,
        sink: &mut dyn LineSink,
    ) -> io::Result<()> {
        let Some(target) = self.index_in_range(candidate) else {
            return Ok(());
        };
        self.marks.toggle(target);
        self.repaint(sink)
    }

    /// Freezes focus and marks, erases the final paint, and fills the
    /// outcome slot. A second call is a no-op.
    pub(crate) fn finish(
        &mut self,
        status: Option<P>,
        sink: &mut dyn LineSink,
    ) -> io::Result<()> {
        if self.outcome.is_some() {
            return Ok(());
        }
        clear_list(sink, self.line_count)?;
        self.line_count = 0;
        self.outcome = Some(SelectOutcome {
            status,
            index: self.focus,
            checks: self.marks.snapshot(),
        });
        Ok(())
    }

    /// Erases the current paint without producing an outcome; the
    /// cancellation path.
    pub(crate) fn erase(&mut self, sink: &mut dyn LineSink) -> io::Result<()> {
        clear_list(sink, self.line_count)?;
        self.line_count = 0;
        Ok(())
    }

    fn index_in_range(&self, candidate: isize) -> Option<usize> {
        if candidate < 0 {
            return None;
        }
        let candidate = candidate as usize;
        (candidate < self.items.len()).then_some(candidate)
    }
}
