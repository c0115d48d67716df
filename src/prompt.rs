// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Galene-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Galene and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

//! Session orchestration.
//!
//! Wires options, mark set, state machine, renderer, and dispatcher into a
//! single blocking call that resolves exactly once: the final selection on
//! confirm, [`SelectError::Canceled`] on ESC / Ctrl-C.

use std::fmt::Display;
use std::io;

use smol_str::SmolStr;

use crate::dispatch::{built_in_handlers, listen, merge_handlers, HandlerContext, KeyHandler};
use crate::marks::{MarkSeed, MarkSet};
use crate::session::{SelectError, SelectOutcome, SessionState};
use crate::term::{CrosstermKeys, KeyEventSource, LineSink, StdoutSink};

/// Configuration for one selection session.
///
/// `P` is the termination payload type a custom confirm handler may attach
/// via [`HandlerContext::finish_with`]; it defaults to `()` for sessions
/// that only use the built-in confirm.
pub struct SelectOptions<T, P = ()> {
    index: usize,
    seed: MarkSeed,
    print_item: Box<dyn Fn(&T, usize, bool, bool) -> String>,
    handlers: Vec<(SmolStr, KeyHandler<T, P>)>,
}

impl<T: Display, P> SelectOptions<T, P> {
    /// Multiple-mark session, no seed marks, focus at 0, items rendered
    /// through their `Display` impl.
    pub fn new() -> Self {
        Self {
            index: 0,
            seed: MarkSeed::Multiple(Vec::new()),
            print_item: Box::new(|item, _, _, _| item.to_string()),
            handlers: Vec::new(),
        }
    }
}

impl<T: Display, P> Default for SelectOptions<T, P> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T, P> SelectOptions<T, P> {
    /// Initial focus candidate; values outside the item range fall back
    /// to 0 at session start.
    pub fn with_index(mut self, index: usize) -> Self {
        self.index = index;
        self
    }

    /// Selects the multiple-mark variant with the given seed marks.
    pub fn with_checks(mut self, checks: impl IntoIterator<Item = usize>) -> Self {
        self.seed = MarkSeed::Multiple(checks.into_iter().collect());
        self
    }

    /// Selects the single-mark variant with an optional seed mark.
    pub fn with_single_check(mut self, check: Option<usize>) -> Self {
        self.seed = MarkSeed::Single(check);
        self
    }

    /// Replaces the item formatter. The formatter may return multiple
    /// lines; continuation lines are aligned under the marker.
    pub fn with_print_item(
        mut self,
        print_item: impl Fn(&T, usize, bool, bool) -> String + 'static,
    ) -> Self {
        self.print_item = Box::new(print_item);
        self
    }

    /// Overlays one handler on the built-in table. The same name replaces
    /// the built-in, a new name extends the table; the cancellation
    /// sequences stay out of reach either way.
    pub fn with_handler(
        mut self,
        name: &str,
        handler: impl FnMut(&mut HandlerContext<'_, '_, T, P>) -> io::Result<()> + 'static,
    ) -> Self {
        self.handlers.push((SmolStr::new(name), Box::new(handler)));
        self
    }
}

/// Runs a selection session on the process terminal (crossterm key events
/// on stdin, inline rendering on stdout).
///
/// Blocks until the user confirms or cancels. The terminal is left with
/// the rendered list erased and raw mode restored on every exit path.
pub fn run_selection_session<T, P>(
    items: &[T],
    options: SelectOptions<T, P>,
) -> Result<SelectOutcome<P>, SelectError> {
    let mut source = CrosstermKeys;
    let mut sink = StdoutSink;
    run_selection_session_with_io(items, options, &mut source, &mut sink)
}

/// Runs a selection session against explicit terminal collaborators.
///
/// This is the seam for tests and for embedding the prompt behind custom
/// event plumbing: any [`KeyEventSource`] / [`LineSink`] pair works.
pub fn run_selection_session_with_io<T, P>(
    items: &[T],
    options: SelectOptions<T, P>,
    source: &mut dyn KeyEventSource,
    sink: &mut dyn LineSink,
) -> Result<SelectOutcome<P>, SelectError> {
    let SelectOptions { index, seed, print_item, handlers } = options;
    let marks = MarkSet::from_seed(seed);
    let mut state = SessionState::new(items, print_item.as_ref(), index, marks);
    let mut table = merge_handlers(built_in_handlers(), handlers);
    listen(source, sink, &mut state, &mut table)
}
