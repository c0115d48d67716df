// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Galene-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Galene and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

//! Key dispatch.
//!
//! Maps decoded key names to handlers, overlays caller handlers on the
//! built-in table, recognizes the two fixed cancellation sequences ahead of
//! any handler, and runs the listen loop that couples the session to raw
//! input mode. Raw mode is released exactly once on every exit path.

use std::collections::BTreeMap;
use std::io;

use smol_str::SmolStr;

use crate::session::{SelectError, SelectOutcome, SessionState};
use crate::term::{KeyEventSource, KeyPress, LineSink, RawModeSession};

const ESC_SEQUENCE: &[u8] = &[0x1b];
const CTRL_C_SEQUENCE: &[u8] = &[0x03];

/// Mutation surface handed to key handlers.
///
/// Every mutation validates its index and silently ignores out-of-range
/// values, so a handler cannot corrupt the session with a stray index.
pub struct HandlerContext<'s, 'a, T, P> {
    state: &'s mut SessionState<'a, T, P>,
    sink: &'s mut dyn LineSink,
}

impl<T, P> HandlerContext<'_, '_, T, P> {
    /// Current focus index.
    pub fn index(&self) -> usize {
        self.state.focus()
    }

    /// Moves the focus cursor and repaints on success.
    pub fn set_focus(&mut self, candidate: isize) -> io::Result<()> {
        self.state.set_focus(candidate, self.sink)
    }

    /// Toggles the mark at an index and repaints on success.
    pub fn toggle_mark(&mut self, candidate: isize) -> io::Result<()> {
        self.state.toggle_mark(candidate, self.sink)
    }

    /// Confirms the session without a termination payload.
    pub fn finish(&mut self) -> io::Result<()> {
        self.state.finish(None, self.sink)
    }

    /// Confirms the session with a termination payload.
    pub fn finish_with(&mut self, status: P) -> io::Result<()> {
        self.state.finish(Some(status), self.sink)
    }
}

/// A key handler. An error returned here propagates out of the listen loop
/// unchanged; the raw-mode guard still restores the input channel.
pub type KeyHandler<T, P> = Box<dyn FnMut(&mut HandlerContext<'_, '_, T, P>) -> io::Result<()>>;

pub(crate) type HandlerTable<T, P> = BTreeMap<SmolStr, KeyHandler<T, P>>;

/// The built-in table: `up`/`down` move the focus, `space` toggles the mark
/// at the focus, `return` confirms.
pub(crate) fn built_in_handlers<T, P>() -> HandlerTable<T, P> {
    let mut table: HandlerTable<T, P> = BTreeMap::new();
    table.insert(
        SmolStr::new("up"),
        Box::new(|ctx| {
            let index = ctx.index() as isize;
            ctx.set_focus(index - 1)
        }),
    );
    table.insert(
        SmolStr::new("down"),
        Box::new(|ctx| {
            let index = ctx.index() as isize;
            ctx.set_focus(index + 1)
        }),
    );
    table.insert(
        SmolStr::new("space"),
        Box::new(|ctx| {
            let index = ctx.index() as isize;
            ctx.toggle_mark(index)
        }),
    );
    table.insert(SmolStr::new("return"), Box::new(|ctx| ctx.finish()));
    table
}

/// Overlays caller handlers on the built-ins: the same name replaces the
/// built-in, new names extend the table, untouched built-ins stay active.
/// Evaluated once per session.
pub(crate) fn merge_handlers<T, P>(
    mut table: HandlerTable<T, P>,
    overlay: impl IntoIterator<Item = (SmolStr, KeyHandler<T, P>)>,
) -> HandlerTable<T, P> {
    table.extend(overlay);
    table
}

/// Cancellation is matched on the raw sequence, before any name lookup, so
/// it wins over every handler including caller overlays.
pub(crate) fn is_cancellation(press: &KeyPress) -> bool {
    press.sequence.as_slice() == ESC_SEQUENCE || press.sequence.as_slice() == CTRL_C_SEQUENCE
}

/// Runs the listen loop: enables raw mode under a guard, paints the list,
/// and dispatches presses in arrival order until a terminating handler
/// fills the outcome slot or a cancellation sequence arrives.
///
/// The loop stops reading the moment the session resolves, so no press
/// queued behind a confirm or cancel is ever dispatched.
pub(crate) fn listen<T, P>(
    source: &mut dyn KeyEventSource,
    sink: &mut dyn LineSink,
    state: &mut SessionState<'_, T, P>,
    handlers: &mut HandlerTable<T, P>,
) -> Result<SelectOutcome<P>, SelectError> {
    let mut session = RawModeSession::new(source)?;
    state.paint(sink)?;

    loop {
        let press = session.next_key()?;
        if is_cancellation(&press) {
            state.erase(sink)?;
            return Err(SelectError::Canceled);
        }
        let Some(name) = press.name.as_ref() else {
            continue;
        };
        if let Some(handler) = handlers.get_mut(name.as_str()) {
            let mut ctx = HandlerContext { state: &mut *state, sink: &mut *sink };
            handler(&mut ctx)?;
        }
        if let Some(outcome) = state.take_outcome() {
            return Ok(outcome);
        }
    }
}
