// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Galene-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Galene and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

//! Shared doubles for exercising the interactive loop without a terminal.

use std::collections::VecDeque;
use std::io;

use crate::term::{KeyEventSource, KeyPress, LineSink};

/// Builds a press the way the crossterm decoder would, for the names the
/// built-in handler table knows about.
pub(crate) fn key(name: &str) -> KeyPress {
    let sequence: &[u8] = match name {
        "up" => b"\x1b[A",
        "down" => b"\x1b[B",
        "space" => b" ",
        "return" => b"\r",
        other => {
            assert_eq!(other.len(), 1, "single-character key expected");
            return KeyPress::named(other, other.as_bytes());
        }
    };
    KeyPress::named(name, sequence)
}

pub(crate) fn esc() -> KeyPress {
    KeyPress::named("escape", &[0x1b])
}

pub(crate) fn ctrl_c() -> KeyPress {
    KeyPress::named("c", &[0x03])
}

/// Scripted key source; records every raw-mode transition.
pub(crate) struct ScriptedKeys {
    queue: VecDeque<KeyPress>,
    pub(crate) raw_mode_calls: Vec<bool>,
}

impl ScriptedKeys {
    pub(crate) fn new(presses: impl IntoIterator<Item = KeyPress>) -> Self {
        Self { queue: presses.into_iter().collect(), raw_mode_calls: Vec::new() }
    }

    /// Presses the loop never consumed.
    pub(crate) fn remaining(&self) -> usize {
        self.queue.len()
    }
}

impl KeyEventSource for ScriptedKeys {
    fn set_raw_mode(&mut self, enabled: bool) -> io::Result<()> {
        self.raw_mode_calls.push(enabled);
        Ok(())
    }

    fn next_key(&mut self) -> io::Result<KeyPress> {
        self.queue
            .pop_front()
            .ok_or_else(|| io::Error::new(io::ErrorKind::UnexpectedEof, "key script exhausted"))
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) enum SinkOp {
    Write(String),
    CursorUp,
    ClearLine,
}

/// Records every sink operation for assertions.
#[derive(Debug, Default)]
pub(crate) struct CaptureSink {
    pub(crate) ops: Vec<SinkOp>,
}

impl CaptureSink {
    pub(crate) fn new() -> Self {
        Self::default()
    }

    /// All written text, concatenated in order.
    pub(crate) fn written(&self) -> String {
        self.ops
            .iter()
            .filter_map(|op| match op {
                SinkOp::Write(text) => Some(text.as_str()),
                _ => None,
            })
            .collect()
    }

    pub(crate) fn cursor_up_count(&self) -> usize {
        self.ops.iter().filter(|op| **op == SinkOp::CursorUp).count()
    }

    pub(crate) fn clear_line_count(&self) -> usize {
        self.ops.iter().filter(|op| **op == SinkOp::ClearLine).count()
    }
}

impl LineSink for CaptureSink {
    fn write(&mut self, text: &str) -> io::Result<()> {
        self.ops.push(SinkOp::Write(text.to_owned()));
        Ok(())
    }

    fn cursor_up(&mut self) -> io::Result<()> {
        self.ops.push(SinkOp::CursorUp);
        Ok(())
    }

    fn clear_line(&mut self) -> io::Result<()> {
        self.ops.push(SinkOp::ClearLine);
        Ok(())
    }
}
