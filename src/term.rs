// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Galene-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Galene and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

//! Terminal collaborators.
//!
//! The interactive loop talks to the terminal through two narrow traits so
//! tests can substitute scripted key events and a capturing sink. The default
//! implementations drive the process terminal through crossterm.

use std::io;

use crossterm::{
    cursor,
    event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers},
    execute,
    style::Print,
    terminal::{disable_raw_mode, enable_raw_mode, Clear, ClearType},
};
use smallvec::SmallVec;
use smol_str::SmolStr;

/// A decoded key press: the platform layer's decoded key name (when it has
/// one) plus the raw byte sequence that produced it.
///
/// Cancellation is matched against `sequence`; handler dispatch goes by
/// `name`. Presses without a name are ignored by the dispatcher.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct KeyPress {
    pub name: Option<SmolStr>,
    pub sequence: SmallVec<[u8; 8]>,
}

impl KeyPress {
    pub fn named(name: &str, sequence: &[u8]) -> Self {
        Self { name: Some(SmolStr::new(name)), sequence: SmallVec::from_slice(sequence) }
    }

    pub fn unnamed(sequence: &[u8]) -> Self {
        Self { name: None, sequence: SmallVec::from_slice(sequence) }
    }
}

/// Source of decoded key presses, with control over raw input mode.
pub trait KeyEventSource {
    fn set_raw_mode(&mut self, enabled: bool) -> io::Result<()>;

    /// Blocks until the next key press.
    fn next_key(&mut self) -> io::Result<KeyPress>;
}

/// Output sink with relative cursor movement and current-line clearing.
pub trait LineSink {
    fn write(&mut self, text: &str) -> io::Result<()>;

    /// Moves the cursor up one line, keeping the column.
    fn cursor_up(&mut self) -> io::Result<()>;

    /// Clears the line the cursor is on.
    fn clear_line(&mut self) -> io::Result<()>;
}

/// Key source reading crossterm events from the process terminal.
///
/// Non-key events and release/repeat reports are skipped, so `next_key`
/// yields press events only.
#[derive(Debug, Default)]
pub struct CrosstermKeys;

impl KeyEventSource for CrosstermKeys {
    fn set_raw_mode(&mut self, enabled: bool) -> io::Result<()> {
        if enabled {
            enable_raw_mode()
        } else {
            disable_raw_mode()
        }
    }

    fn next_key(&mut self) -> io::Result<KeyPress> {
        loop {
            if let Event::Key(key) = event::read()? {
                if key.kind != KeyEventKind::Press {
                    continue;
                }
                if let Some(press) = decode_key(&key) {
                    return Ok(press);
                }
            }
        }
    }
}

/// Sink writing to stdout through crossterm commands.
#[derive(Debug, Default)]
pub struct StdoutSink;

impl LineSink for StdoutSink {
    fn write(&mut self, text: &str) -> io::Result<()> {
        // Raw mode turns off output post-processing, so a bare LF would not
        // return the carriage.
        execute!(io::stdout(), Print(text.replace('\n', "\r\n")))
    }

    fn cursor_up(&mut self) -> io::Result<()> {
        execute!(io::stdout(), cursor::MoveUp(1))
    }

    fn clear_line(&mut self) -> io::Result<()> {
        execute!(io::stdout(), Clear(ClearType::CurrentLine))
    }
}

/// Maps a crossterm key event to a named press plus its raw sequence, in
/// the shape the dispatcher expects: lowercase letter names, `space`,
/// `return`, `escape`, arrow and navigation names, C0 bytes for
/// control-letter chords.
pub(crate) fn decode_key(key: &KeyEvent) -> Option<KeyPress> {
    if key.modifiers.contains(KeyModifiers::CONTROL) {
        if let KeyCode::Char(ch) = key.code {
            let ch = ch.to_ascii_lowercase();
            if ch.is_ascii_lowercase() {
                let byte = ch as u8 - b'a' + 1;
                return Some(KeyPress::named(&ch.to_string(), &[byte]));
            }
        }
        return None;
    }

    let press = match key.code {
        KeyCode::Up => KeyPress::named("up", b"\x1b[A"),
        KeyCode::Down => KeyPress::named("down", b"\x1b[B"),
        KeyCode::Right => KeyPress::named("right", b"\x1b[C"),
        KeyCode::Left => KeyPress::named("left", b"\x1b[D"),
        KeyCode::Home => KeyPress::named("home", b"\x1b[H"),
        KeyCode::End => KeyPress::named("end", b"\x1b[F"),
        KeyCode::PageUp => KeyPress::named("pageup", b"\x1b[5~"),
        KeyCode::PageDown => KeyPress::named("pagedown", b"\x1b[6~"),
        KeyCode::Delete => KeyPress::named("delete", b"\x1b[3~"),
        KeyCode::Backspace => KeyPress::named("backspace", &[0x7f]),
        KeyCode::Tab => KeyPress::named("tab", b"\t"),
        KeyCode::Enter => KeyPress::named("return", b"\r"),
        KeyCode::Esc => KeyPress::named("escape", &[0x1b]),
        KeyCode::Char(' ') => KeyPress::named("space", b" "),
        KeyCode::Char(ch) => {
            let mut buf = [0u8; 4];
            let sequence = ch.encode_utf8(&mut buf).as_bytes().to_vec();
            let name = ch.to_lowercase().collect::<String>();
            KeyPress { name: Some(SmolStr::new(name)), sequence: SmallVec::from_vec(sequence) }
        }
        _ => return None,
    };
    Some(press)
}

/// Pairs one raw-mode enable with exactly one restore, on every exit path
/// of the listen loop (confirm, cancel, propagated error).
pub(crate) struct RawModeSession<'a> {
    source: &'a mut dyn KeyEventSource,
}

impl<'a> RawModeSession<'a> {
    pub(crate) fn new(source: &'a mut dyn KeyEventSource) -> io::Result<Self> {
        source.set_raw_mode(true)?;
        Ok(Self { source })
    }

    pub(crate) fn next_key(&mut self) -> io::Result<KeyPress> {
        self.source.next_key()
    }
}

impl Drop for RawModeSession<'_> {
    fn drop(&mut self) {
        let _ = self.source.set_raw_mode(false);
    }
}
