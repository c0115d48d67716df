// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Galene-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Galene and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

//! Inline list rendering.
//!
//! Paints the item list as plain terminal lines and reverses a previous
//! paint with count-driven cursor-up/clear pairs, so the prompt repaints in
//! place without owning the whole screen. The erase is blind: it trusts the
//! recorded line count of the paint it reverses, never the line contents.

use std::io;

use crate::marks::MarkSet;
use crate::term::LineSink;

/// Formats one item for display: item, index, whether it holds the focus
/// cursor, whether it is marked. May return multiple lines.
pub type PrintItem<T> = dyn Fn(&T, usize, bool, bool) -> String;

/// Paints every item in order and returns the total number of emitted
/// lines.
///
/// The first line of an item carries the marker prefix: `-` in column one
/// when focused (space otherwise), then `[*]` when marked (`[ ]`
/// otherwise), then one space. Continuation lines get an all-space prefix
/// of equal width so multi-line items stay aligned under their marker.
pub(crate) fn render_list<T>(
    sink: &mut dyn LineSink,
    items: &[T],
    print_item: &PrintItem<T>,
    focus: usize,
    marks: &MarkSet,
) -> io::Result<usize> {
    let mut line_count = 0;
    for (index, item) in items.iter().enumerate() {
        let focused = index == focus;
        let marked = marks.has(index);
        let text = print_item(item, index, focused, marked);

        let focus_ch = if focused { '-' } else { ' ' };
        let mark_ch = if marked { '*' } else { ' ' };
        let prefix = format!("{focus_ch}[{mark_ch}] ");
        let pad = " ".repeat(prefix.len());

        let mut lines = text.split('\n');
        let first = lines.next().unwrap_or("");
        sink.write(&format!("{prefix}{first}\n"))?;
        line_count += 1;
        for line in lines {
            sink.write(&format!("{pad}{line}\n"))?;
            line_count += 1;
        }
    }
    Ok(line_count)
}

/// Erases a previous paint of `line_count` lines: one cursor-up plus one
/// line-clear per painted line, newest line first.
pub(crate) fn clear_list(sink: &mut dyn LineSink, line_count: usize) -> io::Result<()> {
    for _ in 0..line_count {
        sink.cursor_up()?;
        sink.clear_line()?;
    }
    Ok(())
}
