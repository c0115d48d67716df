// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Galene-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Galene and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

//! Galene — interactive terminal list selection.
//!
//! Renders an item list inline (no alternate screen), moves a focus cursor,
//! toggles single or multiple marks, and resolves once the user confirms or
//! cancels. Behavior is extensible through a key-name → handler overlay;
//! ESC and Ctrl-C always cancel, ahead of any handler.

pub mod dispatch;
pub mod marks;
pub mod prompt;
pub mod render;
pub mod session;
pub mod term;

#[cfg(test)]
pub(crate) mod test_utils;

pub use dispatch::{HandlerContext, KeyHandler};
pub use marks::MarkSnapshot;
pub use prompt::{run_selection_session, run_selection_session_with_io, SelectOptions};
pub use render::PrintItem;
pub use session::{SelectError, SelectOutcome};
pub use term::{CrosstermKeys, KeyEventSource, KeyPress, LineSink, StdoutSink};
