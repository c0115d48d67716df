// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Galene-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Galene and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

//! Mark tracking for selection sessions.
//!
//! A mark set records which item indices are currently marked. The multiple
//! variant keeps an ordered index set; the single variant keeps at most one
//! index. Index validity is the session state machine's responsibility, so
//! the operations here never fail.

use std::collections::BTreeSet;

/// Mark-set variant selection plus its seed marks, as taken from options.
///
/// Seeds are used as given; an empty or absent seed is valid, so there is no
/// defensive range check at construction.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MarkSeed {
    Multiple(Vec<usize>),
    Single(Option<usize>),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) enum MarkSet {
    Multiple(BTreeSet<usize>),
    Single(Option<usize>),
}

impl MarkSet {
    pub(crate) fn from_seed(seed: MarkSeed) -> Self {
        match seed {
            MarkSeed::Multiple(indices) => Self::Multiple(indices.into_iter().collect()),
            MarkSeed::Single(index) => Self::Single(index),
        }
    }

    /// Marks `index` if unmarked, unmarks it if marked. In the single
    /// variant, marking moves the one mark to `index`.
    pub(crate) fn toggle(&mut self, index: usize) {
        match self {
            Self::Multiple(set) => {
                if !set.remove(&index) {
                    set.insert(index);
                }
            }
            Self::Single(slot) => {
                *slot = if *slot == Some(index) { None } else { Some(index) };
            }
        }
    }

    pub(crate) fn has(&self, index: usize) -> bool {
        match self {
            Self::Multiple(set) => set.contains(&index),
            Self::Single(slot) => *slot == Some(index),
        }
    }

    pub(crate) fn snapshot(&self) -> MarkSnapshot {
        match self {
            Self::Multiple(set) => MarkSnapshot::Multiple(set.iter().copied().collect()),
            Self::Single(slot) => MarkSnapshot::Single(*slot),
        }
    }
}

/// Final mark state carried by a resolved session.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MarkSnapshot {
    /// Marked indices in ascending order, without duplicates.
    Multiple(Vec<usize>),
    /// The marked index, or `None` when nothing is marked.
    Single(Option<usize>),
}

#[cfg(test)]
mod tests {
    use super::{MarkSeed, MarkSet, MarkSnapshot};

    #[test]
    fn multiple_toggle_is_an_involution() {
        let mut marks = MarkSet::from_seed(MarkSeed::Multiple(vec![1]));
        let before = marks.snapshot();

        marks.toggle(4);
        assert!(marks.has(4));
        marks.toggle(4);
        assert!(!marks.has(4));
        assert_eq!(marks.snapshot(), before);
    }

    #[test]
    fn multiple_snapshot_is_ascending_without_duplicates() {
        let mut marks = MarkSet::from_seed(MarkSeed::Multiple(vec![5, 1, 3, 1, 5]));
        marks.toggle(2);
        marks.toggle(0);

        assert_eq!(marks.snapshot(), MarkSnapshot::Multiple(vec![0, 1, 2, 3, 5]));
    }

    #[test]
    fn single_toggle_moves_the_mark() {
        let mut marks = MarkSet::from_seed(MarkSeed::Single(Some(1)));
        assert!(marks.has(1));

        marks.toggle(0);
        assert!(marks.has(0));
        assert!(!marks.has(1));
        assert_eq!(marks.snapshot(), MarkSnapshot::Single(Some(0)));
    }

    #[test]
    fn single_toggle_on_marked_index_clears_the_mark() {
        let mut marks = MarkSet::from_seed(MarkSeed::Single(None));
        assert_eq!(marks.snapshot(), MarkSnapshot::Single(None));

        marks.toggle(2);
        assert_eq!(marks.snapshot(), MarkSnapshot::Single(Some(2)));

        marks.toggle(2);
        assert_eq!(marks.snapshot(), MarkSnapshot::Single(None));
    }

    #[test]
    fn empty_seeds_are_valid() {
        let multiple = MarkSet::from_seed(MarkSeed::Multiple(Vec::new()));
        assert_eq!(multiple.snapshot(), MarkSnapshot::Multiple(Vec::new()));

        let single = MarkSet::from_seed(MarkSeed::Single(None));
        assert_eq!(single.snapshot(), MarkSnapshot::Single(None));
    }
}
