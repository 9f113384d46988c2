//! The ordered-collection diff.

use crate::{Error, Record, Result};
#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};
use std::collections::HashSet;

/// One atomic change in an edit script.
///
/// The index is interpreted lock-step: it is valid against the list as it
/// looks at the moment the edit is applied, with every earlier edit in the
/// script already applied.
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[derive(Clone, Debug, Eq, PartialEq)]
pub enum Edit {
    /// Insert `record` at `index`.
    Insert {
        /// Position of the inserted record in the evolving list.
        index: usize,
        /// The record to insert.
        record: Record,
    },
    /// Remove `record` from `index`.
    Remove {
        /// Position of the removed record in the evolving list.
        index: usize,
        /// The record being removed.
        record: Record,
    },
}

impl Edit {
    /// Returns the index the edit applies at.
    pub fn index(&self) -> usize {
        match self {
            Edit::Insert { index, .. } | Edit::Remove { index, .. } => *index,
        }
    }

    /// Returns the record the edit carries.
    pub fn record(&self) -> &Record {
        match self {
            Edit::Insert { record, .. } | Edit::Remove { record, .. } => record,
        }
    }

    /// Applies the edit to a plain list.
    ///
    /// # Panics
    /// Panics if the index is out of bounds for the list, which cannot
    /// happen for a script produced by [`diff`] replayed in order against
    /// its old list.
    ///
    /// # Examples
    /// ```
    /// # use listsync::{diff, Record};
    /// let old = [Record::with_id("a"), Record::with_id("b")];
    /// let new = [Record::with_id("b"), Record::with_id("c")];
    /// let mut list = old.to_vec();
    /// for edit in diff(&old, &new).unwrap() {
    ///     edit.apply_to(&mut list);
    /// }
    /// assert_eq!(list, new);
    /// ```
    pub fn apply_to(&self, list: &mut Vec<Record>) {
        match self {
            Edit::Insert { index, record } => list.insert(*index, record.clone()),
            Edit::Remove { index, .. } => {
                list.remove(*index);
            }
        }
    }
}

/// Computes the edit script that transforms `old` into `new`.
///
/// The script is LCS-minimal, keyed by record identity: an element present
/// in both lists is never removed and re-inserted. Edits are emitted in a
/// single forward walk over both lists, so replaying them in order, each at
/// its stated index, is always valid; where a removal and an insertion
/// meet at the same point, the removal comes first.
///
/// # Errors
/// Returns [`Error::DuplicateId`] if either list contains two records with
/// the same identifier. The one-to-one correspondence the diff assumes does
/// not hold for such lists, so they are rejected rather than misdiffed.
///
/// # Examples
/// ```
/// # use listsync::{diff, Edit, Record};
/// let a = Record::with_id("a");
/// let b = Record::with_id("b");
/// let c = Record::with_id("c");
///
/// let edits = diff(&[a.clone(), b.clone(), c.clone()], &[a, c]).unwrap();
/// assert_eq!(edits, [Edit::Remove { index: 1, record: b }]);
/// ```
pub fn diff(old: &[Record], new: &[Record]) -> Result<Vec<Edit>> {
    reject_duplicates(old)?;
    reject_duplicates(new)?;

    let (n, m) = (old.len(), new.len());
    // lcs[i][j] is the LCS length of old[i..] and new[j..], so the table is
    // filled from the bottom-right corner and walked from the top-left.
    let width = m + 1;
    let mut lcs = vec![0usize; (n + 1) * width];
    for i in (0..n).rev() {
        for j in (0..m).rev() {
            lcs[i * width + j] = if old[i] == new[j] {
                lcs[(i + 1) * width + j + 1] + 1
            } else {
                lcs[(i + 1) * width + j].max(lcs[i * width + j + 1])
            };
        }
    }

    let mut edits = Vec::with_capacity(n + m - 2 * lcs[0]);
    let (mut i, mut j) = (0, 0);
    // Index of the next settled position in the evolving list.
    let mut cursor = 0;
    while i < n || j < m {
        if i < n && j < m && old[i] == new[j] {
            i += 1;
            j += 1;
            cursor += 1;
        } else if j == m || (i < n && lcs[(i + 1) * width + j] >= lcs[i * width + j + 1]) {
            edits.push(Edit::Remove {
                index: cursor,
                record: old[i].clone(),
            });
            i += 1;
        } else {
            edits.push(Edit::Insert {
                index: cursor,
                record: new[j].clone(),
            });
            j += 1;
            cursor += 1;
        }
    }
    Ok(edits)
}

fn reject_duplicates(list: &[Record]) -> Result<()> {
    let mut seen = HashSet::with_capacity(list.len());
    for record in list {
        if !seen.insert(record.id()) {
            return Err(Error::DuplicateId(record.id().to_string()));
        }
    }
    Ok(())
}
