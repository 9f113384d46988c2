//! The session that keeps a list and its backend in sync.

use crate::slot::SW;
use crate::{diff, ApiClient, Edit, Error, NoOp, Record, Result, Signal, Slot};
use core::mem;
use std::collections::BTreeSet;
use tracing::debug;

/// An ordered list kept in sync with a backend client.
///
/// Every change goes through [`update`](SyncedList::update): the new list is
/// diffed against the current one and the resulting edit script is replayed
/// through the client as per-edit create/delete calls before the new list
/// becomes current. The list replaced by the last update is kept as a
/// single-slot undo buffer.
///
/// The session can notify the user when the undo availability or the list
/// emptiness changes through [`Signal`]; connect a slot with
/// [`with_slot`](SyncedList::with_slot) or [`connect`](SyncedList::connect).
///
/// # Examples
/// ```
/// # use listsync::{Record, StubClient, SyncedList};
/// # fn main() -> listsync::Result<()> {
/// let mut list = SyncedList::new(StubClient);
/// list.load()?;
/// assert_eq!(list.len(), 10);
///
/// list.append(Record::with_id("d"))?;
/// assert_eq!(list.len(), 11);
/// assert!(list.can_undo());
///
/// list.undo().unwrap()?;
/// assert_eq!(list.len(), 10);
/// assert!(!list.can_undo());
/// # Ok(())
/// # }
/// ```
#[derive(Clone, Debug)]
pub struct SyncedList<C, S = NoOp> {
    client: C,
    current: Vec<Record>,
    backup: Vec<Record>,
    in_flight: bool,
    slot: SW<S>,
}

impl<C: ApiClient> SyncedList<C> {
    /// Returns a new session around the given client, with an empty list
    /// and no undo available.
    pub fn new(client: C) -> SyncedList<C> {
        SyncedList {
            client,
            current: Vec::new(),
            backup: Vec::new(),
            in_flight: false,
            slot: SW::default(),
        }
    }
}

impl<C: ApiClient, S: Slot> SyncedList<C, S> {
    /// Returns a new session that sends signals to `slot`.
    pub fn with_slot(client: C, slot: S) -> SyncedList<C, S> {
        SyncedList {
            client,
            current: Vec::new(),
            backup: Vec::new(),
            in_flight: false,
            slot: SW::new(slot),
        }
    }

    /// Seeds the current list from the client's `get` call.
    ///
    /// Does nothing if the list is already populated. The undo buffer is
    /// not touched: the initial load is not an undoable change.
    pub fn load(&mut self) -> Result<()> {
        if !self.current.is_empty() {
            return Ok(());
        }
        let list = self.client.get().map_err(Error::client)?;
        debug!(len = list.len(), "seeded initial list");
        self.current = list;
        self.slot
            .emit_if(!self.current.is_empty(), Signal::Empty(false));
        Ok(())
    }

    /// Replaces the current list with `new`, replaying the difference
    /// through the client.
    ///
    /// The cycle is all-or-nothing: if the diff rejects the input or a
    /// client call fails, the remaining edits are not issued and both the
    /// current list and the undo buffer are left unchanged. On success the
    /// old current list becomes the undo buffer.
    ///
    /// # Errors
    /// [`Error::InFlight`] if called re-entrantly while another update is
    /// still issuing its edits, [`Error::DuplicateId`] if `new` or the
    /// current list contains duplicate identifiers, and [`Error::Client`]
    /// if a create or delete call fails.
    pub fn update(&mut self, new: Vec<Record>) -> Result<()> {
        if self.in_flight {
            return Err(Error::InFlight);
        }
        self.in_flight = true;
        let result = self.cycle(new);
        self.in_flight = false;
        result
    }

    /// Appends `record` to the current list.
    pub fn append(&mut self, record: Record) -> Result<()> {
        let mut new = self.current.clone();
        new.push(record);
        self.update(new)
    }

    /// Removes the records at the given indices from the current list.
    ///
    /// Duplicate indices collapse and out-of-range indices are ignored;
    /// the remaining set is removed in one update cycle.
    pub fn delete_at(&mut self, indices: impl IntoIterator<Item = usize>) -> Result<()> {
        let indices: BTreeSet<usize> = indices.into_iter().collect();
        let mut new = self.current.clone();
        // Highest first, so the lower indices stay valid while removing.
        for &index in indices.iter().rev() {
            if index < new.len() {
                new.remove(index);
            }
        }
        self.update(new)
    }

    /// Empties the current list.
    pub fn clear(&mut self) -> Result<()> {
        self.update(Vec::new())
    }

    /// Restores the list the last update replaced, consuming the buffer.
    ///
    /// The restore runs as a regular update cycle, so the client sees the
    /// inverse edits. Returns `None` when there is nothing to undo.
    pub fn undo(&mut self) -> Option<Result<()>> {
        if !self.can_undo() {
            return None;
        }
        let restore = self.backup.clone();
        Some(self.update(restore).map(|()| {
            let could_undo = self.can_undo();
            self.backup.clear();
            self.slot.emit_if(could_undo, Signal::Undo(false));
        }))
    }

    fn cycle(&mut self, new: Vec<Record>) -> Result<()> {
        let edits = diff(&self.current, &new)?;
        debug!(edits = edits.len(), len = new.len(), "replaying edit script");
        for edit in &edits {
            match edit {
                Edit::Insert { index, record } => self.client.create(record, *index),
                Edit::Remove { index, record } => self.client.delete(record, *index),
            }
            .map_err(Error::client)?;
        }
        let could_undo = self.can_undo();
        let was_empty = self.current.is_empty();
        self.backup = mem::replace(&mut self.current, new);
        self.slot
            .emit_if(could_undo != self.can_undo(), Signal::Undo(self.can_undo()));
        self.slot.emit_if(
            was_empty != self.current.is_empty(),
            Signal::Empty(self.current.is_empty()),
        );
        Ok(())
    }

    /// Connects `slot`, returning the one that was connected before.
    pub fn connect(&mut self, slot: S) -> Option<S> {
        self.slot.connect(Some(slot))
    }

    /// Disconnects and returns the current slot.
    pub fn disconnect(&mut self) -> Option<S> {
        self.slot.disconnect()
    }
}

impl<C, S> SyncedList<C, S> {
    /// Returns the current list.
    pub fn current(&self) -> &[Record] {
        &self.current
    }

    /// Returns the undo buffer, which is empty when no undo is available.
    pub fn backup(&self) -> &[Record] {
        &self.backup
    }

    /// Returns `true` if the session can undo.
    pub fn can_undo(&self) -> bool {
        !self.backup.is_empty()
    }

    /// Returns `true` if the current list is empty.
    pub fn is_empty(&self) -> bool {
        self.current.is_empty()
    }

    /// Returns the number of records in the current list.
    pub fn len(&self) -> usize {
        self.current.len()
    }

    /// Returns a reference to the client.
    pub fn client(&self) -> &C {
        &self.client
    }

    /// Returns a mutable reference to the client.
    pub fn client_mut(&mut self) -> &mut C {
        &mut self.client
    }
}

impl<C: ApiClient + Default> Default for SyncedList<C> {
    fn default() -> SyncedList<C> {
        SyncedList::new(C::default())
    }
}
