//! Keeps an ordered list in sync with a backend by replaying diffs.
//!
//! The list never talks to the backend in terms of whole states. Instead,
//! every change is expressed as the difference between the old and the new
//! list: an ordered script of insertions and removals, computed by an
//! LCS-based diff keyed on record identity. The [`SyncedList`] session
//! replays that script through an [`ApiClient`] as per-edit create/delete
//! calls, commits the new list, and keeps the old one in a single-slot
//! undo buffer.
//!
//! # Features
//!
//! * [`diff`] computes a minimal edit script between two ordered lists of
//!   [`Record`]s, with indices valid for lock-step replay.
//! * [`SyncedList`] applies edit scripts through a client and owns the
//!   session state: the current list and the undo buffer.
//! * [`ApiClient`] is the backend capability (create, delete, get);
//!   [`StubClient`] is a logging stand-in that serves canned data.
//! * [`Signal`] notifies a connected [`Slot`] when undo availability or
//!   list emptiness changes, for front ends that bind controls to them.
//! * Serialization of records, edits, and signals is provided when the
//!   `serde` feature is enabled.
//!
//! # Examples
//!
//! Add this to `Cargo.toml`:
//!
//! ```toml
//! [dependencies]
//! listsync = "0.1"
//! ```
//!
//! And then:
//!
//! ```
//! use listsync::{Record, StubClient, SyncedList};
//!
//! fn main() -> listsync::Result<()> {
//!     let mut list = SyncedList::new(StubClient);
//!     list.load()?;
//!     assert_eq!(list.len(), 10);
//!
//!     // Appending diffs [r0..r9] against [r0..r9, d] and issues one
//!     // create call at index 10.
//!     list.append(Record::with_id("d"))?;
//!     assert_eq!(list.current()[10].id(), "d");
//!
//!     // Clearing issues one delete call per record.
//!     list.clear()?;
//!     assert!(list.is_empty());
//!
//!     // A single level of undo: the pre-clear list is restored by
//!     // replaying its inverse script, then the buffer is consumed.
//!     list.undo().unwrap()?;
//!     assert_eq!(list.len(), 11);
//!     assert!(list.undo().is_none());
//!     Ok(())
//! }
//! ```

#![deny(missing_docs)]

mod client;
mod diff;
mod record;
mod session;
mod slot;

pub use self::{
    client::{ApiClient, StubClient},
    diff::{diff, Edit},
    record::Record,
    session::SyncedList,
    slot::{NoOp, Signal, Slot},
};

/// A specialized Result type for update cycles.
pub type Result<T = ()> = core::result::Result<T, Error>;

/// The ways an update cycle can fail.
///
/// A failed cycle leaves the session untouched: the current list and the
/// undo buffer keep their pre-update values.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// A create or delete call was rejected by the client. Edits issued
    /// before the failing one are not rolled back.
    #[error("client call failed")]
    Client(#[source] Box<dyn std::error::Error + Send + Sync>),
    /// A list passed to the diff contains two records with the same
    /// identifier, which breaks the one-to-one correspondence the diff
    /// relies on.
    #[error("duplicate identifier `{0}`")]
    DuplicateId(String),
    /// An update was triggered while another one was still issuing its
    /// edits. Concurrent cycles are rejected, not queued.
    #[error("an update is already in flight")]
    InFlight,
}

impl Error {
    pub(crate) fn client(err: impl std::error::Error + Send + Sync + 'static) -> Error {
        Error::Client(Box::new(err))
    }
}
