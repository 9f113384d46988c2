//! The backend capability and its stub implementation.

use crate::Record;
use core::convert::Infallible;
use tracing::info;

/// The backend API the session replays edit scripts against.
///
/// `create` and `delete` mirror the two edit kinds and receive the same
/// lock-step index the edit carries: the backend is expected to apply the
/// calls in the order they arrive, against its own copy of the list.
/// `get` delivers the initial list and is called once, by
/// [`load`](crate::SyncedList::load).
///
/// Every method can fail; a failure aborts the update cycle it belongs to.
/// Implementations that cannot fail can use [`Infallible`] as the error
/// type, as [`StubClient`] does.
pub trait ApiClient {
    /// The error type returned by the client's calls.
    type Error: std::error::Error + Send + Sync + 'static;

    /// Creates `record` at `index`.
    fn create(&mut self, record: &Record, index: usize) -> Result<(), Self::Error>;

    /// Deletes `record` from `index`.
    fn delete(&mut self, record: &Record, index: usize) -> Result<(), Self::Error>;

    /// Returns the initial list.
    fn get(&mut self) -> Result<Vec<Record>, Self::Error>;
}

/// A stand-in backend that logs calls instead of performing I/O.
///
/// `create` and `delete` emit an `info` event per call, and `get` returns
/// [`StubClient::DEFAULT_LEN`] freshly generated records. Useful for demos
/// and doctests; tests that need to assert on the issued calls should use
/// their own recording client instead.
#[derive(Copy, Clone, Debug, Default, Eq, PartialEq)]
pub struct StubClient;

impl StubClient {
    /// The number of records `get` returns.
    pub const DEFAULT_LEN: usize = 10;
}

impl ApiClient for StubClient {
    type Error = Infallible;

    fn create(&mut self, record: &Record, index: usize) -> Result<(), Infallible> {
        info!(id = record.id(), index, "created record");
        Ok(())
    }

    fn delete(&mut self, record: &Record, index: usize) -> Result<(), Infallible> {
        info!(id = record.id(), index, "deleted record");
        Ok(())
    }

    fn get(&mut self) -> Result<Vec<Record>, Infallible> {
        Ok((0..StubClient::DEFAULT_LEN).map(|_| Record::new()).collect())
    }
}
