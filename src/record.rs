use core::fmt::{self, Display, Formatter};
use core::hash::{Hash, Hasher};
#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// An identity-bearing list element.
///
/// A record is identified solely by its string identifier. Equality and
/// hashing are defined over the identifier alone, and this is a contract:
/// the diff engine keys on it, so payload fields added later must not
/// participate in equality.
///
/// # Examples
/// ```
/// # use listsync::Record;
/// let a = Record::with_id("a");
/// assert_eq!(a, Record::with_id("a"));
/// assert_ne!(a, Record::new());
/// ```
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[derive(Clone, Debug)]
pub struct Record {
    id: String,
}

impl Record {
    /// Returns a record with a freshly generated v4 UUID identifier.
    pub fn new() -> Record {
        Record {
            id: Uuid::new_v4().to_string(),
        }
    }

    /// Returns a record with the provided identifier.
    pub fn with_id(id: impl Into<String>) -> Record {
        Record { id: id.into() }
    }

    /// Returns the identifier of the record.
    pub fn id(&self) -> &str {
        &self.id
    }
}

impl Default for Record {
    fn default() -> Record {
        Record::new()
    }
}

// Identity semantics: the identifier is the whole key.
impl PartialEq for Record {
    fn eq(&self, other: &Record) -> bool {
        self.id == other.id
    }
}

impl Eq for Record {}

impl Hash for Record {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.id.hash(state);
    }
}

impl Display for Record {
    fn fmt(&self, f: &mut Formatter) -> fmt::Result {
        f.write_str(&self.id)
    }
}
