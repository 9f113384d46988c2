//! Module used to communicate changes in the session state.

use core::mem;
#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Trait for receiving signals.
pub trait Slot {
    /// Receives a signal that describes a state change in the session.
    fn emit(&mut self, signal: Signal);
}

impl<F: FnMut(Signal)> Slot for F {
    fn emit(&mut self, signal: Signal) {
        self(signal)
    }
}

/// The signal used for communicating state changes.
///
/// These are the two states the front end binds controls to: whether an
/// undo is available and whether the list is empty. A signal is only sent
/// when the state actually flips.
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub enum Signal {
    /// Says if the session can undo.
    Undo(bool),
    /// Says if the current list is empty.
    Empty(bool),
}

/// Default slot that does nothing.
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[derive(Copy, Clone, Debug, Default, Eq, PartialEq)]
pub struct NoOp;

impl Slot for NoOp {
    fn emit(&mut self, _: Signal) {}
}

/// Slot wrapper that adds some additional functionality.
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize), serde(transparent))]
#[derive(Clone, Debug)]
pub(crate) struct SW<S>(Option<S>);

impl<S> SW<S> {
    pub const fn new(slot: S) -> SW<S> {
        SW(Some(slot))
    }

    pub fn connect(&mut self, slot: Option<S>) -> Option<S> {
        mem::replace(&mut self.0, slot)
    }

    pub fn disconnect(&mut self) -> Option<S> {
        self.0.take()
    }
}

impl<S> Default for SW<S> {
    fn default() -> Self {
        SW(None)
    }
}

impl<S: Slot> SW<S> {
    pub fn emit(&mut self, signal: Signal) {
        if let Some(slot) = &mut self.0 {
            slot.emit(signal);
        }
    }

    pub fn emit_if(&mut self, cond: bool, signal: Signal) {
        if cond {
            self.emit(signal);
        }
    }
}
