//! Rotor: one substitution stage.
//!
//! A rotor is crossed twice per signal pass, once right to left on the way
//! in and once left to right on the way out. [`WiredRotor`] models the
//! physical wiring as two alphabets over the same symbol set:
//!
//! - `entry`: the contact order on the right-hand face
//! - `wiring`: for each entry contact, the symbol it is wired to on the
//!   left-hand face
//!
//! Right to left reads the wiring symbol at the incoming offset and looks it
//! up in the entry alphabet. Left to right does the reverse lookup, so the
//! two directions are exact inverses.

use crate::{
    alphabet::{Alphabet, TableAlphabet},
    error::{SignalError, WiringError},
};

/// Capability to substitute an offset in either direction.
pub trait Rotor {
    /// Forward substitution, signal travelling towards the reflector.
    fn encode_right_to_left(&self, offset: usize) -> Result<usize, SignalError>;

    /// Reverse substitution, signal travelling back from the reflector.
    fn encode_left_to_right(&self, offset: usize) -> Result<usize, SignalError>;
}

impl<T: Rotor + ?Sized> Rotor for &T {
    fn encode_right_to_left(&self, offset: usize) -> Result<usize, SignalError> {
        (**self).encode_right_to_left(offset)
    }

    fn encode_left_to_right(&self, offset: usize) -> Result<usize, SignalError> {
        (**self).encode_left_to_right(offset)
    }
}

impl<T: Rotor + ?Sized> Rotor for Box<T> {
    fn encode_right_to_left(&self, offset: usize) -> Result<usize, SignalError> {
        (**self).encode_right_to_left(offset)
    }

    fn encode_left_to_right(&self, offset: usize) -> Result<usize, SignalError> {
        (**self).encode_left_to_right(offset)
    }
}

/// Rotor wired between two alphabets over the same symbols.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WiredRotor {
    entry: TableAlphabet,
    wiring: TableAlphabet,
}

impl WiredRotor {
    /// Wire `entry` contacts to `wiring` contacts.
    ///
    /// # Errors
    ///
    /// - [`WiringError::LengthMismatch`] if the alphabets differ in size
    /// - [`WiringError::UnknownSymbol`] if `wiring` holds a symbol `entry`
    ///   does not
    pub fn new(entry: TableAlphabet, wiring: TableAlphabet) -> Result<Self, WiringError> {
        if entry.len() != wiring.len() {
            return Err(WiringError::LengthMismatch { expected: entry.len(), actual: wiring.len() });
        }
        // Equal lengths and distinct symbols: no foreign symbol means the
        // same symbol set.
        if let Some(symbol) = wiring.symbols().iter().copied().find(|&s| !entry.contains(s)) {
            return Err(WiringError::UnknownSymbol { symbol });
        }

        Ok(Self { entry, wiring })
    }

    /// Wire `entry` to the symbols of `wiring`, in order.
    ///
    /// `WiredRotor::from_wiring(&TableAlphabet::latin(), "EKMFLGDQVZNTOWYHXUSPAIBRCJ")`
    /// is rotor I.
    pub fn from_wiring(entry: &TableAlphabet, wiring: &str) -> Result<Self, WiringError> {
        let wiring = TableAlphabet::new(wiring.chars()).map_err(|err| match err {
            WiringError::Empty => WiringError::LengthMismatch { expected: entry.len(), actual: 0 },
            other => other,
        })?;
        Self::new(entry.clone(), wiring)
    }

    /// Rotor that leaves every offset where it is.
    pub fn identity(entry: &TableAlphabet) -> Self {
        Self { entry: entry.clone(), wiring: entry.clone() }
    }

    /// Right-hand contact order.
    pub fn entry(&self) -> &TableAlphabet {
        &self.entry
    }

    /// Left-hand wiring, aligned with [`Self::entry`].
    pub fn wiring(&self) -> &TableAlphabet {
        &self.wiring
    }

    /// Number of contacts.
    pub fn len(&self) -> usize {
        self.entry.len()
    }

    /// Always false for a constructed rotor.
    pub fn is_empty(&self) -> bool {
        self.entry.is_empty()
    }
}

impl Rotor for WiredRotor {
    fn encode_right_to_left(&self, offset: usize) -> Result<usize, SignalError> {
        let symbol = self.wiring.character_at(offset)?;
        self.entry.index_of(symbol)
    }

    fn encode_left_to_right(&self, offset: usize) -> Result<usize, SignalError> {
        let symbol = self.entry.character_at(offset)?;
        self.wiring.index_of(symbol)
    }
}
