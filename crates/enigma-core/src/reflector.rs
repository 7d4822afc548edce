//! Reflector: the turnaround stage.
//!
//! A reflector applies a fixed permutation once per signal pass, between the
//! inbound and outbound rotor traversals. A historical reflector is an
//! involution without fixed points, which is what makes the whole machine
//! self-reciprocal. The signal path does not check that. Whoever builds the
//! table can call [`WiredReflector::validate_historical`].

use crate::{
    alphabet::{Alphabet, TableAlphabet},
    error::{SignalError, WiringError},
};

/// Capability to reflect an offset.
pub trait Reflector {
    /// Apply the reflector's permutation to `offset`.
    fn reflect(&self, offset: usize) -> Result<usize, SignalError>;
}

impl<T: Reflector + ?Sized> Reflector for &T {
    fn reflect(&self, offset: usize) -> Result<usize, SignalError> {
        (**self).reflect(offset)
    }
}

impl<T: Reflector + ?Sized> Reflector for Box<T> {
    fn reflect(&self, offset: usize) -> Result<usize, SignalError> {
        (**self).reflect(offset)
    }
}

/// Reflector backed by a validated permutation table.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WiredReflector {
    table: Vec<usize>,
}

impl WiredReflector {
    /// Build from raw offsets: contact `i` reflects to `table[i]`.
    ///
    /// # Errors
    ///
    /// Fails unless `table` is a permutation of `[0, table.len())`.
    pub fn from_offsets(table: Vec<usize>) -> Result<Self, WiringError> {
        if table.is_empty() {
            return Err(WiringError::Empty);
        }

        let len = table.len();
        let mut seen = vec![false; len];
        for &offset in &table {
            let slot = seen.get_mut(offset).ok_or(WiringError::OffsetOutOfRange { offset, len })?;
            if *slot {
                return Err(WiringError::DuplicateOffset { offset });
            }
            *slot = true;
        }

        Ok(Self { table })
    }

    /// Build from a wiring string over `alphabet`.
    ///
    /// The `i`-th symbol of `wiring` is where the `i`-th alphabet symbol
    /// reflects to, e.g. `"YRUHQSLDPXNGOKMIEBFZCWVJAT"` for reflector B
    /// over `A..Z`.
    pub fn from_wiring(alphabet: &TableAlphabet, wiring: &str) -> Result<Self, WiringError> {
        let table = wiring
            .chars()
            .map(|symbol| {
                alphabet.index_of(symbol).map_err(|_| WiringError::UnknownSymbol { symbol })
            })
            .collect::<Result<Vec<_>, _>>()?;

        if table.len() != alphabet.len() {
            return Err(WiringError::LengthMismatch { expected: alphabet.len(), actual: table.len() });
        }

        Self::from_offsets(table).map_err(|err| match err {
            WiringError::DuplicateOffset { offset } => match alphabet.character_at(offset) {
                Ok(symbol) => WiringError::DuplicateSymbol { symbol },
                Err(_) => err,
            },
            other => other,
        })
    }

    /// Reflects `o` to `n - 1 - o`.
    ///
    /// Involutive for any `n`; fixed-point-free only when `n` is even.
    pub fn mirror(n: usize) -> Self {
        Self { table: (0..n).rev().collect() }
    }

    /// Number of contacts.
    pub fn len(&self) -> usize {
        self.table.len()
    }

    /// Always false for a constructed reflector.
    pub fn is_empty(&self) -> bool {
        self.table.is_empty()
    }

    /// The underlying offset table.
    pub fn offsets(&self) -> &[usize] {
        &self.table
    }

    /// Whether reflecting twice always returns the starting contact.
    pub fn is_involution(&self) -> bool {
        self.first_non_involution().is_none()
    }

    /// Contacts that reflect to themselves.
    pub fn fixed_points(&self) -> impl Iterator<Item = usize> + '_ {
        self.table.iter().enumerate().filter(|&(from, &to)| from == to).map(|(from, _)| from)
    }

    /// Check the historical constraints: involution, no fixed points.
    pub fn validate_historical(&self) -> Result<(), WiringError> {
        if let Some((offset, image, back)) = self.first_non_involution() {
            return Err(WiringError::NotInvolution { offset, image, back });
        }
        if let Some(offset) = self.fixed_points().next() {
            return Err(WiringError::FixedPoint { offset });
        }
        Ok(())
    }

    fn first_non_involution(&self) -> Option<(usize, usize, usize)> {
        // Entries are in range by construction.
        self.table
            .iter()
            .enumerate()
            .map(|(offset, &image)| (offset, image, self.table[image]))
            .find(|&(offset, _, back)| back != offset)
    }
}

impl Reflector for WiredReflector {
    fn reflect(&self, offset: usize) -> Result<usize, SignalError> {
        self.table.get(offset).copied().ok_or(SignalError::OutOfRange { offset, len: self.table.len() })
    }
}
