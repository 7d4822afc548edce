//! Reference model for model-based testing.
//!
//! [`ReferenceMachine`] reads a [`MachineConfig`] straight into plain offset
//! tables and walks them with linear searches. It shares no code with
//! `enigma-core`'s stages, which makes it a usable oracle.
//!
//! # Design Principles
//!
//! - Simplicity: obviously correct over fast
//! - Deterministic: same config, same table

use arbitrary::Arbitrary;
use enigma_core::{MachineConfig, WiringError};

use crate::wiring::{MAX_SYMBOLS, SeededWiring};

/// Compact random machine description.
///
/// Kept small so proptest and the fuzzer shrink it well. Expanded into a
/// [`MachineConfig`] by [`MachineSeed::config`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Arbitrary)]
pub struct MachineSeed {
    /// RNG seed for every wiring table.
    pub seed: u64,
    /// Alphabet size hint, mapped to an even length in `[2, MAX_SYMBOLS]`.
    pub size_class: u8,
}

impl MachineSeed {
    /// Alphabet length: always even, so the reflector has no fixed points.
    pub fn len(&self) -> usize {
        let pairs = MAX_SYMBOLS / 2;
        2 * (usize::from(self.size_class) % pairs + 1)
    }

    /// Never true; present for API symmetry with [`Self::len`].
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Expand to a full machine description.
    pub fn config(&self) -> Result<MachineConfig, WiringError> {
        SeededWiring::new(self.seed).config(self.len())
    }
}

/// Naive signal path over raw tables.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReferenceMachine {
    symbols: Vec<char>,
    /// Forward tables, outermost first: right, center, left.
    rotors: [Vec<usize>; 3],
    reflector: Vec<usize>,
}

impl ReferenceMachine {
    /// Read `config` into tables.
    ///
    /// Returns `None` if a wiring string names a symbol outside the alphabet
    /// or has the wrong length. Permutation checks are left to the real
    /// machine.
    pub fn from_config(config: &MachineConfig) -> Option<Self> {
        let symbols: Vec<char> = config.alphabet.chars().collect();
        let n = symbols.len();

        let table = |wiring: Option<&String>, fallback: Vec<usize>| -> Option<Vec<usize>> {
            let Some(wiring) = wiring else { return Some(fallback) };
            let table: Vec<usize> = wiring
                .chars()
                .map(|c| symbols.iter().position(|&s| s == c))
                .collect::<Option<_>>()?;
            (table.len() == n).then_some(table)
        };

        let identity: Vec<usize> = (0..n).collect();
        let mirror: Vec<usize> = (0..n).rev().collect();

        Some(Self {
            rotors: [
                table(config.right.wiring.as_ref(), identity.clone())?,
                table(config.center.wiring.as_ref(), identity.clone())?,
                table(config.left.wiring.as_ref(), identity)?,
            ],
            reflector: table(config.reflector.wiring.as_ref(), mirror)?,
            symbols,
        })
    }

    /// Encode one symbol; `None` for non-members.
    pub fn encode(&self, symbol: char) -> Option<char> {
        let mut offset = self.symbols.iter().position(|&s| s == symbol)?;

        for rotor in &self.rotors {
            offset = *rotor.get(offset)?;
        }
        offset = *self.reflector.get(offset)?;
        for rotor in self.rotors.iter().rev() {
            offset = rotor.iter().position(|&o| o == offset)?;
        }

        self.symbols.get(offset).copied()
    }

    /// Output for every alphabet symbol, in alphabet order.
    pub fn substitution(&self) -> Vec<Option<char>> {
        self.symbols.iter().map(|&symbol| self.encode(symbol)).collect()
    }

    /// Alphabet symbols in offset order.
    pub fn symbols(&self) -> &[char] {
        &self.symbols
    }
}
