//! Seeded random wiring.
//!
//! Generates genuine (non-stub) rotor and reflector tables so properties can
//! be checked over many machines, not just the historical ones.
//!
//! # Invariants
//!
//! - Determinism: the same seed produces the same sequence of tables
//! - Reflectors drawn for an even alphabet are involutions without fixed
//!   points

use enigma_core::{
    MachineConfig, ReflectorConfig, RotorConfig, TableAlphabet, WiredReflector, WiredRotor,
    WiringError,
};
use rand::{SeedableRng, seq::SliceRandom};
use rand_chacha::ChaCha8Rng;

const SYMBOL_POOL: &str = "ABCDEFGHIJKLMNOPQRSTUVWXYZabcdefghijklmnopqrstuvwxyz0123456789";

/// Largest alphabet [`symbols`] can produce.
pub const MAX_SYMBOLS: usize = SYMBOL_POOL.len();

/// The first `len` symbols of `A-Z`, `a-z`, `0-9`.
pub fn symbols(len: usize) -> Result<TableAlphabet, WiringError> {
    if len > MAX_SYMBOLS {
        return Err(WiringError::LengthMismatch { expected: MAX_SYMBOLS, actual: len });
    }
    TableAlphabet::new(SYMBOL_POOL.chars().take(len))
}

/// Random wiring tables from a seeded ChaCha RNG.
#[derive(Debug, Clone)]
pub struct SeededWiring {
    rng: ChaCha8Rng,
}

impl SeededWiring {
    /// Create a generator from `seed`.
    pub fn new(seed: u64) -> Self {
        Self { rng: ChaCha8Rng::seed_from_u64(seed) }
    }

    /// Uniformly random permutation of `[0, n)`.
    pub fn permutation(&mut self, n: usize) -> Vec<usize> {
        let mut table: Vec<usize> = (0..n).collect();
        table.shuffle(&mut self.rng);
        table
    }

    /// Random pairing of `[0, n)`: every contact swaps with its partner.
    ///
    /// With odd `n` one contact is left unpaired and maps to itself.
    pub fn involution(&mut self, n: usize) -> Vec<usize> {
        let order = self.permutation(n);
        let mut table: Vec<usize> = (0..n).collect();
        for pair in order.chunks_exact(2) {
            table[pair[0]] = pair[1];
            table[pair[1]] = pair[0];
        }
        table
    }

    /// Wiring string for a random rotor over `alphabet`.
    pub fn rotor_wiring(&mut self, alphabet: &TableAlphabet) -> String {
        let symbols = alphabet.symbols();
        self.permutation(symbols.len()).into_iter().map(|i| symbols[i]).collect()
    }

    /// Wiring string for a random reflector over `alphabet`.
    pub fn reflector_wiring(&mut self, alphabet: &TableAlphabet) -> String {
        let symbols = alphabet.symbols();
        self.involution(symbols.len()).into_iter().map(|i| symbols[i]).collect()
    }

    /// Random rotor over `alphabet`.
    pub fn rotor(&mut self, alphabet: &TableAlphabet) -> Result<WiredRotor, WiringError> {
        let wiring = self.rotor_wiring(alphabet);
        WiredRotor::from_wiring(alphabet, &wiring)
    }

    /// Random reflector with `n` contacts.
    pub fn reflector(&mut self, n: usize) -> Result<WiredReflector, WiringError> {
        WiredReflector::from_offsets(self.involution(n))
    }

    /// Random machine description over the first `len` pool symbols.
    pub fn config(&mut self, len: usize) -> Result<MachineConfig, WiringError> {
        let alphabet = symbols(len)?;
        Ok(MachineConfig {
            alphabet: alphabet.symbols().iter().collect(),
            left: RotorConfig::wired(self.rotor_wiring(&alphabet)),
            center: RotorConfig::wired(self.rotor_wiring(&alphabet)),
            right: RotorConfig::wired(self.rotor_wiring(&alphabet)),
            reflector: ReflectorConfig::wired(self.reflector_wiring(&alphabet)),
        })
    }
}
