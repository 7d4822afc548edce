//! Symbol <-> offset mapping.
//!
//! The alphabet is the only place symbols exist. Everything downstream of
//! [`Alphabet::index_of`] works in offsets, and [`Alphabet::character_at`]
//! turns the final offset back into a symbol.
//!
//! # Invariants
//!
//! - Bijection: `index_of(character_at(o)) == o` for every `o` in `[0, N)`
//!   and `character_at(index_of(s)) == s` for every member `s`
//! - No wrap-around: offsets `>= N` are rejected, never reduced modulo `N`

use std::collections::HashMap;

use crate::error::{SignalError, WiringError};

/// Capability to translate between symbols and offsets.
pub trait Alphabet {
    /// Position of `symbol` in the alphabet.
    ///
    /// Non-members fail with [`SignalError::InvalidSymbol`].
    fn index_of(&self, symbol: char) -> Result<usize, SignalError>;

    /// Symbol at `offset`.
    ///
    /// Offsets outside `[0, N)` fail with [`SignalError::OutOfRange`].
    fn character_at(&self, offset: usize) -> Result<char, SignalError>;
}

impl<T: Alphabet + ?Sized> Alphabet for &T {
    fn index_of(&self, symbol: char) -> Result<usize, SignalError> {
        (**self).index_of(symbol)
    }

    fn character_at(&self, offset: usize) -> Result<char, SignalError> {
        (**self).character_at(offset)
    }
}

impl<T: Alphabet + ?Sized> Alphabet for Box<T> {
    fn index_of(&self, symbol: char) -> Result<usize, SignalError> {
        (**self).index_of(symbol)
    }

    fn character_at(&self, offset: usize) -> Result<char, SignalError> {
        (**self).character_at(offset)
    }
}

/// Alphabet backed by an ordered symbol table.
///
/// Offsets index a `Vec<char>`, symbols are resolved through a hash map, so
/// both directions are O(1).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TableAlphabet {
    symbols: Vec<char>,
    offsets: HashMap<char, usize>,
}

impl TableAlphabet {
    /// Build an alphabet from symbols in offset order.
    ///
    /// # Errors
    ///
    /// - [`WiringError::Empty`] if no symbols are given
    /// - [`WiringError::DuplicateSymbol`] if a symbol repeats
    pub fn new(symbols: impl IntoIterator<Item = char>) -> Result<Self, WiringError> {
        let symbols: Vec<char> = symbols.into_iter().collect();
        if symbols.is_empty() {
            return Err(WiringError::Empty);
        }

        let mut offsets = HashMap::with_capacity(symbols.len());
        for (offset, &symbol) in symbols.iter().enumerate() {
            if offsets.insert(symbol, offset).is_some() {
                return Err(WiringError::DuplicateSymbol { symbol });
            }
        }

        Ok(Self { symbols, offsets })
    }

    /// `A` through `Z`, offsets 0 through 25.
    pub fn latin() -> Self {
        let symbols: Vec<char> = ('A'..='Z').collect();
        let offsets = symbols.iter().enumerate().map(|(offset, &symbol)| (symbol, offset)).collect();
        Self { symbols, offsets }
    }

    /// Number of symbols (`N`).
    pub fn len(&self) -> usize {
        self.symbols.len()
    }

    /// Always false for a constructed alphabet; present for API symmetry.
    pub fn is_empty(&self) -> bool {
        self.symbols.is_empty()
    }

    /// Symbols in offset order.
    pub fn symbols(&self) -> &[char] {
        &self.symbols
    }

    /// Whether `symbol` is a member.
    pub fn contains(&self, symbol: char) -> bool {
        self.offsets.contains_key(&symbol)
    }
}

impl Alphabet for TableAlphabet {
    fn index_of(&self, symbol: char) -> Result<usize, SignalError> {
        self.offsets.get(&symbol).copied().ok_or(SignalError::InvalidSymbol { symbol })
    }

    fn character_at(&self, offset: usize) -> Result<char, SignalError> {
        self.symbols
            .get(offset)
            .copied()
            .ok_or(SignalError::OutOfRange { offset, len: self.symbols.len() })
    }
}

#[cfg(test)]
mod tests {
    use proptest::prelude::*;

    use super::*;

    #[test]
    fn latin_has_26_symbols() {
        let alphabet = TableAlphabet::latin();
        assert_eq!(alphabet.len(), 26);
        assert_eq!(alphabet.index_of('A'), Ok(0));
        assert_eq!(alphabet.index_of('Z'), Ok(25));
        assert_eq!(alphabet.character_at(0), Ok('A'));
        assert_eq!(alphabet.character_at(25), Ok('Z'));
    }

    #[test]
    fn character_at_past_end_is_out_of_range() {
        let alphabet = TableAlphabet::latin();
        assert_eq!(alphabet.character_at(26), Err(SignalError::OutOfRange { offset: 26, len: 26 }));
    }

    #[test]
    fn index_of_non_member_is_invalid_symbol() {
        let alphabet = TableAlphabet::latin();
        assert_eq!(alphabet.index_of('a'), Err(SignalError::InvalidSymbol { symbol: 'a' }));
        assert_eq!(alphabet.index_of(' '), Err(SignalError::InvalidSymbol { symbol: ' ' }));
    }

    #[test]
    fn new_matches_latin() {
        let built = TableAlphabet::new('A'..='Z').unwrap();
        assert_eq!(built, TableAlphabet::latin());
    }

    #[test]
    fn new_rejects_empty() {
        assert_eq!(TableAlphabet::new([]), Err(WiringError::Empty));
    }

    #[test]
    fn new_rejects_duplicates() {
        let result = TableAlphabet::new("ABCA".chars());
        assert_eq!(result, Err(WiringError::DuplicateSymbol { symbol: 'A' }));
    }

    #[test]
    fn contains_is_case_sensitive() {
        let alphabet = TableAlphabet::new("ABC".chars()).unwrap();
        assert!(alphabet.contains('B'));
        assert!(!alphabet.contains('b'));
        assert_eq!(alphabet.symbols(), &['A', 'B', 'C']);
    }

    #[test]
    fn borrowed_alphabet_delegates() {
        let alphabet = TableAlphabet::latin();
        let borrowed: &dyn Alphabet = &alphabet;
        assert_eq!(borrowed.index_of('C'), Ok(2));
        assert_eq!(Box::new(alphabet).character_at(2), Ok('C'));
    }

    proptest! {
        #[test]
        fn prop_offset_round_trips(offset in 0usize..26) {
            let alphabet = TableAlphabet::latin();
            let symbol = alphabet.character_at(offset)?;
            prop_assert_eq!(alphabet.index_of(symbol)?, offset);
        }

        #[test]
        fn prop_symbol_round_trips(symbol in proptest::char::range('A', 'Z')) {
            let alphabet = TableAlphabet::latin();
            let offset = alphabet.index_of(symbol)?;
            prop_assert_eq!(alphabet.character_at(offset)?, symbol);
        }

        #[test]
        fn prop_never_wraps(offset in 26usize..10_000) {
            let alphabet = TableAlphabet::latin();
            let is_out_of_range = matches!(alphabet.character_at(offset), Err(SignalError::OutOfRange { .. }));
            prop_assert!(is_out_of_range);
        }
    }
}
