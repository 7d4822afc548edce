//! Recording stub stages.
//!
//! Each stub returns a preset value (or preset error) regardless of its
//! argument and appends the call to a [`SignalLog`] shared by every stub of
//! one machine.

use std::{cell::RefCell, rc::Rc};

use enigma_core::{Alphabet, Reflector, Rotor, SignalError};

/// Rotor slot in the machine.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Side {
    /// Innermost rotor.
    Left,
    /// Middle rotor.
    Center,
    /// Outermost rotor.
    Right,
}

/// One recorded stage call with its argument.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Stage {
    /// `Alphabet::index_of(symbol)`
    IndexOf(char),
    /// `Rotor::encode_right_to_left(offset)` on the rotor at `side`
    RightToLeft {
        /// Rotor slot.
        side: Side,
        /// Argument.
        offset: usize,
    },
    /// `Reflector::reflect(offset)`
    Reflect(usize),
    /// `Rotor::encode_left_to_right(offset)` on the rotor at `side`
    LeftToRight {
        /// Rotor slot.
        side: Side,
        /// Argument.
        offset: usize,
    },
    /// `Alphabet::character_at(offset)`
    CharacterAt(usize),
}

/// Ordered record of stage calls, shared between stubs.
#[derive(Debug, Clone, Default)]
pub struct SignalLog {
    calls: Rc<RefCell<Vec<Stage>>>,
}

impl SignalLog {
    /// Create an empty log.
    pub fn new() -> Self {
        Self::default()
    }

    fn record(&self, stage: Stage) {
        self.calls.borrow_mut().push(stage);
    }

    /// Snapshot of the calls recorded so far.
    pub fn calls(&self) -> Vec<Stage> {
        self.calls.borrow().clone()
    }

    /// Number of calls recorded so far.
    pub fn len(&self) -> usize {
        self.calls.borrow().len()
    }

    /// Whether nothing has been recorded.
    pub fn is_empty(&self) -> bool {
        self.calls.borrow().is_empty()
    }

    /// Forget all recorded calls.
    pub fn clear(&self) {
        self.calls.borrow_mut().clear();
    }
}

/// Alphabet stub.
#[derive(Debug, Clone)]
pub struct FixedAlphabet {
    log: SignalLog,
    index: Result<usize, SignalError>,
    symbol: Result<char, SignalError>,
}

impl FixedAlphabet {
    /// `index_of` always yields `index`, `character_at` always yields `symbol`.
    pub fn new(log: &SignalLog, index: usize, symbol: char) -> Self {
        Self { log: log.clone(), index: Ok(index), symbol: Ok(symbol) }
    }

    /// Make `index_of` fail with `err`.
    #[must_use]
    pub fn failing_index_of(mut self, err: SignalError) -> Self {
        self.index = Err(err);
        self
    }

    /// Make `character_at` fail with `err`.
    #[must_use]
    pub fn failing_character_at(mut self, err: SignalError) -> Self {
        self.symbol = Err(err);
        self
    }
}

impl Alphabet for FixedAlphabet {
    fn index_of(&self, symbol: char) -> Result<usize, SignalError> {
        self.log.record(Stage::IndexOf(symbol));
        self.index.clone()
    }

    fn character_at(&self, offset: usize) -> Result<char, SignalError> {
        self.log.record(Stage::CharacterAt(offset));
        self.symbol.clone()
    }
}

/// Rotor stub.
#[derive(Debug, Clone)]
pub struct FixedRotor {
    log: SignalLog,
    side: Side,
    right_to_left: Result<usize, SignalError>,
    left_to_right: Result<usize, SignalError>,
}

impl FixedRotor {
    /// Rotor at `side` whose directions always yield the given offsets.
    pub fn new(log: &SignalLog, side: Side, right_to_left: usize, left_to_right: usize) -> Self {
        Self {
            log: log.clone(),
            side,
            right_to_left: Ok(right_to_left),
            left_to_right: Ok(left_to_right),
        }
    }

    /// Make `encode_right_to_left` fail with `err`.
    #[must_use]
    pub fn failing_right_to_left(mut self, err: SignalError) -> Self {
        self.right_to_left = Err(err);
        self
    }

    /// Make `encode_left_to_right` fail with `err`.
    #[must_use]
    pub fn failing_left_to_right(mut self, err: SignalError) -> Self {
        self.left_to_right = Err(err);
        self
    }
}

impl Rotor for FixedRotor {
    fn encode_right_to_left(&self, offset: usize) -> Result<usize, SignalError> {
        self.log.record(Stage::RightToLeft { side: self.side, offset });
        self.right_to_left.clone()
    }

    fn encode_left_to_right(&self, offset: usize) -> Result<usize, SignalError> {
        self.log.record(Stage::LeftToRight { side: self.side, offset });
        self.left_to_right.clone()
    }
}

/// Reflector stub.
#[derive(Debug, Clone)]
pub struct FixedReflector {
    log: SignalLog,
    reflected: Result<usize, SignalError>,
}

impl FixedReflector {
    /// `reflect` always yields `reflected`.
    pub fn new(log: &SignalLog, reflected: usize) -> Self {
        Self { log: log.clone(), reflected: Ok(reflected) }
    }

    /// Make `reflect` fail with `err`.
    #[must_use]
    pub fn failing(mut self, err: SignalError) -> Self {
        self.reflected = Err(err);
        self
    }
}

impl Reflector for FixedReflector {
    fn reflect(&self, offset: usize) -> Result<usize, SignalError> {
        self.log.record(Stage::Reflect(offset));
        self.reflected.clone()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn stubs_share_one_log() {
        let log = SignalLog::new();
        let alphabet = FixedAlphabet::new(&log, 7, 'Q');
        let rotor = FixedRotor::new(&log, Side::Center, 1, 2);

        assert_eq!(alphabet.index_of('X'), Ok(7));
        assert_eq!(rotor.encode_left_to_right(99), Ok(2));

        assert_eq!(
            log.calls(),
            vec![Stage::IndexOf('X'), Stage::LeftToRight { side: Side::Center, offset: 99 }]
        );
    }

    #[test]
    fn failing_stub_still_records() {
        let log = SignalLog::new();
        let err = SignalError::OutOfRange { offset: 5, len: 3 };
        let reflector = FixedReflector::new(&log, 0).failing(err.clone());

        assert_eq!(reflector.reflect(5), Err(err));
        assert_eq!(log.calls(), vec![Stage::Reflect(5)]);
    }

    #[test]
    fn clear_empties_log() {
        let log = SignalLog::new();
        let alphabet = FixedAlphabet::new(&log, 0, 'A');
        let _ = alphabet.character_at(3);
        assert_eq!(log.len(), 1);

        log.clear();
        assert!(log.is_empty());
    }
}
