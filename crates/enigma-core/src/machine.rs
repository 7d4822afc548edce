//! Machine: the signal path orchestrator.
//!
//! ## Signal path
//!
//! ```text
//! index_of ─► right ─► center ─► left ─► reflect ─► left ─► center ─► right ─► character_at
//!             (R→L)    (R→L)     (R→L)              (L→R)   (L→R)     (L→R)
//! ```
//!
//! ## Invariants
//!
//! - Fixed order: inbound right, center, left; one reflection; outbound
//!   left, center, right
//! - All-or-nothing: the first failing stage aborts the pass and its error is
//!   returned unchanged, later stages are never consulted
//! - No stepping: `encode` takes `&self`, so the same input always yields the
//!   same output and encoding the output again recovers the input

use crate::{alphabet::Alphabet, error::SignalError, reflector::Reflector, rotor::Rotor};

/// Three rotors, a reflector and an alphabet wired into one signal path.
///
/// Stages are injected at construction and never replaced. Any handle that
/// implements the stage trait works, including `&T` and `Box<dyn Rotor>`.
#[derive(Debug, Clone)]
pub struct Machine<A, R, F>
where
    A: Alphabet,
    R: Rotor,
    F: Reflector,
{
    /// Symbol <-> offset mapping at both ends of the path
    alphabet: A,
    /// Innermost rotor, next to the reflector
    left: R,
    /// Middle rotor
    center: R,
    /// Outermost rotor, first to see the signal
    right: R,
    /// Turnaround stage
    reflector: F,
}

impl<A, R, F> Machine<A, R, F>
where
    A: Alphabet,
    R: Rotor,
    F: Reflector,
{
    /// Assemble a machine from its stages.
    pub fn new(alphabet: A, left: R, center: R, right: R, reflector: F) -> Self {
        Self { alphabet, left, center, right, reflector }
    }

    /// Encode one symbol.
    ///
    /// The machine is self-reciprocal: with a reflector that is an
    /// involution, `encode(encode(s)?)` returns `s`.
    ///
    /// # Errors
    ///
    /// - [`SignalError::InvalidSymbol`] if `symbol` is not in the alphabet
    /// - [`SignalError::OutOfRange`] if a stage produces an offset the next
    ///   stage does not accept
    pub fn encode(&self, symbol: char) -> Result<char, SignalError> {
        let result = self.signal_path(symbol);
        match &result {
            Ok(output) => tracing::trace!(input = %symbol, output = %output, "signal path complete"),
            Err(err) => tracing::debug!(input = %symbol, error = %err, "signal path aborted"),
        }
        result
    }

    fn signal_path(&self, symbol: char) -> Result<char, SignalError> {
        let entry = self.alphabet.index_of(symbol)?;

        let inbound = self.right.encode_right_to_left(entry)?;
        let inbound = self.center.encode_right_to_left(inbound)?;
        let inbound = self.left.encode_right_to_left(inbound)?;

        let reflected = self.reflector.reflect(inbound)?;

        let outbound = self.left.encode_left_to_right(reflected)?;
        let outbound = self.center.encode_left_to_right(outbound)?;
        let outbound = self.right.encode_left_to_right(outbound)?;

        self.alphabet.character_at(outbound)
    }

    /// The alphabet at both ends of the path.
    pub fn alphabet(&self) -> &A {
        &self.alphabet
    }

    /// Innermost rotor.
    pub fn left(&self) -> &R {
        &self.left
    }

    /// Middle rotor.
    pub fn center(&self) -> &R {
        &self.center
    }

    /// Outermost rotor.
    pub fn right(&self) -> &R {
        &self.right
    }

    /// Turnaround stage.
    pub fn reflector(&self) -> &F {
        &self.reflector
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{TableAlphabet, WiredReflector, WiredRotor};

    fn mirror_machine() -> Machine<TableAlphabet, WiredRotor, WiredReflector> {
        let alphabet = TableAlphabet::latin();
        let rotor = WiredRotor::identity(&alphabet);
        let reflector = WiredReflector::mirror(alphabet.len());
        Machine::new(alphabet, rotor.clone(), rotor.clone(), rotor, reflector)
    }

    #[test]
    fn identity_rotors_mirror_reflector() {
        let machine = mirror_machine();
        assert_eq!(machine.encode('A'), Ok('Z'));
        assert_eq!(machine.encode('Z'), Ok('A'));
        assert_eq!(machine.encode('M'), Ok('N'));
    }

    #[test]
    fn repeated_calls_agree() {
        let machine = mirror_machine();
        let first = machine.encode('Q');
        assert_eq!(machine.encode('Q'), first);
    }

    #[test]
    fn invalid_symbol_propagates() {
        let machine = mirror_machine();
        assert_eq!(machine.encode('a'), Err(SignalError::InvalidSymbol { symbol: 'a' }));
    }

    #[test]
    fn short_reflector_aborts_pass() {
        let alphabet = TableAlphabet::latin();
        let rotor = WiredRotor::identity(&alphabet);
        // 'Z' reaches the reflector at offset 25, past a 4-contact table.
        let reflector = WiredReflector::mirror(4);
        let machine = Machine::new(alphabet, rotor.clone(), rotor.clone(), rotor, reflector);

        assert_eq!(machine.encode('Z'), Err(SignalError::OutOfRange { offset: 25, len: 4 }));
        assert_eq!(machine.encode('A'), Ok('D'));
    }

    #[test]
    fn borrowed_stages() {
        let alphabet = TableAlphabet::latin();
        let rotor = WiredRotor::identity(&alphabet);
        let reflector = WiredReflector::mirror(26);
        let machine = Machine::new(&alphabet, &rotor, &rotor, &rotor, &reflector);
        assert_eq!(machine.encode('B'), Ok('Y'));
    }

    #[test]
    fn boxed_rotors() {
        let alphabet = TableAlphabet::latin();
        let rotor: Box<dyn Rotor> = Box::new(WiredRotor::identity(&alphabet));
        let center: Box<dyn Rotor> = Box::new(WiredRotor::identity(&alphabet));
        let left: Box<dyn Rotor> = Box::new(WiredRotor::identity(&alphabet));
        let machine = Machine::new(alphabet, left, center, rotor, WiredReflector::mirror(26));
        assert_eq!(machine.encode('C'), Ok('X'));
    }

    #[test]
    fn machine_is_shareable_across_threads() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<Machine<TableAlphabet, WiredRotor, WiredReflector>>();

        let machine = &mirror_machine();
        std::thread::scope(|scope| {
            let handles: Vec<_> =
                ('A'..='Z').map(|symbol| scope.spawn(move || machine.encode(symbol))).collect();
            for (handle, symbol) in handles.into_iter().zip('A'..='Z') {
                let output = handle.join().unwrap().unwrap();
                assert_eq!(machine.encode(output), Ok(symbol));
            }
        });
    }
}
