//! Model-based property tests.
//!
//! Random machines are built from a [`MachineSeed`], run through both the
//! real `enigma-core` machine and the [`ReferenceMachine`], and compared.
//!
//! ```text
//! proptest generates: MachineSeed
//!                          │
//!                    MachineConfig
//!           ┌──────────────┼──────────────┐
//!           ▼              ▼              ▼
//!   ReferenceMachine  WiredMachine     Compare
//! ```

use enigma_core::SignalError;
use enigma_harness::{MAX_SYMBOLS, MachineSeed, ReferenceMachine};
use proptest::prelude::*;

fn seed_strategy() -> impl Strategy<Value = MachineSeed> {
    (any::<u64>(), any::<u8>()).prop_map(|(seed, size_class)| MachineSeed { seed, size_class })
}

proptest! {
    /// Real machine and model agree on every symbol.
    #[test]
    fn prop_model_matches_real(machine_seed in seed_strategy()) {
        let config = machine_seed.config()?;
        let real = config.build()?;
        let Some(model) = ReferenceMachine::from_config(&config) else {
            return Err(TestCaseError::fail(format!("model rejected a valid config: {config:?}")));
        };

        for &symbol in model.symbols() {
            prop_assert_eq!(
                real.encode(symbol).ok(),
                model.encode(symbol),
                "divergence on {:?} for {:?}",
                symbol,
                machine_seed
            );
        }
    }

    /// Encoding twice recovers the input for any random historical machine.
    #[test]
    fn prop_random_machine_self_reciprocal(machine_seed in seed_strategy()) {
        let config = machine_seed.config()?;
        let machine = config.build()?;

        for symbol in config.alphabet.chars() {
            let once = machine.encode(symbol)?;
            prop_assert_ne!(once, symbol);
            prop_assert_eq!(machine.encode(once)?, symbol);
        }
    }

    /// The output table is a permutation of the alphabet.
    #[test]
    fn prop_substitution_is_bijective(machine_seed in seed_strategy()) {
        let config = machine_seed.config()?;
        let machine = config.build()?;

        let mut outputs = config
            .alphabet
            .chars()
            .map(|symbol| machine.encode(symbol))
            .collect::<Result<Vec<_>, _>>()?;
        outputs.sort_unstable();
        let mut expected: Vec<char> = config.alphabet.chars().collect();
        expected.sort_unstable();
        prop_assert_eq!(outputs, expected);
    }

    /// Symbols outside the random alphabet are rejected, never mapped.
    #[test]
    fn prop_foreign_symbol_rejected(machine_seed in seed_strategy()) {
        let config = machine_seed.config()?;
        let machine = config.build()?;
        prop_assert_eq!(machine.encode('#'), Err(SignalError::InvalidSymbol { symbol: '#' }));
    }
}

#[test]
fn largest_alphabet_is_reachable() {
    let largest = (0..=u8::MAX)
        .map(|size_class| MachineSeed { seed: 0, size_class }.len())
        .max();
    assert_eq!(largest, Some(MAX_SYMBOLS));
}
