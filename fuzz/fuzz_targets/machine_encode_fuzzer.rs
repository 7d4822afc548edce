//! Fuzz target for machine assembly and the signal path
//!
//! # Strategy
//!
//! - Random machines: seeded wiring over alphabets of every even size
//! - Arbitrary symbols: members, non-members, any Unicode scalar
//! - Raw configs: arbitrary bytes fed to the CBOR config decoder
//!
//! # Invariants
//!
//! - NEVER panic on any input symbol or config bytes
//! - Members encode to members, and encoding twice returns the input
//! - No member encodes to itself (historical reflector)
//! - Non-members fail with `InvalidSymbol`, nothing else
//! - A config that decodes and builds yields a machine that never panics

#![no_main]

use arbitrary::Arbitrary;
use enigma_core::{MachineConfig, SignalError};
use enigma_harness::MachineSeed;
use libfuzzer_sys::fuzz_target;

#[derive(Debug, Clone, Arbitrary)]
enum FuzzEvent {
    Encode(char),
    EncodeMember { index: u8 },
}

#[derive(Debug, Clone, Arbitrary)]
struct FuzzInput {
    machine: MachineSeed,
    events: Vec<FuzzEvent>,
    raw_config: Vec<u8>,
}

fuzz_target!(|input: FuzzInput| {
    let Ok(config) = input.machine.config() else {
        panic!("seeded config must always be valid: {:?}", input.machine);
    };
    let Ok(machine) = config.build() else {
        panic!("seeded config must always build: {:?}", input.machine);
    };
    let members: Vec<char> = config.alphabet.chars().collect();

    for event in input.events {
        let symbol = match event {
            FuzzEvent::Encode(symbol) => symbol,
            FuzzEvent::EncodeMember { index } => members[usize::from(index) % members.len()],
        };

        match machine.encode(symbol) {
            Ok(output) => {
                assert!(members.contains(&symbol), "non-member {symbol:?} encoded");
                assert!(members.contains(&output), "{symbol:?} left the alphabet: {output:?}");
                assert_ne!(output, symbol, "{symbol:?} encoded to itself");
                assert_eq!(machine.encode(output), Ok(symbol), "not reciprocal");
            },
            Err(SignalError::InvalidSymbol { symbol: rejected }) => {
                assert_eq!(rejected, symbol);
                assert!(!members.contains(&symbol), "member {symbol:?} rejected");
            },
            Err(err) => panic!("seeded machine produced {err}"),
        }
    }

    if let Ok(decoded) = MachineConfig::from_cbor(&input.raw_config) {
        if let Ok(machine) = decoded.build() {
            for symbol in decoded.alphabet.chars() {
                let _ = machine.encode(symbol);
            }
        }
    }
});
