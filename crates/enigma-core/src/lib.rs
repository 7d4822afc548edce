//! Enigma Core
//!
//! Signal path of a rotor cipher machine. One input symbol is converted to an
//! offset, passed right to left through three rotors, reflected, passed back
//! left to right through the same rotors and converted back to a symbol.
//!
//! # Architecture
//!
//! ```text
//! symbol ─► Alphabet::index_of
//!             │
//!             ▼
//!   right ─► center ─► left ─► Reflector
//!                                 │
//!   right ◄─ center ◄─ left ◄─────┘
//!     │
//!     ▼
//! Alphabet::character_at ─► symbol
//! ```
//!
//! # Components
//!
//! - [`Alphabet`] / [`TableAlphabet`]: symbol <-> offset bijection
//! - [`Rotor`] / [`WiredRotor`]: one substitution stage, both directions
//! - [`Reflector`] / [`WiredReflector`]: the turnaround permutation
//! - [`Machine`]: the orchestrator
//! - [`MachineConfig`]: serializable description that assembles a machine
//!
//! # Design
//!
//! Every stage is a trait so test doubles and real wiring tables are
//! interchangeable. All operations are pure: no stage mutates on `encode`,
//! so encoding the output again under the same configuration returns the
//! original symbol. Rotors do not step between symbols.
//!
//! # Example
//!
//! ```
//! use enigma_core::{Machine, TableAlphabet, WiredReflector, WiredRotor};
//!
//! let alphabet = TableAlphabet::latin();
//! let rotor = WiredRotor::identity(&alphabet);
//! let reflector = WiredReflector::mirror(alphabet.len());
//!
//! let machine =
//!     Machine::new(alphabet, rotor.clone(), rotor.clone(), rotor, reflector);
//!
//! assert_eq!(machine.encode('A'), Ok('Z'));
//! assert_eq!(machine.encode('Z'), Ok('A'));
//! ```

#![forbid(unsafe_code)]
#![deny(missing_docs)]

pub mod alphabet;
pub mod config;
pub mod error;
pub mod machine;
pub mod reflector;
pub mod rotor;

pub use alphabet::{Alphabet, TableAlphabet};
pub use config::{MachineConfig, ReflectorConfig, RotorConfig, WiredMachine};
pub use error::{ConfigError, SignalError, WiringError};
pub use machine::Machine;
pub use reflector::{Reflector, WiredReflector};
pub use rotor::{Rotor, WiredRotor};
