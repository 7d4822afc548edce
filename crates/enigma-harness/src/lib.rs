//! Test harness for the rotor signal path.
//!
//! # Stubs
//!
//! The `stub` module provides stages that return fixed, distinguishable
//! values and record every call in a shared [`SignalLog`]. A machine built
//! from stubs exposes exactly which stage saw which argument, in which order.
//!
//! # Seeded Wiring
//!
//! [`SeededWiring`] draws random rotor permutations and random historical
//! reflectors from a ChaCha RNG. The same seed always yields the same
//! machine, so a failing property test reproduces from its seed alone.
//!
//! # Model-Based Testing
//!
//! The `model` module provides [`ReferenceMachine`], a deliberately naive
//! composition of offset tables. Configurations are applied to both the
//! model and the real machine and their outputs compared.

#![forbid(unsafe_code)]
#![warn(missing_docs)]

pub mod model;
pub mod stub;
pub mod wiring;

pub use model::{MachineSeed, ReferenceMachine};
pub use stub::{FixedAlphabet, FixedReflector, FixedRotor, Side, SignalLog, Stage};
pub use wiring::{MAX_SYMBOLS, SeededWiring, symbols};
