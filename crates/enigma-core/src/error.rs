//! Error types.
//!
//! [`SignalError`] is the only error a signal pass can produce. Table
//! construction reports [`WiringError`], and configuration loading wraps it
//! in [`ConfigError`].

use thiserror::Error;

/// Errors raised while a signal passes through a stage.
///
/// Every stage returns either a valid offset/symbol or one of these. The
/// machine hands the first one back to the caller unchanged.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SignalError {
    /// Symbol is not a member of the configured alphabet.
    #[error("invalid symbol: {symbol:?} is not in the alphabet")]
    InvalidSymbol {
        /// The rejected symbol.
        symbol: char,
    },

    /// Offset falls outside `[0, len)`.
    #[error("offset {offset} out of range for {len} contacts")]
    OutOfRange {
        /// The rejected offset.
        offset: usize,
        /// Number of contacts of the stage that rejected it.
        len: usize,
    },
}

/// Errors raised while building a wiring table.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum WiringError {
    /// A table needs at least one contact.
    #[error("wiring table is empty")]
    Empty,

    /// Symbol appears more than once.
    #[error("duplicate symbol {symbol:?}")]
    DuplicateSymbol {
        /// The repeated symbol.
        symbol: char,
    },

    /// Wiring names a symbol the alphabet does not contain.
    #[error("unknown symbol {symbol:?}")]
    UnknownSymbol {
        /// The foreign symbol.
        symbol: char,
    },

    /// Table length differs from the alphabet it is wired against.
    #[error("length mismatch: expected {expected}, got {actual}")]
    LengthMismatch {
        /// Alphabet length.
        expected: usize,
        /// Table length.
        actual: usize,
    },

    /// Raw offset table contains an entry outside `[0, len)`.
    #[error("offset {offset} out of range for {len} contacts")]
    OffsetOutOfRange {
        /// The offending entry.
        offset: usize,
        /// Table length.
        len: usize,
    },

    /// Raw offset table maps two contacts to the same offset.
    #[error("duplicate offset {offset}")]
    DuplicateOffset {
        /// The repeated target.
        offset: usize,
    },

    /// Reflector is not its own inverse.
    #[error("reflector is not an involution: {offset} -> {image} -> {back}")]
    NotInvolution {
        /// Starting contact.
        offset: usize,
        /// Where it reflects to.
        image: usize,
        /// Where the image reflects to.
        back: usize,
    },

    /// Reflector maps a contact to itself.
    #[error("reflector has a fixed point at {offset}")]
    FixedPoint {
        /// The self-mapped contact.
        offset: usize,
    },
}

/// Errors from loading or assembling a [`MachineConfig`].
///
/// [`MachineConfig`]: crate::MachineConfig
#[derive(Debug, Error)]
pub enum ConfigError {
    /// One of the wiring tables is malformed.
    #[error("{stage} wiring: {source}")]
    Wiring {
        /// Which part of the machine failed (`alphabet`, `left`, ...).
        stage: &'static str,
        /// Underlying table error.
        #[source]
        source: WiringError,
    },

    /// CBOR input could not be decoded.
    #[error("config decode failed: {reason}")]
    Decode {
        /// Description of the decode failure.
        reason: String,
    },

    /// Config could not be encoded to CBOR.
    #[error("config encode failed: {reason}")]
    Encode {
        /// Description of the encode failure.
        reason: String,
    },
}

impl ConfigError {
    /// Returns the wiring error if this is a table problem.
    pub fn wiring(&self) -> Option<&WiringError> {
        match self {
            Self::Wiring { source, .. } => Some(source),
            Self::Decode { .. } | Self::Encode { .. } => None,
        }
    }
}
