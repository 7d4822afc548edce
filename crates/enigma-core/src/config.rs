//! Machine configuration.
//!
//! [`MachineConfig`] is the assembly step that sits outside the signal path:
//! it names an alphabet and the wiring of every stage, validates them and
//! builds a [`WiredMachine`]. Configs are stored as CBOR.
//!
//! Omitted rotor wiring means the identity rotor, omitted reflector wiring
//! means the mirror reflector (`o -> N - 1 - o`).

use serde::{Deserialize, Serialize};

use crate::{
    alphabet::TableAlphabet,
    error::{ConfigError, WiringError},
    machine::Machine,
    reflector::WiredReflector,
    rotor::WiredRotor,
};

/// Machine built entirely from wiring tables.
pub type WiredMachine = Machine<TableAlphabet, WiredRotor, WiredReflector>;

/// Full description of a machine.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct MachineConfig {
    /// Ordered alphabet symbols.
    pub alphabet: String,
    /// Innermost rotor.
    pub left: RotorConfig,
    /// Middle rotor.
    pub center: RotorConfig,
    /// Outermost rotor.
    pub right: RotorConfig,
    /// Turnaround stage.
    pub reflector: ReflectorConfig,
}

impl Default for MachineConfig {
    fn default() -> Self {
        Self {
            alphabet: ('A'..='Z').collect(),
            left: RotorConfig::default(),
            center: RotorConfig::default(),
            right: RotorConfig::default(),
            reflector: ReflectorConfig::default(),
        }
    }
}

/// Wiring of one rotor.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RotorConfig {
    /// Left-hand symbol for each alphabet position; `None` is the identity.
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub wiring: Option<String>,
}

impl RotorConfig {
    /// Rotor with the given wiring string.
    pub fn wired(wiring: impl Into<String>) -> Self {
        Self { wiring: Some(wiring.into()) }
    }

    fn build(&self, alphabet: &TableAlphabet) -> Result<WiredRotor, WiringError> {
        match &self.wiring {
            Some(wiring) => WiredRotor::from_wiring(alphabet, wiring),
            None => Ok(WiredRotor::identity(alphabet)),
        }
    }
}

/// Wiring of the reflector.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReflectorConfig {
    /// Reflected symbol for each alphabet position; `None` is the mirror.
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub wiring: Option<String>,
    /// Require an involution without fixed points.
    #[serde(default = "historical_by_default")]
    pub historical: bool,
}

fn historical_by_default() -> bool {
    true
}

impl Default for ReflectorConfig {
    fn default() -> Self {
        Self { wiring: None, historical: true }
    }
}

impl ReflectorConfig {
    /// Historical reflector with the given wiring string.
    pub fn wired(wiring: impl Into<String>) -> Self {
        Self { wiring: Some(wiring.into()), historical: true }
    }

    fn build(&self, alphabet: &TableAlphabet) -> Result<WiredReflector, WiringError> {
        let reflector = match &self.wiring {
            Some(wiring) => WiredReflector::from_wiring(alphabet, wiring)?,
            None => WiredReflector::mirror(alphabet.len()),
        };
        if self.historical {
            reflector.validate_historical()?;
        }
        Ok(reflector)
    }
}

impl MachineConfig {
    /// Validate every table and assemble the machine.
    pub fn build(&self) -> Result<WiredMachine, ConfigError> {
        let alphabet = TableAlphabet::new(self.alphabet.chars()).map_err(at_stage("alphabet"))?;
        let left = self.left.build(&alphabet).map_err(at_stage("left"))?;
        let center = self.center.build(&alphabet).map_err(at_stage("center"))?;
        let right = self.right.build(&alphabet).map_err(at_stage("right"))?;
        let reflector = self.reflector.build(&alphabet).map_err(at_stage("reflector"))?;

        tracing::debug!(
            symbols = alphabet.len(),
            historical = self.reflector.historical,
            "assembled machine"
        );

        Ok(Machine::new(alphabet, left, center, right, reflector))
    }

    /// Decode a config from CBOR.
    pub fn from_cbor(bytes: &[u8]) -> Result<Self, ConfigError> {
        ciborium::from_reader(bytes).map_err(|e| ConfigError::Decode { reason: e.to_string() })
    }

    /// Encode this config as CBOR.
    pub fn to_cbor(&self) -> Result<Vec<u8>, ConfigError> {
        let mut bytes = Vec::new();
        ciborium::into_writer(self, &mut bytes)
            .map_err(|e| ConfigError::Encode { reason: e.to_string() })?;
        Ok(bytes)
    }
}

fn at_stage(stage: &'static str) -> impl FnOnce(WiringError) -> ConfigError {
    move |source| ConfigError::Wiring { stage, source }
}
