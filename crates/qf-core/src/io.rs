//! Input/output channel type of a computation.

use core::fmt;
use core::str::FromStr;

use crate::QfError;

/// Whether a side of the computation is held as qubits or as classical data.
///
/// A quantum input is pre-allocated before the first measurement; a quantum
/// output survives the computation unmeasured. A classical input is prepared
/// on demand, and a classical output is measured like every other node.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum IoType {
    #[default]
    Quantum,
    Classical,
}

impl IoType {
    pub fn is_quantum(self) -> bool {
        self == IoType::Quantum
    }

    pub fn as_str(self) -> &'static str {
        match self {
            IoType::Quantum => "quantum",
            IoType::Classical => "classical",
        }
    }
}

impl fmt::Display for IoType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for IoType {
    type Err = QfError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "quantum" => Ok(IoType::Quantum),
            "classical" => Ok(IoType::Classical),
            other => Err(QfError::InvalidConfiguration {
                what: format!("I/O type must be quantum or classical, got '{other}'"),
            }),
        }
    }
}
