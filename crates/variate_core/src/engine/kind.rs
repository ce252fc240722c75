//! Static dispatch over the available engines.
//!
//! [`EngineKind`] names an engine (for configuration files and command-line
//! flags) and [`AnyEngine`] holds one, dispatching through `match` so that
//! run-time engine selection costs no vtable indirection.

use std::fmt;
use std::str::FromStr;

use super::{BitEngine, Mt19937Engine, Well1024aEngine};
use crate::error::EngineError;

/// Identifier of a bit engine.
///
/// # Examples
///
/// ```
/// use variate_core::EngineKind;
///
/// let kind: EngineKind = "WELL".parse().unwrap();
/// assert_eq!(kind, EngineKind::Well1024a);
/// assert_eq!(kind.to_string(), "well1024a");
/// ```
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(try_from = "String", into = "String"))]
pub enum EngineKind {
    /// The 624-word twisted-feedback generator.
    #[default]
    Mt19937,
    /// The 32-word linear-recurrence generator.
    Well1024a,
}

impl EngineKind {
    /// All engines, in declaration order.
    pub const ALL: [EngineKind; 2] = [EngineKind::Mt19937, EngineKind::Well1024a];

    /// Constructs the named engine seeded with `seed`.
    pub fn build(self, seed: u32) -> AnyEngine {
        match self {
            EngineKind::Mt19937 => AnyEngine::Mt19937(Mt19937Engine::new(seed)),
            EngineKind::Well1024a => AnyEngine::Well1024a(Well1024aEngine::new(seed)),
        }
    }

    /// Lower-case identifier used in configuration.
    pub fn as_str(&self) -> &'static str {
        match self {
            EngineKind::Mt19937 => "mt19937",
            EngineKind::Well1024a => "well1024a",
        }
    }
}

impl FromStr for EngineKind {
    type Err = EngineError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "mt19937" | "mt" | "mersenne" => Ok(EngineKind::Mt19937),
            "well1024a" | "well" => Ok(EngineKind::Well1024a),
            _ => Err(EngineError::UnknownEngine(s.to_string())),
        }
    }
}

impl TryFrom<String> for EngineKind {
    type Error = EngineError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<EngineKind> for String {
    fn from(kind: EngineKind) -> Self {
        kind.as_str().to_string()
    }
}

impl fmt::Display for EngineKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// An engine selected at run time.
///
/// Use this instead of `Box<dyn BitEngine>` when the engine is chosen from
/// configuration.
///
/// # Examples
///
/// ```
/// use variate_core::{AnyEngine, BitEngine, EngineKind};
///
/// let mut engine = EngineKind::Mt19937.build(1);
/// assert_eq!(engine.kind(), EngineKind::Mt19937);
/// assert!(engine.next_uniform() < 1.0);
/// ```
#[derive(Debug)]
pub enum AnyEngine {
    /// MT19937 engine
    Mt19937(Mt19937Engine),
    /// WELL1024a engine
    Well1024a(Well1024aEngine),
}

impl AnyEngine {
    /// Returns the kind of the wrapped engine.
    pub fn kind(&self) -> EngineKind {
        match self {
            AnyEngine::Mt19937(_) => EngineKind::Mt19937,
            AnyEngine::Well1024a(_) => EngineKind::Well1024a,
        }
    }
}

impl From<Mt19937Engine> for AnyEngine {
    fn from(engine: Mt19937Engine) -> Self {
        AnyEngine::Mt19937(engine)
    }
}

impl From<Well1024aEngine> for AnyEngine {
    fn from(engine: Well1024aEngine) -> Self {
        AnyEngine::Well1024a(engine)
    }
}

impl BitEngine for AnyEngine {
    fn set_seed(&mut self, seed: u32) {
        match self {
            AnyEngine::Mt19937(e) => e.set_seed(seed),
            AnyEngine::Well1024a(e) => e.set_seed(seed),
        }
    }

    #[inline]
    fn seed(&self) -> u32 {
        match self {
            AnyEngine::Mt19937(e) => e.seed(),
            AnyEngine::Well1024a(e) => e.seed(),
        }
    }

    #[inline]
    fn name(&self) -> &'static str {
        match self {
            AnyEngine::Mt19937(e) => e.name(),
            AnyEngine::Well1024a(e) => e.name(),
        }
    }

    #[inline]
    fn next_word(&mut self) -> u32 {
        match self {
            AnyEngine::Mt19937(e) => e.next_word(),
            AnyEngine::Well1024a(e) => e.next_word(),
        }
    }

    #[inline]
    fn next_uniform(&mut self) -> f64 {
        match self {
            AnyEngine::Mt19937(e) => e.next_uniform(),
            AnyEngine::Well1024a(e) => e.next_uniform(),
        }
    }
}
