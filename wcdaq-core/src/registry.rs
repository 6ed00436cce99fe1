//! Algorithm registry: enumeration-to-name tables for both DAQ families.
//!
//! Each family is a closed enumeration with an `Undefined` sentinel at the
//! numeric minimum; the trigger family additionally carries a terminal
//! `Failure` member marking the "no trigger fired" outcome. Canonical names
//! are case-sensitive and unique within a family. The tables are static and
//! immutable, so lookups are lock-free and safe to share across workers.

use std::fmt;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Identity of a digitization algorithm.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[repr(i32)]
pub enum DigitizerKind {
    /// Sentinel: no algorithm resolved.
    Undefined = -1,
    /// Baseline digitizer with per-sensor charge integration.
    Ski,
}

impl DigitizerKind {
    /// Every selectable member, in declaration order.
    pub const MEMBERS: [Self; 1] = [Self::Ski];

    /// Canonical name of the member.
    ///
    /// Total over the enumeration: values without a defined mapping return
    /// the empty string rather than an error.
    #[must_use]
    pub fn name(self) -> &'static str {
        match self {
            Self::Ski => "SKI",
            Self::Undefined => "",
        }
    }

    /// Resolves a configured name against the member table.
    ///
    /// Unknown names log a diagnostic and resolve to [`Self::Undefined`];
    /// the error becomes fatal only once the pipeline tries to build the
    /// strategy.
    #[must_use]
    pub fn from_name(name: &str) -> Self {
        for kind in Self::MEMBERS {
            if kind.name() == name {
                return kind;
            }
        }
        log::warn!("unknown digitizer name {name:?}");
        Self::Undefined
    }
}

impl fmt::Display for DigitizerKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Identity of a trigger algorithm, or of a trigger outcome.
///
/// `Failure` is the terminal member: it bounds the name-resolution loop and
/// tags the "no trigger fired" outcome. It is name-resolvable like any
/// member but refused by the strategy factory.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[repr(i32)]
pub enum TriggerKind {
    /// Sentinel: no algorithm resolved.
    Undefined = -1,
    /// Sliding-window digit-count threshold.
    NDigits,
    /// NDigits variant reserved for DAQ parameter studies.
    NDigitsTest,
    /// Digit-count threshold restricted to a sensor neighbourhood.
    LocalNHits,
    /// In-time-coincidence ratio cut.
    ItcRatio,
    /// Per-region digit-count threshold.
    Regions,
    /// Hemisphere hit-count asymmetry.
    Anisotropy,
    /// Pass-through: every digit accepted into one trivial window.
    NoTrigger,
    /// Terminal outcome tag: no trigger condition was satisfied.
    Failure,
}

impl TriggerKind {
    /// Every member after `Undefined`, through `Failure` inclusive.
    pub const MEMBERS: [Self; 8] = [
        Self::NDigits,
        Self::NDigitsTest,
        Self::LocalNHits,
        Self::ItcRatio,
        Self::Regions,
        Self::Anisotropy,
        Self::NoTrigger,
        Self::Failure,
    ];

    /// Canonical name of the member.
    ///
    /// Total over the enumeration; `Undefined` maps to the empty string.
    #[must_use]
    pub fn name(self) -> &'static str {
        match self {
            Self::NDigits => "NDigits",
            Self::NDigitsTest => "NDigits_TEST",
            Self::LocalNHits => "Local_NHits",
            Self::ItcRatio => "ITCRatio",
            Self::Regions => "Regions",
            Self::Anisotropy => "Anisotropy",
            Self::NoTrigger => "NoTrigger",
            Self::Failure => "No_trigger_passed",
            Self::Undefined => "",
        }
    }

    /// Resolves a configured name against the member table.
    ///
    /// Unknown names log a diagnostic and resolve to [`Self::Undefined`].
    #[must_use]
    pub fn from_name(name: &str) -> Self {
        for kind in Self::MEMBERS {
            if kind.name() == name {
                return kind;
            }
        }
        log::warn!("unknown trigger name {name:?}");
        Self::Undefined
    }
}

impl fmt::Display for TriggerKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
