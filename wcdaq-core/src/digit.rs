//! Digitized hit type and the digitizer strategy trait.

use crate::hit::{RawHit, SensorId};
use crate::registry::DigitizerKind;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// A hit after digitization: merged, gain-corrected and threshold-tested.
///
/// Digits are owned by the per-event digit collection and are the input to
/// triggering.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Digit {
    /// Sensor the digit was read out from.
    pub sensor: SensorId,
    /// Digitized time in nanoseconds.
    pub time: f64,
    /// Calibrated charge in photoelectrons.
    pub pe: f32,
}

impl Digit {
    /// Creates a new digit.
    #[inline]
    #[must_use]
    pub fn new(sensor: u32, time: f64, pe: f32) -> Self {
        Self {
            sensor: SensorId::new(sensor),
            time,
            pe,
        }
    }
}

/// Trait for digitization algorithms.
///
/// Exactly one implementation is active per run, selected by configured
/// name via [`DigitizerKind::from_name`](crate::registry::DigitizerKind).
/// Digitization is a pure transformation: an empty hit collection yields an
/// empty digit collection.
pub trait Digitizer: Send + Sync {
    /// Registry identity of this algorithm.
    fn kind(&self) -> DigitizerKind;

    /// Canonical name of this algorithm.
    fn name(&self) -> &'static str {
        self.kind().name()
    }

    /// Converts one event's raw hits into digits.
    fn digitize(&self, hits: &[RawHit]) -> Vec<Digit>;
}
