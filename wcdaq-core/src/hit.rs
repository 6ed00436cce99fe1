//! Raw hit types produced by the physics transport stage.

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Identity of a photosensor channel on the detector.
///
/// Channel numbering follows the detector layout: consecutive ids are
/// physically adjacent sensors, which the locality-based triggers rely on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct SensorId(pub u32);

impl SensorId {
    /// Creates a new sensor id.
    #[inline]
    #[must_use]
    pub fn new(id: u32) -> Self {
        Self(id)
    }

    /// Returns the raw channel number.
    #[inline]
    #[must_use]
    pub fn as_u32(self) -> u32 {
        self.0
    }

    /// Channel distance to another sensor.
    #[inline]
    #[must_use]
    pub fn channel_distance(self, other: Self) -> u32 {
        self.0.abs_diff(other.0)
    }
}

/// A single energy deposition registered at one sensor.
///
/// Produced upstream by the transport engine, immutable once produced and
/// scoped to one event. Times are in nanoseconds from event start; `pe` is
/// the photoelectron-equivalent amplitude.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct RawHit {
    /// Sensor that registered the deposition.
    pub sensor: SensorId,
    /// Hit time in nanoseconds.
    pub time: f64,
    /// Photoelectron-equivalent amplitude.
    pub pe: f32,
}

impl RawHit {
    /// Creates a new raw hit.
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

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_channel_distance() {
        let a = SensorId::new(10);
        let b = SensorId::new(17);
        assert_eq!(a.channel_distance(b), 7);
        assert_eq!(b.channel_distance(a), 7);
        assert_eq!(a.channel_distance(a), 0);
    }

    #[test]
    fn test_raw_hit() {
        let hit = RawHit::new(42, 130.5, 1.2);
        assert_eq!(hit.sensor.as_u32(), 42);
        assert_relative_eq!(hit.time, 130.5);
        assert_relative_eq!(hit.pe, 1.2);
    }
}
