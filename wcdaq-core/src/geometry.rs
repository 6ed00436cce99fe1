//! Read-only geometry lookups for ancestry classification.
//!
//! The detector description itself lives outside this crate; the pipeline
//! only ever asks which region a point or a named volume falls into, and
//! the answers feed the per-event summary. They never affect digitizer or
//! trigger control flow.

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Coarse detector region classification.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum DetectorRegion {
    /// Inside the instrumented target volume.
    InnerVolume,
    /// Inside the outer veto shell.
    OuterVeto,
    /// Inside a sensor envelope.
    Sensor,
    /// Outside the detector entirely.
    Outside,
}

/// Read-only region lookups against the external geometry description.
pub trait VolumeLookup: Send + Sync {
    /// Classifies a point in detector coordinates (mm).
    fn region_at(&self, point: [f64; 3]) -> DetectorRegion;

    /// Classifies a physical volume by name.
    fn region_named(&self, name: &str) -> DetectorRegion;
}

/// Cylindrical tank geometry: an inner volume wrapped in a veto shell.
///
/// Reference lookup implementation used by the CLI and the tests; a real
/// run would plug in the full detector description instead.
#[derive(Debug, Clone, Copy)]
pub struct CylindricalVolumes {
    /// Inner volume radius in mm.
    pub radius: f64,
    /// Inner volume half-height in mm.
    pub half_height: f64,
    /// Veto shell thickness in mm.
    pub veto_thickness: f64,
}

impl Default for CylindricalVolumes {
    fn default() -> Self {
        Self {
            radius: 3_000.0,
            half_height: 4_000.0,
            veto_thickness: 600.0,
        }
    }
}

impl VolumeLookup for CylindricalVolumes {
    fn region_at(&self, point: [f64; 3]) -> DetectorRegion {
        let r = point[0].hypot(point[1]);
        let z = point[2].abs();
        if r <= self.radius && z <= self.half_height {
            DetectorRegion::InnerVolume
        } else if r <= self.radius + self.veto_thickness
            && z <= self.half_height + self.veto_thickness
        {
            DetectorRegion::OuterVeto
        } else {
            DetectorRegion::Outside
        }
    }

    fn region_named(&self, name: &str) -> DetectorRegion {
        match name {
            "tank" | "inner" => DetectorRegion::InnerVolume,
            "veto" => DetectorRegion::OuterVeto,
            "sensor" | "cathode" => DetectorRegion::Sensor,
            _ => DetectorRegion::Outside,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_region_at() {
        let vols = CylindricalVolumes::default();
        assert_eq!(
            vols.region_at([0.0, 0.0, 0.0]),
            DetectorRegion::InnerVolume
        );
        assert_eq!(
            vols.region_at([3_200.0, 0.0, 0.0]),
            DetectorRegion::OuterVeto
        );
        assert_eq!(
            vols.region_at([0.0, 0.0, 4_300.0]),
            DetectorRegion::OuterVeto
        );
        assert_eq!(
            vols.region_at([5_000.0, 5_000.0, 0.0]),
            DetectorRegion::Outside
        );
    }

    #[test]
    fn test_region_named() {
        let vols = CylindricalVolumes::default();
        assert_eq!(vols.region_named("tank"), DetectorRegion::InnerVolume);
        assert_eq!(vols.region_named("veto"), DetectorRegion::OuterVeto);
        assert_eq!(vols.region_named("cathode"), DetectorRegion::Sensor);
        assert_eq!(vols.region_named("rock"), DetectorRegion::Outside);
    }
}
