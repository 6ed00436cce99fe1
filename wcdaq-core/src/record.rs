//! Per-event output record.

use crate::digit::Digit;
use crate::geometry::DetectorRegion;
use crate::hit::RawHit;
use crate::window::TriggerWindow;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Ancestry and trajectory summary for one event.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct EventSummary {
    /// Primary vertex position in detector coordinates (mm).
    pub vertex: [f64; 3],
    /// Region the vertex falls into.
    pub vertex_region: DetectorRegion,
    /// Region the primary track stopped in.
    pub stopping_region: DetectorRegion,
    /// Number of stored trajectories.
    pub track_count: u32,
}

/// Flattened per-event snapshot handed to the persistence collaborator.
///
/// Created once per event by the orchestrator, written once, then dropped.
/// The schema is append-only: new fields may be added, existing field
/// meaning must not change without a version bump.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct OutputRecord {
    /// Index of the event within the run.
    pub event_index: u32,
    /// Ancestry/trajectory summary.
    pub summary: EventSummary,
    /// Raw hits as produced by the transport stage.
    pub raw_hits: Vec<RawHit>,
    /// Digitized hits.
    pub digits: Vec<Digit>,
    /// Trigger windows, ordered by start time ascending.
    pub windows: Vec<TriggerWindow>,
}

impl OutputRecord {
    /// Returns true if no trigger condition was satisfied for this event.
    #[must_use]
    pub fn no_trigger_fired(&self) -> bool {
        self.windows.is_empty()
    }
}
