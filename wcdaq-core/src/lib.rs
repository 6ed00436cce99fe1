//! wcdaq-core: Core types for water-Cherenkov readout simulation.
//!
//! This crate provides the data contracts of the DAQ chain (raw hits,
//! digits, trigger windows, output records), the algorithm registry that
//! maps configured names to digitizer/trigger identities, and the strategy
//! traits implemented by the concrete algorithms in `wcdaq-algorithms`.
//!

pub mod digit;
pub mod error;
pub mod geometry;
pub mod hit;
pub mod record;
pub mod registry;
pub mod window;

pub use digit::{Digit, Digitizer};
pub use error::{Error, Result};
pub use geometry::{CylindricalVolumes, DetectorRegion, VolumeLookup};
pub use hit::{RawHit, SensorId};
pub use record::{EventSummary, OutputRecord};
pub use registry::{DigitizerKind, TriggerKind};
pub use window::{Trigger, TriggerWindow};
