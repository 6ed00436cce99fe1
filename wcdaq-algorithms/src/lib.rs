//! wcdaq-algorithms: DAQ algorithm implementations for wcdaq.
//!
//! This crate provides the concrete strategy families:
//! - **SKI** - baseline digitizer with per-sensor charge integration
//! - **NDigits** (+ test variant) - sliding-window digit-count trigger
//! - **`Local_NHits`** - neighbourhood-restricted count trigger
//! - **ITCRatio** - in-time-coincidence ratio trigger
//! - **Regions** - per-region count trigger
//! - **Anisotropy** - hemisphere asymmetry trigger
//! - **NoTrigger** - pass-through window
//!
//! plus the [`EventOrchestrator`] that lazily constructs the configured
//! pair and drives the digitize/trigger/record chain per event.
#![warn(missing_docs)]

mod anisotropy;
mod factory;
mod itc_ratio;
mod local_nhits;
mod ndigits;
mod orchestrator;
mod passthrough;
mod regions;
mod ski;

pub use anisotropy::{AnisotropyConfig, AnisotropyTrigger};
pub use factory::{build_digitizer, build_trigger, DaqParams};
pub use itc_ratio::{ItcRatioConfig, ItcRatioTrigger};
pub use local_nhits::{LocalNHitsConfig, LocalNHitsTrigger};
pub use ndigits::{NDigitsConfig, NDigitsTrigger};
pub use orchestrator::{DaqConfig, EventContext, EventOrchestrator};
pub use passthrough::NoTriggerPassthrough;
pub use regions::{RegionsConfig, RegionsTrigger};
pub use ski::{SkiConfig, SkiDigitizer};

// Re-export core strategy traits
pub use wcdaq_core::{Digitizer, Trigger};
