//! Event input files.

use crate::Result;
use serde::{Deserialize, Serialize};
use std::fs::File;
use std::io::BufReader;
use std::path::Path;
use wcdaq_core::RawHit;

/// One simulated event as stored in an input file.
///
/// Only the hit list is required; summary fields default so hand-written
/// test files stay short.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EventInput {
    /// Primary vertex position (mm).
    #[serde(default)]
    pub vertex: [f64; 3],
    /// Name of the volume the primary track stopped in.
    #[serde(default)]
    pub stopping_volume: String,
    /// Number of stored trajectories.
    #[serde(default)]
    pub track_count: u32,
    /// Raw hits from the transport stage.
    pub hits: Vec<RawHit>,
}

/// Reads a JSON events file: one document holding an array of events.
///
/// # Errors
///
/// Fails on unreadable files or malformed JSON.
pub fn read_events<P: AsRef<Path>>(path: P) -> Result<Vec<EventInput>> {
    let file = File::open(path)?;
    let reader = BufReader::new(file);
    let events = serde_json::from_reader(reader)?;
    Ok(events)
}
