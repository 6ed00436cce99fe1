//! Regions trigger: per-region digit-count threshold.

use wcdaq_core::window::order_by_start;
use wcdaq_core::{Digit, Trigger, TriggerKind, TriggerWindow};

/// An inclusive sensor-channel span treated as one readout region.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct SensorSpan {
    /// First channel of the span.
    pub first: u32,
    /// Last channel of the span (inclusive).
    pub last: u32,
}

impl SensorSpan {
    /// Creates a span covering `first..=last`.
    #[must_use]
    pub fn new(first: u32, last: u32) -> Self {
        Self { first, last }
    }

    /// Returns true if the sensor belongs to the span.
    #[must_use]
    pub fn contains(self, sensor: u32) -> bool {
        (self.first..=self.last).contains(&sensor)
    }
}

/// Configuration for the Regions trigger.
#[derive(Clone, Debug)]
pub struct RegionsConfig {
    /// Regions scanned independently.
    pub regions: Vec<SensorSpan>,
    /// Digit count required within one region for a window to fire.
    pub threshold: usize,
    /// Window width (ns).
    pub width: f64,
}

impl Default for RegionsConfig {
    fn default() -> Self {
        Self {
            regions: vec![SensorSpan::new(0, 4_999), SensorSpan::new(5_000, 9_999)],
            threshold: 6,
            width: 200.0,
        }
    }
}

impl RegionsConfig {
    /// Creates a configuration with default values.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Replaces the region list.
    #[must_use]
    pub fn with_regions(mut self, regions: Vec<SensorSpan>) -> Self {
        self.regions = regions;
        self
    }

    /// Sets the per-region firing threshold.
    #[must_use]
    pub fn with_threshold(mut self, threshold: usize) -> Self {
        self.threshold = threshold;
        self
    }

    /// Sets the window width.
    #[must_use]
    pub fn with_width(mut self, width: f64) -> Self {
        self.width = width;
        self
    }
}

/// Spatial-region trigger.
///
/// Each configured region runs its own sliding-count scan over the digits
/// on its channels. Windows from different regions may overlap in time and
/// are all retained; the combined list is ordered by window start.
#[derive(Clone, Debug, Default)]
pub struct RegionsTrigger {
    config: RegionsConfig,
}

impl RegionsTrigger {
    /// Creates the trigger with the given configuration.
    #[must_use]
    pub fn new(config: RegionsConfig) -> Self {
        Self { config }
    }

    fn scan_region(&self, region: SensorSpan, ordered: &[Digit], windows: &mut Vec<TriggerWindow>) {
        let in_region: Vec<Digit> = ordered
            .iter()
            .filter(|d| region.contains(d.sensor.as_u32()))
            .copied()
            .collect();

        let mut i = 0;
        while i < in_region.len() {
            let start = in_region[i].time;
            let mut j = i;
            while j < in_region.len() && in_region[j].time - start <= self.config.width {
                j += 1;
            }
            if j - i >= self.config.threshold {
                let mut window = TriggerWindow::new(TriggerKind::Regions, start);
                window.digits = in_region[i..j].to_vec();
                windows.push(window);
                i = j;
            } else {
                i += 1;
            }
        }
    }
}

impl Trigger for RegionsTrigger {
    fn kind(&self) -> TriggerKind {
        TriggerKind::Regions
    }

    fn scan(&self, digits: &[Digit]) -> Vec<TriggerWindow> {
        let mut ordered: Vec<Digit> = digits.to_vec();
        ordered.sort_by(|a, b| a.time.total_cmp(&b.time));

        let mut windows = Vec::new();
        for &region in &self.config.regions {
            self.scan_region(region, &ordered, &mut windows);
        }

        order_by_start(&mut windows);
        windows
    }
}
