//! SKI digitizer: per-sensor charge integration.

use rayon::prelude::*;
use std::collections::HashMap;
use wcdaq_core::{Digit, Digitizer, DigitizerKind, RawHit, SensorId};

/// Configuration for the SKI digitizer.
#[derive(Clone, Debug)]
pub struct SkiConfig {
    /// Charge integration window per sensor (ns).
    pub integration_window: f64,
    /// Minimum calibrated charge for a digit to survive (pe).
    pub threshold_pe: f32,
    /// Multiplicative gain applied to the integrated charge.
    pub gain: f32,
}

impl Default for SkiConfig {
    fn default() -> Self {
        Self {
            integration_window: 200.0,
            threshold_pe: 0.25,
            gain: 1.0,
        }
    }
}

impl SkiConfig {
    /// Creates a configuration with default values.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the integration window.
    #[must_use]
    pub fn with_integration_window(mut self, window: f64) -> Self {
        self.integration_window = window;
        self
    }

    /// Sets the charge threshold.
    #[must_use]
    pub fn with_threshold_pe(mut self, threshold: f32) -> Self {
        self.threshold_pe = threshold;
        self
    }

    /// Sets the gain.
    #[must_use]
    pub fn with_gain(mut self, gain: f32) -> Self {
        self.gain = gain;
        self
    }
}

/// Baseline digitizer.
///
/// Hits on the same sensor falling inside one integration window are merged
/// into a single digit: the digit time is the earliest hit time, the charge
/// is the gain-corrected sum of the merged amplitudes. Digits below the
/// charge threshold are dropped. Sensors digitize independently, so the
/// per-sensor groups fan out across the rayon pool.
#[derive(Clone, Debug, Default)]
pub struct SkiDigitizer {
    config: SkiConfig,
}

impl SkiDigitizer {
    /// Creates a digitizer with the given configuration.
    #[must_use]
    pub fn new(config: SkiConfig) -> Self {
        Self { config }
    }

    fn digitize_sensor(&self, sensor: SensorId, group: &mut [RawHit]) -> Vec<Digit> {
        group.sort_by(|a, b| a.time.total_cmp(&b.time));

        let mut digits = Vec::new();
        let mut i = 0;
        while i < group.len() {
            let start = group[i].time;
            let mut charge = 0.0_f32;
            let mut j = i;
            while j < group.len() && group[j].time - start <= self.config.integration_window {
                charge += group[j].pe;
                j += 1;
            }
            let charge = charge * self.config.gain;
            if charge >= self.config.threshold_pe {
                digits.push(Digit {
                    sensor,
                    time: start,
                    pe: charge,
                });
            }
            i = j;
        }
        digits
    }
}

impl Digitizer for SkiDigitizer {
    fn kind(&self) -> DigitizerKind {
        DigitizerKind::Ski
    }

    fn digitize(&self, hits: &[RawHit]) -> Vec<Digit> {
        if hits.is_empty() {
            return Vec::new();
        }

        let mut by_sensor: HashMap<SensorId, Vec<RawHit>> = HashMap::new();
        for &hit in hits {
            by_sensor.entry(hit.sensor).or_default().push(hit);
        }

        let mut digits: Vec<Digit> = by_sensor
            .into_par_iter()
            .flat_map(|(sensor, mut group)| self.digitize_sensor(sensor, &mut group))
            .collect();

        // Group iteration order is arbitrary; the digit collection contract
        // is time-ordered.
        digits.sort_by(|a, b| a.time.total_cmp(&b.time).then(a.sensor.cmp(&b.sensor)));
        digits
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_empty_hits_yield_empty_digits() {
        let digitizer = SkiDigitizer::default();
        assert!(digitizer.digitize(&[]).is_empty());
    }

    #[test]
    fn test_merges_hits_within_integration_window() {
        let hits = vec![
            RawHit::new(7, 100.0, 0.4),
            RawHit::new(7, 150.0, 0.3),
            RawHit::new(7, 250.0, 0.5),
        ];
        let digitizer = SkiDigitizer::default();
        let digits = digitizer.digitize(&hits);

        // All three fall inside one 200 ns window anchored at 100.0.
        assert_eq!(digits.len(), 1);
        assert_eq!(digits[0].sensor.as_u32(), 7);
        assert_relative_eq!(digits[0].time, 100.0);
        assert_relative_eq!(digits[0].pe, 1.2, epsilon = 1e-6);
    }

    #[test]
    fn test_splits_hits_beyond_integration_window() {
        let hits = vec![RawHit::new(7, 100.0, 0.6), RawHit::new(7, 500.0, 0.8)];
        let digitizer = SkiDigitizer::default();
        let digits = digitizer.digitize(&hits);

        assert_eq!(digits.len(), 2);
        assert_relative_eq!(digits[0].time, 100.0);
        assert_relative_eq!(digits[1].time, 500.0);
    }

    #[test]
    fn test_sensors_digitize_independently() {
        let hits = vec![
            RawHit::new(1, 100.0, 0.5),
            RawHit::new(2, 100.0, 0.5),
            RawHit::new(3, 100.0, 0.5),
        ];
        let digitizer = SkiDigitizer::default();
        assert_eq!(digitizer.digitize(&hits).len(), 3);
    }

    #[test]
    fn test_threshold_drops_faint_digits() {
        let hits = vec![RawHit::new(1, 100.0, 0.1), RawHit::new(2, 100.0, 0.9)];
        let digitizer = SkiDigitizer::new(SkiConfig::new().with_threshold_pe(0.5));
        let digits = digitizer.digitize(&hits);

        assert_eq!(digits.len(), 1);
        assert_eq!(digits[0].sensor.as_u32(), 2);
    }

    #[test]
    fn test_gain_scales_charge() {
        let hits = vec![RawHit::new(1, 100.0, 0.5)];
        let digitizer = SkiDigitizer::new(SkiConfig::new().with_gain(2.0));
        let digits = digitizer.digitize(&hits);
        assert_relative_eq!(digits[0].pe, 1.0, epsilon = 1e-6);
    }

    #[test]
    fn test_digits_are_time_ordered() {
        let hits = vec![
            RawHit::new(9, 900.0, 0.5),
            RawHit::new(1, 100.0, 0.5),
            RawHit::new(5, 500.0, 0.5),
        ];
        let digitizer = SkiDigitizer::default();
        let digits = digitizer.digitize(&hits);
        let times: Vec<f64> = digits.iter().map(|d| d.time).collect();
        assert_eq!(times, vec![100.0, 500.0, 900.0]);
    }
}
