//! ITCRatio trigger: in-time-coincidence ratio cut.
#![allow(clippy::cast_precision_loss)]

use wcdaq_core::window::order_by_start;
use wcdaq_core::{Digit, Trigger, TriggerKind, TriggerWindow};

/// Configuration for the ITCRatio trigger.
#[derive(Clone, Debug)]
pub struct ItcRatioConfig {
    /// Tight coincidence window (ns).
    pub tight_width: f64,
    /// Wide counting window (ns).
    pub wide_width: f64,
    /// Minimum tight/wide count ratio for a window to fire.
    pub ratio: f64,
    /// Minimum digit count in the wide window.
    pub min_digits: usize,
}

impl Default for ItcRatioConfig {
    fn default() -> Self {
        Self {
            tight_width: 50.0,
            wide_width: 400.0,
            ratio: 0.6,
            min_digits: 10,
        }
    }
}

impl ItcRatioConfig {
    /// Creates a configuration with default values.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the tight window width.
    #[must_use]
    pub fn with_tight_width(mut self, width: f64) -> Self {
        self.tight_width = width;
        self
    }

    /// Sets the wide window width.
    #[must_use]
    pub fn with_wide_width(mut self, width: f64) -> Self {
        self.wide_width = width;
        self
    }

    /// Sets the ratio threshold.
    #[must_use]
    pub fn with_ratio(mut self, ratio: f64) -> Self {
        self.ratio = ratio;
        self
    }

    /// Sets the minimum wide-window occupancy.
    #[must_use]
    pub fn with_min_digits(mut self, min_digits: usize) -> Self {
        self.min_digits = min_digits;
        self
    }
}

/// Ratio-based trigger comparing two hit-rate measures.
///
/// A window fires where the fraction of wide-window digits that are also
/// inside the tight window reaches `ratio`: prompt physics light piles up
/// in the tight window, while uncorrelated dark noise spreads evenly over
/// the wide one.
#[derive(Clone, Debug, Default)]
pub struct ItcRatioTrigger {
    config: ItcRatioConfig,
}

impl ItcRatioTrigger {
    /// Creates the trigger with the given configuration.
    #[must_use]
    pub fn new(config: ItcRatioConfig) -> Self {
        Self { config }
    }
}

impl Trigger for ItcRatioTrigger {
    fn kind(&self) -> TriggerKind {
        TriggerKind::ItcRatio
    }

    fn scan(&self, digits: &[Digit]) -> Vec<TriggerWindow> {
        let mut ordered: Vec<Digit> = digits.to_vec();
        ordered.sort_by(|a, b| a.time.total_cmp(&b.time));

        let mut windows = Vec::new();
        let mut i = 0;
        while i < ordered.len() {
            let start = ordered[i].time;
            let mut tight = 0_usize;
            let mut j = i;
            while j < ordered.len() && ordered[j].time - start <= self.config.wide_width {
                if ordered[j].time - start <= self.config.tight_width {
                    tight += 1;
                }
                j += 1;
            }
            let wide = j - i;
            if wide >= self.config.min_digits && tight as f64 / wide as f64 >= self.config.ratio {
                let mut window = TriggerWindow::new(TriggerKind::ItcRatio, start);
                window.digits = ordered[i..j].to_vec();
                windows.push(window);
                i = j;
            } else {
                i += 1;
            }
        }

        order_by_start(&mut windows);
        windows
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn digits_at(times: &[f64]) -> Vec<Digit> {
        times
            .iter()
            .enumerate()
            .map(|(i, &t)| Digit::new(i as u32, t, 1.0))
            .collect()
    }

    #[test]
    fn test_empty_digits_yield_no_windows() {
        let trigger = ItcRatioTrigger::default();
        assert!(trigger.scan(&[]).is_empty());
    }

    #[test]
    fn test_prompt_pileup_fires() {
        // 8 of 10 digits inside the tight window.
        let times: Vec<f64> = (0..8)
            .map(|i| 1_000.0 + f64::from(i) * 5.0)
            .chain([1_200.0, 1_300.0])
            .collect();
        let trigger = ItcRatioTrigger::new(ItcRatioConfig::new().with_min_digits(10));
        let windows = trigger.scan(&digits_at(&times));

        assert_eq!(windows.len(), 1);
        assert_eq!(windows[0].trigger, TriggerKind::ItcRatio);
        assert_eq!(windows[0].len(), 10);
    }

    #[test]
    fn test_flat_noise_does_not_fire() {
        // 10 digits spread evenly over the wide window: ratio 2/10.
        let times: Vec<f64> = (0..10).map(|i| 1_000.0 + f64::from(i) * 40.0).collect();
        let trigger = ItcRatioTrigger::new(ItcRatioConfig::new().with_min_digits(10));
        assert!(trigger.scan(&digits_at(&times)).is_empty());
    }

    #[test]
    fn test_occupancy_floor_applies() {
        // Perfect ratio but too few digits.
        let times: Vec<f64> = (0..5).map(|i| 1_000.0 + f64::from(i)).collect();
        let trigger = ItcRatioTrigger::new(ItcRatioConfig::new().with_min_digits(10));
        assert!(trigger.scan(&digits_at(&times)).is_empty());
    }
}
