//! `Local_NHits` trigger: digit-count threshold within a sensor neighbourhood.

use wcdaq_core::window::order_by_start;
use wcdaq_core::{Digit, Trigger, TriggerKind, TriggerWindow};

/// Configuration for the `Local_NHits` trigger.
#[derive(Clone, Debug)]
pub struct LocalNHitsConfig {
    /// Local digit count required for a window to fire.
    pub threshold: usize,
    /// Window width (ns).
    pub width: f64,
    /// Channel-distance radius defining the neighbourhood of the seed.
    pub locality: u32,
}

impl Default for LocalNHitsConfig {
    fn default() -> Self {
        Self {
            threshold: 8,
            width: 100.0,
            locality: 50,
        }
    }
}

impl LocalNHitsConfig {
    /// Creates a configuration with default values.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the firing threshold.
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

    /// Sets the neighbourhood radius.
    #[must_use]
    pub fn with_locality(mut self, locality: u32) -> Self {
        self.locality = locality;
        self
    }
}

/// Locally-clustered-hit trigger.
///
/// Like NDigits, but a digit only counts towards the seed's window when its
/// sensor lies within `locality` channels of the seed sensor. Catches low
/// energy activity concentrated on one patch of the detector that a global
/// count would miss.
#[derive(Clone, Debug, Default)]
pub struct LocalNHitsTrigger {
    config: LocalNHitsConfig,
}

impl LocalNHitsTrigger {
    /// Creates the trigger with the given configuration.
    #[must_use]
    pub fn new(config: LocalNHitsConfig) -> Self {
        Self { config }
    }
}

impl Trigger for LocalNHitsTrigger {
    fn kind(&self) -> TriggerKind {
        TriggerKind::LocalNHits
    }

    fn scan(&self, digits: &[Digit]) -> Vec<TriggerWindow> {
        let mut ordered: Vec<Digit> = digits.to_vec();
        ordered.sort_by(|a, b| a.time.total_cmp(&b.time));

        let mut windows = Vec::new();
        let mut i = 0;
        while i < ordered.len() {
            let seed = ordered[i];
            let mut j = i;
            while j < ordered.len() && ordered[j].time - seed.time <= self.config.width {
                j += 1;
            }
            let local: Vec<Digit> = ordered[i..j]
                .iter()
                .filter(|d| d.sensor.channel_distance(seed.sensor) <= self.config.locality)
                .copied()
                .collect();
            if local.len() >= self.config.threshold {
                let mut window = TriggerWindow::new(TriggerKind::LocalNHits, seed.time);
                window.digits = local;
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

    #[test]
    fn test_empty_digits_yield_no_windows() {
        let trigger = LocalNHitsTrigger::default();
        assert!(trigger.scan(&[]).is_empty());
    }

    #[test]
    fn test_local_cluster_fires() {
        // Six digits on adjacent channels within 50 ns.
        let digits: Vec<Digit> = (0..6)
            .map(|i| Digit::new(100 + i, 1_000.0 + f64::from(i), 1.0))
            .collect();
        let trigger = LocalNHitsTrigger::new(LocalNHitsConfig::new().with_threshold(6));
        let windows = trigger.scan(&digits);

        assert_eq!(windows.len(), 1);
        assert_eq!(windows[0].trigger, TriggerKind::LocalNHits);
        assert_eq!(windows[0].len(), 6);
    }

    #[test]
    fn test_scattered_digits_do_not_fire() {
        // Same multiplicity and timing, but spread across distant channels.
        let digits: Vec<Digit> = (0..6)
            .map(|i| Digit::new(i * 1_000, 1_000.0 + f64::from(i), 1.0))
            .collect();
        let trigger = LocalNHitsTrigger::new(LocalNHitsConfig::new().with_threshold(6));
        assert!(trigger.scan(&digits).is_empty());
    }

    #[test]
    fn test_remote_digits_excluded_from_window() {
        let mut digits: Vec<Digit> = (0..8)
            .map(|i| Digit::new(200 + i, 1_000.0 + f64::from(i), 1.0))
            .collect();
        // In-time but 5000 channels away.
        digits.push(Digit::new(5_200, 1_004.0, 1.0));
        let trigger = LocalNHitsTrigger::new(LocalNHitsConfig::new().with_threshold(8));
        let windows = trigger.scan(&digits);

        assert_eq!(windows.len(), 1);
        assert_eq!(windows[0].len(), 8);
        assert!(windows[0].iter().all(|d| d.sensor.as_u32() < 1_000));
    }
}
