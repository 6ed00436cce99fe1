//! Anisotropy trigger: hemisphere hit-count asymmetry.
#![allow(clippy::cast_precision_loss)]

use wcdaq_core::window::order_by_start;
use wcdaq_core::{Digit, Trigger, TriggerKind, TriggerWindow};

/// Configuration for the Anisotropy trigger.
#[derive(Clone, Debug)]
pub struct AnisotropyConfig {
    /// First channel of the upper hemisphere.
    pub split_channel: u32,
    /// Minimum |up - down| / (up + down) asymmetry for a window to fire.
    pub asymmetry: f64,
    /// Minimum digit count in the window.
    pub min_digits: usize,
    /// Window width (ns).
    pub width: f64,
}

impl Default for AnisotropyConfig {
    fn default() -> Self {
        Self {
            split_channel: 5_000,
            asymmetry: 0.5,
            min_digits: 10,
            width: 400.0,
        }
    }
}

impl AnisotropyConfig {
    /// Creates a configuration with default values.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the hemisphere split channel.
    #[must_use]
    pub fn with_split_channel(mut self, channel: u32) -> Self {
        self.split_channel = channel;
        self
    }

    /// Sets the asymmetry threshold.
    #[must_use]
    pub fn with_asymmetry(mut self, asymmetry: f64) -> Self {
        self.asymmetry = asymmetry;
        self
    }

    /// Sets the minimum window occupancy.
    #[must_use]
    pub fn with_min_digits(mut self, min_digits: usize) -> Self {
        self.min_digits = min_digits;
        self
    }

    /// Sets the window width.
    #[must_use]
    pub fn with_width(mut self, width: f64) -> Self {
        self.width = width;
        self
    }
}

/// Anisotropy-based trigger.
///
/// Counts window digits on either side of the hemisphere split and fires
/// where the normalised asymmetry reaches the threshold. Directional light
/// (a downward-going track, an entering particle) lights one hemisphere;
/// isotropic noise does not.
#[derive(Clone, Debug, Default)]
pub struct AnisotropyTrigger {
    config: AnisotropyConfig,
}

impl AnisotropyTrigger {
    /// Creates the trigger with the given configuration.
    #[must_use]
    pub fn new(config: AnisotropyConfig) -> Self {
        Self { config }
    }
}

impl Trigger for AnisotropyTrigger {
    fn kind(&self) -> TriggerKind {
        TriggerKind::Anisotropy
    }

    fn scan(&self, digits: &[Digit]) -> Vec<TriggerWindow> {
        let mut ordered: Vec<Digit> = digits.to_vec();
        ordered.sort_by(|a, b| a.time.total_cmp(&b.time));

        let mut windows = Vec::new();
        let mut i = 0;
        while i < ordered.len() {
            let start = ordered[i].time;
            let mut j = i;
            let mut up = 0_usize;
            while j < ordered.len() && ordered[j].time - start <= self.config.width {
                if ordered[j].sensor.as_u32() >= self.config.split_channel {
                    up += 1;
                }
                j += 1;
            }
            let total = j - i;
            let down = total - up;
            if total >= self.config.min_digits
                && up.abs_diff(down) as f64 / total as f64 >= self.config.asymmetry
            {
                let mut window = TriggerWindow::new(TriggerKind::Anisotropy, start);
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

    fn hemisphere_digits(base: u32, t0: f64, n: usize) -> Vec<Digit> {
        (0..n)
            .map(|i| Digit::new(base + i as u32, t0 + i as f64, 1.0))
            .collect()
    }

    #[test]
    fn test_empty_digits_yield_no_windows() {
        let trigger = AnisotropyTrigger::default();
        assert!(trigger.scan(&[]).is_empty());
    }

    #[test]
    fn test_one_sided_light_fires() {
        // All 12 digits below the split channel.
        let digits = hemisphere_digits(0, 1_000.0, 12);
        let trigger = AnisotropyTrigger::default();
        let windows = trigger.scan(&digits);

        assert_eq!(windows.len(), 1);
        assert_eq!(windows[0].trigger, TriggerKind::Anisotropy);
        assert_eq!(windows[0].len(), 12);
    }

    #[test]
    fn test_balanced_light_does_not_fire() {
        let mut digits = hemisphere_digits(0, 1_000.0, 6);
        digits.extend(hemisphere_digits(6_000, 1_000.0, 6));
        let trigger = AnisotropyTrigger::default();
        assert!(trigger.scan(&digits).is_empty());
    }

    #[test]
    fn test_occupancy_floor_applies() {
        let digits = hemisphere_digits(0, 1_000.0, 5);
        let trigger = AnisotropyTrigger::default();
        assert!(trigger.scan(&digits).is_empty());
    }
}
