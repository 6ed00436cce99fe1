//! NDigits trigger: sliding-window digit-count threshold.

use wcdaq_core::window::order_by_start;
use wcdaq_core::{Digit, Trigger, TriggerKind, TriggerWindow};

/// Configuration for the NDigits trigger.
#[derive(Clone, Debug)]
pub struct NDigitsConfig {
    /// Digit count required for a window to fire.
    pub threshold: usize,
    /// Window width (ns).
    pub width: f64,
}

impl Default for NDigitsConfig {
    fn default() -> Self {
        Self {
            threshold: 25,
            width: 200.0,
        }
    }
}

impl NDigitsConfig {
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
}

/// Sliding-window digit-count trigger.
///
/// Scans digits in time order; a window fires where at least `threshold`
/// digits fall within `width` of the seed digit. The window start is the
/// seed digit time and the window collects every digit inside
/// `[start, start + width]`. The scan resumes past a fired window, so one
/// burst reads out once.
#[derive(Clone, Debug)]
pub struct NDigitsTrigger {
    config: NDigitsConfig,
    kind: TriggerKind,
}

impl NDigitsTrigger {
    /// Creates the production trigger.
    #[must_use]
    pub fn new(config: NDigitsConfig) -> Self {
        Self {
            config,
            kind: TriggerKind::NDigits,
        }
    }

    /// Creates the variant used for DAQ parameter studies.
    ///
    /// Same engine, tagged [`TriggerKind::NDigitsTest`] so downstream
    /// analysis can separate its windows from production ones.
    #[must_use]
    pub fn parameter_study(config: NDigitsConfig) -> Self {
        Self {
            config,
            kind: TriggerKind::NDigitsTest,
        }
    }
}

impl Default for NDigitsTrigger {
    fn default() -> Self {
        Self::new(NDigitsConfig::default())
    }
}

impl Trigger for NDigitsTrigger {
    fn kind(&self) -> TriggerKind {
        self.kind
    }

    fn scan(&self, digits: &[Digit]) -> Vec<TriggerWindow> {
        let mut ordered: Vec<Digit> = digits.to_vec();
        ordered.sort_by(|a, b| a.time.total_cmp(&b.time));

        let mut windows = Vec::new();
        let mut i = 0;
        while i < ordered.len() {
            let start = ordered[i].time;
            let mut j = i;
            while j < ordered.len() && ordered[j].time - start <= self.config.width {
                j += 1;
            }
            if j - i >= self.config.threshold {
                let mut window = TriggerWindow::new(self.kind, start);
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
