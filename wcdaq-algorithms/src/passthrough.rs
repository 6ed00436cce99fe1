//! NoTrigger mode: every digit accepted into one trivial window.

use wcdaq_core::{Digit, Trigger, TriggerKind, TriggerWindow};

/// Pass-through trigger.
///
/// Emits a single window starting at the earliest digit time and holding
/// every digit, for untriggered readout studies. An empty digit collection
/// still yields zero windows.
#[derive(Clone, Copy, Debug, Default)]
pub struct NoTriggerPassthrough;

impl NoTriggerPassthrough {
    /// Creates the pass-through trigger.
    #[must_use]
    pub fn new() -> Self {
        Self
    }
}

impl Trigger for NoTriggerPassthrough {
    fn kind(&self) -> TriggerKind {
        TriggerKind::NoTrigger
    }

    fn scan(&self, digits: &[Digit]) -> Vec<TriggerWindow> {
        if digits.is_empty() {
            return Vec::new();
        }

        let mut ordered: Vec<Digit> = digits.to_vec();
        ordered.sort_by(|a, b| a.time.total_cmp(&b.time));

        let mut window = TriggerWindow::new(TriggerKind::NoTrigger, ordered[0].time);
        window.digits = ordered;
        vec![window]
    }
}
