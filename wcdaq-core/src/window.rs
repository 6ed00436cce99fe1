//! Trigger windows and the trigger strategy trait.

use crate::digit::Digit;
use crate::registry::TriggerKind;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Digits associated with one readable trigger window.
///
/// An event may yield zero, one or several windows; zero windows is the
/// "no trigger fired" outcome. Overlapping windows are retained, ordered by
/// window start time ascending. Deduplication is a downstream concern.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct TriggerWindow {
    /// Trigger that produced this window.
    pub trigger: TriggerKind,
    /// Window start time in nanoseconds.
    pub start: f64,
    /// Digits accepted into the window.
    pub digits: Vec<Digit>,
}

impl TriggerWindow {
    /// Creates an empty window tagged with the producing trigger.
    #[must_use]
    pub fn new(trigger: TriggerKind, start: f64) -> Self {
        Self {
            trigger,
            start,
            digits: Vec::new(),
        }
    }

    /// Returns the number of digits in the window.
    #[must_use]
    pub fn len(&self) -> usize {
        self.digits.len()
    }

    /// Returns true if the window holds no digits.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.digits.is_empty()
    }

    /// Returns an iterator over the digits.
    pub fn iter(&self) -> impl Iterator<Item = &Digit> {
        self.digits.iter()
    }
}

/// Sorts windows by start time ascending.
///
/// Trigger implementations call this before returning so the ordering
/// contract holds regardless of scan order.
pub fn order_by_start(windows: &mut [TriggerWindow]) {
    windows.sort_by(|a, b| a.start.total_cmp(&b.start));
}

/// Trait for trigger algorithms.
///
/// Exactly one implementation is active per run, selected by configured
/// name via [`TriggerKind::from_name`]. Triggering is a pure transformation:
/// an empty digit collection yields zero windows.
pub trait Trigger: Send + Sync {
    /// Registry identity of this algorithm.
    fn kind(&self) -> TriggerKind;

    /// Canonical name of this algorithm.
    fn name(&self) -> &'static str {
        self.kind().name()
    }

    /// Decides which digits form readable windows for one event.
    fn scan(&self, digits: &[Digit]) -> Vec<TriggerWindow>;
}
