#[cfg(test)]
#[path = "counter_test.rs"]
mod counter_test;

use crate::consts::{COUNTER_DURATION_MS, COUNTER_STEPS};

/// Timer-driven stat counter counting up from 0 to a target value.
///
/// The rendering side owns the interval timer; each tick calls [`tick`]
/// and re-renders [`label`]. The step size is fixed at `target / 50`
/// (rounded up) so every counter finishes in roughly the same number of
/// ticks regardless of magnitude.
///
/// [`tick`]: Counter::tick
/// [`label`]: Counter::label
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Counter {
    pub target: u32,
    pub current: u32,
}

impl Counter {
    #[must_use]
    pub fn new(target: u32) -> Self {
        Self { target, current: 0 }
    }

    /// Interval between ticks so the full run takes about two seconds.
    /// A zero target finishes immediately and never schedules a timer.
    #[must_use]
    pub fn interval_ms(&self) -> u32 {
        if self.target == 0 {
            0
        } else {
            COUNTER_DURATION_MS / self.target
        }
    }

    /// Advance one step, clamping at the target. Returns `true` while the
    /// animation should keep running.
    pub fn tick(&mut self) -> bool {
        let step = self.target.div_ceil(COUNTER_STEPS);
        self.current = (self.current + step.max(1)).min(self.target);
        !self.done()
    }

    #[must_use]
    pub fn done(&self) -> bool {
        self.current >= self.target
    }

    /// Displayed text: the current value plus its suffix. The lone `24`
    /// counter on the page is the support hotline, rendered as `24/7`;
    /// every other stat reads as "this many or more".
    #[must_use]
    pub fn label(&self) -> String {
        let suffix = if self.target == 24 { "/7" } else { "+" };
        format!("{}{}", self.current, suffix)
    }
}
