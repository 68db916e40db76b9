//! Configuration for the kitchen pipeline.

use serde::{Deserialize, Serialize};
use std::time::Duration;

use crate::donut::Stage;

/// Simulated preparation delays.
///
/// Each delay is applied before the donut's *next* stage becomes visible.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct KitchenConfig {
    /// Delay between `Placed` and `Acknowledged`, in milliseconds.
    #[serde(default)]
    pub acknowledge_delay_ms: u64,

    /// Delay between `Acknowledged` and `Cooking`, in milliseconds.
    #[serde(default = "default_prep_delay")]
    pub prep_delay_ms: u64,

    /// Delay between `Cooking` and `Ready`, in milliseconds.
    #[serde(default = "default_fry_delay")]
    pub fry_delay_ms: u64,
}

fn default_prep_delay() -> u64 {
    400
}

fn default_fry_delay() -> u64 {
    1000
}

impl Default for KitchenConfig {
    fn default() -> Self {
        Self {
            acknowledge_delay_ms: 0,
            prep_delay_ms: default_prep_delay(),
            fry_delay_ms: default_fry_delay(),
        }
    }
}

/// Whole milliseconds in `delay`, saturating at `u64::MAX`.
fn millis(delay: Duration) -> u64 {
    u64::try_from(delay.as_millis()).unwrap_or(u64::MAX)
}

impl KitchenConfig {
    /// Delay before a donut currently at `stage` moves to the next one.
    pub fn delay_for(&self, stage: Stage) -> Duration {
        let ms = match stage {
            Stage::Placed => self.acknowledge_delay_ms,
            Stage::Acknowledged => self.prep_delay_ms,
            Stage::Cooking => self.fry_delay_ms,
            Stage::Ready => 0,
        };
        Duration::from_millis(ms)
    }

    /// Sets the acknowledge delay.
    pub fn with_acknowledge_delay(mut self, delay: Duration) -> Self {
        self.acknowledge_delay_ms = millis(delay);
        self
    }

    /// Sets the prep delay.
    pub fn with_prep_delay(mut self, delay: Duration) -> Self {
        self.prep_delay_ms = millis(delay);
        self
    }

    /// Sets the fry delay.
    pub fn with_fry_delay(mut self, delay: Duration) -> Self {
        self.fry_delay_ms = millis(delay);
        self
    }

    /// Worst-case time for one donut to go from `Placed` to `Ready`.
    pub fn total_delay(&self) -> Duration {
        Stage::ALL.iter().map(|stage| self.delay_for(*stage)).sum()
    }
}
