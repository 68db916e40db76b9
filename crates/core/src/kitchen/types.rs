//! Types for the kitchen pipeline.

use serde::{Deserialize, Serialize};

use crate::donut::{Donut, DonutId, Stage};

/// Work item carried by the fryer queue.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum FryerTask {
    /// Look at the donut's current stage and schedule its next transition.
    Process(DonutId),
    /// The scheduled delay has elapsed; apply the transition now.
    Advance(DonutId),
}

/// Point-in-time summary of the kitchen.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct KitchenStatus {
    /// Whether the fryer worker is running.
    pub running: bool,
    /// Every donut ever submitted.
    pub total_donuts: usize,
    /// Donuts not yet `Ready`.
    pub in_flight: usize,
    pub placed: usize,
    pub acknowledged: usize,
    pub cooking: usize,
    pub ready: usize,
}

impl KitchenStatus {
    /// Builds a status from a set of donuts.
    pub fn from_donuts(running: bool, donuts: &[Donut]) -> Self {
        let mut status = Self {
            running,
            total_donuts: donuts.len(),
            ..Default::default()
        };
        for donut in donuts {
            match donut.stage {
                Stage::Placed => status.placed += 1,
                Stage::Acknowledged => status.acknowledged += 1,
                Stage::Cooking => status.cooking += 1,
                Stage::Ready => status.ready += 1,
            }
        }
        status.in_flight = status.total_donuts - status.ready;
        status
    }

    /// Number of donuts currently at `stage`.
    pub fn count(&self, stage: Stage) -> usize {
        match stage {
            Stage::Placed => self.placed,
            Stage::Acknowledged => self.acknowledged,
            Stage::Cooking => self.cooking,
            Stage::Ready => self.ready,
        }
    }
}
