use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// Position of a donut in the kitchen's collection (insertion order).
pub type DonutId = usize;

/// Preparation stage of a single donut.
///
/// Variants are declared in preparation order, so the derived `Ord`
/// follows the pipeline: `Placed < Acknowledged < Cooking < Ready`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Stage {
    /// Order received by the shop, not yet seen by the kitchen.
    Placed,
    /// Kitchen has picked the donut up.
    Acknowledged,
    /// In the fryer.
    Cooking,
    /// Done. Terminal.
    Ready,
}

impl Stage {
    /// All stages in pipeline order.
    pub const ALL: [Stage; 4] = [
        Stage::Placed,
        Stage::Acknowledged,
        Stage::Cooking,
        Stage::Ready,
    ];

    /// Returns the stage that follows this one, or `None` for `Ready`.
    pub fn next(self) -> Option<Stage> {
        match self {
            Stage::Placed => Some(Stage::Acknowledged),
            Stage::Acknowledged => Some(Stage::Cooking),
            Stage::Cooking => Some(Stage::Ready),
            Stage::Ready => None,
        }
    }

    /// Returns true if no further transitions are possible.
    pub fn is_terminal(self) -> bool {
        matches!(self, Stage::Ready)
    }

    /// Remaining-work weight used by order time estimates.
    pub fn estimate_weight(self) -> u32 {
        match self {
            Stage::Placed => 3,
            Stage::Acknowledged => 2,
            Stage::Cooking => 1,
            Stage::Ready => 0,
        }
    }

    /// Wire name of the stage.
    pub fn as_str(self) -> &'static str {
        match self {
            Stage::Placed => "placed",
            Stage::Acknowledged => "acknowledged",
            Stage::Cooking => "cooking",
            Stage::Ready => "ready",
        }
    }
}

impl fmt::Display for Stage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Error, PartialEq, Eq)]
#[error("unknown stage: {0}")]
pub struct StageParseError(pub String);

impl FromStr for Stage {
    type Err = StageParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Stage::ALL
            .into_iter()
            .find(|stage| stage.as_str() == s)
            .ok_or_else(|| StageParseError(s.to_string()))
    }
}

/// Errors from stage transitions.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum DonutError {
    /// The donut is already in its terminal stage.
    #[error("donut for order {order_id} is already ready")]
    AlreadyReady { order_id: String },
}

/// A single ordered donut.
///
/// `flavor` and `order_id` are fixed at creation. `stage` is only written
/// by the kitchen worker; everyone else sees clones.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Donut {
    pub flavor: String,
    pub order_id: String,
    #[serde(rename = "status")]
    pub stage: Stage,
}

impl Donut {
    /// Creates a donut in the `Placed` stage.
    pub fn new(flavor: impl Into<String>, order_id: impl Into<String>) -> Self {
        Self {
            flavor: flavor.into(),
            order_id: order_id.into(),
            stage: Stage::Placed,
        }
    }

    /// Moves the donut one stage forward and returns the new stage.
    pub fn advance(&mut self) -> Result<Stage, DonutError> {
        let next = self.stage.next().ok_or_else(|| DonutError::AlreadyReady {
            order_id: self.order_id.clone(),
        })?;
        self.stage = next;
        Ok(next)
    }

    /// Returns true if the donut has reached `Ready`.
    pub fn is_ready(&self) -> bool {
        self.stage.is_terminal()
    }
}
