//! Order request and report types.

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::donut::Stage;

/// Malformed order input, rejected before it reaches the kitchen.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum OrderError {
    /// An item has an empty flavor.
    #[error("flavor must not be empty")]
    EmptyFlavor,

    /// The order id is empty.
    #[error("order id must not be empty")]
    EmptyOrderId,
}

/// One line of an order: a flavor and how many of it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OrderItem {
    pub flavor: String,
    pub quantity: u32,
}

impl OrderItem {
    pub fn new(flavor: impl Into<String>, quantity: u32) -> Self {
        Self {
            flavor: flavor.into(),
            quantity,
        }
    }

    /// Checks that the item names a flavor.
    pub fn validate(&self) -> Result<(), OrderError> {
        validate_flavor(&self.flavor)
    }
}

/// A full order as sent by a customer.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OrderRequest {
    pub donuts: Vec<OrderItem>,
}

impl OrderRequest {
    /// Checks every item. An order with no items is valid and cooks nothing.
    pub fn validate(&self) -> Result<(), OrderError> {
        self.donuts.iter().try_for_each(OrderItem::validate)
    }

    /// Total number of donuts across all items.
    pub fn donut_count(&self) -> u64 {
        self.donuts.iter().map(|item| u64::from(item.quantity)).sum()
    }
}

/// Checks that a flavor label is not blank.
pub fn validate_flavor(flavor: &str) -> Result<(), OrderError> {
    if flavor.trim().is_empty() {
        return Err(OrderError::EmptyFlavor);
    }
    Ok(())
}

/// Checks that an order id is usable as a grouping key.
pub fn validate_order_id(order_id: &str) -> Result<(), OrderError> {
    if order_id.trim().is_empty() {
        return Err(OrderError::EmptyOrderId);
    }
    Ok(())
}

/// Status of one order, derived from its donuts.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OrderStatusReport {
    pub order_id: String,
    /// Heuristic remaining time: 3/2/1/0 units per donut by stage.
    pub estimated_delivery_time: u32,
    /// Stage of the last donut of the order in submission order.
    pub state: Stage,
}

impl OrderStatusReport {
    /// Report for an order with no donuts.
    pub fn empty(order_id: impl Into<String>) -> Self {
        Self {
            order_id: order_id.into(),
            estimated_delivery_time: 0,
            state: Stage::Ready,
        }
    }
}
