//! Order desk implementation.

use std::sync::Arc;

use tracing::{debug, info, instrument};
use uuid::Uuid;

use crate::donut::{Donut, Stage};
use crate::kitchen::Kitchen;

use super::types::{OrderError, OrderItem, OrderRequest, OrderStatusReport};

/// Front of house. Forwards orders to the kitchen and answers status checks.
#[derive(Clone)]
pub struct OrderDesk {
    kitchen: Arc<dyn Kitchen>,
}

impl OrderDesk {
    pub fn new(kitchen: Arc<dyn Kitchen>) -> Self {
        Self { kitchen }
    }

    /// Submits `item.quantity` independent donuts for `order_id`.
    pub async fn record_order_item(&self, item: &OrderItem, order_id: &str) {
        for _ in 0..item.quantity {
            self.kitchen.submit(&item.flavor, order_id).await;
        }
        debug!(
            order_id,
            flavor = %item.flavor,
            quantity = item.quantity,
            "Recorded order item"
        );
    }

    /// Creates a new order under a fresh id and returns its initial status.
    ///
    /// An order with no donuts is accepted and reports `Ready` right away.
    #[instrument(skip_all, fields(items = request.donuts.len()))]
    pub async fn place_order(
        &self,
        request: &OrderRequest,
    ) -> Result<OrderStatusReport, OrderError> {
        request.validate()?;

        let order_id = Uuid::new_v4().to_string();
        for item in &request.donuts {
            self.record_order_item(item, &order_id).await;
        }

        info!(
            order_id = %order_id,
            donuts = request.donut_count(),
            "Order placed"
        );

        Ok(self.check_status(&order_id).await)
    }

    /// Summarizes the current stage of every donut in `order_id`.
    ///
    /// Unknown ids yield the empty report (`Ready`, no remaining time).
    #[instrument(skip(self))]
    pub async fn check_status(&self, order_id: &str) -> OrderStatusReport {
        let donuts = self.kitchen.snapshot().await;
        Self::summarize(order_id, &donuts)
    }

    /// Folds a donut snapshot into the report for one order.
    ///
    /// `estimated_delivery_time` sums the stage weights of the order's donuts.
    /// `state` is the stage of the order's last donut in snapshot order, not a
    /// minimum or maximum over the order; existing clients rely on this.
    pub fn summarize(order_id: &str, donuts: &[Donut]) -> OrderStatusReport {
        let (estimated_delivery_time, state) = donuts
            .iter()
            .filter(|donut| donut.order_id == order_id)
            .fold((0u32, Stage::Ready), |(total, _), donut| {
                (
                    total.saturating_add(donut.stage.estimate_weight()),
                    donut.stage,
                )
            });

        OrderStatusReport {
            order_id: order_id.to_string(),
            estimated_delivery_time,
            state,
        }
    }
}
