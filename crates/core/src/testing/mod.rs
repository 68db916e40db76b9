//! Testing utilities and mock implementations.
//!
//! # Example
//!
//! ```rust,ignore
//! use std::sync::Arc;
//! use kitchen_core::testing::{fixtures, MockKitchen};
//! use kitchen_core::{OrderDesk, Stage};
//!
//! let kitchen = Arc::new(MockKitchen::new());
//! kitchen.set_donuts(vec![fixtures::donut("glazed", "order-1", Stage::Cooking)]).await;
//!
//! let desk = OrderDesk::new(kitchen.clone());
//! let report = desk.check_status("order-1").await;
//! ```

mod mock_kitchen;

pub use mock_kitchen::MockKitchen;

/// Test fixtures and helper functions.
pub mod fixtures {
    use crate::donut::{Donut, Stage};
    use crate::order::{OrderItem, OrderRequest};

    /// Create a donut already at `stage`.
    pub fn donut(flavor: &str, order_id: &str, stage: Stage) -> Donut {
        let mut donut = Donut::new(flavor, order_id);
        donut.stage = stage;
        donut
    }

    /// Create one donut per stage for `order_id`, in pipeline order.
    pub fn donut_per_stage(order_id: &str) -> Vec<Donut> {
        Stage::ALL
            .iter()
            .map(|stage| donut("plain", order_id, *stage))
            .collect()
    }

    /// Create an order request from `(flavor, quantity)` pairs.
    pub fn order_request(items: &[(&str, u32)]) -> OrderRequest {
        OrderRequest {
            donuts: items
                .iter()
                .map(|(flavor, quantity)| OrderItem::new(*flavor, *quantity))
                .collect(),
        }
    }
}
