//! Order desk: turns order requests into kitchen submissions and folds the
//! kitchen's donut snapshot back into per-order status reports.
//!
//! Orders are not stored anywhere. An order is just the set of donuts that
//! share an `order_id`.

mod desk;
mod types;

pub use desk::OrderDesk;
pub use types::{
    validate_flavor, validate_order_id, OrderError, OrderItem, OrderRequest, OrderStatusReport,
};
