//! Kitchen pipeline: the donut collection plus the fryer worker that drives
//! every donut from `Placed` to `Ready`.
//!
//! - `submit` appends a donut and queues it for the fryer.
//! - `snapshot` hands out clones, never references to live donuts.
//! - The fryer is the single writer of donut stages. Delayed transitions run
//!   on short-lived timer tasks that report back through the same queue, so
//!   one donut's cook time never holds up the others.
//!
//! # Example
//!
//! ```ignore
//! use kitchen_core::kitchen::{Kitchen, KitchenConfig, KitchenService};
//!
//! let kitchen = KitchenService::new(KitchenConfig::default());
//! kitchen.submit("glazed", "order-1").await;
//!
//! for donut in kitchen.snapshot().await {
//!     println!("{} {} {}", donut.order_id, donut.flavor, donut.stage);
//! }
//! ```

mod config;
mod service;
mod traits;
mod types;

pub use config::KitchenConfig;
pub use service::KitchenService;
pub use traits::Kitchen;
pub use types::KitchenStatus;
