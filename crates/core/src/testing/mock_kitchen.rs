//! Mock kitchen for testing.

use async_trait::async_trait;
use std::sync::Arc;
use tokio::sync::RwLock;

use crate::donut::{Donut, Stage};
use crate::kitchen::Kitchen;

/// Mock implementation of the Kitchen trait.
///
/// There is no worker: submitted donuts stay `Placed` until a test moves
/// them with [`MockKitchen::set_stage`] or replaces the collection with
/// [`MockKitchen::set_donuts`].
#[derive(Debug, Clone, Default)]
pub struct MockKitchen {
    /// Every `(flavor, order_id)` passed to `submit`.
    submissions: Arc<RwLock<Vec<(String, String)>>>,
    /// Collection served by `snapshot`.
    donuts: Arc<RwLock<Vec<Donut>>>,
}

impl MockKitchen {
    /// Create a new, empty mock kitchen.
    pub fn new() -> Self {
        Self::default()
    }

    /// Get all recorded submissions.
    pub async fn submissions(&self) -> Vec<(String, String)> {
        self.submissions.read().await.clone()
    }

    /// Replace the donut collection.
    pub async fn set_donuts(&self, donuts: Vec<Donut>) {
        *self.donuts.write().await = donuts;
    }

    /// Move every donut of `order_id` to `stage`.
    pub async fn set_stage(&self, order_id: &str, stage: Stage) {
        for donut in self.donuts.write().await.iter_mut() {
            if donut.order_id == order_id {
                donut.stage = stage;
            }
        }
    }
}

#[async_trait]
impl Kitchen for MockKitchen {
    async fn submit(&self, flavor: &str, order_id: &str) {
        self.submissions
            .write()
            .await
            .push((flavor.to_string(), order_id.to_string()));
        self.donuts.write().await.push(Donut::new(flavor, order_id));
    }

    async fn snapshot(&self) -> Vec<Donut> {
        self.donuts.read().await.clone()
    }
}
