//! Kitchen service and fryer worker.

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

use async_trait::async_trait;
use tokio::sync::{broadcast, mpsc, RwLock};
use tracing::{debug, info, warn};

use crate::donut::{Donut, DonutId};

use super::config::KitchenConfig;
use super::traits::Kitchen;
use super::types::{FryerTask, KitchenStatus};

/// In-process kitchen backed by a single fryer task.
pub struct KitchenService {
    config: KitchenConfig,
    donuts: Arc<RwLock<Vec<Donut>>>,
    queue: mpsc::UnboundedSender<FryerTask>,
    running: Arc<AtomicBool>,
    shutdown_tx: broadcast::Sender<()>,
}

impl KitchenService {
    /// Creates the kitchen and spawns its fryer.
    ///
    /// Must be called from within a tokio runtime.
    pub fn new(config: KitchenConfig) -> Self {
        let donuts = Arc::new(RwLock::new(Vec::new()));
        let (queue, rx) = mpsc::unbounded_channel();
        let (shutdown_tx, shutdown_rx) = broadcast::channel(1);
        let running = Arc::new(AtomicBool::new(true));

        let fryer = Fryer {
            config: config.clone(),
            donuts: Arc::clone(&donuts),
            queue: queue.clone(),
            rx,
            shutdown_rx,
            running: Arc::clone(&running),
        };
        tokio::spawn(fryer.run());

        Self {
            config,
            donuts,
            queue,
            running,
            shutdown_tx,
        }
    }

    /// Returns the delays this kitchen was built with.
    pub fn config(&self) -> &KitchenConfig {
        &self.config
    }

    /// Returns per-stage counts for the current donut collection.
    pub async fn status(&self) -> KitchenStatus {
        let donuts = self.donuts.read().await;
        KitchenStatus::from_donuts(self.running.load(Ordering::Relaxed), &donuts)
    }

    /// Stops the fryer. Donuts that are not ready stay where they are.
    pub fn stop(&self) {
        if !self.running.swap(false, Ordering::SeqCst) {
            warn!("Fryer not running");
            return;
        }

        info!("Stopping fryer");
        let _ = self.shutdown_tx.send(());
    }
}

#[async_trait]
impl Kitchen for KitchenService {
    async fn submit(&self, flavor: &str, order_id: &str) {
        let id = {
            let mut donuts = self.donuts.write().await;
            donuts.push(Donut::new(flavor, order_id));
            donuts.len() - 1
        };

        debug!(donut_id = id, order_id, flavor, "Donut submitted");

        if self.queue.send(FryerTask::Process(id)).is_err() {
            warn!(donut_id = id, order_id, "Fryer is gone, donut stays placed");
        }
    }

    async fn snapshot(&self) -> Vec<Donut> {
        self.donuts.read().await.clone()
    }
}

/// The single background worker that owns stage transitions.
struct Fryer {
    config: KitchenConfig,
    donuts: Arc<RwLock<Vec<Donut>>>,
    queue: mpsc::UnboundedSender<FryerTask>,
    rx: mpsc::UnboundedReceiver<FryerTask>,
    shutdown_rx: broadcast::Receiver<()>,
    running: Arc<AtomicBool>,
}

impl Fryer {
    async fn run(mut self) {
        info!("Fryer started");

        loop {
            tokio::select! {
                _ = self.shutdown_rx.recv() => {
                    info!("Fryer received shutdown signal");
                    break;
                }
                // The fryer holds a sender itself, so the queue stays open
                // until shutdown.
                Some(task) = self.rx.recv() => match task {
                    FryerTask::Process(id) => self.process(id).await,
                    FryerTask::Advance(id) => self.advance(id).await,
                },
            }
        }

        self.running.store(false, Ordering::SeqCst);
        info!("Fryer stopped");
    }

    /// Schedules the next transition for a queued donut.
    async fn process(&self, id: DonutId) {
        let stage = match self.donuts.read().await.get(id) {
            Some(donut) => donut.stage,
            None => {
                warn!(donut_id = id, "Queued donut does not exist");
                return;
            }
        };

        if stage.is_terminal() {
            warn!(donut_id = id, "Ready donut was queued, ignoring");
            return;
        }

        let delay = self.config.delay_for(stage);
        if delay.is_zero() {
            self.advance(id).await;
            return;
        }

        let queue = self.queue.clone();
        tokio::spawn(async move {
            tokio::time::sleep(delay).await;
            // A closed queue means the fryer stopped; the donut keeps its stage.
            let _ = queue.send(FryerTask::Advance(id));
        });
    }

    /// Applies one stage transition and requeues unless the donut is ready.
    async fn advance(&self, id: DonutId) {
        let next = {
            let mut donuts = self.donuts.write().await;
            let Some(donut) = donuts.get_mut(id) else {
                warn!(donut_id = id, "Cannot advance missing donut");
                return;
            };

            let from = donut.stage;
            match donut.advance() {
                Ok(to) => {
                    debug!(
                        donut_id = id,
                        order_id = %donut.order_id,
                        flavor = %donut.flavor,
                        from = %from,
                        to = %to,
                        "Donut advanced"
                    );
                    to
                }
                Err(e) => {
                    warn!(donut_id = id, "Skipping transition: {}", e);
                    return;
                }
            }
        };

        if !next.is_terminal() {
            let _ = self.queue.send(FryerTask::Process(id));
        }
    }
}

#[cfg(test)]
mod tests {
    use std::time::Duration;

    use super::*;
    use crate::donut::Stage;

    fn fast_config() -> KitchenConfig {
        KitchenConfig::default()
            .with_prep_delay(Duration::from_millis(10))
            .with_fry_delay(Duration::from_millis(20))
    }

    async fn wait_for<F>(kitchen: &KitchenService, mut done: F)
    where
        F: FnMut(&[Donut]) -> bool,
    {
        let result = tokio::time::timeout(Duration::from_secs(5), async {
            loop {
                if done(&kitchen.snapshot().await) {
                    return;
                }
                tokio::time::sleep(Duration::from_millis(5)).await;
            }
        })
        .await;
        assert!(result.is_ok(), "Kitchen did not reach expected state in time");
    }

    #[tokio::test]
    async fn test_submit_appends_in_order() {
        let kitchen = KitchenService::new(KitchenConfig::default());

        kitchen.submit("glazed", "order-1").await;
        kitchen.submit("sprinkles", "order-2").await;
        kitchen.submit("maple", "order-1").await;

        let donuts = kitchen.snapshot().await;
        let flavors: Vec<&str> = donuts.iter().map(|d| d.flavor.as_str()).collect();
        assert_eq!(flavors, vec!["glazed", "sprinkles", "maple"]);
        assert_eq!(donuts[1].order_id, "order-2");
    }

    #[tokio::test]
    async fn test_donut_reaches_ready_and_stays() {
        let kitchen = KitchenService::new(fast_config());
        kitchen.submit("glazed", "order-1").await;

        wait_for(&kitchen, |donuts| donuts.iter().all(|d| d.is_ready())).await;

        tokio::time::sleep(Duration::from_millis(50)).await;
        let donuts = kitchen.snapshot().await;
        assert_eq!(donuts.len(), 1);
        assert_eq!(donuts[0].stage, Stage::Ready);
    }

    #[tokio::test]
    async fn test_stages_only_move_forward() {
        let kitchen = KitchenService::new(fast_config());
        kitchen.submit("glazed", "order-1").await;

        let mut last = Stage::Placed;
        let mut seen = vec![];
        let result = tokio::time::timeout(Duration::from_secs(5), async {
            loop {
                let stage = kitchen.snapshot().await[0].stage;
                assert!(stage >= last, "stage went backwards: {} -> {}", last, stage);
                if seen.last() != Some(&stage) {
                    seen.push(stage);
                }
                last = stage;
                if stage.is_terminal() {
                    break;
                }
                tokio::time::sleep(Duration::from_millis(1)).await;
            }
        })
        .await;

        assert!(result.is_ok());
        assert_eq!(seen.last(), Some(&Stage::Ready));
    }

    #[tokio::test]
    async fn test_acknowledged_waits_for_prep_delay() {
        let config = KitchenConfig::default()
            .with_prep_delay(Duration::from_millis(300))
            .with_fry_delay(Duration::from_millis(10));
        let kitchen = KitchenService::new(config);
        kitchen.submit("glazed", "order-1").await;

        wait_for(&kitchen, |donuts| donuts[0].stage == Stage::Acknowledged).await;

        tokio::time::sleep(Duration::from_millis(100)).await;
        assert_eq!(kitchen.snapshot().await[0].stage, Stage::Acknowledged);
    }

    #[tokio::test]
    async fn test_delays_do_not_serialize_donuts() {
        let config = KitchenConfig::default()
            .with_prep_delay(Duration::from_millis(20))
            .with_fry_delay(Duration::from_millis(100));
        let kitchen = KitchenService::new(config);

        for i in 0..10 {
            kitchen.submit("plain", &format!("order-{}", i)).await;
        }

        // One at a time this would take over a second.
        let result = tokio::time::timeout(Duration::from_millis(800), async {
            loop {
                if kitchen.snapshot().await.iter().all(|d| d.is_ready()) {
                    return;
                }
                tokio::time::sleep(Duration::from_millis(5)).await;
            }
        })
        .await;
        assert!(result.is_ok(), "Donuts were not cooked concurrently");
    }

    #[tokio::test]
    async fn test_snapshot_is_a_copy() {
        let kitchen = KitchenService::new(KitchenConfig::default());
        kitchen.submit("glazed", "order-1").await;

        let mut copy = kitchen.snapshot().await;
        copy[0].stage = Stage::Ready;
        copy[0].flavor = "changed".to_string();

        let donuts = kitchen.snapshot().await;
        assert_eq!(donuts[0].flavor, "glazed");
        assert_ne!(donuts[0].stage, Stage::Ready);
    }

    #[tokio::test]
    async fn test_snapshot_idempotent_without_changes() {
        let kitchen = KitchenService::new(fast_config());
        kitchen.submit("glazed", "order-1").await;
        kitchen.submit("jelly", "order-1").await;
        wait_for(&kitchen, |donuts| donuts.iter().all(|d| d.is_ready())).await;

        let first = kitchen.snapshot().await;
        let second = kitchen.snapshot().await;
        assert_eq!(first, second);
    }

    #[tokio::test]
    async fn test_status_counts() {
        let kitchen = KitchenService::new(fast_config());
        kitchen.submit("glazed", "order-1").await;
        kitchen.submit("jelly", "order-2").await;
        wait_for(&kitchen, |donuts| donuts.iter().all(|d| d.is_ready())).await;

        let status = kitchen.status().await;
        assert!(status.running);
        assert_eq!(status.total_donuts, 2);
        assert_eq!(status.ready, 2);
        assert_eq!(status.in_flight, 0);
    }

    #[tokio::test]
    async fn test_stop_freezes_pending_donuts() {
        let config = KitchenConfig::default()
            .with_prep_delay(Duration::from_millis(50))
            .with_fry_delay(Duration::from_millis(50));
        let kitchen = KitchenService::new(config);
        kitchen.submit("glazed", "order-1").await;
        wait_for(&kitchen, |donuts| donuts[0].stage == Stage::Acknowledged).await;

        kitchen.stop();
        tokio::time::sleep(Duration::from_millis(200)).await;

        let status = kitchen.status().await;
        assert!(!status.running);
        assert_eq!(kitchen.snapshot().await[0].stage, Stage::Acknowledged);
    }

    #[tokio::test]
    async fn test_stopped_kitchen_leaves_new_donuts_placed() {
        let kitchen = KitchenService::new(KitchenConfig::default());
        kitchen.stop();
        tokio::time::sleep(Duration::from_millis(20)).await;

        kitchen.submit("glazed", "order-1").await;
        tokio::time::sleep(Duration::from_millis(50)).await;

        assert!(!kitchen.status().await.running);
        assert_eq!(kitchen.snapshot().await[0].stage, Stage::Placed);
    }
}
