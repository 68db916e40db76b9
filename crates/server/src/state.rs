use std::sync::Arc;

use kitchen_core::{Config, Kitchen, KitchenService, OrderDesk};

/// Shared application state
pub struct AppState {
    config: Config,
    kitchen: Arc<KitchenService>,
    desk: OrderDesk,
}

impl AppState {
    pub fn new(config: Config, kitchen: Arc<KitchenService>) -> Self {
        let desk = OrderDesk::new(Arc::clone(&kitchen) as Arc<dyn Kitchen>);
        Self {
            config,
            kitchen,
            desk,
        }
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    pub fn kitchen(&self) -> &KitchenService {
        self.kitchen.as_ref()
    }

    pub fn desk(&self) -> &OrderDesk {
        &self.desk
    }
}
