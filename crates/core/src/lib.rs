pub mod config;
pub mod donut;
pub mod kitchen;
pub mod order;
pub mod testing;

pub use config::{
    load_config, load_config_from_env, load_config_from_str, validate_config, Config, ConfigError,
    ServerConfig,
};
pub use donut::{Donut, DonutError, DonutId, Stage, StageParseError};
pub use kitchen::{Kitchen, KitchenConfig, KitchenService, KitchenStatus};
pub use order::{
    validate_flavor, validate_order_id, OrderDesk, OrderError, OrderItem, OrderRequest,
    OrderStatusReport,
};
