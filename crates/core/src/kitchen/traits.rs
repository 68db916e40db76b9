//! Kitchen trait definition.

use async_trait::async_trait;

use crate::donut::Donut;

/// The kitchen boundary consumed by the order desk.
///
/// Implementations own the authoritative donut collection. Callers can only
/// append donuts and read copies of them.
#[async_trait]
pub trait Kitchen: Send + Sync {
    /// Adds one donut at `Placed` and queues it for preparation.
    async fn submit(&self, flavor: &str, order_id: &str);

    /// Returns a copy of every known donut in submission order.
    async fn snapshot(&self) -> Vec<Donut>;
}
