use crate::restaurant::Restaurant;
use crate::restaurant_actor::RestaurantClient;
use tracing::{error, info};

/// Owns the running restaurant actor and the client used to reach it.
///
/// # Example
///
/// ```ignore
/// let system = RestaurantSystem::new(restaurant);
/// let open = system.client.is_open().await?;
/// system.shutdown().await?;
/// ```
pub struct RestaurantSystem {
    /// Client for interacting with the Restaurant actor
    pub client: RestaurantClient,

    /// Task handle of the running actor (used for graceful shutdown)
    handle: tokio::task::JoinHandle<()>,
}

impl RestaurantSystem {
    /// Spawns a Restaurant actor in its own Tokio task.
    ///
    /// Must be called from within a Tokio runtime.
    pub fn new(restaurant: Restaurant) -> Self {
        let (actor, client) = crate::restaurant_actor::new(restaurant);
        let handle = tokio::spawn(actor.run());
        Self { client, handle }
    }

    /// Gracefully shuts down the actor.
    ///
    /// Dropping the client closes the channel; the actor drains what is queued and exits.
    /// Clones of the client still held elsewhere keep the actor alive until they are dropped too.
    ///
    /// # Returns
    ///
    /// - `Ok(())` if the actor shut down cleanly
    /// - `Err(String)` if the actor task failed or panicked
    pub async fn shutdown(self) -> Result<(), String> {
        info!("Shutting down restaurant system...");
        drop(self.client);

        if let Err(e) = self.handle.await {
            error!("Actor task failed: {:?}", e);
            return Err(format!("Actor task failed: {:?}", e));
        }

        info!("Restaurant system shutdown complete.");
        Ok(())
    }
}
