use super::client::RestaurantClient;
use super::message::{RestaurantDetails, RestaurantRequest};
use crate::restaurant::Restaurant;
use tokio::sync::mpsc;
use tracing::{debug, info, warn};

/// Owns a [`Restaurant`] inside a single task.
///
/// Requests are handled one at a time, so concurrent clients never observe a
/// half-applied menu mutation and the restaurant needs no lock.
pub struct RestaurantActor {
    receiver: mpsc::Receiver<RestaurantRequest>,
    restaurant: Restaurant,
}

impl RestaurantActor {
    pub fn new(buffer_size: usize, restaurant: Restaurant) -> (Self, RestaurantClient) {
        let (sender, receiver) = mpsc::channel(buffer_size);
        let actor = Self {
            receiver,
            restaurant,
        };
        (actor, RestaurantClient::new(sender))
    }

    /// Runs the event loop until every client has been dropped.
    pub async fn run(mut self) {
        let restaurant = self.restaurant.name().to_string();
        info!(%restaurant, size = self.restaurant.menu().len(), "Actor started");

        while let Some(msg) = self.receiver.recv().await {
            match msg {
                RestaurantRequest::IsOpen { respond_to } => {
                    let _ = respond_to.send(self.restaurant.is_open());
                }
                RestaurantRequest::AddItem { item, respond_to } => {
                    debug!(%restaurant, ?item, "AddItem");
                    self.restaurant.add_to_menu(item.name, item.price);
                    let _ = respond_to.send(());
                }
                RestaurantRequest::RemoveItem { name, respond_to } => {
                    debug!(%restaurant, %name, "RemoveItem");
                    let result = self.restaurant.remove_from_menu(&name);
                    if let Err(e) = &result {
                        warn!(%restaurant, error = %e, "RemoveItem failed");
                    }
                    let _ = respond_to.send(result);
                }
                RestaurantRequest::GetMenu { respond_to } => {
                    let _ = respond_to.send(self.restaurant.menu().to_vec());
                }
                RestaurantRequest::OrderTotal { selected, respond_to } => {
                    debug!(%restaurant, ?selected, "OrderTotal");
                    let _ = respond_to.send(self.restaurant.order_total(selected.as_slice()));
                }
                RestaurantRequest::Details { respond_to } => {
                    let _ = respond_to.send(RestaurantDetails {
                        name: self.restaurant.name().to_string(),
                        location: self.restaurant.location().to_string(),
                        opening_time: self.restaurant.opening_time(),
                        closing_time: self.restaurant.closing_time(),
                    });
                }
            }
        }

        info!(%restaurant, size = self.restaurant.menu().len(), "Shutdown");
    }
}
