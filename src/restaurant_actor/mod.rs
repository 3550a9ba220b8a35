//! Concurrent host for a [`Restaurant`](crate::restaurant::Restaurant).
//!
//! The core type is single-threaded. When many tasks need the same restaurant,
//! spawn a [`RestaurantActor`] and hand out [`RestaurantClient`] clones instead of
//! wrapping the restaurant in a lock.

mod actor;
mod client;
pub mod error;
pub mod message;

pub use actor::*;
pub use client::*;
pub use error::*;
pub use message::*;

use crate::restaurant::Restaurant;

/// Creates a new Restaurant actor and its client.
pub fn new(restaurant: Restaurant) -> (RestaurantActor, RestaurantClient) {
    RestaurantActor::new(32, restaurant)
}
