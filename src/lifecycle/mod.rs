//! Runtime orchestration: starting the restaurant actor and wiring up logging.
//!
//! - [`RestaurantSystem`] spawns the actor and shuts it down gracefully
//! - [`setup_tracing`] initializes the tracing/logging infrastructure

pub mod restaurant_system;
pub mod tracing;

pub use restaurant_system::*;
pub use self::tracing::*;
