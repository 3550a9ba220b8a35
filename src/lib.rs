//! # Restaurant Recipe
//!
//! > **A single restaurant: opening hours, menu and order totals.**
//!
//! The heart of the crate is [`Restaurant`](restaurant::Restaurant), a plain
//! synchronous domain object. Around it sit a swappable time source, a TOML loader
//! and an actor host for sharing one restaurant between many tasks.
//!
//! ## 🗺️ Module Tour
//!
//! ### 1. The Domain ([`restaurant`], [`model`])
//! - **Role**: Opening-window checks, menu mutation and pricing.
//! - **Key items**: [`Restaurant`](restaurant::Restaurant), [`MenuItem`](model::MenuItem),
//!   [`MenuError`](restaurant::MenuError).
//!
//! ### 2. The Time Seam ([`clock`])
//! `Restaurant::is_open` never reads the wall clock itself. It asks a [`Clock`](clock::Clock).
//! - **Production**: [`SystemClock`](clock::SystemClock).
//! - **Tests**: [`FixedClock`](clock::FixedClock), which can be moved after it is handed out.
//!
//! ### 3. The Host ([`restaurant_actor`], [`lifecycle`])
//! The core has no locking. When it must be shared, a [`RestaurantActor`](restaurant_actor::RestaurantActor)
//! owns it in a Tokio task and serializes every request.
//! - **Key items**: [`RestaurantClient`](restaurant_actor::RestaurantClient),
//!   [`RestaurantSystem`](lifecycle::RestaurantSystem), [`setup_tracing`](lifecycle::setup_tracing).
//!
//! ### 4. Loading ([`config`])
//! [`RestaurantConfig`](config::RestaurantConfig) reads a restaurant and its menu from TOML.
//!
//! ## 🚀 Quick Start
//!
//! ```
//! use chrono::NaiveTime;
//! use restaurant_recipe::clock::FixedClock;
//! use restaurant_recipe::restaurant::Restaurant;
//!
//! let opening = NaiveTime::from_hms_opt(10, 30, 0).unwrap();
//! let closing = NaiveTime::from_hms_opt(22, 0, 0).unwrap();
//! let mut restaurant = Restaurant::new("Amelie's cafe", "Chennai", opening, closing)
//!     .with_clock(FixedClock::at(12, 30));
//!
//! restaurant.add_to_menu("Sweet corn soup", 119);
//! restaurant.add_to_menu("Vegetable lasagne", 269);
//!
//! assert!(restaurant.is_open());
//! assert_eq!(restaurant.order_total(&["Sweet corn soup", "Vegetable lasagne"]), 388);
//! ```
//!
//! ### Running the Demo
//!
//! ```bash
//! RUST_LOG=info cargo run
//! RUST_LOG=debug cargo run -- path/to/restaurant.toml
//! ```

pub mod clock;
pub mod config;
pub mod lifecycle;
pub mod model;
pub mod restaurant;
pub mod restaurant_actor;
