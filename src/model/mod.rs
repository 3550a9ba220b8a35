//! Pure data structures shared by the restaurant core, its actor host and config loading.

pub mod menu_item;
pub mod restaurant_create;

pub use menu_item::*;
pub use restaurant_create::*;
