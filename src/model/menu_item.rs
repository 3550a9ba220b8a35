use serde::{Deserialize, Serialize};

/// A single named, priced dish on a menu.
///
/// `price` is in the smallest currency unit, so it is never negative and never fractional.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MenuItem {
    pub name: String,
    pub price: u32,
}

impl MenuItem {
    /// Creates a new MenuItem instance.
    ///
    /// # Arguments
    /// * `name` - Dish name, the lookup key within a menu
    /// * `price` - Price in the smallest currency unit
    pub fn new(name: impl Into<String>, price: u32) -> Self {
        Self {
            name: name.into(),
            price,
        }
    }
}
