//! The restaurant domain object: opening hours, menu and order totals.

pub mod error;

pub use error::*;

use crate::clock::{Clock, SystemClock};
use crate::model::{MenuItem, RestaurantCreate};
use chrono::NaiveTime;
use std::sync::Arc;
use tracing::{debug, info, warn};

/// A single restaurant with an operating window and a mutable menu.
///
/// The menu keeps insertion order. [`Restaurant::add_to_menu`] does not deduplicate,
/// so two items may share a name; lookups always resolve to the first one.
#[derive(Debug, Clone)]
pub struct Restaurant {
    name: String,
    location: String,
    opening_time: NaiveTime,
    closing_time: NaiveTime,
    menu: Vec<MenuItem>,
    clock: Arc<dyn Clock>,
}

impl Restaurant {
    /// Creates a restaurant with an empty menu, reading time from the system clock.
    ///
    /// `opening_time` is expected to precede `closing_time` on the same day. This is not
    /// enforced; a reversed window simply means [`Restaurant::is_open`] is never true.
    pub fn new(
        name: impl Into<String>,
        location: impl Into<String>,
        opening_time: NaiveTime,
        closing_time: NaiveTime,
    ) -> Self {
        let name = name.into();
        if opening_time >= closing_time {
            warn!(restaurant = %name, %opening_time, %closing_time, "Opening time is not before closing time");
        }
        Self {
            name,
            location: location.into(),
            opening_time,
            closing_time,
            menu: Vec::new(),
            clock: Arc::new(SystemClock),
        }
    }

    /// Builds a restaurant and fills its menu in the given order.
    pub fn from_create_params(params: RestaurantCreate) -> Self {
        let mut restaurant = Self::new(
            params.name,
            params.location,
            params.opening_time,
            params.closing_time,
        );
        for item in params.menu {
            restaurant.add_to_menu(item.name, item.price);
        }
        restaurant
    }

    /// Replaces the time source used by [`Restaurant::current_time`].
    pub fn with_clock(mut self, clock: impl Clock + 'static) -> Self {
        self.clock = Arc::new(clock);
        self
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn location(&self) -> &str {
        &self.location
    }

    pub fn opening_time(&self) -> NaiveTime {
        self.opening_time
    }

    pub fn closing_time(&self) -> NaiveTime {
        self.closing_time
    }

    /// The current time of day as reported by the injected clock.
    pub fn current_time(&self) -> NaiveTime {
        self.clock.now()
    }

    /// Returns true strictly between opening and closing time.
    ///
    /// Both boundary instants count as closed.
    pub fn is_open(&self) -> bool {
        let now = self.current_time();
        let open = now > self.opening_time && now < self.closing_time;
        debug!(restaurant = %self.name, %now, open, "Open check");
        open
    }

    /// Appends an item to the menu. Always succeeds, even for a name already on the menu.
    pub fn add_to_menu(&mut self, name: impl Into<String>, price: u32) {
        let item = MenuItem::new(name, price);
        info!(restaurant = %self.name, item = %item.name, price, "Added to menu");
        self.menu.push(item);
    }

    /// Removes the first item called `name`.
    ///
    /// # Errors
    /// Returns [`MenuError::ItemNotFound`] and leaves the menu untouched when no item matches.
    pub fn remove_from_menu(&mut self, name: &str) -> Result<(), MenuError> {
        let Some(index) = self.menu.iter().position(|item| item.name == name) else {
            warn!(restaurant = %self.name, item = name, "Remove failed: not on menu");
            return Err(MenuError::ItemNotFound(name.to_string()));
        };
        self.menu.remove(index);
        info!(restaurant = %self.name, item = name, size = self.menu.len(), "Removed from menu");
        Ok(())
    }

    /// Read-only view of the menu in insertion order.
    pub fn menu(&self) -> &[MenuItem] {
        &self.menu
    }

    /// First menu item called `name`, if any.
    pub fn find_item(&self, name: &str) -> Option<&MenuItem> {
        self.menu.iter().find(|item| item.name == name)
    }

    /// Sums the prices of the selected dishes.
    ///
    /// Each selected name adds the price of the first menu item with that name, once per
    /// occurrence in `selected`. Names missing from the menu add nothing.
    pub fn order_total<S: AsRef<str>>(&self, selected: &[S]) -> u64 {
        let mut total = 0u64;
        for name in selected {
            let name = name.as_ref();
            match self.find_item(name) {
                Some(item) => total += u64::from(item.price),
                None => warn!(restaurant = %self.name, item = name, "Selected item not on menu, skipped"),
            }
        }
        debug!(restaurant = %self.name, items = selected.len(), total, "Order total");
        total
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::clock::FixedClock;

    fn time(hour: u32, minute: u32) -> NaiveTime {
        NaiveTime::from_hms_opt(hour, minute, 0).unwrap()
    }

    fn cafe() -> Restaurant {
        let mut restaurant = Restaurant::new("Amelie's cafe", "Chennai", time(10, 30), time(22, 0));
        restaurant.add_to_menu("Sweet corn soup", 119);
        restaurant.add_to_menu("Vegetable lasagne", 269);
        restaurant
    }

    #[test]
    fn new_restaurant_has_empty_menu_and_keeps_identity() {
        let restaurant = Restaurant::new("Amelie's cafe", "Chennai", time(10, 30), time(22, 0));
        assert!(restaurant.menu().is_empty());
        assert_eq!(restaurant.name(), "Amelie's cafe");
        assert_eq!(restaurant.location(), "Chennai");
        assert_eq!(restaurant.opening_time(), time(10, 30));
        assert_eq!(restaurant.closing_time(), time(22, 0));
    }

    #[test]
    fn boundary_instants_count_as_closed() {
        let clock = FixedClock::at(10, 30);
        let restaurant = cafe().with_clock(clock.clone());
        assert!(!restaurant.is_open());

        clock.set(time(22, 0));
        assert!(!restaurant.is_open());

        clock.set(NaiveTime::from_hms_opt(10, 30, 1).unwrap());
        assert!(restaurant.is_open());
    }

    #[test]
    fn reversed_window_is_never_open() {
        let clock = FixedClock::at(12, 0);
        let restaurant = Restaurant::new("Night owl", "Pune", time(22, 0), time(2, 0)).with_clock(clock.clone());
        assert!(!restaurant.is_open());

        clock.set(time(23, 30));
        assert!(!restaurant.is_open());
    }

    #[test]
    fn duplicate_names_are_kept_and_removed_one_at_a_time() {
        let mut restaurant = cafe();
        restaurant.add_to_menu("Sweet corn soup", 150);
        assert_eq!(restaurant.menu().len(), 3);

        restaurant.remove_from_menu("Sweet corn soup").unwrap();
        assert_eq!(restaurant.menu().len(), 2);
        // The first entry went; the later duplicate survives at the end.
        assert_eq!(restaurant.find_item("Sweet corn soup").map(|i| i.price), Some(150));
    }

    #[test]
    fn order_total_uses_first_match_for_duplicates() {
        let mut restaurant = cafe();
        restaurant.add_to_menu("Sweet corn soup", 150);
        assert_eq!(restaurant.order_total(&["Sweet corn soup"]), 119);
    }

    #[test]
    fn order_total_skips_unknown_names_and_counts_repeats() {
        let restaurant = cafe();
        assert_eq!(restaurant.order_total(&["Momos", "Sweet corn soup"]), 119);
        assert_eq!(restaurant.order_total(&["Sweet corn soup", "Sweet corn soup"]), 238);
    }

    #[test]
    fn order_total_does_not_overflow_u32() {
        let mut restaurant = cafe();
        restaurant.add_to_menu("Truffle platter", u32::MAX);
        let total = restaurant.order_total(&["Truffle platter", "Truffle platter"]);
        assert_eq!(total, 2 * u64::from(u32::MAX));
    }

    #[test]
    fn from_create_params_preserves_menu_order() {
        let restaurant = Restaurant::from_create_params(RestaurantCreate {
            name: "Amelie's cafe".into(),
            location: "Chennai".into(),
            opening_time: time(10, 30),
            closing_time: time(22, 0),
            menu: vec![MenuItem::new("Momos", 319), MenuItem::new("Sizzling brownie", 319)],
        });
        let names: Vec<&str> = restaurant.menu().iter().map(|i| i.name.as_str()).collect();
        assert_eq!(names, ["Momos", "Sizzling brownie"]);
    }
}
