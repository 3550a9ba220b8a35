use super::MenuItem;
use chrono::NaiveTime;

/// Payload for building a [`Restaurant`](crate::restaurant::Restaurant) with a pre-filled menu.
#[derive(Debug, Clone)]
pub struct RestaurantCreate {
    pub name: String,
    pub location: String,
    pub opening_time: NaiveTime,
    pub closing_time: NaiveTime,
    pub menu: Vec<MenuItem>,
}
