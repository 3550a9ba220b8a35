//! Requests understood by the [`RestaurantActor`](super::RestaurantActor).

use crate::model::MenuItem;
use crate::restaurant::MenuError;
use chrono::NaiveTime;
use tokio::sync::oneshot;

/// One-shot reply channel carried by every request.
pub type Response<T> = oneshot::Sender<T>;

/// Identity and operating window of the hosted restaurant.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RestaurantDetails {
    pub name: String,
    pub location: String,
    pub opening_time: NaiveTime,
    pub closing_time: NaiveTime,
}

/// Internal message type sent to the actor.
///
/// Each variant maps to one operation of [`Restaurant`](crate::restaurant::Restaurant).
/// Menu reads return an owned snapshot so nothing outlives the next mutation.
#[derive(Debug)]
pub enum RestaurantRequest {
    IsOpen {
        respond_to: Response<bool>,
    },
    AddItem {
        item: MenuItem,
        respond_to: Response<()>,
    },
    RemoveItem {
        name: String,
        respond_to: Response<Result<(), MenuError>>,
    },
    GetMenu {
        respond_to: Response<Vec<MenuItem>>,
    },
    OrderTotal {
        selected: Vec<String>,
        respond_to: Response<u64>,
    },
    Details {
        respond_to: Response<RestaurantDetails>,
    },
}
