use super::error::RestaurantError;
use super::message::{RestaurantDetails, RestaurantRequest, Response};
use crate::model::MenuItem;
use tokio::sync::{mpsc, oneshot};
use tracing::{debug, instrument};

/// A cloneable handle for talking to a running [`RestaurantActor`](super::RestaurantActor).
#[derive(Clone)]
pub struct RestaurantClient {
    sender: mpsc::Sender<RestaurantRequest>,
}

impl RestaurantClient {
    pub fn new(sender: mpsc::Sender<RestaurantRequest>) -> Self {
        Self { sender }
    }

    async fn request<T>(
        &self,
        build: impl FnOnce(Response<T>) -> RestaurantRequest,
    ) -> Result<T, RestaurantError> {
        let (respond_to, response) = oneshot::channel();
        self.sender
            .send(build(respond_to))
            .await
            .map_err(|_| RestaurantError::ActorClosed)?;
        response.await.map_err(|_| RestaurantError::ActorDropped)
    }

    #[instrument(skip(self))]
    pub async fn is_open(&self) -> Result<bool, RestaurantError> {
        debug!("Sending request");
        self.request(|respond_to| RestaurantRequest::IsOpen { respond_to })
            .await
    }

    #[instrument(skip(self, name))]
    pub async fn add_to_menu(&self, name: impl Into<String>, price: u32) -> Result<(), RestaurantError> {
        let item = MenuItem::new(name, price);
        debug!(item = %item.name, "Sending request");
        self.request(|respond_to| RestaurantRequest::AddItem { item, respond_to })
            .await
    }

    #[instrument(skip(self))]
    pub async fn remove_from_menu(&self, name: &str) -> Result<(), RestaurantError> {
        debug!("Sending request");
        let name = name.to_string();
        self.request(|respond_to| RestaurantRequest::RemoveItem { name, respond_to })
            .await?
            .map_err(RestaurantError::from)
    }

    #[instrument(skip(self))]
    pub async fn menu(&self) -> Result<Vec<MenuItem>, RestaurantError> {
        debug!("Sending request");
        self.request(|respond_to| RestaurantRequest::GetMenu { respond_to })
            .await
    }

    #[instrument(skip(self, selected))]
    pub async fn order_total<S: AsRef<str>>(&self, selected: &[S]) -> Result<u64, RestaurantError> {
        let selected: Vec<String> = selected.iter().map(|s| s.as_ref().to_string()).collect();
        debug!(?selected, "Sending request");
        self.request(|respond_to| RestaurantRequest::OrderTotal { selected, respond_to })
            .await
    }

    #[instrument(skip(self))]
    pub async fn details(&self) -> Result<RestaurantDetails, RestaurantError> {
        debug!("Sending request");
        self.request(|respond_to| RestaurantRequest::Details { respond_to })
            .await
    }
}
