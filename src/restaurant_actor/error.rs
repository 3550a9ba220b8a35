//! Error types for the Restaurant actor.

use crate::restaurant::MenuError;
use thiserror::Error;

/// Errors returned by [`RestaurantClient`](super::RestaurantClient).
#[derive(Debug, Clone, Error, PartialEq)]
pub enum RestaurantError {
    /// The restaurant itself rejected the request.
    #[error(transparent)]
    Menu(#[from] MenuError),

    /// The actor task has stopped and no longer accepts requests.
    #[error("Actor closed")]
    ActorClosed,

    /// The actor dropped the response channel before replying.
    #[error("Actor dropped response channel")]
    ActorDropped,
}
