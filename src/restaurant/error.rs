//! Error types for menu operations.

use thiserror::Error;

/// Errors that can occur while mutating a restaurant's menu.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum MenuError {
    /// No menu item carries the requested name.
    #[error("Item not found: {0}")]
    ItemNotFound(String),
}
