//! Error types for the review model.

use thiserror::Error;

use crate::attributes::EntityKind;

/// Result type alias using the library's error type.
pub type Result<T> = std::result::Result<T, ModelError>;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum ModelError {
    /// Write to a field that is fixed after construction (or derived)
    #[error("{entity}.{field} cannot be changed after construction")]
    Immutable { entity: EntityKind, field: String },

    /// Field name that the entity does not define
    #[error("{entity} has no attribute named '{field}'")]
    UnknownAttribute { entity: EntityKind, field: String },

    /// Value kind does not match the attribute definition
    #[error("{entity}.{field} expects a {expected} value")]
    AttributeType {
        entity: EntityKind,
        field: String,
        expected: &'static str,
    },

    /// Same id added to the store twice
    #[error("{entity} already registered: {id}")]
    AlreadyRegistered { entity: EntityKind, id: String },

    #[error("Customer not found: {0}")]
    CustomerNotFound(String),

    #[error("Restaurant not found: {0}")]
    RestaurantNotFound(String),

    /// Average requested for a restaurant nobody has reviewed
    #[error("Restaurant '{0}' has no reviews")]
    NoReviews(String),
}
