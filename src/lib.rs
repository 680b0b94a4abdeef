// Restaurant Reviews - Core Library
// Customers, restaurants and the reviews joining them, held in an explicit store

pub mod attributes;
pub mod entities;
pub mod error;
pub mod report;
pub mod seed;
pub mod store;

// Re-export commonly used types
pub use attributes::{
    AttributeDefinition, AttributeRegistry, AttributeType, AttributeValue, EntityKind, Mutability,
};
pub use entities::{
    Customer, CustomerId, Rating, Restaurant, RestaurantId, Review, ReviewId,
};
pub use error::{ModelError, Result};
pub use report::Report;
pub use seed::Seed;
pub use store::{CustomerSummary, RestaurantSummary, ReviewStore, StoreSnapshot};

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
