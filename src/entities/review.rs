// ⭐ Review Entity - joins one customer to one restaurant with a rating

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::{Customer, CustomerId, Restaurant, RestaurantId, ReviewId};
use crate::attributes::{catalog, AttributeValue, EntityKind};
use crate::error::{ModelError, Result};

/// Star rating; no bounds are enforced
pub type Rating = u32;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Review {
    id: ReviewId,
    customer: CustomerId,
    restaurant: RestaurantId,
    rating: Rating,
    created_at: DateTime<Utc>,
}

impl Review {
    pub fn new(customer: &Customer, restaurant: &Restaurant, rating: Rating) -> Self {
        Review::from_ids(customer.id(), restaurant.id(), rating)
    }

    /// Build a review from ids alone; the store checks they exist on insert
    pub fn from_ids(customer: CustomerId, restaurant: RestaurantId, rating: Rating) -> Self {
        Review {
            id: ReviewId::generate(),
            customer,
            restaurant,
            rating,
            created_at: Utc::now(),
        }
    }

    pub fn id(&self) -> ReviewId {
        self.id
    }

    pub fn customer(&self) -> CustomerId {
        self.customer
    }

    pub fn restaurant(&self) -> RestaurantId {
        self.restaurant
    }

    pub fn rating(&self) -> Rating {
        self.rating
    }

    pub fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }

    /// Reviews are fixed once written; every write is rejected
    pub fn set_attribute(&mut self, field: &str, value: AttributeValue) -> Result<()> {
        catalog().check_write(EntityKind::Review, field, &value)?;
        Err(ModelError::Immutable {
            entity: EntityKind::Review,
            field: field.to_string(),
        })
    }
}
