// 🧑 Customer Entity - mutable names, derived full name
//
// "John" + "Doe" → "John Doe"
// Restaurants and review counts are not stored here; the store derives
// them from its reviews.

use serde::{Deserialize, Serialize};

use super::{CustomerId, Rating, Restaurant, Review};
use crate::attributes::{catalog, AttributeValue, EntityKind};
use crate::error::{ModelError, Result};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Customer {
    id: CustomerId,
    given_name: String,
    family_name: String,
}

impl Customer {
    /// Create a customer with a fresh id (not yet registered anywhere)
    pub fn new(given_name: impl Into<String>, family_name: impl Into<String>) -> Self {
        Customer {
            id: CustomerId::generate(),
            given_name: given_name.into(),
            family_name: family_name.into(),
        }
    }

    pub fn id(&self) -> CustomerId {
        self.id
    }

    pub fn given_name(&self) -> &str {
        &self.given_name
    }

    pub fn family_name(&self) -> &str {
        &self.family_name
    }

    /// Western-style full name: "given family"
    pub fn full_name(&self) -> String {
        format!("{} {}", self.given_name, self.family_name)
    }

    pub fn set_given_name(&mut self, given_name: impl Into<String>) {
        self.given_name = given_name.into();
    }

    pub fn set_family_name(&mut self, family_name: impl Into<String>) {
        self.family_name = family_name.into();
    }

    /// Build a review of `restaurant` authored by this customer.
    ///
    /// The review still has to be added to a store.
    pub fn review(&self, restaurant: &Restaurant, rating: Rating) -> Review {
        Review::new(self, restaurant, rating)
    }

    /// Write an attribute by name; `full_name` is derived and rejected
    pub fn set_attribute(&mut self, field: &str, value: AttributeValue) -> Result<()> {
        catalog().check_write(EntityKind::Customer, field, &value)?;

        match (field, value) {
            ("given_name", AttributeValue::Text(v)) => self.given_name = v,
            ("family_name", AttributeValue::Text(v)) => self.family_name = v,
            // Catalog marks a field mutable that Customer does not store
            (field, _) => {
                return Err(ModelError::UnknownAttribute {
                    entity: EntityKind::Customer,
                    field: field.to_string(),
                })
            }
        }
        Ok(())
    }
}
