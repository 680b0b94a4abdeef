// 🌱 Seed Documents - load customers, restaurants and reviews from JSON
//
// Reviews refer to customers by full name and restaurants by name; names are
// resolved against the store after the entities have been added.

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::path::Path;
use tracing::info;

use crate::entities::{Customer, Rating, Restaurant};
use crate::error::ModelError;
use crate::store::ReviewStore;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CustomerSeed {
    pub given_name: String,
    pub family_name: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RestaurantSeed {
    pub name: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ReviewSeed {
    /// Full name of a seeded customer
    pub customer: String,

    /// Name of a seeded restaurant
    pub restaurant: String,

    pub rating: Rating,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Seed {
    #[serde(default)]
    pub customers: Vec<CustomerSeed>,

    #[serde(default)]
    pub restaurants: Vec<RestaurantSeed>,

    #[serde(default)]
    pub reviews: Vec<ReviewSeed>,
}

impl Seed {
    /// Read a seed document from a JSON file
    pub fn from_path(path: &Path) -> Result<Self> {
        let raw = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read seed file {}", path.display()))?;
        Self::from_json(&raw).with_context(|| format!("Invalid seed file {}", path.display()))
    }

    pub fn from_json(raw: &str) -> Result<Self> {
        let seed = serde_json::from_str(raw).context("Failed to parse seed JSON")?;
        Ok(seed)
    }

    /// Two customers, two restaurants, one review each
    pub fn fixture() -> Self {
        let customer = |given: &str, family: &str| CustomerSeed {
            given_name: given.to_string(),
            family_name: family.to_string(),
        };
        let restaurant = |name: &str| RestaurantSeed {
            name: name.to_string(),
        };
        let review = |customer: &str, restaurant: &str, rating| ReviewSeed {
            customer: customer.to_string(),
            restaurant: restaurant.to_string(),
            rating,
        };

        Seed {
            customers: vec![customer("John", "Doe"), customer("Jane", "Smith")],
            restaurants: vec![restaurant("Java"), restaurant("About Thyme")],
            reviews: vec![
                review("John Doe", "Java", 5),
                review("Jane Smith", "About Thyme", 8),
            ],
        }
    }

    /// Register every seeded entity in `store`.
    ///
    /// Applied to a copy first; `store` is left untouched when any review
    /// fails to resolve.
    pub fn apply(&self, store: &mut ReviewStore) -> Result<(), ModelError> {
        let mut staged = store.clone();

        for c in &self.customers {
            staged.add_customer(Customer::new(c.given_name.as_str(), c.family_name.as_str()))?;
        }
        for r in &self.restaurants {
            staged.add_restaurant(Restaurant::new(r.name.as_str()))?;
        }
        for review in &self.reviews {
            let customer = staged
                .find_customer_by_name(&review.customer)
                .map(|c| c.id())
                .ok_or_else(|| ModelError::CustomerNotFound(review.customer.clone()))?;
            let restaurant = staged
                .find_restaurant_by_name(&review.restaurant)
                .map(|r| r.id())
                .ok_or_else(|| ModelError::RestaurantNotFound(review.restaurant.clone()))?;
            staged.record_review(customer, restaurant, review.rating)?;
        }

        *store = staged;
        info!(
            customers = self.customers.len(),
            restaurants = self.restaurants.len(),
            reviews = self.reviews.len(),
            "seed applied"
        );
        Ok(())
    }
}
