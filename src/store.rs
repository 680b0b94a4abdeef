// 🗂️ Review Store - the three registries plus the queries that join them
//
// Entities are built on their own and inserted explicitly. Relationship
// views (a customer's restaurants, a restaurant's customers) are derived
// from the review registry on every read.

use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use tracing::debug;

use crate::attributes::EntityKind;
use crate::entities::{
    Customer, CustomerId, Rating, Restaurant, RestaurantId, Review, ReviewId,
};
use crate::error::{ModelError, Result};

// ============================================================================
// REVIEW STORE
// ============================================================================

/// In-memory registries of customers, restaurants and reviews.
///
/// Registries are append-only apart from [`ReviewStore::reset`]. Every
/// query is a linear scan in insertion order.
#[derive(Debug, Default, Clone)]
pub struct ReviewStore {
    customers: Vec<Customer>,
    restaurants: Vec<Restaurant>,
    reviews: Vec<Review>,
}

impl ReviewStore {
    pub fn new() -> Self {
        Self::default()
    }

    // ========================================================================
    // REGISTRATION
    // ========================================================================

    pub fn add_customer(&mut self, customer: Customer) -> Result<CustomerId> {
        let id = customer.id();
        if self.customer(id).is_some() {
            return Err(already_registered(EntityKind::Customer, id));
        }
        debug!(customer = %id, name = %customer.full_name(), "registered customer");
        self.customers.push(customer);
        Ok(id)
    }

    pub fn add_restaurant(&mut self, restaurant: Restaurant) -> Result<RestaurantId> {
        let id = restaurant.id();
        if self.restaurant(id).is_some() {
            return Err(already_registered(EntityKind::Restaurant, id));
        }
        debug!(restaurant = %id, name = restaurant.name(), "registered restaurant");
        self.restaurants.push(restaurant);
        Ok(id)
    }

    /// Register a review; both the customer and the restaurant it points
    /// at must already be in this store.
    pub fn add_review(&mut self, review: Review) -> Result<ReviewId> {
        if self.review(review.id()).is_some() {
            return Err(already_registered(EntityKind::Review, review.id()));
        }
        if self.customer(review.customer()).is_none() {
            return Err(ModelError::CustomerNotFound(review.customer().to_string()));
        }
        if self.restaurant(review.restaurant()).is_none() {
            return Err(ModelError::RestaurantNotFound(review.restaurant().to_string()));
        }

        let id = review.id();
        debug!(
            review = %id,
            customer = %review.customer(),
            restaurant = %review.restaurant(),
            rating = review.rating(),
            "registered review"
        );
        self.reviews.push(review);
        Ok(id)
    }

    /// Customer writes a new review of `restaurant`
    pub fn record_review(
        &mut self,
        customer: CustomerId,
        restaurant: RestaurantId,
        rating: Rating,
    ) -> Result<ReviewId> {
        self.add_review(Review::from_ids(customer, restaurant, rating))
    }

    /// Empty all three registries
    pub fn reset(&mut self) {
        debug!(
            customers = self.customers.len(),
            restaurants = self.restaurants.len(),
            reviews = self.reviews.len(),
            "resetting store"
        );
        self.customers.clear();
        self.restaurants.clear();
        self.reviews.clear();
    }

    // ========================================================================
    // COUNTS
    // ========================================================================

    pub fn customer_count(&self) -> usize {
        self.customers.len()
    }

    pub fn restaurant_count(&self) -> usize {
        self.restaurants.len()
    }

    pub fn review_count(&self) -> usize {
        self.reviews.len()
    }

    // ========================================================================
    // LOOKUPS BY ID
    // ========================================================================

    pub fn customer(&self, id: CustomerId) -> Option<&Customer> {
        self.customers.iter().find(|c| c.id() == id)
    }

    /// Mutable access for the fields a customer may change
    pub fn customer_mut(&mut self, id: CustomerId) -> Option<&mut Customer> {
        self.customers.iter_mut().find(|c| c.id() == id)
    }

    pub fn restaurant(&self, id: RestaurantId) -> Option<&Restaurant> {
        self.restaurants.iter().find(|r| r.id() == id)
    }

    pub fn review(&self, id: ReviewId) -> Option<&Review> {
        self.reviews.iter().find(|r| r.id() == id)
    }

    // ========================================================================
    // CUSTOMER QUERIES
    // ========================================================================

    pub fn customers(&self) -> &[Customer] {
        &self.customers
    }

    /// First customer (in registration order) whose full name matches
    pub fn find_customer_by_name(&self, full_name: &str) -> Option<&Customer> {
        self.customers.iter().find(|c| c.full_name() == full_name)
    }

    pub fn find_customers_by_given_name(&self, given_name: &str) -> Vec<&Customer> {
        self.customers
            .iter()
            .filter(|c| c.given_name() == given_name)
            .collect()
    }

    /// Restaurants this customer reviewed, each listed once
    pub fn restaurants_for(&self, customer: CustomerId) -> Vec<&Restaurant> {
        let mut seen = HashSet::new();
        self.reviews_by(customer)
            .filter(|r| seen.insert(r.restaurant()))
            .filter_map(|r| self.restaurant(r.restaurant()))
            .collect()
    }

    pub fn num_reviews(&self, customer: CustomerId) -> usize {
        self.reviews_by(customer).count()
    }

    fn reviews_by(&self, customer: CustomerId) -> impl Iterator<Item = &Review> + '_ {
        self.reviews.iter().filter(move |r| r.customer() == customer)
    }

    // ========================================================================
    // RESTAURANT QUERIES
    // ========================================================================

    pub fn restaurants(&self) -> &[Restaurant] {
        &self.restaurants
    }

    pub fn find_restaurant_by_name(&self, name: &str) -> Option<&Restaurant> {
        self.restaurants.iter().find(|r| r.name() == name)
    }

    pub fn reviews_for(&self, restaurant: RestaurantId) -> Vec<&Review> {
        self.reviews
            .iter()
            .filter(|r| r.restaurant() == restaurant)
            .collect()
    }

    /// Customers who reviewed this restaurant, each listed once
    pub fn customers_for(&self, restaurant: RestaurantId) -> Vec<&Customer> {
        let mut seen = HashSet::new();
        self.reviews_for(restaurant)
            .into_iter()
            .filter(|r| seen.insert(r.customer()))
            .filter_map(|r| self.customer(r.customer()))
            .collect()
    }

    /// Mean rating over every review of this restaurant
    pub fn average_star_rating(&self, restaurant: RestaurantId) -> Result<f64> {
        let name = self
            .restaurant(restaurant)
            .map(|r| r.name().to_string())
            .ok_or_else(|| ModelError::RestaurantNotFound(restaurant.to_string()))?;

        let reviews = self.reviews_for(restaurant);
        if reviews.is_empty() {
            return Err(ModelError::NoReviews(name));
        }

        let total: f64 = reviews.iter().map(|r| f64::from(r.rating())).sum();
        Ok(total / reviews.len() as f64)
    }

    // ========================================================================
    // REVIEW QUERIES
    // ========================================================================

    pub fn reviews(&self) -> &[Review] {
        &self.reviews
    }

    // ========================================================================
    // SNAPSHOT
    // ========================================================================

    /// Serializable copy of the store with the derived views filled in
    pub fn snapshot(&self) -> StoreSnapshot {
        let customers = self
            .customers
            .iter()
            .map(|c| CustomerSummary {
                id: c.id(),
                full_name: c.full_name(),
                num_reviews: self.num_reviews(c.id()),
                restaurants: self
                    .restaurants_for(c.id())
                    .into_iter()
                    .map(|r| r.name().to_string())
                    .collect(),
            })
            .collect();

        let restaurants = self
            .restaurants
            .iter()
            .map(|r| RestaurantSummary {
                id: r.id(),
                name: r.name().to_string(),
                num_reviews: self.reviews_for(r.id()).len(),
                average_star_rating: self.average_star_rating(r.id()).ok(),
                customers: self
                    .customers_for(r.id())
                    .into_iter()
                    .map(|c| c.full_name())
                    .collect(),
            })
            .collect();

        StoreSnapshot {
            customers,
            restaurants,
            reviews: self.reviews.clone(),
        }
    }
}

fn already_registered(entity: EntityKind, id: impl std::fmt::Display) -> ModelError {
    ModelError::AlreadyRegistered {
        entity,
        id: id.to_string(),
    }
}

// ============================================================================
// SNAPSHOT TYPES
// ============================================================================

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CustomerSummary {
    pub id: CustomerId,
    pub full_name: String,
    pub num_reviews: usize,
    pub restaurants: Vec<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RestaurantSummary {
    pub id: RestaurantId,
    pub name: String,
    pub num_reviews: usize,
    /// None when nobody reviewed the restaurant
    pub average_star_rating: Option<f64>,
    pub customers: Vec<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StoreSnapshot {
    pub customers: Vec<CustomerSummary>,
    pub restaurants: Vec<RestaurantSummary>,
    pub reviews: Vec<Review>,
}

// ============================================================================
// TESTS
// ============================================================================
