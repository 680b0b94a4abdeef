// Entity Models
//
// Each entity has:
// - Stable identity (UUID) used for lookups and de-duplication
// - Values fixed at construction, except a customer's names
// - No knowledge of the store; registration is done by the caller

use serde::{Deserialize, Serialize};
use std::fmt;
use uuid::Uuid;

pub mod customer;
pub mod restaurant;
pub mod review;

pub use customer::Customer;
pub use restaurant::Restaurant;
pub use review::{Rating, Review};

macro_rules! entity_id {
    ($(#[$meta:meta])* $name:ident) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
        #[serde(transparent)]
        pub struct $name(Uuid);

        impl $name {
            pub(crate) fn generate() -> Self {
                $name(Uuid::new_v4())
            }

            pub fn as_uuid(&self) -> Uuid {
                self.0
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                self.0.fmt(f)
            }
        }
    };
}

entity_id!(
    /// Identity of a [`Customer`]
    CustomerId
);
entity_id!(
    /// Identity of a [`Restaurant`]
    RestaurantId
);
entity_id!(
    /// Identity of a [`Review`]
    ReviewId
);
