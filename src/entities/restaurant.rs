// 🍽️ Restaurant Entity - name fixed at construction

use serde::{Deserialize, Serialize};

use super::RestaurantId;
use crate::attributes::{catalog, AttributeValue, EntityKind};
use crate::error::{ModelError, Result};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Restaurant {
    id: RestaurantId,
    name: String,
}

impl Restaurant {
    pub fn new(name: impl Into<String>) -> Self {
        Restaurant {
            id: RestaurantId::generate(),
            name: name.into(),
        }
    }

    pub fn id(&self) -> RestaurantId {
        self.id
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// Restaurants have no writable attributes; every write is rejected
    pub fn set_attribute(&mut self, field: &str, value: AttributeValue) -> Result<()> {
        catalog().check_write(EntityKind::Restaurant, field, &value)?;
        Err(ModelError::Immutable {
            entity: EntityKind::Restaurant,
            field: field.to_string(),
        })
    }
}
