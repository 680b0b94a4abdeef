// 🏛️ Attribute Catalog - which fields exist and which may change
// Each entity consults the catalog before a dynamic write

use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::fmt;

use crate::error::{ModelError, Result};

// ============================================================================
// ATTRIBUTE TYPES
// ============================================================================

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum EntityKind {
    Customer,
    Restaurant,
    Review,
}

impl EntityKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            EntityKind::Customer => "Customer",
            EntityKind::Restaurant => "Restaurant",
            EntityKind::Review => "Review",
        }
    }
}

impl fmt::Display for EntityKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum AttributeType {
    Text,
    Integer,
    /// Id of another entity
    Reference,
}

impl AttributeType {
    pub fn as_str(&self) -> &'static str {
        match self {
            AttributeType::Text => "text",
            AttributeType::Integer => "integer",
            AttributeType::Reference => "reference",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Mutability {
    /// Can be reassigned at any time
    Mutable,

    /// Set once by the constructor
    Immutable,

    /// Computed on read, never stored
    Derived,
}

/// Value carried by a dynamic attribute write
#[derive(Debug, Clone, PartialEq)]
pub enum AttributeValue {
    Text(String),
    Integer(i64),
    Reference(uuid::Uuid),
}

impl AttributeValue {
    pub fn attribute_type(&self) -> AttributeType {
        match self {
            AttributeValue::Text(_) => AttributeType::Text,
            AttributeValue::Integer(_) => AttributeType::Integer,
            AttributeValue::Reference(_) => AttributeType::Reference,
        }
    }
}

impl From<&str> for AttributeValue {
    fn from(value: &str) -> Self {
        AttributeValue::Text(value.to_string())
    }
}

impl From<String> for AttributeValue {
    fn from(value: String) -> Self {
        AttributeValue::Text(value)
    }
}

impl From<i64> for AttributeValue {
    fn from(value: i64) -> Self {
        AttributeValue::Integer(value)
    }
}

// ============================================================================
// ATTRIBUTE DEFINITION
// ============================================================================

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AttributeDefinition {
    pub entity: EntityKind,
    pub name: String,
    pub type_: AttributeType,
    pub mutability: Mutability,
    pub description: String,
}

impl AttributeDefinition {
    pub fn new(
        entity: EntityKind,
        name: impl Into<String>,
        type_: AttributeType,
        mutability: Mutability,
    ) -> Self {
        AttributeDefinition {
            entity,
            name: name.into(),
            type_,
            mutability,
            description: String::new(),
        }
    }

    /// Builder: add description
    pub fn with_description(mut self, desc: impl Into<String>) -> Self {
        self.description = desc.into();
        self
    }

    pub fn is_writable(&self) -> bool {
        self.mutability == Mutability::Mutable
    }
}

// ============================================================================
// ATTRIBUTE REGISTRY
// ============================================================================

/// Catalog of every attribute the three entity kinds expose.
pub struct AttributeRegistry {
    attributes: HashMap<(EntityKind, String), AttributeDefinition>,
}

impl AttributeRegistry {
    /// Create a registry holding the model's attributes
    pub fn new() -> Self {
        let mut registry = AttributeRegistry {
            attributes: HashMap::new(),
        };

        registry.register_core_attributes();
        registry
    }

    fn register_core_attributes(&mut self) {
        use AttributeType::*;
        use EntityKind::*;
        use Mutability::*;

        // ====================================================================
        // CUSTOMER
        // ====================================================================

        self.register(
            AttributeDefinition::new(Customer, "given_name", Text, Mutable)
                .with_description("First name, may be changed"),
        );
        self.register(
            AttributeDefinition::new(Customer, "family_name", Text, Mutable)
                .with_description("Last name, may be changed"),
        );
        self.register(
            AttributeDefinition::new(Customer, "full_name", Text, Derived)
                .with_description("\"given family\", computed on read"),
        );

        // ====================================================================
        // RESTAURANT
        // ====================================================================

        self.register(
            AttributeDefinition::new(Restaurant, "name", Text, Immutable)
                .with_description("Restaurant name, fixed at construction"),
        );

        // ====================================================================
        // REVIEW
        // ====================================================================

        self.register(
            AttributeDefinition::new(Review, "customer", Reference, Immutable)
                .with_description("Author of the review"),
        );
        self.register(
            AttributeDefinition::new(Review, "restaurant", Reference, Immutable)
                .with_description("Restaurant being reviewed"),
        );
        self.register(
            AttributeDefinition::new(Review, "rating", Integer, Immutable)
                .with_description("Star rating, no bounds enforced"),
        );
    }

    pub fn register(&mut self, attr: AttributeDefinition) {
        self.attributes.insert((attr.entity, attr.name.clone()), attr);
    }

    pub fn get(&self, entity: EntityKind, name: &str) -> Option<&AttributeDefinition> {
        self.attributes.get(&(entity, name.to_string()))
    }

    /// All attributes of one entity kind, sorted by name
    pub fn for_entity(&self, entity: EntityKind) -> Vec<&AttributeDefinition> {
        let mut attrs: Vec<&AttributeDefinition> = self
            .attributes
            .values()
            .filter(|a| a.entity == entity)
            .collect();
        attrs.sort_by(|a, b| a.name.cmp(&b.name));
        attrs
    }

    /// Check that `value` may be written to `entity.name`
    pub fn check_write(
        &self,
        entity: EntityKind,
        name: &str,
        value: &AttributeValue,
    ) -> Result<&AttributeDefinition> {
        let attr = self
            .get(entity, name)
            .ok_or_else(|| ModelError::UnknownAttribute {
                entity,
                field: name.to_string(),
            })?;

        if !attr.is_writable() {
            return Err(ModelError::Immutable {
                entity,
                field: name.to_string(),
            });
        }

        if value.attribute_type() != attr.type_ {
            return Err(ModelError::AttributeType {
                entity,
                field: name.to_string(),
                expected: attr.type_.as_str(),
            });
        }

        Ok(attr)
    }

    pub fn count(&self) -> usize {
        self.attributes.len()
    }
}

impl Default for AttributeRegistry {
    fn default() -> Self {
        Self::new()
    }
}

/// Shared catalog used by the entities' `set_attribute`
pub fn catalog() -> &'static AttributeRegistry {
    static CATALOG: std::sync::OnceLock<AttributeRegistry> = std::sync::OnceLock::new();
    CATALOG.get_or_init(AttributeRegistry::new)
}

// ============================================================================
// TESTS
// ============================================================================
