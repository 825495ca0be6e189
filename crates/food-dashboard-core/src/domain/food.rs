//! Food Plate Entity
//!
//! A menu item as stored in the `/foods` collection.

use serde::{Deserialize, Serialize};
use super::entity::{Entity, FoodId};

/// A food plate record (matches the remote store's JSON shape)
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct FoodPlate {
    /// Unique identifier, assigned by the remote store
    pub id: FoodId,
    pub name: String,
    /// Image URI shown on the card
    pub image: String,
    /// Price as entered, kept as text
    pub price: String,
    pub description: String,
    /// Missing on records the store rewrote through a partial PUT
    #[serde(default)]
    pub available: bool,
}

impl FoodPlate {
    /// Build a record from form input; new plates start available
    pub fn from_input(id: FoodId, input: FoodPlateInput) -> Self {
        Self {
            id,
            name: input.name,
            image: input.image,
            price: input.price,
            description: input.description,
            available: true,
        }
    }

    /// Editable fields, used to seed the edit form
    pub fn to_input(&self) -> FoodPlateInput {
        FoodPlateInput {
            name: self.name.clone(),
            image: self.image.clone(),
            price: self.price.clone(),
            description: self.description.clone(),
        }
    }

    pub fn with_availability(&self, available: bool) -> Self {
        Self { available, ..self.clone() }
    }

    /// Price label for list items, e.g. `R$ 19.90`
    pub fn display_price(&self) -> String {
        let price = self.price.trim();
        if price.is_empty() {
            "R$ 0".to_string()
        } else {
            format!("R$ {}", price)
        }
    }
}

impl Entity for FoodPlate {
    type Id = FoodId;

    fn id(&self) -> FoodId {
        self.id
    }
}

/// Add/update payload: a food plate without identifier and availability
///
/// Serialized as the `PUT /foods/{id}` body.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FoodPlateInput {
    pub name: String,
    pub image: String,
    pub price: String,
    pub description: String,
}

impl FoodPlateInput {
    pub fn new(
        name: impl Into<String>,
        image: impl Into<String>,
        price: impl Into<String>,
        description: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            image: image.into(),
            price: price.into(),
            description: description.into(),
        }
    }
}

/// `POST /foods` body. The store assigns the identifier.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NewFoodPlate {
    #[serde(flatten)]
    pub input: FoodPlateInput,
    pub available: bool,
}

impl From<FoodPlateInput> for NewFoodPlate {
    fn from(input: FoodPlateInput) -> Self {
        Self { input, available: true }
    }
}
