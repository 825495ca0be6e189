//! Domain Layer - Core Entity Trait
//!
//! Every record kept in a dashboard list has an identifier the remote
//! store assigned to it.

/// Identifier assigned to a food plate by the remote store
pub type FoodId = u32;

/// Core trait for all domain entities
pub trait Entity: Sized + Clone {
    /// The type of the entity's unique identifier
    type Id: Copy + Eq + std::hash::Hash + std::fmt::Debug;

    /// Returns the entity's unique identifier
    fn id(&self) -> Self::Id;
}
