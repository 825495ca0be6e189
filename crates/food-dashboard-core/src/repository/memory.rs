//! In-Memory Food Repository
//!
//! Keeps the collection in process with json-server semantics: the store
//! assigns `max(id) + 1` on create, and unknown IDs are not found.
//! Individual operations can be made to fail for exercising error paths.

use std::collections::HashSet;
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

use async_trait::async_trait;

use super::traits::FoodRepository;
use crate::domain::{FoodId, FoodPlate, FoodPlateInput, NewFoodPlate};
use crate::error::{RemoteError, RemoteResult};

/// Remote store operations, used to pick which calls should fail
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Operation {
    List,
    Create,
    Update,
    Delete,
}

#[derive(Debug, Default)]
struct MemoryState {
    foods: Vec<FoodPlate>,
    failing: HashSet<Operation>,
}

/// Cloneable handle; clones share the same collection
#[derive(Debug, Clone, Default)]
pub struct InMemoryFoodRepository {
    state: Arc<Mutex<MemoryState>>,
}

impl InMemoryFoodRepository {
    pub fn new() -> Self {
        Self::default()
    }

    /// Seed the store with existing records, IDs kept as given
    pub fn with_foods(foods: Vec<FoodPlate>) -> Self {
        let repo = Self::new();
        repo.lock().foods = foods;
        repo
    }

    /// Make every call of `op` fail until `recover` is called
    pub fn fail_on(&self, op: Operation) {
        self.lock().failing.insert(op);
    }

    pub fn recover(&self, op: Operation) {
        self.lock().failing.remove(&op);
    }

    /// Snapshot of the stored records, in insertion order
    pub fn snapshot(&self) -> Vec<FoodPlate> {
        self.lock().foods.clone()
    }

    fn lock(&self) -> MutexGuard<'_, MemoryState> {
        self.state.lock().unwrap_or_else(PoisonError::into_inner)
    }

    fn check(state: &MemoryState, op: Operation) -> RemoteResult<()> {
        if state.failing.contains(&op) {
            return Err(RemoteError::Status {
                status: 500,
                url: format!("memory:///foods ({:?})", op),
            });
        }
        Ok(())
    }

    fn slot(state: &mut MemoryState, id: FoodId) -> RemoteResult<&mut FoodPlate> {
        state
            .foods
            .iter_mut()
            .find(|food| food.id == id)
            .ok_or(RemoteError::NotFound(id))
    }
}

#[cfg_attr(target_arch = "wasm32", async_trait(?Send))]
#[cfg_attr(not(target_arch = "wasm32"), async_trait)]
impl FoodRepository for InMemoryFoodRepository {
    async fn list(&self) -> RemoteResult<Vec<FoodPlate>> {
        let state = self.lock();
        Self::check(&state, Operation::List)?;
        Ok(state.foods.clone())
    }

    async fn create(&self, food: &NewFoodPlate) -> RemoteResult<FoodPlate> {
        let mut state = self.lock();
        Self::check(&state, Operation::Create)?;

        let id = state.foods.iter().map(|f| f.id).max().unwrap_or(0) + 1;
        let mut created = FoodPlate::from_input(id, food.input.clone());
        created.available = food.available;
        state.foods.push(created.clone());
        Ok(created)
    }

    async fn update(&self, id: FoodId, food: &FoodPlateInput) -> RemoteResult<FoodPlate> {
        let mut state = self.lock();
        Self::check(&state, Operation::Update)?;

        // Fields outside the payload (availability) are kept
        let slot = Self::slot(&mut state, id)?;
        *slot = FoodPlate::from_input(id, food.clone()).with_availability(slot.available);
        Ok(slot.clone())
    }

    async fn replace(&self, food: &FoodPlate) -> RemoteResult<FoodPlate> {
        let mut state = self.lock();
        Self::check(&state, Operation::Update)?;

        let slot = Self::slot(&mut state, food.id)?;
        *slot = food.clone();
        Ok(slot.clone())
    }

    async fn delete(&self, id: FoodId) -> RemoteResult<()> {
        let mut state = self.lock();
        Self::check(&state, Operation::Delete)?;

        let before = state.foods.len();
        state.foods.retain(|food| food.id != id);
        if state.foods.len() == before {
            return Err(RemoteError::NotFound(id));
        }
        Ok(())
    }
}
