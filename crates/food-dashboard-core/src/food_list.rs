//! List Patch Helpers
//!
//! Local reconciliation of a list after a remote call succeeded.
//! Shared by the native view-model and the UI store.

use crate::domain::Entity;

/// Add a record at the end of the list
pub fn append<T: Entity>(list: &mut Vec<T>, record: T) {
    list.push(record);
}

/// Replace the record with the same ID; returns false when none matched
pub fn replace_by_id<T: Entity>(list: &mut [T], record: T) -> bool {
    match list.iter_mut().find(|current| current.id() == record.id()) {
        Some(slot) => {
            *slot = record;
            true
        }
        None => false,
    }
}

/// Remove every record with the given ID, keeping the others in order
pub fn remove_by_id<T: Entity>(list: &mut Vec<T>, id: T::Id) -> usize {
    let before = list.len();
    list.retain(|current| current.id() != id);
    before - list.len()
}

pub fn find_by_id<T: Entity>(list: &[T], id: T::Id) -> Option<&T> {
    list.iter().find(|current| current.id() == id)
}
