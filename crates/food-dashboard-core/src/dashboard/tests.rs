//! Dashboard View-Model Tests
//!
//! Local state must follow the remote store on success and stay put on
//! failure.

#[cfg(test)]
mod tests {
    use crate::dashboard::{Dashboard, DashboardState, FoodActions, FoodPatch};
    use crate::domain::{FoodId, FoodPlate, FoodPlateInput, NewFoodPlate};
    use crate::error::{DashboardError, RemoteError, RemoteResult};
    use crate::lifetime::Lifetime;
    use crate::repository::{FoodRepository, InMemoryFoodRepository, Operation};
    use async_trait::async_trait;

    fn cake() -> FoodPlateInput {
        FoodPlateInput::new("Cake", "x", "10", "sweet")
    }

    fn plate(id: FoodId, name: &str) -> FoodPlate {
        FoodPlate::from_input(id, FoodPlateInput::new(name, "img", "10", "desc"))
    }

    async fn setup_dashboard(foods: Vec<FoodPlate>) -> (Dashboard<InMemoryFoodRepository>, InMemoryFoodRepository) {
        let store = InMemoryFoodRepository::with_foods(foods);
        let mut dashboard = Dashboard::new(store.clone());
        dashboard.load().await.expect("Failed to load");
        (dashboard, store)
    }

    #[tokio::test]
    async fn test_load_replaces_list() {
        let (dashboard, store) = setup_dashboard(vec![plate(1, "Cake"), plate(2, "Pie")]).await;
        assert_eq!(dashboard.foods(), store.snapshot().as_slice());
    }

    #[tokio::test]
    async fn test_load_failure_leaves_list_empty() {
        let store = InMemoryFoodRepository::with_foods(vec![plate(1, "Cake")]);
        store.fail_on(Operation::List);
        let mut dashboard = Dashboard::new(store);

        let result = dashboard.load().await;
        assert!(matches!(result, Err(DashboardError::Remote(RemoteError::Status { .. }))));
        assert!(dashboard.foods().is_empty());
    }

    // ========================
    // Add
    // ========================

    #[tokio::test]
    async fn test_add_to_empty_list() {
        let (mut dashboard, _) = setup_dashboard(vec![]).await;

        let patch = dashboard.add_food(cake()).await.expect("Add failed");

        assert_eq!(dashboard.foods(), &[FoodPlate::from_input(1, cake())]);
        assert_eq!(patch, FoodPatch::Created(FoodPlate::from_input(1, cake())));
    }

    #[tokio::test]
    async fn test_add_grows_list_by_one_with_server_id() {
        // A gap left by a deletion: len + 1 would collide with id 2
        let (mut dashboard, store) = setup_dashboard(vec![plate(2, "Pie")]).await;

        let patch = dashboard.add_food(cake()).await.expect("Add failed");

        assert_eq!(dashboard.foods().len(), 2);
        let created = patch.record().expect("Created patch carries the record");
        assert_eq!(created.id, 3);
        assert_eq!(created.to_input(), cake());
        assert_eq!(dashboard.foods(), store.snapshot().as_slice());
    }

    #[tokio::test]
    async fn test_add_failure_leaves_state_unchanged() {
        let (mut dashboard, store) = setup_dashboard(vec![plate(1, "Pie")]).await;
        let before = dashboard.state().clone();
        store.fail_on(Operation::Create);

        assert!(dashboard.add_food(cake()).await.is_err());
        assert_eq!(dashboard.state(), &before);
    }

    #[tokio::test]
    async fn test_add_accepts_blank_name() {
        let (mut dashboard, store) = setup_dashboard(vec![plate(1, "Cake")]).await;
        let blank = FoodPlateInput::new("", "x", "10", "sweet");

        dashboard.add_food(blank.clone()).await.expect("Add failed");

        assert_eq!(dashboard.foods().len(), 2);
        assert_eq!(dashboard.foods()[1], FoodPlate::from_input(2, blank));
        assert_eq!(dashboard.foods(), store.snapshot().as_slice());
    }

    #[tokio::test]
    async fn test_update_accepts_blank_name() {
        let (mut dashboard, store) = setup_dashboard(vec![plate(1, "Cake")]).await;

        dashboard.edit_food(plate(1, "Cake"));
        dashboard.update_food(FoodPlateInput::new(" ", "img", "10", "desc")).await.expect("Update failed");

        assert_eq!(dashboard.foods()[0].name, " ");
        assert_eq!(store.snapshot()[0].name, " ");
    }

    // ========================
    // Update
    // ========================

    #[tokio::test]
    async fn test_update_replaces_only_the_edited_plate() {
        let (mut dashboard, _) = setup_dashboard(vec![plate(1, "Cake"), plate(2, "Tart")]).await;
        let untouched = dashboard.foods()[1].clone();

        dashboard.edit_food(dashboard.foods()[0].clone());
        let pie = FoodPlateInput::new("Pie", "img", "10", "desc");
        let patch = dashboard.update_food(pie).await.expect("Update failed");

        assert_eq!(patch.record().map(|f| f.id), Some(1));
        assert!(patch.ends_edit());
        assert_eq!(dashboard.foods()[0].name, "Pie");
        assert_eq!(dashboard.foods()[1], untouched);
        assert_eq!(dashboard.foods().len(), 2);
    }

    #[tokio::test]
    async fn test_update_clears_edit_target() {
        let (mut dashboard, _) = setup_dashboard(vec![plate(1, "Cake")]).await;

        dashboard.edit_food(plate(1, "Cake"));
        dashboard.update_food(cake()).await.expect("Update failed");

        assert!(dashboard.state().editing_food.is_none());
    }

    #[tokio::test]
    async fn test_update_without_edit_target() {
        let (mut dashboard, _) = setup_dashboard(vec![plate(1, "Cake")]).await;

        assert_eq!(dashboard.update_food(cake()).await, Err(DashboardError::NoEditTarget));
    }

    #[tokio::test]
    async fn test_update_failure_leaves_state_unchanged() {
        let (mut dashboard, store) = setup_dashboard(vec![plate(1, "Cake")]).await;
        dashboard.edit_food(plate(1, "Cake"));
        let before = dashboard.state().clone();
        store.fail_on(Operation::Update);

        assert!(dashboard.update_food(FoodPlateInput::new("Pie", "", "", "")).await.is_err());
        assert_eq!(dashboard.state(), &before);
    }

    // ========================
    // Delete
    // ========================

    #[tokio::test]
    async fn test_delete_removes_plate_and_keeps_order() {
        let (mut dashboard, _) =
            setup_dashboard(vec![plate(1, "Cake"), plate(2, "Pie"), plate(3, "Tart")]).await;

        dashboard.delete_food(2).await.expect("Delete failed");

        assert_eq!(dashboard.foods(), &[plate(1, "Cake"), plate(3, "Tart")]);
    }

    #[tokio::test]
    async fn test_delete_first_of_two() {
        let (mut dashboard, _) = setup_dashboard(vec![plate(1, "Cake"), plate(2, "Pie")]).await;

        dashboard.delete_food(1).await.expect("Delete failed");

        assert_eq!(dashboard.foods(), &[plate(2, "Pie")]);
    }

    #[tokio::test]
    async fn test_delete_failure_leaves_state_unchanged() {
        let (mut dashboard, store) = setup_dashboard(vec![plate(1, "Cake")]).await;
        store.fail_on(Operation::Delete);

        assert!(dashboard.delete_food(1).await.is_err());
        assert_eq!(dashboard.foods(), &[plate(1, "Cake")]);
    }

    // ========================
    // Availability
    // ========================

    #[tokio::test]
    async fn test_toggle_availability() {
        let (mut dashboard, store) = setup_dashboard(vec![plate(1, "Cake")]).await;

        let patch = dashboard.toggle_availability(1).await.expect("Toggle failed");
        assert_eq!(patch, FoodPatch::Updated(plate(1, "Cake").with_availability(false)));
        assert!(!dashboard.foods()[0].available);
        assert!(!store.snapshot()[0].available);

        dashboard.toggle_availability(1).await.expect("Toggle failed");
        assert!(dashboard.foods()[0].available);
    }

    #[tokio::test]
    async fn test_toggle_availability_keeps_edit_target() {
        let (mut dashboard, _) = setup_dashboard(vec![plate(1, "Cake")]).await;
        dashboard.edit_food(plate(1, "Cake"));

        dashboard.toggle_availability(1).await.expect("Toggle failed");

        assert!(dashboard.state().editing_food.is_some());
    }

    #[tokio::test]
    async fn test_toggle_availability_unknown_plate() {
        let (mut dashboard, _) = setup_dashboard(vec![]).await;

        assert_eq!(
            dashboard.toggle_availability(8).await,
            Err(DashboardError::UnknownFood(8))
        );
    }

    // ========================
    // Patches
    // ========================

    #[test]
    fn test_update_with_no_matching_plate_changes_nothing() {
        // The record was deleted locally while its update was in flight
        let mut state = DashboardState { foods: vec![plate(1, "Cake")], ..Default::default() };

        let applied = state.apply(FoodPatch::Updated(plate(9, "Ghost")));

        assert!(!applied);
        assert_eq!(state.foods, vec![plate(1, "Cake")]);
    }

    #[test]
    fn test_edit_with_no_matching_plate_still_ends_edit() {
        let mut state = DashboardState { foods: vec![plate(1, "Cake")], ..Default::default() };
        state.begin_edit(plate(9, "Ghost"));

        assert!(!state.apply(FoodPatch::Edited(plate(9, "Ghost"))));
        assert_eq!(state.foods, vec![plate(1, "Cake")]);
        assert!(state.editing_food.is_none());
    }

    #[tokio::test]
    async fn test_update_after_concurrent_delete_leaves_list_alone() {
        let (mut dashboard, _) = setup_dashboard(vec![plate(1, "Cake"), plate(2, "Pie")]).await;
        dashboard.edit_food(plate(1, "Cake"));
        dashboard.delete_food(1).await.expect("Delete failed");

        // The store no longer has id 1 either
        let result = dashboard.update_food(cake()).await;

        assert!(matches!(result, Err(DashboardError::Remote(RemoteError::NotFound(1)))));
        assert_eq!(dashboard.foods(), &[plate(2, "Pie")]);
    }

    #[test]
    fn test_delete_patch_removes_every_match() {
        let mut foods = vec![plate(1, "Cake"), plate(2, "Pie"), plate(1, "Cake")];

        assert!(FoodPatch::Deleted(1).apply_to_list(&mut foods));
        assert_eq!(foods, vec![plate(2, "Pie")]);
    }

    // ========================
    // Modals
    // ========================

    #[test]
    fn test_modal_toggles_are_independent_and_reversible() {
        let mut state = DashboardState::default();

        state.toggle_modal();
        assert!(state.modal_open);
        assert!(!state.edit_modal_open);

        state.toggle_modal();
        assert!(!state.modal_open);

        state.toggle_edit_modal();
        state.toggle_edit_modal();
        assert!(!state.edit_modal_open);
    }

    #[test]
    fn test_begin_edit_opens_edit_modal() {
        let mut state = DashboardState::default();

        state.begin_edit(plate(4, "Soup"));

        assert!(state.edit_modal_open);
        assert_eq!(state.editing_food.as_ref().map(|f| f.id), Some(4));
    }

    // ========================
    // Lifetime
    // ========================

    /// Store whose calls finish after the dashboard was unmounted
    struct UnmountingStore {
        inner: InMemoryFoodRepository,
        lifetime: Lifetime,
    }

    #[async_trait]
    impl FoodRepository for UnmountingStore {
        async fn list(&self) -> RemoteResult<Vec<FoodPlate>> {
            self.lifetime.end();
            self.inner.list().await
        }

        async fn create(&self, food: &NewFoodPlate) -> RemoteResult<FoodPlate> {
            self.lifetime.end();
            self.inner.create(food).await
        }

        async fn update(&self, id: FoodId, food: &FoodPlateInput) -> RemoteResult<FoodPlate> {
            self.lifetime.end();
            self.inner.update(id, food).await
        }

        async fn replace(&self, food: &FoodPlate) -> RemoteResult<FoodPlate> {
            self.lifetime.end();
            self.inner.replace(food).await
        }

        async fn delete(&self, id: FoodId) -> RemoteResult<()> {
            self.lifetime.end();
            self.inner.delete(id).await
        }
    }

    #[tokio::test]
    async fn test_results_after_unmount_are_dropped() {
        let lifetime = Lifetime::new();
        let inner = InMemoryFoodRepository::with_foods(vec![plate(1, "Cake")]);
        let store = UnmountingStore { inner: inner.clone(), lifetime: lifetime.clone() };
        let mut dashboard = Dashboard::with_lifetime(store, lifetime);

        assert_eq!(dashboard.load().await, Err(DashboardError::Detached));
        assert!(dashboard.foods().is_empty());

        // The remote call itself still went through
        assert_eq!(dashboard.add_food(cake()).await, Err(DashboardError::Detached));
        assert_eq!(inner.snapshot().len(), 2);
        assert!(dashboard.foods().is_empty());
    }

    #[tokio::test]
    async fn test_failure_after_unmount_settles_as_detached() {
        let lifetime = Lifetime::new();
        let inner = InMemoryFoodRepository::new();
        inner.fail_on(Operation::Create);
        let actions = FoodActions::new(UnmountingStore { inner, lifetime: lifetime.clone() }, lifetime);

        assert_eq!(actions.add_food(cake()).await, Err(DashboardError::Detached));
    }

    #[tokio::test]
    async fn test_failure_while_mounted_keeps_remote_error() {
        let store = InMemoryFoodRepository::new();
        store.fail_on(Operation::Delete);
        let actions = FoodActions::new(store, Lifetime::new());

        let result = actions.delete_food(1).await;

        assert!(matches!(result, Err(DashboardError::Remote(RemoteError::Status { status: 500, .. }))));
    }

    #[tokio::test]
    async fn test_missing_edit_target_after_unmount_is_detached() {
        let lifetime = Lifetime::new();
        let actions = FoodActions::new(InMemoryFoodRepository::new(), lifetime.clone());

        assert_eq!(actions.update_food(None, cake()).await, Err(DashboardError::NoEditTarget));
        lifetime.end();
        assert_eq!(actions.update_food(None, cake()).await, Err(DashboardError::Detached));
    }

    #[tokio::test]
    async fn test_actions_return_patches_without_local_state() {
        let store = InMemoryFoodRepository::with_foods(vec![plate(1, "Cake")]);
        let actions = FoodActions::new(store.clone(), Lifetime::new());

        assert_eq!(actions.load().await, Ok(FoodPatch::Loaded(vec![plate(1, "Cake")])));
        assert_eq!(actions.delete_food(1).await, Ok(FoodPatch::Deleted(1)));
        assert!(store.snapshot().is_empty());
        assert_eq!(
            actions.toggle_availability(None, 1).await,
            Err(DashboardError::UnknownFood(1))
        );
    }

    #[tokio::test]
    async fn test_unmount_ends_shared_lifetime() {
        let (dashboard, _) = setup_dashboard(vec![]).await;
        let handle = dashboard.lifetime();

        dashboard.unmount();

        assert!(!handle.is_alive());
    }
}
