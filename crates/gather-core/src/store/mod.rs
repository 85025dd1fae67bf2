//! In-memory activity store
//!
//! Caches activities fetched from the backend, keyed by id, and mediates
//! reads and writes against that cache. Actions call the API, then commit
//! to the registry; a failed action logs and leaves the registry untouched.
//! Errors never cross the store boundary as values; callers observe the
//! absence of an expected state change.

mod views;

use std::collections::{BTreeMap, HashMap};

use crate::api::ActivityApi;
use crate::domain::{Activity, ActivityDraft};

/// The activity store: registry cache, selection, and UI flags.
///
/// An explicit context object with no implicit teardown; its lifetime is
/// the application session. A fresh store starts with an empty registry,
/// no selection, and all flags clear.
pub struct ActivityStore<A: ActivityApi> {
    api: A,
    registry: HashMap<String, Activity>,
    selected: Option<String>,
    edit_mode: bool,
    loading: bool,
    loading_initial: bool,
}

impl<A: ActivityApi> ActivityStore<A> {
    pub fn new(api: A) -> Self {
        Self {
            api,
            registry: HashMap::new(),
            selected: None,
            edit_mode: false,
            loading: false,
            loading_initial: false,
        }
    }

    // --- reads

    /// Look up a cached activity by id.
    pub fn activity(&self, id: &str) -> Option<&Activity> {
        self.registry.get(id)
    }

    /// The activity currently open for viewing/editing, resolved against
    /// the registry. A selection whose entity is gone yields `None`.
    pub fn selected_activity(&self) -> Option<&Activity> {
        self.selected.as_deref().and_then(|id| self.registry.get(id))
    }

    /// All cached activities ordered ascending by date.
    pub fn activities_by_date(&self) -> Vec<Activity> {
        views::activities_by_date(&self.registry)
    }

    /// Cached activities grouped by date string, in date order.
    pub fn grouped_activities(&self) -> BTreeMap<String, Vec<Activity>> {
        views::grouped_activities(&self.registry)
    }

    /// Whether the edit form is open.
    pub fn edit_mode(&self) -> bool {
        self.edit_mode
    }

    /// Whether a mutating request is in flight.
    pub fn loading(&self) -> bool {
        self.loading
    }

    /// Whether an initial list/detail fetch is in flight.
    pub fn loading_initial(&self) -> bool {
        self.loading_initial
    }

    pub fn len(&self) -> usize {
        self.registry.len()
    }

    pub fn is_empty(&self) -> bool {
        self.registry.is_empty()
    }

    // --- selection and form state (synchronous, never touch the network)

    /// Select an activity by id. Resolution happens at read time.
    pub fn select_activity(&mut self, id: impl Into<String>) {
        self.selected = Some(id.into());
    }

    /// Clear the selection.
    pub fn cancel_selected_activity(&mut self) {
        self.selected = None;
    }

    /// Open the edit form, selecting the given activity or clearing the
    /// selection for a blank form.
    pub fn open_form(&mut self, id: Option<&str>) {
        match id {
            Some(id) => self.select_activity(id),
            None => self.cancel_selected_activity(),
        }
        self.edit_mode = true;
    }

    /// Close the edit form.
    pub fn close_form(&mut self) {
        self.edit_mode = false;
    }

    // --- actions

    /// Populate the registry from the backend.
    ///
    /// Results already applied before a failure are kept; there is no
    /// rollback.
    pub async fn load_activities(&mut self) {
        self.loading_initial = true;
        match self.api.list().await {
            Ok(activities) => {
                for activity in activities {
                    self.set_activity(activity);
                }
            }
            Err(err) => tracing::warn!("Failed to load activities: {}", err),
        }
        self.loading_initial = false;
    }

    /// Load one activity, serving it from the registry when cached.
    ///
    /// A cache hit selects and returns the entity without a network call.
    pub async fn load_activity(&mut self, id: &str) -> Option<&Activity> {
        if self.registry.contains_key(id) {
            self.selected = Some(id.to_string());
            return self.registry.get(id);
        }

        self.loading_initial = true;
        let fetched = self.api.details(id).await;
        self.loading_initial = false;

        match fetched {
            Ok(activity) => {
                let activity = activity.normalized();
                let id = activity.id.clone();
                self.registry.insert(id.clone(), activity);
                self.selected = Some(id.clone());
                self.registry.get(&id)
            }
            Err(err) => {
                tracing::warn!("Failed to load activity {}: {}", id, err);
                None
            }
        }
    }

    /// Create an activity from a draft.
    ///
    /// The id is generated before the network call; on failure the entity
    /// was never persisted and the registry is left untouched.
    pub async fn create_activity(&mut self, draft: ActivityDraft) -> Option<&Activity> {
        self.loading = true;
        let activity = Activity::from_draft(draft);
        let result = self.api.create(&activity).await;
        self.loading = false;

        match result {
            Ok(()) => {
                let id = activity.id.clone();
                self.registry.insert(id.clone(), activity);
                self.selected = Some(id.clone());
                self.edit_mode = false;
                self.registry.get(&id)
            }
            Err(err) => {
                tracing::warn!("Failed to create activity: {}", err);
                None
            }
        }
    }

    /// Replace an existing activity with the given entity.
    pub async fn update_activity(&mut self, activity: Activity) -> Option<&Activity> {
        self.loading = true;
        let result = self.api.update(&activity).await;
        self.loading = false;

        match result {
            Ok(()) => {
                let activity = activity.normalized();
                let id = activity.id.clone();
                self.registry.insert(id.clone(), activity);
                self.selected = Some(id.clone());
                self.edit_mode = false;
                self.registry.get(&id)
            }
            Err(err) => {
                tracing::warn!("Failed to update activity {}: {}", activity.id, err);
                None
            }
        }
    }

    /// Delete an activity by id. Returns whether the delete committed.
    ///
    /// The selection is left as-is; a dangling selected id resolves to
    /// nothing at read time.
    pub async fn delete_activity(&mut self, id: &str) -> bool {
        self.loading = true;
        let result = self.api.delete(id).await;
        self.loading = false;

        match result {
            Ok(()) => {
                self.registry.remove(id);
                true
            }
            Err(err) => {
                tracing::warn!("Failed to delete activity {}: {}", id, err);
                false
            }
        }
    }

    /// Normalize and insert an activity into the registry.
    fn set_activity(&mut self, activity: Activity) {
        let activity = activity.normalized();
        self.registry.insert(activity.id.clone(), activity);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::http::HttpError;

    /// Api double that panics on contact; the synchronous operations under
    /// test must never reach the network.
    struct NoNetwork;

    impl ActivityApi for NoNetwork {
        async fn list(&self) -> Result<Vec<Activity>, HttpError> {
            panic!("unexpected network call");
        }
        async fn details(&self, _id: &str) -> Result<Activity, HttpError> {
            panic!("unexpected network call");
        }
        async fn create(&self, _activity: &Activity) -> Result<(), HttpError> {
            panic!("unexpected network call");
        }
        async fn update(&self, _activity: &Activity) -> Result<(), HttpError> {
            panic!("unexpected network call");
        }
        async fn delete(&self, _id: &str) -> Result<(), HttpError> {
            panic!("unexpected network call");
        }
    }

    fn seeded_store() -> ActivityStore<NoNetwork> {
        let mut store = ActivityStore::new(NoNetwork);
        store.set_activity(Activity {
            id: "a1".into(),
            title: "Museum visit".into(),
            date: "2024-04-01T10:00:00".into(),
            description: String::new(),
            category: "culture".into(),
            city: "Basel".into(),
            venue: "Kunstmuseum".into(),
        });
        store
    }

    #[test]
    fn fresh_store_is_empty_with_flags_clear() {
        let store = ActivityStore::new(NoNetwork);
        assert!(store.is_empty());
        assert_eq!(store.selected_activity(), None);
        assert!(!store.edit_mode());
        assert!(!store.loading());
        assert!(!store.loading_initial());
    }

    #[test]
    fn selection_resolves_against_the_registry() {
        let mut store = seeded_store();

        store.select_activity("a1");
        assert_eq!(store.selected_activity().unwrap().id, "a1");

        store.select_activity("missing");
        assert_eq!(store.selected_activity(), None);

        store.cancel_selected_activity();
        assert_eq!(store.selected_activity(), None);
    }

    #[test]
    fn set_activity_normalizes_the_date() {
        let store = seeded_store();
        assert_eq!(store.activity("a1").unwrap().date, "2024-04-01");
    }

    #[test]
    fn open_form_with_id_selects_and_opens() {
        let mut store = seeded_store();
        store.open_form(Some("a1"));
        assert!(store.edit_mode());
        assert_eq!(store.selected_activity().unwrap().id, "a1");
    }

    #[test]
    fn open_form_without_id_clears_selection() {
        let mut store = seeded_store();
        store.select_activity("a1");

        store.open_form(None);
        assert!(store.edit_mode());
        assert_eq!(store.selected_activity(), None);

        store.close_form();
        assert!(!store.edit_mode());
    }
}
