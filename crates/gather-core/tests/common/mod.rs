//! Shared test support: an in-memory API double that records traffic.

use std::collections::HashMap;
use std::sync::{Arc, Mutex};

use gather_core::{Activity, ActivityApi, HttpError};

#[derive(Default)]
struct FakeState {
    backend: HashMap<String, Activity>,
    calls: Vec<String>,
    fail_status: Option<u16>,
}

/// In-memory stand-in for the REST backend.
///
/// Clones share state, so a test can keep a handle for inspection after
/// moving one into the store.
#[derive(Clone, Default)]
pub struct FakeApi {
    state: Arc<Mutex<FakeState>>,
}

impl FakeApi {
    pub fn new() -> Self {
        Self::default()
    }

    /// Put activities into the simulated backend without going through
    /// the store.
    pub fn seed(&self, activities: impl IntoIterator<Item = Activity>) {
        let mut state = self.state.lock().unwrap();
        for activity in activities {
            state.backend.insert(activity.id.clone(), activity);
        }
    }

    /// Make every subsequent call fail with the given HTTP status.
    pub fn fail_with(&self, status: u16) {
        self.state.lock().unwrap().fail_status = Some(status);
    }

    /// Every call made so far, in order.
    pub fn calls(&self) -> Vec<String> {
        self.state.lock().unwrap().calls.clone()
    }

    pub fn backend_contains(&self, id: &str) -> bool {
        self.state.lock().unwrap().backend.contains_key(id)
    }

    fn record(&self, call: impl Into<String>) -> Result<(), HttpError> {
        let mut state = self.state.lock().unwrap();
        state.calls.push(call.into());
        match state.fail_status {
            Some(status) => Err(HttpError::Status { status }),
            None => Ok(()),
        }
    }
}

impl ActivityApi for FakeApi {
    async fn list(&self) -> Result<Vec<Activity>, HttpError> {
        self.record("list")?;
        Ok(self
            .state
            .lock()
            .unwrap()
            .backend
            .values()
            .cloned()
            .collect())
    }

    async fn details(&self, id: &str) -> Result<Activity, HttpError> {
        self.record(format!("details {id}"))?;
        self.state
            .lock()
            .unwrap()
            .backend
            .get(id)
            .cloned()
            .ok_or(HttpError::Status { status: 404 })
    }

    async fn create(&self, activity: &Activity) -> Result<(), HttpError> {
        self.record(format!("create {}", activity.id))?;
        self.state
            .lock()
            .unwrap()
            .backend
            .insert(activity.id.clone(), activity.clone());
        Ok(())
    }

    async fn update(&self, activity: &Activity) -> Result<(), HttpError> {
        self.record(format!("update {}", activity.id))?;
        let mut state = self.state.lock().unwrap();
        if !state.backend.contains_key(&activity.id) {
            return Err(HttpError::Status { status: 404 });
        }
        state.backend.insert(activity.id.clone(), activity.clone());
        Ok(())
    }

    async fn delete(&self, id: &str) -> Result<(), HttpError> {
        self.record(format!("delete {id}"))?;
        self.state.lock().unwrap().backend.remove(id);
        Ok(())
    }
}

/// Minimal activity fixture.
pub fn activity(id: &str, date: &str) -> Activity {
    Activity {
        id: id.into(),
        title: format!("activity {id}"),
        date: date.into(),
        description: String::new(),
        category: String::new(),
        city: String::new(),
        venue: String::new(),
    }
}
