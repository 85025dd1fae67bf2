//! REST implementation of the activities API

use super::ActivityApi;
use crate::domain::Activity;
use crate::http::{HttpClient, HttpError};

/// Facade binding the five activity operations to their resource paths.
///
/// Pure delegation: no business logic beyond path and method selection.
pub struct ActivitiesApi {
    http: HttpClient,
}

impl ActivitiesApi {
    pub fn new(http: HttpClient) -> Self {
        Self { http }
    }
}

impl ActivityApi for ActivitiesApi {
    async fn list(&self) -> Result<Vec<Activity>, HttpError> {
        self.http.get("/activities").await
    }

    async fn details(&self, id: &str) -> Result<Activity, HttpError> {
        self.http.get(&format!("/activities/{id}")).await
    }

    async fn create(&self, activity: &Activity) -> Result<(), HttpError> {
        self.http.post("/activities", activity).await
    }

    async fn update(&self, activity: &Activity) -> Result<(), HttpError> {
        self.http
            .put(&format!("/activities/{}", activity.id), activity)
            .await
    }

    async fn delete(&self, id: &str) -> Result<(), HttpError> {
        self.http.delete(&format!("/activities/{id}")).await
    }
}
