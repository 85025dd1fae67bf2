//! Typed facade over the `/activities` REST resource

mod rest;

pub use rest::ActivitiesApi;

use crate::domain::Activity;
use crate::http::HttpError;

/// The backend operations the activity store depends on.
///
/// `ActivitiesApi` is the production implementation; tests substitute an
/// in-memory double to observe traffic without a network.
#[allow(async_fn_in_trait)]
pub trait ActivityApi {
    /// Fetch all activities.
    async fn list(&self) -> Result<Vec<Activity>, HttpError>;

    /// Fetch one activity by id.
    async fn details(&self, id: &str) -> Result<Activity, HttpError>;

    /// Submit a new activity. The payload carries its client-assigned id.
    async fn create(&self, activity: &Activity) -> Result<(), HttpError>;

    /// Submit a full replacement of an existing activity.
    async fn update(&self, activity: &Activity) -> Result<(), HttpError>;

    /// Remove an activity by id.
    async fn delete(&self, id: &str) -> Result<(), HttpError>;
}
