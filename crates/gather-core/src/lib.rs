//! gather-core: client-side core for the gather activities manager
//!
//! This library provides:
//! - An HTTP client wrapper with a fixed base URL, uniform artificial
//!   latency, and centralized status-to-notification mapping
//! - A typed facade over the `/activities` REST resource
//! - An in-memory activity store that caches fetched entities and exposes
//!   derived views (sorted and grouped by date)
//!
//! Rendering, routing, and notification presentation are the consumer's
//! concern; the store is an explicit context object, not a singleton.

pub mod api;
pub mod config;
pub mod domain;
pub mod http;
pub mod notify;
pub mod store;

// Re-export main types for convenience
pub use api::{ActivitiesApi, ActivityApi};
pub use config::ClientConfig;
pub use domain::{Activity, ActivityDraft};
pub use http::{HttpClient, HttpError};
pub use notify::{Notification, NotificationKind, Notifier, TracingNotifier};
pub use store::ActivityStore;
