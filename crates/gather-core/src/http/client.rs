//! reqwest-backed HTTP client

use std::sync::Arc;
use std::time::Duration;

use reqwest::{Client, RequestBuilder};
use serde::de::DeserializeOwned;
use serde::Serialize;

use super::HttpError;
use crate::config::ClientConfig;
use crate::notify::{Notification, Notifier, TracingNotifier};

/// HTTP client with a fixed base URL and uniform artificial latency.
///
/// Every response is held for the configured latency before it resolves,
/// success or failure alike. Failed statuses are classified into at most
/// one notification and then returned to the caller as errors.
pub struct HttpClient {
    client: Client,
    base_url: String,
    latency: Duration,
    notifier: Arc<dyn Notifier>,
}

impl HttpClient {
    pub fn new(config: ClientConfig) -> Self {
        Self::with_notifier(config, Arc::new(TracingNotifier))
    }

    pub fn with_notifier(config: ClientConfig, notifier: Arc<dyn Notifier>) -> Self {
        let client = Client::builder()
            .timeout(config.timeout)
            .build()
            .expect("Failed to create HTTP client");

        Self {
            client,
            base_url: config.base_url.trim_end_matches('/').to_string(),
            latency: config.latency,
            notifier,
        }
    }

    pub async fn get<T: DeserializeOwned>(&self, path: &str) -> Result<T, HttpError> {
        self.send(self.client.get(self.url(path))).await
    }

    pub async fn post<T: DeserializeOwned>(
        &self,
        path: &str,
        body: &impl Serialize,
    ) -> Result<T, HttpError> {
        self.send(self.client.post(self.url(path)).json(body)).await
    }

    pub async fn put<T: DeserializeOwned>(
        &self,
        path: &str,
        body: &impl Serialize,
    ) -> Result<T, HttpError> {
        self.send(self.client.put(self.url(path)).json(body)).await
    }

    pub async fn delete<T: DeserializeOwned>(&self, path: &str) -> Result<T, HttpError> {
        self.send(self.client.delete(self.url(path))).await
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    async fn send<T: DeserializeOwned>(&self, request: RequestBuilder) -> Result<T, HttpError> {
        let response = request.send().await.map_err(|e| HttpError::Transport {
            message: e.to_string(),
        })?;

        // Uniform artificial latency: applied to every response before
        // classification or decoding.
        tokio::time::sleep(self.latency).await;

        let status = response.status().as_u16();
        if !response.status().is_success() {
            if let Some(notification) = Notification::for_status(status) {
                self.notifier.notify(notification);
            }
            return Err(HttpError::Status { status });
        }

        let body = response.text().await.map_err(|e| HttpError::Decode {
            message: e.to_string(),
        })?;
        decode(&body)
    }
}

/// Decode a response body, treating an empty body as JSON `null` so that
/// void endpoints resolve to `()`.
fn decode<T: DeserializeOwned>(body: &str) -> Result<T, HttpError> {
    let body = body.trim();
    let body = if body.is_empty() { "null" } else { body };
    serde_json::from_str(body).map_err(|e| HttpError::Decode {
        message: e.to_string(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::Activity;

    #[test]
    fn url_joins_onto_base_without_doubled_slash() {
        let client = HttpClient::new(ClientConfig::with_base_url("http://localhost:5000/api/"));
        assert_eq!(
            client.url("/activities"),
            "http://localhost:5000/api/activities"
        );

        let client = HttpClient::new(ClientConfig::with_base_url("http://localhost:5000/api"));
        assert_eq!(
            client.url("/activities/42"),
            "http://localhost:5000/api/activities/42"
        );
    }

    #[test]
    fn decode_treats_empty_body_as_unit() {
        decode::<()>("").unwrap();
        decode::<()>("  \n").unwrap();
        decode::<()>("null").unwrap();
    }

    #[test]
    fn decode_parses_json_bodies() {
        let activity: Activity = decode(
            r#"{
                "id": "1",
                "title": "Reading group",
                "date": "2024-02-10T00:00:00",
                "description": "",
                "category": "culture",
                "city": "Zurich",
                "venue": "Library"
            }"#,
        )
        .unwrap();
        assert_eq!(activity.title, "Reading group");
    }

    #[test]
    fn decode_reports_malformed_bodies() {
        let err = decode::<Vec<Activity>>("{ not json").unwrap_err();
        assert!(matches!(err, HttpError::Decode { .. }));
    }
}
