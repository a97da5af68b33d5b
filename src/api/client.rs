//! Reqwest-backed implementation of the events gateway.
//!
//! All requests go to `{base_url}/events[/{id}]` with JSON bodies. The
//! client is deliberately thin: it issues the request, classifies the
//! status, and decodes the body. It imposes no timeout of its own and
//! performs no retries; whatever the transport defaults to applies.

use reqwest::blocking::Response;
use reqwest::StatusCode;
use tracing::debug;

use crate::api::error::ApiError;
use crate::api::gateway::EventsGateway;
use crate::domain::{EventDraft, EventRecord};

/// Blocking HTTP client for the events API.
///
/// Cheap to construct; connection pooling is handled by reqwest internally.
/// Runs on the operations worker thread, never on the render loop.
pub struct HttpEventsClient {
    http: reqwest::blocking::Client,
    base_url: String,
}

impl HttpEventsClient {
    /// Creates a client against the given base endpoint.
    ///
    /// A trailing slash on the base URL is tolerated and stripped, so
    /// `http://localhost:8080/api` and `http://localhost:8080/api/` are
    /// equivalent.
    #[must_use]
    pub fn new(base_url: impl Into<String>) -> Self {
        let base_url = base_url.into().trim_end_matches('/').to_string();
        Self {
            http: reqwest::blocking::Client::new(),
            base_url,
        }
    }

    fn collection_url(&self) -> String {
        format!("{}/events", self.base_url)
    }

    fn resource_url(&self, id: i64) -> String {
        format!("{}/events/{id}", self.base_url)
    }

    /// Reads the response body and splits off the status for classification.
    fn read_body(response: Response) -> Result<(StatusCode, String), ApiError> {
        let status = response.status();
        let body = response.text()?;
        Ok((status, body))
    }

    /// Maps a non-2xx status (and its body) into the failure taxonomy.
    fn classify_failure(status: StatusCode, body: String) -> ApiError {
        if status == StatusCode::NOT_FOUND {
            ApiError::NotFound
        } else if status.is_client_error() {
            ApiError::Validation {
                status: status.as_u16(),
                body,
            }
        } else {
            ApiError::Server {
                status: status.as_u16(),
                body,
            }
        }
    }

    /// Checks the status and decodes a JSON body into `T`.
    fn decode<T: serde::de::DeserializeOwned>(response: Response) -> Result<T, ApiError> {
        let (status, body) = Self::read_body(response)?;
        if !status.is_success() {
            return Err(Self::classify_failure(status, body));
        }
        Ok(serde_json::from_str(&body)?)
    }

    /// Checks the status of a response whose body carries no payload.
    fn expect_success(response: Response) -> Result<(), ApiError> {
        let (status, body) = Self::read_body(response)?;
        if !status.is_success() {
            return Err(Self::classify_failure(status, body));
        }
        Ok(())
    }
}

impl EventsGateway for HttpEventsClient {
    fn list_events(&self) -> Result<Vec<EventRecord>, ApiError> {
        debug!(url = %self.collection_url(), "listing events");
        let response = self.http.get(self.collection_url()).send()?;
        Self::decode(response)
    }

    fn get_event(&self, id: i64) -> Result<EventRecord, ApiError> {
        debug!(event_id = id, "fetching event");
        let response = self.http.get(self.resource_url(id)).send()?;
        Self::decode(response)
    }

    fn create_event(&self, draft: &EventDraft) -> Result<EventRecord, ApiError> {
        debug!(title = %draft.title, "creating event");
        let response = self.http.post(self.collection_url()).json(draft).send()?;
        Self::decode(response)
    }

    fn update_event(&self, id: i64, draft: &EventDraft) -> Result<EventRecord, ApiError> {
        debug!(event_id = id, title = %draft.title, "updating event");
        let response = self.http.put(self.resource_url(id)).json(draft).send()?;
        Self::decode(response)
    }

    fn delete_event(&self, id: i64) -> Result<(), ApiError> {
        debug!(event_id = id, "deleting event");
        let response = self.http.delete(self.resource_url(id)).send()?;
        Self::expect_success(response)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::EventStatus;
    use chrono::{TimeZone, Utc};

    #[test]
    fn base_url_trailing_slash_is_stripped() {
        let client = HttpEventsClient::new("http://localhost:8080/api/");
        assert_eq!(client.base_url, "http://localhost:8080/api");
        assert_eq!(client.collection_url(), "http://localhost:8080/api/events");
        assert_eq!(client.resource_url(9), "http://localhost:8080/api/events/9");
    }

    #[test]
    fn not_found_classifies_before_other_client_errors() {
        let err = HttpEventsClient::classify_failure(StatusCode::NOT_FOUND, String::new());
        assert!(matches!(err, ApiError::NotFound));

        let err =
            HttpEventsClient::classify_failure(StatusCode::BAD_REQUEST, "nope".to_string());
        assert!(matches!(err, ApiError::Validation { status: 400, .. }));

        let err = HttpEventsClient::classify_failure(
            StatusCode::INTERNAL_SERVER_ERROR,
            String::new(),
        );
        assert!(matches!(err, ApiError::Server { status: 500, .. }));
    }

    #[test]
    #[ignore = "requires a running events API at EVENTDECK_API_URL"]
    fn live_round_trip() {
        let base = std::env::var("EVENTDECK_API_URL")
            .unwrap_or_else(|_| "http://localhost:8080/api".to_string());
        let client = HttpEventsClient::new(base);

        let draft = EventDraft {
            title: "eventdeck smoke test".to_string(),
            start_date: Utc.with_ymd_and_hms(2030, 6, 1, 18, 0, 0).unwrap(),
            end_date: Utc.with_ymd_and_hms(2030, 6, 1, 21, 0, 0).unwrap(),
            price: 0.0,
            status: EventStatus::Started,
        };

        let created = client.create_event(&draft).unwrap();
        let fetched = client.get_event(created.id).unwrap();
        assert_eq!(fetched.title, draft.title);
        assert_eq!(fetched.start_date, draft.start_date);
        assert_eq!(fetched.end_date, draft.end_date);
        assert_eq!(fetched.status, draft.status);

        client.delete_event(created.id).unwrap();
        assert!(matches!(
            client.get_event(created.id),
            Err(ApiError::NotFound)
        ));
    }
}
