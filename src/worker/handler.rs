//! Worker implementation for asynchronous API operations.
//!
//! The worker owns the boxed [`EventsGateway`] and processes requests
//! sequentially on its own thread, so blocking HTTP never touches the
//! render loop. Every failure is written to the diagnostic log here, once,
//! with the operation name attached.

use std::sync::mpsc::{Receiver, Sender};

use crate::api::{ApiError, EventsGateway};
use crate::worker::{OpsRequest, OpsResponse};

/// Worker state for handling API operations.
///
/// Constructed on the main thread and moved into a spawned thread together
/// with the request receiver. The worker exits when either channel closes,
/// which happens exactly when the UI shuts down.
pub struct OpsWorker {
    /// The API gateway, boxed so tests can substitute a stub.
    gateway: Box<dyn EventsGateway>,

    /// Channel back to the main thread.
    responses: Sender<OpsResponse>,
}

impl OpsWorker {
    /// Creates a worker over the given gateway and response channel.
    #[must_use]
    pub fn new(gateway: Box<dyn EventsGateway>, responses: Sender<OpsResponse>) -> Self {
        Self { gateway, responses }
    }

    /// Serves requests until the UI side hangs up.
    ///
    /// Requests are processed strictly in order; the application state only
    /// ever has one operation in flight, so there is no queueing pressure.
    pub fn run(self, requests: &Receiver<OpsRequest>) {
        tracing::debug!("operations worker started");
        while let Ok(request) = requests.recv() {
            let response = self.handle(request);
            if self.responses.send(response).is_err() {
                break;
            }
        }
        tracing::debug!("operations worker stopped");
    }

    /// Processes a single request into its response.
    pub fn handle(&self, request: OpsRequest) -> OpsResponse {
        let _span = tracing::debug_span!(
            "ops_request",
            operation = request.operation(),
            seq = request.seq()
        )
        .entered();

        match request {
            OpsRequest::ListEvents { seq } => {
                Self::complete("list events", seq, None, self.gateway.list_events(), |events| {
                    tracing::debug!(event_count = events.len(), "events listed");
                    OpsResponse::EventsListed { seq, events }
                })
            }
            OpsRequest::GetEvent { seq, id } => Self::complete(
                "fetch event",
                seq,
                Some(id),
                self.gateway.get_event(id),
                |event| OpsResponse::EventFetched { seq, event },
            ),
            OpsRequest::CreateEvent { seq, draft } => Self::complete(
                "create event",
                seq,
                None,
                self.gateway.create_event(&draft),
                |event| {
                    tracing::debug!(event_id = event.id, "event created");
                    OpsResponse::EventSaved { seq, event }
                },
            ),
            OpsRequest::UpdateEvent { seq, id, draft } => Self::complete(
                "update event",
                seq,
                Some(id),
                self.gateway.update_event(id, &draft),
                |event| OpsResponse::EventSaved { seq, event },
            ),
            OpsRequest::DeleteEvent { seq, id } => Self::complete(
                "delete event",
                seq,
                Some(id),
                self.gateway.delete_event(id),
                |()| OpsResponse::EventDeleted { seq, id },
            ),
        }
    }

    /// Standardizes failure logging and response construction.
    ///
    /// A 404 on an identified resource becomes the distinct missing outcome;
    /// every other failure is logged and reduced to its user-facing message.
    fn complete<T, F>(
        operation: &str,
        seq: u64,
        id: Option<i64>,
        result: Result<T, ApiError>,
        on_success: F,
    ) -> OpsResponse
    where
        F: FnOnce(T) -> OpsResponse,
    {
        match result {
            Ok(value) => on_success(value),
            Err(ApiError::NotFound) if id.is_some() => {
                let id = id.unwrap_or_default();
                tracing::debug!(operation, event_id = id, "event reported absent");
                OpsResponse::EventMissing { seq, id }
            }
            Err(error) => {
                tracing::error!(operation, error = %error, "api operation failed");
                OpsResponse::Failed {
                    seq,
                    message: error.user_message(),
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{EventDraft, EventRecord, EventStatus};
    use chrono::{TimeZone, Utc};
    use std::collections::HashMap;
    use std::sync::mpsc;
    use std::sync::Mutex;

    /// In-memory gateway mirroring the server's assign-id and
    /// full-replacement semantics.
    struct StubGateway {
        records: Mutex<HashMap<i64, EventRecord>>,
        next_id: Mutex<i64>,
        fail_with: Option<fn() -> ApiError>,
    }

    impl StubGateway {
        fn empty() -> Self {
            Self {
                records: Mutex::new(HashMap::new()),
                next_id: Mutex::new(1),
                fail_with: None,
            }
        }

        fn failing(fail_with: fn() -> ApiError) -> Self {
            Self {
                fail_with: Some(fail_with),
                ..Self::empty()
            }
        }

        fn check(&self) -> Result<(), ApiError> {
            match self.fail_with {
                Some(make) => Err(make()),
                None => Ok(()),
            }
        }
    }

    impl EventsGateway for StubGateway {
        fn list_events(&self) -> Result<Vec<EventRecord>, ApiError> {
            self.check()?;
            let mut events: Vec<EventRecord> =
                self.records.lock().unwrap().values().cloned().collect();
            events.sort_by_key(|e| e.id);
            Ok(events)
        }

        fn get_event(&self, id: i64) -> Result<EventRecord, ApiError> {
            self.check()?;
            self.records
                .lock()
                .unwrap()
                .get(&id)
                .cloned()
                .ok_or(ApiError::NotFound)
        }

        fn create_event(&self, draft: &EventDraft) -> Result<EventRecord, ApiError> {
            self.check()?;
            let mut next_id = self.next_id.lock().unwrap();
            let id = *next_id;
            *next_id += 1;
            let record = EventRecord {
                id,
                title: draft.title.clone(),
                start_date: draft.start_date,
                end_date: draft.end_date,
                price: draft.price,
                status: draft.status.clone(),
            };
            self.records.lock().unwrap().insert(id, record.clone());
            Ok(record)
        }

        fn update_event(&self, id: i64, draft: &EventDraft) -> Result<EventRecord, ApiError> {
            self.check()?;
            let mut records = self.records.lock().unwrap();
            if !records.contains_key(&id) {
                return Err(ApiError::NotFound);
            }
            let record = EventRecord {
                id,
                title: draft.title.clone(),
                start_date: draft.start_date,
                end_date: draft.end_date,
                price: draft.price,
                status: draft.status.clone(),
            };
            records.insert(id, record.clone());
            Ok(record)
        }

        fn delete_event(&self, id: i64) -> Result<(), ApiError> {
            self.check()?;
            self.records
                .lock()
                .unwrap()
                .remove(&id)
                .map(|_| ())
                .ok_or(ApiError::NotFound)
        }
    }

    fn worker(gateway: StubGateway) -> (OpsWorker, mpsc::Receiver<OpsResponse>) {
        let (tx, rx) = mpsc::channel();
        (OpsWorker::new(Box::new(gateway), tx), rx)
    }

    fn draft(title: &str) -> EventDraft {
        EventDraft {
            title: title.to_string(),
            start_date: Utc.with_ymd_and_hms(2024, 3, 1, 18, 0, 0).unwrap(),
            end_date: Utc.with_ymd_and_hms(2024, 3, 1, 21, 0, 0).unwrap(),
            price: 15.0,
            status: EventStatus::Started,
        }
    }

    #[test]
    fn create_then_get_round_trips_the_draft() {
        let (worker, _rx) = worker(StubGateway::empty());

        let d = draft("Board games night");
        let created = worker.handle(OpsRequest::CreateEvent {
            seq: 1,
            draft: d.clone(),
        });
        let OpsResponse::EventSaved { event, .. } = created else {
            panic!("expected EventSaved, got {created:?}");
        };

        let fetched = worker.handle(OpsRequest::GetEvent {
            seq: 2,
            id: event.id,
        });
        let OpsResponse::EventFetched { event: fetched, .. } = fetched else {
            panic!("expected EventFetched, got {fetched:?}");
        };
        assert_eq!(fetched.title, d.title);
        assert_eq!(fetched.start_date, d.start_date);
        assert_eq!(fetched.end_date, d.end_date);
        assert_eq!(fetched.status, d.status);
    }

    #[test]
    fn update_replaces_every_field() {
        let (worker, _rx) = worker(StubGateway::empty());
        let OpsResponse::EventSaved { event, .. } = worker.handle(OpsRequest::CreateEvent {
            seq: 1,
            draft: draft("Original"),
        }) else {
            panic!("create failed");
        };

        let mut replacement = draft("Replaced");
        replacement.price = 99.0;
        replacement.status = EventStatus::Paused;
        worker.handle(OpsRequest::UpdateEvent {
            seq: 2,
            id: event.id,
            draft: replacement.clone(),
        });

        let OpsResponse::EventFetched { event: after, .. } =
            worker.handle(OpsRequest::GetEvent {
                seq: 3,
                id: event.id,
            })
        else {
            panic!("fetch failed");
        };
        assert_eq!(after.title, "Replaced");
        assert_eq!(after.status, EventStatus::Paused);
        assert!((after.price - 99.0).abs() < f64::EPSILON);
    }

    #[test]
    fn delete_then_get_reports_missing() {
        let (worker, _rx) = worker(StubGateway::empty());
        let OpsResponse::EventSaved { event, .. } = worker.handle(OpsRequest::CreateEvent {
            seq: 1,
            draft: draft("Short lived"),
        }) else {
            panic!("create failed");
        };

        let deleted = worker.handle(OpsRequest::DeleteEvent {
            seq: 2,
            id: event.id,
        });
        assert_eq!(
            deleted,
            OpsResponse::EventDeleted {
                seq: 2,
                id: event.id
            }
        );

        let gone = worker.handle(OpsRequest::GetEvent {
            seq: 3,
            id: event.id,
        });
        assert_eq!(
            gone,
            OpsResponse::EventMissing {
                seq: 3,
                id: event.id
            }
        );
    }

    #[test]
    fn list_failure_carries_derived_message() {
        let (worker, _rx) = worker(StubGateway::failing(|| ApiError::Validation {
            status: 400,
            body: r#"{"errors": [{"defaultMessage": "title required"}, {"defaultMessage": "price must be >= 0"}]}"#.to_string(),
        }));

        let response = worker.handle(OpsRequest::ListEvents { seq: 5 });
        assert_eq!(
            response,
            OpsResponse::Failed {
                seq: 5,
                message: "title required, price must be >= 0".to_string()
            }
        );
    }

    #[test]
    fn not_found_on_list_is_a_plain_failure() {
        // No identified resource, so the missing outcome does not apply.
        let (worker, _rx) = worker(StubGateway::failing(|| ApiError::NotFound));
        let response = worker.handle(OpsRequest::ListEvents { seq: 1 });
        assert!(matches!(response, OpsResponse::Failed { seq: 1, .. }));
    }

    #[test]
    fn run_loop_answers_over_the_channel() {
        let (worker, responses) = worker(StubGateway::empty());
        let (requests_tx, requests_rx) = mpsc::channel();

        let handle = std::thread::spawn(move || worker.run(&requests_rx));
        requests_tx
            .send(OpsRequest::ListEvents { seq: 1 })
            .unwrap();
        let response = responses
            .recv_timeout(std::time::Duration::from_secs(1))
            .unwrap();
        assert_eq!(
            response,
            OpsResponse::EventsListed {
                seq: 1,
                events: vec![]
            }
        );

        drop(requests_tx);
        handle.join().unwrap();
    }
}
