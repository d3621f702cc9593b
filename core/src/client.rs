//! Fetch-and-decode client for the todo endpoint.
//!
//! # Design
//! `TodoClient` owns a session and a request descriptor that is built once at
//! construction. The work is split the same way as any host-does-IO client:
//! `build_get_todo` produces the request and `parse_get_todo` classifies a
//! response. `fetch` glues the two through the session and guarantees the
//! completion runs exactly once with either a `Todo` or a `FetchError`.
//!
//! No state survives between calls, so one client may serve any number of
//! concurrent fetches.

use std::fmt;
use std::sync::Arc;

use tracing::debug;

use crate::error::{FetchError, TransportError};
use crate::http::{HttpMethod, HttpRequest, HttpResponse};
use crate::session::{HttpSession, SessionResult};
use crate::transport::UreqSession;
use crate::types::Todo;

/// Public JSONPlaceholder host the client targets by default.
pub const DEFAULT_BASE_URL: &str = "https://jsonplaceholder.typicode.com";

/// The single resource the client fetches.
pub const TODO_PATH: &str = "/todos/1";

/// Client for `GET /todos/1`.
#[derive(Clone)]
pub struct TodoClient {
    session: Arc<dyn HttpSession>,
    request: HttpRequest,
}

impl TodoClient {
    /// Client against the public endpoint, using `session` for transport.
    pub fn new(session: Arc<dyn HttpSession>) -> Self {
        Self::with_base_url(session, DEFAULT_BASE_URL)
    }

    /// Client against `{base_url}/todos/1`. A trailing slash is ignored.
    pub fn with_base_url(session: Arc<dyn HttpSession>, base_url: &str) -> Self {
        let request = HttpRequest {
            method: HttpMethod::Get,
            url: format!("{}{TODO_PATH}", base_url.trim_end_matches('/')),
        };
        Self { session, request }
    }

    /// The request descriptor every fetch submits.
    pub fn build_get_todo(&self) -> HttpRequest {
        self.request.clone()
    }

    /// Classify a response and decode its body.
    pub fn parse_get_todo(&self, response: HttpResponse) -> Result<Todo, FetchError> {
        decode_response(response)
    }

    /// Submit the request and invoke `completion` exactly once with the outcome.
    ///
    /// The completion runs on whatever thread the session chooses.
    pub fn fetch<F>(&self, completion: F)
    where
        F: FnOnce(Result<Todo, FetchError>) + Send + 'static,
    {
        let request = self.build_get_todo();
        debug!(method = request.method.as_str(), url = %request.url, "submitting todo request");

        self.session.submit(
            request,
            Box::new(move |result: SessionResult| {
                let outcome = result.map_err(FetchError::from).and_then(decode_response);
                match &outcome {
                    Ok(todo) => debug!(id = todo.id, "todo decoded"),
                    Err(e) => debug!(error = %e, status = ?e.status(), "todo fetch failed"),
                }
                completion(outcome);
            }),
        );
    }

    /// Future form of [`TodoClient::fetch`].
    ///
    /// Resolves to a transport error if the session drops the completion
    /// without ever invoking it.
    pub async fn fetch_async(&self) -> Result<Todo, FetchError> {
        let (tx, rx) = tokio::sync::oneshot::channel();
        self.fetch(move |outcome| {
            // The receiver only disappears when the caller stopped waiting.
            let _ = tx.send(outcome);
        });
        rx.await.unwrap_or_else(|_| {
            Err(FetchError::Transport(TransportError::new(
                "session dropped the request without responding",
            )))
        })
    }
}

impl Default for TodoClient {
    fn default() -> Self {
        Self::new(Arc::new(UreqSession::new()))
    }
}

impl fmt::Debug for TodoClient {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("TodoClient")
            .field("request", &self.request)
            .finish_non_exhaustive()
    }
}

fn decode_response(response: HttpResponse) -> Result<Todo, FetchError> {
    check_status(&response)?;
    let body = match response.body {
        Some(body) if !body.is_empty() => body,
        _ => return Err(FetchError::NoData),
    };
    serde_json::from_slice(&body).map_err(FetchError::Decode)
}

/// Anything outside 200..=299 is a failed request, whatever the body says.
fn check_status(response: &HttpResponse) -> Result<(), FetchError> {
    if (200..=299).contains(&response.status) {
        return Ok(());
    }
    Err(FetchError::RequestFailed {
        status: response.status,
    })
}
