//! Fetch-and-decode core for the todo endpoint.
//!
//! # Overview
//! Issues one `GET /todos/1`, classifies the status, decodes the JSON body into
//! a [`Todo`] and reports exactly one outcome to the caller.
//!
//! # Design
//! - Transport sits behind the [`HttpSession`] trait. [`UreqSession`] talks to
//!   the network; [`RecordingSession`] captures requests for tests.
//! - [`TodoClient`] is stateless apart from its session and a request
//!   descriptor built once at construction.
//! - Errors are a closed set ([`FetchError`]) with fixed display messages.
//! - Request/response types are plain owned data so a foreign host can run the
//!   round trip itself and feed the response back to `parse_get_todo`.

pub mod client;
pub mod error;
pub mod http;
pub mod recording;
pub mod session;
pub mod transport;
pub mod types;

pub use client::{TodoClient, DEFAULT_BASE_URL, TODO_PATH};
pub use error::{FetchError, TransportError};
pub use http::{HttpMethod, HttpRequest, HttpResponse};
pub use recording::RecordingSession;
pub use session::{HttpSession, SessionCompletion, SessionResult};
pub use transport::UreqSession;
pub use types::Todo;
