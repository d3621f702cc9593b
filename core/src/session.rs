//! The seam between the client and whatever performs HTTP.
//!
//! # Design
//! A session takes a request and a completion and promises to invoke the
//! completion at most once, from any thread. The completion receives either
//! the response (status, headers, body) or a `TransportError` when no response
//! exists. Sessions carry no retry, timeout or cancellation policy of their
//! own.
//!
//! Two implementations ship with the crate: `UreqSession` talks to the network
//! and `RecordingSession` captures requests so a test can answer them by hand.

use crate::error::TransportError;
use crate::http::{HttpRequest, HttpResponse};

/// Outcome of a single round trip as seen by a session.
pub type SessionResult = Result<HttpResponse, TransportError>;

/// Callback a session invokes once the round trip is over.
pub type SessionCompletion = Box<dyn FnOnce(SessionResult) + Send + 'static>;

/// Submit an HTTP request and report its outcome through a callback.
pub trait HttpSession: Send + Sync {
    /// Start `request` without blocking the caller. `completion` is invoked
    /// when the round trip finishes.
    fn submit(&self, request: HttpRequest, completion: SessionCompletion);
}
