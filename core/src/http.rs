//! HTTP transport types shared by the client and its sessions.
//!
//! # Design
//! Requests and responses are plain data. The client builds an `HttpRequest`
//! once and classifies an `HttpResponse` without knowing which session
//! produced it, so a recording session can stand in for the network in tests
//! and a foreign host can execute the request itself.
//!
//! All fields use owned types (`String`, `Vec`) so values can move across
//! threads and FFI boundaries without lifetime concerns.

/// HTTP method for a request. The todo endpoint is read-only.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HttpMethod {
    Get,
}

impl HttpMethod {
    pub fn as_str(&self) -> &'static str {
        match self {
            HttpMethod::Get => "GET",
        }
    }
}

/// An HTTP request described as plain data. The todo request carries no
/// headers and no body.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HttpRequest {
    pub method: HttpMethod,
    pub url: String,
}

/// Response metadata and body bytes, as handed back by a session.
///
/// `body` is `None` when the transport delivered no body at all. An empty
/// body and an absent one are classified the same way by the client.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HttpResponse {
    pub status: u16,
    pub headers: Vec<(String, String)>,
    pub body: Option<Vec<u8>>,
}
