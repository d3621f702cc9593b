//! Network-backed session built on `ureq`.
//!
//! # Design
//! The agent is configured with `http_status_as_error(false)` so 4xx/5xx
//! responses come back as data and the client, not the transport, decides
//! what counts as failure. `submit` moves the blocking round trip onto a
//! fresh thread and invokes the completion there.

use tracing::debug;

use crate::error::TransportError;
use crate::http::{HttpMethod, HttpRequest, HttpResponse};
use crate::session::{HttpSession, SessionCompletion, SessionResult};

/// Production session that performs real HTTP with a shared `ureq::Agent`.
#[derive(Debug, Clone)]
pub struct UreqSession {
    agent: ureq::Agent,
}

impl UreqSession {
    pub fn new() -> Self {
        let agent = ureq::Agent::config_builder()
            .http_status_as_error(false)
            .build()
            .new_agent();
        Self { agent }
    }

    /// Execute `request` on the calling thread.
    pub fn execute(&self, request: &HttpRequest) -> SessionResult {
        let call = match request.method {
            HttpMethod::Get => self.agent.get(&request.url).call(),
        };
        let mut response = call.map_err(|e| TransportError::new(e.to_string()))?;

        let status = response.status().as_u16();
        let headers = response
            .headers()
            .iter()
            .filter_map(|(name, value)| {
                value
                    .to_str()
                    .ok()
                    .map(|v| (name.as_str().to_string(), v.to_string()))
            })
            .collect();
        // Status and headers already arrived, so a failed body read still
        // yields a response; the client then classifies it by status.
        let body = match response.body_mut().read_to_vec() {
            Ok(body) => Some(body),
            Err(e) => {
                debug!(status, error = %e, url = %request.url, "body read failed");
                None
            }
        };

        debug!(status, bytes = body.as_ref().map_or(0, Vec::len), url = %request.url, "round trip finished");
        Ok(HttpResponse {
            status,
            headers,
            body,
        })
    }
}

impl Default for UreqSession {
    fn default() -> Self {
        Self::new()
    }
}

impl HttpSession for UreqSession {
    fn submit(&self, request: HttpRequest, completion: SessionCompletion) {
        let session = self.clone();
        std::thread::spawn(move || {
            let result = session.execute(&request);
            completion(result);
        });
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unreachable_host_is_a_transport_error() {
        // Bind then drop a listener so the port is known to be closed.
        let listener = std::net::TcpListener::bind("127.0.0.1:0").unwrap();
        let addr = listener.local_addr().unwrap();
        drop(listener);

        let request = HttpRequest {
            method: HttpMethod::Get,
            url: format!("http://{addr}/todos/1"),
        };
        let err = UreqSession::new().execute(&request).unwrap_err();
        assert!(!err.message().is_empty());
    }
}
