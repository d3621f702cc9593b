//! A session that records requests instead of sending them.
//!
//! # Design
//! Every `submit` appends the request and parks its completion. A test then
//! answers a parked completion with `complete` or `complete_next`, which runs
//! it synchronously on the test's thread. The lock is released before the
//! completion runs so a completion may submit again without deadlocking.

use std::sync::{Mutex, MutexGuard, PoisonError};

use crate::http::HttpRequest;
use crate::session::{HttpSession, SessionCompletion, SessionResult};

/// Test double for `HttpSession`.
#[derive(Default)]
pub struct RecordingSession {
    requests: Mutex<Vec<HttpRequest>>,
    completions: Mutex<Vec<Option<SessionCompletion>>>,
}

impl RecordingSession {
    pub fn new() -> Self {
        Self::default()
    }

    /// Every request submitted so far, in submission order.
    pub fn requests(&self) -> Vec<HttpRequest> {
        lock(&self.requests).clone()
    }

    /// Number of completions that have not been answered yet.
    pub fn pending(&self) -> usize {
        lock(&self.completions).iter().filter(|c| c.is_some()).count()
    }

    /// Answer the completion of the `index`-th submitted request.
    ///
    /// Returns `false` when there is no such request or it was already
    /// answered.
    pub fn complete(&self, index: usize, result: SessionResult) -> bool {
        let completion = lock(&self.completions)
            .get_mut(index)
            .and_then(Option::take);
        match completion {
            Some(completion) => {
                completion(result);
                true
            }
            None => false,
        }
    }

    /// Answer the oldest completion that is still pending.
    pub fn complete_next(&self, result: SessionResult) -> bool {
        let completion = lock(&self.completions)
            .iter_mut()
            .find_map(Option::take);
        match completion {
            Some(completion) => {
                completion(result);
                true
            }
            None => false,
        }
    }
}

impl HttpSession for RecordingSession {
    fn submit(&self, request: HttpRequest, completion: SessionCompletion) {
        lock(&self.requests).push(request);
        lock(&self.completions).push(Some(completion));
    }
}

fn lock<T>(mutex: &Mutex<T>) -> MutexGuard<'_, T> {
    mutex.lock().unwrap_or_else(PoisonError::into_inner)
}
