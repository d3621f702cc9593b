//! C-ABI wrapper around `todo-core`.
//!
//! # Overview
//! Exposes the todo fetch to a mobile or native host through `extern "C"`
//! functions. A host can either let the library do the networking
//! (`todo_fetch`) or run the request itself (`todo_build_get_todo`, then
//! `todo_parse_get_todo`).
//!
//! # Design
//! - Every `extern "C"` function wraps its body in `catch_unwind` so panics
//!   never cross the FFI boundary.
//! - A single `FfiTodoResult` envelope carries either the todo or an error
//!   code with its message.
//! - The C caller owns all returned pointers and must call the matching
//!   `todo_free_*` function to release them.

pub mod types;

use std::ffi::{c_void, CStr, CString};
use std::os::raw::c_char;
use std::panic::{catch_unwind, AssertUnwindSafe};
use std::sync::Arc;

use todo_core::{TodoClient, UreqSession, DEFAULT_BASE_URL};

use types::*;

// ---------------------------------------------------------------------------
// Client lifecycle
// ---------------------------------------------------------------------------

/// Create a new client. A null `base_url` targets the public endpoint.
///
/// Returns null if `base_url` is not valid UTF-8 or if an internal panic
/// occurs. The caller must free the returned pointer with `todo_client_free`.
#[unsafe(no_mangle)]
pub extern "C" fn todo_client_new(base_url: *const c_char) -> *mut FfiTodoClient {
    catch_unwind(|| {
        let url = if base_url.is_null() {
            DEFAULT_BASE_URL
        } else {
            match unsafe { CStr::from_ptr(base_url) }.to_str() {
                Ok(url) => url,
                Err(_) => return std::ptr::null_mut(),
            }
        };
        let client = TodoClient::with_base_url(Arc::new(UreqSession::new()), url);
        Box::into_raw(Box::new(FfiTodoClient { inner: client }))
    })
    .unwrap_or(std::ptr::null_mut())
}

/// Free a client created by `todo_client_new`. Safe to call with null.
///
/// Fetches already in flight still complete and invoke their callbacks.
#[unsafe(no_mangle)]
pub extern "C" fn todo_client_free(client: *mut FfiTodoClient) {
    if !client.is_null() {
        let _ = catch_unwind(AssertUnwindSafe(|| {
            drop(unsafe { Box::from_raw(client) });
        }));
    }
}

// ---------------------------------------------------------------------------
// Host-does-IO path
// ---------------------------------------------------------------------------

/// Build the todo request for a host that performs its own networking.
///
/// Returns null if `client` is null.
/// The caller must free the returned pointer with `todo_free_request`.
#[unsafe(no_mangle)]
pub extern "C" fn todo_build_get_todo(client: *const FfiTodoClient) -> *mut FfiHttpRequest {
    catch_unwind(AssertUnwindSafe(|| {
        if client.is_null() {
            return std::ptr::null_mut();
        }
        let client = unsafe { &*client };
        FfiHttpRequest::from_core(client.inner.build_get_todo())
    }))
    .unwrap_or(std::ptr::null_mut())
}

/// Classify and decode a response the host obtained itself.
///
/// `response.body` must be null or point to `response.body_len` bytes.
#[unsafe(no_mangle)]
pub extern "C" fn todo_parse_get_todo(
    client: *const FfiTodoClient,
    response: *const FfiHttpResponse,
) -> *mut FfiTodoResult {
    catch_unwind(AssertUnwindSafe(|| {
        if client.is_null() {
            return FfiTodoResult::null_arg("client");
        }
        if response.is_null() {
            return FfiTodoResult::null_arg("response");
        }
        let client = unsafe { &*client };
        let core_resp = unsafe { (*response).to_core() };
        FfiTodoResult::from_outcome(client.inner.parse_get_todo(core_resp))
    }))
    .unwrap_or_else(|_| FfiTodoResult::panic("panic in todo_parse_get_todo"))
}

// ---------------------------------------------------------------------------
// Library-does-IO path
// ---------------------------------------------------------------------------

/// Host context handed back to the callback untouched.
struct UserData(*mut c_void);

// The host promises `user_data` may be used from the callback thread.
unsafe impl Send for UserData {}

impl UserData {
    fn into_inner(self) -> *mut c_void {
        self.0
    }
}

/// Fetch the todo on a background thread.
///
/// Returns `Ok` when the request was submitted; `callback` then fires exactly
/// once, from a library-owned thread, with a result the callee must free via
/// `todo_free_result`. Any other return code means the callback will not be
/// invoked.
#[unsafe(no_mangle)]
pub extern "C" fn todo_fetch(
    client: *const FfiTodoClient,
    callback: Option<FfiFetchCallback>,
    user_data: *mut c_void,
) -> FfiErrorCode {
    let Some(callback) = callback else {
        return FfiErrorCode::NullArg;
    };
    if client.is_null() {
        return FfiErrorCode::NullArg;
    }
    let user_data = UserData(user_data);

    catch_unwind(AssertUnwindSafe(|| {
        let client = unsafe { &*client };
        client.inner.fetch(move |outcome| {
            let result = catch_unwind(AssertUnwindSafe(|| FfiTodoResult::from_outcome(outcome)))
                .unwrap_or_else(|_| FfiTodoResult::panic("panic in todo_fetch"));
            callback(result, user_data.into_inner());
        });
        FfiErrorCode::Ok
    }))
    .unwrap_or(FfiErrorCode::Panic)
}

// ---------------------------------------------------------------------------
// Free functions
// ---------------------------------------------------------------------------

/// Free an `FfiHttpRequest` returned by `todo_build_get_todo`.
/// Safe to call with null.
#[unsafe(no_mangle)]
pub extern "C" fn todo_free_request(req: *mut FfiHttpRequest) {
    if req.is_null() {
        return;
    }
    let _ = catch_unwind(|| {
        let req = unsafe { Box::from_raw(req) };
        todo_free_string(req.url);
    });
}

/// Free an `FfiTodoResult` returned by `todo_parse_get_todo` or handed to a
/// fetch callback. Safe to call with null.
#[unsafe(no_mangle)]
pub extern "C" fn todo_free_result(result: *mut FfiTodoResult) {
    if result.is_null() {
        return;
    }
    let _ = catch_unwind(|| {
        let result = unsafe { Box::from_raw(result) };
        todo_free_string(result.error_message);
        if !result.todo.is_null() {
            let todo = unsafe { Box::from_raw(result.todo) };
            todo_free_string(todo.title);
        }
    });
}

/// Free a C string allocated by this library. Safe to call with null.
#[unsafe(no_mangle)]
pub extern "C" fn todo_free_string(s: *mut c_char) {
    if !s.is_null() {
        let _ = catch_unwind(|| {
            drop(unsafe { CString::from_raw(s) });
        });
    }
}

// ---------------------------------------------------------------------------
// Unit tests
// ---------------------------------------------------------------------------
