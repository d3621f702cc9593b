//! `#[repr(C)]` types for the FFI boundary.
//!
//! # Design
//! Each type mirrors a core type with C-compatible fields: `*mut c_char`
//! instead of `String`, pointer plus length instead of `Vec`, and enums with
//! explicit discriminants. Conversions live here so `lib.rs` stays focused on
//! the `extern "C"` surface.

use std::ffi::{c_void, CString};
use std::os::raw::c_char;

use todo_core::{FetchError, HttpMethod, HttpResponse, Todo};

/// Opaque handle to a `TodoClient`. C callers receive a pointer to this
/// and pass it back into every FFI function.
pub struct FfiTodoClient {
    pub(crate) inner: todo_core::TodoClient,
}

/// Callback invoked by `todo_fetch` once the outcome is known.
///
/// The callee owns `result` and must release it with `todo_free_result`.
pub type FfiFetchCallback = extern "C" fn(result: *mut FfiTodoResult, user_data: *mut c_void);

/// Copy `s` into a heap C string. Interior NULs truncate the string rather
/// than failing the whole call.
pub(crate) fn to_c_string(s: String) -> *mut c_char {
    let bytes: Vec<u8> = s.into_bytes().into_iter().take_while(|b| *b != 0).collect();
    CString::new(bytes).unwrap_or_default().into_raw()
}

// ---------------------------------------------------------------------------
// Request types
// ---------------------------------------------------------------------------

/// HTTP method as a C enum.
#[repr(C)]
pub enum FfiHttpMethod {
    Get = 0,
}

impl From<HttpMethod> for FfiHttpMethod {
    fn from(m: HttpMethod) -> Self {
        match m {
            HttpMethod::Get => FfiHttpMethod::Get,
        }
    }
}

/// The todo request described as C-compatible plain data. It never carries
/// headers or a body.
///
/// Built by `todo_build_get_todo`. A host that performs its own networking
/// executes it and passes the response back through `todo_parse_get_todo`.
#[repr(C)]
pub struct FfiHttpRequest {
    pub method: FfiHttpMethod,
    pub url: *mut c_char,
}

impl FfiHttpRequest {
    /// Convert a core `HttpRequest` into a heap-allocated `FfiHttpRequest`.
    pub(crate) fn from_core(req: todo_core::HttpRequest) -> *mut Self {
        Box::into_raw(Box::new(FfiHttpRequest {
            method: req.method.into(),
            url: to_c_string(req.url),
        }))
    }
}

// ---------------------------------------------------------------------------
// Response input (caller-provided, not heap-allocated by us)
// ---------------------------------------------------------------------------

/// An HTTP response described as C-compatible plain data.
///
/// The C caller builds this after executing the request and passes a pointer
/// to `todo_parse_get_todo`. A null `body` means the transport delivered no
/// body. The FFI layer reads but does not free these fields.
#[repr(C)]
pub struct FfiHttpResponse {
    pub status: u16,
    pub body: *const u8,
    pub body_len: usize,
}

impl FfiHttpResponse {
    /// Copy the caller's buffer into a core `HttpResponse`.
    ///
    /// # Safety
    /// `body` must be null or point to `body_len` readable bytes.
    pub(crate) unsafe fn to_core(&self) -> HttpResponse {
        let body = if self.body.is_null() {
            None
        } else {
            Some(unsafe { std::slice::from_raw_parts(self.body, self.body_len) }.to_vec())
        };
        HttpResponse {
            status: self.status,
            headers: Vec::new(),
            body,
        }
    }
}

// ---------------------------------------------------------------------------
// Result types
// ---------------------------------------------------------------------------

/// Error codes returned in `FfiTodoResult`.
#[repr(C)]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FfiErrorCode {
    Ok = 0,
    RequestFailed = 1,
    NoData = 2,
    Decode = 3,
    Transport = 4,
    Panic = 5,
    NullArg = 6,
}

/// The decoded todo exposed to C.
#[repr(C)]
pub struct FfiTodo {
    pub user_id: i64,
    pub id: i64,
    pub title: *mut c_char,
    pub completed: bool,
}

/// Result envelope for parse and fetch.
///
/// On success `error_code` is `Ok`, `error_message` is null and `todo` points
/// to the decoded record. On failure `error_code` names the category,
/// `error_message` is a human-readable C string and `todo` is null.
/// `http_status` is set only for `RequestFailed`.
#[repr(C)]
pub struct FfiTodoResult {
    pub error_code: FfiErrorCode,
    pub error_message: *mut c_char,
    pub http_status: u16,
    pub todo: *mut FfiTodo,
}

impl FfiTodoResult {
    pub(crate) fn from_outcome(outcome: Result<Todo, FetchError>) -> *mut Self {
        match outcome {
            Ok(todo) => Self::ok(todo),
            Err(err) => Self::from_error(err),
        }
    }

    /// Build a success result carrying the decoded todo.
    pub(crate) fn ok(todo: Todo) -> *mut Self {
        let ffi_todo = Box::new(FfiTodo {
            user_id: todo.user_id,
            id: todo.id,
            title: to_c_string(todo.title),
            completed: todo.completed,
        });
        Box::into_raw(Box::new(FfiTodoResult {
            error_code: FfiErrorCode::Ok,
            error_message: std::ptr::null_mut(),
            http_status: 0,
            todo: Box::into_raw(ffi_todo),
        }))
    }

    /// Build an error result from a `FetchError`.
    pub(crate) fn from_error(err: FetchError) -> *mut Self {
        let error_code = match &err {
            FetchError::RequestFailed { .. } => FfiErrorCode::RequestFailed,
            FetchError::NoData => FfiErrorCode::NoData,
            FetchError::Decode(_) => FfiErrorCode::Decode,
            FetchError::Transport(_) => FfiErrorCode::Transport,
        };
        Self::failure(error_code, err.status().unwrap_or(0), err.to_string())
    }

    /// Build an error result for a null argument.
    pub(crate) fn null_arg(name: &str) -> *mut Self {
        Self::failure(FfiErrorCode::NullArg, 0, format!("null argument: {name}"))
    }

    /// Build an error result for a caught panic.
    pub(crate) fn panic(msg: &str) -> *mut Self {
        Self::failure(FfiErrorCode::Panic, 0, msg.to_string())
    }

    fn failure(error_code: FfiErrorCode, http_status: u16, msg: String) -> *mut Self {
        Box::into_raw(Box::new(FfiTodoResult {
            error_code,
            error_message: to_c_string(msg),
            http_status,
            todo: std::ptr::null_mut(),
        }))
    }
}
