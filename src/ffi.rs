//! C-ABI Foreign Function Interface for unpost.
//!
//! This module provides C-compatible bindings for using unpost from other
//! languages such as C, C++, C#, Python, and any language with C FFI support.
//!
//! # Memory Management
//!
//! All strings returned by this library must be freed using `unpost_free_string`.
//! All document handles must be freed using `unpost_free_document`.
//!
//! # Error Handling
//!
//! Functions that can fail return a null pointer on error. Use `unpost_last_error`
//! to retrieve the error message.
//!
//! # Example (C)
//!
//! ```c
//! #include <stdio.h>
//! #include <string.h>
//! #include "unpost.h"
//!
//! int main() {
//!     const char* json = "{\"type\":\"doc\",\"content\":[{\"type\":\"horizontalRule\"}]}";
//!     char* markdown = unpost_convert((const uint8_t*)json, strlen(json), 0);
//!     if (!markdown) {
//!         fprintf(stderr, "Error: %s\n", unpost_last_error());
//!         return 1;
//!     }
//!
//!     printf("%s", markdown);
//!     unpost_free_string(markdown);
//!     return 0;
//! }
//! ```

use std::cell::RefCell;
use std::ffi::{c_char, c_int, CString};
use std::panic::catch_unwind;
use std::ptr;

use crate::model::Document;
use crate::render::{JsonFormat, RenderOptions};

// Thread-local storage for the last error message.
thread_local! {
    static LAST_ERROR: RefCell<Option<CString>> = const { RefCell::new(None) };
}

/// Set the last error message.
fn set_last_error(msg: &str) {
    LAST_ERROR.with(|e| {
        *e.borrow_mut() = CString::new(msg).ok();
    });
}

/// Clear the last error message.
fn clear_last_error() {
    LAST_ERROR.with(|e| {
        *e.borrow_mut() = None;
    });
}

/// Hand a rendered string to the caller, recording any failure.
fn into_c_string(result: std::thread::Result<Result<String, String>>) -> *mut c_char {
    match result {
        Ok(Ok(output)) => match CString::new(output) {
            Ok(s) => s.into_raw(),
            Err(_) => {
                set_last_error("output contains null byte");
                ptr::null_mut()
            }
        },
        Ok(Err(e)) => {
            set_last_error(&e);
            ptr::null_mut()
        }
        Err(_) => {
            set_last_error("panic occurred during conversion");
            ptr::null_mut()
        }
    }
}

/// Opaque handle to a parsed document.
#[repr(C)]
pub struct UnpostDocument {
    inner: Document,
}

/// Flags for markdown rendering.
pub const UNPOST_FLAG_TRIM: c_int = 1;
pub const UNPOST_FLAG_DASH_BULLETS: c_int = 2;

/// JSON format options.
pub const UNPOST_JSON_PRETTY: c_int = 0;
pub const UNPOST_JSON_COMPACT: c_int = 1;

fn options_from_flags(flags: c_int) -> RenderOptions {
    let mut options = RenderOptions::new();
    if flags & UNPOST_FLAG_TRIM != 0 {
        options.trim_output = true;
    }
    if flags & UNPOST_FLAG_DASH_BULLETS != 0 {
        options.bullet_marker = '-';
    }
    options
}

/// Get the version of the library.
///
/// # Safety
///
/// Returns a static string that must not be freed.
#[no_mangle]
pub extern "C" fn unpost_version() -> *const c_char {
    concat!(env!("CARGO_PKG_VERSION"), "\0").as_ptr() as *const c_char
}

/// Get the last error message.
///
/// # Safety
///
/// Returns a pointer to a thread-local error string. The pointer is valid until
/// the next call to any unpost function on the same thread.
#[no_mangle]
pub extern "C" fn unpost_last_error() -> *const c_char {
    LAST_ERROR.with(|e| {
        e.borrow()
            .as_ref()
            .map(|s| s.as_ptr())
            .unwrap_or(ptr::null())
    })
}

/// Convert a JSON document buffer straight to Markdown.
///
/// # Safety
///
/// - `data` must be a valid pointer to a byte buffer of at least `len` bytes.
/// - `flags` is a bitwise OR of `UNPOST_FLAG_*` constants.
/// - Returns null on error. Use `unpost_last_error` to get the error message.
/// - The returned string must be freed with `unpost_free_string`.
#[no_mangle]
pub unsafe extern "C" fn unpost_convert(data: *const u8, len: usize, flags: c_int) -> *mut c_char {
    clear_last_error();

    if data.is_null() {
        set_last_error("data is null");
        return ptr::null_mut();
    }

    let result = catch_unwind(|| {
        let bytes = std::slice::from_raw_parts(data, len);
        crate::convert_with_options(bytes, &options_from_flags(flags)).map_err(|e| e.to_string())
    });

    into_c_string(result)
}

/// Parse a document from a byte buffer.
///
/// # Safety
///
/// - `data` must be a valid pointer to a byte buffer of at least `len` bytes.
/// - Returns null on error. Use `unpost_last_error` to get the error message.
/// - The returned handle must be freed with `unpost_free_document`.
#[no_mangle]
pub unsafe extern "C" fn unpost_parse_bytes(data: *const u8, len: usize) -> *mut UnpostDocument {
    clear_last_error();

    if data.is_null() {
        set_last_error("data is null");
        return ptr::null_mut();
    }

    let result = catch_unwind(|| {
        let bytes = std::slice::from_raw_parts(data, len);

        crate::parse_bytes(bytes)
            .map(|doc| Box::into_raw(Box::new(UnpostDocument { inner: doc })))
            .map_err(|e| e.to_string())
    });

    match result {
        Ok(Ok(doc)) => doc,
        Ok(Err(e)) => {
            set_last_error(&e);
            ptr::null_mut()
        }
        Err(_) => {
            set_last_error("panic occurred during parsing");
            ptr::null_mut()
        }
    }
}

/// Free a document handle.
///
/// # Safety
///
/// - `doc` must be a valid pointer returned by `unpost_parse_bytes`.
/// - After calling this function, the handle is invalid and must not be used.
#[no_mangle]
pub unsafe extern "C" fn unpost_free_document(doc: *mut UnpostDocument) {
    if !doc.is_null() {
        let _ = Box::from_raw(doc);
    }
}

/// Convert a document to Markdown.
///
/// # Safety
///
/// - `doc` must be a valid document handle.
/// - `flags` is a bitwise OR of `UNPOST_FLAG_*` constants.
/// - Returns null on error. Use `unpost_last_error` to get the error message.
/// - The returned string must be freed with `unpost_free_string`.
#[no_mangle]
pub unsafe extern "C" fn unpost_to_markdown(
    doc: *const UnpostDocument,
    flags: c_int,
) -> *mut c_char {
    clear_last_error();

    if doc.is_null() {
        set_last_error("document is null");
        return ptr::null_mut();
    }

    let result = catch_unwind(|| {
        let document = &(*doc).inner;
        Ok(crate::render::to_markdown(document, &options_from_flags(flags)))
    });

    into_c_string(result)
}

/// Convert a document to plain text.
///
/// # Safety
///
/// - `doc` must be a valid document handle.
/// - Returns null on error. Use `unpost_last_error` to get the error message.
/// - The returned string must be freed with `unpost_free_string`.
#[no_mangle]
pub unsafe extern "C" fn unpost_to_text(doc: *const UnpostDocument) -> *mut c_char {
    clear_last_error();

    if doc.is_null() {
        set_last_error("document is null");
        return ptr::null_mut();
    }

    let result = catch_unwind(|| Ok((*doc).inner.plain_text()));

    into_c_string(result)
}

/// Convert a document to normalized JSON.
///
/// # Safety
///
/// - `doc` must be a valid document handle.
/// - `format` is one of `UNPOST_JSON_PRETTY` or `UNPOST_JSON_COMPACT`.
/// - Returns null on error. Use `unpost_last_error` to get the error message.
/// - The returned string must be freed with `unpost_free_string`.
#[no_mangle]
pub unsafe extern "C" fn unpost_to_json(doc: *const UnpostDocument, format: c_int) -> *mut c_char {
    clear_last_error();

    if doc.is_null() {
        set_last_error("document is null");
        return ptr::null_mut();
    }

    let result = catch_unwind(|| {
        let document = &(*doc).inner;
        let json_format = if format == UNPOST_JSON_COMPACT {
            JsonFormat::Compact
        } else {
            JsonFormat::Pretty
        };
        crate::render::to_json(document, json_format).map_err(|e| e.to_string())
    });

    into_c_string(result)
}

/// Get the number of top-level nodes in a document.
///
/// # Safety
///
/// - `doc` must be a valid document handle.
/// - Returns -1 on error.
#[no_mangle]
pub unsafe extern "C" fn unpost_node_count(doc: *const UnpostDocument) -> c_int {
    if doc.is_null() {
        set_last_error("document is null");
        return -1;
    }

    match catch_unwind(|| (*doc).inner.content.len() as c_int) {
        Ok(count) => count,
        Err(_) => {
            set_last_error("panic occurred");
            -1
        }
    }
}

/// Free a string allocated by this library.
///
/// # Safety
///
/// - `s` must be a pointer returned by an unpost function, or null.
/// - After calling this function, the pointer is invalid and must not be used.
#[no_mangle]
pub unsafe extern "C" fn unpost_free_string(s: *mut c_char) {
    if !s.is_null() {
        let _ = CString::from_raw(s);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::ffi::CStr;

    const SAMPLE: &[u8] =
        br#"{"type":"doc","content":[{"type":"unorderedList","content":[{"type":"listItem","content":[{"type":"paragraph","content":[{"type":"text","text":"a"}]}]}]}]}"#;

    unsafe fn take_string(s: *mut c_char) -> String {
        assert!(!s.is_null());
        let owned = CStr::from_ptr(s).to_str().unwrap().to_string();
        unpost_free_string(s);
        owned
    }

    #[test]
    fn test_version() {
        let version = unpost_version();
        assert!(!version.is_null());
        let version_str = unsafe { CStr::from_ptr(version) }.to_str().unwrap();
        assert!(!version_str.is_empty());
    }

    #[test]
    fn test_convert() {
        let md = unsafe { take_string(unpost_convert(SAMPLE.as_ptr(), SAMPLE.len(), 0)) };
        assert_eq!(md, "* a\n\n");

        let flags = UNPOST_FLAG_TRIM | UNPOST_FLAG_DASH_BULLETS;
        let md = unsafe { take_string(unpost_convert(SAMPLE.as_ptr(), SAMPLE.len(), flags)) };
        assert_eq!(md, "- a");
    }

    #[test]
    fn test_convert_malformed_sets_error() {
        let data = b"{\"type\":";
        let md = unsafe { unpost_convert(data.as_ptr(), data.len(), 0) };
        assert!(md.is_null());

        let error = unpost_last_error();
        assert!(!error.is_null());
        let message = unsafe { CStr::from_ptr(error) }.to_str().unwrap();
        assert!(message.starts_with("Decode error"));
    }

    #[test]
    fn test_document_handle() {
        let doc = unsafe { unpost_parse_bytes(SAMPLE.as_ptr(), SAMPLE.len()) };
        assert!(!doc.is_null());

        assert_eq!(unsafe { unpost_node_count(doc) }, 1);

        let md = unsafe { take_string(unpost_to_markdown(doc, 0)) };
        assert_eq!(md, "* a\n\n");

        let text = unsafe { take_string(unpost_to_text(doc)) };
        assert_eq!(text, "* a");

        let json = unsafe { take_string(unpost_to_json(doc, UNPOST_JSON_COMPACT)) };
        assert!(json.starts_with(r#"{"type":"doc""#));

        unsafe { unpost_free_document(doc) };
    }

    #[test]
    fn test_null_operations() {
        assert!(unsafe { unpost_convert(ptr::null(), 0, 0) }.is_null());
        assert!(unsafe { unpost_parse_bytes(ptr::null(), 0) }.is_null());
        assert!(unsafe { unpost_to_markdown(ptr::null(), 0) }.is_null());
        assert!(unsafe { unpost_to_text(ptr::null()) }.is_null());
        assert!(unsafe { unpost_to_json(ptr::null(), 0) }.is_null());
        assert_eq!(unsafe { unpost_node_count(ptr::null()) }, -1);
    }

    #[test]
    fn test_free_null() {
        // Should not crash
        unsafe {
            unpost_free_document(ptr::null_mut());
            unpost_free_string(ptr::null_mut());
        }
    }
}
