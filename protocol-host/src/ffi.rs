//! C ABI entry point:
//!
//! ```c
//! int process_command(const char *command, char *buffer, size_t bufsize);
//! ```
//!
//! Return codes are the [`StatusCode`](cmdack_protocol::StatusCode) discriminants.

use core::ffi::{CStr, c_char, c_int};
use core::slice;

use cmdack_protocol::respond;

/// Writes the response for `command` into `buffer`.
///
/// A null `command` is treated as an empty one. A null `buffer` or a zero
/// `bufsize` returns -1 and nothing is written.
///
/// # Safety
///
/// `command` must be null or point to a NUL-terminated string. `buffer` must
/// be null or valid for writes of `bufsize` bytes and must not overlap
/// `command`.
#[unsafe(no_mangle)]
pub unsafe extern "C" fn process_command(
    command: *const c_char,
    buffer: *mut c_char,
    bufsize: usize,
) -> c_int {
    let command = if command.is_null() {
        None
    } else {
        Some(unsafe { CStr::from_ptr(command) }.to_bytes())
    };

    let buffer = if buffer.is_null() || bufsize == 0 {
        None
    } else {
        Some(unsafe { slice::from_raw_parts_mut(buffer.cast::<u8>(), bufsize) })
    };

    respond(command, buffer).code()
}
