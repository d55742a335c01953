//! The last-error slot used by callers that follow a "check after call" convention.
//!
//! The slot is thread-local: a failure on one thread is never visible from
//! another, so reading it right after a failing call on the same thread is
//! race-free. Successful calls leave it alone, so a stale message can outlive
//! the failure that wrote it.

use std::cell::RefCell;

thread_local! {
    static LAST_ERROR: RefCell<Option<String>> = const { RefCell::new(None) };
}

/// Overwrite this thread's last error.
pub fn set_last_error(message: impl Into<String>) {
    let message = message.into();
    tracing::debug!(error = %message, "recorded gitoid error");
    LAST_ERROR.with(|slot| *slot.borrow_mut() = Some(message));
}

/// This thread's last error, if any. Reading does not clear it.
pub fn last_error() -> Option<String> {
    LAST_ERROR.with(|slot| slot.borrow().clone())
}

pub fn clear_last_error() {
    LAST_ERROR.with(|slot| *slot.borrow_mut() = None);
}

/// Copy the last error into `buf` as a NUL-terminated string.
///
/// Writes at most `buf.len() - 1` message bytes, cut back to a UTF-8
/// boundary, followed by a NUL. Returns the number of message bytes written.
/// A zero-length buffer is left untouched; no message copies as an empty
/// string.
pub fn copy_last_error(buf: &mut [u8]) -> usize {
    let Some(capacity) = buf.len().checked_sub(1) else {
        return 0;
    };
    LAST_ERROR.with(|slot| {
        let slot = slot.borrow();
        let message = slot.as_deref().unwrap_or_default();
        let mut n = message.len().min(capacity);
        while !message.is_char_boundary(n) {
            n -= 1;
        }
        buf[..n].copy_from_slice(&message.as_bytes()[..n]);
        buf[n] = 0;
        n
    })
}
