// C entry points for hosts that embed the generator (e.g. a webview shell).
// Profiles go in and pathways come out as JSON strings.
use crate::core::engine::generate_pathway;
use crate::core::types::UserProfile;
use std::ffi::{c_char, CStr, CString};
use std::panic::{catch_unwind, AssertUnwindSafe};
use std::ptr;

/// Generates a pathway from a JSON-encoded profile.
///
/// Returns a JSON string owned by Rust, or null if the input is null, not
/// UTF-8 or not a profile. Free the result with `dhprimer_free_string`.
///
/// # Safety
///
/// `profile_json` must be null or point to a NUL-terminated string that stays
/// valid and unmodified for the duration of the call.
#[no_mangle]
pub unsafe extern "C" fn dhprimer_generate_pathway(profile_json: *const c_char) -> *mut c_char {
    if profile_json.is_null() {
        return ptr::null_mut();
    }
    let c_str = unsafe { CStr::from_ptr(profile_json) };
    let Ok(input) = c_str.to_str() else {
        return ptr::null_mut();
    };
    guarded(|| generate_json(input))
}

/// Releases a string returned by `dhprimer_generate_pathway`.
///
/// # Safety
///
/// `s` must be null or a pointer returned by `dhprimer_generate_pathway` that
/// has not been freed yet.
#[no_mangle]
pub unsafe extern "C" fn dhprimer_free_string(s: *mut c_char) {
    if !s.is_null() {
        unsafe {
            let _ = CString::from_raw(s);
        }
    }
}

/// Runs `produce` without letting a panic cross the C boundary.
/// Panics and `None` both come back as null.
fn guarded<F: FnOnce() -> Option<String>>(produce: F) -> *mut c_char {
    match catch_unwind(AssertUnwindSafe(produce)) {
        Ok(Some(json)) => CString::new(json).map_or(ptr::null_mut(), CString::into_raw),
        Ok(None) => ptr::null_mut(),
        Err(_) => {
            tracing::error!("Panic while generating pathway");
            ptr::null_mut()
        }
    }
}

fn generate_json(input: &str) -> Option<String> {
    let profile: UserProfile = match serde_json::from_str(input) {
        Ok(profile) => profile,
        Err(e) => {
            tracing::debug!("Rejected profile JSON: {}", e);
            return None;
        }
    };
    serde_json::to_string(&generate_pathway(&profile)).ok()
}
