use gl::types::*;
use lazy_static::lazy_static;
use log::{debug, error, info, warn};
use std::collections::HashSet;
use std::ffi::CStr;
use std::os::raw::c_void;
use std::sync::Mutex;

lazy_static! {
    static ref SEEN_MESSAGE_IDS: Mutex<HashSet<GLuint>> = Mutex::new(HashSet::new());
}

unsafe fn gl_string(name: GLenum) -> String {
    let ptr = gl::GetString(name);
    if ptr.is_null() {
        return "Unknown".to_string();
    }
    CStr::from_ptr(ptr as *const _).to_string_lossy().into_owned()
}

/// Affiche les informations OpenGL / GPU du contexte courant.
///
/// # Safety
/// L'appelant doit s'assurer que le contexte OpenGL est valide et actif.
pub unsafe fn show_opengl_context_info() {
    info!("🖥 OpenGL context info:");
    info!("  Vendor   : {}", gl_string(gl::VENDOR));
    info!("  Renderer : {}", gl_string(gl::RENDERER));
    info!("  OpenGL   : {}", gl_string(gl::VERSION));
    info!("  GLSL     : {}", gl_string(gl::SHADING_LANGUAGE_VERSION));

    let err = gl::GetError();
    if err != gl::NO_ERROR {
        warn!("glerror consumed after getting context info: 0x{:X}", err);
    }
}

fn should_log_message(id: GLuint) -> bool {
    match SEEN_MESSAGE_IDS.lock() {
        Ok(mut seen) => seen.insert(id),
        Err(_) => true,
    }
}

/// Callback `glDebugMessageCallback` : un seul log par identifiant de message.
extern "system" fn gl_debug_callback(
    _source: GLenum,
    type_: GLenum,
    id: GLuint,
    severity: GLenum,
    _length: GLsizei,
    message: *const GLchar,
    _user_param: *mut c_void,
) {
    if severity == gl::DEBUG_SEVERITY_NOTIFICATION || message.is_null() {
        return;
    }
    if !should_log_message(id) {
        return;
    }

    let msg = unsafe { CStr::from_ptr(message).to_string_lossy() };
    match (type_, severity) {
        (gl::DEBUG_TYPE_ERROR, _) | (_, gl::DEBUG_SEVERITY_HIGH) => {
            error!("[OpenGL] id 0x{:X}: {}", id, msg)
        }
        (_, gl::DEBUG_SEVERITY_MEDIUM) => warn!("[OpenGL] id 0x{:X}: {}", id, msg),
        _ => debug!("[OpenGL] id 0x{:X}: {}", id, msg),
    }
}

/// Branche le callback de debug OpenGL (synchrone) si le driver l'expose.
///
/// # Safety
/// Le contexte OpenGL doit être actif sur le thread appelant.
pub unsafe fn setup_opengl_debug() {
    if !gl::DebugMessageCallback::is_loaded() {
        debug!("glDebugMessageCallback unavailable, GL debug output disabled");
        return;
    }
    gl::Enable(gl::DEBUG_OUTPUT);
    gl::Enable(gl::DEBUG_OUTPUT_SYNCHRONOUS);
    gl::DebugMessageCallback(Some(gl_debug_callback), std::ptr::null());
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::ffi::CString;

    #[test]
    fn test_gl_debug_callback_logs_each_id_once() {
        let id = 0xC10D;
        let msg = CString::new("buffer object will use VIDEO memory").unwrap();

        gl_debug_callback(
            gl::DEBUG_SOURCE_API,
            gl::DEBUG_TYPE_OTHER,
            id,
            gl::DEBUG_SEVERITY_LOW,
            0,
            msg.as_ptr(),
            std::ptr::null_mut(),
        );
        assert!(SEEN_MESSAGE_IDS.lock().unwrap().contains(&id));
        assert!(!should_log_message(id));
    }

    #[test]
    fn test_notifications_are_ignored() {
        let id = 0xC10E;
        let msg = CString::new("notification").unwrap();

        gl_debug_callback(
            gl::DEBUG_SOURCE_API,
            gl::DEBUG_TYPE_OTHER,
            id,
            gl::DEBUG_SEVERITY_NOTIFICATION,
            0,
            msg.as_ptr(),
            std::ptr::null_mut(),
        );
        assert!(!SEEN_MESSAGE_IDS.lock().unwrap().contains(&id));
    }

    #[test]
    fn test_null_message_is_ignored() {
        gl_debug_callback(
            gl::DEBUG_SOURCE_API,
            gl::DEBUG_TYPE_ERROR,
            0xC10F,
            gl::DEBUG_SEVERITY_HIGH,
            0,
            std::ptr::null(),
            std::ptr::null_mut(),
        );
        assert!(!SEEN_MESSAGE_IDS.lock().unwrap().contains(&0xC10F));
    }
}
