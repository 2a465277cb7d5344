//! Console Logging
//!
//! Routes the `log` facade and panics to the browser console.

pub fn init(level: log::Level) {
    console_error_panic_hook::set_once();
    if console_log::init_with_level(level).is_err() {
        // A logger is already installed (hot reload); keep it
        return;
    }
    log::debug!("[APP] logging at {}", level);
}
