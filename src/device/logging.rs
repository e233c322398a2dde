use std::env;

/// Debug traces controlled by MEMBENCH_DEBUG. When true, device operations
/// log what they issue to stderr.
pub fn debug_enabled() -> bool {
    let raw = env::var("MEMBENCH_DEBUG").unwrap_or_else(|_| "0".to_string());
    raw == "1" || raw.to_lowercase() == "true"
}

pub fn log(msg: &str) {
    if debug_enabled() {
        eprintln!("[DEV] {}", msg);
    }
}
