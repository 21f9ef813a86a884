// Browser helpers shared by the view and the storage-backed pieces

pub fn local_storage() -> Option<web_sys::Storage> {
    web_sys::window().and_then(|win| win.local_storage().ok().flatten())
}

pub fn now_ms() -> f64 {
    js_sys::Date::now()
}

/// Seconds between two `now_ms` readings, clamped so a backgrounded tab does not deliver
/// one enormous step.
pub fn frame_dt_secs(prev_ms: f64, now_ms: f64) -> f64 {
    ((now_ms - prev_ms) / 1000.0).clamp(0.0, 0.25)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn frame_dt_is_clamped() {
        assert_eq!(frame_dt_secs(1000.0, 1016.0), 0.016);
        assert_eq!(frame_dt_secs(1000.0, 900.0), 0.0);
        assert_eq!(frame_dt_secs(0.0, 10_000.0), 0.25);
    }
}
