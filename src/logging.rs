#[cfg(target_arch = "wasm32")]
use web_sys::console;

/// Writes to the browser console on wasm32 and to stdout everywhere else.
pub fn log_message(s: &str) {
    #[cfg(target_arch = "wasm32")]
    console::log_1(&s.into());
    #[cfg(not(target_arch = "wasm32"))]
    println!("{}", s);
}

#[cfg(target_arch = "wasm32")]
pub fn get_time_secs() -> f64 {
    js_sys::Date::now() / 1000.0
}

#[cfg(not(target_arch = "wasm32"))]
pub fn get_time_secs() -> f64 {
    use std::time::Instant;
    static START: std::sync::OnceLock<Instant> = std::sync::OnceLock::new();
    START.get_or_init(Instant::now).elapsed().as_secs_f64()
}

macro_rules! console_log {
    ($($t:tt)*) => {
        $crate::logging::log_message(&format!($($t)*))
    }
}

pub(crate) use console_log;
